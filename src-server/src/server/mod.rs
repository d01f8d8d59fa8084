// FICHIER : src-server/src/server/mod.rs

pub mod handlers;
pub mod response;

use crate::content_store::CollectionsManager;
use crate::utils::config::ServerConfig;
use crate::utils::Result;

use axum::body::Body;
use axum::extract::Request;
use axum::http::{header::HeaderName, HeaderValue, Method};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// État partagé des handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub manager: CollectionsManager,
}

impl AppState {
    pub fn new(manager: CollectionsManager) -> Self {
        Self { manager }
    }
}

/// Identifiant de requête, posé en extension avant la trace.
#[derive(Debug, Clone, Copy)]
pub struct RequestId(pub Uuid);

pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    let trace = TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
        let request_id = req
            .extensions()
            .get::<RequestId>()
            .map(|r| r.0.to_string())
            .unwrap_or_default();
        tracing::info_span!(
            "http.request",
            request_id = %request_id,
            method = %req.method(),
            uri = %req.uri(),
        )
    });

    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/{resource}",
            get(handlers::list_resource).post(handlers::post_command),
        )
        .with_state(state)
        .layer(trace)
        .layer(cors_layer(cors_origins))
        .layer(middleware::from_fn(assign_request_id))
}

async fn assign_request_id(mut request: Request, next: Next) -> Response {
    let id = Uuid::new_v4();
    request.extensions_mut().insert(RequestId(id));

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
        response
            .headers_mut()
            .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
    }
    response
}

/// Le site public est servi depuis une autre origine. "*" autorise tout.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "Origine CORS ignorée (invalide)");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}

/// Écoute sur `host:port` jusqu'à Ctrl+C.
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(address = %listener.local_addr()?, "Serveur de contenu à l'écoute");

    axum::serve(listener, router(state, &config.cors_origins))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Serveur arrêté");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Signal d'arrêt indisponible : arrêt manuel requis");
        std::future::pending::<()>().await;
    }
    info!("Arrêt demandé");
}
