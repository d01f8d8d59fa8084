// FICHIER : src-server/src/server/handlers.rs

use super::AppState;
use crate::commands;
use crate::content_store::schema::ResourceKind;
use crate::utils::{json, AppError, Result};
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "epsilon-content";

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// Vue publique : actifs seulement, triés par `order`
    #[serde(default)]
    pub active: bool,
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": SERVICE_NAME }))
}

/// GET /api/{resource}
pub async fn list_resource(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Value>>> {
    let kind: ResourceKind = resource.parse()?;
    let records = if params.active {
        state.manager.list_active(kind).await?
    } else {
        state.manager.list(kind).await?
    };
    Ok(Json(records))
}

/// POST /api/{resource} : protocole de commandes du panneau.
/// Le corps est lu brut pour qu'un JSON invalide reçoive une réponse du protocole.
pub async fn post_command(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    body: Bytes,
) -> Result<Json<Value>> {
    let kind: ResourceKind = resource.parse()?;
    let body: Value = serde_json::from_slice(&body).map_err(|e| {
        AppError::InvalidCommand(format!(
            "Corps JSON invalide : {} ({})",
            e,
            json::snippet(&String::from_utf8_lossy(&body))
        ))
    })?;

    let reply = commands::handle(&state.manager, kind, &body).await?;
    Ok(Json(reply))
}
