// FICHIER : src-server/src/utils/logger.rs

use crate::utils::config::{AppConfig, PATH_LOGS};
use std::sync::Once;
use tracing_appender::rolling;
use tracing_subscriber::{
    filter::filter_fn, fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

// Évite la double initialisation (fréquent en tests)
static INIT: Once = Once::new();

/// Deux sorties : fichier JSON journalier (exploitation) + console compacte (humain).
/// RUST_LOG prime sur le `log_level` de la configuration pour la console.
pub fn init_logging() {
    INIT.call_once(|| {
        let config = AppConfig::get();

        // =========================================================================
        // LAYER 1 : FICHIER (JSON, rotation journalière)
        // =========================================================================
        let file_layer = config.get_path(PATH_LOGS).and_then(|log_dir| {
            std::fs::create_dir_all(&log_dir).ok()?;
            let file_appender = rolling::daily(&log_dir, "epsilon.log");
            Some(
                fmt::layer()
                    .json()
                    .with_writer(file_appender)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
        });

        // =========================================================================
        // LAYER 2 : CONSOLE
        // =========================================================================
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.core.log_level.as_str()));

        // Les macros user_* impriment déjà sur la console : on ne double pas leurs événements
        let anti_double_filter =
            filter_fn(|metadata| !metadata.fields().iter().any(|f| f.name() == "event"));

        let console_layer = fmt::layer()
            .compact()
            .with_target(false)
            .with_filter(env_filter)
            .with_filter(anti_double_filter);

        let registry = tracing_subscriber::registry()
            .with(file_layer)
            .with(console_layer);

        if registry.try_init().is_err() {
            tracing::warn!("[Logger] Ré-initialisation ignorée (subscriber global déjà actif).");
            return;
        }

        tracing::info!(
            env_mode = %config.core.env_mode,
            log_dir = ?config.get_path(PATH_LOGS),
            "Logger initialisé"
        );
    });
}
