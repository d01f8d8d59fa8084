// FICHIER : src-server/src/main.rs

use anyhow::Context;
use epsilon::content_store::storage::seed;
use epsilon::content_store::{CollectionsManager, FileStore, StoreConfig};
use epsilon::server::{self, AppState};
use epsilon::utils::config::AppConfig;
use epsilon::utils::{init_logging, Arc};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = AppConfig::init() {
        eprintln!("❌ Erreur fatale de configuration : {}", e);
        std::process::exit(1);
    }
    println!("🚀 Démarrage du serveur de contenu Epsilon...");
    init_logging();

    let config = AppConfig::get();
    let store_config = StoreConfig::from_app_config(config)?;
    info!(data_root = ?store_config.data_root, "Stockage JSON");

    let store = Arc::new(FileStore::new(store_config));

    if config.seed_defaults {
        match seed::seed_defaults(&*store).await {
            Ok(report) if !report.deployed.is_empty() => {
                info!(deployed = ?report.deployed, "Collections par défaut déployées")
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Déploiement des collections par défaut impossible"),
        }
    }

    let manager = CollectionsManager::new(store);
    server::serve(AppState::new(manager), &config.server)
        .await
        .context("Le serveur HTTP s'est arrêté en erreur")?;

    Ok(())
}
