// FICHIER : src-server/src/content_store/storage/seed.rs

use super::{decode_collection, CollectionStore, LoadOutcome};
use crate::utils::{AppError, Result};
use include_dir::{include_dir, Dir};
use serde::Serialize;
use tracing::{info, warn};

// --- EMBARQUEMENT DES COLLECTIONS PAR DÉFAUT ---
static DEFAULT_COLLECTIONS: Dir = include_dir!("$CARGO_MANIFEST_DIR/seed");

#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct SeedReport {
    pub deployed: Vec<String>,
    pub skipped: Vec<String>,
}

/// Noms des collections embarquées, triés.
pub fn embedded_names() -> Vec<String> {
    let mut names: Vec<String> = DEFAULT_COLLECTIONS
        .files()
        .filter_map(|f| {
            let path = f.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                return None;
            }
            path.file_stem().and_then(|s| s.to_str()).map(String::from)
        })
        .collect();
    names.sort();
    names
}

/// Contenu embarqué d'une collection par défaut.
pub fn embedded_collection(name: &str) -> Result<Vec<serde_json::Value>> {
    let file = DEFAULT_COLLECTIONS
        .get_file(format!("{name}.json"))
        .ok_or_else(|| AppError::NotFound(format!("Aucune collection par défaut '{}'", name)))?;
    let text = file
        .contents_utf8()
        .ok_or_else(|| AppError::Storage(format!("Seed '{}' non UTF-8", name)))?;

    match decode_collection(text) {
        LoadOutcome::Loaded(records) => Ok(records),
        other => Err(AppError::Storage(format!("Seed '{}' illisible : {}", name, other))),
    }
}

/// Déploie les collections embarquées dont le fichier n'existe pas encore.
/// Une collection existante (même vide ou abîmée) n'est jamais écrasée.
pub async fn seed_defaults(store: &dyn CollectionStore) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for name in embedded_names() {
        match store.load(&name).await? {
            LoadOutcome::Missing => {
                let records = embedded_collection(&name)?;
                store.save(&name, &records).await?;
                info!(collection = %name, records = records.len(), "Collection par défaut déployée");
                report.deployed.push(name);
            }
            LoadOutcome::Corrupted { reason } => {
                warn!(collection = %name, %reason, "Collection illisible laissée en place (seed ignoré)");
                report.skipped.push(name);
            }
            LoadOutcome::Loaded(_) => report.skipped.push(name),
        }
    }

    Ok(report)
}
