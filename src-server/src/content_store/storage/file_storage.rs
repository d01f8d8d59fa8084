// FICHIER : src-server/src/content_store/storage/file_storage.rs

use super::{decode_collection, validate_name, CollectionStore, LoadOutcome, StoreConfig};
use crate::utils::{async_trait, fs, json, Result};
use serde_json::Value;
use tracing::{debug, error, instrument};

/// Backend fichiers : `{data_root}/{name}.json`.
/// Le dossier de données est créé à la première écriture.
#[derive(Debug, Clone)]
pub struct FileStore {
    pub config: StoreConfig,
}

impl FileStore {
    pub fn new(config: StoreConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl CollectionStore for FileStore {
    #[instrument(skip(self))]
    async fn load(&self, name: &str) -> Result<LoadOutcome> {
        let path = self.config.collection_path(name)?;

        let Some(raw) = fs::read_to_string_opt(&path).await? else {
            debug!(collection = name, "Fichier absent");
            return Ok(LoadOutcome::Missing);
        };

        let outcome = decode_collection(&raw);
        if let LoadOutcome::Corrupted { reason } = &outcome {
            debug!(
                collection = name,
                %reason,
                snippet = %json::snippet(&raw),
                "Contenu illisible"
            );
        }
        Ok(outcome)
    }

    #[instrument(skip(self, collection), fields(records = collection.len()))]
    async fn save(&self, name: &str, collection: &[Value]) -> Result<()> {
        let path = self.config.collection_path(name)?;
        if let Err(e) = fs::write_json_atomic(&path, collection).await {
            error!(collection = name, error = %e, "Échec d'écriture de la collection");
            return Err(e);
        }
        Ok(())
    }

    async fn list_names(&self) -> Result<Vec<String>> {
        let root = &self.config.data_root;
        let mut out = Vec::new();
        if !fs::exists(root).await {
            return Ok(out);
        }

        let mut entries = fs::read_dir(root).await?;
        while let Some(entry) = entries.next_entry().await? {
            let p = entry.path();
            if !entry.file_type().await?.is_file()
                || p.extension().and_then(|s| s.to_str()) != Some("json")
            {
                continue;
            }
            if let Some(stem) = p.file_stem().and_then(|s| s.to_str()) {
                if validate_name(stem).is_ok() {
                    out.push(stem.to_string());
                }
            }
        }
        out.sort();
        Ok(out)
    }
}
