// FICHIER : src-server/src/content_store/storage/memory.rs

use super::{decode_collection, validate_name, CollectionStore, LoadOutcome};
use crate::utils::{async_trait, json, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Double de test : les collections vivent en mémoire sous forme de texte brut,
/// décodé à chaque lecture comme le ferait le backend fichiers.
#[derive(Debug, Default)]
pub struct MemoryStore {
    raw: RwLock<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dépose un contenu arbitraire (ex: JSON tronqué) pour simuler un fichier abîmé.
    pub async fn plant_raw(&self, name: &str, content: &str) -> Result<()> {
        validate_name(name)?;
        self.raw
            .write()
            .await
            .insert(name.to_string(), content.to_string());
        Ok(())
    }

    /// Texte actuellement stocké (tel qu'il serait sur disque).
    pub async fn raw(&self, name: &str) -> Option<String> {
        self.raw.read().await.get(name).cloned()
    }
}

#[async_trait]
impl CollectionStore for MemoryStore {
    async fn load(&self, name: &str) -> Result<LoadOutcome> {
        validate_name(name)?;
        Ok(match self.raw.read().await.get(name) {
            Some(text) => decode_collection(text),
            None => LoadOutcome::Missing,
        })
    }

    async fn save(&self, name: &str, collection: &[Value]) -> Result<()> {
        validate_name(name)?;
        let text = json::stringify_pretty(collection)?;
        self.raw.write().await.insert(name.to_string(), text);
        Ok(())
    }

    async fn list_names(&self) -> Result<Vec<String>> {
        // BTreeMap : déjà trié
        Ok(self.raw.read().await.keys().cloned().collect())
    }
}
