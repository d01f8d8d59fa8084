// FICHIER : src-server/src/content_store/collections/lock_manager.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Gestionnaire de verrous (granularité : Collection).
/// Le verrou est tenu pendant tout le cycle load -> transformation -> save.
#[derive(Debug, Default, Clone)]
pub struct LockManager {
    // Clé = nom de la ressource
    locks: Arc<Mutex<HashMap<String, Arc<AsyncMutex<()>>>>>,
}

impl LockManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Verrou partagé d'une collection (créé à la demande).
    pub fn lock_for(&self, collection: &str) -> Arc<AsyncMutex<()>> {
        // La map ne contient que des Arc : un empoisonnement ne la laisse pas incohérente
        let mut map = self.locks.lock().unwrap_or_else(|p| p.into_inner());
        map.entry(collection.to_string())
            .or_insert_with(|| Arc::new(AsyncMutex::new(())))
            .clone()
    }

    /// Attend puis prend l'exclusivité sur la collection.
    pub async fn acquire(&self, collection: &str) -> OwnedMutexGuard<()> {
        self.lock_for(collection).lock_owned().await
    }

    pub fn len(&self) -> usize {
        self.locks.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
