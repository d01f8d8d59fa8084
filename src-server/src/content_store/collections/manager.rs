// FICHIER : src-server/src/content_store/collections/manager.rs

use super::lock_manager::LockManager;
use super::record::{self, RecordId};
use crate::content_store::schema::{self, ResourceKind};
use crate::content_store::storage::{CollectionStore, LoadOutcome};
use crate::utils::{AppError, Arc, Result};

use serde_json::Value;
use tracing::{debug, info, instrument, warn};

/// Opérations dérivées (load -> transformation -> save) sur les collections.
/// Chaque écriture tient le verrou de sa ressource du début à la fin.
#[derive(Debug, Clone)]
pub struct CollectionsManager {
    store: Arc<dyn CollectionStore>,
    locks: LockManager,
}

impl CollectionsManager {
    pub fn new(store: Arc<dyn CollectionStore>) -> Self {
        Self {
            store,
            locks: LockManager::new(),
        }
    }

    pub fn store(&self) -> &Arc<dyn CollectionStore> {
        &self.store
    }

    // --- MÉTHODES DE LECTURE ---

    /// Résultat brut du stockage (absente / corrompue / lue).
    pub async fn inspect(&self, kind: ResourceKind) -> Result<LoadOutcome> {
        self.store.load(kind.name()).await
    }

    pub async fn list(&self, kind: ResourceKind) -> Result<Vec<Value>> {
        self.load_collection(kind).await
    }

    /// Vue du site public : enregistrements actifs, triés par `order` (tri stable,
    /// sans `order` en dernier).
    pub async fn list_active(&self, kind: ResourceKind) -> Result<Vec<Value>> {
        let mut records: Vec<Value> = self
            .load_collection(kind)
            .await?
            .into_iter()
            .filter(record::is_active)
            .collect();
        records.sort_by_key(|r| record::order_of(r).unwrap_or(i64::MAX));
        Ok(records)
    }

    // --- ÉCRITURE ET MISE À JOUR ---

    /// Ajoute un enregistrement. L'identifiant est toujours fabriqué ici,
    /// celui éventuellement fourni est écrasé.
    #[instrument(skip(self, record), fields(resource = %kind))]
    pub async fn append(&self, kind: ResourceKind, mut record: Value) -> Result<Value> {
        schema::validate_record(kind, &record)?;
        let spec = kind.spec();

        let _guard = self.locks.acquire(spec.name).await;
        let mut collection = self.load_collection(kind).await?;

        let id = spec.id_strategy.mint(&collection)?;
        record::set_id(&mut record, &id)?;
        spec.position.insert(&mut collection, record.clone());

        self.store.save(spec.name, &collection).await?;
        info!(resource = spec.name, %id, records = collection.len(), "Enregistrement ajouté");
        Ok(record)
    }

    /// Supprime tous les enregistrements portant `id`. La collection est réécrite
    /// même si rien ne correspond.
    #[instrument(skip(self), fields(resource = %kind))]
    pub async fn delete_by_id(&self, kind: ResourceKind, id: &RecordId) -> Result<usize> {
        let name = kind.name();
        let _guard = self.locks.acquire(name).await;

        let mut collection = self.load_collection(kind).await?;
        let before = collection.len();
        collection.retain(|r| !id.identifies(r));
        let removed = before - collection.len();

        self.store.save(name, &collection).await?;
        info!(resource = name, %id, removed, "Suppression");
        Ok(removed)
    }

    /// Remplace intégralement le premier enregistrement de même `id`.
    /// Aucun enregistrement correspondant : `NotFound`, rien n'est écrit.
    #[instrument(skip(self, record), fields(resource = %kind))]
    pub async fn update_by_id(&self, kind: ResourceKind, record: Value) -> Result<Value> {
        schema::validate_record(kind, &record)?;
        let id = RecordId::of(&record).ok_or_else(|| {
            AppError::Validation(format!("{} : identifiant 'id' manquant ou invalide", kind))
        })?;

        let name = kind.name();
        let _guard = self.locks.acquire(name).await;
        let mut collection = self.load_collection(kind).await?;

        let Some(slot) = collection.iter_mut().find(|r| id.identifies(r)) else {
            return Err(AppError::NotFound(format!("{} : aucun enregistrement {}", kind, id)));
        };
        *slot = record.clone();

        self.store.save(name, &collection).await?;
        info!(resource = name, %id, "Enregistrement mis à jour");
        Ok(record)
    }

    /// Remplacement en masse (sync) : le contenu précédent est abandonné.
    #[instrument(skip(self, records), fields(resource = %kind, records = records.len()))]
    pub async fn replace_all(&self, kind: ResourceKind, records: Vec<Value>) -> Result<usize> {
        schema::validate_collection(kind, &records)?;

        let name = kind.name();
        let _guard = self.locks.acquire(name).await;
        self.store.save(name, &records).await?;
        info!(resource = name, records = records.len(), "Collection remplacée");
        Ok(records.len())
    }

    /// Renumérote `order` (1..n) en suivant `ids` ; les enregistrements non cités
    /// gardent leur ordre relatif et passent après. Le tableau suit le nouvel ordre.
    #[instrument(skip(self, ids), fields(resource = %kind))]
    pub async fn reorder(&self, kind: ResourceKind, ids: &[RecordId]) -> Result<usize> {
        if !kind.spec().is_ordered() {
            return Err(AppError::InvalidCommand(format!(
                "{} : ressource sans attribut 'order'",
                kind
            )));
        }

        let name = kind.name();
        let _guard = self.locks.acquire(name).await;
        let collection = self.load_collection(kind).await?;

        let mut slots: Vec<Option<Value>> = collection.into_iter().map(Some).collect();
        let mut ordered = Vec::with_capacity(slots.len());
        for id in ids {
            // Identifiants inconnus ou répétés : ignorés
            if let Some(slot) = slots
                .iter_mut()
                .find(|s| s.as_ref().is_some_and(|r| id.identifies(r)))
            {
                ordered.extend(slot.take());
            }
        }
        ordered.extend(slots.into_iter().flatten());

        for (index, rec) in ordered.iter_mut().enumerate() {
            record::as_object_mut(rec)?.insert("order".to_string(), Value::from(index as i64 + 1));
        }

        self.store.save(name, &ordered).await?;
        info!(resource = name, records = ordered.len(), "Collection réordonnée");
        Ok(ordered.len())
    }

    // --- HELPERS ---

    /// Absente ou illisible : collection vide. Une corruption est signalée, jamais levée.
    async fn load_collection(&self, kind: ResourceKind) -> Result<Vec<Value>> {
        let outcome = self.store.load(kind.name()).await?;
        match &outcome {
            LoadOutcome::Corrupted { reason } => {
                warn!(resource = %kind, %reason, "Collection illisible : traitée comme vide")
            }
            other => debug!(resource = %kind, outcome = %other, "Chargement"),
        }
        Ok(outcome.into_collection())
    }
}
