// FICHIER : src-server/src/content_store/storage/mod.rs

//! Couche physique : une collection = un fichier JSON (tableau) par ressource.
//! Lecture et écriture se font toujours sur la collection entière.

pub mod file_storage;
pub mod memory;
pub mod seed;

use crate::utils::{async_trait, AppConfig, AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

pub use file_storage::FileStore;
pub use memory::MemoryStore;

/// Contenu d'une collection : tableau ordonné d'enregistrements.
pub type Collection = Vec<Value>;

// --- CONFIGURATION ---

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub data_root: PathBuf,
}

impl StoreConfig {
    pub fn new(data_root: PathBuf) -> Self {
        Self { data_root }
    }

    pub fn from_app_config(config: &AppConfig) -> Result<Self> {
        Ok(Self::new(config.data_root()?))
    }

    /// Fichier d'une collection : {data_root}/{name}.json
    pub fn collection_path(&self, name: &str) -> Result<PathBuf> {
        validate_name(name)?;
        Ok(self.data_root.join(format!("{name}.json")))
    }
}

/// Un nom de ressource devient un nom de fichier : `[a-z0-9][a-z0-9_-]*`.
/// Rejette tout ce qui pourrait sortir du dossier de données.
pub fn validate_name(name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_lowercase() || first.is_ascii_digit())
                && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Nom de collection invalide : '{}'",
            name
        )))
    }
}

// --- RÉSULTAT DE LECTURE ---

/// Distingue « jamais écrite », « illisible » et « lue ».
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    Loaded(Collection),
    Missing,
    Corrupted { reason: String },
}

impl LoadOutcome {
    /// Comportement historique : absente ou corrompue = collection vide.
    pub fn into_collection(self) -> Collection {
        match self {
            LoadOutcome::Loaded(records) => records,
            LoadOutcome::Missing | LoadOutcome::Corrupted { .. } => Vec::new(),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, LoadOutcome::Missing)
    }

    pub fn is_corrupted(&self) -> bool {
        matches!(self, LoadOutcome::Corrupted { .. })
    }
}

impl fmt::Display for LoadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadOutcome::Loaded(records) => write!(f, "Loaded({})", records.len()),
            LoadOutcome::Missing => write!(f, "Missing"),
            LoadOutcome::Corrupted { reason } => write!(f, "Corrupted ({})", reason),
        }
    }
}

/// Décode le texte brut d'un fichier de collection.
/// Seul un tableau JSON au premier niveau est une collection valide.
pub fn decode_collection(raw: &str) -> LoadOutcome {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(records)) => LoadOutcome::Loaded(records),
        Ok(other) => LoadOutcome::Corrupted {
            reason: format!(
                "le document racine n'est pas un tableau ({})",
                json_kind(&other)
            ),
        },
        Err(e) => LoadOutcome::Corrupted {
            reason: e.to_string(),
        },
    }
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "booléen",
        Value::Number(_) => "nombre",
        Value::String(_) => "chaîne",
        Value::Array(_) => "tableau",
        Value::Object(_) => "objet",
    }
}

// --- INTERFACE DE STOCKAGE ---

/// Interface injectée dans le manager et les handlers HTTP.
/// Aucune synchronisation ici : `load` puis `save` n'est pas atomique.
#[async_trait]
pub trait CollectionStore: Send + Sync + fmt::Debug {
    async fn load(&self, name: &str) -> Result<LoadOutcome>;

    /// Écrase la collection entière.
    async fn save(&self, name: &str, collection: &[Value]) -> Result<()>;

    /// Noms des collections présentes, triés.
    async fn list_names(&self) -> Result<Vec<String>>;
}
