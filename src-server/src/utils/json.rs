// FICHIER : src-server/src/utils/json.rs

use crate::utils::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

// --- RE-EXPORTS (Single Source of Truth pour le JSON) ---
pub use serde_json::{json, Map, Value};

/// Parse une chaîne JSON en un type T.
/// L'erreur embarque un extrait du contenu pour aider au débogage.
pub fn parse<T: DeserializeOwned>(s: &str) -> Result<T> {
    serde_json::from_str(s).map_err(|e| {
        AppError::Validation(format!("JSON illisible ({}) : {}", e, snippet(s)))
    })
}

pub fn stringify<T: Serialize + ?Sized>(v: &T) -> Result<String> {
    Ok(serde_json::to_string(v)?)
}

/// Indentation à deux espaces, format historique des fichiers de contenu.
pub fn stringify_pretty<T: Serialize + ?Sized>(v: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(v)?)
}

pub fn from_value<T: DeserializeOwned>(v: Value) -> Result<T> {
    Ok(serde_json::from_value(v)?)
}

/// Extrait court (100 caractères max) pour les messages d'erreur et les logs.
pub fn snippet(s: &str) -> String {
    let mut out: String = s.chars().take(100).collect();
    if s.chars().count() > 100 {
        out.push('…');
    }
    out
}
