// FICHIER : src-server/src/utils/env.rs

use crate::utils::{AppError, Result};
use std::env;
use std::str::FromStr;

/// Variable d'environnement requise.
pub fn get(key: &str) -> Result<String> {
    env::var(key)
        .map_err(|_| AppError::Config(format!("Variable d'environnement manquante : {}", key)))
}

/// Variable optionnelle. Une valeur vide compte comme absente.
pub fn get_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

pub fn get_or(key: &str, default: &str) -> String {
    get_optional(key).unwrap_or_else(|| default.to_string())
}

/// Récupère et parse une variable (ex: EPSILON_PORT=3001).
/// `Ok(None)` si la variable est absente, erreur si elle est présente mais illisible.
pub fn get_parsed<T: FromStr>(key: &str) -> Result<Option<T>> {
    match get_optional(key) {
        None => Ok(None),
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::Config(format!(
                "Impossible de parser la variable {} (valeur : '{}')",
                key, raw
            ))
        }),
    }
}

/// Liste séparée par des virgules (ex: EPSILON_CORS_ORIGINS=http://a,http://b).
pub fn get_list(key: &str) -> Option<Vec<String>> {
    get_optional(key).map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect()
    })
}

/// Feature flag : "true", "1", "yes", "on".
pub fn is_enabled(key: &str) -> bool {
    matches!(
        get_optional(key).map(|v| v.to_ascii_lowercase()).as_deref(),
        Some("true") | Some("1") | Some("yes") | Some("on")
    )
}
