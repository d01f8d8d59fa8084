// FICHIER : src-server/src/content_store/collections/ids.rs

use super::record::RecordId;
use crate::utils::{AppError, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Fabrication des identifiants à la création.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IdStrategy {
    /// Horloge murale en millisecondes (nombre JSON)
    EpochMillis,
    /// Idem, en chaîne décimale
    EpochMillisString,
    /// 1 + plus grand identifiant numérique (1 si vide)
    MaxPlusOne,
}

/// Où le nouvel enregistrement entre dans le tableau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsertPosition {
    Back,
    Front,
}

impl InsertPosition {
    pub fn insert(self, collection: &mut Vec<Value>, record: Value) {
        match self {
            InsertPosition::Back => collection.push(record),
            InsertPosition::Front => collection.insert(0, record),
        }
    }
}

impl IdStrategy {
    pub fn mint(self, collection: &[Value]) -> Result<RecordId> {
        self.mint_at(collection, Utc::now().timestamp_millis())
    }

    /// `now_ms` explicite pour les tests. Deux créations dans la même milliseconde
    /// ne doivent pas produire le même identifiant : on avance jusqu'au premier libre.
    /// Plus aucun entier disponible après le plus grand identifiant : erreur de validation.
    pub fn mint_at(self, collection: &[Value], now_ms: i64) -> Result<RecordId> {
        match self {
            IdStrategy::MaxPlusOne => {
                let max = max_numeric_id(collection).max(0);
                max.checked_add(1)
                    .map(RecordId::Int)
                    .ok_or_else(|| exhausted(max))
            }
            IdStrategy::EpochMillis | IdStrategy::EpochMillisString => {
                let mut candidate = now_ms;
                loop {
                    let id = if self == IdStrategy::EpochMillis {
                        RecordId::Int(candidate)
                    } else {
                        RecordId::Text(candidate.to_string())
                    };
                    if !collection.iter().any(|r| id.identifies(r)) {
                        return Ok(id);
                    }
                    candidate = candidate.checked_add(1).ok_or_else(|| exhausted(candidate))?;
                }
            }
        }
    }
}

fn exhausted(last: i64) -> AppError {
    AppError::Validation(format!(
        "Aucun identifiant disponible après {} : renuméroter la collection",
        last
    ))
}

fn max_numeric_id(collection: &[Value]) -> i64 {
    collection
        .iter()
        .filter_map(|r| r.get("id").and_then(Value::as_i64))
        .max()
        .unwrap_or(0)
}
