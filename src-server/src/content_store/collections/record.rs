// FICHIER : src-server/src/content_store/collections/record.rs

use crate::utils::{AppError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Identifiant d'enregistrement : nombre ou chaîne JSON.
/// Comparaison stricte : `1` et `"1"` sont deux identifiants différents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// Lit un identifiant nu (`42` ou `"abc"`).
    pub fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::Number(n) => n.as_i64().map(RecordId::Int),
            Value::String(s) => Some(RecordId::Text(s.clone())),
            _ => None,
        }
    }

    /// Identifiant porté par un enregistrement (`record.id`).
    pub fn of(record: &Value) -> Option<Self> {
        record.get("id").and_then(Self::from_value)
    }

    /// Égalité stricte avec une valeur JSON brute.
    pub fn matches(&self, v: &Value) -> bool {
        match (self, v) {
            (RecordId::Int(id), Value::Number(n)) => n.as_i64() == Some(*id),
            (RecordId::Text(id), Value::String(s)) => id == s,
            _ => false,
        }
    }

    /// Vrai si `record.id` désigne cet identifiant.
    pub fn identifies(&self, record: &Value) -> bool {
        record.get("id").is_some_and(|v| self.matches(v))
    }

    pub fn to_value(&self) -> Value {
        match self {
            RecordId::Int(n) => Value::from(*n),
            RecordId::Text(s) => Value::String(s.clone()),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(n: i64) -> Self {
        RecordId::Int(n)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        RecordId::Text(s.to_string())
    }
}

// --- ACCÈS AUX ATTRIBUTS ---

pub fn as_object_mut(record: &mut Value) -> Result<&mut Map<String, Value>> {
    record
        .as_object_mut()
        .ok_or_else(|| AppError::Validation("Un enregistrement doit être un objet JSON".into()))
}

pub fn set_id(record: &mut Value, id: &RecordId) -> Result<()> {
    as_object_mut(record)?.insert("id".to_string(), id.to_value());
    Ok(())
}

/// `order` numérique s'il existe.
pub fn order_of(record: &Value) -> Option<i64> {
    record.get("order").and_then(Value::as_i64)
}

/// Seul un `active: false` explicite masque l'enregistrement.
pub fn is_active(record: &Value) -> bool {
    record.get("active").and_then(Value::as_bool) != Some(false)
}
