// FICHIER : src-server/src/commands/protocol.rs

//! Format des commandes `{ "action": ..., <payload> }` et des réponses
//! `{ "success": ..., ... }` échangées avec le panneau d'administration.

use crate::content_store::collections::RecordId;
use crate::content_store::schema::{Action, ResourceKind, ResourceSpec};
use crate::utils::{AppError, Result};
use serde_json::{json, Map, Value};

/// Message exact attendu par le panneau pour une action inconnue ou interdite.
pub const INVALID_ACTION: &str = "Invalid action";

/// Commande décodée, prête à exécuter.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create(Value),
    Update(Value),
    Delete(RecordId),
    Sync(Vec<Value>),
    Reorder(Vec<RecordId>),
}

impl Command {
    pub fn action(&self) -> Action {
        match self {
            Command::Create(_) => Action::Create,
            Command::Update(_) => Action::Update,
            Command::Delete(_) => Action::Delete,
            Command::Sync(_) => Action::Sync,
            Command::Reorder(_) => Action::Reorder,
        }
    }
}

/// Résultat d'une commande exécutée.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Record(Value),
    Removed(usize),
    Count(usize),
    /// Collection enregistrée par un sync, renvoyée sous la clé de synchronisation
    Synced(Vec<Value>),
}

impl Outcome {
    /// Réponse de succès ; l'enregistrement est rendu sous la clé de payload.
    pub fn into_reply(self, spec: &ResourceSpec) -> Value {
        match self {
            Outcome::Record(rec) => {
                let mut obj = Map::new();
                obj.insert("success".into(), Value::Bool(true));
                obj.insert(spec.payload_key.into(), rec);
                Value::Object(obj)
            }
            Outcome::Removed(n) => json!({ "success": true, "removed": n }),
            Outcome::Count(n) => json!({ "success": true, "count": n }),
            Outcome::Synced(records) => {
                let mut obj = Map::new();
                obj.insert("success".into(), Value::Bool(true));
                obj.insert("count".into(), Value::from(records.len()));
                if let Some(key) = spec.sync_key {
                    obj.insert(key.into(), Value::Array(records));
                }
                Value::Object(obj)
            }
        }
    }
}

pub fn failure_reply(message: &str) -> Value {
    json!({ "success": false, "message": message })
}

/// Décode une commande pour une ressource.
/// Action absente, inconnue ou non autorisée : `InvalidCommand("Invalid action")`.
pub fn parse_command(kind: ResourceKind, body: &Value) -> Result<Command> {
    let spec = kind.spec();

    let action = body
        .get("action")
        .and_then(Value::as_str)
        .and_then(Action::parse)
        .filter(|a| spec.permits(*a))
        .ok_or_else(|| AppError::InvalidCommand(INVALID_ACTION.to_string()))?;

    let command = match action {
        Action::Create => Command::Create(record_payload(body, spec.payload_key)?),
        Action::Update => Command::Update(record_payload(body, spec.payload_key)?),
        Action::Delete => {
            let raw = body
                .get("id")
                .ok_or_else(|| AppError::Validation("Champ 'id' manquant".into()))?;
            Command::Delete(parse_id(raw)?)
        }
        Action::Sync => {
            // permits(Sync) implique une clé de synchronisation
            let key = spec
                .sync_key
                .ok_or_else(|| AppError::InvalidCommand(INVALID_ACTION.to_string()))?;
            Command::Sync(array_payload(body, key)?.to_vec())
        }
        Action::Reorder => {
            let ids = array_payload(body, "ids")?
                .iter()
                .map(parse_id)
                .collect::<Result<Vec<_>>>()?;
            Command::Reorder(ids)
        }
    };
    Ok(command)
}

fn record_payload(body: &Value, key: &str) -> Result<Value> {
    match body.get(key) {
        Some(v @ Value::Object(_)) => Ok(v.clone()),
        Some(_) => Err(AppError::Validation(format!("Champ '{}' : objet attendu", key))),
        None => Err(AppError::Validation(format!("Champ '{}' manquant", key))),
    }
}

fn array_payload<'a>(body: &'a Value, key: &str) -> Result<&'a [Value]> {
    match body.get(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(AppError::Validation(format!("Champ '{}' : tableau attendu", key))),
        None => Err(AppError::Validation(format!("Champ '{}' manquant", key))),
    }
}

fn parse_id(raw: &Value) -> Result<RecordId> {
    RecordId::from_value(raw).ok_or_else(|| {
        AppError::Validation(format!(
            "Identifiant invalide : {} (nombre entier ou chaîne attendu)",
            raw
        ))
    })
}
