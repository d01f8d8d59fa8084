// FICHIER : src-server/src/content_store/schema/validator.rs

use super::resources::{
    Admission, Announcement, ContactMessage, Course, Download, Image, ResourceRecord, Video,
};
use super::ResourceKind;
use crate::content_store::collections::RecordId;
use crate::utils::{AppError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Vérifie qu'un enregistrement a la forme de sa ressource.
/// L'enregistrement reçu est stocké tel quel : le type ne sert qu'au contrôle.
pub fn validate_record(kind: ResourceKind, record: &Value) -> Result<()> {
    if !record.is_object() {
        return Err(AppError::Validation(format!(
            "{} : un enregistrement doit être un objet JSON",
            kind
        )));
    }

    match kind {
        ResourceKind::Courses => check::<Course>(kind, record),
        ResourceKind::Videos | ResourceKind::CourseVideos => check::<Video>(kind, record),
        ResourceKind::Announcements => check::<Announcement>(kind, record),
        ResourceKind::Gallery | ResourceKind::HeroImages => check::<Image>(kind, record),
        ResourceKind::Downloads => check::<Download>(kind, record),
        ResourceKind::Admissions => check::<Admission>(kind, record),
        ResourceKind::ContactMessages => check::<ContactMessage>(kind, record),
    }
}

/// Validation d'un remplacement complet : chaque enregistrement doit être valide
/// et porter un identifiant (nombre entier ou chaîne).
pub fn validate_collection(kind: ResourceKind, records: &[Value]) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        validate_record(kind, record)
            .map_err(|e| AppError::Validation(format!("[{}] {}", index, e.public_message())))?;

        if RecordId::of(record).is_none() {
            return Err(AppError::Validation(format!(
                "[{}] {} : identifiant 'id' manquant ou invalide",
                index, kind
            )));
        }
    }
    Ok(())
}

fn check<T>(kind: ResourceKind, record: &Value) -> Result<()>
where
    T: DeserializeOwned + ResourceRecord,
{
    let typed: T = T::deserialize(record)
        .map_err(|e| AppError::Validation(format!("{} : {}", kind, e)))?;

    let blank: Vec<&str> = typed
        .required_fields()
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

    if blank.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "{} : champs obligatoires vides : {}",
            kind,
            blank.join(", ")
        )))
    }
}
