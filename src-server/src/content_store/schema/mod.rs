// FICHIER : src-server/src/content_store/schema/mod.rs

//! Catalogue des ressources : nom de fichier, clés du protocole,
//! stratégie d'identifiant, actions autorisées et schéma typé.

pub mod resources;
pub mod validator;

use crate::content_store::collections::{IdStrategy, InsertPosition};
use crate::utils::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use validator::{validate_collection, validate_record};

/// Sélecteur d'opération d'une commande.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Create,
    Update,
    Delete,
    Sync,
    Reorder,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Create,
        Action::Update,
        Action::Delete,
        Action::Sync,
        Action::Reorder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
            Action::Sync => "sync",
            Action::Reorder => "reorder",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.as_str() == s)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    Courses,
    Videos,
    CourseVideos,
    Announcements,
    Gallery,
    HeroImages,
    Downloads,
    Admissions,
    ContactMessages,
}

/// Métadonnées d'une ressource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    /// Nom de la collection (et du fichier `<name>.json`)
    pub name: &'static str,
    /// Clé de l'enregistrement pour create / update
    pub payload_key: &'static str,
    /// Clé du tableau pour sync (None : pas de remplacement en masse)
    pub sync_key: Option<&'static str>,
    pub id_strategy: IdStrategy,
    pub position: InsertPosition,
    pub actions: &'static [Action],
}

impl ResourceSpec {
    pub fn permits(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }

    /// Les ressources réordonnables portent un attribut `order`.
    pub fn is_ordered(&self) -> bool {
        self.permits(Action::Reorder)
    }
}

const EDITABLE: &[Action] = &[Action::Create, Action::Update, Action::Delete, Action::Sync];
const ORDERED: &[Action] = &[
    Action::Create,
    Action::Update,
    Action::Delete,
    Action::Sync,
    Action::Reorder,
];
// Formulaires publics : dépôt seulement
const SUBMIT_ONLY: &[Action] = &[Action::Create];

impl ResourceKind {
    pub const ALL: [ResourceKind; 9] = [
        ResourceKind::Courses,
        ResourceKind::Videos,
        ResourceKind::CourseVideos,
        ResourceKind::Announcements,
        ResourceKind::Gallery,
        ResourceKind::HeroImages,
        ResourceKind::Downloads,
        ResourceKind::Admissions,
        ResourceKind::ContactMessages,
    ];

    pub fn spec(self) -> ResourceSpec {
        use IdStrategy::*;
        use InsertPosition::*;
        let (name, payload_key, sync_key, id_strategy, position, actions) = match self {
            ResourceKind::Courses => ("courses", "course", Some("courses"), EpochMillis, Back, EDITABLE),
            ResourceKind::Videos => ("videos", "video", Some("videos"), EpochMillisString, Front, EDITABLE),
            ResourceKind::CourseVideos => (
                "course-videos",
                "video",
                Some("videos"),
                EpochMillisString,
                Front,
                EDITABLE,
            ),
            ResourceKind::Announcements => (
                "announcements",
                "announcement",
                Some("announcements"),
                MaxPlusOne,
                Back,
                ORDERED,
            ),
            ResourceKind::Gallery => ("gallery", "image", Some("images"), MaxPlusOne, Back, ORDERED),
            ResourceKind::HeroImages => ("hero-images", "image", Some("images"), MaxPlusOne, Back, ORDERED),
            ResourceKind::Downloads => ("downloads", "download", Some("downloads"), MaxPlusOne, Back, EDITABLE),
            ResourceKind::Admissions => ("admissions", "admission", None, EpochMillis, Back, SUBMIT_ONLY),
            ResourceKind::ContactMessages => ("contact-messages", "message", None, EpochMillis, Back, SUBMIT_ONLY),
        };
        ResourceSpec {
            name,
            payload_key,
            sync_key,
            id_strategy,
            position,
            actions,
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.name()).collect()
    }
}

impl FromStr for ResourceKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| AppError::NotFound(format!("Ressource inconnue : '{}'", s)))
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
