// FICHIER : src-server/src/utils/error.rs

use serde::Serialize;
use std::io;

// --- RE-EXPORTS ANYHOW (Pour la flexibilité des binaires) ---
pub use anyhow::{anyhow, Context};

/// Type de résultat standard du backend de contenu.
pub type Result<T> = std::result::Result<T, AppError>;

/// Enumération centrale des erreurs.
/// `thiserror` fournit l'affichage et les conversions automatiques via `?`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Erreur de configuration : {0}")]
    Config(String),

    #[error("Erreur d'entrée/sortie : {0}")]
    Io(#[from] io::Error),

    #[error("Erreur de stockage : {0}")]
    Storage(String),

    #[error("Données invalides : {0}")]
    Validation(String),

    #[error("Introuvable : {0}")]
    NotFound(String),

    #[error("Commande invalide : {0}")]
    InvalidCommand(String),

    #[error("Erreur de sérialisation : {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Erreur Système : {0}")]
    System(#[from] anyhow::Error),
}

impl AppError {
    /// Message renvoyé au client dans le champ `message` des réponses.
    /// Les erreurs « métier » exposent leur texte brut, les autres leur affichage complet.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg) | AppError::NotFound(msg) | AppError::InvalidCommand(msg) => {
                msg.clone()
            }
            other => other.to_string(),
        }
    }

    /// Vrai pour les erreurs imputables à la requête (et non au serveur).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::NotFound(_) | AppError::InvalidCommand(_)
        )
    }
}

// Les erreurs remontent dans des réponses JSON : on les sérialise en simple chaîne.
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

// Permet de faire : return Err(format!("...").into());
impl From<String> for AppError {
    fn from(s: String) -> Self {
        AppError::System(anyhow::anyhow!(s))
    }
}

impl From<&str> for AppError {
    fn from(s: &str) -> Self {
        AppError::System(anyhow::anyhow!(s.to_string()))
    }
}
