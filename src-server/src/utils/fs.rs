// FICHIER : src-server/src/utils/fs.rs

use crate::utils::{json, AppError, Result};
use serde::Serialize;
use std::io::ErrorKind;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::instrument;
use uuid::Uuid;

// --- RE-EXPORTS (Isolation de la couche OS) ---
pub use std::path::{Path, PathBuf};
pub use tokio::fs::{DirEntry, ReadDir};

pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

/// Crée le dossier (et ses parents) s'il n'existe pas.
pub async fn ensure_dir(path: &Path) -> Result<()> {
    if !exists(path).await {
        fs::create_dir_all(path).await?;
    }
    Ok(())
}

pub async fn read_dir(path: &Path) -> Result<ReadDir> {
    Ok(fs::read_dir(path).await?)
}

/// Lit un fichier texte. `Ok(None)` si le fichier n'existe pas.
/// Les autres erreurs d'I/O (droits, dossier à la place du fichier...) remontent.
#[instrument(skip(path), fields(path = ?path))]
pub async fn read_to_string_opt(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(AppError::Io(e)),
    }
}

// --- ÉCRITURE ATOMIQUE ---

/// Écriture atomique sécurisée (write -> sync -> rename).
/// Un processus interrompu laisse soit l'ancienne version, soit la nouvelle.
/// Chaque écriture a son propre fichier temporaire : des écritures concurrentes
/// sur la même cible aboutissent toutes, la dernière renommée gagne.
#[instrument(skip(content, path), fields(path = ?path, bytes = content.len()))]
pub async fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent).await?;
    }

    let tmp_path = temp_path_for(path);
    {
        let mut file = fs::File::create(&tmp_path).await?;
        file.write_all(content).await?;
        // On force l'écriture physique avant le rename
        file.sync_all().await?;
    }

    if let Err(e) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(AppError::Io(e));
    }
    Ok(())
}

/// `<dossier>/<nom>.<uuid>.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!("{}.{}.tmp", stem, Uuid::new_v4().simple()))
}

pub async fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let content = json::stringify_pretty(value)?;
    write_atomic(path, content.as_bytes()).await
}
