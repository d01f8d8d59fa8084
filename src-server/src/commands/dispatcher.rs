// FICHIER : src-server/src/commands/dispatcher.rs

use super::protocol::{self, Command, Outcome};
use crate::content_store::collections::CollectionsManager;
use crate::content_store::schema::ResourceKind;
use crate::utils::Result;
use serde_json::Value;
use tracing::{debug, instrument};

/// Exécute une commande déjà décodée.
pub async fn execute(
    manager: &CollectionsManager,
    kind: ResourceKind,
    command: Command,
) -> Result<Outcome> {
    let outcome = match command {
        Command::Create(record) => Outcome::Record(manager.append(kind, record).await?),
        Command::Update(record) => Outcome::Record(manager.update_by_id(kind, record).await?),
        Command::Delete(id) => Outcome::Removed(manager.delete_by_id(kind, &id).await?),
        Command::Sync(records) => {
            manager.replace_all(kind, records.clone()).await?;
            Outcome::Synced(records)
        }
        Command::Reorder(ids) => Outcome::Count(manager.reorder(kind, &ids).await?),
    };
    Ok(outcome)
}

/// Décodage + exécution + mise en forme de la réponse de succès.
/// Une commande invalide échoue avant tout accès au stockage.
#[instrument(skip(manager, body), fields(resource = %kind))]
pub async fn handle(manager: &CollectionsManager, kind: ResourceKind, body: &Value) -> Result<Value> {
    let command = protocol::parse_command(kind, body)?;
    debug!(action = %command.action(), "Commande reçue");

    let outcome = execute(manager, kind, command).await?;
    Ok(outcome.into_reply(&kind.spec()))
}
