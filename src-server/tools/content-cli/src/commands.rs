use clap::Subcommand;
use std::path::PathBuf;

use epsilon::commands::{self as protocol, failure_reply};
use epsilon::content_store::storage::seed;
use epsilon::content_store::{
    CollectionStore, CollectionsManager, FileStore, LoadOutcome, RecordId, ResourceKind,
    StoreConfig,
};
use epsilon::{
    user_info, user_success,
    utils::{data, prelude::*, Arc},
};

// --- DÉFINITION DES ARGUMENTS ---

#[derive(Subcommand, Debug, Clone)]
pub enum ContentCommands {
    /// Liste les ressources connues et leurs clés de protocole
    Resources,

    /// Affiche une collection
    List {
        #[arg(long)]
        resource: String,
        /// Vue publique : actifs seulement, triés par `order`
        #[arg(long)]
        active: bool,
    },

    /// Ajoute un enregistrement (JSON inline ou @fichier)
    Create {
        #[arg(long)]
        resource: String,
        #[arg(long)]
        data: String,
    },

    /// Remplace l'enregistrement de même `id`
    Update {
        #[arg(long)]
        resource: String,
        #[arg(long)]
        data: String,
    },

    /// Suppression par ID (`5` = nombre, `'"5"'` ou `abc` = chaîne)
    Delete {
        #[arg(long)]
        resource: String,
        #[arg(long)]
        id: String,
    },

    /// Remplace toute la collection par le tableau du fichier
    Sync {
        #[arg(long)]
        resource: String,
        #[arg(long)]
        file: PathBuf,
    },

    /// Renumérote `order` selon la liste d'IDs (séparés par des virgules)
    Reorder {
        #[arg(long)]
        resource: String,
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,
    },

    /// Exécute une commande brute du protocole `{ "action": ... }`
    Exec {
        #[arg(long)]
        resource: String,
        #[arg(long)]
        command: String,
    },

    /// Déploie les collections par défaut manquantes
    Seed,

    /// État de chaque collection (absente / corrompue / lue)
    Check,
}

// --- HANDLER PRINCIPAL ---

pub async fn handle(root: Option<PathBuf>, command: ContentCommands) -> Result<()> {
    let data_root = match root {
        Some(p) => p,
        None => AppConfig::get().data_root()?,
    };
    debug!(?data_root, "Racine des collections");

    let store = Arc::new(FileStore::new(StoreConfig::new(data_root)));
    let manager = CollectionsManager::new(store.clone());

    match command {
        ContentCommands::Resources => {
            let table: Vec<Value> = ResourceKind::ALL
                .iter()
                .map(|k| {
                    let spec = k.spec();
                    json!({
                        "name": spec.name,
                        "payloadKey": spec.payload_key,
                        "syncKey": spec.sync_key,
                        "actions": spec.actions,
                    })
                })
                .collect();
            println!("{}", data::stringify_pretty(&table)?);
        }
        ContentCommands::List { resource, active } => {
            let kind: ResourceKind = resource.parse()?;
            let records = if active {
                manager.list_active(kind).await?
            } else {
                manager.list(kind).await?
            };
            println!("{}", data::stringify_pretty(&records)?);
        }
        ContentCommands::Create { resource, data } => {
            let kind: ResourceKind = resource.parse()?;
            let stored = manager.append(kind, parse_data(&data).await?).await?;
            let id = RecordId::of(&stored).map(|id| id.to_string()).unwrap_or_default();
            user_success!("CONTENT_CREATE_SUCCESS", "{} : {}", kind, id);
        }
        ContentCommands::Update { resource, data } => {
            let kind: ResourceKind = resource.parse()?;
            let stored = manager.update_by_id(kind, parse_data(&data).await?).await?;
            let id = RecordId::of(&stored).map(|id| id.to_string()).unwrap_or_default();
            user_success!("CONTENT_UPDATE_SUCCESS", "{} : {}", kind, id);
        }
        ContentCommands::Delete { resource, id } => {
            let kind: ResourceKind = resource.parse()?;
            let id = parse_id(&id);
            let removed = manager.delete_by_id(kind, &id).await?;
            if removed > 0 {
                user_success!("CONTENT_DELETE_SUCCESS", "{} : {} ({})", kind, id, removed);
            } else {
                user_info!("CONTENT_DELETE_NOT_FOUND", "{} : aucun enregistrement {}", kind, id);
            }
        }
        ContentCommands::Sync { resource, file } => {
            let kind: ResourceKind = resource.parse()?;
            let records = read_array(&file).await?;
            let count = manager.replace_all(kind, records).await?;
            user_success!("CONTENT_SYNC_SUCCESS", "{} : {} enregistrement(s)", kind, count);
        }
        ContentCommands::Reorder { resource, ids } => {
            let kind: ResourceKind = resource.parse()?;
            let ids: Vec<RecordId> = ids.iter().map(|s| parse_id(s)).collect();
            let count = manager.reorder(kind, &ids).await?;
            user_success!("CONTENT_REORDER_SUCCESS", "{} : {} enregistrement(s)", kind, count);
        }
        ContentCommands::Exec { resource, command } => {
            let kind: ResourceKind = resource.parse()?;
            let body = parse_data(&command).await?;
            match protocol::handle(&manager, kind, &body).await {
                Ok(reply) => println!("{}", data::stringify_pretty(&reply)?),
                Err(e) => {
                    println!(
                        "{}",
                        data::stringify_pretty(&failure_reply(&e.public_message()))?
                    );
                    return Err(e);
                }
            }
        }
        ContentCommands::Seed => {
            let report = seed::seed_defaults(&*store).await?;
            if report.deployed.is_empty() {
                user_info!("CONTENT_SEED_NOTHING", "Aucune collection à déployer");
            } else {
                user_success!("CONTENT_SEED_SUCCESS", "{}", report.deployed.join(", "));
            }
        }
        ContentCommands::Check => {
            let mut corrupted = 0;
            for kind in ResourceKind::ALL {
                let outcome = manager.inspect(kind).await?;
                if outcome.is_corrupted() {
                    corrupted += 1;
                }
                println!("{:<18} {}", kind.name(), outcome);
            }
            // Fichiers présents hors catalogue
            let known = ResourceKind::names();
            for name in store.list_names().await? {
                if !known.contains(&name.as_str()) {
                    let outcome: LoadOutcome = store.load(&name).await?;
                    println!("{:<18} {} (hors catalogue)", name, outcome);
                }
            }
            if corrupted > 0 {
                return Err(AppError::Storage(format!(
                    "{} collection(s) illisible(s)",
                    corrupted
                )));
            }
        }
    }

    Ok(())
}

// --- HELPERS ---

/// JSON inline, ou contenu d'un fichier si l'argument commence par `@`.
async fn parse_data(raw: &str) -> Result<Value> {
    match raw.strip_prefix('@') {
        Some(path) => {
            let content = tokio::fs::read_to_string(path).await?;
            data::parse(&content)
        }
        None => data::parse(raw),
    }
}

async fn read_array(path: &std::path::Path) -> Result<Vec<Value>> {
    let content = tokio::fs::read_to_string(path).await?;
    match data::parse::<Value>(&content)? {
        Value::Array(items) => Ok(items),
        _ => Err(AppError::Validation(format!(
            "{} : un tableau JSON est attendu",
            path.display()
        ))),
    }
}

/// `5` est un nombre, `"5"` (guillemets JSON) ou `abc` une chaîne.
fn parse_id(raw: &str) -> RecordId {
    serde_json::from_str::<Value>(raw)
        .ok()
        .and_then(|v| RecordId::from_value(&v))
        .unwrap_or_else(|| RecordId::Text(raw.to_string()))
}
