// FICHIER : src-server/src/utils/config.rs

use crate::utils::{env, fs, json, AppError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::OnceLock;

/// Singleton global pour la configuration
static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Identifiants des chemins connus (clés de `paths`)
pub const PATH_DATA: &str = "PATH_EPSILON_DATA";
pub const PATH_LOGS: &str = "PATH_EPSILON_LOGS";

/// Fichier de configuration lu au démarrage (surchargé par EPSILON_CONFIG)
pub const DEFAULT_CONFIG_FILE: &str = "config/epsilon.json";

pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub name: Option<String>,

    pub core: CoreConfig,

    #[serde(default)]
    pub server: ServerConfig,

    // Accepte une Map ou une liste [{id, value}]
    #[serde(default, deserialize_with = "deserialize_paths_flexible")]
    pub paths: HashMap<String, String>,

    /// Déploie les collections embarquées manquantes au démarrage
    #[serde(default)]
    pub seed_defaults: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoreConfig {
    pub env_mode: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Origines autorisées pour le site public ("*" = toutes)
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: DEFAULT_PORT,
            cors_origins: vec!["http://localhost:3000".to_string()],
        }
    }
}

// --- HELPERS SERDE ---

fn default_log_level() -> String {
    "info".to_string()
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}

fn deserialize_paths_flexible<'de, D>(
    deserializer: D,
) -> std::result::Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v: Value = Deserialize::deserialize(deserializer)?;
    let mut paths = HashMap::new();

    match v {
        Value::Object(map) => {
            for (key, val) in map {
                if let Some(s) = val.as_str() {
                    paths.insert(key, s.to_string());
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                let id = item.get("id").and_then(|v| v.as_str());
                let val = item.get("value").and_then(|v| v.as_str());
                if let (Some(k), Some(v)) = (id, val) {
                    paths.insert(k.to_string(), v.to_string());
                }
            }
        }
        Value::Null => {}
        _ => {
            return Err(serde::de::Error::custom(
                "Format de 'paths' invalide : attendu Map ou Liste",
            ))
        }
    }
    Ok(paths)
}

// --- IMPLÉMENTATION PRINCIPALE ---

impl AppConfig {
    /// Charge la configuration une seule fois pour tout le processus.
    pub fn init() -> Result<()> {
        if CONFIG.get().is_some() {
            return Ok(());
        }

        // .env optionnel (développement local)
        let _ = dotenvy::dotenv();

        let config = Self::load(&Self::target_env())?;

        // Une initialisation concurrente a pu gagner la course : on garde la première.
        let _ = CONFIG.set(config);
        Ok(())
    }

    /// Configuration active. Sans `init()` préalable, on retombe sur les valeurs par défaut.
    pub fn get() -> &'static AppConfig {
        CONFIG.get_or_init(|| Self::defaults(&Self::target_env()))
    }

    pub fn get_path(&self, id: &str) -> Option<PathBuf> {
        self.paths.get(id).map(PathBuf::from)
    }

    pub fn data_root(&self) -> Result<PathBuf> {
        self.get_path(PATH_DATA)
            .ok_or_else(|| AppError::Config(format!("Chemin {} non défini", PATH_DATA)))
    }

    pub fn is_test(&self) -> bool {
        self.core.env_mode == "test"
    }

    fn target_env() -> String {
        if cfg!(test) {
            "test".to_string()
        } else if let Some(mode) = env::get_optional("EPSILON_ENV_MODE") {
            mode
        } else if cfg!(debug_assertions) {
            "development".to_string()
        } else {
            "production".to_string()
        }
    }

    /// Charge la configuration d'un environnement donné (hors singleton).
    pub fn load(env_mode: &str) -> Result<Self> {
        if env_mode == "test" {
            return Ok(Self::load_test_sandbox());
        }

        let path = PathBuf::from(env::get_or("EPSILON_CONFIG", DEFAULT_CONFIG_FILE));
        let mut config = match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_json_str(&content).map_err(|e| {
                AppError::Config(format!("{} : {}", path.display(), e.public_message()))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Self::defaults(env_mode),
            Err(e) => return Err(AppError::Io(e)),
        };

        // Le fichier peut omettre des chemins : on complète avec les défauts
        for (key, val) in Self::defaults(env_mode).paths {
            config.paths.entry(key).or_insert(val);
        }

        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        json::parse(content)
    }

    /// Surcharges par variables d'environnement (priorité maximale).
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(host) = env::get_optional("EPSILON_HOST") {
            self.server.host = host;
        }
        if let Some(port) = env::get_parsed::<u16>("EPSILON_PORT")? {
            self.server.port = port;
        }
        if let Some(origins) = env::get_list("EPSILON_CORS_ORIGINS") {
            self.server.cors_origins = origins;
        }
        if let Some(level) = env::get_optional("EPSILON_LOG_LEVEL") {
            self.core.log_level = level;
        }
        for key in [PATH_DATA, PATH_LOGS] {
            if let Some(val) = env::get_optional(key) {
                self.paths.insert(key.to_string(), val);
            }
        }
        if env::get_optional("EPSILON_SEED").is_some() {
            self.seed_defaults = env::is_enabled("EPSILON_SEED");
        }
        Ok(())
    }

    pub fn defaults(env_mode: &str) -> Self {
        if env_mode == "test" {
            return Self::load_test_sandbox();
        }

        let mut paths = HashMap::new();
        paths.insert(PATH_DATA.to_string(), "data".to_string());
        paths.insert(PATH_LOGS.to_string(), "data/_logs".to_string());

        AppConfig {
            name: Some("Epsilon Content".to_string()),
            core: CoreConfig {
                env_mode: env_mode.to_string(),
                log_level: default_log_level(),
            },
            server: ServerConfig::default(),
            paths,
            seed_defaults: env_mode == "development",
        }
    }

    /// Bac à sable de test : chemins uniques dans le dossier temporaire.
    fn load_test_sandbox() -> Self {
        let unique_id = format!(
            "epsilon_test_{}_{}",
            std::process::id(),
            chrono::Utc::now().timestamp_micros()
        );
        let root = std::env::temp_dir().join(unique_id);

        let mut paths = HashMap::new();
        paths.insert(
            PATH_DATA.to_string(),
            root.join("data").to_string_lossy().to_string(),
        );
        paths.insert(
            PATH_LOGS.to_string(),
            root.join("logs").to_string_lossy().to_string(),
        );

        AppConfig {
            name: Some("Default Test Config".to_string()),
            core: CoreConfig {
                env_mode: "test".to_string(),
                log_level: "debug".to_string(),
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                cors_origins: vec!["*".to_string()],
            },
            paths,
            seed_defaults: false,
        }
    }

    /// Écrit la configuration courante (utile pour générer un fichier modèle).
    pub async fn save_to(&self, path: &std::path::Path) -> Result<()> {
        fs::write_json_atomic(path, self).await
    }
}

// --- TESTS UNITAIRES ---
