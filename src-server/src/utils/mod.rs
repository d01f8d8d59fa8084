// FICHIER : src-server/src/utils/mod.rs

// =========================================================================
//  EPSILON UTILS - Foundation Layer
// =========================================================================

pub mod config;
pub mod env;
pub mod error;
pub mod fs;
pub mod json;
pub mod logger;
pub mod macros;

// --- FAÇADES SÉMANTIQUES ---

/// **Application Context** : Accès global Config/Log/Env.
pub mod context {
    pub use super::config::AppConfig;
    pub use super::env::{get, get_or, is_enabled};
    pub use super::logger::init_logging;
}

/// **Data Abstraction** : Manipulation JSON.
pub mod data {
    pub use super::json::{json, parse, stringify, stringify_pretty, Map, Value};
    pub use serde::{Deserialize, Serialize};
}

/// **Le Prélude** : `use crate::utils::prelude::*;`
pub mod prelude {
    pub use super::context::AppConfig;
    pub use super::data::{json, Deserialize, Serialize, Value};
    pub use super::error::{AppError, Result};
    pub use tracing::{debug, error, info, instrument, warn};
}

// --- EXPORTS DIRECTS ---

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use logger::init_logging;

pub use async_trait::async_trait;
pub use std::sync::Arc;
