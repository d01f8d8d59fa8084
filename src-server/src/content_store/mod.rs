// FICHIER : src-server/src/content_store/mod.rs

pub mod collections;
pub mod schema;
pub mod storage;

pub use collections::{CollectionsManager, RecordId};
pub use schema::{Action, ResourceKind};
pub use storage::{CollectionStore, FileStore, LoadOutcome, MemoryStore, StoreConfig};
