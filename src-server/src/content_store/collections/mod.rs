// FICHIER : src-server/src/content_store/collections/mod.rs

pub mod ids;
pub mod lock_manager;
pub mod manager;
pub mod record;

pub use ids::{IdStrategy, InsertPosition};
pub use lock_manager::LockManager;
pub use manager::CollectionsManager;
pub use record::RecordId;
