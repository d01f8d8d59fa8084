pub mod commands;
pub mod content_store;
pub mod server;
pub mod utils;
