// FICHIER : src-server/src/commands/mod.rs

pub mod dispatcher;
pub mod protocol;

pub use dispatcher::{execute, handle};
pub use protocol::{failure_reply, parse_command, Command, Outcome, INVALID_ACTION};
