//! reel - windowed, recycling list view engine
//!
//! This crate keeps a bounded window of materialized rows over an arbitrarily
//! long list, recycles row objects by reuse key and runs animated row
//! deletion, using the Elm Architecture pattern.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod error;
pub mod messages;
pub mod model;
pub mod source;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::{ScrollPolicy, TableConfig};
pub use error::TableError;
pub use messages::Msg;
pub use model::TableView;
pub use source::{EditHandler, RowFactory, RowSource, SelectionHandler};
