//! Strata - adaptive page layout coordinator
//!
//! This crate provides the core types and logic for a responsive page shell
//! (sticky header, card grid, resizable bottom panel) implementing the Elm
//! Architecture pattern. The window runtime lives in the binary.

pub mod cli;
pub mod commands;
pub mod composer;
pub mod config;
pub mod config_paths;
pub mod coordinator;
pub mod env;
pub mod geometry;
pub mod messages;
pub mod model;
pub mod replay;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::LayoutConfig;
pub use coordinator::Coordinator;
pub use env::Environment;
pub use messages::Msg;
pub use model::AppModel;
