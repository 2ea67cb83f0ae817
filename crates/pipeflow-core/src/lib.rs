//! Core data model for the Pipeflow monorepo task runner.
//!
//! This crate defines task identifiers, task definitions and pipelines, the
//! per-workspace configuration file and its loader, and the registry of
//! workspaces that task resolution reads from.

pub mod config;
pub mod constants;
pub mod error;
pub mod loader;
pub mod output_mode;
pub mod task_id;
pub mod workspace;

pub use config::{LocalConfig, Pipeline, TaskDefinition};
pub use error::ConfigLoadError;
pub use loader::{ConfigLoader, FsConfigLoader};
pub use output_mode::OutputMode;
pub use task_id::TaskId;
pub use workspace::{WorkspaceInfo, WorkspaceRegistry};
