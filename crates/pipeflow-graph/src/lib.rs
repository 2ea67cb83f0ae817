//! Task resolution for the Pipeflow scheduler.
//!
//! Given the [`RunContext`] of a run, this crate finds the definitions that
//! apply to a `package#task` along the workspace's `extends` chain, merges
//! them, and hands the resulting [`PackageTask`] to a caller-supplied visitor.

pub mod context;
pub mod error;
pub mod graph;
pub mod merge;
pub mod package_task;
pub mod resolve;

#[cfg(test)]
mod testing;

pub use context::RunContext;
pub use error::{GraphError, ResolveError};
pub use graph::WorkspaceGraph;
pub use merge::merge_task_definitions;
pub use package_task::PackageTask;
pub use resolve::{lookup_workspace, resolve_task_definitions, MAX_CHAIN_DEPTH};
