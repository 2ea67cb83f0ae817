use pipeflow_core::ConfigLoadError;
use thiserror::Error;

/// Failures that abort resolving a task's definition.
///
/// A task without any definition, or an `extends` entry naming an unknown
/// workspace, is not an error.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("cannot find package '{package}' for task '{task_id}'")]
    PackageNotFound { package: String, task_id: String },

    #[error(transparent)]
    ConfigLoad(#[from] ConfigLoadError),

    #[error("you can only extend from one workspace, '{workspace}' extends from {count}")]
    MultipleExtends { workspace: String, count: usize },

    #[error("you can only extend from the root workspace, '{workspace}' extends from '{target}'")]
    ExtendsNotRoot { workspace: String, target: String },
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("workspace '{0}' is not part of the graph")]
    UnknownWorkspace(String),

    #[error("dependency from '{dependent}' on '{dependency}' would create a cycle")]
    Cycle {
        dependent: String,
        dependency: String,
    },
}
