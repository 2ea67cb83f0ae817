//! Constants used across the Pipeflow workspace.

/// The filename of a workspace's pipeline configuration.
pub const CONFIG_FILE: &str = "pipeline.toml";

/// The name under which the repository root is registered as a workspace.
/// It is also the only valid `extends` target.
pub const ROOT_WORKSPACE: &str = "//";

/// The name of the synthetic root node in the workspace graph.
pub const ROOT_NODE: &str = "___ROOT___";

/// Separates the package from the task in a task identifier.
pub const TASK_DELIMITER: char = '#';

/// Prefix marking a `depends_on` entry as a dependency through the package graph.
pub const TOPOLOGICAL_PREFIX: char = '^';

/// Prefix marking a legacy environment variable entry in `depends_on`.
pub const ENV_PREFIX: char = '$';

/// Directory, relative to a workspace, holding per-task log files.
pub const LOG_DIR: &str = ".pipeflow";
