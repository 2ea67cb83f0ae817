//! Descriptors of a single package's task, and the adapter that produces
//! them for a task graph walk.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Serialize, Serializer};
use tracing::debug;

use pipeflow_core::constants::LOG_DIR;
use pipeflow_core::{ConfigLoader, TaskDefinition, TaskId, WorkspaceInfo};

use crate::context::RunContext;
use crate::merge::merge_task_definitions;
use crate::resolve::resolve_task_definitions;

/// One task of one package, with its effective definition.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageTask {
    /// The identifier exactly as the scheduler supplied it.
    pub task_id: String,
    pub task: String,
    pub package_name: String,
    #[serde(rename = "directory", serialize_with = "serialize_workspace_dir")]
    pub workspace: Arc<WorkspaceInfo>,
    pub task_definition: TaskDefinition,
}

fn serialize_workspace_dir<S: Serializer>(
    workspace: &Arc<WorkspaceInfo>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    workspace.dir.serialize(serializer)
}

impl PackageTask {
    /// Prefix for this task's log lines, `package:task`.
    pub fn output_prefix(&self) -> String {
        format!("{}:{}", self.package_name, self.task)
    }

    /// Location of this task's log, relative to its workspace.
    pub fn relative_log_file(&self) -> PathBuf {
        Path::new(LOG_DIR).join(format!("pipeflow-{}.log", self.task))
    }

    pub fn log_file(&self) -> PathBuf {
        self.workspace.dir.join(self.relative_log_file())
    }

    /// Declared outputs plus the task log, sorted and without duplicates.
    pub fn hashable_outputs(&self) -> Vec<String> {
        let mut outputs = self.task_definition.outputs.clone();
        outputs.push(self.relative_log_file().to_string_lossy().into_owned());
        outputs.sort();
        outputs.dedup();
        outputs
    }
}

impl RunContext {
    /// Wraps `visitor` into a function of a task identifier, suitable for
    /// walking the task graph.
    ///
    /// Each call resolves and merges the task's definition, then hands the
    /// resulting [`PackageTask`] and `cx` to `visitor` and returns whatever
    /// it returns. Resolution errors are returned without calling `visitor`.
    pub fn package_task_visitor<'a, L, C, V>(
        &'a self,
        loader: L,
        cx: C,
        visitor: V,
    ) -> impl Fn(&str) -> anyhow::Result<()> + 'a
    where
        L: ConfigLoader + 'a,
        C: 'a,
        V: Fn(&C, PackageTask) -> anyhow::Result<()> + 'a,
    {
        move |task_id: &str| {
            let _span = tracing::debug_span!("package_task", task_id).entered();

            let id = TaskId::parse(task_id);
            let workspace = Arc::clone(self.workspace(&id)?);
            let definitions =
                resolve_task_definitions(task_id, &self.pipeline, &self.workspaces, &loader)?;
            debug!("merging {} definition(s)", definitions.len());

            let package_task = PackageTask {
                task_id: task_id.to_string(),
                task: id.task,
                package_name: id.package,
                workspace,
                task_definition: merge_task_definitions(definitions),
            };

            visitor(&cx, package_task)
        }
    }
}
