use std::sync::Arc;

use pipeflow_core::{ConfigLoader, Pipeline, TaskDefinition, TaskId, WorkspaceInfo, WorkspaceRegistry};

use crate::error::ResolveError;
use crate::graph::WorkspaceGraph;
use crate::merge::merge_task_definitions;
use crate::resolve::{lookup_workspace, resolve_task_definitions};

/// Everything known about the repository for one run.
///
/// Built once before scheduling starts and only read afterwards.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Dependencies between packages.
    pub graph: WorkspaceGraph,
    /// Task definitions from the root configuration.
    pub pipeline: Pipeline,
    pub workspaces: WorkspaceRegistry,
    /// Hash of all inputs shared by every task.
    pub global_hash: String,
    pub root_node: String,
}

impl RunContext {
    pub fn new(
        graph: WorkspaceGraph,
        pipeline: Pipeline,
        workspaces: WorkspaceRegistry,
        global_hash: impl Into<String>,
    ) -> Self {
        let root_node = graph.root_node().to_string();
        Self {
            graph,
            pipeline,
            workspaces,
            global_hash: global_hash.into(),
            root_node,
        }
    }

    pub fn workspace(&self, task_id: &TaskId) -> Result<&Arc<WorkspaceInfo>, ResolveError> {
        lookup_workspace(&self.workspaces, task_id)
    }

    /// Definitions of `task_id` along its configuration chain, most specific first.
    pub fn resolve<L: ConfigLoader + ?Sized>(
        &self,
        task_id: &str,
        loader: &L,
    ) -> Result<Vec<TaskDefinition>, ResolveError> {
        resolve_task_definitions(task_id, &self.pipeline, &self.workspaces, loader)
    }

    /// The effective definition of `task_id`.
    pub fn task_definition<L: ConfigLoader + ?Sized>(
        &self,
        task_id: &str,
        loader: &L,
    ) -> Result<TaskDefinition, ResolveError> {
        self.resolve(task_id, loader).map(merge_task_definitions)
    }
}
