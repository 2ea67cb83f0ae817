//! Fixtures shared by the unit tests of this crate.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use pipeflow_core::constants::ROOT_WORKSPACE;
use pipeflow_core::{
    ConfigLoadError, ConfigLoader, LocalConfig, Pipeline, TaskDefinition, WorkspaceInfo,
    WorkspaceRegistry,
};

use crate::context::RunContext;
use crate::graph::WorkspaceGraph;

/// Serves configuration text from memory and counts loads.
#[derive(Debug, Default)]
pub(crate) struct MemoryLoader {
    configs: HashMap<PathBuf, String>,
    loads: AtomicUsize,
}

impl MemoryLoader {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, dir: &str, text: &str) -> Self {
        self.configs.insert(PathBuf::from(dir), text.to_string());
        self
    }

    pub(crate) fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl ConfigLoader for MemoryLoader {
    fn load(&self, directory: &Path) -> Result<Option<LocalConfig>, ConfigLoadError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        let Some(text) = self.configs.get(directory) else {
            return Ok(None);
        };
        LocalConfig::from_toml_str(text)
            .map(Some)
            .map_err(|source| ConfigLoadError::Parse {
                path: directory.join("pipeline.toml"),
                source,
            })
    }
}

pub(crate) fn registry() -> WorkspaceRegistry {
    [
        WorkspaceInfo::new(ROOT_WORKSPACE, "/repo"),
        WorkspaceInfo::new("web", "/repo/apps/web").with_dependencies(["ui"]),
        WorkspaceInfo::new("docs", "/repo/apps/docs").with_dependencies(["ui"]),
        WorkspaceInfo::new("ui", "/repo/packages/ui"),
    ]
    .into_iter()
    .collect()
}

pub(crate) fn root_pipeline() -> Pipeline {
    let mut pipeline = Pipeline::new();
    pipeline.insert(
        "build",
        TaskDefinition {
            outputs: vec!["build/**".to_string()],
            should_cache: true,
            topological_dependencies: vec!["build".to_string()],
            ..Default::default()
        },
    );
    pipeline.insert(
        "web#build",
        TaskDefinition {
            outputs: vec![".next/**".to_string()],
            should_cache: true,
            ..Default::default()
        },
    );
    pipeline
}

pub(crate) fn context() -> RunContext {
    let workspaces = registry();
    let graph = WorkspaceGraph::from_registry(&workspaces).expect("fixture graph is acyclic");
    RunContext::new(graph, root_pipeline(), workspaces, "global-hash")
}

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
