use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;

/// A package of the monorepo, as discovered from its manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkspaceInfo {
    pub name: String,
    pub dir: PathBuf,
    pub version: Option<String>,
    /// Names of the workspaces this package depends on.
    pub dependencies: Vec<String>,
}

impl WorkspaceInfo {
    pub fn new(name: impl Into<String>, dir: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            dir: dir.into(),
            version: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_dependencies<I, S>(mut self, dependencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = dependencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// All known workspaces, by package name.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceRegistry {
    workspaces: BTreeMap<String, Arc<WorkspaceInfo>>,
}

impl WorkspaceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a workspace, replacing any previous one with the same name.
    pub fn insert(&mut self, workspace: WorkspaceInfo) {
        self.workspaces
            .insert(workspace.name.clone(), Arc::new(workspace));
    }

    pub fn get(&self, name: &str) -> Option<&Arc<WorkspaceInfo>> {
        self.workspaces.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.workspaces.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<WorkspaceInfo>> {
        self.workspaces.values()
    }

    pub fn len(&self) -> usize {
        self.workspaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workspaces.is_empty()
    }
}

impl FromIterator<WorkspaceInfo> for WorkspaceRegistry {
    fn from_iter<I: IntoIterator<Item = WorkspaceInfo>>(iter: I) -> Self {
        let mut registry = Self::new();
        for workspace in iter {
            registry.insert(workspace);
        }
        registry
    }
}
