//! The package dependency graph handed to the scheduler.

use std::collections::HashMap;

use petgraph::algo::{has_path_connecting, toposort};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use pipeflow_core::constants::{ROOT_NODE, ROOT_WORKSPACE};
use pipeflow_core::WorkspaceRegistry;

use crate::error::GraphError;

/// A directed acyclic graph over package names.
///
/// Edges point from a dependent to its dependency. Packages without internal
/// dependencies hang off the synthetic root node.
#[derive(Debug, Clone)]
pub struct WorkspaceGraph {
    graph: DiGraph<String, ()>,
    nodes: HashMap<String, NodeIndex>,
    root: NodeIndex,
}

impl WorkspaceGraph {
    pub fn new() -> Self {
        let mut graph = DiGraph::new();
        let root = graph.add_node(ROOT_NODE.to_string());
        let nodes = HashMap::from([(ROOT_NODE.to_string(), root)]);
        Self { graph, nodes, root }
    }

    /// Builds the graph from each workspace's declared dependencies.
    ///
    /// The root workspace is not a node, and dependencies on packages
    /// outside the registry are ignored.
    pub fn from_registry(workspaces: &WorkspaceRegistry) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        let members = workspaces
            .iter()
            .filter(|w| w.name != ROOT_WORKSPACE)
            .collect::<Vec<_>>();

        for workspace in &members {
            graph.add_workspace(&workspace.name);
        }

        for workspace in &members {
            let mut internal = 0;
            for dependency in &workspace.dependencies {
                if dependency == ROOT_WORKSPACE || !workspaces.contains(dependency) {
                    continue;
                }
                graph.add_dependency(&workspace.name, dependency)?;
                internal += 1;
            }
            if internal == 0 {
                graph.add_dependency(&workspace.name, ROOT_NODE)?;
            }
        }

        Ok(graph)
    }

    pub fn root_node(&self) -> &str {
        &self.graph[self.root]
    }

    pub fn add_workspace(&mut self, name: &str) {
        if !self.nodes.contains_key(name) {
            let index = self.graph.add_node(name.to_string());
            self.nodes.insert(name.to_string(), index);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Records that `dependent` depends on `dependency`.
    ///
    /// # Errors
    /// Fails if either workspace is unknown or the edge would close a cycle.
    pub fn add_dependency(&mut self, dependent: &str, dependency: &str) -> Result<(), GraphError> {
        let from = self.index(dependent)?;
        let to = self.index(dependency)?;

        if from == to || has_path_connecting(&self.graph, to, from, None) {
            return Err(GraphError::Cycle {
                dependent: dependent.to_string(),
                dependency: dependency.to_string(),
            });
        }

        self.graph.update_edge(from, to, ());
        Ok(())
    }

    /// Direct dependencies of `name`, sorted, excluding the root node.
    pub fn dependencies_of(&self, name: &str) -> Result<Vec<&str>, GraphError> {
        let index = self.index(name)?;
        let mut deps = self
            .graph
            .neighbors_directed(index, Direction::Outgoing)
            .filter(|n| *n != self.root)
            .map(|n| self.graph[n].as_str())
            .collect::<Vec<_>>();
        deps.sort_unstable();
        Ok(deps)
    }

    /// Package names ordered so that every package follows its dependencies.
    pub fn topological_order(&self) -> Vec<&str> {
        // Cycles are rejected on insertion, so sorting cannot fail.
        let mut order = toposort(&self.graph, None).unwrap_or_default();
        order.reverse();
        order
            .into_iter()
            .filter(|n| *n != self.root)
            .map(|n| self.graph[n].as_str())
            .collect()
    }

    fn index(&self, name: &str) -> Result<NodeIndex, GraphError> {
        self.nodes
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownWorkspace(name.to_string()))
    }
}

impl Default for WorkspaceGraph {
    fn default() -> Self {
        Self::new()
    }
}
