use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::constants::{ENV_PREFIX, TOPOLOGICAL_PREFIX};
use crate::output_mode::OutputMode;

/// Effective execution and caching parameters of a task.
///
/// `Default` is the empty definition: nothing cached, no inputs or outputs,
/// not persistent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    pub outputs: Vec<String>,
    #[serde(rename = "cache")]
    pub should_cache: bool,
    pub env_var_dependencies: BTreeSet<String>,
    /// Tasks of the same name in dependency packages that must finish first.
    pub topological_dependencies: Vec<String>,
    /// Tasks in the same package that must finish first.
    pub task_dependencies: Vec<String>,
    pub inputs: Vec<String>,
    pub output_mode: OutputMode,
    pub persistent: bool,
}

/// Task definitions keyed by bare task name or `package#task`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pipeline(BTreeMap<String, TaskDefinition>);

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, definition: TaskDefinition) {
        self.0.insert(key.into(), definition);
    }

    pub fn get(&self, key: &str) -> Option<&TaskDefinition> {
        self.0.get(key)
    }

    /// Looks up a task by its identifier exactly as given, then by its bare
    /// task name.
    pub fn task_definition(&self, task_id: &str, task_name: &str) -> Option<&TaskDefinition> {
        self.0.get(task_id).or_else(|| self.0.get(task_name))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, TaskDefinition)> for Pipeline {
    fn from_iter<I: IntoIterator<Item = (String, TaskDefinition)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The configuration found in a single workspace directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawLocalConfig")]
pub struct LocalConfig {
    pub pipeline: Pipeline,
    /// Workspaces this configuration inherits from. Only the root workspace,
    /// and only one entry, is accepted during resolution.
    pub extends: Vec<String>,
}

impl LocalConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[derive(Debug, Default, Deserialize)]
struct RawLocalConfig {
    #[serde(default)]
    extends: Vec<String>,
    #[serde(default)]
    pipeline: BTreeMap<String, RawTaskDefinition>,
}

impl From<RawLocalConfig> for LocalConfig {
    fn from(raw: RawLocalConfig) -> Self {
        Self {
            pipeline: raw
                .pipeline
                .into_iter()
                .map(|(key, task)| (key, TaskDefinition::from(task)))
                .collect(),
            extends: raw.extends,
        }
    }
}

/// A task definition as written in `pipeline.toml`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTaskDefinition {
    #[serde(default)]
    depends_on: Vec<String>,
    #[serde(default)]
    outputs: Vec<String>,
    #[serde(default = "default_cache")]
    cache: bool,
    #[serde(default)]
    env: Vec<String>,
    #[serde(default)]
    inputs: Vec<String>,
    #[serde(default)]
    output_mode: OutputMode,
    #[serde(default)]
    persistent: bool,
}

fn default_cache() -> bool {
    true
}

impl From<RawTaskDefinition> for TaskDefinition {
    fn from(raw: RawTaskDefinition) -> Self {
        let mut definition = TaskDefinition {
            outputs: raw.outputs,
            should_cache: raw.cache,
            inputs: raw.inputs,
            output_mode: raw.output_mode,
            persistent: raw.persistent,
            ..Default::default()
        };

        for dependency in raw.depends_on {
            if let Some(task) = dependency.strip_prefix(TOPOLOGICAL_PREFIX) {
                definition.topological_dependencies.push(task.to_string());
            } else if let Some(var) = dependency.strip_prefix(ENV_PREFIX) {
                definition.env_var_dependencies.insert(var.to_string());
            } else {
                definition.task_dependencies.push(dependency);
            }
        }
        definition.env_var_dependencies.extend(raw.env);

        definition
    }
}
