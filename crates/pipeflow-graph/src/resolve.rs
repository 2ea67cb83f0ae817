//! Collects the task definitions that apply to a task along its workspace's
//! `extends` chain.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use pipeflow_core::constants::ROOT_WORKSPACE;
use pipeflow_core::{
    ConfigLoader, LocalConfig, Pipeline, TaskDefinition, TaskId, WorkspaceInfo, WorkspaceRegistry,
};

use crate::error::ResolveError;

/// Maximum number of configurations visited for one task: the workspace's
/// own, then the root's.
pub const MAX_CHAIN_DEPTH: usize = 2;

/// Looks up the workspace a task belongs to.
pub fn lookup_workspace<'a>(
    workspaces: &'a WorkspaceRegistry,
    task_id: &TaskId,
) -> Result<&'a Arc<WorkspaceInfo>, ResolveError> {
    workspaces
        .get(&task_id.package)
        .ok_or_else(|| ResolveError::PackageNotFound {
            package: task_id.package.clone(),
            task_id: task_id.to_string(),
        })
}

/// Returns every definition of `task_id` found along the configuration
/// chain, most specific first.
///
/// Each pipeline is searched for `task_id` exactly as given, then for the
/// bare task name.
///
/// A workspace without a configuration file uses `pipeline` directly. An
/// empty result means the task is not configured anywhere that was visited.
///
/// # Errors
/// Fails if the package is unknown, a configuration cannot be loaded, or an
/// `extends` declaration is not a single reference to the root workspace.
#[instrument(skip_all, fields(task_id = %task_id))]
pub fn resolve_task_definitions<L: ConfigLoader + ?Sized>(
    task_id: &str,
    pipeline: &Pipeline,
    workspaces: &WorkspaceRegistry,
    loader: &L,
) -> Result<Vec<TaskDefinition>, ResolveError> {
    let id = TaskId::parse(task_id);
    let package = lookup_workspace(workspaces, &id)?;

    let Some(mut config) = loader.load(package.dir())? else {
        debug!("no config in '{}', using root pipeline", package.name);
        let found = pipeline.task_definition(task_id, &id.task).cloned();
        if found.is_none() {
            debug!("no definition found for {}", task_id);
        }
        return Ok(found.into_iter().collect());
    };

    let mut definitions = Vec::new();
    let mut workspace = Arc::clone(package);

    for depth in 1..=MAX_CHAIN_DEPTH {
        match config.pipeline.task_definition(task_id, &id.task) {
            Some(definition) => definitions.push(definition.clone()),
            None => debug!("'{}' does not define {}", workspace.name, task_id),
        }

        let Some(target) = extends_target(&package.name, &config, workspaces)? else {
            break;
        };

        if depth == MAX_CHAIN_DEPTH {
            warn!(
                "'{}' extends '{}' beyond the supported chain depth of {}, ignoring",
                workspace.name, target.name, MAX_CHAIN_DEPTH
            );
            break;
        }

        match loader.load(target.dir())? {
            Some(next) => config = next,
            None => {
                debug!("extended workspace '{}' has no config", target.name);
                break;
            }
        }
        workspace = target;
    }

    Ok(definitions)
}

/// Validates `config.extends` and returns the workspace to continue with, if any.
fn extends_target(
    package: &str,
    config: &LocalConfig,
    workspaces: &WorkspaceRegistry,
) -> Result<Option<Arc<WorkspaceInfo>>, ResolveError> {
    let target = match config.extends.as_slice() {
        [] => return Ok(None),
        [target] => target,
        many => {
            return Err(ResolveError::MultipleExtends {
                workspace: package.to_string(),
                count: many.len(),
            })
        }
    };

    if target != ROOT_WORKSPACE {
        return Err(ResolveError::ExtendsNotRoot {
            workspace: package.to_string(),
            target: target.clone(),
        });
    }

    match workspaces.get(target) {
        Some(workspace) => Ok(Some(Arc::clone(workspace))),
        None => {
            warn!("'{}' extends unknown workspace '{}'", package, target);
            Ok(None)
        }
    }
}
