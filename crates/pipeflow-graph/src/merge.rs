use pipeflow_core::TaskDefinition;

/// Reduces definitions ordered most specific first into one.
///
/// Definitions are applied from the most general to the most specific, and
/// each one replaces every field, including fields left at their defaults.
/// The result is therefore the most specific definition as-is; an empty
/// input gives `TaskDefinition::default()`.
pub fn merge_task_definitions(definitions: Vec<TaskDefinition>) -> TaskDefinition {
    let mut merged = TaskDefinition::default();

    for definition in definitions.into_iter().rev() {
        let TaskDefinition {
            outputs,
            should_cache,
            env_var_dependencies,
            topological_dependencies,
            task_dependencies,
            inputs,
            output_mode,
            persistent,
        } = definition;

        merged.outputs = outputs;
        merged.should_cache = should_cache;
        merged.env_var_dependencies = env_var_dependencies;
        merged.topological_dependencies = topological_dependencies;
        merged.task_dependencies = task_dependencies;
        merged.inputs = inputs;
        merged.output_mode = output_mode;
        merged.persistent = persistent;
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipeflow_core::OutputMode;

    fn workspace_build() -> TaskDefinition {
        TaskDefinition {
            outputs: vec!["dist/**".to_string()],
            should_cache: true,
            ..Default::default()
        }
    }

    fn root_build() -> TaskDefinition {
        TaskDefinition {
            outputs: vec!["build/**".to_string()],
            should_cache: false,
            inputs: vec!["src/**".to_string()],
            output_mode: OutputMode::HashOnly,
            persistent: true,
            ..Default::default()
        }
    }

    #[test]
    fn most_specific_definition_replaces_everything() {
        // Fields the workspace leaves at their defaults do not inherit root values.
        let merged = merge_task_definitions(vec![workspace_build(), root_build()]);
        assert_eq!(merged, workspace_build());
        assert!(merged.inputs.is_empty());
        assert_eq!(merged.output_mode, OutputMode::Full);
        assert!(!merged.persistent);
    }

    #[test]
    fn single_definition_is_unchanged() {
        assert_eq!(merge_task_definitions(vec![root_build()]), root_build());
    }

    #[test]
    fn empty_input_gives_default_definition() {
        let merged = merge_task_definitions(Vec::new());
        assert_eq!(merged, TaskDefinition::default());
        assert!(!merged.should_cache);
        assert!(merged.outputs.is_empty());
    }
}
