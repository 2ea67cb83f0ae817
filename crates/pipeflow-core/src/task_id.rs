use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ROOT_WORKSPACE, TASK_DELIMITER};

/// Identifies one task of one package, canonically written `package#task`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId {
    pub package: String,
    pub task: String,
}

impl TaskId {
    pub fn new(package: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            task: task.into(),
        }
    }

    /// Splits an identifier on the first `#`.
    ///
    /// A bare task name has no package part and is attributed to the root
    /// workspace.
    pub fn parse(value: &str) -> Self {
        match value.split_once(TASK_DELIMITER) {
            Some((package, task)) => Self::new(package, task),
            None => Self::new(ROOT_WORKSPACE, value),
        }
    }

    pub fn canonical(&self) -> String {
        format!("{}{}{}", self.package, TASK_DELIMITER, self.task)
    }

    pub fn is_root(&self) -> bool {
        self.package == ROOT_WORKSPACE
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical())
    }
}

impl FromStr for TaskId {
    type Err = std::convert::Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(value))
    }
}

/// Reports whether a pipeline key is scoped to a single package.
pub fn is_package_task(key: &str) -> bool {
    key.contains(TASK_DELIMITER)
}
