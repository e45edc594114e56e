// Workflow types
//
// A workflow is an ordered sequence of tasks under a single id.
// Task order is definition order; this crate records it and makes no
// promise about how (or whether) anything executes the tasks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::task::Task;

/// A workflow composed of ordered tasks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Workflow {
    pub id: String,
    /// Ordered task list. An absent field deserializes as empty, but an
    /// empty list always serializes as `[]`.
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Workflow {
    /// Create an empty workflow with a generated id
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            tasks: Vec::new(),
        }
    }

    /// Create an empty workflow with a caller-supplied id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            tasks: Vec::new(),
        }
    }

    /// Create a workflow with a generated id and the given tasks
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            tasks,
        }
    }

    /// Append a task, preserving definition order
    pub fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Look up a task by id
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }
}

impl Default for Workflow {
    fn default() -> Self {
        Self::new()
    }
}
