// Shape validation
//
// The contract promises field presence and ordering, nothing more. The
// one convention worth checking at a boundary is that identifiers are
// non-empty; richer rules belong to whatever consumes these values.

use thiserror::Error;

use crate::message::Message;
use crate::task::Task;
use crate::workflow::Workflow;

/// Shape violation found by `validate()`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("message id must not be empty")]
    EmptyMessageId,
    #[error("task id must not be empty")]
    EmptyTaskId,
    #[error("workflow id must not be empty")]
    EmptyWorkflowId,
}

impl Message {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyMessageId);
        }
        Ok(())
    }
}

impl Task {
    /// Check this task and every message it owns
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyTaskId);
        }
        for message in &self.messages {
            message.validate()?;
        }
        Ok(())
    }
}

impl Workflow {
    /// Check this workflow and every task it owns
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyWorkflowId);
        }
        for task in &self.tasks {
            task.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageRole;

    #[test]
    fn test_minimal_workflow_is_valid() {
        let wf = Workflow::with_id("wf-2");
        assert_eq!(wf.validate(), Ok(()));
    }

    #[test]
    fn test_empty_workflow_id_is_rejected() {
        let wf = Workflow::with_id("");
        assert_eq!(wf.validate(), Err(ValidationError::EmptyWorkflowId));
    }

    #[test]
    fn test_empty_task_id_is_rejected() {
        let mut wf = Workflow::with_id("wf-1");
        wf.push_task(Task::with_id(""));
        assert_eq!(wf.validate(), Err(ValidationError::EmptyTaskId));

        let task = Task::with_id("");
        assert_eq!(task.validate(), Err(ValidationError::EmptyTaskId));
    }

    #[test]
    fn test_nested_empty_id_is_rejected() {
        let mut task = Task::with_id("t-1");
        task.push_message(Message::with_id("", MessageRole::User, "hi"));

        let mut wf = Workflow::with_id("wf-1");
        wf.push_task(task);

        assert_eq!(wf.validate(), Err(ValidationError::EmptyMessageId));
    }

    #[test]
    fn test_generated_ids_pass_validation() {
        let mut wf = Workflow::new();
        wf.push_task(Task::with_messages(vec![Message::user("hello")]));
        assert_eq!(wf.validate(), Ok(()));
    }
}
