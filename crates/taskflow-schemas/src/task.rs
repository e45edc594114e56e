// Task types
//
// A task is a unit of work consisting of an ordered sequence of messages.
// Messages are owned by value: the contract gives no indication that a
// message is ever shared between tasks, so there is nothing to reference.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

use crate::message::Message;

/// A unit of work holding its conversation history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Task {
    pub id: String,
    /// Ordered conversation history. An absent field deserializes as
    /// empty, but an empty history always serializes as `[]`.
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Task {
    /// Create an empty task with a generated id
    pub fn new() -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            messages: Vec::new(),
        }
    }

    /// Create an empty task with a caller-supplied id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            messages: Vec::new(),
        }
    }

    /// Create a task with a generated id and the given history
    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            id: Uuid::now_v7().to_string(),
            messages,
        }
    }

    /// Append a message, preserving conversation order
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

impl Default for Task {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::MessageRole;

    #[test]
    fn test_new_task_is_empty() {
        let task = Task::new();
        assert!(!task.id.is_empty());
        assert!(task.messages.is_empty());
    }

    #[test]
    fn test_push_preserves_order() {
        let mut task = Task::with_id("t-1");
        task.push_message(Message::with_id("m-1", MessageRole::User, "first"));
        task.push_message(Message::with_id("m-2", MessageRole::Assistant, "second"));

        assert_eq!(task.messages.len(), 2);
        assert_eq!(task.messages[0].id, "m-1");
        assert_eq!(task.messages[1].id, "m-2");
        assert_eq!(task.last_message().map(|m| m.content.as_str()), Some("second"));
    }

    #[test]
    fn test_absent_messages_deserialize_as_empty() {
        let task: Task = serde_json::from_str(r#"{"id":"t-1"}"#).unwrap();
        assert_eq!(task.id, "t-1");
        assert!(task.messages.is_empty());
    }

    #[test]
    fn test_empty_messages_serialize_as_empty_array() {
        let task = Task::with_id("t-1");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["messages"], serde_json::json!([]));
    }
}
