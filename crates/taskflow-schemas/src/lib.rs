// Taskflow Schemas
//
// Decision: This crate is the source of truth for the shared workflow shapes
// Decision: Minimal dependencies - only serde, uuid, thiserror
// Decision: Optional OpenAPI support via "openapi" feature flag
// Decision: No runtime logic - only type definitions and serialization

// Core type modules
pub mod message;
pub mod task;
pub mod validation;
pub mod workflow;

// Re-exports for convenience
// Message types
pub use message::{Message, MessageRole};

// Task types
pub use task::Task;

// Validation
pub use validation::ValidationError;

// Workflow types
pub use workflow::Workflow;
