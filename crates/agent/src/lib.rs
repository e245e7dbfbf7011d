//! Travel assistant agent core
//!
//! Tool registry, context assembly, and the chat/tool-call loop that drives
//! the built-in travel tools against any `Provider`.

use thiserror::Error;

pub mod context;
pub mod loop_agent;
pub mod tools;

pub use context::ContextBuilder;
pub use loop_agent::AgentLoop;
pub use tools::{register_default_tools, ToolRegistry, ToolTrait};

/// Agent errors
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    #[error("tool execution failed: {0}")]
    ToolExecution(String),

    #[error("provider error: {0}")]
    Provider(String),

    #[error("max tool iterations exceeded")]
    MaxIterations,
}

pub type Result<T> = std::result::Result<T, AgentError>;
