//! LLM provider client
//!
//! Chat-completions access with tool calling, behind the `Provider` trait so
//! the agent loop can be driven by any OpenAI-compatible endpoint (or a mock
//! in tests).

use async_trait::async_trait;
use thiserror::Error;

mod openrouter;
mod types;

pub use openrouter::OpenRouterProvider;
pub use types::{
    ChatParams, ChatResponse, FunctionInvocation, FunctionSpec, Message, Tool, ToolCall,
    ToolCallSpec, ToolChoice, Usage,
};

/// Provider-side failures.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("malformed payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("api error: {0}")]
    Api(String),

    #[error("no api key configured")]
    NoApiKey,

    #[error("unexpected response shape")]
    InvalidResponse,

    #[error("rate limited")]
    RateLimited,
}

pub type Result<T> = std::result::Result<T, ProviderError>;

/// A hosted chat model with tool-calling support.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn chat(&self, params: ChatParams) -> Result<ChatResponse>;
    fn default_model(&self) -> String;
    fn is_configured(&self) -> bool;
}
