//! Agent loop - core processing engine

use std::sync::Arc;
use tracing::{debug, info};

use wayfarer_provider::{ChatParams, Message, Provider, ToolCallSpec, ToolChoice};

use crate::context::ContextBuilder;
use crate::tools::ToolRegistry;

/// The agent loop feeds messages to the provider and handles tool calls
pub struct AgentLoop<P: Provider> {
    provider: Arc<P>,
    model: String,
    max_iterations: u32,
    context: ContextBuilder,
    tools: ToolRegistry,
}

impl<P: Provider> AgentLoop<P> {
    pub fn new(provider: P, model: String, max_iterations: u32, tools: ToolRegistry) -> Self {
        Self {
            provider: Arc::new(provider),
            model,
            max_iterations,
            context: ContextBuilder::new(),
            tools,
        }
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.tools.names()
    }

    /// Process a single user message to a final text answer
    pub async fn process(&self, content: &str) -> crate::Result<String> {
        info!("processing message ({} chars)", content.len());
        let messages = self.context.build_messages(Vec::new(), content);
        self.run(messages).await
    }

    /// Run the chat/tool-call loop until the model answers in plain text
    async fn run(&self, mut messages: Vec<Message>) -> crate::Result<String> {
        let mut iteration = 0;

        loop {
            iteration += 1;
            if iteration > self.max_iterations {
                return Err(crate::AgentError::MaxIterations);
            }

            debug!("agent iteration {}", iteration);

            let params = ChatParams {
                model: self.model.clone(),
                messages: messages.clone(),
                tools: self.tools.definitions(),
                tool_choice: ToolChoice::Auto,
                ..Default::default()
            };

            let response = self
                .provider
                .chat(params)
                .await
                .map_err(|e| crate::AgentError::Provider(e.to_string()))?;

            if response.has_tool_calls() {
                let tool_call_specs: Vec<ToolCallSpec> = response
                    .tool_calls
                    .iter()
                    .map(|tc| ToolCallSpec::new(&tc.id, &tc.name, tc.arguments.clone()))
                    .collect();

                ContextBuilder::add_assistant_message(
                    &mut messages,
                    response.content.as_deref(),
                    Some(tool_call_specs),
                );

                for tool_call in &response.tool_calls {
                    debug!("executing tool: {}", tool_call.name);

                    let result = self
                        .tools
                        .execute(&tool_call.name, tool_call.arguments.clone())
                        .await
                        .unwrap_or_else(|e| format!("Error: {}", e));

                    ContextBuilder::add_tool_result(
                        &mut messages,
                        &tool_call.id,
                        &tool_call.name,
                        &result,
                    );
                }
            } else {
                return Ok(response
                    .content
                    .unwrap_or_else(|| "Task completed.".to_string()));
            }
        }
    }
}
