//! Context builder for assembling agent prompts

use chrono::Local;

use wayfarer_provider::{Message, ToolCallSpec};

/// Builds the system prompt and message list for the agent
#[derive(Default)]
pub struct ContextBuilder;

impl ContextBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Build the system prompt
    pub fn build_system_prompt(&self) -> String {
        let now = Local::now().format("%Y-%m-%d %H:%M (%A)");

        format!(
            r#"# wayfarer

You are wayfarer, a travel assistant. You have access to tools that allow you to:
- Calculate a daily travel budget breakdown for a destination
- Look up the current weather for a city
- Tell the current time in any time zone
- Turn the weather into a mood-flavored reply
- Share a travel quote

## Current Time
{}

When calling tools, city and country names must be in English.
For normal conversation, just respond with text.
Always be helpful, accurate, and concise."#,
            now
        )
    }

    /// Build the complete message list for one request
    pub fn build_messages(&self, history: Vec<Message>, current_message: &str) -> Vec<Message> {
        let mut messages = vec![Message::system(self.build_system_prompt())];
        messages.extend(history);
        messages.push(Message::user(current_message));
        messages
    }

    /// Add a tool result to messages
    pub fn add_tool_result(
        messages: &mut Vec<Message>,
        tool_call_id: &str,
        name: &str,
        result: &str,
    ) {
        messages.push(Message::tool(tool_call_id, name, result));
    }

    /// Add an assistant message with tool calls
    pub fn add_assistant_message(
        messages: &mut Vec<Message>,
        content: Option<&str>,
        tool_calls: Option<Vec<ToolCallSpec>>,
    ) {
        let mut msg = Message::assistant(content.unwrap_or(""));
        if let Some(calls) = tool_calls {
            msg.tool_calls = Some(calls);
        }
        messages.push(msg);
    }
}
