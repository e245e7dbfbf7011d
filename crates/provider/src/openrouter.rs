//! OpenRouter/OpenAI-compatible chat-completions client.

use crate::{
    ChatParams, ChatResponse, Provider, ProviderError, Result, ToolCall, ToolChoice, Usage,
};
use reqwest::Client;
use serde_json::json;
use tracing::{debug, trace};

const DEFAULT_API_BASE: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "anthropic/claude-sonnet-4";

pub struct OpenRouterProvider {
    client: Client,
    api_key: String,
    api_base: String,
    default_model: String,
}

impl OpenRouterProvider {
    pub fn new(
        api_key: impl Into<String>,
        api_base: Option<String>,
        default_model: Option<String>,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            api_base: api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            default_model: default_model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }

    fn build_request(&self, params: &ChatParams) -> serde_json::Value {
        let messages: Vec<serde_json::Value> = params
            .messages
            .iter()
            .map(|m| {
                let mut obj = json!({ "role": &m.role });
                if let Some(content) = &m.content {
                    obj["content"] = json!(content);
                }
                if let Some(tool_calls) = &m.tool_calls {
                    obj["tool_calls"] = json!(tool_calls);
                }
                if let Some(tool_call_id) = &m.tool_call_id {
                    obj["tool_call_id"] = json!(tool_call_id);
                }
                if let Some(name) = &m.name {
                    obj["name"] = json!(name);
                }
                obj
            })
            .collect();

        let mut body = json!({
            "model": params.model,
            "messages": messages,
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
        });

        if !params.tools.is_empty() {
            body["tools"] = json!(params.tools);
            body["tool_choice"] = match &params.tool_choice {
                ToolChoice::Auto => json!("auto"),
                ToolChoice::Required(name) => {
                    json!({"type": "function", "function": {"name": name}})
                }
                ToolChoice::None => json!("none"),
            };
        }

        body
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<ChatResponse> {
        let choice = json["choices"]
            .get(0)
            .ok_or(ProviderError::InvalidResponse)?;
        let message = &choice["message"];
        let content = message["content"].as_str().map(|s| s.to_string());
        let finish_reason = choice["finish_reason"]
            .as_str()
            .unwrap_or("stop")
            .to_string();

        let mut tool_calls = Vec::new();
        if let Some(calls) = message["tool_calls"].as_array() {
            for call in calls {
                let function = &call["function"];
                // Arguments arrive as a JSON string on most endpoints, but a
                // few return them as an object already.
                let args = function["arguments"]
                    .as_str()
                    .and_then(|s| serde_json::from_str(s).ok())
                    .unwrap_or_else(|| function["arguments"].clone());

                tool_calls.push(ToolCall {
                    id: call["id"].as_str().unwrap_or("").to_string(),
                    name: function["name"].as_str().unwrap_or("").to_string(),
                    arguments: args,
                });
            }
        }

        let usage = if let Some(usage) = json["usage"].as_object() {
            Usage {
                prompt_tokens: usage
                    .get("prompt_tokens")
                    .and_then(|v| v.as_u64())
                    .unwrap_or(0) as u32,
                completion_tokens: usage
                    .get("completion_tokens")
                    .and_then(|v| v.as_u64())
                    .unwrap_or(0) as u32,
                total_tokens: usage
                    .get("total_tokens")
                    .and_then(|v| v.as_u64())
                    .unwrap_or(0) as u32,
            }
        } else {
            Usage::default()
        };

        Ok(ChatResponse {
            content,
            tool_calls,
            finish_reason,
            usage,
        })
    }
}

#[async_trait::async_trait]
impl Provider for OpenRouterProvider {
    async fn chat(&self, params: ChatParams) -> Result<ChatResponse> {
        if !self.is_configured() {
            return Err(ProviderError::NoApiKey);
        }

        trace!("sending chat request to {}", self.api_base);

        let url = format!("{}/chat/completions", self.api_base);
        let body = self.build_request(&params);

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let json: serde_json::Value = response.json().await?;

        if !status.is_success() {
            if status.as_u16() == 429 {
                return Err(ProviderError::RateLimited);
            }
            let error = json["error"]["message"]
                .as_str()
                .unwrap_or("unknown error")
                .to_string();
            return Err(ProviderError::Api(error));
        }

        debug!(
            "chat response: {} tool calls",
            json["choices"][0]["message"]["tool_calls"]
                .as_array()
                .map(|v| v.len())
                .unwrap_or(0)
        );

        self.parse_response(json)
    }

    fn default_model(&self) -> String {
        self.default_model.clone()
    }

    fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Message, Tool};
    use serde_json::json;

    // ========== Construction Tests ==========

    #[test]
    fn test_new_with_defaults() {
        let provider = OpenRouterProvider::new("sk-or-test123", None, None);
        assert_eq!(provider.api_base, DEFAULT_API_BASE);
        assert_eq!(provider.default_model, DEFAULT_MODEL);
        assert_eq!(provider.api_key, "sk-or-test123");
    }

    #[test]
    fn test_new_with_custom_base_and_model() {
        let provider = OpenRouterProvider::new(
            "sk-test",
            Some("https://api.custom.com/v1".to_string()),
            Some("custom/model-v1".to_string()),
        );
        assert_eq!(provider.api_base, "https://api.custom.com/v1");
        assert_eq!(provider.default_model, "custom/model-v1");
    }

    #[test]
    fn test_default_model_accessor() {
        let provider = OpenRouterProvider::new("sk-test", None, Some("custom-model".to_string()));
        assert_eq!(provider.default_model(), "custom-model");
    }

    #[test]
    fn test_is_configured() {
        assert!(OpenRouterProvider::new("valid-key", None, None).is_configured());
        assert!(!OpenRouterProvider::new("", None, None).is_configured());
    }

    // ========== build_request Tests ==========

    #[test]
    fn test_build_request_basic() {
        let provider = OpenRouterProvider::new("sk-test", None, None);
        let params = ChatParams {
            model: "gpt-4".to_string(),
            messages: vec![Message::user("Hello")],
            max_tokens: 1024,
            temperature: 0.5,
            ..Default::default()
        };

        let request = provider.build_request(&params);

        assert_eq!(request["model"], "gpt-4");
        assert_eq!(request["max_tokens"], 1024);
        assert_eq!(request["temperature"], 0.5);
        assert!(request.get("tools").is_none());
        assert!(request.get("tool_choice").is_none());

        let messages = request["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0]["role"], "user");
        assert_eq!(messages[0]["content"], "Hello");
    }

    #[test]
    fn test_build_request_multiple_messages() {
        let provider = OpenRouterProvider::new("sk-test", None, None);
        let params = ChatParams {
            model: "gpt-4".to_string(),
            messages: vec![
                Message::system("You are a travel assistant"),
                Message::user("Hello"),
                Message::assistant("Hi there"),
            ],
            ..Default::default()
        };

        let request = provider.build_request(&params);
        let messages = request["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert_eq!(messages[2]["role"], "assistant");
        assert_eq!(messages[2]["content"], "Hi there");
    }

    #[test]
    fn test_build_request_tool_message() {
        let provider = OpenRouterProvider::new("sk-test", None, None);
        let params = ChatParams {
            model: "gpt-4".to_string(),
            messages: vec![Message::tool("call_123", "weather", "{\"temp\": 22}")],
            ..Default::default()
        };

        let request = provider.build_request(&params);
        let messages = request["messages"].as_array().unwrap();
        assert_eq!(messages[0]["role"], "tool");
        assert_eq!(messages[0]["content"], "{\"temp\": 22}");
        assert_eq!(messages[0]["tool_call_id"], "call_123");
        assert_eq!(messages[0]["name"], "weather");
    }

    #[test]
    fn test_build_request_with_tools_auto_choice() {
        let provider = OpenRouterProvider::new("sk-test", None, None);
        let params = ChatParams {
            model: "gpt-4".to_string(),
            messages: vec![Message::user("What's the weather in Tokyo?")],
            tools: vec![Tool::new(
                "weather",
                "Current weather for a city",
                json!({
                    "type": "object",
                    "properties": {
                        "city": {"type": "string"}
                    }
                }),
            )],
            ..Default::default()
        };

        let request = provider.build_request(&params);

        let tools = request["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["type"], "function");
        assert_eq!(tools[0]["function"]["name"], "weather");
        assert_eq!(request["tool_choice"], "auto");
    }

    #[test]
    fn test_build_request_with_required_choice() {
        let provider = OpenRouterProvider::new("sk-test", None, None);
        let params = ChatParams {
            model: "gpt-4".to_string(),
            messages: vec![Message::user("Plan my budget")],
            tools: vec![Tool::new("budget", "Travel budget breakdown", json!({}))],
            tool_choice: ToolChoice::Required("budget".to_string()),
            ..Default::default()
        };

        let request = provider.build_request(&params);
        let tool_choice = &request["tool_choice"];
        assert_eq!(tool_choice["type"], "function");
        assert_eq!(tool_choice["function"]["name"], "budget");
    }

    #[test]
    fn test_build_request_with_none_choice() {
        let provider = OpenRouterProvider::new("sk-test", None, None);
        let params = ChatParams {
            model: "gpt-4".to_string(),
            messages: vec![Message::user("Hello")],
            tools: vec![Tool::new("quote", "Inspirational quote", json!({}))],
            tool_choice: ToolChoice::None,
            ..Default::default()
        };

        let request = provider.build_request(&params);
        assert_eq!(request["tool_choice"], "none");
    }

    // ========== parse_response Tests ==========

    #[test]
    fn test_parse_response_simple() {
        let provider = OpenRouterProvider::new("sk-test", None, None);
        let response_json = json!({
            "choices": [{
                "message": {
                    "content": "Hello!",
                    "role": "assistant"
                },
                "finish_reason": "stop"
            }],
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": 5,
                "total_tokens": 15
            }
        });

        let response = provider.parse_response(response_json).unwrap();

        assert_eq!(response.content, Some("Hello!".to_string()));
        assert!(response.tool_calls.is_empty());
        assert_eq!(response.finish_reason, "stop");
        assert_eq!(response.usage.total_tokens, 15);
    }

    #[test]
    fn test_parse_response_with_tool_calls() {
        let provider = OpenRouterProvider::new("sk-test", None, None);
        let response_json = json!({
            "choices": [{
                "message": {
                    "content": serde_json::Value::Null,
                    "role": "assistant",
                    "tool_calls": [{
                        "id": "call_123",
                        "type": "function",
                        "function": {
                            "name": "weather",
                            "arguments": "{\"city\": \"Tokyo\"}"
                        }
                    }]
                },
                "finish_reason": "tool_calls"
            }],
            "usage": {
                "prompt_tokens": 20,
                "completion_tokens": 15,
                "total_tokens": 35
            }
        });

        let response = provider.parse_response(response_json).unwrap();

        assert_eq!(response.content, None);
        assert_eq!(response.tool_calls.len(), 1);
        assert_eq!(response.tool_calls[0].id, "call_123");
        assert_eq!(response.tool_calls[0].name, "weather");
        assert_eq!(response.tool_calls[0].arguments, json!({"city": "Tokyo"}));
        assert_eq!(response.finish_reason, "tool_calls");
    }

    #[test]
    fn test_parse_response_arguments_as_object() {
        // Some endpoints return arguments as an object instead of a string.
        let provider = OpenRouterProvider::new("sk-test", None, None);
        let response_json = json!({
            "choices": [{
                "message": {
                    "tool_calls": [{
                        "id": "call_1",
                        "function": {
                            "name": "mood",
                            "arguments": {"weather": "sunny"}
                        }
                    }]
                },
                "finish_reason": "tool_calls"
            }]
        });

        let response = provider.parse_response(response_json).unwrap();
        assert_eq!(response.tool_calls[0].arguments, json!({"weather": "sunny"}));
    }

    #[test]
    fn test_parse_response_missing_usage() {
        let provider = OpenRouterProvider::new("sk-test", None, None);
        let response_json = json!({
            "choices": [{
                "message": { "content": "Hello" },
                "finish_reason": "stop"
            }]
        });

        let response = provider.parse_response(response_json).unwrap();
        assert_eq!(response.usage.prompt_tokens, 0);
        assert_eq!(response.usage.total_tokens, 0);
    }

    #[test]
    fn test_parse_response_empty_choices() {
        let provider = OpenRouterProvider::new("sk-test", None, None);
        let result = provider.parse_response(json!({ "choices": [], "usage": {} }));
        assert!(matches!(result, Err(ProviderError::InvalidResponse)));
    }

    #[test]
    fn test_parse_response_missing_choices() {
        let provider = OpenRouterProvider::new("sk-test", None, None);
        let result = provider.parse_response(json!({ "usage": {} }));
        assert!(matches!(result, Err(ProviderError::InvalidResponse)));
    }
}
