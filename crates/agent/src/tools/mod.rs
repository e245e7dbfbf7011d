//! Built-in travel tools

pub mod budget;
pub mod mood;
pub mod quote;
pub mod time;
pub mod weather;

pub use budget::BudgetTool;
pub use mood::MoodTool;
pub use quote::QuoteTool;
pub use time::CurrentTimeTool;
pub use weather::WeatherTool;

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use wayfarer_provider::Tool;

use crate::AgentError;

type BoxedTool = Box<dyn ToolTrait + Send + Sync>;

/// A callable the model can invoke by name with JSON arguments.
#[async_trait]
pub trait ToolTrait: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn parameters(&self) -> Value;
    async fn execute(
        &self,
        args: Value,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>>;
}

pub fn to_provider_tool(tool: &dyn ToolTrait) -> Tool {
    Tool::new(tool.name(), tool.description(), tool.parameters())
}

/// Tool registry
pub struct ToolRegistry {
    tools: HashMap<String, BoxedTool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register<T: ToolTrait + 'static>(&mut self, tool: T) {
        let name = tool.name().to_string();
        self.tools.insert(name, Box::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<&(dyn ToolTrait + Send + Sync)> {
        self.tools.get(name).map(|t| t.as_ref())
    }

    pub fn has(&self, name: &str) -> bool {
        self.tools.contains_key(name)
    }

    pub fn definitions(&self) -> Vec<Tool> {
        self.tools
            .values()
            .map(|t| to_provider_tool(t.as_ref()))
            .collect()
    }

    pub async fn execute(&self, name: &str, args: Value) -> crate::Result<String> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| AgentError::ToolNotFound(name.to_string()))?;
        tool.execute(args)
            .await
            .map_err(|e| AgentError::ToolExecution(e.to_string()))
    }

    pub fn names(&self) -> Vec<String> {
        self.tools.keys().cloned().collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Register the built-in travel tools.
pub fn register_default_tools(registry: &mut ToolRegistry, weather_api_key: Option<String>) {
    registry.register(BudgetTool::new());
    registry.register(WeatherTool::new(weather_api_key));
    registry.register(CurrentTimeTool::new());
    registry.register(MoodTool::new());
    registry.register(QuoteTool::new());
}
