//! Travel budget tool
//!
//! Bridges the model's tool call to the pure allocator and hands back the
//! structured report as JSON.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;
use wayfarer_budget::{compute, BudgetRequest};

use super::ToolTrait;

#[derive(Default)]
pub struct BudgetTool;

impl BudgetTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolTrait for BudgetTool {
    fn name(&self) -> &str {
        "calculate_budget"
    }

    fn description(&self) -> &str {
        "Calculate a per-person daily travel budget breakdown (food, transport, \
         accommodation, attractions, others) for a destination, with warnings \
         and an overall suggestion. Country or city names must be in English."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "total_budget": {
                    "type": "number",
                    "description": "Total trip budget for the whole group"
                },
                "days": {
                    "type": "integer",
                    "description": "Number of travel days"
                },
                "country": {
                    "type": "string",
                    "description": "Destination country or city, in English"
                },
                "num_people": {
                    "type": "integer",
                    "description": "Number of travelers (default 1)"
                }
            },
            "required": ["total_budget", "days", "country"]
        })
    }

    async fn execute(
        &self,
        args: Value,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let request: BudgetRequest = serde_json::from_value(args)?;
        debug!(
            "calculating budget: {} for {} days in {}",
            request.total_budget, request.days, request.country
        );

        let report = compute(&request);
        Ok(serde_json::to_string(&report)?)
    }
}
