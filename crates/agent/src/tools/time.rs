//! Current time in a named time zone

use async_trait::async_trait;
use chrono::Utc;
use chrono_tz::Tz;
use serde_json::{json, Value};

use super::ToolTrait;

#[derive(Default)]
pub struct CurrentTimeTool;

impl CurrentTimeTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolTrait for CurrentTimeTool {
    fn name(&self) -> &str {
        "get_current_time"
    }

    fn description(&self) -> &str {
        "Return the current time in a specified IANA time zone, e.g. \
         'Asia/Taipei' or 'Europe/Paris'."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "tz_identifier": {
                    "type": "string",
                    "description": "IANA time zone identifier"
                }
            },
            "required": ["tz_identifier"]
        })
    }

    async fn execute(
        &self,
        args: Value,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let identifier = args["tz_identifier"].as_str().unwrap_or("").trim();

        let result = match identifier.parse::<Tz>() {
            Ok(tz) => {
                let now = Utc::now().with_timezone(&tz);
                json!({
                    "status": "success",
                    "report": format!(
                        "The current time is {}",
                        now.format("%Y-%m-%d %H:%M:%S %Z%z")
                    )
                })
            }
            Err(e) => json!({
                "status": "error",
                "error_message": format!(
                    "An error occurred while fetching the current time: {}",
                    e
                )
            }),
        };

        Ok(result.to_string())
    }
}
