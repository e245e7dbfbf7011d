//! Random travel quote

use async_trait::async_trait;
use rand::seq::SliceRandom;
use serde_json::{json, Value};

use super::ToolTrait;

pub const QUOTES: &[&str] = &[
    "The world is a book and those who do not travel read only one page.",
    "Travel is the only thing you buy that makes you richer.",
    "A journey of a thousand miles begins with a single step.",
    "Not all those who wander are lost.",
    "Take only memories, leave only footprints.",
    "To travel is to live.",
    "Adventure is worthwhile.",
    "Wherever you go becomes a part of you somehow.",
];

#[derive(Default)]
pub struct QuoteTool;

impl QuoteTool {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ToolTrait for QuoteTool {
    fn name(&self) -> &str {
        "get_quote"
    }

    fn description(&self) -> &str {
        "Return a random travel quote to inspire the trip."
    }

    fn parameters(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(
        &self,
        _args: Value,
    ) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
        let mut rng = rand::thread_rng();
        let quote = QUOTES.choose(&mut rng).copied().unwrap_or(QUOTES[0]);
        Ok(quote.to_string())
    }
}
