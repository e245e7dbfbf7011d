//! Wayfarer command implementations

use anyhow::{Context, Result};
use std::io::Write;

use wayfarer_agent::{register_default_tools, AgentLoop, ToolRegistry};
use wayfarer_budget::{compute, BudgetRequest};
use wayfarer_config::{self, Config};
use wayfarer_provider::OpenRouterProvider;

/// Initialize the config file
pub async fn init_command() -> Result<()> {
    println!("Initializing wayfarer...");

    let config = wayfarer_config::init().await?;
    let config_path = wayfarer_config::config_path();

    println!("Config at {}", config_path.display());
    println!("Model: {}", config.default_model());
    println!("\nNext steps:");
    println!("  1. Add your API key to {}", config_path.display());
    println!("     Get one at: https://openrouter.ai/keys");
    println!("  2. Start chatting: wayfarer chat -m \"Hello!\"");

    Ok(())
}

fn build_agent(config: &Config) -> Result<AgentLoop<OpenRouterProvider>> {
    let api_key = config
        .api_key()
        .context("No API key configured. Set one in ~/.wayfarer/config.json")?;
    let provider = OpenRouterProvider::new(
        api_key,
        config.api_base(),
        Some(config.default_model()),
    );

    let mut tools = ToolRegistry::new();
    register_default_tools(&mut tools, config.weather_api_key());

    Ok(AgentLoop::new(
        provider,
        config.default_model(),
        config.agent.defaults.max_tool_iterations,
        tools,
    ))
}

/// Chat with the agent
pub async fn chat_command(message: Option<String>) -> Result<()> {
    let config = Config::load().await?;
    let agent = build_agent(&config)?;

    if let Some(msg) = message {
        let response = agent.process(&msg).await?;
        println!("\n{}", response);
    } else {
        println!("Interactive mode (type 'exit' to quit)");

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut input = String::new();
            std::io::stdin().read_line(&mut input)?;

            let input = input.trim();
            if input.is_empty() {
                continue;
            }
            if input == "exit" || input == "quit" {
                break;
            }

            match agent.process(input).await {
                Ok(response) => println!("\n{}\n", response),
                Err(e) => println!("\nError: {}\n", e),
            }
        }
    }

    Ok(())
}

/// Run the budget allocator offline and print the report
pub fn budget_command(
    total_budget: f64,
    days: i64,
    country: String,
    people: i64,
    json: bool,
) -> Result<()> {
    let request = BudgetRequest::new(total_budget, days, &country, people);
    let report = compute(&request);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.formatted_result);
    }

    Ok(())
}

/// List the registered tools
pub async fn tools_command() -> Result<()> {
    let config = Config::load().await.unwrap_or_default();

    let mut registry = ToolRegistry::new();
    register_default_tools(&mut registry, config.weather_api_key());

    let mut definitions = registry.definitions();
    definitions.sort_by(|a, b| a.function.name.cmp(&b.function.name));

    println!("Registered tools:");
    for def in definitions {
        println!("  {} - {}", def.function.name, def.function.description);
    }

    Ok(())
}

/// Show config status
pub async fn status_command() -> Result<()> {
    let config_path = wayfarer_config::config_path();

    println!("Wayfarer Status");
    println!("---------------");
    println!(
        "Config:  {} {}",
        config_path.display(),
        if config_path.exists() {
            "[OK]"
        } else {
            "[Missing]"
        }
    );

    if config_path.exists() {
        let config = Config::load().await?;
        println!("Model:   {}", config.default_model());
        println!(
            "API Key: {}",
            if config.has_api_key() {
                "[Set]"
            } else {
                "[Missing]"
            }
        );
        println!(
            "Weather: {}",
            if config.weather_api_key().is_some() {
                "[Set]"
            } else {
                "[Missing]"
            }
        );
    }

    Ok(())
}
