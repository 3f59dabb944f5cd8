//! CoreFoundry demo CLI.
//!
//! Usage:
//!   corefoundry list                       List discovered tools
//!   corefoundry json                       Print the tool list JSON
//!   corefoundry call <name> --args <json>  Invoke a tool

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde_json::Value;

use corefoundry::config::{self, FoundryConfig};
use corefoundry::{demo, Agent, ToolRegistry};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(name = "corefoundry")]
#[command(version)]
#[command(about = "Minimal tool-calling registry for LLM agents")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the config file (defaults to ~/.corefoundry/corefoundry.toml).
    #[arg(long)]
    config: Option<String>,

    /// Log level (debug, info, warn, error). Overrides the config file.
    #[arg(long)]
    log_level: Option<String>,

    /// Package to autodiscover tools from. Overrides the config file.
    #[arg(long)]
    package: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the names of all discovered tools.
    List,

    /// Print the tool list as sent to model providers.
    Json,

    /// Invoke a tool by name.
    Call {
        /// Tool name.
        name: String,

        /// Arguments as a JSON object.
        #[arg(long, default_value = "{}")]
        args: String,
    },
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(config::resolve_path)
        .unwrap_or_else(|| config::default_home_dir().join(config::CONFIG_FILE));
    let cfg = config::load_config(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    // Initialize logging
    let log_level = cli.log_level.as_deref().unwrap_or(&cfg.log_level);
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let registry = ToolRegistry::global();
    registry.add_modules(demo::modules());
    let agent = build_agent(&cfg, cli.package, registry)?;

    match cli.command {
        Commands::List => cmd_list(&agent),
        Commands::Json => cmd_json(&agent),
        Commands::Call { name, args } => cmd_call(&agent, &name, &args),
    }
}

// ---------------------------------------------------------------------------
// Command implementations
// ---------------------------------------------------------------------------

fn cmd_list(agent: &Agent<'_>) -> Result<()> {
    let names = agent.tool_names();
    println!(
        "{} {} tool(s) available to '{}'",
        ">>>".green().bold(),
        names.len(),
        agent.name
    );
    for name in names {
        println!("  {}", name.bold());
    }
    Ok(())
}

fn cmd_json(agent: &Agent<'_>) -> Result<()> {
    println!("{}", agent.available_tools_json()?);
    Ok(())
}

fn cmd_call(agent: &Agent<'_>, name: &str, raw_args: &str) -> Result<()> {
    let args: Value = serde_json::from_str(raw_args).context("Tool arguments must be valid JSON")?;
    if !args.is_object() {
        anyhow::bail!("Tool arguments must be a JSON object");
    }

    let result = agent.call_tool(name, &args)?;
    println!("{} {}", "Result:".green().bold(), result);
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Build the agent, autodiscovering from the CLI package, then the configured
/// one, then the bundled demo package.
fn build_agent<'r>(
    cfg: &FoundryConfig,
    package: Option<String>,
    registry: &'r ToolRegistry,
) -> Result<Agent<'r>> {
    let package = package
        .or_else(|| cfg.agent.auto_tools_pkg.clone())
        .unwrap_or_else(|| demo::PACKAGE.to_string());

    let agent = Agent::with_auto_tools(&cfg.agent.name, &cfg.agent.description, registry, &package)
        .with_context(|| format!("Failed to discover tools in '{}'", package))?;
    Ok(agent)
}
