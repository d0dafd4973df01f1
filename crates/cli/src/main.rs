use std::{fs, path::PathBuf, sync::Mutex};

use anyhow::{Context, Result};
use appforge_engine::{DeploymentClient, NotificationTimer, SimulatedDeploymentClient, WorkflowController};
use appforge_types::{DeployReceipt, GeneratedApp};
use appforge_util::{ForgeConfig, default_log_path};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Describe an app and watch it come to life.
///
/// Without a subcommand the interactive terminal UI starts.
#[derive(Debug, Parser)]
#[command(name = "appforge", version)]
struct Cli {
    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate an app from a prompt and print it
    Generate(PromptArgs),
    /// Generate an app, then hand it to the (simulated) deployment client
    Deploy(PromptArgs),
}

#[derive(Debug, Args)]
struct PromptArgs {
    /// Description of the app to build
    #[arg(required = true, num_args = 1.., value_name = "PROMPT")]
    prompt: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Override the simulated generation latency
    #[arg(long, value_name = "MS")]
    latency_ms: Option<u64>,
}

impl PromptArgs {
    fn prompt(&self) -> String {
        self.prompt.join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.command.is_none());

    let mut config = ForgeConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    // No subcommand => TUI
    let Some(command) = cli.command else {
        return appforge_tui::run(config).await;
    };

    match command {
        Command::Generate(args) => {
            apply_latency_override(&mut config, &args);
            let app = generate(&config, &args.prompt()).await?;
            println!("{}", render_app(&app, args.format)?);
        }
        Command::Deploy(args) => {
            apply_latency_override(&mut config, &args);
            let app = generate(&config, &args.prompt()).await?;
            let banner = NotificationTimer::deploying_to(&config.deploy_target, config.notification_duration());
            eprintln!("{}", banner.message());

            let client = SimulatedDeploymentClient::new(config.deploy_target.clone());
            let receipt = client
                .deploy(&app)
                .await
                .with_context(|| format!("failed to deploy '{}'", app.title))?;
            println!("{}", render_receipt(&receipt, args.format)?);
        }
    }
    Ok(())
}

/// Headless runs log to stderr. The TUI owns the terminal, so it logs to a
/// file in the config directory instead.
fn init_tracing(tui: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if !tui {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
        return;
    }

    let path = default_log_path();
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let Ok(file) = fs::OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

fn apply_latency_override(config: &mut ForgeConfig, args: &PromptArgs) {
    if let Some(latency_ms) = args.latency_ms {
        config.generation_latency_ms = latency_ms;
    }
}

async fn generate(config: &ForgeConfig, prompt: &str) -> Result<GeneratedApp> {
    let mut controller = WorkflowController::new(config.generation_latency());
    controller.set_prompt(prompt);
    let app = controller
        .generate_and_wait()
        .await
        .cloned()
        .context("prompt is empty; describe the app you want to build")?;
    info!(title = %app.title, "app generated");
    Ok(app)
}

fn render_app(app: &GeneratedApp, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => format!("{}\n{}\n\n{}", app.title, app.description, app.code),
        OutputFormat::Json => serde_json::to_string_pretty(app)?,
    })
}

fn render_receipt(receipt: &DeployReceipt, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Text => {
            let suffix = if receipt.simulated { " (simulated)" } else { "" };
            format!("Deployed {} to {}{suffix}", receipt.slug, receipt.target)
        }
        OutputFormat::Json => serde_json::to_string_pretty(receipt)?,
    })
}
