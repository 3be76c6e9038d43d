//! Meal Planner Server
//!
//! Run with: cargo run --bin meal-planner -- serve
//!
//! # Configuration
//!
//! Settings come from a TOML file (see `meal-planner config`), then
//! environment variables, then command-line flags:
//! - `MEAL_PLANNER_HOST` / `--host`
//! - `MEAL_PLANNER_PORT` / `--port`
//! - `MEAL_PLANNER_STATIC_DIR` / `--static-dir`
//! - `MEAL_PLANNER_UPSTREAM_URL` / `--upstream`
//! - `MEAL_PLANNER_LOG_LEVEL`, `MEAL_PLANNER_LOG_FORMAT`
//! - `RUST_LOG`: Overrides the log filter

use anyhow::Context;
use clap::{Parser, Subcommand};
use meal_planner::api::{serve, AppState};
use meal_planner::config::{generate_default_config, Config};
use meal_planner::upstream::{MealApiClient, MealService};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "meal-planner")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Meal planner web server")]
#[command(long_about = "Serves the meal planner frontend and its JSON API.\nMeal plans, tips and the food database come from the configured meal-plan service.")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server (default)
    Serve(ServeArgs),

    /// Print a default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Check that the meal-plan service answers
    Check {
        /// Service URL (default: from config)
        #[arg(long)]
        upstream: Option<String>,
    },
}

#[derive(clap::Args, Default)]
struct ServeArgs {
    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Meal-plan service URL
    #[arg(long)]
    upstream: Option<String>,

    /// Directory with the built frontend
    #[arg(long)]
    static_dir: Option<PathBuf>,
}

impl ServeArgs {
    fn apply(self, config: &mut Config) {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(upstream) = self.upstream {
            config.upstream.base_url = upstream;
        }
        if let Some(dir) = self.static_dir {
            config.server.static_dir = dir;
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve(ServeArgs::default())) {
        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing config to {:?}", path))?;
                    println!("Wrote default config to {:?}", path);
                }
                None => print!("{}", content),
            }
            Ok(())
        }
        Commands::Check { upstream } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(url) = upstream {
                config.upstream.base_url = url;
            }
            meal_planner::logging::init(&config.logging);
            check(config).await
        }
        Commands::Serve(args) => {
            let mut config = load_config(cli.config.as_deref())?;
            args.apply(&mut config);
            meal_planner::logging::init(&config.logging);
            run(config).await
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_with_env(path).context("loading config"),
        None => Ok(Config::load_default()),
    }
}

async fn run(config: Config) -> anyhow::Result<()> {
    tracing::info!("Starting meal planner v{}", env!("CARGO_PKG_VERSION"));

    let client = MealApiClient::new(config.upstream.clone()).context("building HTTP client")?;
    tracing::info!("Meal-plan service: {}", config.upstream.base_url);

    match client.health_check().await {
        Ok(()) => tracing::info!("Meal-plan service connection verified"),
        Err(e) => tracing::warn!("Meal-plan service not available: {} (API calls will fail until it is)", e),
    }

    let state = AppState::new(Arc::new(client), config.server.clone());
    serve(state, &config.server).await?;

    tracing::info!("Meal planner stopped");
    Ok(())
}

async fn check(config: Config) -> anyhow::Result<()> {
    let client = MealApiClient::new(config.upstream.clone()).context("building HTTP client")?;

    client
        .health_check()
        .await
        .with_context(|| format!("meal-plan service at {} is not answering", config.upstream.base_url))?;

    let foods = client.foods().await?;
    println!(
        "Meal-plan service at {} is up: {} proteins, {} veggies, {} carbs",
        config.upstream.base_url,
        foods.proteins.len(),
        foods.veggies.len(),
        foods.carbs.len()
    );
    Ok(())
}
