//! Faculty Summary Service - Entry Point
//!
//! Serves the HTTP API by default; the `lookup` subcommand performs a
//! one-shot resolve-and-summarize from the command line.

use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use faculty_summary::{
    AuthorDirectoryClient,
    config::Config,
    ops::{self, OpContext},
    server::ApiServer,
};

#[derive(Parser, Debug)]
#[command(name = "faculty-summary")]
#[command(about = "HTTP API for faculty profile summaries")]
#[command(version)]
struct Cli {
    /// Directory API key (optional, enables higher upstream rate limits)
    #[arg(long, env = "AUTHOR_DIRECTORY_API_KEY")]
    api_key: Option<String>,

    /// HTTP server port
    #[arg(long, default_value = "5000", env = "PORT")]
    port: u16,

    /// Directory holding the static front-end
    #[arg(long, default_value = "frontend", env = "FRONTEND_DIR")]
    frontend_dir: std::path::PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve a faculty name and print the summary as JSON
    Lookup {
        /// Exact faculty name to summarize
        name: String,
    },
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let mut config = Config::new(cli.api_key);
    if let Ok(url) = std::env::var("AUTHOR_DIRECTORY_URL") {
        config.directory_api_url = url;
    }

    let client = AuthorDirectoryClient::new(config)?;

    match cli.command {
        Some(Command::Lookup { name }) => {
            let ctx = OpContext::new(Arc::new(client));
            let summary = ops::generate_summary(&ctx, &name).await?;
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        None => {
            tracing::info!(
                version = env!("CARGO_PKG_VERSION"),
                port = cli.port,
                "Starting faculty summary server"
            );

            ApiServer::new(client, cli.frontend_dir).run(cli.port).await?;
        }
    }

    Ok(())
}
