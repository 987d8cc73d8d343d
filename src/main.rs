use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use jobcrawl::cli::{commands, Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Crawl(args) => {
            commands::crawl(&args).await?;
        }
        Commands::InitConfig { config, force } => {
            commands::init_config(config.as_deref(), force)?;
        }
    }

    Ok(())
}
