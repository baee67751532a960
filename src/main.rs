use anyhow::Result;
use clap::{Parser, Subcommand};

/// mailform - contact form mail backend
#[derive(Parser)]
#[command(name = "mailform")]
#[command(version)]
#[command(about = "Forwards contact-form submissions by email", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = mailform::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    // Initialize observability (tracing + logging)
    mailform::observability::init_observability(
        &config.observability.log_level,
        config.server.production,
    )?;

    match cli.command {
        Commands::Serve { host, port } => mailform::server::serve(config, host, port).await,
    }
}
