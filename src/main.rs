use anyhow::Result;
use clap::Parser;
use cpix::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Base URL of the price index API (defaults to the public endpoint)
    url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long)]
    config_path: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = cpix::run(cli.config_path.as_deref(), cli.url.as_deref()).await;

    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            tracing::error!(error = %e, "Application failed");
            Err(e)
        }
    }
}
