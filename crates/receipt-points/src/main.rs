use clap::Parser;
use receipt_points::{init_logging, run_server, CliArgs, LoggingConfig, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliArgs::parse();
    let config = ServerConfig::from_args(cli)?;

    init_logging(LoggingConfig::with_format(config.log_format))?;

    run_server(config).await
}
