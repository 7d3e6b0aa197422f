use clap::Parser;
use shortener::cli::Cli;
use shortener::{config, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load(&cli)?;

    server::init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}
