use anyhow::Result;
use clap::Parser;
use weather_widget::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    weather_widget::run(cli).await
}
