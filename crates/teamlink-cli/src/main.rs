use anyhow::Result;
use clap::Parser as _;
use command::Cli;

mod api;
mod command;
mod config;
mod logger;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init_logger(cli.args.verbose);

    cli.run().await?;

    Ok(())
}
