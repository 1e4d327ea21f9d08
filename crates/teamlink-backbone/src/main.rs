use std::path::PathBuf;

use clap::Parser;

use crate::logger::{LoggerConfig, LoggerFormat};

mod application;
mod config;
mod domain;
mod logger;
mod server;

#[derive(Parser, Debug, Default)]
#[command(version, about)]
struct Args {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Sets a port to start a backbone server
    #[arg(short, long, value_name = "PORT")]
    pub port: Option<u16>,
    /// Sets the Microsoft Graph base url requests are relayed to
    #[arg(long)]
    pub graph_base_url: Option<String>,
    /// Sets the log output format
    #[arg(long, value_enum, default_value_t)]
    pub log_format: LoggerFormat,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_logger(LoggerConfig { format: args.log_format });

    let app_config = config::load_config(args)?;
    let application = application::init(&app_config)?;

    server::run(application, (&app_config).into()).await?;
    Ok(())
}
