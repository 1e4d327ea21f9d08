use clap::ValueEnum;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

#[derive(Default)]
pub(super) struct LoggerConfig {
    pub format: LoggerFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub(super) enum LoggerFormat {
    #[default]
    Json,
    Pretty,
}

pub(super) fn init_logger(config: LoggerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = SubscriberBuilder::default().with_env_filter(filter);

    match config.format {
        LoggerFormat::Json => builder.json().init(),
        LoggerFormat::Pretty => builder.pretty().init(),
    }
}
