use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

/// Diagnostics go to stderr so stdout only carries command output.
pub(super) fn init_logger(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    SubscriberBuilder::default().with_env_filter(filter).with_writer(std::io::stderr).compact().init();
}
