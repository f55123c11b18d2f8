use crate::config::settings::{LogFormat, LoggingSettings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber. Logs go to stderr so prompts on stdout stay clean.
pub fn init_cli_logger(verbose: bool, logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, logging)));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match logging.format {
        LogFormat::Compact => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.compact())
            .init(),
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init(),
    }
}

fn default_directive(verbose: bool, logging: &LoggingSettings) -> String {
    if verbose {
        "vtm_xp=debug".to_string()
    } else {
        format!("vtm_xp={}", logging.level.trim())
    }
}
