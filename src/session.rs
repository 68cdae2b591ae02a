//! Process-wide setup shared by every run.

use std::str::FromStr;
use tracing_subscriber::{filter::Directive, layer::SubscriberExt, EnvFilter, Registry};

/// Environment variable used to control log tracing.
pub const LOG_ENV_VAR: &str = "SERGE_GCD_LOG";

/// Build the log filter from SERGE_GCD_LOG plus an optional `--log-level` directive.
pub fn log_filter(log_level: Option<&str>) -> Result<EnvFilter, String> {
    let filter = EnvFilter::from_env(LOG_ENV_VAR);
    match log_level {
        Some(level) => {
            let directive = Directive::from_str(level)
                .map_err(|e| format!("invalid log level `{}`: {}", level, e))?;
            Ok(filter.add_directive(directive))
        }
        None => Ok(filter),
    }
}

/// Install the global logger. Logs go to stderr so stdout carries only results.
pub fn init_logger(log_level: Option<&str>) -> Result<(), String> {
    let filter = log_filter(log_level)?;
    let subscriber = Registry::default().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true),
    );
    tracing::subscriber::set_global_default(subscriber).map_err(|e| e.to_string())
}
