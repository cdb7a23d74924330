/// Tracing setup for the CLI.
///
/// Diagnostics go to stderr so report output on stdout stays clean. When a
/// log directory is given, a plain-text copy is appended to
/// `grouppulse.log` in that directory.
use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes logging, optionally mirroring to a file in `log_dir`.
///
/// Defaults to INFO, overridable via the RUST_LOG env var.
pub fn init(log_dir: Option<&Path>) -> Result<()> {
    let file_layer = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
            let file_appender = tracing_appender::rolling::never(dir, "grouppulse.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false) // No ANSI codes in log files
                    .with_target(true),
            )
        }
        None => None,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .ok(); // Ignore error if already initialized

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        init(Some(&log_dir)).unwrap();
        tracing::info!("log line for test");

        assert!(log_dir.exists());
    }

    #[test]
    fn test_init_without_directory() {
        assert!(init(None).is_ok());
    }
}
