use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Directory for rolling log files: `$TAGDEX_LOG_DIR`, else `~/.tagdex/logs`.
pub fn log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TAGDEX_LOG_DIR") {
        return PathBuf::from(dir);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".tagdex/logs")
}

/// File name prefix of a component's daily log, e.g. `tagdex-cli.2026-10-19`.
pub fn log_file_prefix(component: &str) -> String {
    format!("tagdex-{component}")
}

/// Level filter from `$TAGDEX_LOG`, then `$RUST_LOG`, defaulting to `info`.
fn level_filter() -> EnvFilter {
    EnvFilter::try_from_env("TAGDEX_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber: a daily rolling file under [`log_dir`] and, when
/// `to_stderr` is set, a compact stderr layer. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn init_logging(component: &str, to_stderr: bool) -> WorkerGuard {
    let dir = log_dir();
    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Cannot create log directory {}: {e}", dir.display());
    }

    let appender = tracing_appender::rolling::daily(&dir, log_file_prefix(component));
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let stderr = to_stderr.then(|| {
        fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(level_filter())
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(stderr)
        .init();

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_prefix() {
        assert_eq!(log_file_prefix("cli"), "tagdex-cli");
    }

    #[test]
    fn test_log_dir_is_tagdex_specific() {
        let dir = log_dir();
        if std::env::var_os("TAGDEX_LOG_DIR").is_none() {
            assert!(dir.ends_with(".tagdex/logs"));
        }
    }
}
