use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to log file. If None, logs only to stderr
pub fn init(verbose: bool, log_file: Option<PathBuf>) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    if let Some(log_path) = log_file {
        let (dir, file_name) = split_log_path(&log_path);
        let _ = std::fs::create_dir_all(&dir);
        let file_appender = tracing_appender::rolling::daily(dir, file_name);

        // Structured logs on disk, no colors.
        let file_layer = fmt::layer()
            .with_writer(file_appender)
            .with_ansi(false)
            .json();

        subscriber.with(file_layer).init();
    } else {
        subscriber.init();
    }
}

/// File name used when `--log-file` names a directory.
const DEFAULT_LOG_FILE: &str = "itemql.log";

/// Directory and file-name prefix for the daily appender.
fn split_log_path(path: &Path) -> (PathBuf, OsString) {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    match path.file_name() {
        Some(name) => (dir, name.to_os_string()),
        None => (path.to_path_buf(), OsString::from(DEFAULT_LOG_FILE)),
    }
}

/// Filter used when `RUST_LOG` is unset.
fn default_filter(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("itemql={level},tower_http={level}")
}
