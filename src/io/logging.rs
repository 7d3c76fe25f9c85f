use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter (e.g. `debug`, `helpdesk=trace`)
pub const LOG_ENV: &str = "HELPDESK_LOG";
/// Environment variable naming a log file
pub const LOG_FILE_ENV: &str = "HELPDESK_LOG_FILE";

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Log to an append-only file. Used by the dashboard, which owns the terminal.
pub fn init_file_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| -> Box<dyn std::error::Error> { e })?;
    Ok(())
}

/// Log to stderr. Used by the one-shot subcommands.
pub fn init_stderr_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// The log file from the flag or `HELPDESK_LOG_FILE`, if any
pub fn log_file_from_env(flag: Option<&Path>) -> Option<std::path::PathBuf> {
    flag.map(Path::to_path_buf).or_else(|| {
        std::env::var_os(LOG_FILE_ENV)
            .filter(|v| !v.is_empty())
            .map(std::path::PathBuf::from)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_logging_writes_events() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("hd.log");
        init_file_logging(&path).unwrap();
        tracing::info!(id = 7, "ticket added");

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("ticket added"));
        assert!(text.contains("id=7"));

        // Only one global subscriber per process
        assert!(init_file_logging(&tmp.path().join("again.log")).is_err());
    }

    #[test]
    fn test_log_file_flag_wins() {
        let flag = Path::new("/tmp/flag.log");
        assert_eq!(log_file_from_env(Some(flag)).as_deref(), Some(flag));
    }
}
