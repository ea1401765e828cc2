use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. Progress lines go both to stderr and to
/// the debug log file, which is truncated at startup and appended thereafter.
///
/// A second call is a no-op so tests can initialize freely.
pub fn init(debug_log: &Path) -> io::Result<()> {
    let file = File::create(debug_log)?;

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(io::stderr).with_ansi(false))
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .try_init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run_model_debug.log");

        init(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_init_truncates_existing_log() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("run_model_debug.log");
        std::fs::write(&path, "stale content from a previous run").unwrap();

        init(&path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale content"));
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let dir = tempdir().unwrap();
        init(&dir.path().join("a.log")).unwrap();
        init(&dir.path().join("b.log")).unwrap();
    }
}
