use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// File name prefix inside the log directory; the daily roller appends the date.
pub const LOG_FILE_PREFIX: &str = "log.txt";

/// Keeps the background file writer alive. Dropping it flushes pending lines.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Console logging always; JSON lines to a daily rolling file when `log_dir` is set.
pub fn init(log_dir: Option<&Path>) -> anyhow::Result<LogGuard> {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".to_string());
    let console_layer = fmt::layer().with_ansi(false).with_target(false);
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::new(filter))
        .with(console_layer);

    let file_guard = match log_dir {
        Some(dir) => {
            let (writer, guard) = file_writer(dir)?;
            let file_layer = fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .with_writer(writer);
            subscriber.with(file_layer).init();
            Some(guard)
        }
        None => {
            subscriber.init();
            None
        }
    };

    Ok(LogGuard {
        _file_guard: file_guard,
    })
}

/// Creates `dir` if needed and returns a non-blocking writer over a daily rolling file.
pub fn file_writer(dir: &Path) -> anyhow::Result<(NonBlocking, WorkerGuard)> {
    fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_writer_creates_rolling_file() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("nested").join("logs");

        let (mut writer, guard) = file_writer(&dir).unwrap();
        writer.write_all(b"{\"message\":\"hello\"}\n").unwrap();
        drop(guard);

        let files: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(files.len(), 1, "{:?}", files);
        assert!(files[0].starts_with(LOG_FILE_PREFIX), "{:?}", files);
        let written = fs::read_to_string(dir.join(&files[0])).unwrap();
        assert!(written.contains("hello"));
    }
}
