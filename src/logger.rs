use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};
use parking_lot::Mutex;
use std::fs::OpenOptions;
use std::io::{self, Write};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// `log` records go through this logger; tracing spans go through the fmt layer.
/// Both only ever write to the debug log file.
struct RunLogger;

static LOGGER: RunLogger = RunLogger;
static LOGGING_ENABLED: std::sync::LazyLock<Mutex<bool>> =
    std::sync::LazyLock::new(|| Mutex::new(false));
static LOG_FILE: std::sync::LazyLock<Mutex<Option<std::fs::File>>> =
    std::sync::LazyLock::new(|| Mutex::new(None));
static VERBOSE_LOGGING: std::sync::LazyLock<Mutex<bool>> =
    std::sync::LazyLock::new(|| Mutex::new(false));

fn append_to_log_file(bytes: &[u8]) {
    if let Some(file) = LOG_FILE.lock().as_mut() {
        let _ = file.write_all(bytes);
        let _ = file.flush();
    }
}

#[derive(Clone)]
struct LogFileWriter;

impl Write for LogFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        append_to_log_file(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogFileWriter {
    type Writer = LogFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogFileWriter
    }
}

/// HTTP stack targets that are only let through in verbose mode
fn is_http_stack_target(target: &str) -> bool {
    ["reqwest", "hyper", "h2", "rustls", "want", "mio"]
        .iter()
        .any(|prefix| target.starts_with(prefix))
}

impl log::Log for RunLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if !*LOGGING_ENABLED.lock() {
            return false;
        }
        if is_http_stack_target(metadata.target()) && !*VERBOSE_LOGGING.lock() {
            return false;
        }
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let line = format!(
                "{} {} [{}] - {}\n",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            );
            append_to_log_file(line.as_bytes());
        }
    }

    fn flush(&self) {}
}

/// Install the `log` logger and the tracing subscriber once per process.
///
/// Records are dropped until [`enable_logging`] is called and a file is set
/// with [`set_log_file`].
pub fn init() -> Result<(), String> {
    use std::sync::{Once, OnceLock};
    static INIT: Once = Once::new();
    static INIT_RESULT: OnceLock<Result<(), String>> = OnceLock::new();

    INIT.call_once(|| {
        if std::env::var("RELEASE_WEAVER_VERBOSE").is_ok() {
            set_verbose_logging(true);
        }

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "release_weaver=debug,warn".into());

        let fmt_layer = fmt::Layer::new()
            .with_target(true)
            .with_timer(fmt::time::ChronoUtc::rfc_3339())
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(LogFileWriter);

        let result = Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| format!("tracing setup failed: {e}"))
            .and_then(|()| {
                log::set_logger(&LOGGER)
                    .map(|()| log::set_max_level(LevelFilter::Debug))
                    .map_err(|e| format!("log setup failed: {e}"))
            });

        let _ = INIT_RESULT.set(result);
    });

    INIT_RESULT
        .get()
        .cloned()
        .unwrap_or_else(|| Err("Initialization failed unexpectedly".to_string()))
}

pub fn enable_logging() {
    *LOGGING_ENABLED.lock() = true;
}

pub fn disable_logging() {
    *LOGGING_ENABLED.lock() = false;
}

pub fn set_verbose_logging(enabled: bool) {
    *VERBOSE_LOGGING.lock() = enabled;
}

pub fn set_log_file(file_path: &str) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path)?;

    *LOG_FILE.lock() = Some(file);
    Ok(())
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Log;
    use tempfile::TempDir;

    fn debug_metadata(target: &str) -> Metadata<'_> {
        Metadata::builder().target(target).level(Level::Debug).build()
    }

    // Single test: it flips process-wide switches
    #[test]
    fn test_records_are_gated_by_enable_logging() {
        init().expect("logger should install");

        let dir = TempDir::new().expect("Failed to create temporary directory");
        let path = dir.path().join("debug.log");
        set_log_file(path.to_str().expect("utf-8 path")).expect("log file should open");

        disable_logging();
        crate::log_debug!("record-while-disabled");
        assert!(!LOGGER.enabled(&debug_metadata("release_weaver::commands")));

        enable_logging();
        crate::log_debug!("record-while-enabled");
        assert!(LOGGER.enabled(&debug_metadata("release_weaver::commands")));

        set_verbose_logging(false);
        assert!(!LOGGER.enabled(&debug_metadata("hyper::client::pool")));
        set_verbose_logging(true);
        assert!(LOGGER.enabled(&debug_metadata("hyper::client::pool")));
        set_verbose_logging(false);

        disable_logging();
        *LOG_FILE.lock() = None;

        let written = std::fs::read_to_string(&path).expect("log file should be readable");
        assert!(written.contains("record-while-enabled"));
        assert!(!written.contains("record-while-disabled"));
    }
}
