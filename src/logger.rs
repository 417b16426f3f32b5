//! Process-wide logging.
//!
//! `log` records (through the `log_*!` macros) and `tracing` spans from the theme pipeline
//! share one optional log file. Nothing is written until logging is enabled and a file is set.

use chrono::Local;
use log::{Level, LevelFilter, Metadata, Record};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::{LazyLock, OnceLock};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
};

const DEFAULT_DIRECTIVES: &str = "vsc_to_tm=debug,warn";

#[derive(Default)]
struct LogState {
    enabled: bool,
    verbose: bool,
    file: Option<File>,
}

impl LogState {
    fn accepts(&self, metadata: &Metadata) -> bool {
        if !self.enabled {
            return false;
        }

        let max = if metadata.target().starts_with("vsc_to_tm") || self.verbose {
            Level::Debug
        } else {
            Level::Warn
        };
        metadata.level() <= max
    }

    fn append(&mut self, bytes: &[u8]) {
        if !self.enabled {
            return;
        }
        if let Some(file) = self.file.as_mut() {
            let _ = file.write_all(bytes).and_then(|()| file.flush());
        }
    }
}

static STATE: LazyLock<Mutex<LogState>> = LazyLock::new(|| Mutex::new(LogState::default()));

struct RecordLogger;

impl log::Log for RecordLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        STATE.lock().accepts(metadata)
    }

    fn log(&self, record: &Record) {
        let mut state = STATE.lock();
        if !state.accepts(record.metadata()) {
            return;
        }

        let line = format!(
            "{} {} [{}] - {}\n",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            record.level(),
            record.target(),
            record.args()
        );
        state.append(line.as_bytes());
    }

    fn flush(&self) {}
}

static RECORD_LOGGER: RecordLogger = RecordLogger;

/// `tracing` output sink backed by the shared log file.
#[derive(Clone, Copy)]
struct SpanWriter;

impl Write for SpanWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        STATE.lock().append(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> fmt::MakeWriter<'a> for SpanWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        *self
    }
}

/// Install the `log` logger and the `tracing` subscriber. Safe to call more than once.
///
/// # Errors
/// Fails only when neither backend could be installed.
pub fn init() -> Result<(), String> {
    static INIT: OnceLock<Result<(), String>> = OnceLock::new();

    INIT.get_or_init(|| {
        if std::env::var("VSC_TO_TM_VERBOSE").is_ok()
            || std::env::var("RUST_LOG").is_ok_and(|v| v.contains("debug") || v.contains("trace"))
        {
            set_verbose_logging(true);
        }

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_DIRECTIVES.into());
        let layer = fmt::Layer::new()
            .with_ansi(false)
            .with_target(true)
            .with_timer(fmt::time::ChronoUtc::rfc_3339())
            .with_span_events(FmtSpan::CLOSE)
            .with_writer(SpanWriter);

        // No log bridge: `log` records go through `RecordLogger` instead
        let spans =
            tracing::subscriber::set_global_default(Registry::default().with(filter).with(layer));
        let records =
            log::set_logger(&RECORD_LOGGER).map(|()| log::set_max_level(LevelFilter::Debug));

        match (spans, records) {
            (Err(spans), Err(records)) => Err(format!(
                "Failed to initialize logging: tracing={spans}, log={records}"
            )),
            _ => Ok(()),
        }
    })
    .clone()
}

pub fn enable_logging() {
    STATE.lock().enabled = true;
}

pub fn disable_logging() {
    STATE.lock().enabled = false;
}

/// Let debug records from other crates through, not just warnings.
pub fn set_verbose_logging(enabled: bool) {
    STATE.lock().verbose = enabled;
}

/// Append log output to `file_path`, creating it if needed.
pub fn set_log_file(file_path: &str) -> io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(file_path)?;

    STATE.lock().file = Some(file);
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
