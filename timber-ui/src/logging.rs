//! Tracing setup for the TimberTrack binary.
//!
//! One subscriber with two outputs:
//! - stdout, colored when attached to a terminal, can be muted at runtime;
//! - a log file, silent until [`enable_file_logging`] points it somewhere.
//!
//! A single global filter (reloadable) sits above both.

use anyhow::Result;
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber, error};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "info";

// --- Formatter ---

/// `<local time> <LEVEL> <file:line> <fields>`
struct LocalTimeFormat;

impl<S, N> FormatEvent<S, N> for LocalTimeFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let paint = |code: &'static str| if ansi { code } else { "" };

        write!(
            writer,
            "{}{}{} ",
            paint("\x1b[2m"),
            Local::now().format("%H:%M:%S%.3f"),
            paint("\x1b[0m")
        )?;

        let color = match *meta.level() {
            Level::ERROR => "\x1b[1;31m",
            Level::WARN => "\x1b[1;33m",
            Level::INFO => "\x1b[1;32m",
            Level::DEBUG => "\x1b[1;34m",
            Level::TRACE => "\x1b[1;35m",
        };
        write!(writer, "{}{:>5}{} ", paint(color), meta.level(), paint("\x1b[0m"))?;

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file.rsplit(['/', '\\']).next().unwrap_or(file);
            write!(writer, "{}{file}:{line}{} ", paint("\x1b[36m"), paint("\x1b[0m"))?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound file writer ---

type FileHandle = Arc<Mutex<Option<File>>>;

fn lock_file(handle: &FileHandle) -> MutexGuard<'_, Option<File>> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writes to the file in the slot, or discards while the slot is empty.
#[derive(Clone)]
struct FileSlot(FileHandle);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(lock_file(&self.0))
    }
}

// --- Runtime controls ---

type ReloadFn = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

struct Controls {
    reload_level: ReloadFn,
    reload_stdout: ReloadFn,
    file: FileHandle,
}

static CONTROLS: OnceLock<Controls> = OnceLock::new();

fn controls() -> Result<&'static Controls> {
    CONTROLS
        .get()
        .ok_or_else(|| anyhow::anyhow!("logging not yet initialized"))
}

fn reloader<S>(handle: reload::Handle<EnvFilter, S>) -> ReloadFn
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow::anyhow!("filter reload failed: {e}"))
    })
}

// --- Public API ---

/// Installs the global subscriber. Call once at startup; later calls are
/// ignored.
///
/// The level comes from `level` when given, else `RUST_LOG`, else `info`.
pub fn init_default_logging(level: Option<&str>) {
    let initial = level
        .and_then(|l| EnvFilter::try_new(l).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    let file: FileHandle = Arc::new(Mutex::new(None));
    let (level_filter, level_handle) = reload::Layer::new(initial);
    // The stdout gate only mutes; the global filter stays the ceiling.
    let (stdout_gate, stdout_handle) = reload::Layer::new(EnvFilter::new("trace"));

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalTimeFormat)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate);

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalTimeFormat)
        .with_ansi(false)
        .with_writer(FileSlot(file.clone()));

    if tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .is_ok()
    {
        let _ = CONTROLS.set(Controls {
            reload_level: reloader(level_handle),
            reload_stdout: reloader(stdout_handle),
            file,
        });
    }
}

/// Changes the active filter. Accepts a bare level (`"debug"`) or any
/// `EnvFilter` directive (`"info,timber_core=trace"`).
pub fn set_log_level(level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(level)
        .map_err(|e| anyhow::anyhow!("invalid log level '{level}': {e}"))?;
    (controls()?.reload_level)(filter)
}

/// Mutes or unmutes stdout without touching file logging.
pub fn set_stdout_enabled(enabled: bool) -> Result<()> {
    let filter = EnvFilter::new(if enabled { "trace" } else { "off" });
    (controls()?.reload_stdout)(filter)
}

/// Appends log output to `path`, replacing any previous log file.
/// The parent directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow::anyhow!("cannot open log file '{}': {e}", path.display()))?;

    *lock_file(&controls()?.file) = Some(file);
    Ok(())
}

/// Stops writing to the log file.
pub fn disable_file_logging() {
    if let Ok(controls) = controls() {
        *lock_file(&controls.file) = None;
    }
}

/// Logs a failed background task.
pub fn log_task_error(
    task_name: &'static str,
    result: Result<()>,
) {
    if let Err(error) = result {
        error!(task = task_name, ?error, "background task failed");
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn file_logging_captures_events_until_disabled() {
        init_default_logging(Some("info"));
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("timber.log");

        enable_file_logging(&path).unwrap();
        error!("captured marker");
        disable_file_logging();
        error!("discarded marker");

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("captured marker"));
        assert!(contents.contains("ERROR"));
        assert!(!contents.contains("discarded marker"));
        assert!(!contents.contains("\x1b["), "file output has no colors");
    }

    #[test]
    fn file_logging_into_missing_directory_fails() {
        init_default_logging(None);

        let result = enable_file_logging(Path::new("/this/path/does/not/exist/timber.log"));

        assert!(result.is_err());
    }

    #[test]
    fn level_and_stdout_can_change_after_init() {
        init_default_logging(None);

        assert!(set_log_level("debug").is_ok());
        assert!(set_stdout_enabled(false).is_ok());
        assert!(set_stdout_enabled(true).is_ok());
        assert!(set_log_level("info").is_ok());
    }

    #[test]
    fn failed_task_is_logged_not_raised() {
        log_task_error("test task", Err(anyhow::anyhow!("boom")));
        log_task_error("test task", Ok(()));
    }
}
