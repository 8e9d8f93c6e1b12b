//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::Result,
    flags::Flags,
    line_output::LineOutput,
    line_writer::LineWriter,
    log_level::Level,
    metrics::LoggerMetrics,
};
use parking_lot::Mutex;
use std::fmt::{self, Display, Write as _};
use std::io::Write;
use std::panic::Location;
use std::sync::Arc;

/// Fields guarded by the logger's own lock.
#[derive(Debug, Clone, Copy)]
struct State {
    flags: Flags,
    min_level: Level,
}

/// A leveled logger in front of a [`LineOutput`].
///
/// The logger decides *whether* a line is written and whether it carries a
/// `[LEVEL] ` tag; the line output decides *how* it looks (prefix, time,
/// file:line) and where it goes. Every method takes `&self`, so a logger can
/// be reconfigured from one thread while others are logging through it.
///
/// # Call sites
///
/// All emission methods are `#[track_caller]`, so with
/// [`Flags::SHORT_FILE`] or [`Flags::LONG_FILE`] the reported location is
/// the line in *your* code that called the method. A helper of your own
/// that wraps the logger keeps this property if it is `#[track_caller]` too.
///
/// # Errors
///
/// Only [`output`](Self::output) returns the write error. The per-level
/// methods are best-effort: failures are dropped and counted in
/// [`metrics`](Self::metrics), so application code never fails because
/// logging did.
///
/// # Example
///
/// ```
/// use logf::{Flags, Level, Logger};
///
/// let logger = Logger::builder()
///     .writer(std::io::sink())
///     .flags(Flags::TIME | Flags::LEVEL)
///     .min_level(Level::Info)
///     .build();
///
/// logger.debug(&[&"hidden"]);
/// logger.warnf(format_args!("disk {}% full", 91));
/// assert_eq!(logger.metrics().filtered_count(), 1);
/// assert_eq!(logger.metrics().written_count(), 1);
/// ```
pub struct Logger {
    line: Arc<dyn LineOutput>,
    state: Mutex<State>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Log to standard error with [`Flags::STD`] and no level filtering.
    #[must_use]
    pub fn new() -> Self {
        Self::with_line_output(Arc::new(LineWriter::stderr()))
    }

    /// Use a custom line output. It receives [`Flags::STD`] immediately.
    #[must_use]
    pub fn with_line_output(line: Arc<dyn LineOutput>) -> Self {
        line.set_flags(Flags::STD.line_flags());
        Self {
            line,
            state: Mutex::new(State {
                flags: Flags::STD,
                min_level: Level::Trace,
            }),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Replace the destination for subsequent lines.
    pub fn set_output<W: Write + Send + 'static>(&self, writer: W) {
        self.replace_output(Box::new(writer));
    }

    fn replace_output(&self, writer: Box<dyn Write + Send>) {
        let _state = self.state.lock();
        self.line.set_output(writer);
    }

    /// Store the full flag set and forward the line-writer subset.
    pub fn set_flags(&self, flags: Flags) {
        let mut state = self.state.lock();
        state.flags = flags;
        self.line.set_flags(flags.line_flags());
    }

    pub fn flags(&self) -> Flags {
        self.state.lock().flags
    }

    /// Not ordered against in-flight lines beyond what the line output guarantees.
    pub fn set_prefix(&self, prefix: &str) {
        self.line.set_prefix(prefix);
    }

    pub fn prefix(&self) -> String {
        self.line.prefix()
    }

    pub fn set_min_level(&self, level: Level) {
        self.state.lock().min_level = level;
    }

    pub fn min_level(&self) -> Level {
        self.state.lock().min_level
    }

    /// Apply every field of `config`.
    pub fn apply_config(&self, config: &LoggerConfig) {
        self.set_flags(config.flags);
        self.set_prefix(&config.prefix);
        self.set_min_level(config.min_level);
    }

    /// The underlying line output, for callers that need to write around
    /// the level gate.
    pub fn line_output(&self) -> &Arc<dyn LineOutput> {
        &self.line
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    pub fn flush(&self) -> Result<()> {
        self.line.flush()
    }

    /// Write one log event.
    ///
    /// Lines below the minimum level return `Ok(())` without touching the
    /// line output. With [`Flags::LEVEL`] set the message becomes
    /// `"[LEVEL] message"`. `caller` is what the line output reports for
    /// file/line flags; pass [`Location::caller()`] from a `#[track_caller]`
    /// function to attribute the line to your own caller.
    ///
    /// The lock is released before the line output is called, so a slow
    /// destination never blocks reconfiguration.
    pub fn output(&self, level: Level, caller: &Location<'_>, message: &str) -> Result<()> {
        let flags = {
            let state = self.state.lock();
            if level < state.min_level {
                self.metrics.record_filtered();
                return Ok(());
            }
            state.flags
        };

        let result = if flags.contains(Flags::LEVEL) {
            self.line.output(caller, &format!("[{}] {}", level, message))
        } else {
            self.line.output(caller, message)
        };

        if result.is_ok() {
            self.metrics.record_written();
        } else {
            self.metrics.record_failed();
        }
        result
    }

    /// Format and log at `level`, discarding any write error.
    ///
    /// This is the entry point used by the [`log!`](crate::log) family of macros.
    #[track_caller]
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>) {
        let message = fmt::format(args);
        let _ = self.output(level, Location::caller(), &message);
    }

    #[track_caller]
    fn log_values(&self, level: Level, values: &[&dyn Display]) {
        let message = sprint(values);
        let _ = self.output(level, Location::caller(), &message);
    }

    #[track_caller]
    fn log_line(&self, level: Level, values: &[&dyn Display]) {
        let message = sprintln(values);
        let _ = self.output(level, Location::caller(), &message);
    }

    #[track_caller]
    pub fn tracef(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Trace, args);
    }

    #[track_caller]
    pub fn trace(&self, values: &[&dyn Display]) {
        self.log_values(Level::Trace, values);
    }

    #[track_caller]
    pub fn traceln(&self, values: &[&dyn Display]) {
        self.log_line(Level::Trace, values);
    }

    #[track_caller]
    pub fn debugf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Debug, args);
    }

    #[track_caller]
    pub fn debug(&self, values: &[&dyn Display]) {
        self.log_values(Level::Debug, values);
    }

    #[track_caller]
    pub fn debugln(&self, values: &[&dyn Display]) {
        self.log_line(Level::Debug, values);
    }

    /// Logs at [`Level::Info`].
    #[track_caller]
    pub fn printf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Info, args);
    }

    /// Logs at [`Level::Info`].
    #[track_caller]
    pub fn print(&self, values: &[&dyn Display]) {
        self.log_values(Level::Info, values);
    }

    /// Logs at [`Level::Info`].
    #[track_caller]
    pub fn println(&self, values: &[&dyn Display]) {
        self.log_line(Level::Info, values);
    }

    #[track_caller]
    pub fn warnf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Warn, args);
    }

    #[track_caller]
    pub fn warn(&self, values: &[&dyn Display]) {
        self.log_values(Level::Warn, values);
    }

    #[track_caller]
    pub fn warnln(&self, values: &[&dyn Display]) {
        self.log_line(Level::Warn, values);
    }

    #[track_caller]
    pub fn errorf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Error, args);
    }

    #[track_caller]
    pub fn error(&self, values: &[&dyn Display]) {
        self.log_values(Level::Error, values);
    }

    #[track_caller]
    pub fn errorln(&self, values: &[&dyn Display]) {
        self.log_line(Level::Error, values);
    }

    /// Logs at [`Level::Fatal`]. Does not terminate the process or unwind;
    /// use [`panicf`](Self::panicf) for that.
    #[track_caller]
    pub fn fatalf(&self, args: fmt::Arguments<'_>) {
        self.log(Level::Fatal, args);
    }

    /// Logs at [`Level::Fatal`] without terminating.
    #[track_caller]
    pub fn fatal(&self, values: &[&dyn Display]) {
        self.log_values(Level::Fatal, values);
    }

    /// Logs at [`Level::Fatal`] without terminating.
    #[track_caller]
    pub fn fatalln(&self, values: &[&dyn Display]) {
        self.log_line(Level::Fatal, values);
    }

    /// Log at [`Level::Fatal`], then panic with the same message.
    ///
    /// The panic happens even if the line was filtered out or failed to
    /// write. The payload is the formatted `String`.
    #[track_caller]
    pub fn panicf(&self, args: fmt::Arguments<'_>) -> ! {
        self.fatal_then_panic(fmt::format(args))
    }

    /// See [`panicf`](Self::panicf).
    #[track_caller]
    pub fn panic(&self, values: &[&dyn Display]) -> ! {
        self.fatal_then_panic(sprint(values))
    }

    /// See [`panicf`](Self::panicf).
    #[track_caller]
    pub fn panicln(&self, values: &[&dyn Display]) -> ! {
        self.fatal_then_panic(sprintln(values))
    }

    #[track_caller]
    fn fatal_then_panic(&self, message: String) -> ! {
        let _ = self.output(Level::Fatal, Location::caller(), &message);
        std::panic::panic_any(message)
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use logf::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(Level::Debug)
    ///     .prefix("worker-1 ")
    ///     .build();
    /// assert_eq!(logger.prefix(), "worker-1 ");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

/// Operands joined by single spaces.
pub(crate) fn sprint(values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{}", value);
    }
    out
}

/// Operands joined by single spaces, newline-terminated.
pub(crate) fn sprintln(values: &[&dyn Display]) -> String {
    let mut out = sprint(values);
    out.push('\n');
    out
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = *self.state.lock();
        f.debug_struct("Logger")
            .field("flags", &state.flags)
            .field("min_level", &state.min_level)
            .field("prefix", &self.line.prefix())
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.line.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Settings are applied on top of [`Logger::new`]. Calling a setter twice
/// keeps the last value.
///
/// # Example
/// ```
/// use logf::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(Level::Error)
///     .min_level(Level::Debug)
///     .flags(Flags::STD | Flags::SHORT_FILE)
///     .writer(std::io::stdout())
///     .build();
/// assert_eq!(logger.min_level(), Level::Debug);
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    line_output: Option<Arc<dyn LineOutput>>,
    writer: Option<Box<dyn Write + Send>>,
    flags: Option<Flags>,
    prefix: Option<String>,
    min_level: Option<Level>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination for formatted lines (default: standard error)
    #[must_use = "builder methods return a new value"]
    pub fn writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.writer = Some(Box::new(writer));
        self
    }

    /// Like [`writer`](Self::writer); `None` leaves the destination unchanged.
    #[must_use = "builder methods return a new value"]
    pub fn maybe_writer(mut self, writer: Option<Box<dyn Write + Send>>) -> Self {
        if writer.is_some() {
            self.writer = writer;
        }
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn flags(mut self, flags: Flags) -> Self {
        self.flags = Some(flags);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Level) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Replace the built-in [`LineWriter`] with a custom line output.
    #[must_use = "builder methods return a new value"]
    pub fn line_output(mut self, line: Arc<dyn LineOutput>) -> Self {
        self.line_output = Some(line);
        self
    }

    /// Take flags, prefix and minimum level from `config`.
    #[must_use = "builder methods return a new value"]
    pub fn config(mut self, config: LoggerConfig) -> Self {
        self.flags = Some(config.flags);
        self.prefix = Some(config.prefix);
        self.min_level = Some(config.min_level);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = match self.line_output {
            Some(line) => Logger::with_line_output(line),
            None => Logger::new(),
        };

        if let Some(writer) = self.writer {
            logger.replace_output(writer);
        }
        if let Some(flags) = self.flags {
            logger.set_flags(flags);
        }
        if let Some(prefix) = self.prefix {
            logger.set_prefix(&prefix);
        }
        if let Some(level) = self.min_level {
            logger.set_min_level(level);
        }

        logger
    }
}
