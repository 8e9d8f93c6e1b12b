//! Built-in line writer
//!
//! Renders `prefix` + date/time + `file:line: ` + message, terminated by a
//! newline, and writes it with a single `write_all` while holding its lock so
//! concurrent lines never interleave.

use super::{
    error::{LoggerError, Result},
    flags::Flags,
    line_output::LineOutput,
    timestamp::write_timestamp,
};
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::panic::Location;

struct Inner {
    writer: Box<dyn Write + Send>,
    prefix: String,
    flags: Flags,
    /// Reused line buffer
    buf: String,
}

pub struct LineWriter {
    inner: Mutex<Inner>,
}

impl LineWriter {
    /// `flags` is masked to [`Flags::LINE_MASK`].
    pub fn new<W: Write + Send + 'static>(writer: W, prefix: impl Into<String>, flags: Flags) -> Self {
        Self {
            inner: Mutex::new(Inner {
                writer: Box::new(writer),
                prefix: prefix.into(),
                flags: flags.line_flags(),
                buf: String::new(),
            }),
        }
    }

    /// Writes to standard error with `DATE | TIME` and no prefix.
    pub fn stderr() -> Self {
        Self::new(std::io::stderr(), "", Flags::STD)
    }
}

impl Default for LineWriter {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for LineWriter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("LineWriter")
            .field("prefix", &inner.prefix)
            .field("flags", &inner.flags)
            .finish_non_exhaustive()
    }
}

/// Render one complete line into `buf`.
///
/// `SHORT_FILE` wins over `LONG_FILE`. A newline is appended unless the
/// message already ends with one.
pub fn format_line(
    buf: &mut String,
    prefix: &str,
    flags: Flags,
    now: &DateTime<Utc>,
    caller: &Location<'_>,
    message: &str,
) {
    buf.push_str(prefix);
    write_timestamp(buf, flags, now);

    if flags.intersects(Flags::SHORT_FILE | Flags::LONG_FILE) {
        let mut file = caller.file();
        if flags.contains(Flags::SHORT_FILE) {
            file = file.rsplit(['/', '\\']).next().unwrap_or(file);
        }
        buf.push_str(file);
        buf.push(':');
        buf.push_str(&caller.line().to_string());
        buf.push_str(": ");
    }

    buf.push_str(message);
    if !message.ends_with('\n') {
        buf.push('\n');
    }
}

impl LineOutput for LineWriter {
    fn set_output(&self, writer: Box<dyn Write + Send>) {
        self.inner.lock().writer = writer;
    }

    fn set_flags(&self, flags: Flags) {
        self.inner.lock().flags = flags.line_flags();
    }

    fn flags(&self) -> Flags {
        self.inner.lock().flags
    }

    fn set_prefix(&self, prefix: &str) {
        let mut inner = self.inner.lock();
        inner.prefix.clear();
        inner.prefix.push_str(prefix);
    }

    fn prefix(&self) -> String {
        self.inner.lock().prefix.clone()
    }

    fn output(&self, caller: &Location<'_>, message: &str) -> Result<()> {
        let now = Utc::now();

        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        inner.buf.clear();
        format_line(&mut inner.buf, &inner.prefix, inner.flags, &now, caller, message);

        inner
            .writer
            .write_all(inner.buf.as_bytes())
            .map_err(|e| LoggerError::io_operation("writing log line", "destination rejected the line", e))
    }

    fn flush(&self) -> Result<()> {
        self.inner.lock().writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl SharedBuffer {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock()).into_owned()
        }
    }

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn fixed_datetime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2009, 1, 23, 1, 23, 23)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123123)
    }

    fn render(prefix: &str, flags: Flags, message: &str) -> (String, u32) {
        let caller = Location::caller();
        let mut buf = String::new();
        format_line(&mut buf, prefix, flags | Flags::UTC, &fixed_datetime(), caller, message);
        (buf, caller.line())
    }

    #[test]
    fn test_plain_message_gets_newline() {
        let (line, _) = render("", Flags::empty(), "hello");
        assert_eq!(line, "hello\n");
    }

    #[test]
    fn test_trailing_newline_not_doubled() {
        let (line, _) = render("", Flags::empty(), "hello\n");
        assert_eq!(line, "hello\n");
    }

    #[test]
    fn test_prefix_comes_first() {
        let (line, _) = render("app: ", Flags::DATE | Flags::TIME | Flags::MICROSECONDS, "up");
        assert_eq!(line, "app: 2009/01/23 01:23:23.123123 up\n");
    }

    #[test]
    fn test_short_file() {
        let (line, no) = render("", Flags::SHORT_FILE, "x");
        assert_eq!(line, format!("line_writer.rs:{}: x\n", no));
    }

    #[test]
    fn test_long_file() {
        let (line, no) = render("", Flags::LONG_FILE, "x");
        assert_eq!(line, format!("{}:{}: x\n", file!(), no));
    }

    #[test]
    fn test_short_file_wins_over_long_file() {
        let (both, no) = render("", Flags::SHORT_FILE | Flags::LONG_FILE, "x");
        assert_eq!(both, format!("line_writer.rs:{}: x\n", no));
    }

    #[test]
    fn test_output_writes_one_line() {
        let buffer = SharedBuffer::default();
        let writer = LineWriter::new(buffer.clone(), "p ", Flags::empty());
        writer.output(Location::caller(), "first").expect("write");
        writer.output(Location::caller(), "second").expect("write");
        assert_eq!(buffer.contents(), "p first\np second\n");
    }

    #[test]
    fn test_set_flags_masks_level() {
        let writer = LineWriter::new(std::io::sink(), "", Flags::empty());
        writer.set_flags(Flags::STD | Flags::SHORT_FILE);
        assert_eq!(writer.flags(), Flags::DATE | Flags::TIME | Flags::SHORT_FILE);
    }

    #[test]
    fn test_set_output_and_prefix() {
        let first = SharedBuffer::default();
        let second = SharedBuffer::default();
        let writer = LineWriter::new(first.clone(), "", Flags::empty());

        writer.output(Location::caller(), "a").expect("write");
        writer.set_output(Box::new(second.clone()));
        writer.set_prefix("[svc] ");
        writer.output(Location::caller(), "b").expect("write");

        assert_eq!(first.contents(), "a\n");
        assert_eq!(second.contents(), "[svc] b\n");
        assert_eq!(writer.prefix(), "[svc] ");
    }

    #[test]
    fn test_write_failure_is_reported() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let writer = LineWriter::new(Broken, "", Flags::empty());
        let err = writer.output(Location::caller(), "lost").unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }
}
