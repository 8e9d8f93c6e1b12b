//! Line output trait for log destinations

use super::{error::Result, flags::Flags};
use std::io::Write;
use std::panic::Location;

/// The line-oriented primitive a [`Logger`](crate::Logger) delegates I/O to.
///
/// Implementations own the destination, the prefix and the
/// timestamp/location flags, and turn one message into one written line.
/// They are shared between threads and must synchronize internally.
pub trait LineOutput: Send + Sync {
    /// Replace the destination. Lines already being written finish on the old one.
    fn set_output(&self, writer: Box<dyn Write + Send>);

    /// Only the bits in [`Flags::LINE_MASK`] are ever passed here.
    fn set_flags(&self, flags: Flags);

    fn flags(&self) -> Flags;

    fn set_prefix(&self, prefix: &str);

    fn prefix(&self) -> String;

    /// Write `message` as a single line, attributing it to `caller` when
    /// file/line flags are set.
    fn output(&self, caller: &Location<'_>, message: &str) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}
