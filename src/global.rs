//! Process-wide default logger
//!
//! A single [`Logger`] is created on first use with the default
//! configuration (standard error, [`Flags::STD`], no filtering). Every free
//! function here forwards to the like-named method on it and adds no state
//! of its own.
//!
//! ```
//! use logf::{Flags, Level};
//!
//! logf::set_output(std::io::sink());
//! logf::set_min_level(Level::Warn);
//! logf::set_flags(Flags::STD | Flags::SHORT_FILE);
//!
//! logf::debug(&[&"dropped"]);
//! logf::warnf(format_args!("cache miss ratio {:.2}", 0.41));
//! ```

use crate::core::{Flags, Level, Logger, Result};
use std::fmt::{self, Display};
use std::io::Write;
use std::panic::Location;
use std::sync::OnceLock;

static DEFAULT_LOGGER: OnceLock<Logger> = OnceLock::new();

/// The shared logger behind the free functions.
pub fn default_logger() -> &'static Logger {
    DEFAULT_LOGGER.get_or_init(Logger::new)
}

pub fn set_output<W: Write + Send + 'static>(writer: W) {
    default_logger().set_output(writer);
}

pub fn set_flags(flags: Flags) {
    default_logger().set_flags(flags);
}

pub fn flags() -> Flags {
    default_logger().flags()
}

pub fn set_prefix(prefix: &str) {
    default_logger().set_prefix(prefix);
}

pub fn prefix() -> String {
    default_logger().prefix()
}

pub fn set_min_level(level: Level) {
    default_logger().set_min_level(level);
}

pub fn min_level() -> Level {
    default_logger().min_level()
}

/// See [`Logger::output`].
pub fn output(level: Level, caller: &Location<'_>, message: &str) -> Result<()> {
    default_logger().output(level, caller, message)
}

#[track_caller]
pub fn tracef(args: fmt::Arguments<'_>) {
    default_logger().tracef(args);
}

#[track_caller]
pub fn trace(values: &[&dyn Display]) {
    default_logger().trace(values);
}

#[track_caller]
pub fn traceln(values: &[&dyn Display]) {
    default_logger().traceln(values);
}

#[track_caller]
pub fn debugf(args: fmt::Arguments<'_>) {
    default_logger().debugf(args);
}

#[track_caller]
pub fn debug(values: &[&dyn Display]) {
    default_logger().debug(values);
}

#[track_caller]
pub fn debugln(values: &[&dyn Display]) {
    default_logger().debugln(values);
}

#[track_caller]
pub fn printf(args: fmt::Arguments<'_>) {
    default_logger().printf(args);
}

#[track_caller]
pub fn print(values: &[&dyn Display]) {
    default_logger().print(values);
}

#[track_caller]
pub fn println(values: &[&dyn Display]) {
    default_logger().println(values);
}

#[track_caller]
pub fn warnf(args: fmt::Arguments<'_>) {
    default_logger().warnf(args);
}

#[track_caller]
pub fn warn(values: &[&dyn Display]) {
    default_logger().warn(values);
}

#[track_caller]
pub fn warnln(values: &[&dyn Display]) {
    default_logger().warnln(values);
}

#[track_caller]
pub fn errorf(args: fmt::Arguments<'_>) {
    default_logger().errorf(args);
}

#[track_caller]
pub fn error(values: &[&dyn Display]) {
    default_logger().error(values);
}

#[track_caller]
pub fn errorln(values: &[&dyn Display]) {
    default_logger().errorln(values);
}

/// Logs at FATAL; does not terminate.
#[track_caller]
pub fn fatalf(args: fmt::Arguments<'_>) {
    default_logger().fatalf(args);
}

/// Logs at FATAL; does not terminate.
#[track_caller]
pub fn fatal(values: &[&dyn Display]) {
    default_logger().fatal(values);
}

/// Logs at FATAL; does not terminate.
#[track_caller]
pub fn fatalln(values: &[&dyn Display]) {
    default_logger().fatalln(values);
}

/// Logs at FATAL, then panics with the message.
#[track_caller]
pub fn panicf(args: fmt::Arguments<'_>) -> ! {
    default_logger().panicf(args)
}

/// Logs at FATAL, then panics with the message.
#[track_caller]
pub fn panic(values: &[&dyn Display]) -> ! {
    default_logger().panic(values)
}

/// Logs at FATAL, then panics with the message.
#[track_caller]
pub fn panicln(values: &[&dyn Display]) -> ! {
    default_logger().panicln(values)
}
