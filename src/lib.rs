//! # logf
//!
//! A leveled logging facade over a line-oriented writer.
//!
//! ## Features
//!
//! - **Level filtering**: six ordered levels, `TRACE` through `FATAL`
//! - **Line prefixes**: date, time, microseconds, file:line and a `[LEVEL]` tag,
//!   selected with [`Flags`]
//! - **Runtime reconfiguration**: destination, flags, prefix and minimum level
//!   can change while other threads are logging
//! - **Default logger**: free functions such as [`warnf`] forward to a shared,
//!   lazily created [`Logger`]
//!
//! ```
//! use logf::prelude::*;
//!
//! let logger = Logger::builder()
//!     .writer(std::io::stdout())
//!     .flags(Flags::STD | Flags::SHORT_FILE)
//!     .min_level(Level::Info)
//!     .build();
//!
//! logger.println(&[&"listening on", &8080]);
//! logger.debugf(format_args!("not shown"));
//! ```

pub mod core;
pub mod global;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Flags, Level, LineOutput, LineWriter, Logger, LoggerBuilder, LoggerConfig, LoggerError,
        LoggerMetrics, Result,
    };
}

pub use crate::core::{
    Flags, Level, LineOutput, LineWriter, Logger, LoggerBuilder, LoggerConfig, LoggerError,
    LoggerMetrics, Result,
};
pub use crate::global::{
    debug, debugf, debugln, default_logger, error, errorf, errorln, fatal, fatalf, fatalln, flags,
    min_level, output, panic, panicf, panicln, prefix, print, printf, println, set_flags,
    set_min_level, set_output, set_prefix, trace, tracef, traceln, warn, warnf, warnln,
};
