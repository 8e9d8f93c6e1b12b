//! Logging macros for ergonomic log message formatting.
//!
//! These macros build the message with `format_args!`, so they accept the
//! same syntax as `println!` and `format!`. The first argument is any
//! expression that derefs to a [`Logger`](crate::Logger), including
//! [`default_logger()`](crate::default_logger).
//!
//! # Examples
//!
//! ```
//! use logf::prelude::*;
//! use logf::info;
//!
//! let logger = Logger::builder().writer(std::io::sink()).build();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Through the default logger
//! info!(logf::default_logger(), "user {} logged in", 42);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use logf::prelude::*;
/// # let logger = Logger::builder().writer(std::io::sink()).build();
/// use logf::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, ::std::format_args!($($arg)+))
    };
}

/// Log a trace-level message.
///
/// ```
/// # use logf::prelude::*;
/// # let logger = Logger::builder().writer(std::io::sink()).build();
/// use logf::trace;
/// trace!(logger, "Entering function: calculate()");
/// trace!(logger, "Variable value: {}", 42);
/// ```
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message (the level of [`Logger::printf`](crate::Logger::printf)).
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// ```
/// # use logf::prelude::*;
/// # let logger = Logger::builder().writer(std::io::sink()).build();
/// use logf::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a fatal-level message. Like [`Logger::fatalf`](crate::Logger::fatalf),
/// this does not terminate the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Fatal, $($arg)+)
    };
}
