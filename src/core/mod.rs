//! Core logger types and traits

pub mod config;
pub mod error;
pub mod flags;
pub mod line_output;
pub mod line_writer;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;

pub use config::LoggerConfig;
pub use error::{LoggerError, Result};
pub use flags::Flags;
pub use line_output::LineOutput;
pub use line_writer::LineWriter;
pub use log_level::Level;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
