//! Basic logger usage example
//!
//! Demonstrates level filtering, prefix flags and the default logger.
//!
//! Run with: cargo run --example basic_usage

use logf::prelude::*;
use logf::{info, warn};

fn main() -> Result<()> {
    println!("=== logf - Basic Usage Example ===\n");

    // A logger writing to stdout with date, time, file:line and level tag
    let logger = Logger::builder()
        .writer(std::io::stdout())
        .flags(Flags::STD | Flags::SHORT_FILE)
        .build();

    println!("1. Logging at different levels:");
    logger.trace(&[&"This is a trace message"]);
    logger.debug(&[&"This is a debug message"]);
    logger.print(&[&"This is an info message"]);
    logger.warn(&[&"This is a warning message"]);
    logger.error(&[&"This is an error message"]);
    logger.fatal(&[&"This is a fatal message (the process keeps running)"]);

    println!("\n2. Logging with different minimum levels:");
    logger.set_min_level(Level::Info);
    println!("   Minimum level set to INFO - trace and debug won't show:");
    logger.tracef(format_args!("Trace message (hidden)"));
    logger.debugf(format_args!("Debug message (hidden)"));
    info!(logger, "Info message (visible)");
    warn!(logger, "Warning message {} (visible)", 2);

    println!("\n3. Changing flags and prefix at runtime:");
    logger.set_flags(Flags::TIME | Flags::MICROSECONDS | Flags::LEVEL);
    logger.set_prefix("demo ");
    logger.println(&[&"listening on port", &8080]);

    println!("\n4. Checked output:");
    logger.output(Level::Error, std::panic::Location::caller(), "written with an explicit result")?;

    println!("\n5. The default logger:");
    logf::set_output(std::io::stdout());
    logf::set_flags(Flags::LEVEL);
    logf::warnf(format_args!("{} requests queued", 12));

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
