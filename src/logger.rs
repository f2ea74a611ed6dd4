//! Diagnostic tracing for the helper itself.
//!
//! User-facing notes and warnings are printed with the macros in
//! [`crate::style`]; this subscriber only carries `tracing` events and is
//! silent unless a level is requested with `--log`.

use std::io;

use tracing_subscriber::fmt;

pub use tracing_core::Level;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Installs a global subscriber writing to stderr at `level`.
/// With no level, nothing is installed and no logs are printed.
pub fn init(level: Option<Level>) {
    let Some(level) = level else {
        return;
    };

    let builder = fmt().with_max_level(level).with_writer(io::stderr);
    if level >= Level::DEBUG {
        builder.with_target(true).without_time().init();
    } else {
        let format = fmt::format().without_time().with_target(false).compact();
        builder.event_format(format).init();
    }
}
