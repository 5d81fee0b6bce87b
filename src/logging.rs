//! Route the `log` facade to the browser console

use log::{Level, SetLoggerError};

/// Install the console logger. Debug builds also show stage transitions.
pub fn init() -> Result<(), SetLoggerError> {
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    console_log::init_with_level(level)
}
