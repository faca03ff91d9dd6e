//! Logging for configuration loading and resolution
//!
//! Two layers:
//! - `Logger` trait: host-facing messages (e.g. a CLI printing warnings)
//! - `file_logger`: global debug log for troubleshooting, off by default

mod traits;
mod memory;
mod console;
pub mod file_logger;

pub use traits::{Logger, BoxedLogger, SharedLogger};
pub use memory::{NoOpLogger, MemoryLogger};
pub use console::ConsoleLogger;

pub use file_logger::{
    log, trace, debug, info, warn, error,
    log_file_path, clear_log, LogLevel,
};
