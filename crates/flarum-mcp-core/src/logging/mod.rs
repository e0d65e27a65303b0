//! Logging abstractions

mod traits;
mod noop;
mod console;
mod memory;
pub mod file_logger;

pub use traits::{Logger, SharedLogger};
pub use noop::NoOpLogger;
pub use console::ConsoleLogger;
pub use memory::MemoryLogger;

// File trace helpers; `debug_log!`/`warn_log!` are the usual entry points
pub use file_logger::{debug_enabled, log_file_path, FileSink, LogLevel};
