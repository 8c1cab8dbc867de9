//! Helpers shared by the workspace binaries.

pub mod utils;

pub use utils::logging::{init_logging, init_logging_to, LogFormat, LogTarget};
