// Infrastructure layer modules
pub mod logging;
pub mod logging_config;

// Re-exports
pub use logging::{init_logging, init_logging_with};
pub use logging_config::{LogFormat, LoggingConfig};
