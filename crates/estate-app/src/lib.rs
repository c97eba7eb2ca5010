pub mod bootstrap;
pub mod config;
pub mod observability;

pub use bootstrap::{App, build_service, build_service_with_clock, init};
pub use config::{AppConfig, ConfigError, LoggingConfig, StorageSettings};
pub use observability::{apply_logging_level, init_tracing, rust_log_is_set};
