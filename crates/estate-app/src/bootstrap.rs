//! Assembles a ready-to-use [`PropertyService`] from configuration.

use anyhow::Context;
use estate_core::{SharedClock, SystemClock};
use estate_db_memory::create_storage;
use estate_service::PropertyService;
use estate_storage::PropertyStorage;
use tracing::info;

use crate::config::AppConfig;
use crate::config::loader::load_config;
use crate::observability::{init_tracing, rust_log_is_set};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "ESTATE_CONFIG";

/// Loaded configuration plus the service built from it.
#[derive(Debug, Clone)]
pub struct App {
    pub config: AppConfig,
    pub service: PropertyService,
}

/// Builds the storage backend named by `config` and wraps it in a service.
pub fn build_service(config: &AppConfig) -> PropertyService {
    build_service_with_clock(config, SystemClock::shared())
}

/// Same as [`build_service`] with an explicit clock.
pub fn build_service_with_clock(config: &AppConfig, clock: SharedClock) -> PropertyService {
    let storage = create_storage(&config.storage_config(), clock);
    info!(
        backend = storage.backend_name(),
        preallocate_items = ?config.storage.preallocate_items,
        "Property storage initialized"
    );
    PropertyService::new(storage)
}

/// Loads `.env`, reads configuration, starts logging and builds the service.
///
/// Logging starts at the configured level unless `RUST_LOG` is set.
///
/// The configuration path is `config_path`, else `$ESTATE_CONFIG`, else
/// `estate.toml` in the working directory (skipped if missing).
pub fn init(config_path: Option<&str>) -> anyhow::Result<App> {
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist - it's optional
        if !matches!(e, dotenvy::Error::Io(ref io_err) if io_err.kind() == std::io::ErrorKind::NotFound)
        {
            eprintln!("Warning: Failed to load .env file: {e}");
        }
    }

    let env_path = std::env::var(CONFIG_PATH_ENV).ok();
    let path = config_path.or(env_path.as_deref());
    let config = load_config(path).context("failed to load configuration")?;

    init_tracing(&config.logging.level);
    info!(
        path = path.unwrap_or(crate::config::DEFAULT_CONFIG_FILE),
        level = %config.logging.level,
        rust_log_override = rust_log_is_set(),
        "Configuration loaded"
    );

    let service = build_service(&config);
    Ok(App { config, service })
}
