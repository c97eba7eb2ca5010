use std::{env, fs};

use estate_app::config::loader::load_config;
use estate_app::{ConfigError, build_service, init};
use estate_service::{CreatePropertyPayload, PropertyFilter};
use rust_decimal_macros::dec;

#[test]
fn config_parsing_and_env_overrides_and_validation() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("estate.toml");

    let toml_content = r#"
[logging]
level = "warn"

[storage]
backend = "memory"
preallocate_items = 256
"#;
    fs::write(&path, toml_content).expect("write toml");

    // 1) Valid config parses
    let cfg = load_config(path.to_str()).expect("should parse config");
    assert_eq!(cfg.logging.level, "warn");
    assert_eq!(cfg.storage.backend, "memory");
    assert_eq!(cfg.storage.preallocate_items, Some(256));

    // 2) Env override should win over file
    unsafe {
        env::set_var("ESTATE__STORAGE__PREALLOCATE_ITEMS", "512");
    }
    let cfg_env = load_config(path.to_str()).expect("should parse config with env overrides");
    assert_eq!(cfg_env.storage.preallocate_items, Some(512));
    unsafe {
        env::remove_var("ESTATE__STORAGE__PREALLOCATE_ITEMS");
    }

    // 3) Invalid config should error
    let invalid_path = dir.path().join("invalid.toml");
    let invalid_toml = r#"
[storage]
backend = "mongodb"
"#;
    fs::write(&invalid_path, invalid_toml).expect("write invalid toml");
    let err = load_config(invalid_path.to_str()).expect_err("expected validation error");
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("storage.backend"));
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("absent.toml");

    let cfg = load_config(path.to_str()).expect("defaults should load");
    assert_eq!(cfg.logging.level, "info");
    assert_eq!(cfg.storage.backend, "memory");
}

#[test]
fn malformed_file_is_a_build_error() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[logging\nlevel = ").expect("write toml");

    let err = load_config(path.to_str()).expect_err("expected parse failure");
    assert!(matches!(err, ConfigError::Build(_)));
}

#[test]
fn default_config_round_trips_through_toml() {
    let cfg = estate_app::AppConfig::default();
    let text = toml::to_string(&cfg).expect("serialize config");
    let back: estate_app::AppConfig = toml::from_str(&text).expect("parse config");
    assert_eq!(back.logging.level, cfg.logging.level);
    assert_eq!(back.storage.backend, cfg.storage.backend);
}

#[tokio::test]
async fn built_service_serves_requests() {
    let service = build_service(&estate_app::AppConfig::default());

    let created = service
        .create(CreatePropertyPayload {
            owner_id: "owner-1".into(),
            name: "Casa del Lago".into(),
            address: "Km 5 Vía La Calera".into(),
            price: dec!(420000),
            image: "https://cdn.example.com/lago.jpg".into(),
        })
        .await
        .expect("create");

    let found = service
        .search(Some(&PropertyFilter::new().with_name("lago")))
        .await
        .expect("search");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].id, created.id);
}

#[tokio::test]
async fn init_loads_config_and_builds_service() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("estate.toml");
    fs::write(&path, "[logging]\nlevel = \"debug\"\n").expect("write toml");

    let app = init(path.to_str()).expect("init");
    assert_eq!(app.config.logging.level, "debug");
    assert_eq!(app.service.count().await.expect("count"), 0);
}
