use std::fs;

use autodb::error::{ConfigError, Error};
use autodb::infrastructure::bootstrap::init_app;
use autodb::infrastructure::config::settings::Config;

#[test]
fn config_file_drives_bootstrap() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("garage.db");
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "[database]\npath = {:?}\necho = false\n\n[logging]\nlevel = \"warn\"\n",
            db_path.to_string_lossy()
        ),
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    assert!(!config.database.echo);

    let app = init_app(config).unwrap();
    assert_eq!(
        app.database().unwrap().location(),
        db_path.to_string_lossy()
    );
    assert!(db_path.exists());
}

#[test]
fn config_rejects_zero_connect_timeout() {
    let err = Config::parse_toml("[database]\nconnect_timeout_ms = 0\n").unwrap_err();
    assert!(matches!(
        err,
        Error::Config(ConfigError::InvalidValue {
            field: "database.connect_timeout_ms",
            ..
        })
    ));
}

#[test]
fn unknown_sections_are_ignored() {
    let config = Config::parse_toml("[extras]\nanything = 1\n").unwrap();
    assert_eq!(config, Config::default());
}
