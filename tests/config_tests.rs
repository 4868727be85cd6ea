use savings_core::config::{Config, ConfigManager, Theme};
use tempfile::tempdir;

#[test]
fn default_config_uses_iconic_theme_with_color() {
    let cfg = Config::default();

    assert_eq!(cfg.theme, Theme::Iconic);
    assert!(cfg.ui_color_enabled);
    assert!(cfg.default_export_dir.is_none());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");

    let cfg = Config {
        theme: Theme::Plain,
        ui_color_enabled: false,
        default_export_dir: Some(dir.path().join("exports")),
    };

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert_eq!(loaded.resolve_export_dir(), dir.path().join("exports"));
    assert!(manager.path().ends_with("config/config.json"));
}

#[test]
fn corrupt_config_is_a_config_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).expect("manager");
    std::fs::write(manager.path(), "{ not json").expect("write garbage");

    let err = manager.load().unwrap_err();
    assert!(matches!(err, savings_core::SavingsError::Config(_)));
}
