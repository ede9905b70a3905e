// SPDX-License-Identifier: MPL-2.0
use lens_coach::camera::Facing;
use lens_coach::config::{self, Config};
use lens_coach::i18n::fluent::I18n;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to ko
    let korean_config = Config {
        language: Some("ko".to_string()),
        ..Config::default()
    };
    config::save_to_path(&korean_config, &temp_config_file_path)
        .expect("Failed to write korean config file");

    let loaded_korean_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load korean config from path");
    let i18n_ko = I18n::new(None, &loaded_korean_config);
    assert_eq!(i18n_ko.current_locale().to_string(), "ko");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_camera_preferences_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        mirror_preview: Some(false),
        camera_facing: Some(Facing::Rear),
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config");

    let reloaded = config::load_from_path(&path).expect("Failed to reload config");
    assert_eq!(reloaded.mirror_preview, Some(false));
    assert_eq!(reloaded.camera_facing, Some(Facing::Rear));
}

#[test]
fn test_cli_language_overrides_config() {
    let config = Config {
        language: Some("ko".to_string()),
        ..Config::default()
    };
    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn test_both_locales_cover_the_same_keys() {
    let keys = [
        "window-title",
        "mode-insertion",
        "mode-removal",
        "mode-care",
        "camera-start",
        "camera-stop",
        "snapshot-download",
        "error-camera-no-device",
    ];

    for locale in ["en-US", "ko"] {
        let config = Config {
            language: Some(locale.to_string()),
            ..Config::default()
        };
        let i18n = I18n::new(None, &config);
        for key in keys {
            assert!(
                !i18n.tr(key).starts_with("MISSING:"),
                "locale {} is missing key {}",
                locale,
                key
            );
        }
    }
}
