// SPDX-License-Identifier: MPL-2.0
use tcg_market::app::config::{self, Config, GeneralConfig, MAX_PAGE_SIZE};
use tcg_market::app::route::{History, Route};
use tcg_market::favorites::FavoritesStore;
use tcg_market::i18n::fluent::I18n;
use tcg_market::pagination::{page_window, total_pages_for, PageEntry};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("nav-sets"), "Sets");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("nav-home"), "Accueil");
}

#[test]
fn test_handwritten_config_is_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[api]\napi_key = \"abc\"\n\n[catalog]\npage_size = 9000\n",
    )
    .expect("Failed to write config file");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert_eq!(warning, None);
    assert_eq!(config.api.api_key.as_deref(), Some("abc"));
    assert_eq!(config.catalog.page_size, MAX_PAGE_SIZE);
}

#[test]
fn test_favorites_survive_a_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = Some(dir.path().to_path_buf());

    let (mut first_run, warning) = FavoritesStore::load_from(base.clone());
    assert!(warning.is_none());
    assert!(first_run.is_empty());
    first_run.toggle("xy1-1");
    first_run.toggle("sv1-25");
    first_run.toggle("xy1-1");
    first_run.toggle("base1-4");
    assert_eq!(first_run.save(), None);

    let (second_run, warning) = FavoritesStore::load_from(base);
    assert!(warning.is_none());
    assert_eq!(second_run.ids(), ["sv1-25", "base1-4"]);
}

#[test]
fn test_routes_round_trip_through_history() {
    let mut history = History::new(Route::Home);

    assert!(history.push(Route::parse("/search?q=pikachu")));
    assert!(history.push(Route::parse("/card/xy1-1")));
    assert_eq!(history.current().path(), "/card/xy1-1");

    assert_eq!(history.back().path(), "/search?q=pikachu");
    assert_eq!(history.back(), &Route::Home);
}

#[test]
fn test_pagination_for_a_large_listing() {
    let total = total_pages_for(15_000, 20);
    assert_eq!(total, 750);

    let window = page_window(400, total);
    assert_eq!(window.first(), Some(&PageEntry::Page(1)));
    assert_eq!(window.last(), Some(&PageEntry::Page(750)));
    assert!(window.contains(&PageEntry::Page(400)));
    assert!(window.contains(&PageEntry::Ellipsis));
}
