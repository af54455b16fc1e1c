use portfolio_config::{
    errors::PortfolioConfigError, get_config_from_str, Locale, SiteConfig,
    ThemePreference,
};

const ENV_VARS: [&str; 6] = [
    "PORTFOLIO_BRAND",
    "PORTFOLIO_TITLE",
    "PORTFOLIO_DESCRIPTION",
    "PORTFOLIO_GITHUB_URL",
    "PORTFOLIO_DEFAULT_LOCALE",
    "PORTFOLIO_DEFAULT_THEME",
];

const CARGO_TOML_CONTENT_OK: &str = r#"\
[package]
name = "portfolio-test"

[package.metadata.portfolio]
brand = "brand-test"
title = "title-test"
github-url = "https://github.com/example"
default-locale = "id"
default-theme = "dark"

[dependencies]
leptos = "0.8"
"#;

const CARGO_TOML_CONTENT_ERR: &str = r#"\
[package.metadata.portfolio]
- invalid toml -
"#;

const CARGO_TOML_CONTENT_NO_SECTION: &str = r#"\
[package]
name = "portfolio-test"
"#;

#[test]
fn site_config_default() {
    let config = SiteConfig::default();
    assert_eq!(config.brand.as_ref(), "Warid27");
    assert_eq!(config.github_url.as_ref(), "https://github.com/Warid27");
    assert_eq!(config.default_locale, Locale::En);
    assert_eq!(config.default_theme, ThemePreference::System);
}

#[test]
fn site_config_builder() {
    let config = SiteConfig::builder()
        .brand("brand-test")
        .default_locale(Locale::Id)
        .build();
    assert_eq!(config.brand.as_ref(), "brand-test");
    assert_eq!(config.title.as_ref(), "Warid27");
    assert_eq!(config.default_locale, Locale::Id);
    assert_eq!(config.default_theme, ThemePreference::System);
}

#[test]
fn get_config_from_str_content() {
    let config = temp_env::with_vars_unset(ENV_VARS, || {
        get_config_from_str(CARGO_TOML_CONTENT_OK).unwrap()
    });

    assert_eq!(config.brand.as_ref(), "brand-test");
    assert_eq!(config.title.as_ref(), "title-test");
    assert_eq!(config.github_url.as_ref(), "https://github.com/example");
    assert_eq!(config.default_locale, Locale::Id);
    assert_eq!(config.default_theme, ThemePreference::Dark);
    // unset keys fall back to their defaults
    assert_eq!(
        config.description.as_ref(),
        SiteConfig::default().description.as_ref()
    );
}

#[test]
fn get_config_from_str_missing_section() {
    assert_eq!(
        get_config_from_str(CARGO_TOML_CONTENT_NO_SECTION),
        Err(PortfolioConfigError::ConfigSectionNotFound)
    );
}

#[test]
fn get_config_from_str_unknown_locale() {
    let content = "[package.metadata.portfolio]\ndefault-locale = \"fr\"\n";
    let result =
        temp_env::with_vars_unset(ENV_VARS, || get_config_from_str(content));
    assert!(matches!(result, Err(PortfolioConfigError::ConfigError(_))));
}

#[test]
fn get_config_from_workspace_metadata() {
    let content = "[workspace.metadata.portfolio]\nbrand = \"ws\"\n";
    let config = temp_env::with_vars_unset(ENV_VARS, || {
        get_config_from_str(content).unwrap()
    });
    assert_eq!(config.brand.as_ref(), "ws");
}

#[test]
fn get_config_from_str_invalid_toml() {
    let result = temp_env::with_vars_unset(ENV_VARS, || {
        get_config_from_str(CARGO_TOML_CONTENT_ERR)
    });
    assert!(matches!(result, Err(PortfolioConfigError::ConfigError(_))));
}

#[test]
fn get_config_from_empty_str() {
    assert_eq!(
        get_config_from_str(""),
        Err(PortfolioConfigError::ConfigSectionNotFound)
    );
}

#[test]
fn get_config_from_bare_section_gives_defaults() {
    let config = temp_env::with_vars_unset(ENV_VARS, || {
        get_config_from_str("[package.metadata.portfolio]\n").unwrap()
    });
    assert_eq!(config, SiteConfig::default());
}

#[test]
fn environment_variable_override() {
    let config = temp_env::with_vars(
        [
            ("PORTFOLIO_BRAND", Some("brand-override")),
            ("PORTFOLIO_DEFAULT_THEME", Some("light")),
        ],
        || get_config_from_str(CARGO_TOML_CONTENT_OK).unwrap(),
    );

    assert_eq!(config.brand.as_ref(), "brand-override");
    assert_eq!(config.default_theme, ThemePreference::Light);
    // keys without an override keep the manifest value
    assert_eq!(config.title.as_ref(), "title-test");
}
