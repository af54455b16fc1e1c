use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PortfolioConfigError {
    #[error("package.metadata.portfolio section missing from Cargo.toml")]
    ConfigSectionNotFound,
    #[error("Unknown locale `{0}`, expected `en` or `id`")]
    UnknownLocale(String),
    #[error("Unknown theme `{0}`, expected `system`, `light` or `dark`")]
    UnknownTheme(String),
    #[error("Config Error: {0}")]
    ConfigError(String),
}

impl From<config::ConfigError> for PortfolioConfigError {
    fn from(e: config::ConfigError) -> Self {
        Self::ConfigError(e.to_string())
    }
}
