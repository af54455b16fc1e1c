#![forbid(unsafe_code)]

//! Site configuration for the portfolio.
//!
//! Settings live in the `[package.metadata.portfolio]` section of a Cargo
//! manifest and can be overridden with `PORTFOLIO_*` environment variables,
//! e.g. `PORTFOLIO_DEFAULT_LOCALE=id` sets [`SiteConfig::default_locale`].

pub mod errors;

use crate::errors::PortfolioConfigError;
use config::{Case, Config, File, FileFormat};
use regex::Regex;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr, sync::Arc};
use typed_builder::TypedBuilder;

/// Everything the page needs to know that is not translated content.
#[derive(TypedBuilder, Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Name shown in the navigation bar.
    #[builder(setter(into), default = default_brand())]
    #[serde(default = "default_brand")]
    pub brand: Arc<str>,
    /// Document title.
    #[builder(setter(into), default = default_title())]
    #[serde(default = "default_title")]
    pub title: Arc<str>,
    /// Content of the `description` meta tag.
    #[builder(setter(into), default = default_description())]
    #[serde(default = "default_description")]
    pub description: Arc<str>,
    /// Profile linked from the hero section.
    #[builder(setter(into), default = default_github_url())]
    #[serde(default = "default_github_url")]
    pub github_url: Arc<str>,
    /// Language shown on first load.
    #[builder(default)]
    #[serde(default)]
    pub default_locale: Locale,
    /// Theme used on first load.
    #[builder(default)]
    #[serde(default)]
    pub default_theme: ThemePreference,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn default_brand() -> Arc<str> {
    "Warid27".into()
}

fn default_title() -> Arc<str> {
    "Warid27".into()
}

fn default_description() -> Arc<str> {
    "Portfolio of Warid27 - Student developer passionate about coding, \
     learning, and creating digital experiences"
        .into()
}

fn default_github_url() -> Arc<str> {
    "https://github.com/Warid27".into()
}

/// A language the page is available in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// English.
    #[default]
    En,
    /// Bahasa Indonesia.
    Id,
}

impl Locale {
    /// The other supported language.
    pub fn toggle(self) -> Self {
        match self {
            Locale::En => Locale::Id,
            Locale::Id => Locale::En,
        }
    }

    /// The BCP 47 code, as used in the `lang` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = PortfolioConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "id" | "indonesian" | "bahasa" => Ok(Locale::Id),
            _ => Err(PortfolioConfigError::UnknownLocale(input.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Which color scheme to start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemePreference {
    /// Follow the operating system's `prefers-color-scheme`.
    #[default]
    System,
    /// Always start light.
    Light,
    /// Always start dark.
    Dark,
}

impl ThemePreference {
    /// The name used in configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::System => "system",
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }
}

impl FromStr for ThemePreference {
    type Err = PortfolioConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_ascii_lowercase().as_str() {
            "system" | "auto" => Ok(ThemePreference::System),
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            _ => Err(PortfolioConfigError::UnknownTheme(input.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ThemePreference {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl Serialize for ThemePreference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// Loads the configuration from the text of a Cargo manifest.
///
/// Environment variables take precedence over the manifest.
pub fn get_config_from_str(
    text: &str,
) -> Result<SiteConfig, PortfolioConfigError> {
    let re = Regex::new(r"(?m)^\[(package|workspace)\.metadata\.portfolio\]")
        .map_err(|e| PortfolioConfigError::ConfigError(e.to_string()))?;
    let Some(found) = re.find(text) else {
        return Err(PortfolioConfigError::ConfigSectionNotFound);
    };

    // keep the line numbers in parse errors pointing at the real manifest
    let newlines = text[..found.start()].matches('\n').count();
    let input = "\n".repeat(newlines) + &text[found.end()..];

    let settings = Config::builder()
        .add_source(File::from_str(&input, FileFormat::Toml))
        .add_source(
            config::Environment::with_prefix("PORTFOLIO")
                .convert_case(Case::Kebab),
        )
        .build()?;

    settings
        .try_deserialize()
        .map_err(|e| PortfolioConfigError::ConfigError(e.to_string()))
}
