//! A bilingual single-page portfolio, rendered client side with Leptos.
//!
//! The hero greeting is animated by the [`typewriter`] crate through the
//! [`AnimatedText`](components::AnimatedText) component. Site settings come
//! from the `[package.metadata.portfolio]` section of this crate's manifest.

pub mod components;
pub mod content;
pub mod i18n;
pub mod theme;
pub mod timer;

use crate::{
    components::{
        About, Contact, Footer, Hero, Nav, Projects, Skills, Timeline,
    },
    theme::{
        apply_lang, apply_theme, system_prefers_dark, SystemThemeWatcher,
        Theme,
    },
};
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};
use portfolio_config::{get_config_from_str, SiteConfig};

const MANIFEST: &str = include_str!("../Cargo.toml");

/// Reads the site settings embedded from the manifest, falling back to the
/// defaults if they cannot be parsed.
pub fn site_config() -> SiteConfig {
    get_config_from_str(MANIFEST).unwrap_or_else(|e| {
        log::error!("invalid site configuration, using defaults: {e}");
        SiteConfig::default()
    })
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = site_config();
    let language = RwSignal::new(config.default_locale);
    let preference = RwSignal::new(config.default_theme);
    let system_dark = RwSignal::new(system_prefers_dark());
    let theme = Signal::derive(move || {
        Theme::resolve(preference.get(), system_dark.get())
    });
    let menu_open = RwSignal::new(false);

    // dropped with the app, which stops the listener
    let _watcher = StoredValue::new_local(SystemThemeWatcher::new(
        move |dark| system_dark.set(dark),
    ));

    Effect::new(move |_| apply_theme(theme.get()));
    Effect::new(move |_| apply_lang(language.get().as_str()));

    view! {
        <Title text=config.title.to_string()/>
        <Meta name="description" content=config.description.to_string()/>
        <Nav brand=config.brand.clone() language theme preference menu_open/>
        <main>
            <Hero language github_url=config.github_url.clone()/>
            <About language/>
            <Timeline language/>
            <Skills language/>
            <Projects language/>
            <Contact language/>
        </main>
        <Footer language/>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_config::{Locale, ThemePreference};

    #[test]
    fn embedded_manifest_has_site_settings() {
        let config = get_config_from_str(MANIFEST).unwrap();
        assert_eq!(&*config.brand, "Warid27");
        assert_eq!(config.default_locale, Locale::En);
        assert_eq!(config.default_theme, ThemePreference::System);
    }
}
