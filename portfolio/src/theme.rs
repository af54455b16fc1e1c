use leptos::leptos_dom::helpers::{document, window};
use portfolio_config::ThemePreference;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{MediaQueryList, MediaQueryListEvent};

const DARK_SCHEME: &str = "(prefers-color-scheme: dark)";

/// The color scheme currently applied to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    /// Picks the starting theme for a configured preference.
    pub fn resolve(preference: ThemePreference, system_dark: bool) -> Self {
        match preference {
            ThemePreference::Light => Theme::Light,
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::System if system_dark => Theme::Dark,
            ThemePreference::System => Theme::Light,
        }
    }

    /// The explicit preference that pins this theme.
    pub fn as_preference(self) -> ThemePreference {
        match self {
            Theme::Light => ThemePreference::Light,
            Theme::Dark => ThemePreference::Dark,
        }
    }

    /// Font Awesome icon for the toggle button: the sun leads out of dark
    /// mode, the moon into it.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

/// Whether the browser asks for a dark color scheme.
pub fn system_prefers_dark() -> bool {
    match window().match_media(DARK_SCHEME) {
        Ok(Some(query)) => query.matches(),
        Ok(None) => false,
        Err(e) => {
            log::warn!("could not evaluate {DARK_SCHEME}: {e:?}");
            false
        }
    }
}

/// Reports changes of the browser's color scheme until dropped.
pub struct SystemThemeWatcher {
    query: MediaQueryList,
    listener: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl SystemThemeWatcher {
    /// Calls `on_change` with `true` whenever the browser switches to a dark
    /// scheme, and with `false` when it switches back.
    ///
    /// Returns `None` if the media query is not available.
    pub fn new(on_change: impl Fn(bool) + 'static) -> Option<Self> {
        let query = match window().match_media(DARK_SCHEME) {
            Ok(query) => query?,
            Err(e) => {
                log::warn!("could not evaluate {DARK_SCHEME}: {e:?}");
                return None;
            }
        };
        let listener = Closure::<dyn FnMut(MediaQueryListEvent)>::new(
            move |ev: MediaQueryListEvent| on_change(ev.matches()),
        );
        if let Err(e) = query.add_event_listener_with_callback(
            "change",
            listener.as_ref().unchecked_ref(),
        ) {
            log::warn!("could not watch {DARK_SCHEME}: {e:?}");
            return None;
        }
        Some(Self { query, listener })
    }
}

impl Drop for SystemThemeWatcher {
    fn drop(&mut self) {
        _ = self.query.remove_event_listener_with_callback(
            "change",
            self.listener.as_ref().unchecked_ref(),
        );
    }
}

/// Adds or removes the `dark` class on the root `<html>` element.
pub fn apply_theme(theme: Theme) {
    let Some(root) = document().document_element() else {
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", theme.is_dark())
    {
        log::error!("could not apply {theme:?} theme: {e:?}");
    }
}

/// Sets the `lang` attribute of the root `<html>` element.
pub fn apply_lang(lang: &str) {
    if let Some(root) = document().document_element() {
        _ = root.set_attribute("lang", lang);
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};
    use web_sys::MediaQueryListEventInit;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn scheme_change(dark: bool) -> MediaQueryListEvent {
        let init = MediaQueryListEventInit::new();
        init.set_matches(dark);
        init.set_media(DARK_SCHEME);
        MediaQueryListEvent::new_with_event_init_dict("change", &init).unwrap()
    }

    #[wasm_bindgen_test]
    fn watcher_reports_scheme_changes_until_dropped() {
        let seen = Rc::new(Cell::new(None));
        let watcher = SystemThemeWatcher::new({
            let seen = Rc::clone(&seen);
            move |dark| seen.set(Some(dark))
        })
        .unwrap();
        let query = watcher.query.clone();

        query.dispatch_event(&scheme_change(true)).unwrap();
        assert_eq!(seen.get(), Some(true));
        query.dispatch_event(&scheme_change(false)).unwrap();
        assert_eq!(seen.get(), Some(false));

        drop(watcher);
        seen.set(None);
        query.dispatch_event(&scheme_change(true)).unwrap();
        assert_eq!(seen.get(), None);
    }
}
