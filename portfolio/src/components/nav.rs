use crate::{
    i18n::{toggle_label, translations},
    theme::Theme,
};
use leptos::{leptos_dom::helpers::document, prelude::*};
use portfolio_config::{Locale, ThemePreference};
use std::sync::Arc;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// A page section that can be reached from the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Timeline,
    Skills,
    Projects,
    Contact,
}

impl Section {
    /// Sections in page order.
    pub const ALL: [Section; 5] = [
        Section::About,
        Section::Timeline,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// The `id` of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Timeline => "timeline",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }

    pub fn label(self, locale: Locale) -> &'static str {
        let nav = &translations(locale).nav;
        match self {
            Section::About => nav.about,
            Section::Timeline => nav.journey,
            Section::Skills => nav.skills,
            Section::Projects => nav.projects,
            Section::Contact => nav.contact,
        }
    }
}

/// Smoothly scrolls the page until `section` is in view.
pub fn scroll_to_section(section: Section) {
    let Some(target) = document().get_element_by_id(section.id()) else {
        log::warn!("no element with id {:?}", section.id());
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[component]
pub fn Nav(
    brand: Arc<str>,
    language: RwSignal<Locale>,
    theme: Signal<Theme>,
    /// Set to an explicit theme when the toggle is used.
    preference: RwSignal<ThemePreference>,
    menu_open: RwSignal<bool>,
) -> impl IntoView {
    let go_to = move |section: Section| {
        menu_open.set(false);
        scroll_to_section(section);
    };
    let section_links = move |class: &'static str| {
        Section::ALL
            .into_iter()
            .map(|section| {
                view! {
                    <button
                        class=class
                        data-section=section.id()
                        on:click=move |_| go_to(section)
                    >
                        {move || section.label(language.get())}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <a class="brand" href="#">
                    {brand}
                </a>
                <div class="nav-links">{section_links("nav-link")}</div>
                <div class="nav-actions">
                    <button
                        id="language-toggle"
                        class="icon-button"
                        title="Toggle language"
                        on:click=move |_| language.update(|l| *l = l.toggle())
                    >
                        {move || toggle_label(language.get())}
                    </button>
                    <button
                        id="theme-toggle"
                        class="icon-button"
                        title="Toggle theme"
                        on:click=move |_| {
                            preference
                                .set(theme.get_untracked().toggle().as_preference())
                        }
                    >
                        <i class=move || theme.get().toggle_icon()></i>
                    </button>
                    <button
                        id="menu-toggle"
                        class="icon-button menu-toggle"
                        aria-label="Menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        <i class=move || {
                            if menu_open.get() { "fas fa-times" } else { "fas fa-bars" }
                        }></i>
                    </button>
                </div>
            </div>
            <Show when=move || menu_open.get()>
                <div class="mobile-menu">{section_links("mobile-link")}</div>
            </Show>
        </nav>
    }
}
