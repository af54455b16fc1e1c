use super::{
    nav::{scroll_to_section, Section},
    AnimatedText,
};
use crate::i18n::{hero_phrases, translations};
use leptos::prelude::*;
use portfolio_config::Locale;
use std::sync::Arc;

#[component]
pub fn Hero(language: RwSignal<Locale>, github_url: Arc<str>) -> impl IntoView {
    let text = move || &translations(language.get()).hero;
    let phrases = Signal::derive(move || hero_phrases(language.get()));

    view! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1 class="hero-heading">
                    <span class="hero-greeting">{move || text().greeting}</span>
                    " "
                    <AnimatedText phrases class="hero-typed"/>
                </h1>
                <p class="hero-title">{move || text().title}</p>
                <p class="hero-subtitle">{move || text().subtitle}</p>
                <div class="hero-actions">
                    <button
                        id="view-work"
                        class="button button-primary"
                        on:click=move |_| scroll_to_section(Section::Projects)
                    >
                        {move || text().view_work}
                    </button>
                    <a
                        class="button button-secondary"
                        href=github_url
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <i class="fab fa-github"></i>
                        " "
                        {move || text().view_github}
                    </a>
                </div>
            </div>
            <img class="hero-photo" src="/images/profile.png" alt="Warid27"/>
        </section>
    }
}
