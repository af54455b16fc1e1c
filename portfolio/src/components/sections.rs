use super::{stagger, GlassCard, Reveal};
use crate::{
    content::{SkillCategory, CONTACT_LINKS, PROJECTS, TIMELINE},
    i18n::translations,
};
use leptos::prelude::*;
use portfolio_config::Locale;

#[component]
pub fn About(language: RwSignal<Locale>) -> impl IntoView {
    let text = move || &translations(language.get()).about;

    view! {
        <section id="about" class="section">
            <Reveal>
                <h2 class="section-title">{move || text().title}</h2>
            </Reveal>
            <div class="about-text">
                {move || {
                    text()
                        .paragraphs
                        .iter()
                        .map(|paragraph| view! { <p>{*paragraph}</p> })
                        .collect_view()
                }}
            </div>
            <div class="info-cards">
                <InfoCard
                    icon="fas fa-graduation-cap"
                    label=Signal::derive(move || text().student)
                    value=Signal::derive(|| "SMKN 2 Magelang")
                />
                <InfoCard
                    icon="fas fa-handshake"
                    label=Signal::derive(move || text().open_to)
                    value=Signal::derive(move || text().collaboration)
                />
                <InfoCard
                    icon="fas fa-map-marker-alt"
                    label=Signal::derive(move || text().location)
                    value=Signal::derive(move || text().hometown)
                />
            </div>
        </section>
    }
}

#[component]
fn InfoCard(
    icon: &'static str,
    label: Signal<&'static str>,
    value: Signal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="info-card">
            <i class=icon></i>
            <h3>{move || label.get()}</h3>
            <p>{move || value.get()}</p>
        </div>
    }
}

/// Entries alternate between the two sides of the line.
fn timeline_side(index: usize) -> &'static str {
    if index % 2 == 0 {
        "timeline-item timeline-left"
    } else {
        "timeline-item timeline-right"
    }
}

#[component]
pub fn Timeline(language: RwSignal<Locale>) -> impl IntoView {
    view! {
        <section id="timeline" class="section">
            <Reveal>
                <h2 class="section-title">
                    {move || translations(language.get()).timeline_title}
                </h2>
            </Reveal>
            <ol class="timeline">
                {TIMELINE
                    .iter()
                    .enumerate()
                    .map(|(index, milestone)| {
                        view! {
                            <li class=timeline_side(index)>
                                <Reveal amount=0.3 class="timeline-card">
                                    <span class="timeline-year">{milestone.year}</span>
                                    <h3>{move || milestone.title.get(language.get())}</h3>
                                    <p>{move || milestone.description.get(language.get())}</p>
                                </Reveal>
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
pub fn Skills(language: RwSignal<Locale>) -> impl IntoView {
    let active = RwSignal::new(SkillCategory::default());

    view! {
        <section id="skills" class="section">
            <Reveal>
                <h2 class="section-title">
                    {move || translations(language.get()).skills_title}
                </h2>
            </Reveal>
            <div class="skill-tabs" role="tablist">
                {SkillCategory::ALL
                    .into_iter()
                    .map(|category| {
                        view! {
                            <button
                                role="tab"
                                class="skill-tab"
                                class:active=move || active.get() == category
                                data-category=category.label()
                                on:click=move |_| active.set(category)
                            >
                                {category.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="skill-grid">
                {move || {
                    active
                        .get()
                        .technologies()
                        .iter()
                        .map(|tech| {
                            view! {
                                <div class="skill-item">
                                    <img src=tech.logo alt=tech.name loading="lazy"/>
                                    <span>{tech.name}</span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

#[component]
pub fn Projects(language: RwSignal<Locale>) -> impl IntoView {
    view! {
        <section id="projects" class="section">
            <Reveal>
                <h2 class="section-title">
                    {move || translations(language.get()).projects_title}
                </h2>
            </Reveal>
            <div class="project-grid">
                {PROJECTS
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! {
                            <Reveal amount=0.2 delay_ms=stagger(index)>
                                <GlassCard href=project.link class="project-card">
                                    <h3>{project.title}</h3>
                                    <p>{move || project.description.get(language.get())}</p>
                                    <div class="tags">
                                        {project
                                            .tags
                                            .iter()
                                            .map(|tag| view! { <span class="tag">{*tag}</span> })
                                            .collect_view()}
                                    </div>
                                </GlassCard>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
pub fn Contact(language: RwSignal<Locale>) -> impl IntoView {
    let text = move || &translations(language.get()).contact;

    view! {
        <section id="contact" class="section">
            <Reveal>
                <h2 class="section-title">{move || text().title}</h2>
            </Reveal>
            <p class="contact-subtitle">{move || text().subtitle}</p>
            <div class="contact-links">
                {CONTACT_LINKS
                    .iter()
                    .map(|link| {
                        view! {
                            <a
                                class="contact-link"
                                href=link.href
                                target="_blank"
                                rel="noopener noreferrer"
                                aria-label=link.name
                            >
                                <i class=link.icon></i>
                                <span>{link.name}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="contact-invite">{move || text().interested}</p>
        </section>
    }
}

#[component]
pub fn Footer(language: RwSignal<Locale>) -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{move || translations(language.get()).footer}</p>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::timeline_side;

    #[test]
    fn timeline_entries_alternate_sides() {
        let sides: Vec<_> = (0..4).map(timeline_side).collect();
        assert_eq!(sides[0], sides[2]);
        assert_eq!(sides[1], sides[3]);
        assert_ne!(sides[0], sides[1]);
    }
}
