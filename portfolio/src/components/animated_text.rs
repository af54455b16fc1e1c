use crate::timer::BrowserTimer;
use leptos::prelude::*;
use typewriter::Animator;

/// Types out each phrase, holds it, deletes it and moves on to the next one,
/// forever.
///
/// The animation starts when the component is created and restarts from the
/// first phrase whenever `phrases` changes. When the component is removed
/// the pending timeout is cleared, so nothing keeps ticking in the
/// background.
///
/// ```rust,no_run
/// # use leptos::prelude::*;
/// # use portfolio::components::AnimatedText;
/// # #[component]
/// # pub fn Greeting() -> impl IntoView {
/// let phrases: &'static [&'static str] = &["Warid", "a developer"];
///
/// view! {
///     <h1>"Hi, I'm " <AnimatedText phrases=phrases/></h1>
/// }
/// # }
/// ```
#[component]
pub fn AnimatedText(
    /// The phrases to cycle through.
    #[prop(into)]
    phrases: Signal<&'static [&'static str]>,
    /// Optional CSS class for the wrapping `<span>`.
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let animator: StoredValue<Option<Animator<BrowserTimer>>, LocalStorage> =
        StoredValue::new_local(None);

    Effect::new(move |_| {
        let phrases = phrases.get();
        let running = animator.with_value(|slot| match slot {
            Some(animator) => {
                animator.set_phrases(phrases.iter().copied());
                true
            }
            None => false,
        });
        if !running {
            let mounted = Animator::mount(
                phrases.iter().copied(),
                BrowserTimer,
                move |current: &str| set_text.set(current.to_owned()),
            );
            animator.set_value(Some(mounted));
        }
    });

    on_cleanup(move || {
        if let Some(running) = animator.try_update_value(Option::take).flatten()
        {
            running.unmount();
        }
    });

    view! {
        <span class=class>
            <span class="typewriter-text">{text}</span>
            <span class="typewriter-cursor" aria-hidden="true">"|"</span>
        </span>
    }
}
