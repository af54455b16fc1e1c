use leptos::{html, prelude::*};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Fades its children in the first time they scroll into view.
///
/// The wrapper starts with the `reveal` class; once at least `amount` of it
/// is visible it also gets `visible` and the stylesheet transitions it in.
/// It is never hidden again.
#[component]
pub fn Reveal(
    /// Fraction of the element that must be visible, from `0.0` to `1.0`.
    #[prop(optional)]
    amount: f64,
    /// Extra delay before the transition starts.
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let visible = RwSignal::new(false);
    let observer: StoredValue<Option<OnceVisible>, LocalStorage> =
        StoredValue::new_local(None);

    Effect::new(move |_| {
        let Some(target) = node.get() else {
            return;
        };
        if observer.with_value(Option::is_some) {
            return;
        }
        match OnceVisible::observe(&target, amount, move || visible.set(true))
        {
            Ok(watching) => observer.set_value(Some(watching)),
            Err(e) => {
                log::warn!("could not observe element, showing it: {e:?}");
                visible.set(true);
            }
        }
    });

    view! {
        <div
            node_ref=node
            class=format!("reveal {class}")
            class:visible=move || visible.get()
            style:transition-delay=transition_delay(delay_ms)
        >
            {children()}
        </div>
    }
}

/// Delay of the `index`-th card in a staggered grid.
pub fn stagger(index: usize) -> u32 {
    const STEP_MS: u32 = 60;
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(STEP_MS))
}

fn transition_delay(delay_ms: u32) -> String {
    format!("{delay_ms}ms")
}

type ObserverCallback =
    Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// An `IntersectionObserver` that fires once and then stops watching.
/// Disconnects when dropped.
struct OnceVisible {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl OnceVisible {
    fn observe(
        target: &Element,
        amount: f64,
        on_visible: impl Fn() + 'static,
    ) -> Result<Self, JsValue> {
        let callback: ObserverCallback = Closure::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry = entry.unchecked_into::<IntersectionObserverEntry>();
                    if entry.is_intersecting() {
                        on_visible();
                        observer.unobserve(&entry.target());
                    }
                }
            },
        );
        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(amount.clamp(0.0, 1.0)));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        observer.observe(target);
        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Drop for OnceVisible {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
