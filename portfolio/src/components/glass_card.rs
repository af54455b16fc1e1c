use leptos::{ev::MouseEvent, html, prelude::*};

/// A link card with a frosted-glass look and a shine that follows the
/// pointer.
///
/// The pointer position relative to the card is written to the `--x` and
/// `--y` CSS custom properties; the stylesheet draws the highlight there.
#[component]
pub fn GlassCard(
    href: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let card = NodeRef::<html::A>::new();

    let track_pointer = move |ev: MouseEvent| {
        let Some(card) = card.get() else {
            return;
        };
        let rect = card.get_bounding_client_rect();
        let (x, y) = pointer_offset(
            (f64::from(ev.client_x()), f64::from(ev.client_y())),
            (rect.left(), rect.top()),
        );
        let style = web_sys::HtmlElement::style(&card);
        _ = style.set_property("--x", &format!("{x}px"));
        _ = style.set_property("--y", &format!("{y}px"));
    };

    view! {
        <a
            node_ref=card
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class=format!("glass-card {class}")
            on:mousemove=track_pointer
        >
            {children()}
        </a>
    }
}

/// Position of the pointer relative to the top left corner of the card.
fn pointer_offset(client: (f64, f64), origin: (f64, f64)) -> (f64, f64) {
    (client.0 - origin.0, client.1 - origin.1)
}
