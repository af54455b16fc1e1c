//! The components the page is assembled from.

mod animated_text;
mod glass_card;
mod hero;
mod nav;
mod reveal;
mod sections;

pub use animated_text::AnimatedText;
pub use glass_card::GlassCard;
pub use hero::Hero;
pub use nav::{scroll_to_section, Nav, Section};
pub use reveal::{stagger, Reveal};
pub use sections::{About, Contact, Footer, Projects, Skills, Timeline};
