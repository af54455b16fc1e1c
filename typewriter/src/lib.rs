//! A typewriter-style text animation, modeled as a small owned state machine.
//!
//! Given an ordered list of phrases, the animation types the active phrase one
//! character at a time, holds the full phrase, deletes it one character at a
//! time, and then moves on to the next phrase, looping forever.
//!
//! The crate is split into three layers:
//! - [`Typewriter`] is the pure state machine. It knows nothing about time; each
//!   call to [`Typewriter::tick`] applies one elapsed timer.
//! - [`Timer`] abstracts over "run this callback after a delay". The crate ships
//!   [`ManualTimer`], a virtual clock that is advanced explicitly.
//! - [`Animator`] owns a state machine, a timer and the single pending timeout,
//!   and reschedules itself after every transition until it is unmounted.
//!
//! ```rust
//! use std::time::Duration;
//! use typewriter::{Animator, ManualTimer, Mode};
//!
//! let timer = ManualTimer::new();
//! let animator = Animator::mount(["Warid"], timer.clone(), |_| {});
//!
//! timer.advance(Duration::from_millis(300));
//! assert_eq!(animator.display_text(), "War");
//!
//! timer.advance(Duration::from_millis(200));
//! assert_eq!(animator.display_text(), "Warid");
//! assert_eq!(animator.snapshot().mode, Mode::HoldingFull);
//!
//! animator.unmount();
//! assert_eq!(timer.pending(), 0);
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animator;
mod machine;
mod manual;
mod phrase;
mod timer;

pub use animator::Animator;
pub use machine::{Mode, Snapshot, Typewriter};
pub use manual::{ManualHandle, ManualTimer};
pub use phrase::Phrase;
pub use timer::Timer;

use std::time::Duration;

/// Delay before each character is typed.
pub const TYPE_DELAY: Duration = Duration::from_millis(100);

/// How long a fully typed phrase stays on screen before deletion starts.
pub const HOLD_DELAY: Duration = Duration::from_millis(5000);

/// Delay before each character is deleted.
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
