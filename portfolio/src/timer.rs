use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use std::time::Duration;
use typewriter::Timer;

/// Schedules typewriter steps with the browser's `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    /// `None` when the browser refused to schedule the timeout.
    type Handle = Option<TimeoutHandle>;

    fn set_timeout(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Self::Handle {
        match set_timeout_with_handle(callback, delay) {
            Ok(handle) => Some(handle),
            Err(e) => {
                log::error!("could not schedule typewriter step: {e:?}");
                None
            }
        }
    }

    fn clear_timeout(&self, handle: Self::Handle) {
        if let Some(handle) = handle {
            handle.clear();
        }
    }
}
