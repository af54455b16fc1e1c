use std::time::Duration;

/// Something that can run a callback once after a delay.
///
/// An [`Animator`](crate::Animator) keeps at most one timeout outstanding and
/// always clears it with [`Timer::clear_timeout`] before scheduling another
/// one or being torn down.
pub trait Timer: 'static {
    /// Identifies one scheduled timeout.
    type Handle: 'static;

    /// Runs `callback` once, after `delay` has elapsed.
    fn set_timeout(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Self::Handle;

    /// Cancels a timeout that has not fired yet.
    ///
    /// Clearing a timeout that already fired is a no-op.
    fn clear_timeout(&self, handle: Self::Handle);
}
