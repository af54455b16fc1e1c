use crate::{Phrase, Snapshot, Timer, Typewriter};
use std::{
    cell::{Cell, RefCell},
    fmt,
    rc::{Rc, Weak},
};

/// A mounted typewriter animation.
///
/// The animator owns a [`Typewriter`], a [`Timer`] and the one timeout that is
/// currently pending. Each time the timeout fires, the machine advances, the
/// `on_change` callback is told about the new display text and the next
/// timeout is scheduled.
///
/// The pending timeout is cleared before every reschedule, when the phrases are
/// replaced, and when the animator is unmounted or dropped. Scheduled callbacks
/// only hold a weak reference back to the animator, so a timeout that outlives
/// it cannot keep it alive or mutate it.
pub struct Animator<T: Timer> {
    inner: Rc<Inner<T>>,
}

struct Inner<T: Timer> {
    machine: RefCell<Typewriter>,
    timer: T,
    pending: Cell<Option<T::Handle>>,
    // bumped on every reset and on unmount; callbacks carry the value they
    // were scheduled with
    generation: Cell<u64>,
    mounted: Cell<bool>,
    on_change: Box<dyn Fn(&str)>,
}

impl<T: Timer> Animator<T> {
    /// Starts animating `phrases`.
    ///
    /// `on_change` is called immediately with the initial display text, and
    /// again after every transition that changes it.
    pub fn mount<I>(
        phrases: I,
        timer: T,
        on_change: impl Fn(&str) + 'static,
    ) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Phrase>,
    {
        let inner = Rc::new(Inner {
            machine: RefCell::new(Typewriter::new(phrases)),
            timer,
            pending: Cell::new(None),
            generation: Cell::new(0),
            mounted: Cell::new(true),
            on_change: Box::new(on_change),
        });
        tracing::debug!(
            phrases = inner.machine.borrow().phrases().len(),
            "typewriter mounted"
        );
        inner.notify();
        Inner::schedule(&inner);
        Self { inner }
    }

    /// Swaps in a new phrase list and restarts from the first phrase.
    ///
    /// The timeout tied to the old list is cleared before anything else
    /// happens. Has no effect once the animator is unmounted.
    pub fn set_phrases<I>(&self, phrases: I)
    where
        I: IntoIterator,
        I::Item: Into<Phrase>,
    {
        let inner = &self.inner;
        if !inner.mounted.get() {
            tracing::debug!("ignoring new phrases for unmounted typewriter");
            return;
        }
        inner.cancel_pending_timer();
        inner.generation.set(inner.generation.get() + 1);
        inner.machine.borrow_mut().reset(phrases);
        tracing::debug!(
            phrases = inner.machine.borrow().phrases().len(),
            "typewriter reset"
        );
        inner.notify();
        Inner::schedule(inner);
    }

    /// Stops the animation.
    ///
    /// The pending timeout is cleared and the state is frozen. Calling this
    /// more than once is harmless; dropping the animator does the same.
    pub fn unmount(&self) {
        self.inner.teardown();
    }

    /// Whether the animation is still running.
    pub fn is_mounted(&self) -> bool {
        self.inner.mounted.get()
    }

    /// The text that should currently be on screen.
    pub fn display_text(&self) -> String {
        self.inner.machine.borrow().display_text().to_owned()
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        self.inner.machine.borrow().snapshot()
    }
}

impl<T: Timer> Drop for Animator<T> {
    fn drop(&mut self) {
        self.inner.teardown();
    }
}

impl<T: Timer> fmt::Debug for Animator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animator")
            .field("machine", &*self.inner.machine.borrow())
            .field("generation", &self.inner.generation.get())
            .field("mounted", &self.inner.mounted.get())
            .finish_non_exhaustive()
    }
}

impl<T: Timer> Inner<T> {
    fn schedule(this: &Rc<Self>) {
        this.cancel_pending_timer();
        if !this.mounted.get() {
            return;
        }
        let Some(delay) = this.machine.borrow().delay() else {
            return;
        };
        let weak: Weak<Self> = Rc::downgrade(this);
        let generation = this.generation.get();
        let handle = this.timer.set_timeout(
            delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    Inner::fire(&inner, generation);
                }
            }),
        );
        this.pending.set(Some(handle));
    }

    fn fire(this: &Rc<Self>, generation: u64) {
        if !this.mounted.get() || generation != this.generation.get() {
            tracing::trace!(generation, "dropping stale typewriter timeout");
            return;
        }
        // this timeout has run; there is nothing left to clear
        this.pending.take();

        let changed = {
            let mut machine = this.machine.borrow_mut();
            let before = machine.snapshot();
            machine.tick();
            let after = machine.snapshot();
            before.visible_len != after.visible_len
                || before.phrase_index != after.phrase_index
        };
        if changed {
            this.notify();
        }
        Inner::schedule(this);
    }

    fn cancel_pending_timer(&self) {
        if let Some(handle) = self.pending.take() {
            self.timer.clear_timeout(handle);
        }
    }

    fn teardown(&self) {
        if !self.mounted.replace(false) {
            return;
        }
        self.cancel_pending_timer();
        self.generation.set(self.generation.get() + 1);
        tracing::debug!("typewriter unmounted");
    }

    fn notify(&self) {
        // copied out so the callback may call back into the animator
        let text = self.machine.borrow().display_text().to_owned();
        (self.on_change)(&text);
    }
}
