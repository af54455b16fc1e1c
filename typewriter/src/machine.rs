use crate::{Phrase, DELETE_DELAY, HOLD_DELAY, TYPE_DELAY};
use std::time::Duration;

/// The phase of the per-phrase cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Characters are being revealed one at a time.
    #[default]
    Typing,
    /// The whole phrase is visible and waiting to be deleted.
    HoldingFull,
    /// Characters are being removed one at a time.
    Deleting,
}

/// A copy of the animation state at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Snapshot {
    /// Index of the active phrase.
    pub phrase_index: usize,
    /// Number of leading characters of the active phrase that are visible.
    pub visible_len: usize,
    /// Current phase of the cycle.
    pub mode: Mode,
}

/// The typewriter state machine.
///
/// The machine is driven from outside: [`Typewriter::delay`] says how long to
/// wait before the next transition, and [`Typewriter::tick`] applies it.
/// Transitions that take no time (a fully typed phrase starting its hold, a
/// fully deleted phrase advancing to the next one) are applied eagerly, so
/// after any public call the machine is always waiting on exactly one delay.
#[derive(Debug, Clone, Default)]
pub struct Typewriter {
    phrases: Vec<Phrase>,
    phrase_index: usize,
    visible_len: usize,
    mode: Mode,
}

impl Typewriter {
    /// Creates a machine in its initial state for the given phrases.
    pub fn new<I>(phrases: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Phrase>,
    {
        let mut this = Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            ..Default::default()
        };
        this.settle();
        this
    }

    /// Replaces the phrase list and returns to the initial state.
    ///
    /// No index into the previous list survives a reset.
    pub fn reset<I>(&mut self, phrases: I)
    where
        I: IntoIterator,
        I::Item: Into<Phrase>,
    {
        *self = Self::new(phrases);
    }

    /// The phrases being cycled through.
    pub fn phrases(&self) -> &[Phrase] {
        &self.phrases
    }

    /// Whether there is nothing to animate.
    pub fn is_idle(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Index of the active phrase.
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// Number of visible characters of the active phrase.
    pub fn visible_len(&self) -> usize {
        self.visible_len
    }

    /// Current phase of the cycle.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phrase_index: self.phrase_index,
            visible_len: self.visible_len,
            mode: self.mode,
        }
    }

    /// The visible prefix of the active phrase.
    pub fn display_text(&self) -> &str {
        self.active()
            .map(|phrase| phrase.prefix(self.visible_len))
            .unwrap_or_default()
    }

    /// How long to wait before the next call to [`Typewriter::tick`].
    ///
    /// Returns `None` when the phrase list is empty.
    pub fn delay(&self) -> Option<Duration> {
        if self.is_idle() {
            return None;
        }
        Some(match self.mode {
            Mode::Typing => TYPE_DELAY,
            Mode::HoldingFull => HOLD_DELAY,
            Mode::Deleting => DELETE_DELAY,
        })
    }

    /// Applies one elapsed delay.
    ///
    /// Does nothing when the phrase list is empty.
    pub fn tick(&mut self) {
        if self.is_idle() {
            return;
        }
        match self.mode {
            Mode::Typing => self.visible_len += 1,
            Mode::HoldingFull => self.mode = Mode::Deleting,
            Mode::Deleting => self.visible_len -= 1,
        }
        tracing::trace!(
            phrase_index = self.phrase_index,
            visible_len = self.visible_len,
            mode = ?self.mode,
            "typewriter tick"
        );
        self.settle();
    }

    fn active(&self) -> Option<&Phrase> {
        self.phrases.get(self.phrase_index)
    }

    // applies the zero-delay transitions
    fn settle(&mut self) {
        if self.is_idle() {
            return;
        }
        if self.mode == Mode::Deleting && self.visible_len == 0 {
            self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            self.mode = Mode::Typing;
            tracing::trace!(
                phrase_index = self.phrase_index,
                "typewriter advanced to next phrase"
            );
        }
        let len = self.active().map(Phrase::len).unwrap_or_default();
        if self.mode == Mode::Typing && self.visible_len >= len {
            self.visible_len = len;
            self.mode = Mode::HoldingFull;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(machine: &mut Typewriter, ticks: usize) {
        for _ in 0..ticks {
            machine.tick();
        }
    }

    #[test]
    fn starts_typing_the_first_phrase() {
        let machine = Typewriter::new(["Warid", "a developer"]);
        assert_eq!(
            machine.snapshot(),
            Snapshot {
                phrase_index: 0,
                visible_len: 0,
                mode: Mode::Typing
            }
        );
        assert_eq!(machine.display_text(), "");
        assert_eq!(machine.delay(), Some(TYPE_DELAY));
    }

    #[test]
    fn typing_to_full_starts_the_hold() {
        let mut machine = Typewriter::new(["abc"]);
        run(&mut machine, 2);
        assert_eq!(machine.mode(), Mode::Typing);
        assert_eq!(machine.display_text(), "ab");

        machine.tick();
        assert_eq!(machine.mode(), Mode::HoldingFull);
        assert_eq!(machine.display_text(), "abc");
        assert_eq!(machine.delay(), Some(HOLD_DELAY));
    }

    #[test]
    fn hold_ends_in_deleting_without_changing_text() {
        let mut machine = Typewriter::new(["abc"]);
        run(&mut machine, 3);
        machine.tick();
        assert_eq!(machine.mode(), Mode::Deleting);
        assert_eq!(machine.visible_len(), 3);
        assert_eq!(machine.delay(), Some(DELETE_DELAY));
    }

    #[test]
    fn deleting_to_empty_advances_and_wraps() {
        let mut machine = Typewriter::new(["ab", "c"]);
        // type 2, hold, delete 2
        run(&mut machine, 5);
        assert_eq!(machine.phrase_index(), 1);
        assert_eq!(machine.mode(), Mode::Typing);
        assert_eq!(machine.visible_len(), 0);

        // type 1, hold, delete 1
        run(&mut machine, 3);
        assert_eq!(machine.phrase_index(), 0);
        assert_eq!(machine.mode(), Mode::Typing);
    }

    #[test]
    fn empty_list_is_idle() {
        let mut machine = Typewriter::new(Vec::<String>::new());
        assert!(machine.is_idle());
        assert_eq!(machine.delay(), None);
        machine.tick();
        assert_eq!(machine.display_text(), "");
        assert_eq!(machine.snapshot(), Snapshot::default());
    }

    #[test]
    fn empty_phrase_goes_straight_to_hold() {
        let mut machine = Typewriter::new(["", "x"]);
        assert_eq!(machine.mode(), Mode::HoldingFull);
        machine.tick();
        // deleting an empty phrase finishes immediately
        assert_eq!(machine.phrase_index(), 1);
        assert_eq!(machine.mode(), Mode::Typing);
    }

    #[test]
    fn display_text_is_always_a_prefix_of_the_active_phrase() {
        let mut machine =
            Typewriter::new(["Warid", "seorang developer", "manusia"]);
        for _ in 0..200 {
            let active = machine.phrases()[machine.phrase_index()].as_str();
            assert!(active.starts_with(machine.display_text()));
            machine.tick();
        }
    }

    #[test]
    fn visible_len_is_monotone_within_each_mode() {
        let mut machine = Typewriter::new(["one", "three", "xy"]);
        let mut prev = machine.snapshot();
        for _ in 0..200 {
            machine.tick();
            let next = machine.snapshot();
            if next.phrase_index == prev.phrase_index && next.mode == prev.mode
            {
                match next.mode {
                    Mode::Typing => {
                        assert!(next.visible_len >= prev.visible_len)
                    }
                    Mode::HoldingFull => {
                        assert_eq!(next.visible_len, prev.visible_len)
                    }
                    Mode::Deleting => {
                        assert!(next.visible_len <= prev.visible_len)
                    }
                }
            }
            prev = next;
        }
    }

    #[test]
    fn a_full_loop_returns_to_the_start() {
        let phrases = ["Warid", "a developer", "a human", "a programmer"];
        let mut machine = Typewriter::new(phrases);
        // each phrase takes `len` typing ticks, one hold tick and `len`
        // deleting ticks
        let ticks: usize = phrases.iter().map(|p| 2 * p.len() + 1).sum();
        run(&mut machine, ticks);
        assert_eq!(machine.snapshot(), Typewriter::new(phrases).snapshot());
    }

    #[test]
    fn single_phrase_wraps_to_itself() {
        let mut machine = Typewriter::new(["hi"]);
        run(&mut machine, 5);
        assert_eq!(machine.phrase_index(), 0);
        assert_eq!(machine.visible_len(), 0);
        assert_eq!(machine.mode(), Mode::Typing);
    }

    #[test]
    fn reset_discards_old_indices() {
        let mut machine = Typewriter::new(["abc", "defgh"]);
        run(&mut machine, 9);
        assert_eq!(machine.phrase_index(), 1);

        machine.reset(["z"]);
        assert_eq!(
            machine.snapshot(),
            Snapshot {
                phrase_index: 0,
                visible_len: 0,
                mode: Mode::Typing
            }
        );
        assert_eq!(machine.phrases().len(), 1);
    }
}
