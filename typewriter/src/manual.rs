use crate::Timer;
use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc, time::Duration};

/// A [`Timer`] driven by a virtual clock.
///
/// Time only moves when [`ManualTimer::advance`] is called, which makes
/// animations fully deterministic. Clones share the same clock.
#[derive(Clone, Default)]
pub struct ManualTimer {
    clock: Rc<RefCell<Clock>>,
}

/// Handle to a timeout scheduled on a [`ManualTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManualHandle {
    deadline: Duration,
    id: u64,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    // ordered by deadline, then by scheduling order
    queue: BTreeMap<(Duration, u64), Box<dyn FnOnce()>>,
}

impl ManualTimer {
    /// Creates a clock at time zero with nothing scheduled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed since the clock was created.
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of timeouts waiting to fire.
    pub fn pending(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Moves the clock forward, firing every timeout that comes due.
    ///
    /// Timeouts scheduled by a callback are fired in the same call if their
    /// deadline falls inside the advanced window.
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        loop {
            let due = {
                let mut clock = self.clock.borrow_mut();
                let due = clock
                    .queue
                    .first_entry()
                    .filter(|entry| entry.key().0 <= target)
                    .map(|entry| entry.remove_entry());
                if let Some(((deadline, _), _)) = &due {
                    clock.now = *deadline;
                }
                due
            };
            // the borrow is released before running user code, which may
            // schedule or clear timeouts
            match due {
                Some((_, callback)) => callback(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Timer for ManualTimer {
    type Handle = ManualHandle;

    fn set_timeout(
        &self,
        delay: Duration,
        callback: Box<dyn FnOnce()>,
    ) -> Self::Handle {
        let mut clock = self.clock.borrow_mut();
        let handle = ManualHandle {
            deadline: clock.now + delay,
            id: clock.next_id,
        };
        clock.next_id += 1;
        clock.queue.insert((handle.deadline, handle.id), callback);
        handle
    }

    fn clear_timeout(&self, handle: Self::Handle) {
        self.clock
            .borrow_mut()
            .queue
            .remove(&(handle.deadline, handle.id));
    }
}

impl fmt::Debug for ManualTimer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualTimer")
            .field("now", &clock.now)
            .field("pending", &clock.queue.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn fires_in_deadline_order() {
        let timer = ManualTimer::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (name, ms) in [("b", 20), ("a", 10), ("c", 20)] {
            let log = Rc::clone(&log);
            timer.set_timeout(
                Duration::from_millis(ms),
                Box::new(move || log.borrow_mut().push(name)),
            );
        }

        timer.advance(Duration::from_millis(15));
        assert_eq!(*log.borrow(), ["a"]);

        timer.advance(Duration::from_millis(5));
        assert_eq!(*log.borrow(), ["a", "b", "c"]);
        assert_eq!(timer.now(), Duration::from_millis(20));
    }

    #[test]
    fn cleared_timeouts_never_fire() {
        let timer = ManualTimer::new();
        let fired = Rc::new(Cell::new(false));
        let handle = timer.set_timeout(Duration::from_millis(10), {
            let fired = Rc::clone(&fired);
            Box::new(move || fired.set(true))
        });
        timer.clear_timeout(handle);

        timer.advance(Duration::from_secs(1));
        assert!(!fired.get());
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn callbacks_can_reschedule() {
        let timer = ManualTimer::new();
        let count = Rc::new(Cell::new(0));

        fn every_10ms(timer: ManualTimer, count: Rc<Cell<u32>>) {
            let next = timer.clone();
            timer.set_timeout(
                Duration::from_millis(10),
                Box::new(move || {
                    count.set(count.get() + 1);
                    every_10ms(next, count);
                }),
            );
        }

        every_10ms(timer.clone(), Rc::clone(&count));
        timer.advance(Duration::from_millis(35));
        assert_eq!(count.get(), 3);
        assert_eq!(timer.pending(), 1);
    }
}
