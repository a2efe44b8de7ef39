//! Virtual-time scheduler driving every timer in the routes menu.
//!
//! All streams run on one logical event loop. Time only moves when the host
//! calls [`Scheduler::advance_by`], so debounce behavior is deterministic.

use std::cell::Cell;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

type Task = Box<dyn FnOnce()>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimerId {
    deadline: Duration,
    seq: u64,
}

#[derive(Default)]
struct SchedulerInner {
    now: Cell<Duration>,
    next_seq: Cell<u64>,
    tasks: RefCell<BTreeMap<TimerId, Task>>,
}

#[derive(Clone, Default)]
pub struct Scheduler {
    inner: Rc<SchedulerInner>,
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scheduler")
            .field("now", &self.now())
            .field("pending", &self.pending())
            .finish()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.inner.now.get()
    }

    pub fn pending(&self) -> usize {
        self.inner.tasks.borrow().len()
    }

    pub fn schedule(&self, delay: Duration, task: impl FnOnce() + 'static) -> TimerId {
        let seq = self.inner.next_seq.get();
        self.inner.next_seq.set(seq.saturating_add(1));
        let id = TimerId {
            deadline: self.now().saturating_add(delay),
            seq,
        };
        self.inner.tasks.borrow_mut().insert(id, Box::new(task));
        id
    }

    /// Returns `true` when the timer was still pending.
    pub fn cancel(&self, id: TimerId) -> bool {
        self.inner.tasks.borrow_mut().remove(&id).is_some()
    }

    /// Moves the clock forward, running due timers in deadline order. Timers
    /// scheduled by a running task fire in the same call if they fall due.
    pub fn advance_by(&self, delta: Duration) {
        let target = self.now().saturating_add(delta);
        while let Some((id, task)) = self.pop_due(target) {
            self.inner.now.set(id.deadline);
            task();
        }
        self.inner.now.set(target);
    }

    fn pop_due(&self, target: Duration) -> Option<(TimerId, Task)> {
        let mut tasks = self.inner.tasks.borrow_mut();
        let id = *tasks.keys().next()?;
        if id.deadline > target {
            return None;
        }
        tasks.remove(&id).map(|task| (id, task))
    }
}
