//! Push-based streams for the single-threaded routes menu event loop.
//!
//! A [`Stream`] is a hot publisher: values pushed with [`Stream::emit`] are
//! delivered to every current subscriber in subscription order. Replaying
//! streams additionally hand their latest value to each new subscriber.
//!
//! Derived streams (`map`, `debounce`, `combine_latest`, ...) own their
//! upstream subscriptions, so dropping the last handle to a derived stream
//! tears the whole chain down.

use std::cell::Cell;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::rc::Weak;
use std::time::Duration;

use super::scheduler::Scheduler;
use super::scheduler::TimerId;

type Callback<T> = Box<dyn FnMut(&T)>;

struct Inner<T> {
    subscribers: RefCell<Vec<(u64, Callback<T>)>>,
    cancelled: RefCell<Vec<u64>>,
    next_id: Cell<u64>,
    delivering: Cell<bool>,
    queue: RefCell<VecDeque<T>>,
    replay: bool,
    latest: RefCell<Option<T>>,
    upstream: RefCell<Vec<Subscription>>,
}

impl<T> Inner<T> {
    fn new(replay: bool, seed: Option<T>) -> Self {
        Self {
            subscribers: RefCell::new(Vec::new()),
            cancelled: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            delivering: Cell::new(false),
            queue: RefCell::new(VecDeque::new()),
            replay,
            latest: RefCell::new(seed),
            upstream: RefCell::new(Vec::new()),
        }
    }
}

trait Detach {
    fn detach(&self, id: u64);
}

impl<T> Detach for Inner<T> {
    fn detach(&self, id: u64) {
        let removed = {
            let mut subscribers = self.subscribers.borrow_mut();
            match subscribers.iter().position(|(existing, _)| *existing == id) {
                Some(index) => Some(subscribers.remove(index)),
                None => {
                    // Subscribers are moved out while a value is being delivered.
                    if self.delivering.get() {
                        self.cancelled.borrow_mut().push(id);
                    }
                    None
                }
            }
        };
        // The callback may own subscriptions of its own; drop it unborrowed.
        drop(removed);
    }
}

/// Keeps a subscriber attached to its stream. Dropping it unsubscribes.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    source: Option<(Rc<dyn Detach>, u64)>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some((source, id)) = self.source.take() {
            source.detach(id);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.source.is_some())
            .finish()
    }
}

pub struct Stream<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Stream<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> std::fmt::Debug for Stream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stream")
            .field("replay", &self.inner.replay)
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

impl<T: Clone + 'static> Default for Stream<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + 'static> Stream<T> {
    /// A publish-only stream: late subscribers see only future values.
    pub fn new() -> Self {
        Self::from_inner(Inner::new(false, None))
    }

    /// Replays the most recent value to every new subscriber.
    pub fn replay() -> Self {
        Self::from_inner(Inner::new(true, None))
    }

    /// A replaying stream that already holds `value`.
    pub fn seeded(value: T) -> Self {
        Self::from_inner(Inner::new(true, Some(value)))
    }

    fn from_inner(inner: Inner<T>) -> Self {
        Self {
            inner: Rc::new(inner),
        }
    }

    /// Latest delivered value. Always `None` for publish-only streams.
    pub fn latest(&self) -> Option<T> {
        self.inner.latest.borrow().clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> Subscription {
        let mut callback = callback;
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id.saturating_add(1));

        if self.inner.replay {
            let latest = self.inner.latest.borrow().clone();
            if let Some(value) = latest {
                callback(&value);
            }
        }

        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Box::new(callback)));
        Subscription {
            source: Some((self.inner.clone() as Rc<dyn Detach>, id)),
        }
    }

    /// Delivers `value` to every subscriber. A value emitted from inside a
    /// subscriber of this same stream is queued behind the current one.
    pub fn emit(&self, value: T) {
        self.inner.queue.borrow_mut().push_back(value);
        if self.inner.delivering.replace(true) {
            return;
        }
        loop {
            let next = self.inner.queue.borrow_mut().pop_front();
            let Some(value) = next else {
                break;
            };
            self.deliver(&value);
        }
        self.inner.delivering.set(false);
    }

    fn deliver(&self, value: &T) {
        if self.inner.replay {
            *self.inner.latest.borrow_mut() = Some(value.clone());
        }

        let mut active = self.inner.subscribers.take();
        for (id, callback) in active.iter_mut() {
            if self.inner.cancelled.borrow().contains(id) {
                continue;
            }
            callback(value);
        }

        let cancelled = self.inner.cancelled.take();
        let stale = {
            let mut subscribers = self.inner.subscribers.borrow_mut();
            let added = std::mem::take(&mut *subscribers);
            let (keep, stale): (Vec<_>, Vec<_>) = active
                .into_iter()
                .chain(added)
                .partition(|(id, _)| !cancelled.contains(id));
            *subscribers = keep;
            stale
        };
        drop(stale);
    }

    /// Derived streams replay when their upstream does, so a value replayed
    /// while the chain is being built is not lost.
    fn downstream<U: Clone + 'static>(&self) -> Stream<U> {
        Stream::from_inner(Inner::new(self.inner.replay, None))
    }

    fn derive<U: Clone + 'static>(
        &self,
        downstream: Stream<U>,
        mut forward: impl FnMut(&T, &Stream<U>) + 'static,
    ) -> Stream<U> {
        let weak = Rc::downgrade(&downstream.inner);
        let subscription = self.subscribe(move |value| {
            if let Some(inner) = weak.upgrade() {
                forward(value, &Stream { inner });
            }
        });
        downstream.inner.upstream.borrow_mut().push(subscription);
        downstream
    }

    pub fn map<U: Clone + 'static>(&self, mut f: impl FnMut(&T) -> U + 'static) -> Stream<U> {
        self.derive(self.downstream(), move |value, out| out.emit(f(value)))
    }

    pub fn filter_map<U: Clone + 'static>(
        &self,
        mut f: impl FnMut(&T) -> Option<U> + 'static,
    ) -> Stream<U> {
        self.derive(self.downstream(), move |value, out| {
            if let Some(mapped) = f(value) {
                out.emit(mapped);
            }
        })
    }

    /// Suppresses a value equal to the one forwarded just before it.
    pub fn distinct_until_changed(&self) -> Stream<T>
    where
        T: PartialEq,
    {
        let mut last: Option<T> = None;
        self.derive(self.downstream(), move |value, out| {
            if last.as_ref() == Some(value) {
                return;
            }
            last = Some(value.clone());
            out.emit(value.clone());
        })
    }

    /// Hands `initial` to every subscriber before any upstream value arrives,
    /// then replays the latest upstream value.
    pub fn start_with(&self, initial: T) -> Stream<T> {
        self.derive(Stream::seeded(initial), |value, out| out.emit(value.clone()))
    }

    pub fn replay_latest(&self) -> Stream<T> {
        self.derive(Stream::replay(), |value, out| out.emit(value.clone()))
    }

    /// Forwards a value only once `delay` passes without a newer one.
    pub fn debounce(&self, scheduler: &Scheduler, delay: Duration) -> Stream<T> {
        let scheduler = scheduler.clone();
        let pending: Rc<Cell<Option<TimerId>>> = Rc::new(Cell::new(None));
        self.derive(self.downstream(), move |value, out| {
            if let Some(timer) = pending.take() {
                scheduler.cancel(timer);
            }
            let weak = Rc::downgrade(&out.inner);
            let slot = pending.clone();
            let value = value.clone();
            let timer = scheduler.schedule(delay, move || {
                slot.set(None);
                if let Some(inner) = weak.upgrade() {
                    Stream { inner }.emit(value);
                }
            });
            pending.set(Some(timer));
        })
    }

    /// Emits `(latest self, latest other)` whenever either side emits, once
    /// both sides have produced at least one value. Replays when either side
    /// replays.
    pub fn combine_latest<U: Clone + 'static>(&self, other: &Stream<U>) -> Stream<(T, U)> {
        let combined: Stream<(T, U)> =
            Stream::from_inner(Inner::new(self.inner.replay || other.inner.replay, None));
        let latest: Rc<RefCell<(Option<T>, Option<U>)>> = Rc::new(RefCell::new((None, None)));
        let weak = Rc::downgrade(&combined.inner);

        let left = {
            let latest = latest.clone();
            let weak = weak.clone();
            self.subscribe(move |value| {
                latest.borrow_mut().0 = Some(value.clone());
                emit_pair(&latest, &weak);
            })
        };
        let right = other.subscribe(move |value| {
            latest.borrow_mut().1 = Some(value.clone());
            emit_pair(&latest, &weak);
        });

        combined.inner.upstream.borrow_mut().extend([left, right]);
        combined
    }
}

fn emit_pair<A: Clone + 'static, B: Clone + 'static>(
    latest: &RefCell<(Option<A>, Option<B>)>,
    target: &Weak<Inner<(A, B)>>,
) {
    let pair = match &*latest.borrow() {
        (Some(left), Some(right)) => (left.clone(), right.clone()),
        _ => return,
    };
    if let Some(inner) = target.upgrade() {
        Stream { inner }.emit(pair);
    }
}
