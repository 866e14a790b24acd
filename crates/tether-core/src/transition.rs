use std::cell::{Cell, RefCell};
use std::rc::Rc;

use smallvec::SmallVec;

use crate::signal::{Signal, signal};

type Job = Box<dyn FnOnce()>;

/// Low-priority job queue, drained between events.
///
/// Holds at most one job per cell: queueing a newer job for the same cell
/// discards the older one without running it. Superseded intermediate values
/// are therefore skipped by construction.
#[derive(Clone)]
pub struct DeferredQueue {
    jobs: Rc<RefCell<SmallVec<[(u64, Job); 4]>>>,
    next_key: Rc<Cell<u64>>,
}

impl DeferredQueue {
    pub fn new() -> Self {
        Self {
            jobs: Rc::new(RefCell::new(SmallVec::new())),
            next_key: Rc::new(Cell::new(0)),
        }
    }

    fn register(&self) -> u64 {
        let key = self.next_key.get();
        self.next_key.set(key + 1);
        key
    }

    fn push(&self, key: u64, job: Job) {
        let mut jobs = self.jobs.borrow_mut();
        if let Some(pos) = jobs.iter().position(|(k, _)| *k == key) {
            log::debug!("deferred job for cell {key} superseded before running");
            jobs.remove(pos);
        }
        jobs.push((key, job));
    }

    pub fn is_idle(&self) -> bool {
        self.jobs.borrow().is_empty()
    }

    /// Runs queued jobs until the queue settles. Returns how many ran.
    ///
    /// Jobs queued while draining (by subscribers reacting to a lagged write)
    /// are picked up in the same call.
    pub fn drain(&self) -> usize {
        let mut ran = 0;
        loop {
            let batch = std::mem::take(&mut *self.jobs.borrow_mut());
            if batch.is_empty() {
                return ran;
            }
            for (_, job) in batch {
                job();
                ran += 1;
            }
        }
    }
}

impl Default for DeferredQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// Two-slot value: `immediate` applies on write, `lagged` catches up when the
/// queue drains, and `pending` is raised in between.
///
/// Expensive consumers must read [`DeferredCell::lagged`]; reading
/// `immediate` defeats the point of deferring.
#[derive(Clone)]
pub struct DeferredCell<T: Clone + 'static> {
    immediate: Signal<T>,
    lagged: Signal<T>,
    pending: Rc<Cell<bool>>,
    queue: DeferredQueue,
    key: u64,
}

impl<T: Clone + 'static> DeferredCell<T> {
    pub fn new(queue: &DeferredQueue, initial: T) -> Self {
        Self {
            immediate: signal(initial.clone()),
            lagged: signal(initial),
            pending: Rc::new(Cell::new(false)),
            queue: queue.clone(),
            key: queue.register(),
        }
    }

    /// Urgent half: `immediate` updates now. The lagged copy is queued as a
    /// low-priority job carrying this value; a newer `set` before the next
    /// drain replaces it.
    pub fn set(&self, v: T) {
        self.immediate.set(v.clone());
        self.pending.set(true);

        let lagged = self.lagged.clone();
        let pending = self.pending.clone();
        self.queue.push(
            self.key,
            Box::new(move || {
                lagged.set(v);
                pending.set(false);
            }),
        );
    }

    pub fn immediate(&self) -> T {
        self.immediate.get()
    }

    pub fn lagged(&self) -> T {
        self.lagged.get()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}
