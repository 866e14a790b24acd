use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::Scope;
use crate::transition::DeferredQueue;

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

/// Slot storage backing `remember*`.
///
/// Positional slots are matched by call order within a composition pass;
/// keyed slots survive conditional composition.
#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
}

/// Drops every remembered slot. The next composition pass mounts fresh state.
pub fn reset_composition() {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        c.slots.clear();
        c.keyed_slots.clear();
        c.cursor = 0;
    });
}

/// Active composition pass: rewinds the slot cursor and carries the scope
/// that owns everything composed during the pass.
pub struct ComposeGuard {
    scope: Scope,
}

impl ComposeGuard {
    pub fn begin(scope: Scope) -> Self {
        COMPOSER.with(|c| {
            c.borrow_mut().cursor = 0;
        });

        ComposeGuard { scope }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }
}

/// Slot-based remember (sequential composition only).
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;

        if cursor >= c.slots.len() {
            let rc: Rc<T> = Rc::new(init());
            c.slots.push(Box::new(rc.clone()));
            return rc;
        }

        if let Some(rc) = c.slots[cursor].downcast_ref::<Rc<T>>() {
            rc.clone()
        } else {
            log::warn!(
                "remember: slot {} type changed; replacing. \
                 If this is due to conditional composition, prefer remember_with_key.",
                cursor
            );
            let rc: Rc<T> = Rc::new(init());
            c.slots[cursor] = Box::new(rc.clone());
            rc
        }
    })
}

/// Key-based remember.
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let key = key.into();

        if let Some(existing) = c.keyed_slots.get(&key) {
            if let Some(rc) = existing.downcast_ref::<Rc<T>>() {
                return rc.clone();
            } else {
                log::warn!(
                    "remember_with_key: key '{}' reused with a different type; replacing.",
                    key
                );
            }
        }

        let rc: Rc<T> = Rc::new(init());
        c.keyed_slots.insert(key, Box::new(rc.clone()));
        rc
    })
}

pub fn remember_state<T: 'static>(init: impl FnOnce() -> T) -> Rc<RefCell<T>> {
    remember(|| RefCell::new(init()))
}

pub fn remember_state_with_key<T: 'static>(
    key: impl Into<String>,
    init: impl FnOnce() -> T,
) -> Rc<RefCell<T>> {
    remember_with_key(key, || RefCell::new(init()))
}

/// Monotonic identifier pool.
///
/// Issued values are unique for the lifetime of the scheduler that owns the
/// pool; widgets hold theirs in a remember slot so recomposition never
/// re-issues an id.
#[derive(Clone)]
pub struct IdPool {
    next: Rc<Cell<u64>>,
}

impl IdPool {
    fn new() -> Self {
        Self {
            next: Rc::new(Cell::new(1)),
        }
    }

    pub fn next_raw(&self) -> u64 {
        let id = self.next.get();
        self.next.set(id + 1);
        id
    }

    pub fn next_id(&self) -> String {
        format!("field-{}", self.next_raw())
    }
}

/// At most one field holds focus at a time.
#[derive(Clone)]
pub struct FocusSlot {
    current: Rc<Cell<Option<u64>>>,
}

impl FocusSlot {
    fn new() -> Self {
        Self {
            current: Rc::new(Cell::new(None)),
        }
    }

    pub fn focus(&self, id: u64) {
        self.current.set(Some(id));
    }

    /// Clears focus only if `id` currently holds it.
    pub fn blur(&self, id: u64) {
        if self.current.get() == Some(id) {
            self.current.set(None);
        }
    }

    pub fn focused(&self) -> Option<u64> {
        self.current.get()
    }

    pub fn is_focused(&self, id: u64) -> bool {
        self.current.get() == Some(id)
    }
}

/// Single-threaded cooperative scheduler.
///
/// Owns the root scope for composed state, the identifier pool, the focus
/// slot, and the low-priority queue drained between events. Urgent updates
/// apply immediately on the calling (event) thread; queued deferred jobs wait
/// for [`Scheduler::drain_deferred`].
pub struct Scheduler {
    root: Option<Scope>,
    ids: IdPool,
    focus: FocusSlot,
    deferred: DeferredQueue,
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            root: None,
            ids: IdPool::new(),
            focus: FocusSlot::new(),
            deferred: DeferredQueue::new(),
        }
    }

    pub fn ids(&self) -> IdPool {
        self.ids.clone()
    }

    pub fn focus(&self) -> FocusSlot {
        self.focus.clone()
    }

    pub fn deferred(&self) -> DeferredQueue {
        self.deferred.clone()
    }

    /// Runs a composition pass under the scheduler's root scope.
    ///
    /// The root scope persists across passes: remembered state stays mounted
    /// and unmount effects run once, at [`Scheduler::dispose`].
    pub fn compose<R, F>(&mut self, build: F) -> R
    where
        F: FnOnce(&mut Scheduler) -> R,
    {
        let scope = self.root.get_or_insert_with(Scope::new).clone();
        let guard = ComposeGuard::begin(scope);
        guard.scope().run(|| build(self))
    }

    /// Applies queued low-priority updates, newest-per-cell only.
    /// Returns the number of jobs applied.
    pub fn drain_deferred(&mut self) -> usize {
        self.deferred.drain()
    }

    /// Unmounts everything: runs scope disposers, then clears the slot table.
    pub fn dispose(&mut self) {
        if let Some(root) = self.root.take() {
            root.dispose();
        }
        reset_composition();
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
