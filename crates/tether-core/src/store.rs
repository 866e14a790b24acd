use std::cell::RefCell;
use std::rc::Rc;

use slotmap::{SlotMap, new_key_type};

new_key_type! {
    /// Stable handle for detaching a store subscription.
    pub struct SubKey;
}

/// Shared state service with a lifecycle independent of any widget.
///
/// Built once by the host, injected into consumers as `Rc<Store<T>>`. Every
/// mutation synchronously notifies all current subscribers before returning;
/// notification order is unspecified and callers must not depend on it.
pub struct Store<T> {
    value: RefCell<T>,
    subs: RefCell<SlotMap<SubKey, Rc<dyn Fn(&T)>>>,
}

impl<T: Clone + 'static> Store<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: RefCell::new(value),
            subs: RefCell::new(SlotMap::with_key()),
        }
    }

    pub fn shared(value: T) -> Rc<Self> {
        Rc::new(Self::new(value))
    }

    /// Current value, no side effects.
    pub fn snapshot(&self) -> T {
        self.value.borrow().clone()
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.value.borrow_mut());
        self.notify();
    }

    pub fn subscribe(&self, cb: impl Fn(&T) + 'static) -> SubKey {
        self.subs.borrow_mut().insert(Rc::new(cb))
    }

    /// Detaches a subscription. Detaching twice is a no-op.
    pub fn detach(&self, key: SubKey) {
        self.subs.borrow_mut().remove(key);
    }

    /// Subscribes and ties the detach to the current scope, so a widget's
    /// subscription goes away when the widget unmounts.
    pub fn subscribe_scoped(self: &Rc<Self>, cb: impl Fn(&T) + 'static) -> SubKey {
        let key = self.subscribe(cb);
        if let Some(scope) = crate::scope::current_scope() {
            let store = self.clone();
            scope.add_disposer(move || store.detach(key));
        }
        key
    }

    pub fn subscriber_count(&self) -> usize {
        self.subs.borrow().len()
    }

    fn notify(&self) {
        // Clone the handles out so a callback reading the store (or even
        // subscribing) never re-enters a held borrow.
        let cbs: Vec<Rc<dyn Fn(&T)>> = self.subs.borrow().values().cloned().collect();
        let v = self.value.borrow().clone();
        log::debug!("store fan-out to {} subscriber(s)", cbs.len());
        for cb in cbs {
            cb(&v);
        }
    }
}
