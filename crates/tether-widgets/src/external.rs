use std::rc::Rc;

use tether_core::prelude::*;

/// Increment-only façade over the injected shared store.
///
/// The store itself lives outside the composition (the host builds it once,
/// before any widget mounts); widgets only ever see this handle.
#[derive(Clone)]
pub struct ExternalCounter {
    store: Rc<Store<i64>>,
}

impl ExternalCounter {
    pub fn new(store: Rc<Store<i64>>) -> Self {
        Self { store }
    }

    pub fn increment(&self) {
        self.store.update(|v| *v += 1);
    }

    pub fn snapshot(&self) -> i64 {
        self.store.snapshot()
    }
}

/// One widget observing the shared counter. Several of these can exist on a
/// page; they all read the same value because the store is shared, not
/// copied.
#[derive(Clone)]
pub struct StoreConsumerBinding {
    seen: Signal<i64>,
    pub increment: Rc<dyn Fn()>,
}

impl StoreConsumerBinding {
    /// Last value delivered to this consumer.
    pub fn value(&self) -> i64 {
        self.seen.get()
    }
}

pub fn StoreConsumer(counter: &ExternalCounter) -> StoreConsumerBinding {
    // Subscribe once per mount; the subscription detaches with the scope.
    let seen = remember(|| {
        let seen = signal(counter.snapshot());
        counter.store.subscribe_scoped({
            let seen = seen.clone();
            move |v| seen.set(*v)
        });
        seen
    });

    StoreConsumerBinding {
        seen: seen.as_ref().clone(),
        increment: Rc::new({
            let counter = counter.clone();
            move || counter.increment()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_consumers_share_one_store() {
        reset_composition();

        let store = Store::shared(0i64);
        let external = ExternalCounter::new(store.clone());

        let mut s = Scheduler::new();
        let (a, b) = s.compose(|_| (StoreConsumer(&external), StoreConsumer(&external)));

        (a.increment)();
        assert_eq!(a.value(), 1);
        assert_eq!(b.value(), 1);
        assert_eq!(store.snapshot(), 1);

        // incrementing through the other consumer hits the same state
        (b.increment)();
        assert_eq!(a.value(), 2);
        assert_eq!(b.value(), 2);
    }

    #[test]
    fn test_unmount_detaches_only_that_consumer() {
        reset_composition();

        let store = Store::shared(0i64);
        let external = ExternalCounter::new(store.clone());

        // One consumer in its own child scope, one outside it.
        let mut s = Scheduler::new();
        let (short_lived_scope, a, b) = s.compose(|_| {
            let scope = current_scope().expect("composing under the root scope");
            let child = scope.child();
            let a = child.run(|| StoreConsumer(&external));
            let b = StoreConsumer(&external);
            (child, a, b)
        });
        assert_eq!(store.subscriber_count(), 2);

        short_lived_scope.dispose();
        assert_eq!(store.subscriber_count(), 1);

        external.increment();
        assert_eq!(a.value(), 0); // detached, kept its last snapshot
        assert_eq!(b.value(), 1);
    }

    #[test]
    fn test_increments_before_mount_are_visible() {
        reset_composition();

        let store = Store::shared(0i64);
        let external = ExternalCounter::new(store.clone());
        external.increment();
        external.increment();

        let mut s = Scheduler::new();
        let c = s.compose(|_| StoreConsumer(&external));
        assert_eq!(c.value(), 2);
    }
}
