#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::prelude::*;
    use crate::runtime::reset_composition;
    use crate::signal::signal;

    #[test]
    fn test_signal_basic() {
        let sig = signal(42);
        assert_eq!(sig.get(), 42);

        sig.set(100);
        assert_eq!(sig.get(), 100);

        sig.update(|v| *v += 1);
        assert_eq!(sig.get(), 101);
    }

    #[test]
    fn test_signal_unsubscribe() {
        let sig = signal(0);
        let hits = Rc::new(RefCell::new(0));

        let hits_clone = hits.clone();
        let id = sig.subscribe(move |_| {
            *hits_clone.borrow_mut() += 1;
        });

        sig.set(1);
        assert_eq!(*hits.borrow(), 1);

        sig.unsubscribe(id);
        sig.set(2);
        assert_eq!(*hits.borrow(), 1);

        // detaching twice is a no-op
        sig.unsubscribe(id);
    }

    #[test]
    fn test_scope_explicit_dispose() {
        let cleaned_up = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        let cleaned_up_clone = cleaned_up.clone();
        scope.add_disposer(move || {
            *cleaned_up_clone.borrow_mut() = true;
        });

        assert!(!*cleaned_up.borrow());
        scope.dispose();
        assert!(*cleaned_up.borrow());
    }

    #[test]
    fn test_key_based_remember() {
        reset_composition();

        let val1 = remember_with_key("test", || 42);
        let val2 = remember_with_key("test", || 100);

        assert_eq!(*val1, 42);
        assert_eq!(*val2, 42); // not 100, key already mounted

        let st = remember_state_with_key("test-state", || 1);
        *st.borrow_mut() += 1;
        let st2 = remember_state_with_key("test-state", || 1);
        assert_eq!(*st2.borrow(), 2);
    }

    #[test]
    fn test_effect_cleanup_runs_on_scope_dispose() {
        let ran = Rc::new(RefCell::new(0));
        let cleaned = Rc::new(RefCell::new(false));

        let scope = Scope::new();
        scope.run({
            let ran = ran.clone();
            let cleaned = cleaned.clone();
            move || {
                effect(move || {
                    *ran.borrow_mut() += 1;
                    on_unmount(move || *cleaned.borrow_mut() = true)
                });
            }
        });

        assert_eq!(*ran.borrow(), 1);
        assert!(!*cleaned.borrow());
        scope.dispose();
        assert!(*cleaned.borrow());
    }

    #[test]
    fn test_positional_remember_stable_across_passes() {
        reset_composition();

        let mut s = Scheduler::new();
        let first = s.compose(|_| {
            let count = remember(|| signal(7i64));
            count.update(|v| *v += 1);
            count.get()
        });
        assert_eq!(first, 8);

        // Second pass rewinds the cursor and finds the same slot.
        let second = s.compose(|_| {
            let count = remember(|| signal(7i64));
            count.get()
        });
        assert_eq!(second, 8);
    }

    #[test]
    fn test_memo_computes_once_per_key() {
        let memo: Memo<String, usize> = Memo::new(|s: &String| s.len());

        assert_eq!(memo.get(&"abc".to_string()), 3);
        assert_eq!(memo.get(&"abc".to_string()), 3);
        assert_eq!(memo.computations(), 1);

        assert_eq!(memo.get(&"abcd".to_string()), 4);
        assert_eq!(memo.computations(), 2);

        // going back to a previously seen key recomputes: the cache is
        // single-entry by design
        assert_eq!(memo.get(&"abc".to_string()), 3);
        assert_eq!(memo.computations(), 3);
    }

    struct Toggle;

    impl StateHolder for Toggle {
        type State = bool;
        type Action = ();

        fn initial_state() -> bool {
            false
        }

        fn reduce(state: &bool, _action: ()) -> bool {
            !state
        }
    }

    #[test]
    fn test_reducer_cell_dispatch() {
        let cell: ReducerCell<Toggle> = ReducerCell::new();
        assert!(!cell.get());
        cell.dispatch(());
        assert!(cell.get());
        cell.dispatch(());
        assert!(!cell.get());
    }

    #[test]
    fn test_store_fan_out_and_detach() {
        let store = Store::shared(0i64);

        let a = Rc::new(RefCell::new(None));
        let b = Rc::new(RefCell::new(None));

        let a_clone = a.clone();
        let key_a = store.subscribe(move |v| *a_clone.borrow_mut() = Some(*v));
        let b_clone = b.clone();
        let _key_b = store.subscribe(move |v| *b_clone.borrow_mut() = Some(*v));

        store.update(|v| *v += 1);
        assert_eq!(*a.borrow(), Some(1));
        assert_eq!(*b.borrow(), Some(1));

        store.detach(key_a);
        store.detach(key_a); // idempotent
        store.update(|v| *v += 1);
        assert_eq!(*a.borrow(), Some(1));
        assert_eq!(*b.borrow(), Some(2));
        assert_eq!(store.subscriber_count(), 1);
    }

    #[test]
    fn test_store_subscription_detaches_with_scope() {
        let store = Store::shared(0i64);
        let scope = Scope::new();

        scope.run(|| {
            store.subscribe_scoped(|_| {});
        });
        assert_eq!(store.subscriber_count(), 1);

        scope.dispose();
        assert_eq!(store.subscriber_count(), 0);
    }

    #[test]
    fn test_deferred_cell_coalesces_to_newest() {
        let queue = DeferredQueue::new();
        let cell = DeferredCell::new(&queue, String::new());

        cell.set("a".into());
        cell.set("ab".into());
        cell.set("abc".into());

        assert_eq!(cell.immediate(), "abc");
        assert_eq!(cell.lagged(), "");
        assert!(cell.is_pending());

        // the burst coalesced to a single job
        let ran = queue.drain();
        assert_eq!(ran, 1);
        assert_eq!(cell.lagged(), "abc");
        assert!(!cell.is_pending());
        assert!(queue.is_idle());
    }

    #[test]
    fn test_deferred_cells_are_independent() {
        let queue = DeferredQueue::new();
        let x = DeferredCell::new(&queue, 0i64);
        let y = DeferredCell::new(&queue, 0i64);

        x.set(1);
        y.set(2);
        assert_eq!(queue.drain(), 2);
        assert_eq!(x.lagged(), 1);
        assert_eq!(y.lagged(), 2);
    }

    #[test]
    fn test_id_pool_unique() {
        let s = Scheduler::new();
        let ids = s.ids();

        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            assert!(seen.insert(ids.next_id()));
        }
    }

    #[test]
    fn test_focus_slot_single_owner() {
        let s = Scheduler::new();
        let focus = s.focus();

        focus.focus(1);
        assert!(focus.is_focused(1));

        focus.focus(2);
        assert!(!focus.is_focused(1));
        assert!(focus.is_focused(2));

        // blur by a stale holder does not steal focus
        focus.blur(1);
        assert_eq!(focus.focused(), Some(2));
        focus.blur(2);
        assert_eq!(focus.focused(), None);
    }

    #[test]
    fn test_scheduler_dispose_runs_unmount_effects() {
        reset_composition();

        let unmounted = Rc::new(RefCell::new(false));
        let mut s = Scheduler::new();

        let unmounted_clone = unmounted.clone();
        s.compose(move |_| {
            scoped_effect(move || {
                Box::new(move || {
                    *unmounted_clone.borrow_mut() = true;
                }) as Box<dyn FnOnce()>
            });
        });

        assert!(!*unmounted.borrow());
        s.dispose();
        assert!(*unmounted.borrow());
    }
}
