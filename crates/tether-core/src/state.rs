use std::cell::{Cell, RefCell};
use std::marker::PhantomData;

use crate::signal::{Signal, signal};

/// Single-entry memo cache keyed by the last input.
///
/// The compute closure runs at most once per distinct key; asking again with
/// an unchanged key returns the cached value without re-invoking. Keys are
/// compared by value equality. The invocation count is observable so tests
/// can pin the at-most-once contract down.
pub struct Memo<K: PartialEq + Clone + 'static, V: Clone + 'static> {
    compute: Box<dyn Fn(&K) -> V>,
    cached: RefCell<Option<(K, V)>>,
    computations: Cell<u64>,
}

impl<K: PartialEq + Clone + 'static, V: Clone + 'static> Memo<K, V> {
    pub fn new(compute: impl Fn(&K) -> V + 'static) -> Self {
        Self {
            compute: Box::new(compute),
            cached: RefCell::new(None),
            computations: Cell::new(0),
        }
    }

    pub fn get(&self, key: &K) -> V {
        if let Some((k, v)) = self.cached.borrow().as_ref()
            && k == key
        {
            return v.clone();
        }
        let v = (self.compute)(key);
        self.computations.set(self.computations.get() + 1);
        *self.cached.borrow_mut() = Some((key.clone(), v.clone()));
        v
    }

    /// How many times the compute closure has actually run.
    pub fn computations(&self) -> u64 {
        self.computations.get()
    }
}

/// Reducer-backed state: a closed action vocabulary and a pure, total
/// transition function. Unknown actions are unrepresentable: the action
/// type is an exhaustive enum, so no default arm exists to swallow them.
pub trait StateHolder: 'static {
    type State: Clone;
    type Action;

    fn initial_state() -> Self::State;
    fn reduce(state: &Self::State, action: Self::Action) -> Self::State;
}

/// Dispatch wrapper over a [`StateHolder`], observable as a [`Signal`].
pub struct ReducerCell<H: StateHolder> {
    state: Signal<H::State>,
    _holder: PhantomData<H>,
}

impl<H: StateHolder> ReducerCell<H> {
    pub fn new() -> Self {
        Self {
            state: signal(H::initial_state()),
            _holder: PhantomData,
        }
    }

    pub fn get(&self) -> H::State {
        self.state.get()
    }

    pub fn dispatch(&self, action: H::Action) {
        let next = self.state.with(|s| H::reduce(s, action));
        self.state.set(next);
    }

    pub fn signal(&self) -> &Signal<H::State> {
        &self.state
    }
}

impl<H: StateHolder> Default for ReducerCell<H> {
    fn default() -> Self {
        Self::new()
    }
}
