use std::rc::Rc;

use tether_core::prelude::*;

/// Pure classification of a counter value. Recomputed on every read, never
/// stored, so it cannot go stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    Low,
    High,
}

pub fn classify(value: i64) -> Classification {
    if value > 10 {
        Classification::High
    } else {
        Classification::Low
    }
}

/// Render-boundary contract for one counter: a snapshot plus named actions.
#[derive(Clone)]
pub struct CounterBinding {
    value: Signal<i64>,
    pub increment: Rc<dyn Fn()>,
    pub decrement: Rc<dyn Fn()>,
    pub reset: Rc<dyn Fn()>,
}

impl CounterBinding {
    pub fn value(&self) -> i64 {
        self.value.get()
    }

    pub fn classification(&self) -> Classification {
        classify(self.value.get())
    }
}

/// Integer cell with increment/decrement/reset.
///
/// `initial` is only consulted when the slot first mounts; `reset` restores
/// that creation-time value, not whatever a later composition pass passes in.
pub fn CounterCell(initial: i64) -> CounterBinding {
    let slot = remember(|| (signal(initial), initial));
    let (value, initial) = (slot.0.clone(), slot.1);

    CounterBinding {
        value: value.clone(),
        increment: Rc::new({
            let value = value.clone();
            move || value.update(|v| *v += 1)
        }),
        decrement: Rc::new({
            let value = value.clone();
            move || value.update(|v| *v -= 1)
        }),
        reset: Rc::new(move || value.set(initial)),
    }
}
