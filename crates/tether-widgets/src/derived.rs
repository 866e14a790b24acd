use std::rc::Rc;

use tether_core::prelude::*;

/// The "expensive-looking" derivation: whitespace-separated tokens, halved,
/// rounded up.
pub fn half_token_count(text: &str) -> usize {
    text.split_whitespace().count().div_ceil(2)
}

#[derive(Clone)]
pub struct DerivedBinding {
    text: Signal<String>,
    memo: Rc<Memo<String, usize>>,
    pub set_text: Rc<dyn Fn(String)>,
}

impl DerivedBinding {
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Memoized on the current text: unchanged input returns the cached
    /// value without running the derivation again.
    pub fn derived(&self) -> usize {
        self.memo.get(&self.text.get())
    }

    pub fn computations(&self) -> u64 {
        self.memo.computations()
    }
}

/// Text field with a derived value that only recomputes when the field
/// changes, never on unrelated state changes.
pub fn DerivedLength() -> DerivedBinding {
    let text = remember(|| signal(String::new()));
    let memo = remember(|| Memo::new(|s: &String| half_token_count(s)));

    DerivedBinding {
        text: text.as_ref().clone(),
        memo: memo.clone(),
        set_text: Rc::new({
            let text = text.clone();
            move |v| text.set(v)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_token_count() {
        assert_eq!(half_token_count(""), 0);
        assert_eq!(half_token_count("one"), 1);
        assert_eq!(half_token_count("a b c"), 2);
        assert_eq!(half_token_count("a b c d"), 2);
        assert_eq!(half_token_count("  spaced   out  "), 1);
    }

    #[test]
    fn test_unchanged_input_computes_once() {
        reset_composition();

        let mut s = Scheduler::new();
        let d = s.compose(|_| DerivedLength());

        (d.set_text)("a b c".into());
        assert_eq!(d.derived(), 2);
        assert_eq!(d.derived(), 2);
        assert_eq!(d.computations(), 1);

        (d.set_text)("a b c d".into());
        assert_eq!(d.derived(), 2);
        assert_eq!(d.computations(), 2);
    }

    #[test]
    fn test_unrelated_state_does_not_recompute() {
        reset_composition();

        let mut s = Scheduler::new();
        let (d, unrelated) = s.compose(|_| {
            let d = DerivedLength();
            let unrelated = remember(|| signal(0i64));
            (d, unrelated.as_ref().clone())
        });

        (d.set_text)("hello world".into());
        assert_eq!(d.derived(), 1);

        unrelated.update(|v| *v += 1);
        assert_eq!(d.derived(), 1);
        assert_eq!(d.computations(), 1);
    }
}
