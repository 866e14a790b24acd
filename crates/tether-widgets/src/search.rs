use std::rc::Rc;

use tether_core::prelude::*;

/// Corpus the demo filters. Small on purpose; the interesting part is which
/// copy of the query the filter reads, not the filter itself.
const TOPICS: &[&str] = &[
    "signals",
    "remembered slots",
    "reducers",
    "shared stores",
    "memoization",
    "deferred updates",
    "imperative handles",
    "identifier pools",
];

#[derive(Clone)]
pub struct SearchBinding {
    cell: DeferredCell<String>,
    pub type_text: Rc<dyn Fn(String)>,
}

impl SearchBinding {
    /// What the input box shows: updates on every keystroke.
    pub fn immediate(&self) -> String {
        self.cell.immediate()
    }

    /// What expensive work keys off: lags until the queue drains.
    pub fn lagged(&self) -> String {
        self.cell.lagged()
    }

    /// Busy indicator for the UI while the lagged copy is behind.
    pub fn is_pending(&self) -> bool {
        self.cell.is_pending()
    }

    /// The "expensive" work, deliberately driven by the lagged query so a
    /// burst of keystrokes does not refilter per key.
    pub fn results(&self) -> Vec<&'static str> {
        let query = self.cell.lagged().to_lowercase();
        TOPICS
            .iter()
            .copied()
            .filter(|t| t.contains(&query))
            .collect()
    }
}

/// Search box whose committed text shows immediately while filtering lags
/// behind on the low-priority path.
pub fn DeferredSearch(queue: &DeferredQueue) -> SearchBinding {
    let cell = remember(|| DeferredCell::new(queue, String::new()));

    SearchBinding {
        cell: cell.as_ref().clone(),
        type_text: Rc::new({
            let cell = cell.clone();
            move |v| cell.set(v)
        }),
    }
}
