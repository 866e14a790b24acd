use std::cell::RefCell;
use std::rc::Rc;

use tether_core::prelude::*;

/// Imperative handle façade over a child-owned text field.
///
/// Holders get exactly four operations; the internal representation stays
/// private to this module. The field starts absent, and [`FieldHandle::value`]
/// reads as `""` until something is set; ordinary interaction must never
/// fail.
#[derive(Clone)]
pub struct FieldHandle {
    value: Rc<RefCell<Option<String>>>,
    focus: FocusSlot,
    id: u64,
}

impl FieldHandle {
    pub fn focus(&self) {
        self.focus.focus(self.id);
    }

    pub fn blur(&self) {
        self.focus.blur(self.id);
    }

    pub fn value(&self) -> String {
        self.value.borrow().clone().unwrap_or_default()
    }

    pub fn set_value(&self, v: impl Into<String>) {
        *self.value.borrow_mut() = Some(v.into());
    }

    pub fn is_focused(&self) -> bool {
        self.focus.is_focused(self.id)
    }
}

/// Mounts a handle-only field. The parent keeps the handle; nothing else
/// about the field is reachable.
pub fn HandleField(s: &Scheduler) -> FieldHandle {
    let value = remember_state(|| None::<String>);
    let meta = remember(|| (s.focus(), s.ids().next_raw()));

    FieldHandle {
        value,
        focus: meta.0.clone(),
        id: meta.1,
    }
}

/// Form field paired with a generated label id.
#[derive(Clone)]
pub struct LabeledFieldBinding {
    /// Stable for the lifetime of this widget instance; unique per process.
    pub id: Rc<String>,
    pub label: String,
    text: Signal<String>,
    pub set_text: Rc<dyn Fn(String)>,
}

impl LabeledFieldBinding {
    pub fn text(&self) -> String {
        self.text.get()
    }
}

pub fn LabeledField(s: &Scheduler, label: impl Into<String>) -> LabeledFieldBinding {
    let id = remember(|| s.ids().next_id());
    let text = remember(|| signal(String::new()));

    LabeledFieldBinding {
        id,
        label: label.into(),
        text: text.as_ref().clone(),
        set_text: Rc::new({
            let text = text.clone();
            move |v| text.set(v)
        }),
    }
}
