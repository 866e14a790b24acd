use std::rc::Rc;

use tether_core::prelude::*;

use crate::counter::{CounterBinding, CounterCell};
use crate::derived::{DerivedBinding, DerivedLength};
use crate::external::{ExternalCounter, StoreConsumer, StoreConsumerBinding};
use crate::field::{FieldHandle, HandleField, LabeledField, LabeledFieldBinding};
use crate::likes::{LikeBinding, LikeCounter};
use crate::search::{DeferredSearch, SearchBinding};

/// Everything the presentation layer needs to paint the tour page: one
/// binding per demo widget. Each widget's state is isolated from the others;
/// the only shared piece is the injected external store behind the two store
/// consumers.
pub struct PageBindings {
    pub counter_a: CounterBinding,
    pub counter_b: CounterBinding,
    pub likes: LikeBinding,
    pub store_a: StoreConsumerBinding,
    pub store_b: StoreConsumerBinding,
    pub derived: DerivedBinding,
    pub search: SearchBinding,
    pub field: FieldHandle,
    pub name_field: LabeledFieldBinding,
    pub email_field: LabeledFieldBinding,
}

/// Composes the whole tour. Call inside [`Scheduler::compose`].
pub fn DemoPage(s: &mut Scheduler, store: &Rc<Store<i64>>) -> PageBindings {
    let _mounted = remember_with_key("page:mounted", || {
        scoped_effect(|| {
            log::info!("demo page mounted");
            Box::new(|| log::info!("demo page unmounted")) as Box<dyn FnOnce()>
        });
    });

    let external = ExternalCounter::new(store.clone());
    let queue = s.deferred();

    PageBindings {
        counter_a: CounterCell(0),
        counter_b: CounterCell(5),
        likes: LikeCounter(),
        store_a: StoreConsumer(&external),
        store_b: StoreConsumer(&external),
        derived: DerivedLength(),
        search: DeferredSearch(&queue),
        field: HandleField(s),
        name_field: LabeledField(s, "Name"),
        email_field: LabeledField(s, "Email"),
    }
}
