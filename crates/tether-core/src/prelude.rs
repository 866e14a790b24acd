pub use crate::effects::{Dispose, effect, on_unmount};
pub use crate::runtime::{
    ComposeGuard, FocusSlot, IdPool, Scheduler, remember, remember_state, remember_state_with_key,
    remember_with_key, reset_composition,
};
pub use crate::scope::{Scope, current_scope, scoped_effect};
pub use crate::signal::{Signal, SubId, signal};
pub use crate::state::{Memo, ReducerCell, StateHolder};
pub use crate::store::{Store, SubKey};
pub use crate::transition::{DeferredCell, DeferredQueue};
