//! # Signals, slots, stores, and the deferred queue
//!
//! Tether's core is a small single-threaded reactive runtime. There are five
//! pieces:
//!
//! - `Signal<T>` — observable value cell.
//! - `remember*` — lifecycle-aware storage bound to composition.
//! - `Store<T>` — shared service state with subscribe/detach, injected into
//!   consumers rather than reached through globals.
//! - `DeferredCell<T>` — urgent/lagged two-slot state drained by the
//!   scheduler's low-priority queue.
//! - `effect` / `scoped_effect` — side effects with cleanup.
//!
//! ## Signals
//!
//! `Signal<T>` is a cloneable handle to a piece of state:
//!
//! ```rust
//! use tether_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Remembered state
//!
//! Widget state is held in `remember*` slots rather than globals:
//!
//! ```rust
//! use tether_core::*;
//!
//! let mut s = Scheduler::new();
//! let value = s.compose(|_| {
//!     let count = remember(|| signal(0i64));
//!     count.update(|v| *v += 1);
//!     count.get()
//! });
//! assert_eq!(value, 1);
//! ```
//!
//! - `remember` and `remember_state` are order-based: the Nth call in a
//!   composition pass always refers to the Nth stored value.
//! - `remember_with_key` and `remember_state_with_key` are key-based and more
//!   stable across conditional branches.
//!
//! ## Shared stores
//!
//! A `Store<T>` lives outside the composition, usually for the whole process:
//!
//! ```rust
//! use tether_core::*;
//!
//! let store = Store::shared(0i64);
//! let seen = signal(0i64);
//! let key = store.subscribe({
//!     let seen = seen.clone();
//!     move |v| seen.set(*v)
//! });
//! store.update(|v| *v += 1);
//! assert_eq!(seen.get(), 1);
//! store.detach(key);
//! ```
//!
//! ## Deferred updates
//!
//! `DeferredCell<T>` splits a value into an urgent `immediate` slot and a
//! `lagged` slot that only catches up when the scheduler drains its queue.
//! Rapid writes coalesce: only the newest queued value is ever applied.
//!
//! ## Effects and cleanup
//!
//! ```rust
//! use tether_core::*;
//!
//! let scope = Scope::new();
//! scope.run(|| {
//!     scoped_effect(|| {
//!         log::info!("mounted");
//!         Box::new(|| log::info!("unmounted"))
//!     });
//! });
//! scope.dispose();
//! ```

pub mod effects;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod signal;
pub mod state;
pub mod store;
pub mod tests;
pub mod transition;

pub use effects::*;
pub use prelude::*;
pub use runtime::*;
pub use scope::*;
pub use signal::*;
pub use state::*;
pub use store::*;
pub use transition::*;
