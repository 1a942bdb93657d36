//! Adapters binding a single shared value to a reactive framework.
//!
//! An adapter only stores and broadcasts values: it knows nothing about rates or persistence.

pub mod listeners;
pub mod watch;

pub use self::{listeners::ListenerCell, watch::WatchCell};

pub trait ReactiveCell<T> {
    /// Live binding handed out to consumers.
    type Handle;

    fn with_value(value: T) -> Self;

    fn get(&self) -> T;

    /// Replace the value and notify every observer, even if the value is unchanged.
    fn replace(&self, value: T);

    fn observe(&self) -> Self::Handle;
}
