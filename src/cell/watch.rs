use tokio::sync::watch;

use crate::cell::ReactiveCell;

/// Cell for async consumers, backed by a [`watch`] channel.
#[must_use]
#[derive(Debug)]
pub struct WatchCell<T>(watch::Sender<T>);

impl<T: Clone> ReactiveCell<T> for WatchCell<T> {
    type Handle = watch::Receiver<T>;

    fn with_value(value: T) -> Self {
        Self(watch::Sender::new(value))
    }

    fn get(&self) -> T {
        self.0.borrow().clone()
    }

    fn replace(&self, value: T) {
        // Succeeds even when nobody is subscribed:
        self.0.send_replace(value);
    }

    fn observe(&self) -> Self::Handle {
        self.0.subscribe()
    }
}
