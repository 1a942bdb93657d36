use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use crate::cell::ReactiveCell;

type Listener<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(u64, Listener<T>)>>,
    next_id: Cell<u64>,
}

/// Cell for callback-driven consumers.
///
/// Listeners are called synchronously, in subscription order, on every replacement.
#[must_use]
pub struct ListenerCell<T>(Rc<Inner<T>>);

impl<T: Clone> ReactiveCell<T> for ListenerCell<T> {
    type Handle = Observer<T>;

    fn with_value(value: T) -> Self {
        Self(Rc::new(Inner {
            value: RefCell::new(value),
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }))
    }

    fn get(&self) -> T {
        self.0.value.borrow().clone()
    }

    fn replace(&self, value: T) {
        self.0.value.replace(value.clone());

        // Snapshot, so that listeners may subscribe or unsubscribe while being notified:
        let listeners: Vec<_> =
            self.0.listeners.borrow().iter().map(|(_, listener)| Rc::clone(listener)).collect();
        for listener in listeners {
            listener(&value);
        }
    }

    fn observe(&self) -> Self::Handle {
        Observer(Rc::clone(&self.0))
    }
}

/// Consumer-side handle of a [`ListenerCell`].
#[must_use]
pub struct Observer<T>(Rc<Inner<T>>);

impl<T> Clone for Observer<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Clone> Observer<T> {
    pub fn get(&self) -> T {
        self.0.value.borrow().clone()
    }

    /// Call the listener on every subsequent change until the subscription is dropped.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription<T> {
        let id = self.0.next_id.get();
        self.0.next_id.set(id + 1);
        self.0.listeners.borrow_mut().push((id, Rc::new(listener)));
        Subscription { id, cell: Rc::downgrade(&self.0) }
    }
}

/// Unsubscribes on drop.
#[must_use = "dropping a subscription immediately unsubscribes the listener"]
pub struct Subscription<T> {
    id: u64,
    cell: Weak<Inner<T>>,
}

impl<T> Drop for Subscription<T> {
    fn drop(&mut self) {
        if let Some(cell) = self.cell.upgrade() {
            cell.listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listeners_are_notified_in_order() {
        let cell = ListenerCell::with_value(0);
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = cell.observe().subscribe({
            let log = Rc::clone(&log);
            move |value| log.borrow_mut().push(("first", *value))
        });
        let second = cell.observe().subscribe({
            let log = Rc::clone(&log);
            move |value| log.borrow_mut().push(("second", *value))
        });

        cell.replace(1);
        cell.replace(1);
        cell.replace(2);

        assert_eq!(
            *log.borrow(),
            [("first", 1), ("second", 1), ("first", 1), ("second", 1), ("first", 2), ("second", 2)],
        );
        drop((first, second));
    }

    #[test]
    fn dropped_subscription_is_silent() {
        let cell = ListenerCell::with_value(0);
        let calls = Rc::new(Cell::new(0));
        let subscription = cell.observe().subscribe({
            let calls = Rc::clone(&calls);
            move |_| calls.set(calls.get() + 1)
        });

        cell.replace(1);
        drop(subscription);
        cell.replace(2);

        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn observers_see_the_same_value() {
        let cell = ListenerCell::with_value("F2");
        let first = cell.observe();
        let second = first.clone();
        cell.replace("F3");
        assert_eq!(first.get(), "F3");
        assert_eq!(second.get(), "F3");
    }

    #[test]
    fn subscription_outliving_the_cell() {
        let cell = ListenerCell::with_value(0);
        let subscription = cell.observe().subscribe(|_| {});
        drop(cell);
        drop(subscription);
    }
}
