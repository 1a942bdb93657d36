use std::cell::Cell;

use crate::{
    cell::ReactiveCell,
    prelude::*,
    rate::{self, Rate},
    store::{KEY, Store, is_unavailable},
};

/// Selected tariff of the session, written through to a durable store.
///
/// The cell holds [`Rate::DEFAULT`] from construction on, so it may be observed right away.
/// [`TariffState::initialize`] then reconciles it with the store, replacing the value at most once.
#[must_use]
pub struct TariffState<C, S> {
    cell: C,
    store: S,
    key: String,
    is_initialized: Cell<bool>,
}

#[bon::bon]
impl<C: ReactiveCell<Rate>, S: Store> TariffState<C, S> {
    #[builder]
    pub fn new(store: S, #[builder(into, default = KEY.to_owned())] key: String) -> Self {
        Self { cell: C::with_value(Rate::DEFAULT), store, key, is_initialized: Cell::new(false) }
    }

    /// Live binding to the current rate.
    pub fn observe(&self) -> C::Handle {
        self.cell.observe()
    }

    pub fn current(&self) -> Rate {
        self.cell.get()
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.is_initialized.get()
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Reconcile the cell with the store and start writing through.
    ///
    /// Only the first call has an effect.
    #[instrument(skip_all, fields(key = %self.key))]
    pub fn initialize(&self) {
        if self.is_initialized.replace(true) {
            warn!("already initialized");
            return;
        }
        if let Some(name) = self.read_name() {
            let rate = self.resolve(&name);
            if rate != self.cell.get() {
                self.cell.replace(rate);
            }
            info!(stored = %name, current = %rate.name(), "initialized");
        } else {
            info!(current = %self.cell.get().name(), "nothing stored, keeping the default");
        }
        // Also normalizes a stale value:
        self.persist(self.cell.get());
    }

    /// Select the rate by name. Unknown names select [`Rate::DEFAULT`].
    #[instrument(skip_all, fields(key = %self.key, name = name))]
    pub fn set_rate(&self, name: &str) {
        if !self.is_initialized() {
            self.initialize();
        }
        let rate = self.resolve(name);
        self.cell.replace(rate);
        self.persist(rate);
    }

    /// Pick up a value written by another session.
    ///
    /// A known name is not written back. An unknown one is normalized, as on initialization.
    #[instrument(skip_all, fields(key = %self.key))]
    pub fn sync_from_store(&self) {
        let Some(name) = self.read_name() else {
            debug!("nothing stored");
            return;
        };
        let rate = self.resolve(&name);
        if rate == self.cell.get() {
            debug!("up to date");
        } else {
            info!(stored = %name, "synchronized");
            self.cell.replace(rate);
        }
        if rate.name().as_str() != name {
            self.persist(rate);
        }
    }

    fn resolve(&self, name: &str) -> Rate {
        let rate = rate::resolve(name);
        if rate.name().as_str() != name {
            warn!(key = %self.key, name, fallback = %rate.name(), "unknown rate, falling back");
        }
        rate
    }

    /// Stored name, if any. An unreadable store counts as empty.
    fn read_name(&self) -> Option<String> {
        match self.store.get(&self.key) {
            Ok(name) => name.filter(|name| !name.is_empty()),
            Err(error) => {
                self.report("read", &error);
                None
            }
        }
    }

    fn persist(&self, rate: Rate) {
        if let Err(error) = self.store.set(&self.key, rate.name().as_str()) {
            self.report("persist", &error);
        }
    }

    /// Disabled persistence is the normal in-memory mode, so it is not worth a warning.
    fn report(&self, action: &str, error: &Error) {
        if is_unavailable(error) {
            debug!("cannot {action} `{}`, persistence is disabled", self.key);
        } else {
            warn!("failed to {action} `{}`, ignoring: {error:#}", self.key);
        }
    }
}
