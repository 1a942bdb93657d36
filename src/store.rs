//! Durable key-value stores surviving across sessions.

pub mod file;
pub mod memory;
pub mod unavailable;

pub use self::{
    file::FileStore,
    memory::MemoryStore,
    unavailable::{StoreUnavailable, Unavailable, is_unavailable},
};
use crate::prelude::*;

/// The only key under which the selected rate name is kept.
pub const KEY: &str = "rate";

/// String key-value store.
///
/// Methods take `&self`: a store is a handle to the medium, not the medium itself.
pub trait Store {
    /// Read the value, `None` if it has never been written.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> Result;
}

impl<S: Store + ?Sized> Store for &S {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result {
        (**self).set(key, value)
    }
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result {
        (**self).set(key, value)
    }
}
