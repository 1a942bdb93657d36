use crate::{prelude::*, store::Store};

/// Store of a host which has persistence disabled: every call fails with [`StoreUnavailable`].
#[must_use]
#[derive(Copy, Clone, Debug, Default)]
pub struct Unavailable;

#[derive(Copy, Clone, Debug, derive_more::Display, derive_more::Error)]
#[display("durable store is unavailable")]
pub struct StoreUnavailable;

impl Store for Unavailable {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Err(StoreUnavailable).with_context(|| format!("cannot read `{key}`"))
    }

    fn set(&self, key: &str, _value: &str) -> Result {
        Err(StoreUnavailable).with_context(|| format!("cannot write `{key}`"))
    }
}

/// Whether the store failed because persistence is switched off, rather than broken.
#[must_use]
pub fn is_unavailable(error: &Error) -> bool {
    error.is::<StoreUnavailable>()
}
