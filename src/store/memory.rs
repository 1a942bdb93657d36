use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::{prelude::*, store::Store};

/// In-process store.
///
/// Clones share the same map, so a host may keep one clone for inspection
/// while handing another one to a container.
#[must_use]
#[derive(Clone, Default, Debug)]
pub struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl MemoryStore {
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let this = Self::default();
        this.0.borrow_mut().insert(key.into(), value.into());
        this
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.0.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
