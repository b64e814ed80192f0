#[cfg(any(test, feature = "test-support"))]
use std::cell::{Cell, RefCell};
#[cfg(any(test, feature = "test-support"))]
use std::collections::HashMap;
#[cfg(any(test, feature = "test-support"))]
use std::env;

#[cfg(any(test, feature = "test-support"))]
use super::{ListEnv, ReadEnv};

/// Won't touch the global process environment.
///
/// Uses `RefCell` for interior mutability — all methods take `&self`.
/// Listing is enabled by default; call
/// [`disable_listing`](InMemoryEnv::disable_listing) to emulate a host that
/// only supports single-name lookups.
#[cfg(any(test, feature = "test-support"))]
pub struct InMemoryEnv {
    vars: RefCell<HashMap<String, String>>,
    listable: Cell<bool>,
}

#[cfg(any(test, feature = "test-support"))]
impl InMemoryEnv {
    pub fn new() -> Self {
        Self {
            vars: RefCell::new(HashMap::new()),
            listable: Cell::new(true),
        }
    }

    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.borrow_mut().insert(key.into(), value.into());
    }

    pub fn remove(&self, key: &str) {
        self.vars.borrow_mut().remove(key);
    }

    pub fn contains(&self, key: &str) -> bool {
        self.vars.borrow().contains_key(key)
    }

    pub fn clear(&self) {
        self.vars.borrow_mut().clear();
    }

    pub fn disable_listing(&self) {
        self.listable.set(false);
    }

    pub fn enable_listing(&self) {
        self.listable.set(true);
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Default for InMemoryEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ReadEnv for InMemoryEnv {
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        self.vars
            .borrow()
            .get(key)
            .cloned()
            .ok_or(env::VarError::NotPresent)
    }
}

#[cfg(any(test, feature = "test-support"))]
impl ListEnv for InMemoryEnv {
    fn var_names(&self) -> Option<Vec<String>> {
        if !self.listable.get() {
            return None;
        }
        Some(self.vars.borrow().keys().cloned().collect())
    }

    fn is_listable(&self) -> bool {
        self.listable.get()
    }
}
