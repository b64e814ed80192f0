use std::env;

use super::{ListEnv, ReadEnv};

/// Zero-sized type — delegates to `std::env`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    #[inline]
    fn var(&self, key: &str) -> Result<String, env::VarError> {
        env::var(key)
    }
}

impl ListEnv for SystemEnv {
    /// Names that are not valid Unicode cannot be looked up by `&str` and
    /// are skipped. Values are not inspected here.
    fn var_names(&self) -> Option<Vec<String>> {
        Some(
            env::vars_os()
                .filter_map(|(k, _)| k.into_string().ok())
                .collect(),
        )
    }

    #[inline]
    fn is_listable(&self) -> bool {
        true
    }
}
