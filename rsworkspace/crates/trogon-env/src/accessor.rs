use std::collections::BTreeMap;
use std::env::VarError;

use tracing::{debug, trace, warn};
use trogon_std::env::{ListEnv, ReadEnv, SystemEnv};

use crate::error::{EMPTY_PREFIX, EnvError, Result};
use crate::value::{EnvValue, interpret, split_list, trim_non_blank};

/// Typed reads over an environment provider.
///
/// Every call goes back to the provider; nothing is cached, and the
/// provider is never written to.
///
/// ```
/// use trogon_env::{Env, EnvValue};
///
/// let env = Env::system();
/// assert_eq!(env.get("TROGON_ENV_DOC_UNSET"), EnvValue::Null);
/// assert!(env.get_bool_or("TROGON_ENV_DOC_UNSET", true));
/// assert!(env.require("TROGON_ENV_DOC_UNSET").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Env<E> {
    provider: E,
}

impl Env<SystemEnv> {
    /// Reads the real process environment.
    pub fn system() -> Self {
        Self::new(SystemEnv)
    }
}

impl<E> Env<E> {
    pub fn new(provider: E) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &E {
        &self.provider
    }
}

impl<E: ReadEnv> Env<E> {
    /// `None` for absent variables. Non-Unicode values count as absent.
    fn lookup(&self, name: &str) -> Option<String> {
        match self.provider.var(name) {
            Ok(raw) => Some(raw),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                warn!(var = name, "Ignoring environment variable with a non-Unicode value");
                None
            }
        }
    }

    /// Trimmed text of a variable whose interpretation is not `Null`.
    fn lookup_non_null(&self, name: &str) -> Option<String> {
        let trimmed = self.get_string(name)?;
        match interpret(&trimmed) {
            Some(EnvValue::Null) | None => None,
            Some(_) => Some(trimmed),
        }
    }

    /// Same as [`get_or`](Self::get_or) with a `Null` default.
    pub fn get(&self, name: &str) -> EnvValue {
        self.get_or(name, EnvValue::Null)
    }

    /// Absent or blank yields `default`. `true`/`false`/`null` in any
    /// casing become `Bool`/`Null`; any other value comes back trimmed.
    pub fn get_or(&self, name: &str, default: impl Into<EnvValue>) -> EnvValue {
        match self.lookup(name).as_deref().and_then(interpret) {
            Some(value) => value,
            None => {
                trace!(var = name, "Environment variable unset or blank, using default");
                default.into()
            }
        }
    }

    /// Trimmed value without literal translation, so `"false"` stays a
    /// string. `None` when absent or blank.
    pub fn get_string(&self, name: &str) -> Option<String> {
        self.lookup(name)
            .as_deref()
            .and_then(trim_non_blank)
            .map(str::to_string)
    }

    pub fn get_string_or(&self, name: &str, default: impl Into<String>) -> String {
        self.get_string(name).unwrap_or_else(|| default.into())
    }

    /// `Some` only for a `true`/`false` literal. Text such as `"yes"` or
    /// `"1"` is not coerced and yields `None`.
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.get(name).as_bool()
    }

    pub fn get_bool_or(&self, name: &str, default: bool) -> bool {
        self.get_bool(name).unwrap_or(default)
    }

    /// Fails when [`get`](Self::get) would return `Null`: absent, blank,
    /// or the literal `null`. A boolean literal is returned as written.
    pub fn require(&self, name: &str) -> Result<String> {
        self.lookup_non_null(name)
            .ok_or_else(|| EnvError::not_found(name))
    }

    /// Comma-separated value as a list, or an empty list when the variable
    /// would read as `Null`.
    pub fn get_list(&self, name: &str) -> Vec<String> {
        self.get_list_or(name, Vec::new())
    }

    /// Empty segments are kept: `"a,b,,,c"` has five items.
    pub fn get_list_or(&self, name: &str, default: Vec<String>) -> Vec<String> {
        match self.lookup_non_null(name) {
            Some(trimmed) => split_list(&trimmed),
            None => default,
        }
    }

    /// Fails under the same conditions as [`require`](Self::require).
    pub fn require_list(&self, name: &str) -> Result<Vec<String>> {
        self.require(name).map(|trimmed| split_list(&trimmed))
    }
}

impl<E: ListEnv> Env<E> {
    pub fn assert_list_available(&self) -> Result<()> {
        if self.provider.is_listable() {
            Ok(())
        } else {
            Err(EnvError::ListNotAvailable)
        }
    }
}

impl<E: ReadEnv + ListEnv> Env<E> {
    /// Every variable whose name starts with `prefix` (case-sensitive),
    /// keyed by the rest of its name and resolved with [`get`](Self::get),
    /// so a name that `get` reads as `Null` (blank, `null`, non-Unicode
    /// value) is present with a `Null` value.
    ///
    /// Either the full map or an error; nothing partial.
    pub fn get_from_prefix(&self, prefix: &str) -> Result<BTreeMap<String, EnvValue>> {
        if prefix.is_empty() {
            return Err(EnvError::Precondition(EMPTY_PREFIX));
        }
        self.assert_list_available()?;
        let names = self
            .provider
            .var_names()
            .ok_or(EnvError::ListNotAvailable)?;

        let found: BTreeMap<String, EnvValue> = names
            .iter()
            .filter_map(|name| {
                let key = name.strip_prefix(prefix)?;
                Some((key.to_string(), self.get(name)))
            })
            .collect();

        debug!(prefix, matched = found.len(), "Scanned environment by prefix");
        Ok(found)
    }
}
