//! # trogon-env
//!
//! Typed, normalized access to environment variables.
//!
//! Raw values are trimmed, blank values fall back to a default, and the
//! literals `true`, `false` and `null` (any casing) become real booleans
//! and nulls. Everything else is returned as trimmed text.
//!
//! | Operation | Absent / blank | Result |
//! |-----------|----------------|--------|
//! | [`Env::get`], [`Env::get_or`] | default | [`EnvValue`] |
//! | [`Env::get_string`] | default | trimmed text, no literal translation |
//! | [`Env::get_bool`] | default | `Some` only for `true`/`false` |
//! | [`Env::require`] | [`EnvError::NotFound`] | trimmed text |
//! | [`Env::get_list`] | default | comma-split list |
//! | [`Env::require_list`] | [`EnvError::NotFound`] | comma-split list |
//! | [`Env::get_from_prefix`] | n/a | suffix → [`EnvValue`] map |
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use trogon_env::Env;
//!
//! fn main() -> trogon_env::Result<()> {
//!     let env = Env::system();
//!
//!     let database_url = env.require("DATABASE_URL")?;
//!     let debug = env.get_bool_or("DEBUG", false);
//!     let hosts = env.get_list("ALLOWED_HOSTS");
//!     let features = env.get_from_prefix("FEATURE_")?;
//!
//!     println!("{database_url} {debug} {hosts:?} {features:?}");
//!     Ok(())
//! }
//! ```
//!
//! Tests swap the process environment for
//! `trogon_std::env::InMemoryEnv` (feature `test-support`):
//!
//! ```ignore
//! let mem = InMemoryEnv::new();
//! mem.set("DEBUG", " TRUE ");
//! assert_eq!(Env::new(&mem).get_bool("DEBUG"), Some(true));
//! ```

pub mod accessor;
pub mod error;
pub mod value;

pub use accessor::Env;
pub use error::{EnvError, Result};
pub use value::{EnvValue, interpret};
