//! Zero-cost abstractions over `std` for TrogonStack projects.
//!
//! # Quick Start
//!
//! | Concern | Trait(s) | Production | Test |
//! |---------|----------|------------|------|
//! | Env vars | [`ReadEnv`], [`ListEnv`] | [`SystemEnv`] | [`InMemoryEnv`]* |
//!
//! *Available with `#[cfg(test)]` or the `"test-support"` feature.
//!
//! # Thread Safety
//!
//! [`SystemEnv`] is zero-sized and trivially `Send + Sync`.
//!
//! | Test type | Backing | `Send + Sync` |
//! |-----------|---------|---------------|
//! | [`InMemoryEnv`] | `RefCell<HashMap>` | No |
//!
//! If you need a `Send + Sync` test double (e.g. a multi-threaded test
//! runtime), wrap [`InMemoryEnv`] behind your own `Mutex`.
//!
//! [`InMemoryEnv`]: env::InMemoryEnv

pub mod env;

pub use env::{ListEnv, ReadEnv, SystemEnv};
