//! 2048-with-obstacles board simulation (workspace facade crate).
//!
//! This package keeps the `twenty48::{core,types}` public API stable while
//! the implementation lives in dedicated crates under `crates/`.

pub use twenty48_core as core;
pub use twenty48_types as types;
