//! brickfall (workspace facade crate).
//!
//! Re-exports the member crates under one name so drivers and tests can use
//! `brickfall::{core, engine, types}` without depending on each crate.

pub use brickfall_core as core;
pub use brickfall_engine as engine;
pub use brickfall_types as types;
