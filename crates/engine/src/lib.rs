//! Driver-side helpers built on the core board.
//!
//! - [`advisor`]: the port an external move evaluator implements, plus landing enumeration
//! - [`trial`]: undo-on-drop guard for probing placements
//! - [`place`]: straight drop, row clear, and commit in one call

pub mod advisor;
pub mod place;
pub mod trial;

pub use brickfall_core as core;
pub use brickfall_types as types;

pub use advisor::{landings, Advisor, Landing, Move};
pub use place::{drop_and_lock, LockOutcome, PlaceError};
pub use trial::{trial, Trial};
