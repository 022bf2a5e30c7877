//! Core board engine - pure, deterministic, and testable
//!
//! This crate holds the grid engine and the piece geometry it operates on.
//! It has no knowledge of rendering, input, move search, or piece sequencing;
//! those are collaborators that call into it.
//!
//! # Module Structure
//!
//! - [`piece`]: immutable piece shapes with bounding box and skirt
//! - [`rotation`]: rotation rings and the registry of the seven canonical kinds
//! - [`board`]: the grid with incremental column/row statistics, placement,
//!   drop height, row clearing, and one-level commit/undo
//! - [`config`]: board dimensions and the verification toggle
//! - [`error`]: parse and usage errors
//!
//! # Turn sequence
//!
//! A driver works in turns: query, place, optionally clear rows, then commit
//! or undo. Only one transaction may be pending at a time.
//!
//! ```
//! use brickfall_core::{Board, PieceRegistry};
//! use brickfall_core::types::{PieceKind, PlaceStatus};
//!
//! let registry = PieceRegistry::build().unwrap();
//! let mut board = Board::new(6, 8).unwrap();
//!
//! let stick = registry.ring(PieceKind::Stick).root().shape();
//! let y = board.drop_height(stick, 0);
//! assert_eq!(board.place(stick, 0, y as i32).unwrap(), PlaceStatus::Ok);
//! board.commit();
//!
//! assert_eq!(board.column_height(0), 4);
//! assert_eq!(board.max_height(), 4);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod piece;
pub mod rotation;

pub use brickfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::BoardConfig;
pub use error::{BoardError, ShapeError, Statistic};
pub use piece::{CellOffset, PieceShape, MAX_OFFSET};
pub use rotation::{PieceRegistry, RotationRing, Variant, MAX_ROTATIONS};
