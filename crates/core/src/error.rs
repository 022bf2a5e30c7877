//! Error types for piece parsing and board usage.

use thiserror::Error;

/// Failure to build a [`PieceShape`](crate::piece::PieceShape) or its rotation ring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("could not parse x,y string: token {token:?} is not an integer")]
    NotAnInteger { token: String },
    #[error("could not parse x,y string: odd number of tokens ({count})")]
    OddTokenCount { count: usize },
    #[error("piece body has no cells")]
    Empty,
    #[error("negative cell offset ({x}, {y})")]
    NegativeOffset { x: i32, y: i32 },
    #[error("cell offset ({x}, {y}) exceeds the maximum of {max}")]
    OffsetTooLarge { x: i32, y: i32, max: i32 },
    #[error("duplicate cell offset ({x}, {y})")]
    DuplicateCell { x: i32, y: i32 },
    #[error("rotations of the root never return to it within four steps")]
    OpenRing,
}

/// Which derived statistic disagreed with a full rescan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Statistic {
    MaxHeight,
    Widths,
    Heights,
}

impl std::fmt::Display for Statistic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Statistic::MaxHeight => "maxHeight",
            Statistic::Widths => "widths",
            Statistic::Heights => "heights",
        })
    }
}

/// Board construction and usage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// `place` was called while a previous mutation is still pending.
    #[error("the board must be committed before place() is called")]
    PlacePending,
    #[error("invalid board dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    /// Incrementally maintained statistics diverged from the grid.
    #[error("incorrect {0}")]
    Invariant(Statistic),
}
