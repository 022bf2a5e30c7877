//! Shared types module - plain data used by every brickfall crate
//!
//! This crate defines the piece catalog, the placement status codes, and the
//! default board dimensions. Everything here is pure data with no behavior
//! beyond parsing and naming, so it can be used from the board engine, from
//! driver helpers, and from external collaborators alike.
//!
//! # Board Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BOARD_WIDTH` | 10 | Default column count |
//! | `BOARD_HEIGHT` | 20 | Default row count |
//!
//! Rows are indexed from the floor upward: row 0 is the bottom row.
//!
//! # Piece Catalog
//!
//! | Index | Kind | Body (x y pairs) |
//! |-------|------|------------------|
//! | 0 | `Stick` | `0 0 0 1 0 2 0 3` |
//! | 1 | `L1` | `0 0 0 1 0 2 1 0` |
//! | 2 | `L2` | `0 0 1 0 1 1 1 2` |
//! | 3 | `S1` | `0 0 1 0 1 1 2 1` |
//! | 4 | `S2` | `0 1 1 1 1 0 2 0` |
//! | 5 | `Square` | `0 0 0 1 1 0 1 1` |
//! | 6 | `Pyramid` | `0 0 1 0 1 1 2 0` |
//!
//! # Examples
//!
//! ```
//! use brickfall_types::{PieceKind, PlaceStatus, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! // Parse from string (case-insensitive)
//! let kind = PieceKind::from_str("Pyramid").unwrap();
//! assert_eq!(kind, PieceKind::Pyramid);
//! assert_eq!(kind.index(), 6);
//!
//! // Status codes
//! assert!(PlaceStatus::RowFilled.is_placed());
//! assert!(!PlaceStatus::Bad.is_placed());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const BOARD_HEIGHT: usize = 20;

/// Number of canonical piece kinds in the catalog
pub const PIECE_KIND_COUNT: usize = 7;

/// The seven canonical piece kinds
///
/// The declaration order is the catalog order; [`PieceKind::index`] and
/// [`PieceKind::from_index`] convert between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    /// Vertical 4-cell bar
    Stick,
    /// L with the foot pointing right
    L1,
    /// Mirrored L (J)
    L2,
    /// S/Z variant rising to the right
    S1,
    /// S/Z variant falling to the right
    S2,
    /// 2x2 block
    Square,
    /// 3-wide, 2-tall T shape
    Pyramid,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; PIECE_KIND_COUNT] = [
        PieceKind::Stick,
        PieceKind::L1,
        PieceKind::L2,
        PieceKind::S1,
        PieceKind::S2,
        PieceKind::Square,
        PieceKind::Pyramid,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use brickfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("stick"), Some(PieceKind::Stick));
    /// assert_eq!(PieceKind::from_str("L2"), Some(PieceKind::L2));
    /// assert_eq!(PieceKind::from_str("t"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "stick" => Some(PieceKind::Stick),
            "l1" => Some(PieceKind::L1),
            "l2" => Some(PieceKind::L2),
            "s1" => Some(PieceKind::S1),
            "s2" => Some(PieceKind::S2),
            "square" => Some(PieceKind::Square),
            "pyramid" => Some(PieceKind::Pyramid),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::Stick => "stick",
            PieceKind::L1 => "l1",
            PieceKind::L2 => "l2",
            PieceKind::S1 => "s1",
            PieceKind::S2 => "s2",
            PieceKind::Square => "square",
            PieceKind::Pyramid => "pyramid",
        }
    }

    /// Position of this kind in the catalog
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Inverse of [`PieceKind::index`]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Canonical body as whitespace-separated `x y` pairs
    ///
    /// This is the root orientation the rotation ring is built from.
    pub fn body(&self) -> &'static str {
        match self {
            PieceKind::Stick => "0 0  0 1  0 2  0 3",
            PieceKind::L1 => "0 0  0 1  0 2  1 0",
            PieceKind::L2 => "0 0  1 0  1 1  1 2",
            PieceKind::S1 => "0 0  1 0  1 1  2 1",
            PieceKind::S2 => "0 1  1 1  1 0  2 0",
            PieceKind::Square => "0 0  0 1  1 0  1 1",
            PieceKind::Pyramid => "0 0  1 0  1 1  2 0",
        }
    }
}

/// Outcome of a single placement
///
/// These are gameplay results, not errors: overlap and boundary violations
/// are routine and the driver is expected to branch on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceStatus {
    /// Every cell landed and no row became full
    Ok,
    /// Every cell landed and at least one touched row is now full
    RowFilled,
    /// A cell fell outside the grid
    OutOfBounds,
    /// A cell overlapped an occupied cell
    Bad,
}

impl PlaceStatus {
    /// True when every cell of the piece was written
    pub fn is_placed(&self) -> bool {
        matches!(self, PlaceStatus::Ok | PlaceStatus::RowFilled)
    }

    /// Convert to snake_case string
    pub fn as_str(&self) -> &'static str {
        match self {
            PlaceStatus::Ok => "ok",
            PlaceStatus::RowFilled => "row_filled",
            PlaceStatus::OutOfBounds => "out_of_bounds",
            PlaceStatus::Bad => "bad",
        }
    }
}
