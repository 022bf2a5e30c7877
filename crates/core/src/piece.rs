//! Piece module - immutable piece geometry
//!
//! A [`PieceShape`] is a set of cell offsets in the piece's own frame, with
//! x growing to the right and y growing upward. The bounding box and the
//! skirt (lowest occupied offset per column) are derived once at
//! construction and never change.
//!
//! Shapes are built from a literal offset list or from text made of
//! whitespace-separated integer pairs:
//!
//! ```
//! use brickfall_core::PieceShape;
//!
//! let pyramid: PieceShape = "0 0  1 0  1 1  2 0".parse().unwrap();
//! assert_eq!(pyramid.width(), 3);
//! assert_eq!(pyramid.height(), 2);
//! assert_eq!(pyramid.skirt(), &[0, 0, 0]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ShapeError;

/// Offset of a single cell relative to the piece origin
pub type CellOffset = (i32, i32);

/// Largest accepted x or y offset; keeps the bounding box small enough to
/// allocate and to address with `i32` arithmetic
pub const MAX_OFFSET: i32 = 255;

/// Immutable geometric description of one piece orientation
#[derive(Debug, Clone)]
pub struct PieceShape {
    /// Offsets in insertion order; placement writes cells in this order
    cells: Vec<CellOffset>,
    /// Sorted copy of `cells`, used for equality and hashing
    canonical: Vec<CellOffset>,
    width: usize,
    height: usize,
    skirt: Vec<usize>,
}

impl PieceShape {
    /// Build a shape from a list of offsets
    ///
    /// Fails if the list is empty, contains a negative offset or one above
    /// [`MAX_OFFSET`], or repeats a cell.
    pub fn new(cells: impl Into<Vec<CellOffset>>) -> Result<Self, ShapeError> {
        let cells = cells.into();
        if cells.is_empty() {
            return Err(ShapeError::Empty);
        }
        if let Some(&(x, y)) = cells.iter().find(|&&(x, y)| x < 0 || y < 0) {
            return Err(ShapeError::NegativeOffset { x, y });
        }
        if let Some(&(x, y)) = cells.iter().find(|&&(x, y)| x > MAX_OFFSET || y > MAX_OFFSET) {
            return Err(ShapeError::OffsetTooLarge {
                x,
                y,
                max: MAX_OFFSET,
            });
        }

        let shape = Self::from_checked(cells);
        if let Some(pair) = shape.canonical.windows(2).find(|pair| pair[0] == pair[1]) {
            let (x, y) = pair[0];
            return Err(ShapeError::DuplicateCell { x, y });
        }
        Ok(shape)
    }

    /// Derive bounding box and skirt from offsets already known to be valid
    fn from_checked(cells: Vec<CellOffset>) -> Self {
        let mut width = 0usize;
        let mut height = 0usize;
        for &(x, y) in &cells {
            width = width.max(x as usize + 1);
            height = height.max(y as usize + 1);
        }

        // Columns without a cell keep `height` so they never constrain a drop.
        let mut skirt = vec![height; width];
        for &(x, y) in &cells {
            let lowest = &mut skirt[x as usize];
            *lowest = (*lowest).min(y as usize);
        }

        let mut canonical = cells.clone();
        canonical.sort_unstable();

        Self {
            cells,
            canonical,
            width,
            height,
            skirt,
        }
    }

    /// The shape turned 90° counter-clockwise inside its bounding box
    ///
    /// Each offset `(x, y)` maps to `(height - 1 - y, x)`, using this shape's
    /// height. Rotation is a bijection on valid offsets, so the result needs
    /// no re-validation.
    pub fn rotated(&self) -> Self {
        // height <= MAX_OFFSET + 1
        let h = i32::try_from(self.height).unwrap_or(MAX_OFFSET + 1);
        let cells = self.cells.iter().map(|&(x, y)| (h - 1 - y, x)).collect();
        Self::from_checked(cells)
    }

    /// Occupied offsets in insertion order
    pub fn cells(&self) -> &[CellOffset] {
        &self.cells
    }

    /// Bounding box width (`max(x) + 1`)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bounding box height (`max(y) + 1`)
    pub fn height(&self) -> usize {
        self.height
    }

    /// Lowest occupied y for each column in `0..width`
    pub fn skirt(&self) -> &[usize] {
        &self.skirt
    }
}

impl PartialEq for PieceShape {
    fn eq(&self, other: &Self) -> bool {
        self.canonical == other.canonical
    }
}

impl Eq for PieceShape {}

impl Hash for PieceShape {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.canonical.hash(state);
    }
}

impl FromStr for PieceShape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let coords = s
            .split_whitespace()
            .map(|token| {
                token.parse::<i32>().map_err(|_| ShapeError::NotAnInteger {
                    token: token.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if coords.len() % 2 != 0 {
            return Err(ShapeError::OddTokenCount {
                count: coords.len(),
            });
        }

        let cells: Vec<CellOffset> = coords
            .chunks_exact(2)
            .map(|pair| (pair[0], pair[1]))
            .collect();
        Self::new(cells)
    }
}

impl fmt::Display for PieceShape {
    /// Writes the body back in the text form accepted by `FromStr`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (x, y)) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str("  ")?;
            }
            write!(f, "{} {}", x, y)?;
        }
        Ok(())
    }
}
