//! Board module - the grid engine
//!
//! The board is a `width x height` occupancy grid with derived statistics kept
//! up to date incrementally:
//!
//! - `heights[x]`: one more than the topmost filled row of column x (0 if empty)
//! - `widths[y]`: number of filled cells in row y
//! - `max_height`: the largest column height
//!
//! Coordinates: (x, y) where x grows left to right and y grows upward from the
//! floor (row 0 is the bottom row). Storage is a flat row-major array.
//!
//! # Transactions
//!
//! Every mutation is provisional. [`Board::place`] and [`Board::clear_rows`]
//! move the board from committed to pending and snapshot the prior state into
//! a backup layer; [`Board::commit`] keeps the change and [`Board::undo`]
//! swaps the backup back in. A `place` followed by `clear_rows` without a
//! commit in between shares one backup and undoes as one unit.
//!
//! Placement is not atomic within a call: when `place` reports
//! [`PlaceStatus::OutOfBounds`] or [`PlaceStatus::Bad`], cells written for
//! earlier offsets stay written until the caller undoes.

use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::config::BoardConfig;
use crate::error::{BoardError, Statistic};
use crate::piece::PieceShape;
use crate::types::PlaceStatus;

/// Occupancy plus derived statistics; the board keeps a live and a backup copy
#[derive(Debug, Clone, PartialEq, Eq)]
struct Layer {
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<bool>,
    heights: Vec<usize>,
    widths: Vec<usize>,
    max_height: usize,
}

impl Layer {
    fn empty(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            heights: vec![0; width],
            widths: vec![0; height],
            max_height: 0,
        }
    }

    /// Rescan each column downward from its previous height
    fn recompute_heights(&mut self, width: usize) {
        self.max_height = 0;
        for x in 0..width {
            let top = (0..self.heights[x])
                .rev()
                .find(|&y| self.cells[y * width + x])
                .map_or(0, |y| y + 1);
            self.heights[x] = top;
            self.max_height = self.max_height.max(top);
        }
    }
}

/// The game board with one-level commit/undo
#[derive(Debug, Clone)]
pub struct Board {
    width: usize,
    height: usize,
    live: Layer,
    backup: Layer,
    committed: bool,
    verification: bool,
}

impl Board {
    /// Create an empty board with verification on
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        Self::with_config(&BoardConfig::new(width, height))
    }

    /// Create an empty board from a validated config
    pub fn with_config(config: &BoardConfig) -> Result<Self, BoardError> {
        config.validate()?;
        Ok(Self {
            width: config.width,
            height: config.height,
            live: Layer::empty(config.width, config.height),
            backup: Layer::empty(config.width, config.height),
            committed: true,
            verification: config.verification,
        })
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(y * self.width + x)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Tallest column height
    pub fn max_height(&self) -> usize {
        self.live.max_height
    }

    /// One more than the topmost filled row of column `x`, or 0 if empty
    ///
    /// Panics if `x >= width`.
    pub fn column_height(&self, x: usize) -> usize {
        self.live.heights[x]
    }

    /// Filled cells in row `y`
    ///
    /// Panics if `y >= height`.
    pub fn row_width(&self, y: usize) -> usize {
        self.live.widths[y]
    }

    /// True when no mutation is pending
    pub fn is_committed(&self) -> bool {
        self.committed
    }

    pub fn verification(&self) -> bool {
        self.verification
    }

    /// Turn the post-mutation rescan on or off
    pub fn set_verification(&mut self, on: bool) {
        self.verification = on;
    }

    /// In bounds and occupied
    pub fn is_filled(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some_and(|idx| self.live.cells[idx])
    }

    /// Out of bounds or occupied
    ///
    /// Boundary and occupancy share one predicate so collision checks need a
    /// single test per cell.
    pub fn cell_blocked(&self, x: i32, y: i32) -> bool {
        self.index(x, y).map_or(true, |idx| self.live.cells[idx])
    }

    /// Lowest row at which `shape` can rest with its left edge in column `x`
    ///
    /// Columns `x..x + shape.width()` must be inside the board; this is the
    /// caller's responsibility and an out-of-range column panics.
    pub fn drop_height(&self, shape: &PieceShape, x: usize) -> usize {
        shape
            .skirt()
            .iter()
            .enumerate()
            .map(|(i, &skirt)| self.live.heights[x + i].saturating_sub(skirt))
            .max()
            .unwrap_or(0)
    }

    /// Write `shape` with its origin at `(x, y)`
    ///
    /// Requires a committed board; calling this while a mutation is pending is
    /// a contract violation reported as [`BoardError::PlacePending`], with no
    /// change to the board. Gameplay outcomes come back as [`PlaceStatus`].
    pub fn place(&mut self, shape: &PieceShape, x: i32, y: i32) -> Result<PlaceStatus, BoardError> {
        if !self.committed {
            return Err(BoardError::PlacePending);
        }

        self.backup();
        self.committed = false;

        let mut status = PlaceStatus::Ok;
        for &(dx, dy) in shape.cells() {
            let px = x.saturating_add(dx);
            let py = y.saturating_add(dy);

            let Some(idx) = self.index(px, py) else {
                trace!(x, y, px, py, "placement out of bounds");
                return Ok(PlaceStatus::OutOfBounds);
            };
            if self.live.cells[idx] {
                trace!(x, y, px, py, "placement overlaps");
                return Ok(PlaceStatus::Bad);
            }

            let (col, row) = (px as usize, py as usize);
            let live = &mut self.live;
            live.cells[idx] = true;
            live.widths[row] += 1;
            live.heights[col] = live.heights[col].max(row + 1);
            live.max_height = live.max_height.max(live.heights[col]);

            if live.widths[row] == self.width {
                status = PlaceStatus::RowFilled;
            }
        }

        trace!(x, y, status = status.as_str(), "placed piece");
        self.check_invariants();
        Ok(status)
    }

    /// Remove every full row, shifting the rows above down
    ///
    /// Returns the number of rows removed. Joins a pending transaction if one
    /// is open, otherwise starts a new one.
    pub fn clear_rows(&mut self) -> usize {
        if self.committed {
            self.backup();
        }
        self.committed = false;

        let width = self.width;
        let live = &mut self.live;
        let top = live.max_height;

        let mut to_row = (0..top)
            .find(|&row| live.widths[row] == width)
            .unwrap_or(top);

        let mut cleared = 0;
        for from_row in to_row..top {
            if live.widths[from_row] < width {
                if from_row != to_row {
                    let src = from_row * width;
                    live.cells.copy_within(src..src + width, to_row * width);
                }
                live.widths[to_row] = live.widths[from_row];
                to_row += 1;
            } else {
                cleared += 1;
            }
        }

        // Rows at or above the old max height are already empty.
        live.cells[to_row * width..top * width].fill(false);
        live.widths[to_row..top].fill(0);
        live.recompute_heights(width);

        if cleared > 0 {
            debug!(cleared, max_height = live.max_height, "cleared rows");
        }
        self.check_invariants();
        cleared
    }

    /// Discard the pending mutation, restoring the state it started from
    pub fn undo(&mut self) {
        if self.committed {
            return;
        }
        mem::swap(&mut self.live, &mut self.backup);
        self.committed = true;
        trace!(max_height = self.live.max_height, "undo");
    }

    /// Keep the pending mutation
    pub fn commit(&mut self) {
        self.committed = true;
    }

    /// Compare the maintained statistics against a full rescan of the grid
    pub fn verify(&self) -> Result<(), BoardError> {
        let mut heights = vec![0; self.width];
        let mut widths = vec![0; self.height];
        for y in 0..self.height {
            for x in 0..self.width {
                if self.live.cells[y * self.width + x] {
                    widths[y] += 1;
                    heights[x] = y + 1;
                }
            }
        }
        let max_height = heights.iter().copied().max().unwrap_or(0);

        if max_height != self.live.max_height {
            return Err(BoardError::Invariant(Statistic::MaxHeight));
        }
        if widths != self.live.widths {
            return Err(BoardError::Invariant(Statistic::Widths));
        }
        if heights != self.live.heights {
            return Err(BoardError::Invariant(Statistic::Heights));
        }
        Ok(())
    }

    fn check_invariants(&self) {
        if !self.verification {
            return;
        }
        if let Err(err) = self.verify() {
            panic!("board invariant violated: {err}");
        }
    }

    /// Copy the live layer into the backup layer
    ///
    /// Both layers are always internally consistent, so rows at or above the
    /// larger of their two max heights are empty in both and can be skipped.
    fn backup(&mut self) {
        let rows = self.live.max_height.max(self.backup.max_height);
        let cells = rows * self.width;

        self.backup.cells[..cells].copy_from_slice(&self.live.cells[..cells]);
        self.backup.widths[..rows].copy_from_slice(&self.live.widths[..rows]);
        self.backup.heights.copy_from_slice(&self.live.heights);
        self.backup.max_height = self.live.max_height;
    }
}

impl fmt::Display for Board {
    /// Rows from the top down, `'+'` for blocked cells, then a `-` floor line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..self.height as i32).rev() {
            f.write_str("|")?;
            for x in 0..self.width as i32 {
                f.write_str(if self.cell_blocked(x, y) { "+" } else { " " })?;
            }
            f.write_str("|\n")?;
        }
        for _ in 0..self.width + 2 {
            f.write_str("-")?;
        }
        Ok(())
    }
}
