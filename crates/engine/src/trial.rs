//! Undoable trial placements.
//!
//! A [`Trial`] places a shape, clears any row it filled, and exposes the
//! resulting board for reading. Dropping the guard undoes everything, so a
//! search can probe as many placements as it likes without touching the
//! committed state.

use std::ops::Deref;

use crate::core::{Board, BoardError, PieceShape};
use crate::types::PlaceStatus;

/// Guard over a pending placement; undoes on drop unless [`Trial::keep`] is called
#[derive(Debug)]
pub struct Trial<'b> {
    board: &'b mut Board,
    status: PlaceStatus,
    rows_cleared: usize,
}

/// Place `shape` at `(x, y)` provisionally
///
/// Fails only if the board already has a pending mutation; the board is then
/// untouched and no guard is created.
pub fn trial<'b>(
    board: &'b mut Board,
    shape: &PieceShape,
    x: i32,
    y: i32,
) -> Result<Trial<'b>, BoardError> {
    let status = board.place(shape, x, y)?;
    let rows_cleared = if status == PlaceStatus::RowFilled {
        board.clear_rows()
    } else {
        0
    };
    Ok(Trial {
        board,
        status,
        rows_cleared,
    })
}

impl Trial<'_> {
    pub fn status(&self) -> PlaceStatus {
        self.status
    }

    pub fn rows_cleared(&self) -> usize {
        self.rows_cleared
    }

    /// Commit the placement instead of undoing it
    pub fn keep(self) {
        self.board.commit();
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        // No-op after keep(); the board is already committed.
        self.board.undo();
    }
}
