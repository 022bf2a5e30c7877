use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::core::{Board, PieceShape};
use crate::types::PlaceStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    #[error("board has an uncommitted mutation")]
    NotCommitted,
    #[error("target x would place piece out of bounds")]
    XOutOfBounds,
    #[error("piece does not fit below the top of the board")]
    TooTall,
    #[error("landing cell is already occupied")]
    Blocked,
}

impl PlaceError {
    pub fn code(self) -> &'static str {
        match self {
            PlaceError::NotCommitted => "not_committed",
            PlaceError::XOutOfBounds | PlaceError::TooTall | PlaceError::Blocked => {
                "invalid_place"
            }
        }
    }
}

/// Where a dropped piece came to rest and what it cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockOutcome {
    pub x: i32,
    pub y: i32,
    pub status: PlaceStatus,
    pub rows_cleared: usize,
}

/// Drop `shape` straight down in column `x`, clear rows, and commit
///
/// On any error the board is left exactly as it was.
pub fn drop_and_lock(
    board: &mut Board,
    shape: &PieceShape,
    x: i32,
) -> Result<LockOutcome, PlaceError> {
    if !board.is_committed() {
        return Err(PlaceError::NotCommitted);
    }

    let Some(column) = usize::try_from(x)
        .ok()
        .filter(|&col| col + shape.width() <= board.width())
    else {
        return Err(PlaceError::XOutOfBounds);
    };

    // Dimensions are validated to fit in i32.
    let y = board.drop_height(shape, column) as i32;
    let status = board
        .place(shape, x, y)
        .map_err(|_| PlaceError::NotCommitted)?;

    match status {
        PlaceStatus::OutOfBounds => {
            board.undo();
            return Err(PlaceError::TooTall);
        }
        PlaceStatus::Bad => {
            board.undo();
            return Err(PlaceError::Blocked);
        }
        PlaceStatus::Ok | PlaceStatus::RowFilled => {}
    }

    let rows_cleared = if status == PlaceStatus::RowFilled {
        board.clear_rows()
    } else {
        0
    };
    board.commit();

    debug!(x, y, rows_cleared, "locked piece");
    Ok(LockOutcome {
        x,
        y,
        status,
        rows_cleared,
    })
}
