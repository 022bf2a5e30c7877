//! Text rendering of the board
//!
//! The ASCII form is consumed by display and test harnesses, so it is checked
//! character for character.

use brickfall::core::{Board, PieceShape};
use brickfall::types::PieceKind;

fn piece(kind: PieceKind) -> PieceShape {
    kind.body().parse().unwrap()
}

#[test]
fn test_render_empty_board() {
    let board = Board::new(6, 8).unwrap();
    assert_eq!(
        board.to_string(),
        "|      |\n\
         |      |\n\
         |      |\n\
         |      |\n\
         |      |\n\
         |      |\n\
         |      |\n\
         |      |\n\
         --------"
    );
}

#[test]
fn test_render_after_stick() {
    let mut board = Board::new(6, 8).unwrap();
    board.place(&piece(PieceKind::Stick), 0, 0).unwrap();
    board.commit();

    assert_eq!(
        board.to_string(),
        "|      |\n\
         |      |\n\
         |      |\n\
         |      |\n\
         |+     |\n\
         |+     |\n\
         |+     |\n\
         |+     |\n\
         --------"
    );
}

#[test]
fn test_render_top_row_first() {
    let mut board = Board::new(3, 2).unwrap();
    board.place(&piece(PieceKind::Pyramid), 0, 0).unwrap();

    // Rendering reads the live grid even while a placement is pending.
    assert_eq!(board.to_string(), "| + |\n|+++|\n-----");
}

#[test]
fn test_render_has_no_trailing_newline() {
    let board = Board::new(1, 1).unwrap();
    let text = board.to_string();
    assert_eq!(text, "| |\n---");
    assert!(!text.ends_with('\n'));
    assert_eq!(text.lines().count(), 2);
}
