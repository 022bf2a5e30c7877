//! Advisor port.
//!
//! Move search lives outside this workspace. An advisor receives the board
//! mutably so it can probe placements with [`trial`](crate::trial::trial);
//! every probe is undone before control returns, so the committed state the
//! driver sees is never disturbed.

use serde::{Deserialize, Serialize};

use crate::core::{Board, PieceRegistry, PieceShape, RotationRing};
use crate::types::PieceKind;

/// A chosen placement and how desirable the advisor judged it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Move {
    pub kind: PieceKind,
    /// Index into the kind's rotation ring (0 is the root)
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
    /// Lower is better
    pub score: f64,
}

impl Move {
    pub fn shape<'r>(&self, registry: &'r PieceRegistry) -> &'r PieceShape {
        registry.ring(self.kind).shape(self.rotation)
    }
}

/// External move evaluator
pub trait Advisor {
    /// Pick the best placement of `kind`, or `None` if nothing fits under `height_limit`
    ///
    /// `previous` is the move returned for the prior call, offered so an
    /// advisor may reuse its work.
    fn best_move(
        &mut self,
        board: &mut Board,
        registry: &PieceRegistry,
        kind: PieceKind,
        height_limit: usize,
        previous: Option<&Move>,
    ) -> Option<Move>;
}

/// A column and rest row for one rotation of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Landing {
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
}

/// Every straight-drop landing of `ring` whose top stays within `height_limit`
///
/// Rotations are visited root first, columns left to right.
pub fn landings(board: &Board, ring: &RotationRing, height_limit: usize) -> Vec<Landing> {
    let limit = height_limit.min(board.height());
    let mut out = Vec::new();

    for variant in ring.iter() {
        let shape = variant.shape();
        if shape.width() > board.width() {
            continue;
        }
        for x in 0..=board.width() - shape.width() {
            let y = board.drop_height(shape, x);
            if y + shape.height() <= limit {
                out.push(Landing {
                    rotation: variant.index(),
                    x: x as i32,
                    y: y as i32,
                });
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trial::trial;

    /// Minimizes the resulting max height, then prefers more cleared rows.
    struct FlattestAdvisor;

    impl Advisor for FlattestAdvisor {
        fn best_move(
            &mut self,
            board: &mut Board,
            registry: &PieceRegistry,
            kind: PieceKind,
            height_limit: usize,
            _previous: Option<&Move>,
        ) -> Option<Move> {
            let ring = registry.ring(kind);
            let mut best: Option<Move> = None;
            for landing in landings(board, ring, height_limit) {
                let shape = ring.shape(landing.rotation);
                let Ok(t) = trial(board, shape, landing.x, landing.y) else {
                    continue;
                };
                let score = t.max_height() as f64 - t.rows_cleared() as f64;
                if best.map_or(true, |b| score < b.score) {
                    best = Some(Move {
                        kind,
                        rotation: landing.rotation,
                        x: landing.x,
                        y: landing.y,
                        score,
                    });
                }
            }
            best
        }
    }

    #[test]
    fn landings_respect_width_and_limit() {
        let reg = PieceRegistry::build().unwrap();
        let board = Board::new(6, 8).unwrap();

        // Stick: vertical fits in all 6 columns, horizontal in 3.
        let all = landings(&board, reg.ring(PieceKind::Stick), 8);
        assert_eq!(all.len(), 6 + 3);
        assert!(all.iter().all(|l| l.y == 0));

        // A limit of 3 rows rules out the vertical orientation.
        let low = landings(&board, reg.ring(PieceKind::Stick), 3);
        assert_eq!(low.len(), 3);
        assert!(low.iter().all(|l| l.rotation == 1));
    }

    #[test]
    fn advisor_search_leaves_board_committed() {
        let reg = PieceRegistry::build().unwrap();
        let mut board = Board::new(6, 8).unwrap();
        let stick = reg.ring(PieceKind::Stick).root().shape();
        board.place(stick, 0, 0).unwrap();
        board.commit();
        let before = board.to_string();

        let mv = FlattestAdvisor
            .best_move(&mut board, &reg, PieceKind::Square, 8, None)
            .unwrap();

        assert_eq!(board.to_string(), before);
        assert!(board.is_committed());
        assert_eq!(mv.rotation, 0);
        assert_eq!(mv.y, 0);
        assert_eq!(mv.score, 4.0);
        assert_eq!(mv.shape(&reg), reg.ring(PieceKind::Square).root().shape());
    }

    #[test]
    fn advisor_prefers_clearing_move() {
        let reg = PieceRegistry::build().unwrap();
        let mut board = Board::new(4, 6).unwrap();
        let square = reg.ring(PieceKind::Square).root().shape();
        board.place(square, 0, 0).unwrap();
        board.commit();

        let mv = FlattestAdvisor
            .best_move(&mut board, &reg, PieceKind::Square, 6, None)
            .unwrap();
        assert_eq!((mv.x, mv.y), (2, 0));
        assert_eq!(mv.score, -2.0);
    }

    #[test]
    fn advisor_returns_none_when_nothing_fits() {
        let reg = PieceRegistry::build().unwrap();
        let mut board = Board::new(6, 8).unwrap();
        let mv = FlattestAdvisor.best_move(&mut board, &reg, PieceKind::Stick, 0, None);
        assert!(mv.is_none());
    }

    #[test]
    fn move_serializes_kind_lowercase() {
        let mv = Move {
            kind: PieceKind::Pyramid,
            rotation: 2,
            x: 1,
            y: 3,
            score: 0.5,
        };
        let json = serde_json::to_string(&mv).unwrap();
        assert!(json.contains(r#""kind":"pyramid""#), "{}", json);
        let back: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mv);
    }
}
