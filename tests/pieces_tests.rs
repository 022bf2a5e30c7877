//! Pieces tests - shape geometry, equality, and rotation rings

use brickfall::core::{PieceRegistry, PieceShape, RotationRing, ShapeError};
use brickfall::types::PieceKind;

fn shape(text: &str) -> PieceShape {
    text.parse().unwrap()
}

// ============== Shape Tests ==============

#[test]
fn test_square_dimensions_survive_rotation() {
    let square0 = shape(PieceKind::Square.body());
    let square1 = square0.rotated();

    assert_eq!((square0.width(), square0.height()), (2, 2));
    assert_eq!((square1.width(), square1.height()), (2, 2));
    assert_eq!(square0.skirt(), &[0, 0]);
    assert_eq!(square1.skirt(), &[0, 0]);
    assert_eq!(square0, square1);
}

#[test]
fn test_l_widths_heights_and_skirts() {
    let l0 = shape(PieceKind::L1.body());
    let l1 = l0.rotated();
    let l2 = l1.rotated();
    let l3 = l2.rotated();
    let l4 = l3.rotated();

    let widths: Vec<usize> = [&l0, &l1, &l2, &l3, &l4].iter().map(|s| s.width()).collect();
    let heights: Vec<usize> = [&l0, &l1, &l2, &l3, &l4].iter().map(|s| s.height()).collect();
    assert_eq!(widths, vec![2, 3, 2, 3, 2]);
    assert_eq!(heights, vec![3, 2, 3, 2, 3]);

    assert_eq!(l0.skirt(), &[0, 0]);
    assert_eq!(l1.skirt(), &[0, 0, 0]);
    assert_eq!(l2.skirt(), &[2, 0]);
    assert_eq!(l3.skirt(), &[0, 1, 1]);
    assert_eq!(l4.skirt(), &[0, 0]);
}

#[test]
fn test_rotation_formula() {
    // (x, y) -> (height - 1 - y, x) with the pre-rotation height
    let pyramid = shape(PieceKind::Pyramid.body());
    assert_eq!(pyramid.height(), 2);
    let turned = pyramid.rotated();
    assert_eq!(turned.cells(), &[(1, 0), (1, 1), (0, 1), (1, 2)]);
    assert_eq!(turned.skirt(), &[1, 0]);
}

#[test]
fn test_equality_laws() {
    let a = shape("0 0  1 0  1 1  2 0");
    let b = shape("2 0  1 1  0 0  1 0");
    let c = shape("0 0  1 0  1 1  2 1");

    assert_eq!(a, a);
    assert_eq!(a, b);
    assert_eq!(b, a);
    assert_ne!(a, c);
    assert_ne!(c, a);
}

#[test]
fn test_l_rotation_equality() {
    let l0 = shape(PieceKind::L1.body());
    let l1 = l0.rotated();
    let l2 = l1.rotated();
    let l3 = l2.rotated();
    let l4 = l3.rotated();

    assert_ne!(l0, l1);
    assert_ne!(l0, l2);
    assert_ne!(l0, l3);
    assert_eq!(l0, l4);
}

#[test]
fn test_malformed_text_is_rejected() {
    assert!(matches!(
        "a".parse::<PieceShape>(),
        Err(ShapeError::NotAnInteger { .. })
    ));
    assert!(matches!(
        "0 0 1".parse::<PieceShape>(),
        Err(ShapeError::OddTokenCount { count: 3 })
    ));
    assert!(matches!(
        "0 0 1.5 0".parse::<PieceShape>(),
        Err(ShapeError::NotAnInteger { .. })
    ));
}

#[test]
fn test_literal_and_text_construction_agree() {
    let literal = PieceShape::new(vec![(0, 0), (0, 1), (0, 2), (0, 3)]).unwrap();
    assert_eq!(literal, shape(PieceKind::Stick.body()));
}

// ============== Rotation Ring Tests ==============

#[test]
fn test_fast_rotation_matches_computed() {
    let registry = PieceRegistry::build().unwrap();

    let square0 = shape(PieceKind::Square.body());
    let square = registry.ring(PieceKind::Square).root();
    assert_eq!(square.shape(), &square0);
    assert_eq!(square.next().shape(), &square0.rotated());

    let l0 = shape(PieceKind::L1.body());
    let l = registry.ring(PieceKind::L1).root();
    assert_eq!(l.shape(), &l0);
    assert_eq!(l.next().shape(), &l0.rotated());
    assert_eq!(l.next().next().shape(), &l0.rotated().rotated());
    assert_eq!(
        l.next().next().next().shape(),
        &l0.rotated().rotated().rotated()
    );
    assert_eq!(l.next().next().next().next().shape(), &l0);
}

#[test]
fn test_ring_cycle_lengths() {
    let registry = PieceRegistry::build().unwrap();
    let expected = [
        (PieceKind::Stick, 2),
        (PieceKind::L1, 4),
        (PieceKind::L2, 4),
        (PieceKind::S1, 2),
        (PieceKind::S2, 2),
        (PieceKind::Square, 1),
        (PieceKind::Pyramid, 4),
    ];
    for (kind, len) in expected {
        let ring = registry.ring(kind);
        assert_eq!(ring.len(), len, "{:?}", kind);

        // rotated() returns to the root after exactly `len` turns
        let root = ring.root().shape().clone();
        let mut s = root.rotated();
        let mut turns = 1;
        while s != root {
            s = s.rotated();
            turns += 1;
        }
        assert_eq!(turns, len, "{:?}", kind);
    }
}

#[test]
fn test_ring_variants_are_distinct() {
    let registry = PieceRegistry::build().unwrap();
    for (kind, ring) in registry.iter() {
        let shapes = ring.shapes();
        for i in 0..shapes.len() {
            for j in (i + 1)..shapes.len() {
                assert_ne!(shapes[i], shapes[j], "{:?} {} {}", kind, i, j);
            }
        }
    }
}

#[test]
fn test_ring_from_custom_root() {
    let bar = shape("0 0 1 0 2 0");
    let ring = RotationRing::build(bar.clone()).unwrap();
    assert_eq!(ring.len(), 2);
    assert_eq!(ring.root().next().shape(), &shape("0 0 0 1 0 2"));
    assert_eq!(ring.root().next().next().shape(), &bar);
}

#[test]
fn test_registry_is_shareable_across_threads() {
    let registry = std::sync::Arc::new(PieceRegistry::build().unwrap());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = std::sync::Arc::clone(&registry);
            std::thread::spawn(move || {
                registry
                    .iter()
                    .map(|(_, ring)| ring.len())
                    .sum::<usize>()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 19);
    }
}
