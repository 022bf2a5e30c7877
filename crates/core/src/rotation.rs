//! Rotation rings and the piece registry
//!
//! A [`RotationRing`] holds every orientation reachable from a root shape by
//! repeated [`PieceShape::rotated`] calls, closed at the first rotation that
//! equals the root. Successor lookup is an index bump, so callers that walk
//! rotations in a search loop never recompute geometry.
//!
//! [`PieceRegistry`] builds one ring per [`PieceKind`]. It is constructed by
//! an explicit [`PieceRegistry::build`] call, is immutable afterwards, and is
//! handed to whoever needs it by reference.

use arrayvec::ArrayVec;
use tracing::debug;

use crate::error::ShapeError;
use crate::piece::PieceShape;
use crate::types::{PieceKind, PIECE_KIND_COUNT};

/// Upper bound on distinct quarter-turn orientations
pub const MAX_ROTATIONS: usize = 4;

/// Closed cycle of a piece's rotation variants, root first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationRing {
    variants: ArrayVec<PieceShape, MAX_ROTATIONS>,
}

impl RotationRing {
    /// Rotate `root` until a rotation equals it again
    ///
    /// Ring length is 1, 2 or 4 depending on the root's symmetry. A root that
    /// is not anchored at x = 0 and y = 0 never comes back to itself and is
    /// rejected with [`ShapeError::OpenRing`].
    pub fn build(root: PieceShape) -> Result<Self, ShapeError> {
        let mut variants = ArrayVec::new();
        let mut next = root.rotated();
        variants.push(root);

        while next != variants[0] {
            if variants.is_full() {
                return Err(ShapeError::OpenRing);
            }
            let after = next.rotated();
            variants.push(next);
            next = after;
        }

        Ok(Self { variants })
    }

    /// Number of distinct orientations
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Always false; a ring holds at least its root
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// The canonical orientation
    pub fn root(&self) -> Variant<'_> {
        Variant {
            ring: self,
            index: 0,
        }
    }

    /// Orientation at `index`, if the ring has that many
    pub fn get(&self, index: usize) -> Option<Variant<'_>> {
        (index < self.variants.len()).then_some(Variant { ring: self, index })
    }

    /// Shape at `index`, wrapping around the ring
    pub fn shape(&self, index: usize) -> &PieceShape {
        &self.variants[index % self.variants.len()]
    }

    /// Index of the successor of `index`; the last variant wraps to the root
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.variants.len()
    }

    /// All orientations in rotation order
    pub fn shapes(&self) -> &[PieceShape] {
        &self.variants
    }

    /// Orientations as linked handles, root first
    pub fn iter(&self) -> impl Iterator<Item = Variant<'_>> + '_ {
        (0..self.variants.len()).map(move |index| Variant { ring: self, index })
    }
}

/// Borrowed handle to one orientation inside a [`RotationRing`]
#[derive(Debug, Clone, Copy)]
pub struct Variant<'a> {
    ring: &'a RotationRing,
    index: usize,
}

impl<'a> Variant<'a> {
    pub fn shape(&self) -> &'a PieceShape {
        &self.ring.variants[self.index]
    }

    /// Position in the ring (0 is the root)
    pub fn index(&self) -> usize {
        self.index
    }

    /// The next rotation; O(1), never recomputes geometry
    pub fn next(&self) -> Variant<'a> {
        Variant {
            ring: self.ring,
            index: self.ring.next_index(self.index),
        }
    }
}

impl PartialEq for Variant<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape()
    }
}

impl Eq for Variant<'_> {}

/// Read-only table of rotation rings for every [`PieceKind`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceRegistry {
    rings: ArrayVec<RotationRing, PIECE_KIND_COUNT>,
}

impl PieceRegistry {
    /// Build every ring from the catalog bodies
    ///
    /// Call once at startup and share the result; the table never changes.
    pub fn build() -> Result<Self, ShapeError> {
        let mut rings = ArrayVec::new();
        for kind in PieceKind::ALL {
            let root: PieceShape = kind.body().parse()?;
            let ring = RotationRing::build(root)?;
            debug!(kind = kind.as_str(), rotations = ring.len(), "built rotation ring");
            rings.push(ring);
        }
        Ok(Self { rings })
    }

    /// Ring for `kind`
    pub fn ring(&self, kind: PieceKind) -> &RotationRing {
        &self.rings[kind.index()]
    }

    /// Ring at catalog `index`
    pub fn get(&self, index: usize) -> Option<&RotationRing> {
        self.rings.get(index)
    }

    /// Rings paired with their kinds, in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (PieceKind, &RotationRing)> + '_ {
        PieceKind::ALL.into_iter().zip(self.rings.iter())
    }
}
