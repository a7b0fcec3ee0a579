//! Boundary neighbors for the base-grid complexes D0 and D1 (spec §4.3).
//!
//! D0 only admits marker-free rectangles; D1 admits rectangles crossing at
//! most one O marker (and no X marker). Both are thin filters over
//! [`crate::geometry::rectangles`] so the admissibility rule lives in one
//! place per complex instead of being duplicated into two rectangle-walkers.

use crate::codec::{Code, GridSpec};
use crate::geometry::{rectangles, Count};
use crate::grid::GridDiagram;

/// Which base complex's boundary map to compute neighbors for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// D0: no X, no O in the rectangle's interior.
    D0,
    /// D1: no X, at most one O in the rectangle's interior.
    D1,
}

impl Classification {
    fn admits(self, x: Count, o: Count) -> bool {
        match self {
            Classification::D0 => matches!(x, Count::Zero) && matches!(o, Count::Zero),
            Classification::D1 => matches!(x, Count::Zero) && !matches!(o, Count::TwoOrMore),
        }
    }
}

/// States reachable from `state` by one admissible rectangle, in the order
/// `geometry::rectangles` produced them in. Two distinct rectangles can land
/// on the same target state; this function does not dedupe them — the
/// caller (the BFS's `𝔽₂` fold) treats repeats as cancelling terms.
pub fn neighbors(
    grid: &GridDiagram,
    spec: &GridSpec,
    state: &Code,
    classification: Classification,
) -> Vec<Code> {
    rectangles(grid, spec, state)
        .into_iter()
        .filter(|(_, marker)| classification.admits(marker.x, marker.o))
        .map(|(target, _)| target)
        .collect()
}
