//! The `n`-fold cyclic branched cover lift complex (spec §4.5).
//!
//! A lifted generator is an ordered `n`-tuple of base grid states, one per
//! sheet of the cover, tagged by the permutation `σ` the sheets have been
//! rotated through since the basepoint. The lifted boundary moves exactly
//! one sheet at a time: a marker-free rectangle carries that sheet's state
//! across with `σ` unchanged; an O- or X-marker rectangle is a branch-point
//! crossing and post-composes `σ` with the generating `n`-cycle, leaving
//! every other sheet's state untouched. For `n = 1` there is only one sheet
//! and only one permutation, so marker-crossing moves are never admissible
//! and the lift complex collapses onto D0 — the `theta_n(_, 1, ...) ==
//! lambda_plus` law this module is built to satisfy.

use std::cmp::Ordering;

use crate::codec::{Code, GridSpec};
use crate::geometry::{rectangles, Count};
use crate::grid::GridDiagram;

/// A permutation of `{0,...,n-1}`, used as the branched-cover sheet labeling.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Permutation(Vec<u32>);

impl Permutation {
    pub fn identity(n: usize) -> Self {
        Self((0..n as u32).collect())
    }

    /// Rotates every sheet label by `delta` (mod `n`).
    pub fn rotate(&self, delta: i64) -> Self {
        let n = self.0.len() as i64;
        let shifted = self
            .0
            .iter()
            .map(|&v| {
                let v = v as i64;
                (((v + delta) % n + n) % n) as u32
            })
            .collect();
        Self(shifted)
    }

    /// Lehmer-code rank of this permutation among all permutations of its
    /// length, used as the deterministic ordering key for [`LiftedState`].
    pub fn rank(&self) -> u64 {
        let n = self.0.len();
        let mut pool: Vec<u32> = (0..n as u32).collect();
        let mut rank: u64 = 0;
        let mut factorial: u64 = 1;
        for k in 1..n as u64 {
            factorial = factorial.saturating_mul(k);
        }
        for (i, &v) in self.0.iter().enumerate() {
            let pos = pool.iter().position(|&p| p == v).expect("valid sheet label");
            rank = rank.saturating_add(pos as u64 * factorial);
            pool.remove(pos);
            if i + 1 < n {
                factorial /= (n - i - 1).max(1) as u64;
            }
        }
        rank
    }
}

/// A generator of the lift complex: one base-grid state per sheet, paired
/// with the sheet permutation accumulated along the path from the fixed
/// basepoint.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LiftedState {
    pub sheets: Vec<Code>,
    pub sigma: Permutation,
}

impl PartialOrd for LiftedState {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LiftedState {
    fn cmp(&self, other: &Self) -> Ordering {
        // Sheet tuple first (lexicographic over `Code`'s own order), then
        // sheet permutation: matches the BFS pivot tie-break, which only
        // needs *a* deterministic total order.
        self.sheets
            .cmp(&other.sheets)
            .then_with(|| self.sigma.rank().cmp(&other.sigma.rank()))
    }
}

/// The lifted generator above `base`: every sheet starts at the same base
/// state, at the identity sheet permutation.
pub fn lifted_generator(n: usize, base: Code) -> LiftedState {
    LiftedState {
        sheets: vec![base; n],
        sigma: Permutation::identity(n),
    }
}

/// Whether a rectangle with this marker content is admissible in the lift
/// complex, and if so, the sheet rotation it induces.
///
/// For `n == 1` only marker-free rectangles are admissible: there is only one
/// sheet permutation, so this degenerates to exactly the D0 boundary map.
fn classify(n: usize, x: Count, o: Count) -> Option<i64> {
    match (x, o) {
        (Count::Zero, Count::Zero) => Some(0),
        (Count::Zero, Count::One) if n > 1 => Some(1),
        (Count::One, Count::Zero) if n > 1 => Some(-1),
        _ => None,
    }
}

/// States reachable from `state` by moving exactly one sheet across one
/// admissible rectangle in the base complex; every other sheet's state is
/// left untouched. Like [`crate::neighbors::neighbors`], duplicate targets
/// are not deduped here — the BFS's `𝔽₂` fold treats repeats as cancelling
/// terms.
pub fn neighbors(grid: &GridDiagram, spec: &GridSpec, n: usize, state: &LiftedState) -> Vec<LiftedState> {
    let mut out = Vec::new();
    for sheet_idx in 0..n {
        for (target, marker) in rectangles(grid, spec, &state.sheets[sheet_idx]) {
            let Some(delta) = classify(n, marker.x, marker.o) else {
                continue;
            };
            let mut sheets = state.sheets.clone();
            sheets[sheet_idx] = target;
            out.push(LiftedState {
                sheets,
                sigma: state.sigma.rotate(delta),
            });
        }
    }
    out
}
