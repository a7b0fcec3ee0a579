//! Rectangle enumeration between grid states (spec §4.2).
//!
//! For a pair of rows `i < j` that a state and its swap agree off, the two
//! toroidal rectangles joining them are the "direct" column range and its
//! "wrap" complement. A rectangle is empty of states iff no other row's
//! coordinate lies in its open interior; its marker content counts X/O
//! markers the same way.

use crate::codec::{Code, GridSpec};
use crate::grid::GridDiagram;

/// Saturating marker count: spec's `{0,1,2+}` classification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Count {
    Zero,
    One,
    TwoOrMore,
}

impl Count {
    fn bump(self) -> Self {
        match self {
            Count::Zero => Count::One,
            Count::One | Count::TwoOrMore => Count::TwoOrMore,
        }
    }
}

/// Marker content of a rectangle's interior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Marker {
    pub x: Count,
    pub o: Count,
}

/// One of the two toroidal column ranges joining rows `i` and `j`.
#[derive(Clone, Copy, Debug)]
enum RectRange {
    /// Columns strictly between `lo` and `hi`.
    Direct { lo: u32, hi: u32 },
    /// The toroidal complement: columns strictly outside `[lo, hi]`.
    Wrap { lo: u32, hi: u32 },
}

impl RectRange {
    fn contains_open(&self, c: u32) -> bool {
        match *self {
            RectRange::Direct { lo, hi } => c > lo && c < hi,
            RectRange::Wrap { lo, hi } => c < lo || c > hi,
        }
    }

    /// Column span, used only to order the "short way" before the "long way".
    fn span(&self, n: u32) -> u32 {
        match *self {
            RectRange::Direct { lo, hi } => hi - lo,
            RectRange::Wrap { lo, hi } => n - (hi - lo),
        }
    }
}

/// Enumerates every `(target state, marker content)` pair reachable from
/// `state` by an empty rectangle, in lexicographic `(i, j)` order with the
/// short-way rectangle emitted before the long-way one.
pub fn rectangles(grid: &GridDiagram, spec: &GridSpec, state: &Code) -> Vec<(Code, Marker)> {
    let n = spec.n();
    let coords = spec.decode(state);
    let mut out = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let a = coords[i];
            let b = coords[j];
            let lo = a.min(b);
            let hi = a.max(b);
            let direct = RectRange::Direct { lo, hi };
            let wrap = RectRange::Wrap { lo, hi };
            let (first, second) = if direct.span(n as u32) <= wrap.span(n as u32) {
                (direct, wrap)
            } else {
                (wrap, direct)
            };
            for rect in [first, second] {
                let empty = (i + 1..j).all(|k| !rect.contains_open(coords[k]));
                if !empty {
                    continue;
                }
                let mut x_count = Count::Zero;
                let mut o_count = Count::Zero;
                for k in i + 1..j {
                    if rect.contains_open(grid.x()[k]) {
                        x_count = x_count.bump();
                    }
                    if rect.contains_open(grid.o()[k]) {
                        o_count = o_count.bump();
                    }
                }
                let target = spec.swap_coords(state, i, j);
                out.push((
                    target,
                    Marker {
                        x: x_count,
                        o: o_count,
                    },
                ));
            }
        }
    }
    out
}
