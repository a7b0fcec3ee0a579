//! Frontier-BFS null-homology test (spec §4.4).
//!
//! This is the one search used for D0, D1, and the lift complex: a classifier
//! supplies `boundary(state)` — the XOR-folded set of states one admissible
//! rectangle away — and this function decides whether `target` lies in the
//! image of that boundary map by exploring its connected component
//! (the neighbor relation is symmetric, so "reachable from target" is just
//! the component) and doing Gaussian elimination over `𝔽₂` as new states are
//! discovered: each popped state's boundary is reduced against every pivot
//! already known, and either collapses to empty (`target` is null-homologous)
//! or contributes one new pivot to the table.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;

use crate::error::Error;
use crate::observer::{CancelToken, LogLevel, Limits, Observer};

/// XOR-folds `chain` into `acc`: terms present in both cancel (𝔽₂ addition).
pub(crate) fn fold_f2<S: Eq + Hash + Clone>(acc: &mut HashSet<S>, chain: impl IntoIterator<Item = S>) {
    for s in chain {
        if !acc.remove(&s) {
            acc.insert(s);
        }
    }
}

/// Rough per-state footprint used against [`Limits::max_bytes`]. Deliberately
/// coarse (a few words per state) rather than tracking exact allocator
/// bytes, since `S` may be a packed `u128` or a heap `Vec`.
fn state_cost<S>() -> usize {
    std::mem::size_of::<S>() + 32
}

/// Decides whether `target` lies in the image of the boundary map `boundary`
/// by exploring its connected component and reducing against a
/// BFS-discovered pivot table.
///
/// `boundary(state)` must return the `𝔽₂`-folded set of states one
/// admissible rectangle away from `state` (duplicate rectangles to the same
/// target cancel before this function ever sees them).
pub fn is_null_homologous<S, B>(
    target: &S,
    mut boundary: B,
    limits: &Limits,
    cancel: &CancelToken,
    observer: &mut Observer<'_>,
) -> Result<bool, Error>
where
    S: Clone + Eq + Hash + Ord,
    B: FnMut(&S) -> HashSet<S>,
{
    let mut bytes_used = state_cost::<S>();
    if bytes_used > limits.max_bytes {
        return Err(Error::out_of_memory(
            "memory budget is smaller than a single state",
        ));
    }

    // `parents[p]` is the 𝔽₂ chain `p` was eliminated in terms of: once `p`
    // appears in a later reduced sum, substitute it for `parents[p]`.
    let mut parents: HashMap<S, HashSet<S>> = HashMap::new();
    let mut pending: VecDeque<S> = VecDeque::new();
    let mut seen: HashSet<S> = HashSet::new();
    pending.push_back(target.clone());
    seen.insert(target.clone());
    let mut states_explored: u64 = 0;

    loop {
        if cancel.is_cancelled() {
            return Err(Error::cancelled());
        }

        let Some(state) = pending.pop_front() else {
            return Ok(false);
        };

        let mut reduced = boundary(&state);
        states_explored += 1;

        if cancel.is_cancelled() {
            return Err(Error::cancelled());
        }

        bytes_used = bytes_used.saturating_add(state_cost::<S>());
        if bytes_used > limits.max_bytes {
            return Err(Error::out_of_memory(format!(
                "exceeded memory budget after exploring {states_explored} states"
            )));
        }

        // Substitute away every already-known pivot in the freshly computed
        // boundary, the way forward substitution clears known variables out
        // of a new equation during Gaussian elimination.
        loop {
            let known = reduced.iter().find(|s| parents.contains_key(*s)).cloned();
            match known {
                None => break,
                Some(p) => {
                    reduced.remove(&p);
                    let rest = parents[&p].clone();
                    fold_f2(&mut reduced, rest);
                }
            }
        }

        if reduced.is_empty() {
            return Ok(true);
        }

        let pivot = reduced.iter().min().cloned().expect("reduced is non-empty");
        let mut rest = reduced;
        rest.remove(&pivot);
        parents.insert(pivot.clone(), rest);

        for n in boundary(&pivot) {
            if seen.insert(n.clone()) {
                pending.push_back(n);
            }
        }

        if limits.progress_every != 0 && states_explored % limits.progress_every == 0 {
            observer.progress(states_explored, parents.len() as u64);
        }
        observer.log(
            LogLevel::Verbose,
            &format!(
                "pivot discovered; {states_explored} states explored, {} pivots known",
                parents.len()
            ),
        );
    }
}
