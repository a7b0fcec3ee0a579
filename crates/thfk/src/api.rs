//! Public facade: the five invariants spec §2 names, each a thin wrapper
//! around [`crate::bfs::is_null_homologous`] wired to the right boundary map.

use std::collections::HashSet;

use crate::bfs::{fold_f2, is_null_homologous};
use crate::codec::{Code, GridSpec};
use crate::error::Error;
use crate::grid::{validate_permutation, GridDiagram};
use crate::lift::{lifted_generator, LiftedState};
use crate::neighbors::{neighbors as base_neighbors, Classification};
use crate::observer::{CancelToken, Limits, Observer};

/// Validates `target` as a grid generator over the same arc index as `grid`
/// and encodes it.
fn encode_target(grid: &GridDiagram, spec: &GridSpec, target: &[u32]) -> Result<Code, Error> {
    validate_permutation(grid.n(), target, "target")?;
    Ok(spec.encode(target))
}

/// Whether `target` is null-homologous in the D0 complex (no marker may lie
/// in a crossed rectangle's interior).
pub fn null_homologous_d0(
    target: &[u32],
    x: &[u32],
    o: &[u32],
    limits: &Limits,
    cancel: &CancelToken,
) -> Result<bool, Error> {
    null_homologous_d0_with_observer(target, x, o, limits, cancel, &mut Observer::silent())
}

pub fn null_homologous_d0_with_observer(
    target: &[u32],
    x: &[u32],
    o: &[u32],
    limits: &Limits,
    cancel: &CancelToken,
    observer: &mut Observer<'_>,
) -> Result<bool, Error> {
    let grid = GridDiagram::parse(x, o)?;
    let spec = GridSpec::new(grid.n());
    let target_code = encode_target(&grid, &spec, target)?;
    let boundary = |state: &Code| -> HashSet<Code> {
        let mut folded = HashSet::new();
        fold_f2(
            &mut folded,
            base_neighbors(&grid, &spec, state, Classification::D0),
        );
        folded
    };
    is_null_homologous(&target_code, boundary, limits, cancel, observer)
}

/// Whether `target` is null-homologous in the D1 complex (at most one O
/// marker, no X marker, may lie in a crossed rectangle's interior).
pub fn null_homologous_d1(
    target: &[u32],
    x: &[u32],
    o: &[u32],
    limits: &Limits,
    cancel: &CancelToken,
) -> Result<bool, Error> {
    null_homologous_d1_with_observer(target, x, o, limits, cancel, &mut Observer::silent())
}

pub fn null_homologous_d1_with_observer(
    target: &[u32],
    x: &[u32],
    o: &[u32],
    limits: &Limits,
    cancel: &CancelToken,
    observer: &mut Observer<'_>,
) -> Result<bool, Error> {
    let grid = GridDiagram::parse(x, o)?;
    let spec = GridSpec::new(grid.n());
    let target_code = encode_target(&grid, &spec, target)?;
    let boundary = |state: &Code| -> HashSet<Code> {
        let mut folded = HashSet::new();
        fold_f2(
            &mut folded,
            base_neighbors(&grid, &spec, state, Classification::D1),
        );
        folded
    };
    is_null_homologous(&target_code, boundary, limits, cancel, observer)
}

/// Whether `target`, lifted to the identity sheet permutation, is
/// null-homologous in the `n`-fold branched cover's lift complex.
pub fn null_homologous_lift(
    target: &[u32],
    n: usize,
    x: &[u32],
    o: &[u32],
    limits: &Limits,
    cancel: &CancelToken,
) -> Result<bool, Error> {
    null_homologous_lift_with_observer(target, n, x, o, limits, cancel, &mut Observer::silent())
}

pub fn null_homologous_lift_with_observer(
    target: &[u32],
    n: usize,
    x: &[u32],
    o: &[u32],
    limits: &Limits,
    cancel: &CancelToken,
    observer: &mut Observer<'_>,
) -> Result<bool, Error> {
    if n == 0 {
        return Err(Error::invalid_cover_order("cover order must be at least 1"));
    }
    let grid = GridDiagram::parse(x, o)?;
    let spec = GridSpec::new(grid.n());
    let target_code = encode_target(&grid, &spec, target)?;
    let target_lifted = lifted_generator(n, target_code);
    let boundary = |state: &LiftedState| -> HashSet<LiftedState> {
        let mut folded = HashSet::new();
        fold_f2(&mut folded, crate::lift::neighbors(&grid, &spec, n, state));
        folded
    };
    is_null_homologous(&target_lifted, boundary, limits, cancel, observer)
}

/// `lambda^+`: whether `x^+` is null-homologous in D0.
pub fn lambda_plus(x: &[u32], o: &[u32]) -> Result<bool, Error> {
    let grid = GridDiagram::parse(x, o)?;
    null_homologous_d0(&grid.x_plus(), x, o, &Limits::default(), &CancelToken::new())
}

/// `lambda^-`: whether `x^-` is null-homologous in D0.
pub fn lambda_minus(x: &[u32], o: &[u32]) -> Result<bool, Error> {
    let grid = GridDiagram::parse(x, o)?;
    null_homologous_d0(&grid.x_minus(), x, o, &Limits::default(), &CancelToken::new())
}

/// `delta_1 lambda^+`: whether `x^+` is null-homologous in D1.
pub fn delta1_lambda_plus(x: &[u32], o: &[u32]) -> Result<bool, Error> {
    let grid = GridDiagram::parse(x, o)?;
    null_homologous_d1(&grid.x_plus(), x, o, &Limits::default(), &CancelToken::new())
}

/// `delta_1 lambda^-`: whether `x^-` is null-homologous in D1.
pub fn delta1_lambda_minus(x: &[u32], o: &[u32]) -> Result<bool, Error> {
    let grid = GridDiagram::parse(x, o)?;
    null_homologous_d1(&grid.x_minus(), x, o, &Limits::default(), &CancelToken::new())
}

/// `theta_n`: whether `target`, lifted to the identity sheet permutation, is
/// null-homologous in the `n`-fold branched cover's lift complex.
pub fn theta_n(target: &[u32], n: usize, x: &[u32], o: &[u32]) -> Result<bool, Error> {
    null_homologous_lift(target, n, x, o, &Limits::default(), &CancelToken::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unknot grid diagram, arc index 5 (spec §8, scenarios 1-3 and 6).
    const UNKNOT5_X: [u32; 5] = [2, 3, 4, 5, 1];
    const UNKNOT5_O: [u32; 5] = [1, 2, 3, 4, 5];

    // Right-handed trefoil grid diagram, max Thurston-Bennequin, arc index 9
    // (spec §8, scenarios 4-5).
    const TREFOIL9_X: [u32; 9] = [4, 5, 6, 7, 8, 9, 1, 2, 3];
    const TREFOIL9_O: [u32; 9] = [7, 8, 9, 1, 2, 3, 4, 5, 6];

    #[test]
    fn unknot_lambda_plus_is_true() {
        assert!(lambda_plus(&UNKNOT5_X, &UNKNOT5_O).unwrap());
    }

    #[test]
    fn unknot_lambda_minus_is_true() {
        assert!(lambda_minus(&UNKNOT5_X, &UNKNOT5_O).unwrap());
    }

    #[test]
    fn unknot_delta1_lambda_plus_is_false() {
        assert!(!delta1_lambda_plus(&UNKNOT5_X, &UNKNOT5_O).unwrap());
    }

    #[test]
    fn unknot_theta_2_is_true() {
        assert!(theta_n(&UNKNOT5_X, 2, &UNKNOT5_X, &UNKNOT5_O).unwrap());
    }

    #[test]
    fn trefoil_lambda_plus_is_true() {
        assert!(lambda_plus(&TREFOIL9_X, &TREFOIL9_O).unwrap());
    }

    #[test]
    fn trefoil_lambda_minus_is_false() {
        assert!(!lambda_minus(&TREFOIL9_X, &TREFOIL9_O).unwrap());
    }

    #[test]
    fn theta_one_agrees_with_lambda_plus() {
        let grid = GridDiagram::parse(&UNKNOT5_X, &UNKNOT5_O).unwrap();
        let via_theta = theta_n(&grid.x_plus(), 1, &UNKNOT5_X, &UNKNOT5_O).unwrap();
        let via_lambda = lambda_plus(&UNKNOT5_X, &UNKNOT5_O).unwrap();
        assert_eq!(via_theta, via_lambda);
    }

    #[test]
    fn theta_one_agrees_with_lambda_plus_for_trefoil() {
        let grid = GridDiagram::parse(&TREFOIL9_X, &TREFOIL9_O).unwrap();
        let via_theta = theta_n(&grid.x_plus(), 1, &TREFOIL9_X, &TREFOIL9_O).unwrap();
        let via_lambda = lambda_plus(&TREFOIL9_X, &TREFOIL9_O).unwrap();
        assert_eq!(via_theta, via_lambda);
    }

    #[test]
    fn computation_is_idempotent() {
        let first = lambda_plus(&UNKNOT5_X, &UNKNOT5_O).unwrap();
        let second = lambda_plus(&UNKNOT5_X, &UNKNOT5_O).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn cancellation_surfaces_as_an_error() {
        let cancel = CancelToken::new();
        cancel.cancel();
        let err = null_homologous_d0(
            &UNKNOT5_X,
            &UNKNOT5_X,
            &UNKNOT5_O,
            &Limits::default(),
            &cancel,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    #[test]
    fn memory_budget_smaller_than_one_state_is_rejected() {
        let limits = Limits {
            max_bytes: 1,
            progress_every: 0,
        };
        let err = null_homologous_d0(
            &UNKNOT5_X,
            &UNKNOT5_X,
            &UNKNOT5_O,
            &limits,
            &CancelToken::new(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::OutOfMemory { .. }));
    }

    #[test]
    fn smallest_grid_n_equals_two_is_computable() {
        let x = [1u32, 2];
        let o = [2u32, 1];
        assert!(lambda_plus(&x, &o).is_ok());
    }

    #[test]
    fn cover_order_zero_is_rejected() {
        let err = theta_n(&UNKNOT5_X, 0, &UNKNOT5_X, &UNKNOT5_O).unwrap_err();
        assert!(matches!(err, Error::InvalidCoverOrder { .. }));
    }

    #[test]
    fn invalid_grid_is_rejected_before_search_starts() {
        let err = lambda_plus(&[1, 1, 2], &[2, 3, 1]).unwrap_err();
        assert!(matches!(err, Error::InvalidGrid { .. }));
    }
}
