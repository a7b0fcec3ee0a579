//! Shared helpers for property tests (codec round-trip, `∂² = 0`).

/// The `rank`-th permutation of `{1,...,n}` in Lehmer-code order.
/// `rank` is taken modulo `n!`, so any `u64` is a valid input.
pub(crate) fn nth_permutation(n: usize, mut rank: u64) -> Vec<u32> {
    let mut factorial: u64 = 1;
    for k in 1..=n as u64 {
        factorial = factorial.saturating_mul(k);
    }
    if factorial > 0 {
        rank %= factorial.max(1);
    }
    let mut pool: Vec<u32> = (1..=n as u32).collect();
    let mut out = Vec::with_capacity(n);
    let mut remaining_factorial: u64 = factorial;
    for i in 0..n {
        remaining_factorial /= (n - i) as u64;
        let idx = if remaining_factorial == 0 {
            0
        } else {
            (rank / remaining_factorial) as usize
        };
        rank %= remaining_factorial.max(1);
        out.push(pool.remove(idx));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nth_permutation_is_always_a_valid_permutation() {
        for n in 1..=6 {
            for rank in 0..30u64 {
                let perm = nth_permutation(n, rank);
                assert_eq!(perm.len(), n);
                let set: HashSet<u32> = perm.iter().copied().collect();
                assert_eq!(set.len(), n);
                assert!(perm.iter().all(|&v| v >= 1 && v as usize <= n));
            }
        }
    }

    #[test]
    fn distinct_small_ranks_give_distinct_permutations() {
        let n = 5;
        let factorial: u64 = (1..=n as u64).product();
        let mut seen = HashSet::new();
        for rank in 0..factorial {
            seen.insert(nth_permutation(n, rank));
        }
        assert_eq!(seen.len(), factorial as usize);
    }
}
