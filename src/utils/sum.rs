//! Three ways to sum the integers from 1 to n.
//!
//! Every variant returns `Some(0)` for `n <= 0` and `None` when the sum
//! does not fit in an `i64`.

/// Largest `n` whose sum `n * (n + 1) / 2` fits in an `i64`
pub const MAX_SUM_N: i64 = 4_294_967_295;

/// Deepest recursion [`sum_to_n_recursive`] will attempt
pub const MAX_RECURSION_DEPTH: i64 = 10_000;

/// Recursive sum with an accumulator, `None` past [`MAX_RECURSION_DEPTH`]
pub fn sum_to_n_recursive(n: i64) -> Option<i64> {
    fn go(n: i64, acc: i64) -> Option<i64> {
        if n <= 0 {
            Some(acc)
        } else {
            go(n - 1, acc.checked_add(n)?)
        }
    }

    if n > MAX_RECURSION_DEPTH {
        return None;
    }
    go(n, 0)
}

/// Closed form `n * (n + 1) / 2`
pub fn sum_to_n_formula(n: i64) -> Option<i64> {
    if n <= 0 {
        return Some(0);
    }
    // One of n, n + 1 is even
    let next = n.checked_add(1)?;
    if n % 2 == 0 {
        (n / 2).checked_mul(next)
    } else {
        n.checked_mul(next / 2)
    }
}

/// Plain loop
pub fn sum_to_n_iterative(n: i64) -> Option<i64> {
    if n > MAX_SUM_N {
        return None;
    }
    (1..=n.max(0)).try_fold(0i64, |acc, i| acc.checked_add(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_values() {
        let variants: [fn(i64) -> Option<i64>; 3] =
            [sum_to_n_recursive, sum_to_n_formula, sum_to_n_iterative];
        for f in variants {
            assert_eq!(f(5), Some(15));
            assert_eq!(f(10), Some(55));
            assert_eq!(f(0), Some(0));
            assert_eq!(f(-3), Some(0));
        }
    }

    #[test]
    fn test_formula_range_boundary() {
        assert_eq!(sum_to_n_formula(MAX_SUM_N), Some(9_223_372_034_707_292_160));
        assert_eq!(sum_to_n_formula(MAX_SUM_N + 1), None);
        assert_eq!(sum_to_n_formula(i64::MAX), None);
        assert_eq!(sum_to_n_iterative(MAX_SUM_N + 1), None);
        assert_eq!(sum_to_n_iterative(i64::MAX), None);
    }

    #[test]
    fn test_recursive_depth_bound() {
        assert_eq!(
            sum_to_n_recursive(MAX_RECURSION_DEPTH),
            sum_to_n_formula(MAX_RECURSION_DEPTH)
        );
        assert_eq!(sum_to_n_recursive(MAX_RECURSION_DEPTH + 1), None);
        assert_eq!(sum_to_n_recursive(1_000_000), None);
        assert_eq!(sum_to_n_recursive(i64::MAX), None);
    }

    proptest! {
        #[test]
        fn prop_variants_agree(n in -100i64..5_000) {
            let expected = sum_to_n_formula(n);
            prop_assert_eq!(sum_to_n_iterative(n), expected);
            prop_assert_eq!(sum_to_n_recursive(n), expected);
        }
    }
}
