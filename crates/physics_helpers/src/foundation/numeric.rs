//! Scalar helpers: range checks, comparators and negation
//!
//! Each helper is generic, so one function covers both the integer and the
//! floating point variants.

use std::cmp::Ordering;
use std::ops::Neg;

/// Returns true if `value` lies in the inclusive range `[min, max]`
///
/// Older versions of this helper tested `value < max || value > min`, which
/// holds for almost every input. This is the intended inclusive check.
///
/// An empty range (`min > max`) contains nothing. NaN is never in range.
pub fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    min <= value && value <= max
}

/// Comparator that orders values from largest to smallest
///
/// Returns `Greater` when `a < b`, `Less` when `a > b` and `Equal`
/// otherwise, including when the values are incomparable (NaN). Cast the
/// result `as i32` to get `1`, `-1` or `0`.
///
/// ```
/// use physics_helpers::foundation::numeric::compare_descending;
///
/// let mut scores = vec![1, 3, 2];
/// scores.sort_by(compare_descending);
/// assert_eq!(scores, vec![3, 2, 1]);
/// ```
pub fn compare_descending<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Greater
    } else if a > b {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Flip the sign of a value
pub fn negate<T: Neg<Output = T>>(value: T) -> T {
    -value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_inclusive() {
        assert!(in_range(5, 0, 10));
        assert!(in_range(0, 0, 10));
        assert!(in_range(10, 0, 10));
        assert!(!in_range(-1, 0, 10));
        assert!(!in_range(11, 0, 10));

        assert!(in_range(0.5_f32, 0.0, 1.0));
        assert!(!in_range(1.000_1_f32, 0.0, 1.0));
    }

    #[test]
    fn test_in_range_rejects_what_the_or_predicate_accepted() {
        // `value < max || value > min` accepted both of these
        assert!(!in_range(100, 0, 10));
        assert!(!in_range(-100, 0, 10));
    }

    #[test]
    fn test_in_range_edge_cases() {
        assert!(!in_range(5, 10, 0));
        assert!(!in_range(f32::NAN, 0.0, 1.0));
        assert!(in_range(3, 3, 3));
    }

    #[test]
    fn test_compare_descending_values() {
        assert_eq!(compare_descending(&1, &2) as i32, 1);
        assert_eq!(compare_descending(&2, &1) as i32, -1);
        assert_eq!(compare_descending(&2, &2) as i32, 0);

        assert_eq!(compare_descending(&0.5_f32, &1.5), Ordering::Greater);
        assert_eq!(compare_descending(&f32::NAN, &1.0), Ordering::Equal);
    }

    #[test]
    fn test_compare_descending_is_antisymmetric() {
        let values = [-3.0_f64, -0.5, 0.0, 0.5, 2.0, 7.25];
        for a in &values {
            for b in &values {
                assert_eq!(compare_descending(a, b), compare_descending(b, a).reverse());
            }
        }
    }

    #[test]
    fn test_compare_descending_sorts() {
        let mut ints = vec![1, 3, 2];
        ints.sort_by(compare_descending);
        assert_eq!(ints, vec![3, 2, 1]);

        let mut floats = vec![0.1_f32, -4.0, 9.5, 2.25];
        floats.sort_by(compare_descending);
        assert_eq!(floats, vec![9.5, 2.25, 0.1, -4.0]);
    }

    #[test]
    fn test_negate() {
        assert_eq!(negate(5), -5);
        assert_eq!(negate(-3.5), 3.5);
        assert_eq!(negate(0_i64), 0);
    }
}
