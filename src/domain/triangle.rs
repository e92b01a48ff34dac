use std::ops::Add;

/// Returns `true` when `a`, `b` and `c` can be the sides of a non-degenerate
/// triangle: every pairwise sum must be strictly greater than the third side.
///
/// No precondition checks are made. Negative or zero lengths are accepted and
/// simply fail the inequality against any positive counterpart.
pub fn is_triangle<T>(a: T, b: T, c: T) -> bool
where
    T: Copy + Add<Output = T> + PartialOrd,
{
    a + b > c && a + c > b && b + c > a
}

#[cfg(test)]
mod tests {
    use super::*;

    fn permutations(a: i64, b: i64, c: i64) -> [(i64, i64, i64); 6] {
        [
            (a, b, c),
            (a, c, b),
            (b, a, c),
            (b, c, a),
            (c, a, b),
            (c, b, a),
        ]
    }

    fn sign_flips(a: i64, b: i64, c: i64) -> Vec<(i64, i64, i64)> {
        let mut flips = Vec::new();
        for sa in [1, -1] {
            for sb in [1, -1] {
                for sc in [1, -1] {
                    if (sa, sb, sc) != (1, 1, 1) {
                        flips.push((sa * a, sb * b, sc * c));
                    }
                }
            }
        }
        flips
    }

    #[test]
    fn test_sum_equals_third() {
        for (a, b, c) in permutations(2, 3, 5) {
            assert!(!is_triangle(a, b, c), "({a}, {b}, {c}) is degenerate");
        }
    }

    #[test]
    fn test_sum_smaller_than_third() {
        for (a, b, c) in permutations(2, 3, 6) {
            assert!(!is_triangle(a, b, c));
        }
    }

    #[test]
    fn test_sum_larger_than_third() {
        for (a, b, c) in permutations(2, 3, 3) {
            assert!(is_triangle(a, b, c));
        }
    }

    #[test]
    fn test_negative_sides_never_valid() {
        for (a, b, c) in [(2, 3, 5), (2, 3, 6), (2, 3, 3)] {
            for (x, y, z) in sign_flips(a, b, c) {
                assert!(!is_triangle(x, y, z), "({x}, {y}, {z}) should be rejected");
            }
        }
    }

    #[test]
    fn test_large_numbers() {
        for (a, b, c) in permutations(2000, 3000, 5000) {
            assert!(!is_triangle(a, b, c));
        }
        for (a, b, c) in permutations(2000, 3000, 6000) {
            assert!(!is_triangle(a, b, c));
        }
        for (a, b, c) in permutations(2000, 3000, 3000) {
            assert!(is_triangle(a, b, c));
        }
    }

    #[test]
    fn test_zero_sides() {
        assert!(!is_triangle(0, 0, 0));
        assert!(!is_triangle(0, 3, 3));
        assert!(!is_triangle(3, 0, 3));
    }

    #[test]
    fn test_floats_compare_exactly() {
        assert!(is_triangle(0.5_f64, 0.5, 0.9));
        assert!(!is_triangle(0.5_f64, 0.5, 1.0));
        assert!(is_triangle(1.5_f32, 2.5, 3.5));
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let first = is_triangle(7, 10, 5);
        for _ in 0..100 {
            assert_eq!(is_triangle(7, 10, 5), first);
        }
    }
}
