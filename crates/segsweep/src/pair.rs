//! Segment-pair intersection predicate (open-segment convention).
//!
//! Two segments intersect when they cross, when an endpoint of one lies in the
//! interior of the other, or when they overlap collinearly along a stretch of
//! positive length. Sharing a single endpoint is not an intersection, whether
//! the segments meet at a corner or continue along the same line. Adjacent
//! polygon edges therefore never trigger on their common vertex.
//!
//! Signs are compared via `Scalar::sign` instead of multiplying areas, so
//! integer inputs never overflow in the side tests. All four areas are
//! evaluated directly: an area whose apex is an endpoint of the base segment
//! is then exactly zero in floating point too, which is what keeps adjacent
//! polygon edges from registering as a crossing.

use std::cmp::Ordering;

use crate::primitives::{dot_from, signed_area, Point, Scalar, Segment};

/// True iff `lhs` and `rhs` share a point under the open-segment convention.
///
/// Symmetric in its arguments; a segment intersects itself and its reversal.
pub fn segments_intersect<T: Scalar>(lhs: &Segment<T>, rhs: &Segment<T>) -> bool {
    if lhs.same_as(rhs) {
        return true;
    }

    let area1 = signed_area(lhs.first, lhs.second, rhs.second);
    let area2 = signed_area(lhs.first, lhs.second, rhs.first);
    let (s1, s2) = (area1.sign(), area2.sign());
    if same_strict_side(s1, s2) {
        return false;
    }

    let area3 = signed_area(rhs.first, rhs.second, lhs.first);
    let area4 = signed_area(rhs.first, rhs.second, lhs.second);
    let (s3, s4) = (area3.sign(), area4.sign());
    if same_strict_side(s3, s4) {
        return false;
    }

    if straddles(s1, s2) || straddles(s3, s4) {
        return true;
    }

    if [s1, s2, s3, s4].iter().all(|s| *s == Ordering::Equal) {
        return collinear_overlap(lhs, rhs);
    }
    // only a shared endpoint at a corner
    false
}

#[inline]
fn same_strict_side(a: Ordering, b: Ordering) -> bool {
    a != Ordering::Equal && a == b
}

#[inline]
fn straddles(a: Ordering, b: Ordering) -> bool {
    a != Ordering::Equal && b == a.reverse()
}

/// Collinear segments overlap iff some endpoint lies strictly inside the other.
fn collinear_overlap<T: Scalar>(lhs: &Segment<T>, rhs: &Segment<T>) -> bool {
    strictly_inside(rhs.first, lhs)
        || strictly_inside(rhs.second, lhs)
        || strictly_inside(lhs.first, rhs)
        || strictly_inside(lhs.second, rhs)
}

#[inline]
fn strictly_inside<T: Scalar>(p: Point<T>, s: &Segment<T>) -> bool {
    dot_from(p, s.first, s.second).sign() == Ordering::Less
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seg<T: Scalar>(a: (T, T), b: (T, T)) -> Segment<T> {
        Segment::new(Point::new(a.0, a.1), Point::new(b.0, b.1))
    }

    fn check_both(a: &Segment<f64>, b: &Segment<f64>, expected: bool) {
        assert_eq!(segments_intersect(a, b), expected, "{a:?} x {b:?}");
        assert_eq!(segments_intersect(b, a), expected, "{b:?} x {a:?}");
    }

    #[test]
    fn perpendicular_cross() {
        let h = seg((-1.0, 0.0), (1.0, 0.0));
        check_both(&h, &seg((0.0, -1.0), (0.0, 1.0)), true);
        check_both(&h, &seg((0.0, 0.5), (0.5, 1.5)), false);
    }

    #[test]
    fn identity_and_reversal() {
        let s = seg((0.0, 0.0), (3.0, 1.0));
        check_both(&s, &s, true);
        check_both(&s, &s.reversed(), true);
        let i = seg((1i64, 2), (5, -3));
        assert!(segments_intersect(&i, &i.reversed()));
    }

    #[test]
    fn shared_corner_is_not_an_intersection() {
        let a = seg((0.0, 0.0), (1.0, 0.0));
        check_both(&a, &seg((1.0, 0.0), (1.0, 1.0)), false);
        check_both(&a, &seg((0.0, 0.0), (-1.0, 2.0)), false);
        // reversed orientations give the same answer
        check_both(&a.reversed(), &seg((1.0, 1.0), (1.0, 0.0)), false);
    }

    #[test]
    fn shared_vertex_far_from_origin() {
        // consecutive polygon edges; cancellation in the areas must not turn
        // the shared vertex into a crossing
        let a = seg((119.821613, 32.33176), (82.761013, 37.678362));
        let b = seg((82.761013, 37.678362), (66.289636, 47.034916));
        check_both(&a, &b, false);
        check_both(&a.translated(1000.0, -5000.0), &b.translated(1000.0, -5000.0), false);
    }

    #[test]
    fn endpoint_on_interior_counts() {
        // T-junction
        let base = seg((-1.0, 0.0), (1.0, 0.0));
        check_both(&base, &seg((0.0, 0.0), (0.0, 1.0)), true);
        check_both(&base, &seg((0.0, 2.0), (0.0, 0.0)), true);
    }

    #[test]
    fn collinear_cases() {
        let a = seg((0i64, 0), (2, 0));
        // disjoint projections
        assert!(!segments_intersect(&a, &seg((3, 0), (5, 0))));
        assert!(!segments_intersect(&seg((5, 0), (3, 0)), &a));
        // positive-length overlap
        assert!(segments_intersect(&a, &seg((1, 0), (4, 0))));
        assert!(segments_intersect(&seg((4, 0), (1, 0)), &a));
        // containment, including a shared endpoint
        assert!(segments_intersect(&a, &seg((0, 0), (1, 0))));
        assert!(segments_intersect(&seg((-1, 0), (3, 0)), &a));
        // touching at exactly one endpoint
        assert!(!segments_intersect(&a, &seg((2, 0), (4, 0))));
        assert!(!segments_intersect(&seg((0, 0), (-4, 0)), &a));
    }

    #[test]
    fn collinear_diagonal_and_vertical() {
        let d = seg((0i32, 0), (4, 4));
        assert!(segments_intersect(&d, &seg((2, 2), (6, 6))));
        assert!(!segments_intersect(&d, &seg((5, 5), (6, 6))));
        let v = seg((1i32, 0), (1, 3));
        assert!(segments_intersect(&v, &seg((1, 2), (1, 5))));
        assert!(!segments_intersect(&v, &seg((1, 3), (1, 5))));
    }

    #[test]
    fn collinear_overlap_under_rounding() {
        // near the origin the rounding stays inside the tolerance
        let a = seg((0.1, 0.1), (0.7, 0.7));
        let b = seg((0.4, 0.4), (1.0, 1.0));
        check_both(&a, &b, true);
        // farther out, one area of a collinear pair rounds to -7.1e-15, beyond the
        // absolute tolerance, so the pair reads as a corner touch
        let a = seg((-20.3, -6.3), (-27.3, -13.3));
        let b = seg((-13.3, 0.7), (-27.3, -13.3));
        assert!(signed_area::<f64>(b.first, b.second, a.first).abs() > f64::EPSILON);
        check_both(&a, &b, false);
        let exact_a = seg((-203i64, -63), (-273, -133));
        let exact_b = seg((-133i64, 7), (-273, -133));
        assert!(segments_intersect(&exact_a, &exact_b));
    }

    #[test]
    fn parallel_distinct_lines() {
        let a = seg((0.0, 0.0), (2.0, 0.0));
        check_both(&a, &seg((0.0, 1.0), (2.0, 1.0)), false);
    }

    #[test]
    fn far_miss_on_one_side() {
        let a = seg((0i64, 0), (10, 0));
        assert!(!segments_intersect(&a, &seg((3, 1), (7, 5))));
        // lines cross but outside rhs
        assert!(!segments_intersect(&a, &seg((20, -5), (20, 5))));
    }

    #[test]
    fn idempotent() {
        let a = seg((0.25, 0.5), (3.5, -1.0));
        let b = seg((1.0, -2.0), (1.5, 2.0));
        let first = segments_intersect(&a, &b);
        for _ in 0..10 {
            assert_eq!(segments_intersect(&a, &b), first);
        }
        assert!(first);
    }

    #[test]
    fn method_form_matches() {
        let a = seg((-1.0, 0.0), (1.0, 0.0));
        let b = seg((0.0, -1.0), (0.0, 1.0));
        assert_eq!(a.intersects(&b), segments_intersect(&a, &b));
    }

    fn small_segment() -> impl Strategy<Value = Segment<i64>> {
        (-8i64..8, -8i64..8, -8i64..8, -8i64..8)
            .prop_map(|(a, b, c, d)| Segment::new(Point::new(a, b), Point::new(c, d)))
    }

    proptest! {
        #[test]
        fn symmetric(a in small_segment(), b in small_segment()) {
            prop_assert_eq!(segments_intersect(&a, &b), segments_intersect(&b, &a));
        }

        #[test]
        fn orientation_of_inputs_is_irrelevant(a in small_segment(), b in small_segment()) {
            let base = segments_intersect(&a, &b);
            prop_assert_eq!(segments_intersect(&a.reversed(), &b), base);
            prop_assert_eq!(segments_intersect(&a, &b.reversed()), base);
        }

        #[test]
        fn translation_invariant_i64(
            a in small_segment(),
            b in small_segment(),
            dx in -1_000_000i64..1_000_000,
            dy in -1_000_000i64..1_000_000,
        ) {
            prop_assert_eq!(
                segments_intersect(&a.translated(dx, dy), &b.translated(dx, dy)),
                segments_intersect(&a, &b)
            );
        }

        #[test]
        fn translation_invariant_f64_general_position(
            c in proptest::array::uniform8(-10.0f64..10.0),
            dx in -100.0f64..100.0,
            dy in -100.0f64..100.0,
        ) {
            let a = seg((c[0], c[1]), (c[2], c[3]));
            let b = seg((c[4], c[5]), (c[6], c[7]));
            // keep clear of near-degenerate configurations, where tolerance
            // interacts with magnitude
            let margin = 1e-6;
            let areas = [
                signed_area(a.first, a.second, b.first),
                signed_area(a.first, a.second, b.second),
                signed_area(b.first, b.second, a.first),
                signed_area(b.first, b.second, a.second),
            ];
            prop_assume!(areas.iter().all(|v| v.abs() > margin));
            prop_assert_eq!(
                segments_intersect(&a.translated(dx, dy), &b.translated(dx, dy)),
                segments_intersect(&a, &b)
            );
        }
    }
}
