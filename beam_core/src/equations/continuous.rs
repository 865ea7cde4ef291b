//! # Two-Span Continuous Beam Formulas
//!
//! Beams over three supports (figures 26-32 of the reference tables).
//! Support moments come from the three-moment theorem, specialized to
//! exactly these load cases; reactions follow from span equilibrium with
//! the support moment applied.

/// Two equal spans, uniform load w on the left span only.
///
/// # Formulas
/// - R1 = 7wl/16, R2 = 5wl/8, R3 = -wl/16 (downward)
/// - M(R2) = -wl²/16
#[inline]
pub fn equal_udl_one_reactions(w: f64, l: f64) -> (f64, f64, f64) {
    (7.0 * w * l / 16.0, 5.0 * w * l / 8.0, -w * l / 16.0)
}

/// Support moment for [`equal_udl_one_reactions`].
#[inline]
pub fn equal_udl_one_support_moment(w: f64, l: f64) -> f64 {
    -w * l * l / 16.0
}

/// Two equal spans, point load p at the center of the left span.
///
/// # Formulas
/// - R1 = 13p/32, R2 = 11p/16, R3 = -3p/32 (downward)
/// - M(R2) = -3pl/32
#[inline]
pub fn equal_center_point_one_reactions(p: f64) -> (f64, f64, f64) {
    (13.0 * p / 32.0, 11.0 * p / 16.0, -3.0 * p / 32.0)
}

/// Support moment for [`equal_center_point_one_reactions`].
#[inline]
pub fn equal_center_point_one_support_moment(p: f64, l: f64) -> f64 {
    -3.0 * p * l / 32.0
}

/// Two equal spans, point load p at distance a in the left span
/// (b = l - a).
///
/// # Formulas
/// - R1 = pb(4l² - a(l+a))/(4l³)
/// - R2 = pa(2l² + b(l+a))/(2l³)
/// - R3 = -pab(l+a)/(4l³)
#[inline]
pub fn equal_point_one_reactions(p: f64, a: f64, l: f64) -> (f64, f64, f64) {
    let b = l - a;
    let l3 = l.powi(3);
    let r1 = p * b / (4.0 * l3) * (4.0 * l * l - a * (l + a));
    let r2 = p * a / (2.0 * l3) * (2.0 * l * l + b * (l + a));
    let r3 = -p * a * b / (4.0 * l3) * (l + a);
    (r1, r2, r3)
}

/// Support moment for [`equal_point_one_reactions`].
///
/// # Formulas
/// M(R2) = -pab(l+a)/(4l²)
#[inline]
pub fn equal_point_one_support_moment(p: f64, a: f64, l: f64) -> f64 {
    let b = l - a;
    -p * a * b * (l + a) / (4.0 * l * l)
}

/// Two equal spans, uniform load w on both spans.
///
/// # Formulas
/// - R1 = R3 = 3wl/8, R2 = 10wl/8
/// - M(R2) = -wl²/8
#[inline]
pub fn equal_udl_both_reactions(w: f64, l: f64) -> (f64, f64, f64) {
    (3.0 * w * l / 8.0, 10.0 * w * l / 8.0, 3.0 * w * l / 8.0)
}

/// Support moment for [`equal_udl_both_reactions`].
#[inline]
pub fn equal_udl_both_support_moment(w: f64, l: f64) -> f64 {
    -w * l * l / 8.0
}

/// Two equal spans, two equal point loads p per span placed a from each
/// end support (symmetric about the center support).
///
/// # Formulas (reference table values)
/// - R1 = R3 = p(1 - a²/l²)
/// - R2 (tabulated) = 2pa²/l²
/// - M(R2) = -pa²/l
#[inline]
pub fn equal_two_point_both_end_reaction(p: f64, a: f64, l: f64) -> f64 {
    p * (1.0 - a * a / (l * l))
}

/// Support moment for the symmetric two-loads-per-span case.
#[inline]
pub fn equal_two_point_both_support_moment(p: f64, a: f64, l: f64) -> f64 {
    -p * a * a / l
}

/// Two unequal spans l1, l2, uniform load w on both.
///
/// # Formulas
/// - M2 = -w(l1³ + l2³)/(8(l1 + l2))
/// - R1 = wl1/2 - M2/l1
/// - R2 = w(l1 + l2)/2 + M2(1/l1 + 1/l2)
/// - R3 = wl2/2 - M2/l2
#[inline]
pub fn unequal_udl_support_moment(w: f64, l1: f64, l2: f64) -> f64 {
    -w * (l1.powi(3) + l2.powi(3)) / (8.0 * (l1 + l2))
}

/// Reactions for [`unequal_udl_support_moment`].
#[inline]
pub fn unequal_udl_reactions(w: f64, l1: f64, l2: f64) -> (f64, f64, f64) {
    let m2 = unequal_udl_support_moment(w, l1, l2);
    let r1 = w * l1 / 2.0 - m2 / l1;
    let r2 = w * (l1 + l2) / 2.0 + m2 * (1.0 / l1 + 1.0 / l2);
    let r3 = w * l2 / 2.0 - m2 / l2;
    (r1, r2, r3)
}

/// Two unequal spans, point load at the center of each span (p1 on l1,
/// p2 on l2).
///
/// # Formulas
/// M2 = -(p1·l1² + p2·l2²)/(8(l1 + l2))
#[inline]
pub fn unequal_center_points_support_moment(p1: f64, p2: f64, l1: f64, l2: f64) -> f64 {
    -(p1 * l1 * l1 + p2 * l2 * l2) / (8.0 * (l1 + l2))
}

/// Reactions for [`unequal_center_points_support_moment`].
#[inline]
pub fn unequal_center_points_reactions(p1: f64, p2: f64, l1: f64, l2: f64) -> (f64, f64, f64) {
    let m2 = unequal_center_points_support_moment(p1, p2, l1, l2);
    let r1 = p1 / 2.0 - m2 / l1;
    let r2 = (p1 + p2) / 2.0 + m2 * (1.0 / l1 + 1.0 / l2);
    let r3 = p2 / 2.0 - m2 / l2;
    (r1, r2, r3)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_equal_udl_one_span_equilibrium() {
        let (r1, r2, r3) = equal_udl_one_reactions(1.0, 10.0);
        // Reactions balance the single loaded span
        assert!(approx_eq(r1 + r2 + r3, 10.0, EPSILON));
        assert!(approx_eq(equal_udl_one_support_moment(1.0, 10.0), -6.25, EPSILON));
        // Far support holds the beam down
        assert!(r3 < 0.0);
    }

    #[test]
    fn test_equal_center_point_one_equilibrium() {
        let (r1, r2, r3) = equal_center_point_one_reactions(32.0);
        assert!(approx_eq(r1, 13.0, EPSILON));
        assert!(approx_eq(r2, 22.0, EPSILON));
        assert!(approx_eq(r3, -3.0, EPSILON));
        assert!(approx_eq(r1 + r2 + r3, 32.0, EPSILON));
    }

    #[test]
    fn test_equal_point_one_reduces_to_center_case() {
        let (r1, r2, r3) = equal_point_one_reactions(32.0, 5.0, 10.0);
        let (c1, c2, c3) = equal_center_point_one_reactions(32.0);
        assert!(approx_eq(r1, c1, EPSILON));
        assert!(approx_eq(r2, c2, EPSILON));
        assert!(approx_eq(r3, c3, EPSILON));
        assert!(approx_eq(
            equal_point_one_support_moment(32.0, 5.0, 10.0),
            equal_center_point_one_support_moment(32.0, 10.0),
            EPSILON
        ));
    }

    #[test]
    fn test_equal_udl_both_equilibrium() {
        let (r1, r2, r3) = equal_udl_both_reactions(1.0, 10.0);
        assert!(approx_eq(r1 + r2 + r3, 20.0, EPSILON));
        assert!(approx_eq(equal_udl_both_support_moment(1.0, 10.0), -12.5, EPSILON));
    }

    #[test]
    fn test_unequal_udl_equilibrium() {
        let (r1, r2, r3) = unequal_udl_reactions(1.0, 10.0, 8.0);
        assert!(approx_eq(r1 + r2 + r3, 18.0, EPSILON));
        // Equal spans must recover the -wl²/8 support moment
        assert!(approx_eq(
            unequal_udl_support_moment(1.0, 10.0, 10.0),
            equal_udl_both_support_moment(1.0, 10.0),
            EPSILON
        ));
    }

    #[test]
    fn test_unequal_center_points_equilibrium() {
        let (r1, r2, r3) = unequal_center_points_reactions(10.0, 8.0, 10.0, 12.0);
        assert!(approx_eq(r1 + r2 + r3, 18.0, EPSILON));
    }
}
