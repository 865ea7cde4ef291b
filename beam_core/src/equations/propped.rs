//! # Propped Cantilever Formulas
//!
//! Beam fixed at the left end (x=0), simply supported at the right -
//! statically indeterminate to one degree. Closed forms for exactly these
//! load cases (figures 15-17 of the reference tables); the end moments
//! are fixed results, not re-derivable from equilibrium alone.

/// Reactions for uniform load w over the full span.
///
/// # Formulas
/// - R1 (fixed end) = 5wl/8
/// - R2 (support)   = 3wl/8
#[inline]
pub fn udl_reactions(w: f64, l: f64) -> (f64, f64) {
    (5.0 * w * l / 8.0, 3.0 * w * l / 8.0)
}

/// Fixed-end moment for uniform load w over the full span.
///
/// # Formulas
/// M(fixed) = -wl²/8 (hogging)
#[inline]
pub fn udl_fixed_end_moment(w: f64, l: f64) -> f64 {
    -w * l * l / 8.0
}

/// Moment at x for uniform load w over the full span, standard
/// convention (sagging positive).
///
/// # Formulas
/// M(x) = M_fixed + R1·x - wx²/2, crossing +9wl²/128 at x = 3l/8
#[inline]
pub fn udl_moment(w: f64, l: f64, x: f64) -> f64 {
    let (r1, _) = udl_reactions(w, l);
    udl_fixed_end_moment(w, l) + r1 * x - w * x * x / 2.0
}

/// Reactions for point load p at midspan.
///
/// # Formulas
/// - R1 (fixed end) = 11p/16
/// - R2 (support)   = 5p/16
#[inline]
pub fn center_point_reactions(p: f64) -> (f64, f64) {
    (11.0 * p / 16.0, 5.0 * p / 16.0)
}

/// Fixed-end moment for point load p at midspan.
///
/// # Formulas
/// M(fixed) = -3pl/16 (hogging); under the load M = +5pl/32
#[inline]
pub fn center_point_fixed_end_moment(p: f64, l: f64) -> f64 {
    -3.0 * p * l / 16.0
}

/// Reactions for point load p at distance a from the fixed end
/// (b = l - a).
///
/// # Formulas
/// - R1 (fixed end) = pb²(l+2a)/(2l³)
/// - R2 (support)   = pa²(3l-a)/(2l³)
#[inline]
pub fn point_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    let r1 = p * b * b * (l + 2.0 * a) / (2.0 * l.powi(3));
    let r2 = p * a * a * (3.0 * l - a) / (2.0 * l.powi(3));
    (r1, r2)
}

/// Fixed-end moment for point load p at distance a from the fixed end.
///
/// # Formulas
/// M(fixed) = -pab²/l² (hogging)
#[inline]
pub fn point_fixed_end_moment(p: f64, a: f64, l: f64) -> f64 {
    let b = l - a;
    -p * a * b * b / (l * l)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_udl_reactions_sum_to_load() {
        let (r1, r2) = udl_reactions(1.0, 10.0);
        assert!(approx_eq(r1, 6.25, EPSILON));
        assert!(approx_eq(r2, 3.75, EPSILON));
        assert!(approx_eq(r1 + r2, 10.0, EPSILON));
    }

    #[test]
    fn test_udl_moment_boundary_values() {
        // Hogging -wl²/8 at the wall, zero at the simple support
        assert!(approx_eq(udl_moment(1.0, 10.0, 0.0), -12.5, EPSILON));
        assert!(approx_eq(udl_moment(1.0, 10.0, 10.0), 0.0, EPSILON));
        // +9wl²/128 at x = 3l/8
        assert!(approx_eq(udl_moment(1.0, 10.0, 3.75), 9.0 * 100.0 / 128.0, EPSILON));
    }

    #[test]
    fn test_center_point_closed_forms() {
        let (r1, r2) = center_point_reactions(16.0);
        assert!(approx_eq(r1, 11.0, EPSILON));
        assert!(approx_eq(r2, 5.0, EPSILON));
        assert!(approx_eq(center_point_fixed_end_moment(16.0, 10.0), -30.0, EPSILON));
    }

    #[test]
    fn test_point_anywhere_reduces_to_center_case() {
        // a = l/2 must reproduce the midspan closed forms
        let (r1, r2) = point_reactions(10.0, 5.0, 10.0);
        let (c1, c2) = center_point_reactions(10.0);
        assert!(approx_eq(r1, c1, EPSILON));
        assert!(approx_eq(r2, c2, EPSILON));
        assert!(approx_eq(
            point_fixed_end_moment(10.0, 5.0, 10.0),
            center_point_fixed_end_moment(10.0, 10.0),
            EPSILON
        ));
    }

    #[test]
    fn test_point_reactions_equilibrium() {
        let (r1, r2) = point_reactions(10.0, 4.0, 10.0);
        assert!(approx_eq(r1 + r2, 10.0, EPSILON));
    }
}
