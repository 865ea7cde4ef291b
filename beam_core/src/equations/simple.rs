//! # Simply-Supported Beam Formulas
//!
//! Pin support at left (x=0), roller at right (x=l). Covers uniform,
//! partial-uniform, triangular and concentrated loading (figures 1-11 of
//! the reference tables).

/// Reactions for uniform load w over the full span.
///
/// ```text
///    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
///    ═════════════════
///    △                △
///   R1  ←─────l─────→ R2
/// ```
///
/// # Formulas
/// R1 = R2 = wl/2
#[inline]
pub fn udl_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// Moment at x for uniform load w over the full span.
///
/// # Formulas
/// M(x) = wx(l-x)/2, peaking at wl²/8 at midspan
#[inline]
pub fn udl_moment(w: f64, l: f64, x: f64) -> f64 {
    w * x / 2.0 * (l - x)
}

/// Reactions for uniform load w over a segment of length b starting at a.
///
/// # Formulas
/// - R1 = wb/(2l) · (2(l-a-b) + b)
/// - R2 = wb/(2l) · (2a + b)
#[inline]
pub fn partial_udl_reactions(w: f64, a: f64, b: f64, l: f64) -> (f64, f64) {
    let c = l - a - b;
    let r1 = w * b / (2.0 * l) * (2.0 * c + b);
    let r2 = w * b / (2.0 * l) * (2.0 * a + b);
    (r1, r2)
}

/// Moment at x for uniform load w over `[a, a+b]`.
///
/// # Formulas
/// - M(x) = R1·x                    for x < a
/// - M(x) = R1·x - w(x-a)²/2        for a <= x <= a+b
/// - M(x) = R2·(l-x)                for x > a+b
#[inline]
pub fn partial_udl_moment(w: f64, a: f64, b: f64, l: f64, x: f64) -> f64 {
    let (r1, r2) = partial_udl_reactions(w, a, b, l);
    if x < a {
        r1 * x
    } else if x <= a + b {
        r1 * x - w / 2.0 * (x - a).powi(2)
    } else {
        r2 * (l - x)
    }
}

/// Reactions for uniform load w over length a at the left end.
///
/// # Formulas
/// - R1 = wa(2l-a)/(2l)
/// - R2 = wa²/(2l)
#[inline]
pub fn end_udl_reactions(w: f64, a: f64, l: f64) -> (f64, f64) {
    let r1 = w * a / (2.0 * l) * (2.0 * l - a);
    let r2 = w * a * a / (2.0 * l);
    (r1, r2)
}

/// Reactions for uniform loads at each end: w1 over length a at the left,
/// w2 over length c at the right.
///
/// # Formulas
/// - R1 = (w1·a(2l-a) + w2·c²) / (2l)
/// - R2 = (w2·c(2l-c) + w1·a²) / (2l)
#[inline]
pub fn two_end_udl_reactions(w1: f64, w2: f64, a: f64, c: f64, l: f64) -> (f64, f64) {
    let r1 = (w1 * a * (2.0 * l - a) + w2 * c * c) / (2.0 * l);
    let r2 = (w2 * c * (2.0 * l - c) + w1 * a * a) / (2.0 * l);
    (r1, r2)
}

/// Reactions for load increasing uniformly from zero at the left support
/// to w_peak at the right support.
///
/// # Formulas
/// - R1 = w₀l/6 (light end)
/// - R2 = w₀l/3 (heavy end)
#[inline]
pub fn triangular_reactions(w_peak: f64, l: f64) -> (f64, f64) {
    (w_peak * l / 6.0, w_peak * l / 3.0)
}

/// Shear at x for the triangular load of [`triangular_reactions`].
///
/// # Formulas
/// V(x) = w₀l/6 - w₀x²/(2l)
#[inline]
pub fn triangular_shear(w_peak: f64, l: f64, x: f64) -> f64 {
    w_peak * l / 6.0 - w_peak * x * x / (2.0 * l)
}

/// Moment at x for the triangular load of [`triangular_reactions`].
///
/// # Formulas
/// M(x) = w₀x(l² - x²)/(6l), peaking at w₀l²/(9√3) at x = l/√3
#[inline]
pub fn triangular_moment(w_peak: f64, l: f64, x: f64) -> f64 {
    w_peak * x / (6.0 * l) * (l * l - x * x)
}

/// Reaction for load increasing uniformly from zero at each support to
/// w_peak at the center (symmetric, so R1 = R2).
///
/// # Formulas
/// R = w₀l/4
#[inline]
pub fn center_peak_reaction(w_peak: f64, l: f64) -> f64 {
    w_peak * l / 4.0
}

/// Shear at x on the first half for the center-peaked triangular load,
/// where the intensity is w(x) = 2w₀x/l for x < l/2.
///
/// # Formulas
/// V(x) = w₀l/4 - 2w₀x²/l²     for x <= l/2
#[inline]
pub fn center_peak_shear_half(w_peak: f64, l: f64, x: f64) -> f64 {
    center_peak_reaction(w_peak, l) - 2.0 * w_peak * x * x / (l * l)
}

/// Moment at x on the first half for the center-peaked triangular load.
///
/// # Formulas
/// M(x) = Rx - 2w₀x³/(3l²)     for x <= l/2, peaking at w₀l²/12
#[inline]
pub fn center_peak_moment_half(w_peak: f64, l: f64, x: f64) -> f64 {
    center_peak_reaction(w_peak, l) * x - 2.0 * w_peak * x.powi(3) / (3.0 * l * l)
}

/// Reactions for point load p at distance a from the left support.
///
/// ```text
///        p
///        ↓
///    ────┬────────────
///    △   a            △
///   R1  ←──────l─────→ R2
/// ```
///
/// # Formulas
/// - R1 = p(l-a)/l
/// - R2 = pa/l
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    (p * (l - a) / l, p * a / l)
}

/// Maximum moment for a point load at a, occurring under the load.
///
/// # Formulas
/// M_max = pa(l-a)/l
#[inline]
pub fn point_load_max_moment(p: f64, a: f64, l: f64) -> f64 {
    p * a * (l - a) / l
}

/// Reactions for two point loads p1 at x1 and p2 at x2 (superposition).
///
/// # Formulas
/// - R1 = (p1(l-x1) + p2(l-x2)) / l
/// - R2 = (p1·x1 + p2·x2) / l
#[inline]
pub fn two_point_reactions(p1: f64, x1: f64, p2: f64, x2: f64, l: f64) -> (f64, f64) {
    let r1 = (p1 * (l - x1) + p2 * (l - x2)) / l;
    let r2 = (p1 * x1 + p2 * x2) / l;
    (r1, r2)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_udl_reactions_and_peak_moment() {
        let (r1, r2) = udl_reactions(1.0, 10.0);
        assert!(approx_eq(r1, 5.0, EPSILON));
        assert!(approx_eq(r2, 5.0, EPSILON));
        // wl²/8 = 12.5 at midspan
        assert!(approx_eq(udl_moment(1.0, 10.0, 5.0), 12.5, EPSILON));
        assert!(approx_eq(udl_moment(1.0, 10.0, 0.0), 0.0, EPSILON));
    }

    #[test]
    fn test_partial_udl_equilibrium() {
        // w=1 over [2, 8] of a 12 m span: total load 6
        let (r1, r2) = partial_udl_reactions(1.0, 2.0, 6.0, 12.0);
        assert!(approx_eq(r1 + r2, 6.0, EPSILON));
        // Moment continuous at the segment boundaries
        let before = partial_udl_moment(1.0, 2.0, 6.0, 12.0, 2.0 - 1e-9);
        let after = partial_udl_moment(1.0, 2.0, 6.0, 12.0, 2.0 + 1e-9);
        assert!(approx_eq(before, after, 1e-6));
    }

    #[test]
    fn test_end_udl_reactions() {
        // w=1 over 6 m at the left end of a 10 m span
        let (r1, r2) = end_udl_reactions(1.0, 6.0, 10.0);
        assert!(approx_eq(r1, 6.0 / 20.0 * 14.0, EPSILON)); // wa(2l-a)/2l = 4.2
        assert!(approx_eq(r2, 1.8, EPSILON)); // wa²/2l
        assert!(approx_eq(r1 + r2, 6.0, EPSILON));
    }

    #[test]
    fn test_two_end_udl_equilibrium() {
        let (r1, r2) = two_end_udl_reactions(1.0, 0.8, 4.0, 5.0, 15.0);
        assert!(approx_eq(r1 + r2, 1.0 * 4.0 + 0.8 * 5.0, EPSILON));
    }

    #[test]
    fn test_triangular_reactions_split_one_third_two_thirds() {
        let (r1, r2) = triangular_reactions(10.0, 10.0);
        assert!(approx_eq(r1, 100.0 / 6.0, EPSILON));
        assert!(approx_eq(r2, 100.0 / 3.0, EPSILON));
        // Total load = w₀l/2
        assert!(approx_eq(r1 + r2, 50.0, EPSILON));
        // Shear passes through zero at x = l/√3
        let x0 = 10.0 / 3.0_f64.sqrt();
        assert!(approx_eq(triangular_shear(10.0, 10.0, x0), 0.0, 1e-9));
    }

    #[test]
    fn test_center_peak_totals() {
        // Total load = w₀l/2, shared equally
        let r = center_peak_reaction(5.0, 10.0);
        assert!(approx_eq(2.0 * r, 25.0, EPSILON));
        // Shear zero at midspan, peak moment w₀l²/12 there
        assert!(approx_eq(center_peak_shear_half(5.0, 10.0, 5.0), 0.0, EPSILON));
        assert!(approx_eq(
            center_peak_moment_half(5.0, 10.0, 5.0),
            5.0 * 100.0 / 12.0,
            EPSILON
        ));
    }

    #[test]
    fn test_point_load_reactions() {
        let (r1, r2) = point_load_reactions(10.0, 3.0, 10.0);
        assert!(approx_eq(r1, 7.0, EPSILON));
        assert!(approx_eq(r2, 3.0, EPSILON));
        // M_max = Pab/l = 10*3*7/10 = 21
        assert!(approx_eq(point_load_max_moment(10.0, 3.0, 10.0), 21.0, EPSILON));
    }

    #[test]
    fn test_two_point_reactions_superpose() {
        let (r1, r2) = two_point_reactions(8.0, 4.0, 6.0, 9.0, 15.0);
        let (s1, s2) = point_load_reactions(8.0, 4.0, 15.0);
        let (t1, t2) = point_load_reactions(6.0, 9.0, 15.0);
        assert!(approx_eq(r1, s1 + t1, EPSILON));
        assert!(approx_eq(r2, s2 + t2, EPSILON));
    }
}
