//! # Fixed-Both-Ends Beam Formulas
//!
//! Both ends fully restrained - statically indeterminate. Closed forms
//! for figures 23-25 of the reference tables.

/// Reactions for uniform load w over the full span.
///
/// # Formulas
/// R1 = R2 = wl/2
#[inline]
pub fn udl_reactions(w: f64, l: f64) -> (f64, f64) {
    let r = w * l / 2.0;
    (r, r)
}

/// Moment at x for uniform load w, standard convention.
///
/// # Formulas
/// M(x) = (w/12)(6lx - l² - 6x²)
///
/// - At the ends: -wl²/12 (hogging)
/// - At midspan:  +wl²/24 (sagging)
#[inline]
pub fn udl_moment(w: f64, l: f64, x: f64) -> f64 {
    w / 12.0 * (6.0 * l * x - l * l - 6.0 * x * x)
}

/// Moment at x on the first half for point load p at midspan.
///
/// # Formulas
/// M(x) = (p/8)(4x - l)     for x <= l/2
///
/// End and center moments are equal and opposite: ±pl/8.
#[inline]
pub fn center_point_moment_half(p: f64, l: f64, x: f64) -> f64 {
    p / 8.0 * (4.0 * x - l)
}

/// Reactions for point load p at distance a from the left end
/// (b = l - a).
///
/// # Formulas
/// - R1 = pb²(3a+b)/l³
/// - R2 = pa²(a+3b)/l³
#[inline]
pub fn point_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    let r1 = p * b * b * (3.0 * a + b) / l.powi(3);
    let r2 = p * a * a * (a + 3.0 * b) / l.powi(3);
    (r1, r2)
}

/// End moments for point load p at distance a from the left end.
///
/// # Formulas
/// - M1 (left)  = -pab²/l²
/// - M2 (right) = -pa²b/l²
///
/// Under the load: M = +2pa²b²/l³.
#[inline]
pub fn point_end_moments(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    let m1 = -p * a * b * b / (l * l);
    let m2 = -p * a * a * b / (l * l);
    (m1, m2)
}
