//! # Cantilever Beam Formulas
//!
//! Fixed at the left end (x=0), free at the right (x=l). Positions are
//! measured from the fixed end (figures 12-14 of the reference tables).

/// Shear at x for uniform load w over the full length.
///
/// ```text
///    ↓↓↓↓↓↓↓↓↓↓↓↓↓ w
///  ▌═════════════
///  ▌←─────l─────→
/// ```
///
/// # Formulas
/// V(x) = w(l-x), peaking at wl at the fixed end
#[inline]
pub fn udl_shear(w: f64, l: f64, x: f64) -> f64 {
    w * (l - x)
}

/// Moment magnitude at x for uniform load w over the full length.
///
/// # Formulas
/// M(x) = w(l-x)²/2, peaking at wl²/2 at the fixed end (hogging)
#[inline]
pub fn udl_moment(w: f64, l: f64, x: f64) -> f64 {
    w * (l - x).powi(2) / 2.0
}

/// Moment magnitude at x for point load p at the free end.
///
/// # Formulas
/// M(x) = p(l-x), peaking at pl at the fixed end (hogging)
#[inline]
pub fn end_point_moment(p: f64, l: f64, x: f64) -> f64 {
    p * (l - x)
}

/// Moment magnitude at x for point load p at distance a from the fixed
/// end. Beyond the load the cantilever is unstressed.
///
/// # Formulas
/// - M(x) = p(a-x)    for x < a
/// - M(x) = 0         for x >= a
#[inline]
pub fn interior_point_moment(p: f64, a: f64, x: f64) -> f64 {
    if x < a {
        p * (a - x)
    } else {
        0.0
    }
}
