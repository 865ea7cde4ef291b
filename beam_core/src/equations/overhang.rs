//! # Overhanging Beam Formulas
//!
//! Simple spans with cantilevered overhangs beyond one or both supports
//! (figures 18-22 of the reference tables). The span runs from the left
//! support; overhang lengths extend past it.

/// Reactions for uniform load w over span l and right overhang a.
///
/// ```text
///    ↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓↓ w
///    ═══════════╦════
///    △          △
///   R1 ←──l──→ R2 ←a→
/// ```
///
/// # Formulas
/// - R1 = w(l² - a²)/(2l)
/// - R2 = w(l + a)²/(2l)
///
/// A long overhang (a > l) drives R1 negative: the left support holds
/// the beam down.
#[inline]
pub fn udl_full_reactions(w: f64, l: f64, a: f64) -> (f64, f64) {
    let r1 = w / (2.0 * l) * (l * l - a * a);
    let r2 = w / (2.0 * l) * (l + a).powi(2);
    (r1, r2)
}

/// Reactions for uniform load w on the overhang a only.
///
/// # Formulas
/// - R1 = -wa²/(2l) (downward)
/// - R2 = wa(2l + a)/(2l)
#[inline]
pub fn udl_overhang_reactions(w: f64, l: f64, a: f64) -> (f64, f64) {
    let r1 = -w * a * a / (2.0 * l);
    let r2 = w * a / (2.0 * l) * (2.0 * l + a);
    (r1, r2)
}

/// Reactions for point load p at the overhang tip.
///
/// # Formulas
/// - R1 = -pa/l (downward)
/// - R2 = p(l + a)/l
#[inline]
pub fn tip_point_reactions(p: f64, l: f64, a: f64) -> (f64, f64) {
    (-p * a / l, p * (l + a) / l)
}

/// Reactions for uniform load w over the full length of a beam
/// overhanging both supports: left overhang a, span l, right overhang c.
///
/// # Formulas
/// - R1 = wl/2 + wa - wc²/(2l) + wa²/(2l)
/// - R2 = wl/2 + wc - wa²/(2l) + wc²/(2l)
#[inline]
pub fn double_udl_reactions(w: f64, l: f64, a: f64, c: f64) -> (f64, f64) {
    let r1 = w * l / 2.0 + w * a - w * c * c / (2.0 * l) + w * a * a / (2.0 * l);
    let r2 = w * l / 2.0 + w * c - w * a * a / (2.0 * l) + w * c * c / (2.0 * l);
    (r1, r2)
}
