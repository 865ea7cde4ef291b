//! # Piecewise Curve Sampling
//!
//! Turns a closed-form scalar function into a plottable point sequence by
//! evaluating it at evenly spaced positions. Non-linear segments
//! (parabolic under uniform load, cubic under triangular load) are
//! approximated by dense sampling rather than symbolic description; the
//! renderer is expected to connect samples with straight or lightly
//! smoothed lines, so a higher point count is the caller's means of
//! approximating curvature.
//!
//! Also provides the two curve-assembly helpers the catalog needs:
//! segment stitching (internal boundary points must appear exactly once)
//! and midspan mirroring for symmetric load cases.

use crate::catalog::Point;

/// Coincidence tolerance for seam dropping and mirror deduplication.
pub const SEAM_TOL: f64 = 1e-5;

/// Which internal quantity a curve represents. Determines the sign rule
/// when mirroring: shear flips sign under `x -> L - x`, moment does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramQuantity {
    Shear,
    Moment,
}

/// Sample `f` at `num_points` evenly spaced positions over
/// `[x_start, x_end]`.
///
/// - Degenerate case: `num_points <= 1` with `x_start == x_end` returns a
///   single point at `x_start`. This handles zero-length sub-intervals
///   (e.g. an overhang of length 0) without dividing by zero.
/// - `num_points == 0` is clamped to 2 so a non-degenerate interval never
///   produces an empty or singular sample.
/// - `invert` negates the output of `f`, used by figures that plot moment
///   sagging-negative for visual consistency with the reference sketches.
///
/// The output length equals the (possibly clamped) `num_points`, except
/// in the single-point degenerate branch.
pub fn sample<F>(x_start: f64, x_end: f64, num_points: usize, f: F, invert: bool) -> Vec<Point>
where
    F: Fn(f64) -> f64,
{
    let signed = |y: f64| if invert { -y } else { y };

    if num_points <= 1 && x_start == x_end {
        return vec![Point::new(x_start, signed(f(x_start)))];
    }

    let n = if num_points == 0 { 2 } else { num_points };
    let step = (x_end - x_start) / if n <= 1 { 1.0 } else { (n - 1) as f64 };

    (0..n)
        .map(|i| {
            let x = x_start + i as f64 * step;
            Point::new(x, signed(f(x)))
        })
        .collect()
}

/// Append `segment` to `points`, dropping the prior segment's final point
/// when the incoming segment regenerates the same boundary position
/// (within [`SEAM_TOL`]), so a point at an internal segment boundary
/// appears only once in the stitched curve.
pub fn extend_dropping_seam(points: &mut Vec<Point>, mut segment: Vec<Point>) {
    if let (Some(last), Some(first)) = (points.last(), segment.first()) {
        if (last.x - first.x).abs() <= SEAM_TOL {
            points.pop();
        }
    }
    points.append(&mut segment);
}

/// Build a full-beam curve from its first half by mirroring about
/// midspan: `x -> total_length - x`, with shear flipping sign and moment
/// keeping it. The combined sequence is re-sorted by x and points within
/// [`SEAM_TOL`] in both coordinates are deduplicated to avoid rendering
/// artifacts at the seam.
pub fn mirror_about_midspan(
    first_half: &[Point],
    total_length: f64,
    quantity: DiagramQuantity,
) -> Vec<Point> {
    let mut combined: Vec<Point> = first_half.to_vec();
    combined.extend(first_half.iter().map(|pt| {
        let y = match quantity {
            DiagramQuantity::Shear => -pt.y,
            DiagramQuantity::Moment => pt.y,
        };
        Point::new(total_length - pt.x, y)
    }));
    combined.sort_by(|a, b| a.x.total_cmp(&b.x));
    combined.dedup_by(|b, a| (b.x - a.x).abs() <= SEAM_TOL && (b.y - a.y).abs() <= SEAM_TOL);
    combined
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_point_count_and_endpoints() {
        let points = sample(0.0, 10.0, 31, |x| x * x, false);
        assert_eq!(points.len(), 31);
        assert!(approx_eq(points[0].x, 0.0, EPSILON));
        assert!(approx_eq(points[30].x, 10.0, EPSILON));
        for pair in points.windows(2) {
            assert!(pair[1].x > pair[0].x);
        }
    }

    #[test]
    fn test_degenerate_interval_single_point() {
        let points = sample(5.0, 5.0, 1, |x| x + 1.0, false);
        assert_eq!(points.len(), 1);
        assert!(approx_eq(points[0].x, 5.0, EPSILON));
        assert!(approx_eq(points[0].y, 6.0, EPSILON));
    }

    #[test]
    fn test_zero_points_clamped_to_two() {
        let points = sample(0.0, 10.0, 0, |_| 1.0, false);
        assert_eq!(points.len(), 2);
        assert!(approx_eq(points[0].x, 0.0, EPSILON));
        assert!(approx_eq(points[1].x, 10.0, EPSILON));
    }

    #[test]
    fn test_inversion() {
        let f = |x: f64| 3.0 * x + 1.0;
        let points = sample(0.0, 10.0, 2, f, true);
        for pt in &points {
            assert!(approx_eq(pt.y, -f(pt.x), EPSILON));
        }
    }

    #[test]
    fn test_seam_point_dropped_once() {
        let mut points = sample(0.0, 4.0, 5, |x| x, false);
        extend_dropping_seam(&mut points, sample(4.0, 8.0, 5, |x| x, false));
        // 5 + 5 - 1 shared boundary point
        assert_eq!(points.len(), 9);
        let at_boundary = points.iter().filter(|p| approx_eq(p.x, 4.0, 1e-9)).count();
        assert_eq!(at_boundary, 1);
    }

    #[test]
    fn test_seam_kept_when_segments_do_not_touch() {
        let mut points = sample(0.0, 3.0, 4, |x| x, false);
        extend_dropping_seam(&mut points, sample(5.0, 8.0, 4, |x| x, false));
        assert_eq!(points.len(), 8);
    }

    #[test]
    fn test_mirror_shear_flips_sign() {
        // V(x) = 5 on the first half mirrors to V = -5 on the second
        let half = sample(0.0, 5.0, 3, |_| 5.0, false);
        let full = mirror_about_midspan(&half, 10.0, DiagramQuantity::Shear);
        for pt in &full {
            if pt.x < 5.0 {
                assert!(approx_eq(pt.y, 5.0, EPSILON));
            } else if pt.x > 5.0 {
                assert!(approx_eq(pt.y, -5.0, EPSILON));
            }
        }
        for pair in full.windows(2) {
            assert!(pair[1].x >= pair[0].x);
        }
    }

    #[test]
    fn test_mirror_moment_dedupes_midspan_seam() {
        // M(x) = x peaks at midspan; the mirrored midspan sample is a
        // duplicate and must be dropped
        let half = sample(0.0, 5.0, 6, |x| x, false);
        let full = mirror_about_midspan(&half, 10.0, DiagramQuantity::Moment);
        let at_mid = full.iter().filter(|p| approx_eq(p.x, 5.0, 1e-9)).count();
        assert_eq!(at_mid, 1);
        // Moment keeps its sign: symmetric about midspan
        let m_at = |x: f64| {
            full.iter()
                .find(|p| approx_eq(p.x, x, 1e-9))
                .map(|p| p.y)
                .unwrap()
        };
        assert!(approx_eq(m_at(2.0), m_at(8.0), EPSILON));
    }
}
