//! Curve producers for the cantilever figures (12-14). Positions are
//! measured from the fixed end at x = 0.

use super::{jump_pair, DiagramSeries, Point, MOMENT_INVERTED_LABEL, SHEAR_LABEL};
use crate::equations::cantilever as eq;
use crate::errors::GeometryError;
use crate::geometry;
use crate::sampler;

pub(super) fn fig12_shear(w: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    DiagramSeries::new(
        sampler::sample(0.0, l, 2, |x| eq::udl_shear(w, l, x), false),
        SHEAR_LABEL,
    )
}

pub(super) fn fig12_moment(w: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error("M", err);
    }
    DiagramSeries::new(
        sampler::sample(0.0, l, 31, |x| eq::udl_moment(w, l, x), true),
        MOMENT_INVERTED_LABEL,
    )
}

pub(super) fn fig13_shear(p: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    // Constant shear over the whole length
    DiagramSeries::new(vec![Point::new(0.0, p), Point::new(l, p)], SHEAR_LABEL)
}

pub(super) fn fig13_moment(p: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error("M", err);
    }
    DiagramSeries::new(
        sampler::sample(0.0, l, 2, |x| eq::end_point_moment(p, l, x), true),
        MOMENT_INVERTED_LABEL,
    )
}

fn fig14_check(l: f64, a_load: f64) -> Result<(), GeometryError> {
    geometry::check_span(l)?;
    geometry::check_position("a_load", a_load, l)
}

pub(super) fn fig14_shear(p: f64, l: f64, a_load: f64) -> DiagramSeries {
    if let Err(err) = fig14_check(l, a_load) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (before, after) = jump_pair(a_load, 0.0, l);
    DiagramSeries::new(
        vec![
            Point::new(0.0, p),
            Point::new(before, p),
            Point::new(after, 0.0),
            Point::new(l, 0.0),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig14_moment(p: f64, l: f64, a_load: f64) -> DiagramSeries {
    if let Err(err) = fig14_check(l, a_load) {
        return DiagramSeries::error("M", err);
    }
    let m = |x: f64| eq::interior_point_moment(p, a_load, x);
    let mut points = sampler::sample(0.0, a_load, 2, m, true);
    sampler::extend_dropping_seam(&mut points, sampler::sample(a_load, l, 2, m, true));
    DiagramSeries::new(points, MOMENT_INVERTED_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_fig12_peak_at_wall() {
        let shear = fig12_shear(1.0, 10.0);
        assert_eq!(shear.points.len(), 2);
        assert!(approx_eq(shear.points[0].y, 10.0, EPSILON));
        assert!(approx_eq(shear.points[1].y, 0.0, EPSILON));

        let moment = fig12_moment(1.0, 10.0);
        // wl²/2 = 50 at the wall, plotted inverted
        assert!(approx_eq(moment.points[0].y, -50.0, EPSILON));
        assert!(approx_eq(moment.points.last().unwrap().y, 0.0, EPSILON));
    }

    #[test]
    fn test_fig13_constant_shear_linear_moment() {
        let shear = fig13_shear(5.0, 10.0);
        assert!(approx_eq(shear.points[0].y, 5.0, EPSILON));
        assert!(approx_eq(shear.points[1].y, 5.0, EPSILON));

        let moment = fig13_moment(5.0, 10.0);
        assert!(approx_eq(moment.points[0].y, -50.0, EPSILON));
        assert!(approx_eq(moment.points[1].y, 0.0, EPSILON));
    }

    #[test]
    fn test_fig14_unstressed_past_load() {
        let shear = fig14_shear(5.0, 10.0, 4.0);
        assert!(approx_eq(shear.points[1].x, 4.0 - 1e-4, EPSILON));
        assert!(approx_eq(shear.points[2].y, 0.0, EPSILON));
        assert!(approx_eq(shear.points[3].y, 0.0, EPSILON));

        let moment = fig14_moment(5.0, 10.0, 4.0);
        // Boundary point at the load appears once, zero beyond
        let at_load = moment.points.iter().filter(|p| approx_eq(p.x, 4.0, 1e-9)).count();
        assert_eq!(at_load, 1);
        assert!(approx_eq(moment.points.last().unwrap().y, 0.0, EPSILON));
    }

    #[test]
    fn test_fig14_load_at_free_end_stays_ordered() {
        let shear = fig14_shear(5.0, 10.0, 10.0);
        for pt in &shear.points {
            assert!((0.0..=10.0).contains(&pt.x));
        }
        for pair in shear.points.windows(2) {
            assert!(pair[1].x >= pair[0].x);
        }
    }

    #[test]
    fn test_fig14_rejects_load_off_beam() {
        let shear = fig14_shear(5.0, 10.0, 10.5);
        assert_eq!(shear.axis_label, "V (Error: invalid a_load)");
        assert!(shear.points.is_empty());
    }
}
