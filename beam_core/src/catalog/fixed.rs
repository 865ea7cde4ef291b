//! Curve producers for the fixed-both-ends figures (23-25). Moments plot
//! in the standard convention so the hogging end moments read negative.

use super::{jump_pair, DiagramSeries, Point, JUMP_EPS, MOMENT_STANDARD_LABEL, SHEAR_LABEL};
use crate::equations::fixed as eq;
use crate::errors::GeometryError;
use crate::geometry;
use crate::sampler::{self, DiagramQuantity};

pub(super) fn fig23_shear(w: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r, _) = eq::udl_reactions(w, l);
    DiagramSeries::new(
        vec![Point::new(0.0, r), Point::new(l / 2.0, 0.0), Point::new(l, -r)],
        SHEAR_LABEL,
    )
}

pub(super) fn fig23_moment(w: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error("M", err);
    }
    DiagramSeries::new(
        sampler::sample(0.0, l, 31, |x| eq::udl_moment(w, l, x), false),
        MOMENT_STANDARD_LABEL,
    )
}

pub(super) fn fig24_shear(p: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let v = p / 2.0;
    DiagramSeries::new(
        vec![
            Point::new(0.0, v),
            Point::new(l / 2.0 - JUMP_EPS, v),
            Point::new(l / 2.0 + JUMP_EPS, -v),
            Point::new(l, -v),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig24_moment(p: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error("M", err);
    }
    let half = sampler::sample(0.0, l / 2.0, 2, |x| eq::center_point_moment_half(p, l, x), false);
    DiagramSeries::new(
        sampler::mirror_about_midspan(&half, l, DiagramQuantity::Moment),
        MOMENT_STANDARD_LABEL,
    )
}

fn fig25_check(l: f64, a_load: f64) -> Result<(), GeometryError> {
    geometry::check_span(l)?;
    geometry::check_position("a_load", a_load, l)
}

pub(super) fn fig25_shear(p: f64, l: f64, a_load: f64) -> DiagramSeries {
    if let Err(err) = fig25_check(l, a_load) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r1, r2) = eq::point_reactions(p, a_load, l);
    let (before, after) = jump_pair(a_load, 0.0, l);
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(before, r1),
            Point::new(after, r1 - p),
            Point::new(l, -r2),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig25_moment(p: f64, l: f64, a_load: f64) -> DiagramSeries {
    if let Err(err) = fig25_check(l, a_load) {
        return DiagramSeries::error("M", err);
    }
    let (r1, _) = eq::point_reactions(p, a_load, l);
    let (m1, _) = eq::point_end_moments(p, a_load, l);
    let mut points = sampler::sample(0.0, a_load, 2, |x| m1 + r1 * x, false);
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(a_load, l, 2, |x| m1 + r1 * x - p * (x - a_load), false),
    );
    DiagramSeries::new(points, MOMENT_STANDARD_LABEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_fig23_end_and_center_moments() {
        let moment = fig23_moment(1.0, 10.0);
        assert_eq!(moment.axis_label, "M (Standard Conv.)");
        assert!(approx_eq(moment.points[0].y, -100.0 / 12.0, EPSILON));
        assert!(approx_eq(moment.points[30].y, -100.0 / 12.0, EPSILON));
        assert!(approx_eq(moment.points[15].y, 100.0 / 24.0, EPSILON));
    }

    #[test]
    fn test_fig24_moment_mirrored_to_three_vertices() {
        let moment = fig24_moment(10.0, 10.0);
        // -Pl/8, +Pl/8, -Pl/8; the mirrored midspan duplicate is dropped
        assert_eq!(moment.points.len(), 3);
        assert!(approx_eq(moment.points[0].y, -12.5, EPSILON));
        assert!(approx_eq(moment.points[1].y, 12.5, EPSILON));
        assert!(approx_eq(moment.points[2].y, -12.5, EPSILON));

        let shear = fig24_shear(10.0, 10.0);
        assert!(approx_eq(shear.points[1].y, 5.0, EPSILON));
        assert!(approx_eq(shear.points[2].y, -5.0, EPSILON));
    }

    #[test]
    fn test_fig25_moment_continuous_under_load() {
        let moment = fig25_moment(10.0, 10.0, 3.0);
        // +2Pa²b²/l³ under the load
        let under = moment.points.iter().find(|p| approx_eq(p.x, 3.0, 1e-9)).unwrap();
        assert!(approx_eq(under.y, 2.0 * 10.0 * 9.0 * 49.0 / 1000.0, EPSILON));
        let at_load = moment.points.iter().filter(|p| approx_eq(p.x, 3.0, 1e-9)).count();
        assert_eq!(at_load, 1);
    }

    #[test]
    fn test_fig25_rejects_invalid_position() {
        let shear = fig25_shear(10.0, 10.0, 12.0);
        assert_eq!(shear.axis_label, "V (Error: invalid a_load)");
        assert!(shear.points.is_empty());
    }
}
