//! Curve producers for the propped-cantilever figures (15-17). Fixed end
//! at x = 0, simple support at x = l; moments plot in the standard
//! convention (sagging positive, hogging negative).

use super::{jump_pair, DiagramSeries, Point, JUMP_EPS, MOMENT_STANDARD_LABEL, SHEAR_LABEL};
use crate::equations::propped as eq;
use crate::errors::GeometryError;
use crate::geometry;
use crate::sampler;

pub(super) fn fig15_shear(w: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r1, _) = eq::udl_reactions(w, l);
    DiagramSeries::new(
        sampler::sample(0.0, l, 21, |x| r1 - w * x, false),
        SHEAR_LABEL,
    )
}

pub(super) fn fig15_moment(w: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error("M", err);
    }
    DiagramSeries::new(
        sampler::sample(0.0, l, 31, |x| eq::udl_moment(w, l, x), false),
        MOMENT_STANDARD_LABEL,
    )
}

pub(super) fn fig16_shear(p: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r1, r2) = eq::center_point_reactions(p);
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(l / 2.0 - JUMP_EPS, r1),
            Point::new(l / 2.0 + JUMP_EPS, r1 - p),
            Point::new(l, -r2),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig16_moment(p: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error("M", err);
    }
    let (r1, _) = eq::center_point_reactions(p);
    let m_fixed = eq::center_point_fixed_end_moment(p, l);
    let mut points = sampler::sample(0.0, l / 2.0, 2, |x| m_fixed + r1 * x, false);
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(l / 2.0, l, 2, |x| m_fixed + r1 * x - p * (x - l / 2.0), false),
    );
    DiagramSeries::new(points, MOMENT_STANDARD_LABEL)
}

fn fig17_check(l: f64, a_load: f64) -> Result<(), GeometryError> {
    geometry::check_span(l)?;
    geometry::check_position("a_load", a_load, l)
}

pub(super) fn fig17_shear(p: f64, l: f64, a_load: f64) -> DiagramSeries {
    if let Err(err) = fig17_check(l, a_load) {
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

pub(super) fn fig17_moment(p: f64, l: f64, a_load: f64) -> DiagramSeries {
    if let Err(err) = fig17_check(l, a_load) {
        return DiagramSeries::error("M", err);
    }
    let (r1, _) = eq::point_reactions(p, a_load, l);
    let m_fixed = eq::point_fixed_end_moment(p, a_load, l);
    let mut points = sampler::sample(0.0, a_load, 2, |x| m_fixed + r1 * x, false);
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(a_load, l, 2, |x| m_fixed + r1 * x - p * (x - a_load), false),
    );
    DiagramSeries::new(points, MOMENT_STANDARD_LABEL)
}
