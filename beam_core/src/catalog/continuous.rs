//! Curve producers for the two-span continuous figures (26-32). x runs
//! over both spans; the center support sits at the first span's end.
//! Moments plot in the standard convention.

use super::{jump_pair, DiagramSeries, Point, JUMP_EPS, MOMENT_STANDARD_LABEL, SHEAR_LABEL};
use crate::equations::continuous as eq;
use crate::errors::GeometryError;
use crate::geometry;
use crate::sampler::{self, DiagramQuantity};

pub(super) fn fig26_shear(w: f64, l_span: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l_span) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r1, r2, r3) = eq::equal_udl_one_reactions(w, l_span);
    let v_left_of_r2 = r1 - w * l_span;
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(l_span - JUMP_EPS, v_left_of_r2),
            Point::new(l_span + JUMP_EPS, v_left_of_r2 + r2),
            Point::new(2.0 * l_span, r3),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig26_moment(w: f64, l_span: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l_span) {
        return DiagramSeries::error("M", err);
    }
    let (r1, _, _) = eq::equal_udl_one_reactions(w, l_span);
    let m2 = eq::equal_udl_one_support_moment(w, l_span);
    let mut points = sampler::sample(0.0, l_span, 31, |x| r1 * x - w * x * x / 2.0, false);
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(
            l_span,
            2.0 * l_span,
            2,
            |x| m2 * (2.0 * l_span - x) / l_span,
            false,
        ),
    );
    DiagramSeries::new(points, MOMENT_STANDARD_LABEL)
}

pub(super) fn fig27_shear(p: f64, l_span: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l_span) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r1, r2, r3) = eq::equal_center_point_one_reactions(p);
    let mid = l_span / 2.0;
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(mid - JUMP_EPS, r1),
            Point::new(mid + JUMP_EPS, r1 - p),
            Point::new(l_span - JUMP_EPS, r1 - p),
            Point::new(l_span + JUMP_EPS, r1 - p + r2),
            Point::new(2.0 * l_span, r3),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig27_moment(p: f64, l_span: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l_span) {
        return DiagramSeries::error("M", err);
    }
    let (r1, _, _) = eq::equal_center_point_one_reactions(p);
    let m2 = eq::equal_center_point_one_support_moment(p, l_span);
    let mid = l_span / 2.0;
    let mut points = sampler::sample(0.0, mid, 2, |x| r1 * x, false);
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(mid, l_span, 2, |x| r1 * x - p * (x - mid), false),
    );
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(
            l_span,
            2.0 * l_span,
            2,
            |x| m2 * (2.0 * l_span - x) / l_span,
            false,
        ),
    );
    DiagramSeries::new(points, MOMENT_STANDARD_LABEL)
}

fn fig28_check(l_span: f64, a_load: f64) -> Result<(), GeometryError> {
    geometry::check_span(l_span)?;
    geometry::check_position("a_load", a_load, l_span)
}

pub(super) fn fig28_shear(p: f64, l_span: f64, a_load: f64) -> DiagramSeries {
    if let Err(err) = fig28_check(l_span, a_load) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r1, r2, r3) = eq::equal_point_one_reactions(p, a_load, l_span);
    // The load pair must stay left of the support's own jump pair
    let (before, after) = jump_pair(a_load, 0.0, l_span - JUMP_EPS);
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(before, r1),
            Point::new(after, r1 - p),
            Point::new(l_span - JUMP_EPS, r1 - p),
            Point::new(l_span + JUMP_EPS, r1 - p + r2),
            Point::new(2.0 * l_span, r3),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig28_moment(p: f64, l_span: f64, a_load: f64) -> DiagramSeries {
    if let Err(err) = fig28_check(l_span, a_load) {
        return DiagramSeries::error("M", err);
    }
    let (r1, _, _) = eq::equal_point_one_reactions(p, a_load, l_span);
    let m2 = eq::equal_point_one_support_moment(p, a_load, l_span);
    let mut points = sampler::sample(0.0, a_load, 2, |x| r1 * x, false);
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(a_load, l_span, 2, |x| r1 * x - p * (x - a_load), false),
    );
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(
            l_span,
            2.0 * l_span,
            2,
            |x| m2 * (2.0 * l_span - x) / l_span,
            false,
        ),
    );
    DiagramSeries::new(points, MOMENT_STANDARD_LABEL)
}

pub(super) fn fig29_shear(w: f64, l_span: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l_span) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r1, r2, _) = eq::equal_udl_both_reactions(w, l_span);
    let v_left_of_r2 = r1 - w * l_span;
    let v_start_span2 = v_left_of_r2 + r2;
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(l_span - JUMP_EPS, v_left_of_r2),
            Point::new(l_span + JUMP_EPS, v_start_span2),
            Point::new(2.0 * l_span, v_start_span2 - w * l_span),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig29_moment(w: f64, l_span: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l_span) {
        return DiagramSeries::error("M", err);
    }
    let (r1, r2, _) = eq::equal_udl_both_reactions(w, l_span);
    let m2 = eq::equal_udl_both_support_moment(w, l_span);
    let v_start_span2 = r1 - w * l_span + r2;
    let mut points = sampler::sample(0.0, l_span, 31, |x| r1 * x - w * x * x / 2.0, false);
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(
            l_span,
            2.0 * l_span,
            31,
            |x| {
                let s = x - l_span;
                m2 + v_start_span2 * s - w * s * s / 2.0
            },
            false,
        ),
    );
    DiagramSeries::new(points, MOMENT_STANDARD_LABEL)
}

fn fig30_check(l_span: f64, a_dist: f64) -> Result<(), GeometryError> {
    geometry::check_span(l_span)?;
    geometry::check_symmetric_offset("a_dist", a_dist, l_span)
}

pub(super) fn fig30_shear(p: f64, l_span: f64, a_dist: f64) -> DiagramSeries {
    if let Err(err) = fig30_check(l_span, a_dist) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    // The load pattern is symmetric about the center support, so the
    // second span is the mirror of the first with shear sign flipped.
    let r1 = eq::equal_two_point_both_end_reaction(p, a_dist, l_span);
    let inner = l_span - a_dist;
    let (a_before, a_after) = jump_pair(a_dist, 0.0, inner);
    let (inner_before, inner_after) = jump_pair(inner, a_dist, l_span);
    let half = [
        Point::new(0.0, r1),
        Point::new(a_before, r1),
        Point::new(a_after, r1 - p),
        Point::new(inner_before, r1 - p),
        Point::new(inner_after, r1 - 2.0 * p),
        Point::new(l_span, r1 - 2.0 * p),
    ];
    DiagramSeries::new(
        sampler::mirror_about_midspan(&half, 2.0 * l_span, DiagramQuantity::Shear),
        SHEAR_LABEL,
    )
}

pub(super) fn fig30_moment(p: f64, l_span: f64, a_dist: f64) -> DiagramSeries {
    if let Err(err) = fig30_check(l_span, a_dist) {
        return DiagramSeries::error("M", err);
    }
    let r1 = eq::equal_two_point_both_end_reaction(p, a_dist, l_span);
    let inner = l_span - a_dist;
    let mut half = sampler::sample(0.0, a_dist, 2, |x| r1 * x, false);
    sampler::extend_dropping_seam(
        &mut half,
        sampler::sample(a_dist, inner, 2, |x| r1 * x - p * (x - a_dist), false),
    );
    sampler::extend_dropping_seam(
        &mut half,
        sampler::sample(
            inner,
            l_span,
            2,
            |x| r1 * x - p * (x - a_dist) - p * (x - inner),
            false,
        ),
    );
    DiagramSeries::new(
        sampler::mirror_about_midspan(&half, 2.0 * l_span, DiagramQuantity::Moment),
        MOMENT_STANDARD_LABEL,
    )
}

fn fig31_check(l1: f64, l2: f64) -> Result<(), GeometryError> {
    geometry::check_span(l1)?;
    geometry::check_span(l2)
}

pub(super) fn fig31_shear(w: f64, l1: f64, l2: f64) -> DiagramSeries {
    if let Err(err) = fig31_check(l1, l2) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r1, r2, r3) = eq::unequal_udl_reactions(w, l1, l2);
    let v_left_of_r2 = r1 - w * l1;
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(l1 - JUMP_EPS, v_left_of_r2),
            Point::new(l1 + JUMP_EPS, v_left_of_r2 + r2),
            Point::new(l1 + l2, r3),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig31_moment(w: f64, l1: f64, l2: f64) -> DiagramSeries {
    if let Err(err) = fig31_check(l1, l2) {
        return DiagramSeries::error("M", err);
    }
    let (r1, r2, _) = eq::unequal_udl_reactions(w, l1, l2);
    let m2 = eq::unequal_udl_support_moment(w, l1, l2);
    let v_start_span2 = r1 - w * l1 + r2;
    let mut points = sampler::sample(0.0, l1, 31, |x| r1 * x - w * x * x / 2.0, false);
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(
            l1,
            l1 + l2,
            31,
            |x| {
                let s = x - l1;
                m2 + v_start_span2 * s - w * s * s / 2.0
            },
            false,
        ),
    );
    DiagramSeries::new(points, MOMENT_STANDARD_LABEL)
}

pub(super) fn fig32_shear(p1: f64, p2: f64, l1: f64, l2: f64) -> DiagramSeries {
    if let Err(err) = fig31_check(l1, l2) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r1, r2, r3) = eq::unequal_center_points_reactions(p1, p2, l1, l2);
    let v_start_span2 = r1 - p1 + r2;
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(l1 / 2.0 - JUMP_EPS, r1),
            Point::new(l1 / 2.0 + JUMP_EPS, r1 - p1),
            Point::new(l1 - JUMP_EPS, r1 - p1),
            Point::new(l1 + JUMP_EPS, v_start_span2),
            Point::new(l1 + l2 / 2.0 - JUMP_EPS, v_start_span2),
            Point::new(l1 + l2 / 2.0 + JUMP_EPS, v_start_span2 - p2),
            Point::new(l1 + l2, r3),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig32_moment(p1: f64, p2: f64, l1: f64, l2: f64) -> DiagramSeries {
    if let Err(err) = fig31_check(l1, l2) {
        return DiagramSeries::error("M", err);
    }
    let (r1, r2, _) = eq::unequal_center_points_reactions(p1, p2, l1, l2);
    let m2 = eq::unequal_center_points_support_moment(p1, p2, l1, l2);
    let v_start_span2 = r1 - p1 + r2;
    let mid1 = l1 / 2.0;
    let mid2 = l1 + l2 / 2.0;
    let mut points = sampler::sample(0.0, mid1, 2, |x| r1 * x, false);
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(mid1, l1, 2, |x| r1 * x - p1 * (x - mid1), false),
    );
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(l1, mid2, 2, |x| m2 + v_start_span2 * (x - l1), false),
    );
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(
            mid2,
            l1 + l2,
            2,
            |x| m2 + v_start_span2 * (x - l1) - p2 * (x - mid2),
            false,
        ),
    );
    DiagramSeries::new(points, MOMENT_STANDARD_LABEL)
}
