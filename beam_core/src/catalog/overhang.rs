//! Curve producers for the overhanging-support figures (18-22). x runs
//! over the full physical length, span plus overhangs.

use super::{
    jump_pair, segment_samples, DiagramSeries, Point, MOMENT_INVERTED_LABEL, SHEAR_LABEL,
};
use crate::equations::{overhang as eq, simple};
use crate::errors::GeometryError;
use crate::geometry;
use crate::sampler;

pub(super) fn fig18_shear(w: f64, l_span: f64, a_overhang: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_overhang(l_span, a_overhang) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let total = l_span + a_overhang;
    let (r1, r2) = eq::udl_full_reactions(w, l_span, a_overhang);
    let v_left_of_r2 = r1 - w * l_span;
    let (before, after) = jump_pair(l_span, 0.0, total);
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(before, v_left_of_r2),
            Point::new(after, v_left_of_r2 + r2),
            Point::new(total, 0.0),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig18_moment(w: f64, l_span: f64, a_overhang: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_overhang(l_span, a_overhang) {
        return DiagramSeries::error("M", err);
    }
    let total = l_span + a_overhang;
    let (r1, _) = eq::udl_full_reactions(w, l_span, a_overhang);
    let mut points = sampler::sample(0.0, l_span, 31, |x| r1 * x - w * x * x / 2.0, true);
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(
            l_span,
            total,
            segment_samples(a_overhang, 5.0),
            |x| w * (total - x).powi(2) / 2.0,
            true,
        ),
    );
    DiagramSeries::new(points, MOMENT_INVERTED_LABEL)
}

pub(super) fn fig19_shear(w: f64, l_span: f64, a_overhang: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_overhang(l_span, a_overhang) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let total = l_span + a_overhang;
    let (r1, r2) = eq::udl_overhang_reactions(w, l_span, a_overhang);
    let (before, after) = jump_pair(l_span, 0.0, total);
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(before, r1),
            Point::new(after, r1 + r2),
            Point::new(total, 0.0),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig19_moment(w: f64, l_span: f64, a_overhang: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_overhang(l_span, a_overhang) {
        return DiagramSeries::error("M", err);
    }
    let total = l_span + a_overhang;
    let (r1, _) = eq::udl_overhang_reactions(w, l_span, a_overhang);
    let mut points = sampler::sample(0.0, l_span, 2, |x| r1 * x, true);
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(
            l_span,
            total,
            segment_samples(a_overhang, 5.0),
            |x| w * (total - x).powi(2) / 2.0,
            true,
        ),
    );
    DiagramSeries::new(points, MOMENT_INVERTED_LABEL)
}

pub(super) fn fig20_shear(p: f64, l_span: f64, a_overhang: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_overhang(l_span, a_overhang) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let total = l_span + a_overhang;
    let (r1, r2) = eq::tip_point_reactions(p, l_span, a_overhang);
    let overhang_mid = l_span + a_overhang / 2.0;
    let (before, after) = jump_pair(l_span, 0.0, overhang_mid);
    let (tip_before, _) = jump_pair(total, overhang_mid, total);
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(before, r1),
            Point::new(after, r1 + r2),
            Point::new(tip_before, p),
            Point::new(total, p),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig20_moment(p: f64, l_span: f64, a_overhang: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_overhang(l_span, a_overhang) {
        return DiagramSeries::error("M", err);
    }
    let total = l_span + a_overhang;
    let (r1, _) = eq::tip_point_reactions(p, l_span, a_overhang);
    let mut points = sampler::sample(0.0, l_span, 2, |x| r1 * x, true);
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(l_span, total, 2, |x| p * (total - x), true),
    );
    DiagramSeries::new(points, MOMENT_INVERTED_LABEL)
}

fn fig21_check(l_span: f64, a_load: f64, x1_overhang: f64) -> Result<(), GeometryError> {
    geometry::check_overhang(l_span, x1_overhang)?;
    geometry::check_position("a_load", a_load, l_span)
}

pub(super) fn fig21_shear(p: f64, l_span: f64, a_load: f64, x1_overhang: f64) -> DiagramSeries {
    if let Err(err) = fig21_check(l_span, a_load, x1_overhang) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let total = l_span + x1_overhang;
    let (r1, r2) = simple::point_load_reactions(p, a_load, l_span);
    let (before, after) = jump_pair(a_load, 0.0, l_span);
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(before, r1),
            Point::new(after, r1 - p),
            Point::new(l_span, -r2),
            Point::new(total, -r2),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig21_moment(p: f64, l_span: f64, a_load: f64, x1_overhang: f64) -> DiagramSeries {
    if let Err(err) = fig21_check(l_span, a_load, x1_overhang) {
        return DiagramSeries::error("M", err);
    }
    let total = l_span + x1_overhang;
    let m_max = simple::point_load_max_moment(p, a_load, l_span);
    DiagramSeries::new(
        vec![
            Point::new(0.0, 0.0),
            Point::new(a_load, -m_max),
            Point::new(l_span, 0.0),
            Point::new(total, 0.0),
        ],
        MOMENT_INVERTED_LABEL,
    )
}

fn fig22_check(l_span: f64, a_left: f64, c_right: f64) -> Result<(), GeometryError> {
    geometry::check_overhang(l_span, a_left)?;
    geometry::check_overhang(l_span, c_right)
}

pub(super) fn fig22_shear(w: f64, l_span: f64, a_left: f64, c_right: f64) -> DiagramSeries {
    if let Err(err) = fig22_check(l_span, a_left, c_right) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let total = a_left + l_span + c_right;
    let (r1, r2) = eq::double_udl_reactions(w, l_span, a_left, c_right);
    let v_at_r1 = -w * a_left;
    let v_left_of_r2 = v_at_r1 + r1 - w * l_span;
    let span_mid = a_left + l_span / 2.0;
    let (r1_before, r1_after) = jump_pair(a_left, 0.0, span_mid);
    let (r2_before, r2_after) = jump_pair(a_left + l_span, span_mid, total);
    DiagramSeries::new(
        vec![
            Point::new(0.0, 0.0),
            Point::new(r1_before, v_at_r1),
            Point::new(r1_after, v_at_r1 + r1),
            Point::new(r2_before, v_left_of_r2),
            Point::new(r2_after, v_left_of_r2 + r2),
            Point::new(total, 0.0),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig22_moment(w: f64, l_span: f64, a_left: f64, c_right: f64) -> DiagramSeries {
    if let Err(err) = fig22_check(l_span, a_left, c_right) {
        return DiagramSeries::error("M", err);
    }
    let total = a_left + l_span + c_right;
    let (r1, _) = eq::double_udl_reactions(w, l_span, a_left, c_right);
    let mut points = sampler::sample(
        0.0,
        a_left,
        segment_samples(a_left, 3.0),
        |x| w * x * x / 2.0,
        true,
    );
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(
            a_left,
            a_left + l_span,
            segment_samples(l_span, 3.0),
            |x| w * x * x / 2.0 - r1 * (x - a_left),
            true,
        ),
    );
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(
            a_left + l_span,
            total,
            segment_samples(c_right, 3.0),
            |x| w * (total - x).powi(2) / 2.0,
            true,
        ),
    );
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
    fn test_fig18_shear_jump_at_right_support() {
        let shear = fig18_shear(1.0, 8.0, 2.0);
        assert_eq!(shear.points.len(), 4);
        // Jump at the support equals R2
        let (_, r2) = eq::udl_full_reactions(1.0, 8.0, 2.0);
        assert!(approx_eq(shear.points[2].y - shear.points[1].y, r2, EPSILON));
        // Free end unloaded
        assert!(approx_eq(shear.points[3].y, 0.0, EPSILON));
    }

    #[test]
    fn test_fig18_moment_stitched_over_support() {
        let moment = fig18_moment(1.0, 8.0, 2.0);
        let at_support = moment.points.iter().filter(|p| approx_eq(p.x, 8.0, 1e-9)).count();
        assert_eq!(at_support, 1);
        assert!(approx_eq(moment.points.last().unwrap().x, 10.0, EPSILON));
        assert!(approx_eq(moment.points.last().unwrap().y, 0.0, EPSILON));
    }

    #[test]
    fn test_fig18_zero_overhang_stays_ordered() {
        let shear = fig18_shear(1.0, 8.0, 0.0);
        assert!(!shear.is_error());
        for pt in &shear.points {
            assert!((0.0..=8.0).contains(&pt.x), "x = {}", pt.x);
        }
        for pair in shear.points.windows(2) {
            assert!(pair[1].x >= pair[0].x);
        }
    }

    #[test]
    fn test_fig19_downward_left_reaction() {
        let shear = fig19_shear(1.0, 8.0, 3.0);
        // R1 = -wa²/2l holds the beam down across the whole span
        assert!(approx_eq(shear.points[0].y, -9.0 / 16.0, EPSILON));
        assert!(approx_eq(shear.points[1].y, shear.points[0].y, EPSILON));
        assert!(approx_eq(shear.points[3].y, 0.0, EPSILON));
    }

    #[test]
    fn test_fig20_shear_reaches_p_before_tip() {
        let shear = fig20_shear(5.0, 8.0, 3.0);
        assert_eq!(shear.points.len(), 5);
        assert!(approx_eq(shear.points[3].y, 5.0, EPSILON));
        assert!(approx_eq(shear.points[4].y, 5.0, EPSILON));
        let moment = fig20_moment(5.0, 8.0, 3.0);
        // -Pa hogging at the support, plotted inverted
        let at_support = moment.points.iter().find(|p| approx_eq(p.x, 8.0, 1e-9)).unwrap();
        assert!(approx_eq(at_support.y, 15.0, EPSILON));
    }

    #[test]
    fn test_fig21_overhang_carries_no_moment() {
        let moment = fig21_moment(10.0, 10.0, 3.0, 2.0);
        assert!(approx_eq(moment.points[2].y, 0.0, EPSILON));
        assert!(approx_eq(moment.points[3].y, 0.0, EPSILON));
        assert!(approx_eq(moment.points[3].x, 12.0, EPSILON));
    }

    #[test]
    fn test_fig21_rejects_load_outside_span() {
        let shear = fig21_shear(10.0, 10.0, 11.0, 2.0);
        assert_eq!(shear.axis_label, "V (Error: invalid a_load)");
    }

    #[test]
    fn test_fig22_shear_closes_at_both_free_ends() {
        let shear = fig22_shear(1.0, 10.0, 2.0, 3.0);
        assert_eq!(shear.points.len(), 6);
        assert!(approx_eq(shear.points[0].y, 0.0, EPSILON));
        assert!(approx_eq(shear.points[5].y, 0.0, EPSILON));
        // -wa just left of the first support
        assert!(approx_eq(shear.points[1].y, -2.0, EPSILON));
    }

    #[test]
    fn test_fig22_moment_hogging_over_supports() {
        let moment = fig22_moment(1.0, 10.0, 2.0, 3.0);
        // wa²/2 = 2 over the left support, plotted inverted
        let at_r1 = moment.points.iter().find(|p| approx_eq(p.x, 2.0, 1e-9)).unwrap();
        assert!(approx_eq(at_r1.y, -2.0, EPSILON));
        // wc²/2 = 4.5 over the right support
        let at_r2 = moment.points.iter().find(|p| approx_eq(p.x, 12.0, 1e-9)).unwrap();
        assert!(approx_eq(at_r2.y, -4.5, EPSILON));
    }
}
