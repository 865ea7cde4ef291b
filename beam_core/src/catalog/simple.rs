//! Curve producers for the simply-supported figures (1-11).

use super::{
    jump_pair, segment_samples, DiagramSeries, Point, JUMP_EPS, MOMENT_INVERTED_LABEL,
    SHEAR_LABEL,
};
use crate::equations::simple as eq;
use crate::errors::GeometryError;
use crate::geometry;
use crate::sampler::{self, DiagramQuantity};

pub(super) fn fig1_shear(w: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r, _) = eq::udl_reactions(w, l);
    DiagramSeries::new(
        vec![Point::new(0.0, r), Point::new(l / 2.0, 0.0), Point::new(l, -r)],
        SHEAR_LABEL,
    )
}

pub(super) fn fig1_moment(w: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error("M", err);
    }
    DiagramSeries::new(
        sampler::sample(0.0, l, 31, |x| eq::udl_moment(w, l, x), true),
        MOMENT_INVERTED_LABEL,
    )
}

fn fig2_check(l: f64, a: f64, b: f64) -> Result<(), GeometryError> {
    geometry::check_span(l)?;
    geometry::check_segment(a, b, l)
}

pub(super) fn fig2_shear(w: f64, l: f64, a: f64, b: f64) -> DiagramSeries {
    if let Err(err) = fig2_check(l, a, b) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r1, _) = eq::partial_udl_reactions(w, a, b, l);
    let v_end = r1 - w * b;
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(a, r1),
            Point::new((a + JUMP_EPS).min(a + b), r1),
            Point::new(a + b, v_end),
            Point::new(l, v_end),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig2_moment(w: f64, l: f64, a: f64, b: f64) -> DiagramSeries {
    if let Err(err) = fig2_check(l, a, b) {
        return DiagramSeries::error("M", err);
    }
    let c = l - a - b;
    let m = |x: f64| eq::partial_udl_moment(w, a, b, l, x);
    let mut points = sampler::sample(0.0, a, segment_samples(a, 2.0), m, true);
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(a, a + b, segment_samples(b, 3.0), m, true),
    );
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(a + b, l, segment_samples(c, 2.0), m, true),
    );
    DiagramSeries::new(points, MOMENT_INVERTED_LABEL)
}

fn fig3_check(l: f64, a: f64) -> Result<(), GeometryError> {
    geometry::check_span(l)?;
    geometry::check_position("a", a, l)
}

pub(super) fn fig3_shear(w: f64, l: f64, a: f64) -> DiagramSeries {
    if let Err(err) = fig3_check(l, a) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r1, r2) = eq::end_udl_reactions(w, a, l);
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(a, r1 - w * a),
            Point::new(l, -r2),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig3_moment(w: f64, l: f64, a: f64) -> DiagramSeries {
    if let Err(err) = fig3_check(l, a) {
        return DiagramSeries::error("M", err);
    }
    let (r1, r2) = eq::end_udl_reactions(w, a, l);
    let mut points = sampler::sample(
        0.0,
        a,
        segment_samples(a, 3.0),
        |x| r1 * x - w * x * x / 2.0,
        true,
    );
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(a, l, segment_samples(l - a, 2.0), |x| r2 * (l - x), true),
    );
    DiagramSeries::new(points, MOMENT_INVERTED_LABEL)
}

fn fig4_check(l: f64, a: f64, c: f64) -> Result<(), GeometryError> {
    geometry::check_span(l)?;
    geometry::check_segment(a, c, l)
}

pub(super) fn fig4_shear(w1: f64, w2: f64, l: f64, a: f64, c: f64) -> DiagramSeries {
    if let Err(err) = fig4_check(l, a, c) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r1, r2) = eq::two_end_udl_reactions(w1, w2, a, c, l);
    let b_gap = l - a - c;
    let v_gap = r1 - w1 * a;
    let mut points = vec![Point::new(0.0, r1), Point::new(a, v_gap)];
    // A plateau only exists when the loads leave a real gap
    if b_gap > 0.001 {
        points.push(Point::new(a + JUMP_EPS, v_gap));
        points.push(Point::new(l - c - JUMP_EPS, v_gap));
    }
    points.push(Point::new(l - c, -r2 + w2 * c));
    points.push(Point::new(l, -r2));
    DiagramSeries::new(points, SHEAR_LABEL)
}

pub(super) fn fig4_moment(w1: f64, w2: f64, l: f64, a: f64, c: f64) -> DiagramSeries {
    if let Err(err) = fig4_check(l, a, c) {
        return DiagramSeries::error("M", err);
    }
    let (r1, r2) = eq::two_end_udl_reactions(w1, w2, a, c, l);
    let b_gap = l - a - c;
    let mut points = sampler::sample(
        0.0,
        a,
        segment_samples(a, 3.0),
        |x| r1 * x - w1 * x * x / 2.0,
        true,
    );
    if b_gap > 0.001 {
        sampler::extend_dropping_seam(
            &mut points,
            sampler::sample(
                a,
                l - c,
                segment_samples(b_gap, 2.0),
                |x| r1 * x - w1 * a * (x - a / 2.0),
                true,
            ),
        );
    }
    sampler::extend_dropping_seam(
        &mut points,
        sampler::sample(
            l - c,
            l,
            segment_samples(c, 3.0),
            |x| r2 * (l - x) - w2 * (l - x).powi(2) / 2.0,
            true,
        ),
    );
    DiagramSeries::new(points, MOMENT_INVERTED_LABEL)
}

pub(super) fn fig5_shear(w_peak: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    DiagramSeries::new(
        sampler::sample(0.0, l, 31, |x| eq::triangular_shear(w_peak, l, x), false),
        SHEAR_LABEL,
    )
}

pub(super) fn fig5_moment(w_peak: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error("M", err);
    }
    DiagramSeries::new(
        sampler::sample(0.0, l, 41, |x| eq::triangular_moment(w_peak, l, x), true),
        MOMENT_INVERTED_LABEL,
    )
}

pub(super) fn fig6_shear(w_peak: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let half = sampler::sample(
        0.0,
        l / 2.0,
        21,
        |x| eq::center_peak_shear_half(w_peak, l, x),
        false,
    );
    DiagramSeries::new(
        sampler::mirror_about_midspan(&half, l, DiagramQuantity::Shear),
        SHEAR_LABEL,
    )
}

pub(super) fn fig6_moment(w_peak: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error("M", err);
    }
    let half = sampler::sample(
        0.0,
        l / 2.0,
        31,
        |x| eq::center_peak_moment_half(w_peak, l, x),
        true,
    );
    DiagramSeries::new(
        sampler::mirror_about_midspan(&half, l, DiagramQuantity::Moment),
        MOMENT_INVERTED_LABEL,
    )
}

pub(super) fn fig7_shear(p: f64, l: f64) -> DiagramSeries {
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

pub(super) fn fig7_moment(p: f64, l: f64) -> DiagramSeries {
    if let Err(err) = geometry::check_span(l) {
        return DiagramSeries::error("M", err);
    }
    let m_max = p * l / 4.0;
    DiagramSeries::new(
        vec![
            Point::new(0.0, 0.0),
            Point::new(l / 2.0, -m_max),
            Point::new(l, 0.0),
        ],
        MOMENT_INVERTED_LABEL,
    )
}

fn fig8_check(l: f64, a: f64) -> Result<(), GeometryError> {
    geometry::check_span(l)?;
    geometry::check_position("a", a, l)
}

pub(super) fn fig8_shear(p: f64, l: f64, a: f64) -> DiagramSeries {
    if let Err(err) = fig8_check(l, a) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (r1, r2) = eq::point_load_reactions(p, a, l);
    let (before, after) = jump_pair(a, 0.0, l);
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(before, r1),
            Point::new(after, -r2),
            Point::new(l, -r2),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig8_moment(p: f64, l: f64, a: f64) -> DiagramSeries {
    if let Err(err) = fig8_check(l, a) {
        return DiagramSeries::error("M", err);
    }
    let m_max = eq::point_load_max_moment(p, a, l);
    DiagramSeries::new(
        vec![
            Point::new(0.0, 0.0),
            Point::new(a, -m_max),
            Point::new(l, 0.0),
        ],
        MOMENT_INVERTED_LABEL,
    )
}

fn fig9_check(l: f64, a: f64) -> Result<(), GeometryError> {
    geometry::check_span(l)?;
    geometry::check_symmetric_offset("a", a, l)
}

pub(super) fn fig9_shear(p: f64, l: f64, a: f64) -> DiagramSeries {
    if let Err(err) = fig9_check(l, a) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let (before, after) = jump_pair(a, 0.0, l);
    let half = [
        Point::new(0.0, p),
        Point::new(before, p),
        Point::new(after, 0.0),
    ];
    DiagramSeries::new(
        sampler::mirror_about_midspan(&half, l, DiagramQuantity::Shear),
        SHEAR_LABEL,
    )
}

pub(super) fn fig9_moment(p: f64, l: f64, a: f64) -> DiagramSeries {
    if let Err(err) = fig9_check(l, a) {
        return DiagramSeries::error("M", err);
    }
    let half = [Point::new(0.0, 0.0), Point::new(a, -p * a)];
    DiagramSeries::new(
        sampler::mirror_about_midspan(&half, l, DiagramQuantity::Moment),
        MOMENT_INVERTED_LABEL,
    )
}

fn fig10_check(l: f64, a_dist: f64, b_dist: f64) -> Result<(), GeometryError> {
    geometry::check_span(l)?;
    if !(0.0..l).contains(&a_dist) || !(0.0..l).contains(&b_dist) {
        return Err(GeometryError::InvalidLengths);
    }
    geometry::check_ordered_positions(a_dist, l - b_dist)
}

pub(super) fn fig10_shear(p: f64, l: f64, a_dist: f64, b_dist: f64) -> DiagramSeries {
    if let Err(err) = fig10_check(l, a_dist, b_dist) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let load1 = a_dist;
    let load2 = l - b_dist;
    let (r1, _) = eq::two_point_reactions(p, load1, p, load2, l);
    let gap_mid = (load1 + load2) / 2.0;
    let (l1_before, l1_after) = jump_pair(load1, 0.0, gap_mid);
    let (l2_before, l2_after) = jump_pair(load2, gap_mid, l);
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(l1_before, r1),
            Point::new(l1_after, r1 - p),
            Point::new(l2_before, r1 - p),
            Point::new(l2_after, r1 - 2.0 * p),
            Point::new(l, r1 - 2.0 * p),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig10_moment(p: f64, l: f64, a_dist: f64, b_dist: f64) -> DiagramSeries {
    if let Err(err) = fig10_check(l, a_dist, b_dist) {
        return DiagramSeries::error("M", err);
    }
    let load1 = a_dist;
    let load2 = l - b_dist;
    let (r1, _) = eq::two_point_reactions(p, load1, p, load2, l);
    DiagramSeries::new(
        vec![
            Point::new(0.0, 0.0),
            Point::new(load1, -r1 * load1),
            Point::new(load2, -(r1 * load2 - p * (load2 - load1))),
            Point::new(l, 0.0),
        ],
        MOMENT_INVERTED_LABEL,
    )
}

fn fig11_check(l: f64, a: f64, b_spacing: f64) -> Result<(), GeometryError> {
    geometry::check_span(l)?;
    geometry::check_segment(a, b_spacing, l)
}

pub(super) fn fig11_shear(p1: f64, p2: f64, l: f64, a: f64, b_spacing: f64) -> DiagramSeries {
    if let Err(err) = fig11_check(l, a, b_spacing) {
        return DiagramSeries::error(SHEAR_LABEL, err);
    }
    let load2 = a + b_spacing;
    let (r1, r2) = eq::two_point_reactions(p1, a, p2, load2, l);
    let gap_mid = (a + load2) / 2.0;
    let (p1_before, p1_after) = jump_pair(a, 0.0, gap_mid);
    let (p2_before, p2_after) = jump_pair(load2, gap_mid, l);
    DiagramSeries::new(
        vec![
            Point::new(0.0, r1),
            Point::new(p1_before, r1),
            Point::new(p1_after, r1 - p1),
            Point::new(p2_before, r1 - p1),
            Point::new(p2_after, r1 - p1 - p2),
            Point::new(l, -r2),
        ],
        SHEAR_LABEL,
    )
}

pub(super) fn fig11_moment(p1: f64, p2: f64, l: f64, a: f64, b_spacing: f64) -> DiagramSeries {
    if let Err(err) = fig11_check(l, a, b_spacing) {
        return DiagramSeries::error("M", err);
    }
    let load2 = a + b_spacing;
    let (r1, _) = eq::two_point_reactions(p1, a, p2, load2, l);
    DiagramSeries::new(
        vec![
            Point::new(0.0, 0.0),
            Point::new(a, -r1 * a),
            Point::new(load2, -(r1 * load2 - p1 * (load2 - a))),
            Point::new(l, 0.0),
        ],
        MOMENT_INVERTED_LABEL,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() < tol
    }

    #[test]
    fn test_fig1_shear_vertices_and_inverted_moment_peak() {
        let shear = fig1_shear(1.0, 10.0);
        assert_eq!(shear.axis_label, "V");
        assert_eq!(shear.points.len(), 3);
        assert!(approx_eq(shear.points[0].y, 5.0, EPSILON));
        assert!(approx_eq(shear.points[2].y, -5.0, EPSILON));

        let moment = fig1_moment(1.0, 10.0);
        assert_eq!(moment.axis_label, "M (Inverted)");
        assert_eq!(moment.points.len(), 31);
        // wl²/8 = 12.5, plotted inverted at midspan
        assert!(approx_eq(moment.points[15].y, -12.5, EPSILON));
    }

    #[test]
    fn test_fig2_rejects_load_longer_than_span() {
        let shear = fig2_shear(1.0, 12.0, 8.0, 8.0);
        assert!(shear.points.is_empty());
        assert_eq!(shear.axis_label, "V (Error: invalid lengths)");
        let moment = fig2_moment(1.0, 12.0, 8.0, 8.0);
        assert!(moment.points.is_empty());
        assert_eq!(moment.axis_label, "M (Error: invalid lengths)");
    }

    #[test]
    fn test_fig2_moment_boundary_point_appears_once() {
        let moment = fig2_moment(1.0, 12.0, 2.0, 6.0);
        let at_start = moment.points.iter().filter(|p| approx_eq(p.x, 2.0, 1e-9)).count();
        let at_end = moment.points.iter().filter(|p| approx_eq(p.x, 8.0, 1e-9)).count();
        assert_eq!(at_start, 1);
        assert_eq!(at_end, 1);
    }

    #[test]
    fn test_fig3_flags_invalid_a() {
        let shear = fig3_shear(1.0, 10.0, 11.0);
        assert_eq!(shear.axis_label, "V (Error: invalid a)");
        assert!(shear.points.is_empty());
    }

    #[test]
    fn test_fig4_plateau_only_with_real_gap() {
        // 4 + 5 < 15 leaves a gap: plateau pair present
        let with_gap = fig4_shear(1.0, 0.8, 15.0, 4.0, 5.0);
        assert_eq!(with_gap.points.len(), 6);
        // Loads meeting in the middle: no plateau points
        let no_gap = fig4_shear(1.0, 0.8, 9.0, 4.0, 5.0);
        assert_eq!(no_gap.points.len(), 4);
    }

    #[test]
    fn test_fig6_mirrored_halves() {
        let shear = fig6_shear(5.0, 10.0);
        // V(x) = -V(l - x): compare first and last samples
        let first = shear.points.first().unwrap();
        let last = shear.points.last().unwrap();
        assert!(approx_eq(first.y, -last.y, EPSILON));
        assert!(approx_eq(first.y, 5.0 * 10.0 / 4.0, EPSILON));
        // Zero shear at midspan
        let mid = shear
            .points
            .iter()
            .find(|p| approx_eq(p.x, 5.0, 1e-9))
            .unwrap();
        assert!(approx_eq(mid.y, 0.0, EPSILON));

        let moment = fig6_moment(5.0, 10.0);
        // Moment symmetric, peak -w₀l²/12 plotted inverted at midspan
        let mid_m = moment
            .points
            .iter()
            .find(|p| approx_eq(p.x, 5.0, 1e-9))
            .unwrap();
        assert!(approx_eq(mid_m.y, -5.0 * 100.0 / 12.0, EPSILON));
        for pair in moment.points.windows(2) {
            assert!(pair[1].x >= pair[0].x);
        }
    }

    #[test]
    fn test_fig7_jump_pair_at_midspan() {
        let shear = fig7_shear(10.0, 10.0);
        assert_eq!(shear.points.len(), 4);
        assert!(approx_eq(shear.points[1].x, 5.0 - 1e-4, EPSILON));
        assert!(approx_eq(shear.points[1].y, 5.0, EPSILON));
        assert!(approx_eq(shear.points[2].x, 5.0 + 1e-4, EPSILON));
        assert!(approx_eq(shear.points[2].y, -5.0, EPSILON));
    }

    #[test]
    fn test_fig7_moment_peak_and_zero_ends() {
        let moment = fig7_moment(10.0, 10.0);
        // Pl/4 = 25 under the load, plotted inverted; zero at both supports
        assert!(approx_eq(moment.points[0].y, 0.0, EPSILON));
        assert!(approx_eq(moment.points[1].x, 5.0, EPSILON));
        assert!(approx_eq(moment.points[1].y, -25.0, EPSILON));
        assert!(approx_eq(moment.points[2].y, 0.0, EPSILON));
    }

    #[test]
    fn test_fig8_shear_jump_across_load() {
        let shear = fig8_shear(10.0, 10.0, 3.0);
        // +Pb/l = 7 just before the load, -Pa/l = -3 just after
        assert!(approx_eq(shear.points[1].x, 3.0 - 1e-4, EPSILON));
        assert!(approx_eq(shear.points[1].y, 7.0, EPSILON));
        assert!(approx_eq(shear.points[2].x, 3.0 + 1e-4, EPSILON));
        assert!(approx_eq(shear.points[2].y, -3.0, EPSILON));
    }

    #[test]
    fn test_fig8_load_at_either_support_stays_ordered() {
        for a in [0.0, 10.0] {
            let shear = fig8_shear(10.0, 10.0, a);
            assert!(!shear.is_error());
            for pt in &shear.points {
                assert!((0.0..=10.0).contains(&pt.x), "a = {}: x = {}", a, pt.x);
            }
            for pair in shear.points.windows(2) {
                assert!(pair[1].x >= pair[0].x, "a = {}", a);
            }
        }
    }

    #[test]
    fn test_fig8_moment_vertex_under_load() {
        let moment = fig8_moment(10.0, 10.0, 3.0);
        // Pab/l = 21, inverted
        assert!(approx_eq(moment.points[1].x, 3.0, EPSILON));
        assert!(approx_eq(moment.points[1].y, -21.0, EPSILON));
        assert!(approx_eq(moment.points[0].y, 0.0, EPSILON));
        assert!(approx_eq(moment.points[2].y, 0.0, EPSILON));
    }

    #[test]
    fn test_fig9_symmetric_pair_from_mirroring() {
        let shear = fig9_shear(5.0, 12.0, 3.0);
        assert_eq!(shear.points.len(), 6);
        // Zero shear between the loads, -P after the second
        assert!(approx_eq(shear.points[2].y, 0.0, EPSILON));
        assert!(approx_eq(shear.points[3].y, 0.0, EPSILON));
        assert!(approx_eq(shear.points[5].y, -5.0, EPSILON));

        let moment = fig9_moment(5.0, 12.0, 3.0);
        assert_eq!(moment.points.len(), 4);
        // Constant -Pa plateau between the loads
        assert!(approx_eq(moment.points[1].y, -15.0, EPSILON));
        assert!(approx_eq(moment.points[2].y, -15.0, EPSILON));
        assert!(approx_eq(moment.points[2].x, 9.0, EPSILON));
    }

    #[test]
    fn test_fig9_loads_past_midspan_rejected() {
        let shear = fig9_shear(5.0, 12.0, 6.5);
        assert_eq!(shear.axis_label, "V (Error: invalid a)");
    }

    #[test]
    fn test_fig10_crossed_loads_rejected() {
        // load1 at 10, load2 at 15 - 9 = 6: out of order
        let shear = fig10_shear(7.0, 15.0, 10.0, 9.0);
        assert_eq!(shear.axis_label, "V (Error: invalid lengths)");
    }

    #[test]
    fn test_fig10_moment_zero_at_both_supports() {
        let moment = fig10_moment(7.0, 15.0, 4.0, 5.0);
        assert!(approx_eq(moment.points.first().unwrap().y, 0.0, EPSILON));
        assert!(approx_eq(moment.points.last().unwrap().y, 0.0, EPSILON));
        assert_eq!(moment.points.len(), 4);
    }

    #[test]
    fn test_fig11_shear_steps_by_each_load() {
        let shear = fig11_shear(8.0, 6.0, 15.0, 4.0, 5.0);
        assert_eq!(shear.points.len(), 6);
        let r1 = shear.points[0].y;
        assert!(approx_eq(shear.points[2].y, r1 - 8.0, EPSILON));
        assert!(approx_eq(shear.points[4].y, r1 - 14.0, EPSILON));
        // Final point sits at -R2
        let (_, r2) = eq::two_point_reactions(8.0, 4.0, 6.0, 9.0, 15.0);
        assert!(approx_eq(shear.points[5].y, -r2, EPSILON));
    }
}
