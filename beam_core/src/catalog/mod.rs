//! # Beam Configuration Catalog
//!
//! The fixed list of 32 beam configurations, each pairing an input
//! parameter schema and documentation equations with two curve-producing
//! functions (shear, moment). Entries are static value objects holding
//! plain `fn` pointers - constructed once, never mutated, resolved by id
//! through a lazily built lookup table.
//!
//! ## Usage
//!
//! ```rust
//! use beam_core::catalog;
//! use std::collections::HashMap;
//!
//! let config = catalog::find("fig8").unwrap();
//!
//! let mut overrides = HashMap::new();
//! overrides.insert("a".to_string(), 4.0);
//!
//! let params = config.resolve(&overrides);
//! let shear = config.shear_diagram(&params);
//! assert!(!shear.points.is_empty());
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CatalogError, CatalogResult, GeometryError};

mod cantilever;
mod continuous;
mod fixed;
mod overhang;
mod propped;
mod simple;

/// x-offset used to render a jump discontinuity (point load, support
/// reaction) as two nearly coincident samples, so a linear-interpolation
/// line chart draws a vertical step.
pub const JUMP_EPS: f64 = 1e-4;

/// Sample positions bracketing a jump discontinuity at `x`, clamped into
/// `[lo, hi]` so a jump sitting at the edge of its segment (a load on a
/// support, a zero-length overhang) cannot push a sample off the beam or
/// out of x-order.
pub(crate) fn jump_pair(x: f64, lo: f64, hi: f64) -> (f64, f64) {
    ((x - JUMP_EPS).max(lo), (x + JUMP_EPS).min(hi))
}

pub(crate) const SHEAR_LABEL: &str = "V";
pub(crate) const MOMENT_INVERTED_LABEL: &str = "M (Inverted)";
pub(crate) const MOMENT_STANDARD_LABEL: &str = "M (Standard Conv.)";

/// Sample count for a curved segment of the given length: at least two
/// points, densified per unit length.
pub(crate) fn segment_samples(length: f64, per_unit: f64) -> usize {
    ((length * per_unit + 1.0).ceil() as usize).max(2)
}

// ============================================================================
// Data model
// ============================================================================

/// Declares one numeric input of a configuration. The default is used
/// whenever no override is supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParameterSpec {
    /// Parameter name, unique within a configuration
    pub name: &'static str,
    /// Display label, e.g. `"Load (w)"`
    pub label: &'static str,
    /// Default value, guaranteed to describe a valid beam
    pub default: f64,
    /// Display unit, e.g. `"N/m"`
    pub unit: &'static str,
}

/// Tag describing the support arrangement. Informs an external
/// renderer's schematic; carries no numerical behavior of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeamType {
    /// Pin and roller supports at the ends
    Simple,
    /// Fixed at the left end, free at the right
    Cantilever,
    /// Fixed at the left end, simply supported at the right
    ProppedCantilever,
    /// Simple span with an overhang beyond the right support
    SingleOverhang,
    /// Overhangs beyond both supports
    DoubleOverhang,
    /// Fully restrained at both ends
    FixedBothEnds,
    /// Two equal spans over three supports
    ContinuousTwoEqualSpan,
    /// Two unequal spans over three supports
    ContinuousTwoUnequalSpan,
}

impl BeamType {
    /// All beam types in catalog order
    pub const ALL: [BeamType; 8] = [
        BeamType::Simple,
        BeamType::Cantilever,
        BeamType::ProppedCantilever,
        BeamType::SingleOverhang,
        BeamType::DoubleOverhang,
        BeamType::FixedBothEnds,
        BeamType::ContinuousTwoEqualSpan,
        BeamType::ContinuousTwoUnequalSpan,
    ];

    /// Display name for UI selection
    pub fn display_name(&self) -> &'static str {
        match self {
            BeamType::Simple => "Simple Beam",
            BeamType::Cantilever => "Cantilever Beam",
            BeamType::ProppedCantilever => "Propped Cantilever",
            BeamType::SingleOverhang => "Beam Overhanging One Support",
            BeamType::DoubleOverhang => "Beam Overhanging Both Supports",
            BeamType::FixedBothEnds => "Beam Fixed at Both Ends",
            BeamType::ContinuousTwoEqualSpan => "Continuous Beam - Two Equal Spans",
            BeamType::ContinuousTwoUnequalSpan => "Continuous Beam - Two Unequal Spans",
        }
    }
}

/// A sampled diagram point. `x` is the position from the beam's left
/// reference end; `y` is the signed internal force or moment, possibly
/// sign-inverted per the convention noted in the series' axis label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// One computed curve: ordered samples plus the axis label that names the
/// quantity and its sign convention (`"V"`, `"M (Inverted)"`,
/// `"M (Standard Conv.)"`), or flags the error state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramSeries {
    /// Samples ordered by non-decreasing x
    pub points: Vec<Point>,
    /// Axis label, including the sign convention or error annotation
    pub axis_label: String,
}

impl DiagramSeries {
    pub fn new(points: Vec<Point>, axis_label: impl Into<String>) -> Self {
        DiagramSeries {
            points,
            axis_label: axis_label.into(),
        }
    }

    /// The uniform error-signaling convention: empty data plus a
    /// descriptive label, e.g. `"V (Error: invalid lengths)"`. Non-fatal;
    /// the caller renders an empty diagram area.
    pub fn error(base_label: &str, err: GeometryError) -> Self {
        DiagramSeries {
            points: Vec::new(),
            axis_label: format!("{} (Error: {})", base_label, err),
        }
    }

    /// True when this series carries the in-band error signal.
    pub fn is_error(&self) -> bool {
        self.points.is_empty() && self.axis_label.contains("Error")
    }
}

/// Resolved parameter values for one computation request. Built from a
/// configuration's specs plus caller overrides; values are ephemeral and
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParamSet {
    values: Vec<(&'static str, f64)>,
}

impl ParamSet {
    /// Value of a named parameter. Names not declared by the owning
    /// configuration read as 0.0; the catalog entries only ever request
    /// declared names.
    pub fn value(&self, name: &str) -> f64 {
        self.values
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
            .unwrap_or(0.0)
    }

    /// All resolved (name, value) pairs in declaration order.
    pub fn entries(&self) -> &[(&'static str, f64)] {
        &self.values
    }
}

/// Signature shared by every shear/moment curve producer.
pub type DiagramFn = fn(&ParamSet) -> DiagramSeries;

/// One catalog entry: static data plus the two pure curve functions.
#[derive(Debug, Clone)]
pub struct BeamConfiguration {
    /// Unique identifier, e.g. `"fig8"`
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Support arrangement tag for the renderer's schematic
    pub beam_type: BeamType,
    /// Input schema; insertion order is display order
    pub parameters: &'static [ParameterSpec],
    /// Symbolic key -> display formula string; documentation only, passed
    /// through to the caller unmodified and never evaluated
    pub equations: &'static [(&'static str, &'static str)],
    /// Shear curve producer
    pub shear: DiagramFn,
    /// Moment curve producer
    pub moment: DiagramFn,
}

impl BeamConfiguration {
    /// Resolve parameter values from an override map, falling back to
    /// each parameter's default when absent or non-finite.
    pub fn resolve(&self, overrides: &HashMap<String, f64>) -> ParamSet {
        ParamSet {
            values: self
                .parameters
                .iter()
                .map(|spec| {
                    let value = overrides
                        .get(spec.name)
                        .copied()
                        .filter(|v| v.is_finite())
                        .unwrap_or(spec.default);
                    (spec.name, value)
                })
                .collect(),
        }
    }

    /// The configuration's default parameter set.
    pub fn defaults(&self) -> ParamSet {
        self.resolve(&HashMap::new())
    }

    /// Compute the shear diagram for a resolved parameter set.
    pub fn shear_diagram(&self, params: &ParamSet) -> DiagramSeries {
        (self.shear)(params)
    }

    /// Compute the bending moment diagram for a resolved parameter set.
    pub fn moment_diagram(&self, params: &ParamSet) -> DiagramSeries {
        (self.moment)(params)
    }
}

// ============================================================================
// Catalog access
// ============================================================================

/// All 32 configurations in figure order.
pub fn catalog() -> &'static [BeamConfiguration] {
    CATALOG
}

/// Look up a configuration by id.
pub fn find(id: &str) -> CatalogResult<&'static BeamConfiguration> {
    INDEX
        .get(id)
        .map(|&i| &CATALOG[i])
        .ok_or_else(|| CatalogError::ConfigurationNotFound { id: id.to_string() })
}

static INDEX: Lazy<HashMap<&'static str, usize>> = Lazy::new(|| {
    CATALOG
        .iter()
        .enumerate()
        .map(|(i, config)| (config.id, i))
        .collect()
});

// ============================================================================
// The catalog
// ============================================================================

static CATALOG: &[BeamConfiguration] = &[
    // Figure 1
    BeamConfiguration {
        id: "fig1",
        title: "Figure 1: Simple Beam - Uniformly Distributed Load",
        beam_type: BeamType::Simple,
        parameters: &[
            ParameterSpec { name: "w", label: "Load (w)", default: 1.0, unit: "N/m" },
            ParameterSpec { name: "l", label: "Length (ℓ)", default: 10.0, unit: "m" },
        ],
        equations: &[
            ("R", "R = V = wℓ/2"),
            ("Vx", "Vₓ = w(ℓ/2 - x)"),
            ("Mmax_center", "Mₘₐₓ (center) = wℓ²/8"),
            ("Mx", "Mₓ = wx/2 · (ℓ - x)"),
            ("Delta_max", "Δₘₐₓ = 5wℓ⁴/(384EI)"),
        ],
        shear: |p| simple::fig1_shear(p.value("w"), p.value("l")),
        moment: |p| simple::fig1_moment(p.value("w"), p.value("l")),
    },
    // Figure 2
    BeamConfiguration {
        id: "fig2",
        title: "Figure 2: Simple Beam - Uniform Load Partially Distributed",
        beam_type: BeamType::Simple,
        parameters: &[
            ParameterSpec { name: "w", label: "Load (w)", default: 1.0, unit: "N/m" },
            ParameterSpec { name: "l", label: "Total Length (ℓ)", default: 12.0, unit: "m" },
            ParameterSpec { name: "a", label: "Dist to Load Start (a)", default: 2.0, unit: "m" },
            ParameterSpec { name: "b", label: "Load Length (b)", default: 6.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = wb/(2ℓ) · (2(ℓ-a-b) + b)"),
            ("R2", "R₂ = wb/(2ℓ) · (2a + b)"),
            ("Vx_partial", "Vₓ (a<x<a+b) = R₁ - w(x-a)"),
            ("Mmax_at_Vx_0", "Mₘₐₓ (at x=a+R₁/w) = R₁(a + R₁/(2w))"),
            ("M_before_load", "Mₓ (x<a) = R₁x"),
            ("M_under_load", "Mₓ (a<x<a+b) = R₁x - w/2 · (x-a)²"),
            ("M_after_load", "Mₓ (x>a+b) = R₂(ℓ-x)"),
        ],
        shear: |p| simple::fig2_shear(p.value("w"), p.value("l"), p.value("a"), p.value("b")),
        moment: |p| simple::fig2_moment(p.value("w"), p.value("l"), p.value("a"), p.value("b")),
    },
    // Figure 3
    BeamConfiguration {
        id: "fig3",
        title: "Figure 3: Simple Beam - Uniform Load Partially Distributed at One End",
        beam_type: BeamType::Simple,
        parameters: &[
            ParameterSpec { name: "w", label: "Load (w)", default: 1.0, unit: "N/m" },
            ParameterSpec { name: "l", label: "Total Length (ℓ)", default: 10.0, unit: "m" },
            ParameterSpec { name: "a", label: "Load Length (a)", default: 6.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = wa/(2ℓ)(2ℓ-a)"),
            ("R2", "R₂ = wa²/(2ℓ)"),
            ("Vx_loaded", "Vₓ(x<a) = R₁ - wx"),
            ("Mmax", "Mₘₐₓ(x=R₁/w) = R₁²/(2w)"),
            ("Mx_loaded", "Mₓ(x<a) = R₁x - wx²/2"),
            ("Mx_unloaded", "Mₓ(x>a) = R₂(ℓ-x)"),
        ],
        shear: |p| simple::fig3_shear(p.value("w"), p.value("l"), p.value("a")),
        moment: |p| simple::fig3_moment(p.value("w"), p.value("l"), p.value("a")),
    },
    // Figure 4
    BeamConfiguration {
        id: "fig4",
        title: "Figure 4: Simple Beam - Uniform Load Partially Distributed at Each End",
        beam_type: BeamType::Simple,
        parameters: &[
            ParameterSpec { name: "w1", label: "Load Left (w₁)", default: 1.0, unit: "N/m" },
            ParameterSpec { name: "w2", label: "Load Right (w₂)", default: 0.8, unit: "N/m" },
            ParameterSpec { name: "l", label: "Total Length (ℓ)", default: 15.0, unit: "m" },
            ParameterSpec { name: "a", label: "Load Length Left (a)", default: 4.0, unit: "m" },
            ParameterSpec { name: "c", label: "Load Length Right (c)", default: 5.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = V₁ = (w₁a(2ℓ-a) + w₂c²)/(2ℓ)"),
            ("R2", "R₂ = V₂ = (w₂c(2ℓ-c) + w₁a²)/(2ℓ)"),
            ("Vx_a", "Vₓ(x<a) = R₁ - w₁x"),
            ("Vx_b", "Vₓ(a<x<ℓ-c) = R₁ - w₁a"),
            ("Vx_c", "Vₓ(x>ℓ-c) = R₂ - w₂(ℓ-x)"),
            ("M_a", "Mₓ(x<a) = R₁x - w₁x²/2"),
            ("M_b", "Mₓ(a<x<ℓ-c) = R₁x - w₁a(x - a/2)"),
            ("M_c", "Mₓ(x>ℓ-c) = R₂(ℓ-x) - w₂(ℓ-x)²/2"),
        ],
        shear: |p| {
            simple::fig4_shear(p.value("w1"), p.value("w2"), p.value("l"), p.value("a"), p.value("c"))
        },
        moment: |p| {
            simple::fig4_moment(p.value("w1"), p.value("w2"), p.value("l"), p.value("a"), p.value("c"))
        },
    },
    // Figure 5
    BeamConfiguration {
        id: "fig5",
        title: "Figure 5: Simple Beam - Load Increasing Uniformly to One End",
        beam_type: BeamType::Simple,
        parameters: &[
            ParameterSpec { name: "W_peak", label: "Peak Load (w₀ at ℓ)", default: 10.0, unit: "N/m" },
            ParameterSpec { name: "l", label: "Length (ℓ)", default: 10.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = V₁ = w₀ℓ/6"),
            ("R2", "R₂ = V₂ = w₀ℓ/3"),
            ("Vx", "Vₓ = w₀ℓ/6 - w₀x²/(2ℓ)"),
            ("Mmax", "Mₘₐₓ(x=ℓ/√3) = w₀ℓ²/(9√3)"),
            ("Mx", "Mₓ = w₀x/(6ℓ) · (ℓ² - x²)"),
        ],
        shear: |p| simple::fig5_shear(p.value("W_peak"), p.value("l")),
        moment: |p| simple::fig5_moment(p.value("W_peak"), p.value("l")),
    },
    // Figure 6
    BeamConfiguration {
        id: "fig6",
        title: "Figure 6: Simple Beam - Load Increasing Uniformly to Center",
        beam_type: BeamType::Simple,
        parameters: &[
            ParameterSpec { name: "W_peak", label: "Peak Load (w₀ at center)", default: 5.0, unit: "N/m" },
            ParameterSpec { name: "l", label: "Length (ℓ)", default: 10.0, unit: "m" },
        ],
        equations: &[
            ("R", "R = V = w₀ℓ/4"),
            ("Vx_half", "Vₓ(x<ℓ/2) = w₀ℓ/4 - 2w₀x²/ℓ²"),
            ("Mmax_center", "Mₘₐₓ(center) = w₀ℓ²/12"),
            ("Mx_half", "Mₓ(x<ℓ/2) = w₀x/2 · (ℓ/2 - 2x²/(3ℓ))"),
        ],
        shear: |p| simple::fig6_shear(p.value("W_peak"), p.value("l")),
        moment: |p| simple::fig6_moment(p.value("W_peak"), p.value("l")),
    },
    // Figure 7
    BeamConfiguration {
        id: "fig7",
        title: "Figure 7: Simple Beam - Concentrated Load at Center",
        beam_type: BeamType::Simple,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 10.0, unit: "N" },
            ParameterSpec { name: "l", label: "Length (ℓ)", default: 10.0, unit: "m" },
        ],
        equations: &[
            ("R", "R = V = P/2"),
            ("Mmax_load", "Mₘₐₓ (at load) = Pℓ/4"),
            ("Mx_half", "Mₓ (x < ℓ/2) = Px/2"),
            ("Delta_max", "Δₘₐₓ = Pℓ³/(48EI)"),
        ],
        shear: |p| simple::fig7_shear(p.value("P"), p.value("l")),
        moment: |p| simple::fig7_moment(p.value("P"), p.value("l")),
    },
    // Figure 8
    BeamConfiguration {
        id: "fig8",
        title: "Figure 8: Simple Beam - Concentrated Load at Any Point",
        beam_type: BeamType::Simple,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 10.0, unit: "N" },
            ParameterSpec { name: "l", label: "Total Length (ℓ)", default: 10.0, unit: "m" },
            ParameterSpec { name: "a", label: "Dist to Load (a)", default: 3.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = Pb/ℓ (b=ℓ-a)"),
            ("R2", "R₂ = Pa/ℓ"),
            ("Mmax_load", "Mₘₐₓ(at load) = Pab/ℓ"),
            ("Mx_left", "Mₓ(x<a) = Pbx/ℓ"),
            ("Mx_right", "Mₓ(x>a) = Pa(ℓ-x)/ℓ"),
        ],
        shear: |p| simple::fig8_shear(p.value("P"), p.value("l"), p.value("a")),
        moment: |p| simple::fig8_moment(p.value("P"), p.value("l"), p.value("a")),
    },
    // Figure 9
    BeamConfiguration {
        id: "fig9",
        title: "Figure 9: Simple Beam - Two Equal Concentrated Loads Symmetrically Placed",
        beam_type: BeamType::Simple,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 5.0, unit: "N" },
            ParameterSpec { name: "l", label: "Total Length (ℓ)", default: 12.0, unit: "m" },
            ParameterSpec { name: "a", label: "Dist from Support (a)", default: 3.0, unit: "m" },
        ],
        equations: &[
            ("R", "R = V = P"),
            ("Mmax_between", "Mₘₐₓ(between loads) = Pa"),
            ("Mx_outside", "Mₓ(x<a) = Px"),
            ("Delta_max", "Δₘₐₓ(center) = Pa/(24EI)(3ℓ² - 4a²)"),
        ],
        shear: |p| simple::fig9_shear(p.value("P"), p.value("l"), p.value("a")),
        moment: |p| simple::fig9_moment(p.value("P"), p.value("l"), p.value("a")),
    },
    // Figure 10
    BeamConfiguration {
        id: "fig10",
        title: "Figure 10: Simple Beam - Two Equal Concentrated Loads Unsymmetrically Placed",
        beam_type: BeamType::Simple,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 7.0, unit: "N" },
            ParameterSpec { name: "l", label: "Total Length (ℓ)", default: 15.0, unit: "m" },
            ParameterSpec { name: "a_dist", label: "Dist to 1st Load (a)", default: 4.0, unit: "m" },
            ParameterSpec { name: "b_dist", label: "Dist from Right to 2nd Load (b)", default: 5.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = P/ℓ((ℓ-a) + b)"),
            ("R2", "R₂ = P/ℓ(a + (ℓ-b))"),
            ("V1", "V₁(x<a) = R₁"),
            ("V2", "V₂(a<x<ℓ-b) = R₁ - P"),
            ("V3", "V₃(x>ℓ-b) = -R₂"),
            ("M1", "M₁(at 1st load) = R₁a"),
            ("M2", "M₂(at 2nd load) = R₂b"),
        ],
        shear: |p| simple::fig10_shear(p.value("P"), p.value("l"), p.value("a_dist"), p.value("b_dist")),
        moment: |p| simple::fig10_moment(p.value("P"), p.value("l"), p.value("a_dist"), p.value("b_dist")),
    },
    // Figure 11
    BeamConfiguration {
        id: "fig11",
        title: "Figure 11: Simple Beam - Two Unequal Concentrated Loads Unsymmetrically Placed",
        beam_type: BeamType::Simple,
        parameters: &[
            ParameterSpec { name: "P1", label: "Load P₁", default: 8.0, unit: "N" },
            ParameterSpec { name: "P2", label: "Load P₂", default: 6.0, unit: "N" },
            ParameterSpec { name: "l", label: "Total Length (ℓ)", default: 15.0, unit: "m" },
            ParameterSpec { name: "a", label: "Dist to P₁ (a)", default: 4.0, unit: "m" },
            ParameterSpec { name: "b_spacing", label: "Dist P₁ to P₂ (b)", default: 5.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = (P₁(ℓ-a) + P₂(ℓ-a-b))/ℓ"),
            ("R2", "R₂ = (P₁a + P₂(a+b))/ℓ"),
            ("V_between", "V (a<x<a+b) = R₁ - P₁"),
            ("M_at_P1", "M (at P₁) = R₁a"),
            ("M_at_P2", "M (at P₂) = R₂(ℓ-(a+b))"),
        ],
        shear: |p| {
            simple::fig11_shear(p.value("P1"), p.value("P2"), p.value("l"), p.value("a"), p.value("b_spacing"))
        },
        moment: |p| {
            simple::fig11_moment(p.value("P1"), p.value("P2"), p.value("l"), p.value("a"), p.value("b_spacing"))
        },
    },
    // Figure 12
    BeamConfiguration {
        id: "fig12",
        title: "Figure 12: Cantilever Beam - Uniformly Distributed Load",
        beam_type: BeamType::Cantilever,
        parameters: &[
            ParameterSpec { name: "w", label: "Load (w)", default: 1.0, unit: "N/m" },
            ParameterSpec { name: "l", label: "Length (ℓ)", default: 10.0, unit: "m" },
        ],
        equations: &[
            ("R_Vmax", "R = V = wℓ"),
            ("Vx", "Vₓ = wx (x from free)"),
            ("Mmax_fixed", "Mₘₐₓ(fixed end) = wℓ²/2"),
            ("Mx", "Mₓ = wx²/2 (x from free)"),
            ("Delta_max", "Δₘₐₓ(free) = wℓ⁴/(8EI)"),
        ],
        shear: |p| cantilever::fig12_shear(p.value("w"), p.value("l")),
        moment: |p| cantilever::fig12_moment(p.value("w"), p.value("l")),
    },
    // Figure 13
    BeamConfiguration {
        id: "fig13",
        title: "Figure 13: Cantilever Beam - Concentrated Load at Free End",
        beam_type: BeamType::Cantilever,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 5.0, unit: "N" },
            ParameterSpec { name: "l", label: "Length (ℓ)", default: 10.0, unit: "m" },
        ],
        equations: &[
            ("R_V", "R = V = P"),
            ("Mmax_fixed", "Mₘₐₓ(fixed end) = Pℓ"),
            ("Mx", "Mₓ = Px (x from free)"),
            ("Delta_max", "Δₘₐₓ(free) = Pℓ³/(3EI)"),
        ],
        shear: |p| cantilever::fig13_shear(p.value("P"), p.value("l")),
        moment: |p| cantilever::fig13_moment(p.value("P"), p.value("l")),
    },
    // Figure 14
    BeamConfiguration {
        id: "fig14",
        title: "Figure 14: Cantilever Beam - Concentrated Load at Any Point",
        beam_type: BeamType::Cantilever,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 5.0, unit: "N" },
            ParameterSpec { name: "l", label: "Total Length (ℓ)", default: 10.0, unit: "m" },
            ParameterSpec { name: "a_load", label: "Dist from Fixed to Load (a)", default: 4.0, unit: "m" },
        ],
        equations: &[
            ("R_V", "R = V = P"),
            ("Mmax_fixed", "Mₘₐₓ(fixed end) = Pa (a=dist from fixed)"),
            ("Mx_loaded", "Mₓ(x<a, x from fixed) = P(a-x)"),
            ("Delta_max", "Δₘₐₓ(free) = Pb²/(6EI)(3ℓ-b) (b=dist load to free)"),
        ],
        shear: |p| cantilever::fig14_shear(p.value("P"), p.value("l"), p.value("a_load")),
        moment: |p| cantilever::fig14_moment(p.value("P"), p.value("l"), p.value("a_load")),
    },
    // Figure 15
    BeamConfiguration {
        id: "fig15",
        title: "Figure 15: Beam Fixed at One End, Supported at Other - Uniformly Distributed Load",
        beam_type: BeamType::ProppedCantilever,
        parameters: &[
            ParameterSpec { name: "w", label: "Load (w)", default: 1.0, unit: "N/m" },
            ParameterSpec { name: "l", label: "Length (ℓ)", default: 10.0, unit: "m" },
        ],
        equations: &[
            ("R1V1", "R₁ (fixed) = V₁ = 5wℓ/8"),
            ("R2V2", "R₂ (support) = V₂ = 3wℓ/8"),
            ("M_fixed", "M(fixed) = -wℓ²/8 (hogging)"),
            ("M_positive_max", "M(x=3ℓ/8) = +9wℓ²/128"),
            ("Delta_max", "Δₘₐₓ(x≈0.4215ℓ from fixed) = wℓ⁴/(185EI)"),
        ],
        shear: |p| propped::fig15_shear(p.value("w"), p.value("l")),
        moment: |p| propped::fig15_moment(p.value("w"), p.value("l")),
    },
    // Figure 16
    BeamConfiguration {
        id: "fig16",
        title: "Figure 16: Beam Fixed at One End, Supported at Other - Concentrated Load at Center",
        beam_type: BeamType::ProppedCantilever,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 10.0, unit: "N" },
            ParameterSpec { name: "l", label: "Length (ℓ)", default: 10.0, unit: "m" },
        ],
        equations: &[
            ("R1V1", "R₁ (fixed) = V₁ = 11P/16"),
            ("R2V2", "R₂ (support) = V₂ = 5P/16"),
            ("M_fixed", "M(fixed) = -3Pℓ/16 (hogging)"),
            ("M_load", "M(load) = +5Pℓ/32 (sagging)"),
            ("Delta_max", "Δₘₐₓ(x≈0.4472ℓ from fixed) = Pℓ³/(48EI√5)"),
        ],
        shear: |p| propped::fig16_shear(p.value("P"), p.value("l")),
        moment: |p| propped::fig16_moment(p.value("P"), p.value("l")),
    },
    // Figure 17
    BeamConfiguration {
        id: "fig17",
        title: "Figure 17: Beam Fixed at One End, Supported at Other - Concentrated Load at Any Point",
        beam_type: BeamType::ProppedCantilever,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 10.0, unit: "N" },
            ParameterSpec { name: "l", label: "Length (ℓ)", default: 10.0, unit: "m" },
            ParameterSpec { name: "a_load", label: "Dist from Fixed to Load (a)", default: 4.0, unit: "m" },
        ],
        equations: &[
            ("R1_fixed", "R₁ (fixed) = Pb²(ℓ+2a)/(2ℓ³)"),
            ("R2_support", "R₂ (support) = Pa²(3ℓ-a)/(2ℓ³)"),
            ("M_fixed", "M (fixed) = -Pab²/ℓ²"),
            ("M_at_load", "M (at load) = R₁a + M_fixed"),
        ],
        shear: |p| propped::fig17_shear(p.value("P"), p.value("l"), p.value("a_load")),
        moment: |p| propped::fig17_moment(p.value("P"), p.value("l"), p.value("a_load")),
    },
    // Figure 18
    BeamConfiguration {
        id: "fig18",
        title: "Figure 18: Beam Overhanging One Support - Uniformly Distributed Load",
        beam_type: BeamType::SingleOverhang,
        parameters: &[
            ParameterSpec { name: "w", label: "Load (w)", default: 1.0, unit: "N/m" },
            ParameterSpec { name: "l_span", label: "Span (ℓ)", default: 8.0, unit: "m" },
            ParameterSpec { name: "a_overhang", label: "Overhang (a)", default: 2.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = w/(2ℓ)(ℓ² - a²)"),
            ("R2", "R₂ = w/(2ℓ)(ℓ + a)²"),
            ("M2_support", "M₂(R₂) = -wa²/2 (hogging)"),
            ("M_max_span", "M₁ₘₐₓ(span) if R₁ > 0"),
        ],
        shear: |p| overhang::fig18_shear(p.value("w"), p.value("l_span"), p.value("a_overhang")),
        moment: |p| overhang::fig18_moment(p.value("w"), p.value("l_span"), p.value("a_overhang")),
    },
    // Figure 19
    BeamConfiguration {
        id: "fig19",
        title: "Figure 19: Beam Overhanging One Support - UDL on Overhang",
        beam_type: BeamType::SingleOverhang,
        parameters: &[
            ParameterSpec { name: "w", label: "Load (w)", default: 1.0, unit: "N/m" },
            ParameterSpec { name: "l_span", label: "Span (ℓ)", default: 8.0, unit: "m" },
            ParameterSpec { name: "a_overhang", label: "Overhang (a)", default: 3.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = -wa²/(2ℓ) (downward)"),
            ("R2", "R₂ = wa/(2ℓ)(2ℓ + a) (upward)"),
            ("Mmax_R2", "Mₘₐₓ(R₂) = -wa²/2 (hogging)"),
        ],
        shear: |p| overhang::fig19_shear(p.value("w"), p.value("l_span"), p.value("a_overhang")),
        moment: |p| overhang::fig19_moment(p.value("w"), p.value("l_span"), p.value("a_overhang")),
    },
    // Figure 20
    BeamConfiguration {
        id: "fig20",
        title: "Figure 20: Beam Overhanging One Support - Concentrated Load at End of Overhang",
        beam_type: BeamType::SingleOverhang,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 5.0, unit: "N" },
            ParameterSpec { name: "l_span", label: "Span (ℓ)", default: 8.0, unit: "m" },
            ParameterSpec { name: "a_overhang", label: "Overhang (a)", default: 3.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = -Pa/ℓ (downward)"),
            ("R2", "R₂ = P(ℓ + a)/ℓ (upward)"),
            ("Mmax_R2", "Mₘₐₓ(R₂) = -Pa (hogging)"),
        ],
        shear: |p| overhang::fig20_shear(p.value("P"), p.value("l_span"), p.value("a_overhang")),
        moment: |p| overhang::fig20_moment(p.value("P"), p.value("l_span"), p.value("a_overhang")),
    },
    // Figure 21
    BeamConfiguration {
        id: "fig21",
        title: "Figure 21: Beam Overhanging One Support - Concentrated Load Between Supports",
        beam_type: BeamType::SingleOverhang,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 10.0, unit: "N" },
            ParameterSpec { name: "l_span", label: "Span (ℓ)", default: 10.0, unit: "m" },
            ParameterSpec { name: "a_load", label: "Dist from Left to Load (a)", default: 3.0, unit: "m" },
            ParameterSpec { name: "x1_overhang", label: "Overhang Length (x₁)", default: 2.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = Pb/ℓ (b=ℓ-a)"),
            ("R2", "R₂ = Pa/ℓ"),
            ("M_load", "M(load) = Pab/ℓ"),
        ],
        shear: |p| {
            overhang::fig21_shear(p.value("P"), p.value("l_span"), p.value("a_load"), p.value("x1_overhang"))
        },
        moment: |p| {
            overhang::fig21_moment(p.value("P"), p.value("l_span"), p.value("a_load"), p.value("x1_overhang"))
        },
    },
    // Figure 22
    BeamConfiguration {
        id: "fig22",
        title: "Figure 22: Beam Overhanging Both Supports - UDL",
        beam_type: BeamType::DoubleOverhang,
        parameters: &[
            ParameterSpec { name: "w", label: "Load (w)", default: 1.0, unit: "N/m" },
            ParameterSpec { name: "l_span", label: "Span (ℓ)", default: 10.0, unit: "m" },
            ParameterSpec { name: "a_left", label: "Left Overhang (a)", default: 2.0, unit: "m" },
            ParameterSpec { name: "c_right", label: "Right Overhang (c)", default: 3.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = wℓ/2 + wa - wc²/(2ℓ) + wa²/(2ℓ)"),
            ("R2", "R₂ = wℓ/2 + wc - wa²/(2ℓ) + wc²/(2ℓ)"),
            ("M_at_R1", "M(R₁) = -wa²/2"),
            ("M_at_R2", "M(R₂) = -wc²/2"),
        ],
        shear: |p| {
            overhang::fig22_shear(p.value("w"), p.value("l_span"), p.value("a_left"), p.value("c_right"))
        },
        moment: |p| {
            overhang::fig22_moment(p.value("w"), p.value("l_span"), p.value("a_left"), p.value("c_right"))
        },
    },
    // Figure 23
    BeamConfiguration {
        id: "fig23",
        title: "Figure 23: Beam Fixed at Both Ends - Uniformly Distributed Load",
        beam_type: BeamType::FixedBothEnds,
        parameters: &[
            ParameterSpec { name: "w", label: "Load (w)", default: 1.0, unit: "N/m" },
            ParameterSpec { name: "l", label: "Length (ℓ)", default: 10.0, unit: "m" },
        ],
        equations: &[
            ("R_V", "R = V = wℓ/2"),
            ("M_ends", "M(ends) = -wℓ²/12 (hogging)"),
            ("M_center", "M(center) = +wℓ²/24 (sagging)"),
            ("Delta_max", "Δₘₐₓ = wℓ⁴/(384EI)"),
        ],
        shear: |p| fixed::fig23_shear(p.value("w"), p.value("l")),
        moment: |p| fixed::fig23_moment(p.value("w"), p.value("l")),
    },
    // Figure 24
    BeamConfiguration {
        id: "fig24",
        title: "Figure 24: Beam Fixed at Both Ends - Concentrated Load at Center",
        beam_type: BeamType::FixedBothEnds,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 10.0, unit: "N" },
            ParameterSpec { name: "l", label: "Length (ℓ)", default: 10.0, unit: "m" },
        ],
        equations: &[
            ("R_V", "R = V = P/2"),
            ("M_ends_center", "M(ends & center) = ±Pℓ/8"),
            ("Delta_max", "Δₘₐₓ = Pℓ³/(192EI)"),
        ],
        shear: |p| fixed::fig24_shear(p.value("P"), p.value("l")),
        moment: |p| fixed::fig24_moment(p.value("P"), p.value("l")),
    },
    // Figure 25
    BeamConfiguration {
        id: "fig25",
        title: "Figure 25: Beam Fixed at Both Ends - Concentrated Load at Any Point",
        beam_type: BeamType::FixedBothEnds,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 10.0, unit: "N" },
            ParameterSpec { name: "l", label: "Length (ℓ)", default: 10.0, unit: "m" },
            ParameterSpec { name: "a_load", label: "Dist to Load (a)", default: 3.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = Pb²(3a+b)/ℓ³"),
            ("R2", "R₂ = Pa²(a+3b)/ℓ³"),
            ("M1_fixed", "M₁(left fixed) = -Pab²/ℓ²"),
            ("M2_fixed", "M₂(right fixed) = -Pa²b/ℓ²"),
            ("M_load", "M(load) = +2Pa²b²/ℓ³"),
        ],
        shear: |p| fixed::fig25_shear(p.value("P"), p.value("l"), p.value("a_load")),
        moment: |p| fixed::fig25_moment(p.value("P"), p.value("l"), p.value("a_load")),
    },
    // Figure 26
    BeamConfiguration {
        id: "fig26",
        title: "Figure 26: Continuous Beam - Two Equal Spans - Uniform Load on One Span (Left)",
        beam_type: BeamType::ContinuousTwoEqualSpan,
        parameters: &[
            ParameterSpec { name: "w", label: "Load (w)", default: 1.0, unit: "N/m" },
            ParameterSpec { name: "l_span", label: "Span Length (ℓ)", default: 10.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = 7wℓ/16"),
            ("R2", "R₂ = 5wℓ/8"),
            ("R3", "R₃ = -wℓ/16 (downward)"),
            ("M_R2", "M(R₂) = -wℓ²/16"),
        ],
        shear: |p| continuous::fig26_shear(p.value("w"), p.value("l_span")),
        moment: |p| continuous::fig26_moment(p.value("w"), p.value("l_span")),
    },
    // Figure 27
    BeamConfiguration {
        id: "fig27",
        title: "Figure 27: Continuous Beam - Two Equal Spans - Conc. Load at Center of One Span (Left)",
        beam_type: BeamType::ContinuousTwoEqualSpan,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 10.0, unit: "N" },
            ParameterSpec { name: "l_span", label: "Span Length (ℓ)", default: 10.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = 13P/32"),
            ("R2", "R₂ = 11P/16"),
            ("R3", "R₃ = -3P/32 (downward)"),
            ("M_R2", "M(R₂) = -3Pℓ/32"),
        ],
        shear: |p| continuous::fig27_shear(p.value("P"), p.value("l_span")),
        moment: |p| continuous::fig27_moment(p.value("P"), p.value("l_span")),
    },
    // Figure 28
    BeamConfiguration {
        id: "fig28",
        title: "Figure 28: Continuous Beam - Two Equal Spans - Conc. Load at Any Point in One Span (Left)",
        beam_type: BeamType::ContinuousTwoEqualSpan,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 10.0, unit: "N" },
            ParameterSpec { name: "l_span", label: "Span Length (ℓ)", default: 10.0, unit: "m" },
            ParameterSpec { name: "a_load", label: "Dist to Load in Left Span (a)", default: 3.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = Pb/(4ℓ³)(4ℓ² - a(ℓ+a)) (b=ℓ-a)"),
            ("R2", "R₂ = Pa/(2ℓ³)(2ℓ² + b(ℓ+a))"),
            ("R3", "R₃ = -Pab/(4ℓ³)(ℓ+a)"),
            ("M_R2", "M(R₂) = -Pab(ℓ+a)/(4ℓ²)"),
        ],
        shear: |p| continuous::fig28_shear(p.value("P"), p.value("l_span"), p.value("a_load")),
        moment: |p| continuous::fig28_moment(p.value("P"), p.value("l_span"), p.value("a_load")),
    },
    // Figure 29
    BeamConfiguration {
        id: "fig29",
        title: "Figure 29: Continuous Beam - Two Equal Spans - Uniformly Distributed Load (on both)",
        beam_type: BeamType::ContinuousTwoEqualSpan,
        parameters: &[
            ParameterSpec { name: "w", label: "Load (w)", default: 1.0, unit: "N/m" },
            ParameterSpec { name: "l_span", label: "Span Length (ℓ)", default: 10.0, unit: "m" },
        ],
        equations: &[
            ("R1R3", "R₁ = R₃ = 3wℓ/8"),
            ("R2", "R₂ = 10wℓ/8"),
            ("M_R2", "M(R₂) = -wℓ²/8"),
            ("Delta_max", "Δₘₐₓ(0.4215ℓ from R₁/R₃) = wℓ⁴/(185EI)"),
        ],
        shear: |p| continuous::fig29_shear(p.value("w"), p.value("l_span")),
        moment: |p| continuous::fig29_moment(p.value("w"), p.value("l_span")),
    },
    // Figure 30
    BeamConfiguration {
        id: "fig30",
        title: "Figure 30: Continuous Beam - Two Equal Spans - Two Equal Concentrated Loads Symmetrically Placed (on both)",
        beam_type: BeamType::ContinuousTwoEqualSpan,
        parameters: &[
            ParameterSpec { name: "P", label: "Load (P)", default: 5.0, unit: "N" },
            ParameterSpec { name: "l_span", label: "Span Length (ℓ)", default: 12.0, unit: "m" },
            ParameterSpec { name: "a_dist", label: "Dist from Support (a)", default: 3.0, unit: "m" },
        ],
        equations: &[
            ("R1R3", "R₁ = R₃ = P(1 - a²/ℓ²)"),
            ("R2", "R₂ = 2Pa²/ℓ²"),
            ("M_R2", "M(R₂) = -Pa²/ℓ"),
        ],
        shear: |p| continuous::fig30_shear(p.value("P"), p.value("l_span"), p.value("a_dist")),
        moment: |p| continuous::fig30_moment(p.value("P"), p.value("l_span"), p.value("a_dist")),
    },
    // Figure 31
    BeamConfiguration {
        id: "fig31",
        title: "Figure 31: Continuous Beam - Two Unequal Spans - Uniformly Distributed Load (on both)",
        beam_type: BeamType::ContinuousTwoUnequalSpan,
        parameters: &[
            ParameterSpec { name: "w", label: "Load (w)", default: 1.0, unit: "N/m" },
            ParameterSpec { name: "l1", label: "Span 1 (ℓ₁)", default: 10.0, unit: "m" },
            ParameterSpec { name: "l2", label: "Span 2 (ℓ₂)", default: 8.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = wℓ₁/2 - M₂/ℓ₁"),
            ("R2", "R₂ = w(ℓ₁+ℓ₂)/2 + M₂/ℓ₁ + M₂/ℓ₂"),
            ("R3", "R₃ = wℓ₂/2 - M₂/ℓ₂"),
            ("M2", "M₂(support R₂) = -w(ℓ₁³+ℓ₂³)/(8(ℓ₁+ℓ₂))"),
        ],
        shear: |p| continuous::fig31_shear(p.value("w"), p.value("l1"), p.value("l2")),
        moment: |p| continuous::fig31_moment(p.value("w"), p.value("l1"), p.value("l2")),
    },
    // Figure 32
    BeamConfiguration {
        id: "fig32",
        title: "Figure 32: Continuous Beam - Two Unequal Spans - Concentrated Load on Each Span Symmetrically Placed (Center)",
        beam_type: BeamType::ContinuousTwoUnequalSpan,
        parameters: &[
            ParameterSpec { name: "P1", label: "Load on Span 1 (P₁)", default: 10.0, unit: "N" },
            ParameterSpec { name: "P2", label: "Load on Span 2 (P₂)", default: 8.0, unit: "N" },
            ParameterSpec { name: "l1", label: "Span 1 (ℓ₁)", default: 10.0, unit: "m" },
            ParameterSpec { name: "l2", label: "Span 2 (ℓ₂)", default: 12.0, unit: "m" },
        ],
        equations: &[
            ("R1", "R₁ = P₁/2 - M₂/ℓ₁"),
            ("R2", "R₂ = (P₁+P₂)/2 + M₂/ℓ₁ + M₂/ℓ₂"),
            ("R3", "R₃ = P₂/2 - M₂/ℓ₂"),
            ("M2", "M₂(support R₂) = -(P₁ℓ₁²+P₂ℓ₂²)/(8(ℓ₁+ℓ₂))"),
        ],
        shear: |p| {
            continuous::fig32_shear(p.value("P1"), p.value("P2"), p.value("l1"), p.value("l2"))
        },
        moment: |p| {
            continuous::fig32_moment(p.value("P1"), p.value("P2"), p.value("l1"), p.value("l2"))
        },
    },
];
