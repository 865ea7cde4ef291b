//! # Closed-Form Beam Statics
//!
//! The analytical results the configuration catalog is built from, one
//! submodule per beam family. Determinate cases follow directly from
//! equilibrium; the indeterminate cases (propped cantilever, fixed both
//! ends, two-span continuous) are fixed closed-form results derived from
//! the three-moment theorem for exactly these load cases and are
//! reproduced verbatim - they are not generally re-derivable beam by
//! beam.
//!
//! ## Notation
//!
//! - `l` = Span length, `x` = position from the left reference end
//! - `a`, `b`, `c` = load positions / loaded lengths (per figure)
//! - `p` = Point load magnitude, `w` = distributed load intensity
//! - `r1`, `r2`, `r3` = support reactions, left to right
//!
//! ## Sign Conventions
//!
//! - Loads: positive downward
//! - Reactions: positive upward
//! - Shear: positive when the left side moves up relative to the right
//! - Moment: positive causes tension on the bottom fiber (sagging).
//!   Whether a figure *plots* moment sagging-negative ("Inverted") or
//!   sagging-positive ("Standard Conv.") is a catalog-level choice
//!   carried in the axis label, not a property of these functions.
//!
//! ## References
//!
//! - AISC Steel Construction Manual, "Beam Diagrams and Formulas"
//! - Roark's Formulas for Stress and Strain, 8th Edition
//! - Structural Analysis by R.C. Hibbeler

pub mod cantilever;
pub mod continuous;
pub mod fixed;
pub mod overhang;
pub mod propped;
pub mod simple;
