//! # beam_core - Shear and Bending Moment Diagram Engine
//!
//! `beam_core` computes shear-force and bending-moment diagrams for 32
//! canonical beam configurations (simple, cantilever, propped cantilever,
//! overhanging, fixed-both-ends, and two-span continuous beams). Each
//! configuration is a hand-derived closed-form result evaluated at sampled
//! positions - there is no numerical solver, no iteration, and no state.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: every diagram is a pure recomputation from the supplied
//!   parameter values; the catalog itself is immutable static data
//! - **JSON-First**: output types implement Serialize for clean transport
//!   to any charting front-end
//! - **In-band failure**: invalid geometry produces an empty point list
//!   with an error-flagged axis label, never a panic or an `Err` - the
//!   caller always has something it can render
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::catalog;
//!
//! // Simple beam with a uniformly distributed load
//! let config = catalog::find("fig1").unwrap();
//! let params = config.defaults();
//!
//! let shear = config.shear_diagram(&params);
//! let moment = config.moment_diagram(&params);
//!
//! assert_eq!(shear.axis_label, "V");
//! assert_eq!(shear.points.first().unwrap().y, 5.0); // R1 = wl/2
//! ```
//!
//! ## Modules
//!
//! - [`catalog`] - The 32-entry configuration catalog and its data model
//! - [`equations`] - Closed-form statics results the catalog is built from
//! - [`sampler`] - Piecewise curve sampling, stitching, and mirroring
//! - [`geometry`] - Shared geometric validity checks
//! - [`errors`] - Structured error types

pub mod catalog;
pub mod equations;
pub mod errors;
pub mod geometry;
pub mod sampler;

// Re-export commonly used types at crate root for convenience
pub use catalog::{BeamConfiguration, BeamType, DiagramSeries, ParamSet, ParameterSpec, Point};
pub use errors::{CatalogError, CatalogResult, GeometryError};
