//! Culvert headwater calculations following the FHWA HDS-5 methodology.
//!
//! Imperial units throughout: lengths in feet, flow in cfs.

pub mod config;
pub mod controlling;
pub mod error;
pub mod geometry;
pub mod inlet_control;
pub mod io;
pub mod outlet_control;
pub mod rating_curve;
pub mod reference;
pub mod samples;

pub use error::{CulvertError, Result};
pub use geometry::{Geometry, ShapeDescriptor, compute_geometry, critical_depth_ratio};
pub use rating_curve::{
    DesignPoint, RatingCurveInput, RatingCurvePoint, compute_design_point, generate_rating_curve,
};
