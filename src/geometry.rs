use crate::error::{CulvertError, Result, require_positive};
use crate::reference::CulvertShape;
use std::f64::consts::PI;

/// Gravitational acceleration (ft/s^2). The engine works in feet and cfs throughout.
pub const G: f64 = 32.2;

/// Barrel cross-section, one variant per shape carrying only its own dimensions (ft).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeDescriptor {
    Circular { diameter: f64 },
    Rectangular { span: f64, rise: f64 },
    Elliptical { span: f64, rise: f64 },
}

impl ShapeDescriptor {
    /// Builds a descriptor from loosely-filled form fields. Fields the shape
    /// does not use are ignored; a field it needs but is absent fails.
    pub fn from_parts(
        shape: CulvertShape,
        diameter: Option<f64>,
        span: Option<f64>,
        rise: Option<f64>,
    ) -> Result<Self> {
        let take = |name: &'static str, v: Option<f64>| {
            v.ok_or_else(|| CulvertError::missing_dimension(name))
        };
        Ok(match shape {
            CulvertShape::Circular => ShapeDescriptor::Circular {
                diameter: take("diameter", diameter)?,
            },
            CulvertShape::Rectangular => ShapeDescriptor::Rectangular {
                span: take("span", span)?,
                rise: take("rise", rise)?,
            },
            CulvertShape::Elliptical => ShapeDescriptor::Elliptical {
                span: take("span", span)?,
                rise: take("rise", rise)?,
            },
        })
    }

    pub fn shape(&self) -> CulvertShape {
        match self {
            ShapeDescriptor::Circular { .. } => CulvertShape::Circular,
            ShapeDescriptor::Rectangular { .. } => CulvertShape::Rectangular,
            ShapeDescriptor::Elliptical { .. } => CulvertShape::Elliptical,
        }
    }
}

/// Full-barrel section properties.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// ft^2
    pub area: f64,
    /// ft
    pub wetted_perimeter: f64,
    /// area / wetted perimeter (ft)
    pub hydraulic_radius: f64,
    /// characteristic height: diameter or rise (ft)
    pub d: f64,
}

impl Geometry {
    fn new(area: f64, wetted_perimeter: f64, d: f64) -> Self {
        Geometry {
            area,
            wetted_perimeter,
            hydraulic_radius: area / wetted_perimeter,
            d,
        }
    }
}

pub fn compute_geometry(shape: &ShapeDescriptor) -> Result<Geometry> {
    match *shape {
        ShapeDescriptor::Circular { diameter } => {
            let d = require_positive("diameter", diameter)?;
            Ok(Geometry::new(PI / 4.0 * d * d, PI * d, d))
        }
        ShapeDescriptor::Rectangular { span, rise } => {
            let w = require_positive("span", span)?;
            let h = require_positive("rise", rise)?;
            Ok(Geometry::new(w * h, 2.0 * (w + h), h))
        }
        ShapeDescriptor::Elliptical { span, rise } => {
            let w = require_positive("span", span)?;
            let h = require_positive("rise", rise)?;
            Ok(Geometry::new(
                PI / 4.0 * w * h,
                ellipse_perimeter(w / 2.0, h / 2.0),
                h,
            ))
        }
    }
}

/// Ramanujan's second approximation for semi-axes a and b.
fn ellipse_perimeter(a: f64, b: f64) -> f64 {
    let h = ((a - b) / (a + b)).powi(2);
    PI * (a + b) * (1.0 + 3.0 * h / (10.0 + (4.0 - 3.0 * h).sqrt()))
}

/// Estimate of Hc/D from the full-barrel Froude number:
/// Hc/D ~= min(0.5 * (Fr^2 + 1)^(1/3), 1.0), with Fr^2 = V^2 / (g D).
///
/// This is a full-pipe simplification, not an open-channel critical depth
/// root-find, and it is capped at the crown.
pub fn critical_depth_ratio(q: f64, area: f64, d: f64, g: f64) -> f64 {
    let v = q / area;
    let fr2 = v * v / (g * d);
    f64::min(0.5 * (fr2 + 1.0).cbrt(), 1.0)
}
