use crate::controlling::{ControlCondition, ControllingResult, controlling_headwater};
use crate::error::{CulvertError, Result, require_flow};
use crate::geometry::{Geometry, ShapeDescriptor, compute_geometry};
use crate::inlet_control::{InletControlResult, inlet_control};
use crate::outlet_control::{OutletControlResult, outlet_control};
use crate::reference::{
    InletCoefficients, InletType, PipeMaterial, entrance_loss, inlet_coefficients, mannings_n,
};
use serde::Serialize;

pub const DEFAULT_STEPS: usize = 15;

// Sweep covers 10% to 150% of design flow
const MIN_FRACTION: f64 = 0.1;
const FRACTION_SPAN: f64 = 1.4;

/// Everything needed to rate one single-barrel culvert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingCurveInput {
    pub shape: ShapeDescriptor,
    pub inlet_type: InletType,
    pub material: PipeMaterial,
    /// design flow (cfs)
    pub design_q: f64,
    /// barrel length (ft)
    pub length: f64,
    /// barrel slope (ft/ft)
    pub slope: f64,
    /// tailwater depth above the outlet invert (ft)
    pub tailwater: f64,
    /// inlet slope correction
    pub ks: f64,
}

impl RatingCurveInput {
    pub fn validate(&self) -> Result<()> {
        require_flow(self.design_q)?;
        if !(self.length.is_finite() && self.length > 0.0) {
            return Err(CulvertError::InvalidParameter {
                name: "length",
                value: self.length,
            });
        }
        if !(self.tailwater.is_finite() && self.tailwater >= 0.0) {
            return Err(CulvertError::InvalidParameter {
                name: "tailwater",
                value: self.tailwater,
            });
        }
        if !self.slope.is_finite() {
            return Err(CulvertError::InvalidParameter {
                name: "slope",
                value: self.slope,
            });
        }
        if !self.ks.is_finite() {
            return Err(CulvertError::InvalidParameter {
                name: "ks",
                value: self.ks,
            });
        }
        Ok(())
    }
}

/// Full results at the design flow, unrounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesignPoint {
    pub inlet: InletControlResult,
    pub outlet: OutletControlResult,
    pub controlling: ControllingResult,
    pub geometry: Geometry,
}

/// One sampled flow on the HW-Q curve, rounded for presentation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingCurvePoint {
    pub q: f64,
    pub inlet_hw: f64,
    pub outlet_hw: f64,
    pub controlling_hw: f64,
    pub condition: ControlCondition,
    pub velocity: f64,
}

impl RatingCurvePoint {
    fn from_results(q: f64, controlling: &ControllingResult) -> Self {
        RatingCurvePoint {
            q: round_to(q, 2),
            inlet_hw: round_to(controlling.inlet_hw, 3),
            outlet_hw: round_to(controlling.outlet_hw, 3),
            controlling_hw: round_to(controlling.hw, 3),
            condition: controlling.condition,
            velocity: round_to(controlling.velocity, 2),
        }
    }
}

// Geometry and table lookups resolved once per call
struct ResolvedCulvert {
    geometry: Geometry,
    coefficients: InletCoefficients,
    n: f64,
    ke: f64,
}

impl ResolvedCulvert {
    fn resolve(input: &RatingCurveInput) -> Result<Self> {
        input.validate()?;
        let geometry = compute_geometry(&input.shape)?;
        Ok(ResolvedCulvert {
            geometry,
            coefficients: inlet_coefficients(input.shape.shape(), input.inlet_type),
            n: mannings_n(input.material),
            ke: entrance_loss(input.inlet_type),
        })
    }

    fn evaluate(&self, input: &RatingCurveInput, q: f64) -> Result<DesignPoint> {
        let inlet = inlet_control(q, &self.geometry, &self.coefficients, input.slope, input.ks)?;
        let outlet = outlet_control(
            q,
            &self.geometry,
            self.ke,
            self.n,
            input.length,
            input.slope,
            input.tailwater,
        )?;
        let controlling = controlling_headwater(&inlet, &outlet, q, self.geometry.area);
        Ok(DesignPoint {
            inlet,
            outlet,
            controlling,
            geometry: self.geometry,
        })
    }
}

/// Sweeps `steps + 1` evenly spaced fractions of the design flow, from 0.1 to 1.5.
/// Any failing sample fails the whole curve.
pub fn generate_rating_curve(
    input: &RatingCurveInput,
    steps: usize,
) -> Result<Vec<RatingCurvePoint>> {
    if steps == 0 {
        return Err(CulvertError::InvalidParameter {
            name: "steps",
            value: 0.0,
        });
    }
    let culvert = ResolvedCulvert::resolve(input)?;

    (0..=steps)
        .map(|i| {
            let fraction = MIN_FRACTION + FRACTION_SPAN * i as f64 / steps as f64;
            let q = input.design_q * fraction;
            let point = culvert.evaluate(input, q)?;
            Ok(RatingCurvePoint::from_results(q, &point.controlling))
        })
        .collect()
}

pub fn compute_design_point(input: &RatingCurveInput) -> Result<DesignPoint> {
    let culvert = ResolvedCulvert::resolve(input)?;
    culvert.evaluate(input, input.design_q)
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
