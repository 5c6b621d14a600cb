//! Inlet control headwater, HDS-5 Form 1 equations.
//!
//! Unsubmerged: HW/D = Hc/D + K * Qs^M + Ks * S
//! Submerged:   HW/D = c * Qs^2 + Y + Ks * S
//! where Qs = Q / (A * D^0.5).
//!
//! Both forms are evaluated and the larger one is used, which gives a smooth
//! hand-over between regimes instead of a hard switch at Qs ~= 3.5.
use crate::error::{Result, require_flow};
use crate::geometry::{G, Geometry, critical_depth_ratio};
use crate::reference::InletCoefficients;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InletRegime {
    Unsubmerged,
    Submerged,
}

impl fmt::Display for InletRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InletRegime::Unsubmerged => f.pad("unsubmerged"),
            InletRegime::Submerged => f.pad("submerged"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InletControlResult {
    /// headwater depth above the inlet invert (ft)
    pub hw: f64,
    pub hw_over_d: f64,
    pub regime: InletRegime,
}

/// `ks` is the slope correction supplied by the caller (0 for headwall and
/// projecting inlets, -0.5 for mitered by convention). It is applied to both
/// forms unchanged.
pub fn inlet_control(
    q: f64,
    geometry: &Geometry,
    coefficients: &InletCoefficients,
    slope: f64,
    ks: f64,
) -> Result<InletControlResult> {
    let q = require_flow(q)?;
    let Geometry { area, d, .. } = *geometry;
    let InletCoefficients { k, m, c, y } = *coefficients;

    let q_star = q / (area * d.sqrt());
    let slope_term = ks * slope;

    let hc_over_d = critical_depth_ratio(q, area, d, G);
    let unsubmerged = hc_over_d + k * q_star.powf(m) + slope_term;
    let submerged = c * q_star * q_star + y + slope_term;

    let (hw_over_d, regime) = if submerged > unsubmerged {
        (submerged, InletRegime::Submerged)
    } else {
        (unsubmerged, InletRegime::Unsubmerged)
    };

    Ok(InletControlResult {
        hw: hw_over_d * d,
        hw_over_d,
        regime,
    })
}
