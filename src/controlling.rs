use crate::inlet_control::InletControlResult;
use crate::outlet_control::OutletControlResult;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlCondition {
    Inlet,
    Outlet,
}

impl fmt::Display for ControlCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlCondition::Inlet => f.pad("inlet"),
            ControlCondition::Outlet => f.pad("outlet"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControllingResult {
    pub hw: f64,
    pub condition: ControlCondition,
    pub inlet_hw: f64,
    pub outlet_hw: f64,
    /// barrel velocity Q / A (ft/s)
    pub velocity: f64,
}

/// Governing headwater is the larger of the two; a tie goes to inlet control.
/// Inputs are taken as already validated.
pub fn controlling_headwater(
    inlet: &InletControlResult,
    outlet: &OutletControlResult,
    q: f64,
    area: f64,
) -> ControllingResult {
    let condition = if inlet.hw >= outlet.hw {
        ControlCondition::Inlet
    } else {
        ControlCondition::Outlet
    };

    ControllingResult {
        hw: f64::max(inlet.hw, outlet.hw),
        condition,
        inlet_hw: inlet.hw,
        outlet_hw: outlet.hw,
        velocity: q / area,
    }
}
