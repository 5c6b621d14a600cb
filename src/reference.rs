// FHWA HDS-5 reference tables (public domain values)
use crate::error::CulvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Form 1 inlet control coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InletCoefficients {
    /// unsubmerged coefficient
    pub k: f64,
    /// unsubmerged exponent
    pub m: f64,
    /// submerged coefficient
    pub c: f64,
    /// submerged constant
    pub y: f64,
}

impl InletCoefficients {
    pub const fn new(k: f64, m: f64, c: f64, y: f64) -> Self {
        InletCoefficients { k, m, c, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum CulvertShape {
    Circular,
    Rectangular,
    Elliptical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum InletType {
    Headwall,
    Mitered,
    Projecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum PipeMaterial {
    Concrete,
    Cmp,
    Hdpe,
    Pvc,
    Steel,
}

impl CulvertShape {
    pub const ALL: [CulvertShape; 3] = [
        CulvertShape::Circular,
        CulvertShape::Rectangular,
        CulvertShape::Elliptical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CulvertShape::Circular => "circular",
            CulvertShape::Rectangular => "rectangular",
            CulvertShape::Elliptical => "elliptical",
        }
    }
}

impl InletType {
    pub const ALL: [InletType; 3] = [InletType::Headwall, InletType::Mitered, InletType::Projecting];

    pub fn as_str(self) -> &'static str {
        match self {
            InletType::Headwall => "headwall",
            InletType::Mitered => "mitered",
            InletType::Projecting => "projecting",
        }
    }
}

impl PipeMaterial {
    pub const ALL: [PipeMaterial; 5] = [
        PipeMaterial::Concrete,
        PipeMaterial::Cmp,
        PipeMaterial::Hdpe,
        PipeMaterial::Pvc,
        PipeMaterial::Steel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PipeMaterial::Concrete => "concrete",
            PipeMaterial::Cmp => "cmp",
            PipeMaterial::Hdpe => "hdpe",
            PipeMaterial::Pvc => "pvc",
            PipeMaterial::Steel => "steel",
        }
    }
}

impl FromStr for CulvertShape {
    type Err = CulvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CulvertShape::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CulvertError::UnknownShape(s.to_string()))
    }
}

impl FromStr for InletType {
    type Err = CulvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InletType::ALL
            .into_iter()
            .find(|inlet| inlet.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CulvertError::UnknownInletType(s.to_string()))
    }
}

impl FromStr for PipeMaterial {
    type Err = CulvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PipeMaterial::ALL
            .into_iter()
            .find(|material| material.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CulvertError::UnknownMaterial(s.to_string()))
    }
}

impl TryFrom<String> for CulvertShape {
    type Error = CulvertError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for InletType {
    type Error = CulvertError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<String> for PipeMaterial {
    type Error = CulvertError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for CulvertShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for InletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Display for PipeMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// HDS-5 Chart 1-4, rows ordered headwall, mitered, projecting
const CIRCULAR_COEFFICIENTS: [InletCoefficients; 3] = [
    InletCoefficients::new(0.0098, 2.0, 0.0398, 0.67),
    InletCoefficients::new(0.0078, 2.0, 0.0210, 0.74),
    InletCoefficients::new(0.0045, 2.0, 0.0317, 0.69),
];

const RECTANGULAR_COEFFICIENTS: [InletCoefficients; 3] = [
    InletCoefficients::new(0.0083, 2.0, 0.0379, 0.69),
    InletCoefficients::new(0.0145, 2.0, 0.0300, 0.74),
    InletCoefficients::new(0.0340, 1.0, 0.0496, 0.57),
];

// Elliptical barrels reuse the circular rows.
const ELLIPTICAL_COEFFICIENTS: [InletCoefficients; 3] = CIRCULAR_COEFFICIENTS;

/// Inlet coefficients table, indexed by shape then inlet type.
pub static INLET_COEFFICIENTS: [[InletCoefficients; 3]; 3] = [
    CIRCULAR_COEFFICIENTS,
    RECTANGULAR_COEFFICIENTS,
    ELLIPTICAL_COEFFICIENTS,
];

/// Manning's n, ordered as `PipeMaterial::ALL`.
pub static MANNINGS_N: [f64; 5] = [0.012, 0.024, 0.012, 0.009, 0.012];

/// Entrance loss Ke, ordered as `InletType::ALL`.
pub static ENTRANCE_LOSS_KE: [f64; 3] = [0.5, 0.7, 0.9];

fn shape_index(shape: CulvertShape) -> usize {
    match shape {
        CulvertShape::Circular => 0,
        CulvertShape::Rectangular => 1,
        CulvertShape::Elliptical => 2,
    }
}

fn inlet_index(inlet: InletType) -> usize {
    match inlet {
        InletType::Headwall => 0,
        InletType::Mitered => 1,
        InletType::Projecting => 2,
    }
}

pub fn inlet_coefficients(shape: CulvertShape, inlet: InletType) -> InletCoefficients {
    INLET_COEFFICIENTS[shape_index(shape)][inlet_index(inlet)]
}

pub fn mannings_n(material: PipeMaterial) -> f64 {
    let idx = match material {
        PipeMaterial::Concrete => 0,
        PipeMaterial::Cmp => 1,
        PipeMaterial::Hdpe => 2,
        PipeMaterial::Pvc => 3,
        PipeMaterial::Steel => 4,
    };
    MANNINGS_N[idx]
}

pub fn entrance_loss(inlet: InletType) -> f64 {
    ENTRANCE_LOSS_KE[inlet_index(inlet)]
}
