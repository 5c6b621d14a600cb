use thiserror::Error;

pub type Result<T> = std::result::Result<T, CulvertError>;

/// Failures raised by the hydraulics engine. None of them are recovered internally.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CulvertError {
    /// A required geometric dimension is missing, zero or negative.
    /// Missing values are reported as NaN.
    #[error("invalid dimension: {name} must be positive (got {value})")]
    InvalidDimension { name: &'static str, value: f64 },

    #[error("invalid flow: Q must be positive (got {0})")]
    InvalidFlow(f64),

    #[error("unknown culvert shape: {0:?}")]
    UnknownShape(String),

    #[error("unknown inlet type: {0:?}")]
    UnknownInletType(String),

    #[error("unknown pipe material: {0:?}")]
    UnknownMaterial(String),

    #[error("invalid parameter: {name} = {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

impl CulvertError {
    pub fn missing_dimension(name: &'static str) -> Self {
        CulvertError::InvalidDimension {
            name,
            value: f64::NAN,
        }
    }
}

/// Rejects NaN, infinities, zero and negatives.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(CulvertError::InvalidDimension { name, value })
    }
}

/// Flow must be strictly positive; a NaN flow is treated the same as Q <= 0.
pub(crate) fn require_flow(q: f64) -> Result<f64> {
    if q.is_finite() && q > 0.0 {
        Ok(q)
    } else {
        Err(CulvertError::InvalidFlow(q))
    }
}
