use crate::error::Result as EngineResult;
use crate::geometry::ShapeDescriptor;
use crate::rating_curve::RatingCurveInput;
use crate::reference::{CulvertShape, InletType, PipeMaterial};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// Culvert project as stored by the input form: every dimension field is
// present-or-not independently of the selected shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulvertProject {
    pub shape: CulvertShape,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rise: Option<f64>,
    pub inlet_type: InletType,
    pub material: PipeMaterial,
    pub design_q: f64,
    pub tailwater: f64,
    pub length: f64,
    pub slope: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ks: Option<f64>,
}

impl Default for CulvertProject {
    fn default() -> Self {
        CulvertProject {
            shape: CulvertShape::Circular,
            diameter: Some(3.0),
            span: Some(4.0),
            rise: Some(3.0),
            inlet_type: InletType::Headwall,
            material: PipeMaterial::Concrete,
            design_q: 50.0,
            tailwater: 2.0,
            length: 100.0,
            slope: 0.01,
            ks: None,
        }
    }
}

impl CulvertProject {
    pub fn to_input(&self) -> EngineResult<RatingCurveInput> {
        let shape = ShapeDescriptor::from_parts(self.shape, self.diameter, self.span, self.rise)?;
        let input = RatingCurveInput {
            shape,
            inlet_type: self.inlet_type,
            material: self.material,
            design_q: self.design_q,
            length: self.length,
            slope: self.slope,
            tailwater: self.tailwater,
            ks: self.ks.unwrap_or(0.0),
        };
        input.validate()?;
        Ok(input)
    }

    pub fn dimensions_label(&self) -> String {
        match self.shape {
            CulvertShape::Circular => format!("{} ft dia", fmt_opt(self.diameter)),
            _ => format!("{} x {} ft", fmt_opt(self.span), fmt_opt(self.rise)),
        }
    }
}

fn fmt_opt(v: Option<f64>) -> String {
    v.map_or_else(|| "?".to_string(), |v| v.to_string())
}

pub fn load_project(path: &Path) -> Result<CulvertProject> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read project file: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse project file: {:?}", path))
}

pub fn save_project(path: &Path, project: &CulvertProject) -> Result<()> {
    let json = serde_json::to_string_pretty(project).context("Failed to serialize project")?;
    fs::write(path, json).with_context(|| format!("Failed to write project file: {:?}", path))
}

// Output format configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Summary,
    Csv,
    Both,
}

impl OutputFormat {
    pub fn wants_summary(self) -> bool {
        matches!(self, OutputFormat::Summary | OutputFormat::Both)
    }

    pub fn wants_csv(self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Both)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CulvertError;

    const FORM_JSON: &str = r#"{
        "shape": "rectangular",
        "diameter": 3,
        "span": 6,
        "rise": 4,
        "inletType": "headwall",
        "material": "concrete",
        "designQ": 200,
        "tailwater": 3,
        "length": 80,
        "slope": 0.005
    }"#;

    #[test]
    fn parses_form_record() {
        let project: CulvertProject = serde_json::from_str(FORM_JSON).unwrap();
        assert_eq!(project.shape, CulvertShape::Rectangular);
        assert_eq!(project.design_q, 200.0);
        assert_eq!(project.ks, None);

        let input = project.to_input().unwrap();
        assert_eq!(
            input.shape,
            ShapeDescriptor::Rectangular {
                span: 6.0,
                rise: 4.0
            }
        );
        assert_eq!(input.ks, 0.0);
    }

    #[test]
    fn unknown_shape_is_reported() {
        let json = FORM_JSON.replace("rectangular", "horseshoe");
        let err = serde_json::from_str::<CulvertProject>(&json).unwrap_err();
        assert!(err.to_string().contains("unknown culvert shape"), "{err}");
    }

    #[test]
    fn missing_dimension_fails_mapping() {
        let project = CulvertProject {
            shape: CulvertShape::Elliptical,
            rise: None,
            ..CulvertProject::default()
        };
        assert!(matches!(
            project.to_input(),
            Err(CulvertError::InvalidDimension { name: "rise", .. })
        ));
    }

    #[test]
    fn negative_tailwater_is_rejected() {
        let project = CulvertProject {
            tailwater: -1.0,
            ..CulvertProject::default()
        };
        assert!(matches!(
            project.to_input(),
            Err(CulvertError::InvalidParameter {
                name: "tailwater",
                ..
            })
        ));
    }

    #[test]
    fn round_trips_through_json() {
        let project = CulvertProject {
            ks: Some(-0.5),
            inlet_type: InletType::Mitered,
            ..CulvertProject::default()
        };
        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"inletType\":\"mitered\""));
        assert!(json.contains("\"designQ\":50.0"));
        let back: CulvertProject = serde_json::from_str(&json).unwrap();
        assert_eq!(back, project);
    }

    #[test]
    fn labels() {
        let project = CulvertProject::default();
        assert_eq!(project.dimensions_label(), "3 ft dia");
    }

    #[test]
    fn output_format_flags() {
        assert!(OutputFormat::Both.wants_csv() && OutputFormat::Both.wants_summary());
        assert!(!OutputFormat::Csv.wants_summary());
        assert!(!OutputFormat::Summary.wants_csv());
    }
}
