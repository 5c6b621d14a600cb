use crate::config::CulvertProject;
use crate::reference::{CulvertShape, InletType, PipeMaterial};

#[derive(Debug, Clone, Copy)]
pub struct Sample {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub project: CulvertProject,
}

const fn circular(
    diameter: f64,
    inlet_type: InletType,
    material: PipeMaterial,
    design_q: f64,
    tailwater: f64,
    length: f64,
    slope: f64,
) -> CulvertProject {
    CulvertProject {
        shape: CulvertShape::Circular,
        diameter: Some(diameter),
        span: None,
        rise: None,
        inlet_type,
        material,
        design_q,
        tailwater,
        length,
        slope,
        ks: None,
    }
}

const fn spanned(
    shape: CulvertShape,
    span: f64,
    rise: f64,
    material: PipeMaterial,
    design_q: f64,
    tailwater: f64,
    length: f64,
    slope: f64,
) -> CulvertProject {
    CulvertProject {
        shape,
        diameter: None,
        span: Some(span),
        rise: Some(rise),
        inlet_type: InletType::Headwall,
        material,
        design_q,
        tailwater,
        length,
        slope,
        ks: None,
    }
}

pub static SAMPLES: [Sample; 6] = [
    Sample {
        id: "hds5-example1",
        name: "HDS-5 Example 1: 36in CMP Pipe",
        description: "FHWA HDS-5 worked example, 36in corrugated metal pipe with headwall inlet, moderate flow",
        project: circular(3.0, InletType::Headwall, PipeMaterial::Cmp, 60.0, 1.5, 200.0, 0.012),
    },
    Sample {
        id: "highway-box",
        name: "Highway Crossing Box Culvert",
        description: "6ft x 4ft rectangular concrete box culvert with headwall inlet under a highway, high flow",
        project: spanned(
            CulvertShape::Rectangular,
            6.0,
            4.0,
            PipeMaterial::Concrete,
            200.0,
            3.0,
            80.0,
            0.005,
        ),
    },
    Sample {
        id: "driveway-pipe",
        name: "Low-Flow Driveway Pipe",
        description: "18in HDPE pipe with projecting inlet for a small driveway crossing",
        project: circular(1.5, InletType::Projecting, PipeMaterial::Hdpe, 10.0, 0.5, 40.0, 0.02),
    },
    Sample {
        id: "large-storm-drain",
        name: "Large Storm Drain (60in RCP)",
        description: "60in reinforced concrete pipe on steep slope with headwall, high design flow",
        project: circular(5.0, InletType::Headwall, PipeMaterial::Concrete, 300.0, 3.0, 150.0, 0.015),
    },
    Sample {
        id: "elliptical-culvert",
        name: "Elliptical Culvert",
        description: "Concrete elliptical culvert (5ft span x 3ft rise) with headwall, moderate flow",
        project: spanned(
            CulvertShape::Elliptical,
            5.0,
            3.0,
            PipeMaterial::Concrete,
            80.0,
            2.0,
            120.0,
            0.008,
        ),
    },
    Sample {
        id: "outlet-control-dominant",
        name: "Outlet Control Dominant",
        description: "Long culvert with low slope where outlet control governs, 48in CMP, 500 ft length",
        project: circular(4.0, InletType::Headwall, PipeMaterial::Cmp, 100.0, 3.5, 500.0, 0.002),
    },
];

pub fn find(id: &str) -> Option<&'static Sample> {
    SAMPLES.iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controlling::ControlCondition;
    use crate::rating_curve::{DEFAULT_STEPS, compute_design_point, generate_rating_curve};
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<_> = SAMPLES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SAMPLES.len());
    }

    #[test]
    fn every_sample_rates() {
        for sample in &SAMPLES {
            let input = sample.project.to_input().unwrap();
            let curve = generate_rating_curve(&input, DEFAULT_STEPS).unwrap();
            assert_eq!(curve.len(), DEFAULT_STEPS + 1, "{}", sample.id);
            for pair in curve.windows(2) {
                assert!(pair[1].controlling_hw >= pair[0].controlling_hw, "{}", sample.id);
            }
        }
    }

    #[test]
    fn long_flat_cmp_is_outlet_controlled() {
        let sample = find("outlet-control-dominant").unwrap();
        let dp = compute_design_point(&sample.project.to_input().unwrap()).unwrap();
        assert_eq!(dp.controlling.condition, ControlCondition::Outlet);
    }

    #[test]
    fn lookup() {
        assert_eq!(find("highway-box").unwrap().project.shape, CulvertShape::Rectangular);
        assert!(find("nope").is_none());
    }
}
