use crate::config::CulvertProject;
use crate::controlling::ControlCondition;
use crate::error::Result;
use crate::rating_curve::{DesignPoint, RatingCurvePoint, compute_design_point, generate_rating_curve};
use chrono::{DateTime, Local};
use std::fmt;

// Design point plus rating curve for one project
#[derive(Debug, Clone)]
pub struct CulvertResults {
    pub project: CulvertProject,
    pub design: DesignPoint,
    pub curve: Vec<RatingCurvePoint>,
    pub generated_at: DateTime<Local>,
}

impl CulvertResults {
    pub fn compute(project: &CulvertProject, steps: usize) -> Result<Self> {
        let input = project.to_input()?;
        let design = compute_design_point(&input)?;
        let curve = generate_rating_curve(&input, steps)?;
        Ok(CulvertResults {
            project: *project,
            design,
            curve,
            generated_at: Local::now(),
        })
    }

    pub fn hw_over_d(&self) -> f64 {
        self.design.controlling.hw / self.design.geometry.d
    }

    pub fn summary(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CulvertResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = &self.project;
        let ctrl = &self.design.controlling;
        let condition = match ctrl.condition {
            ControlCondition::Inlet => "Inlet Control",
            ControlCondition::Outlet => "Outlet Control",
        };

        writeln!(f, "Culvert Hydraulics Summary (FHWA HDS-5)")?;
        writeln!(f, "  Generated:   {}", self.generated_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f, "  Shape:       {} ({})", p.shape, p.dimensions_label())?;
        writeln!(f, "  Inlet type:  {}", p.inlet_type)?;
        writeln!(f, "  Material:    {}", p.material)?;
        writeln!(f, "  Length:      {} ft", p.length)?;
        writeln!(f, "  Slope:       {} ft/ft", p.slope)?;
        writeln!(f, "  Tailwater:   {} ft", p.tailwater)?;
        writeln!(f)?;
        writeln!(f, "  Controlling: {}", condition)?;
        writeln!(f, "  Headwater:   {:.2} ft", ctrl.hw)?;
        writeln!(f, "  HW/D:        {:.2}", self.hw_over_d())?;
        writeln!(f, "  Velocity:    {:.1} ft/s", ctrl.velocity)?;
        writeln!(f, "  Design Q:    {:.0} cfs", p.design_q)?;
        writeln!(
            f,
            "  Inlet HW:    {:.2} ft ({})",
            self.design.inlet.hw, self.design.inlet.regime
        )?;
        writeln!(f, "  Outlet HW:   {:.2} ft", self.design.outlet.hw)?;
        writeln!(f)?;
        writeln!(
            f,
            "  {:>9} {:>10} {:>10} {:>10} {:>8} {:>8}",
            "Q", "Inlet HW", "Outlet HW", "Ctrl HW", "Control", "V"
        )?;
        for pt in &self.curve {
            writeln!(
                f,
                "  {:>9.2} {:>10.3} {:>10.3} {:>10.3} {:>8} {:>8.2}",
                pt.q, pt.inlet_hw, pt.outlet_hw, pt.controlling_hw, pt.condition, pt.velocity
            )?;
        }
        Ok(())
    }
}
