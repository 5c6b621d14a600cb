use crate::controlling::ControllingResult;
use crate::rating_curve::{RatingCurvePoint, round_to};
use csv::{Writer, WriterBuilder};
use std::error::Error;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 6] = [
    "Q (cfs)",
    "Inlet HW (ft)",
    "Outlet HW (ft)",
    "Controlling HW (ft)",
    "Condition",
    "Velocity (ft/s)",
];

// Create CSV writer for rating curve export
pub fn create_csv_writer(path: &Path) -> Result<Writer<File>, Box<dyn Error>> {
    let wtr = WriterBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    Ok(wtr)
}

/// Writes the curve table followed by a design point row:
/// design Q, blank inlet/outlet columns, controlling HW, condition.
pub fn write_rating_curve<W: Write>(
    wtr: &mut Writer<W>,
    curve: &[RatingCurvePoint],
    design_q: f64,
    design: &ControllingResult,
) -> Result<(), Box<dyn Error>> {
    wtr.write_record(HEADER)?;

    for p in curve {
        wtr.write_record(&[
            p.q.to_string(),
            p.inlet_hw.to_string(),
            p.outlet_hw.to_string(),
            p.controlling_hw.to_string(),
            p.condition.to_string(),
            p.velocity.to_string(),
        ])?;
    }

    wtr.write_record(["Design Point"])?;
    wtr.write_record(&[
        design_q.to_string(),
        String::new(),
        String::new(),
        round_to(design.hw, 3).to_string(),
        design.condition.to_string(),
        round_to(design.velocity, 2).to_string(),
    ])?;

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controlling::ControlCondition;

    fn point(q: f64, hw: f64) -> RatingCurvePoint {
        RatingCurvePoint {
            q,
            inlet_hw: hw,
            outlet_hw: hw - 0.5,
            controlling_hw: hw,
            condition: ControlCondition::Inlet,
            velocity: 1.25,
        }
    }

    #[test]
    fn writes_table_and_design_row() {
        let curve = [point(5.0, 2.1), point(75.0, 6.25)];
        let design = ControllingResult {
            hw: 4.00049,
            condition: ControlCondition::Outlet,
            inlet_hw: 3.9,
            outlet_hw: 4.00049,
            velocity: 7.0736,
        };

        let mut wtr = WriterBuilder::new().flexible(true).from_writer(vec![]);
        write_rating_curve(&mut wtr, &curve, 50.0, &design).unwrap();
        let text = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(
            lines[0],
            "Q (cfs),Inlet HW (ft),Outlet HW (ft),Controlling HW (ft),Condition,Velocity (ft/s)"
        );
        assert_eq!(lines[1], "5,2.1,1.6,2.1,inlet,1.25");
        assert_eq!(lines[3], "Design Point");
        assert_eq!(lines[4], "50,,,4,outlet,7.07");
    }
}
