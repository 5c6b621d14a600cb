//! Outlet control headwater for a barrel flowing full.
//!
//! H  = (Ke + 29 n^2 L / R^1.33 + 1) * V^2 / 2g   (imperial Manning form, 19.63 factor)
//! ho = max(TW, (dc + D) / 2)
//! HW = H + ho - L * S
use crate::error::{Result, require_flow};
use crate::geometry::{G, Geometry};

/// Imperial full-flow friction factor, 29 n^2 L / R^(4/3) scaled by 2g / 1.486^2.
const FRICTION_FACTOR: f64 = 19.63;

/// Full-flow approximation of critical depth as a fraction of D.
const CRITICAL_DEPTH_FRACTION: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutletControlResult {
    /// headwater depth above the inlet invert, never negative (ft)
    pub hw: f64,
    /// total energy loss through the barrel (ft)
    pub h: f64,
    pub velocity_head: f64,
    /// effective downstream depth (ft)
    pub ho: f64,
}

pub fn outlet_control(
    q: f64,
    geometry: &Geometry,
    ke: f64,
    n: f64,
    length: f64,
    slope: f64,
    tailwater: f64,
) -> Result<OutletControlResult> {
    let q = require_flow(q)?;
    let Geometry {
        area,
        hydraulic_radius: r,
        d,
        ..
    } = *geometry;

    let v = q / area;
    let velocity_head = v * v / (2.0 * G);

    let friction = FRICTION_FACTOR * n * n * length / r.powf(4.0 / 3.0);
    let h = (ke + friction + 1.0) * velocity_head;

    let dc = CRITICAL_DEPTH_FRACTION * d;
    let ho = f64::max(tailwater, (dc + d) / 2.0);

    // Negative when the barrel drop outweighs the losses; that is not a real headwater.
    let hw = h + ho - length * slope;

    Ok(OutletControlResult {
        hw: f64::max(hw, 0.0),
        h,
        velocity_head,
        ho,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CulvertError;
    use crate::geometry::{ShapeDescriptor, compute_geometry};
    use crate::reference::{InletType, PipeMaterial, entrance_loss, mannings_n};

    fn pipe() -> Geometry {
        compute_geometry(&ShapeDescriptor::Circular { diameter: 3.0 }).unwrap()
    }

    #[test]
    fn fifty_cfs_hundred_feet() {
        let r = outlet_control(
            50.0,
            &pipe(),
            entrance_loss(InletType::Headwall),
            mannings_n(PipeMaterial::Concrete),
            100.0,
            0.01,
            2.0,
        )
        .unwrap();
        assert!(r.h > 0.0);
        assert!(r.velocity_head > 0.0);
        assert!(r.hw > 0.0);
        // (0.6 * 3 + 3) / 2 = 2.4 beats the 2 ft tailwater
        assert!((r.ho - 2.4).abs() < 1e-12);
        assert!((r.hw - (r.h + r.ho - 1.0)).abs() < 1e-12);
    }

    #[test]
    fn high_tailwater_controls_ho() {
        let r = outlet_control(50.0, &pipe(), 0.5, 0.012, 100.0, 0.01, 5.0).unwrap();
        assert_eq!(r.ho, 5.0);
    }

    #[test]
    fn loss_grows_with_length() {
        let geom = pipe();
        let mut prev = 0.0;
        for length in [10.0, 50.0, 100.0, 200.0, 500.0] {
            let h = outlet_control(50.0, &geom, 0.5, 0.012, length, 0.01, 2.0)
                .unwrap()
                .h;
            assert!(h > prev, "L={length}");
            prev = h;
        }
    }

    #[test]
    fn loss_grows_with_roughness() {
        let geom = pipe();
        let smooth = outlet_control(50.0, &geom, 0.5, 0.009, 100.0, 0.01, 2.0).unwrap();
        let rough = outlet_control(50.0, &geom, 0.5, 0.024, 100.0, 0.01, 2.0).unwrap();
        assert!(rough.h > smooth.h);
    }

    #[test]
    fn headwater_is_clamped_at_zero() {
        let geom = pipe();
        let r = outlet_control(5.0, &geom, 0.5, 0.012, 50.0, 0.05, 0.5).unwrap();
        assert!(r.hw >= 0.0);

        // 1000 ft at 10% drops 100 ft, far more than the losses
        let steep = outlet_control(5.0, &geom, 0.5, 0.012, 1000.0, 0.1, 0.0).unwrap();
        assert_eq!(steep.hw, 0.0);
        assert!(steep.h > 0.0);
    }

    #[test]
    fn rejects_non_positive_flow() {
        assert_eq!(
            outlet_control(0.0, &pipe(), 0.5, 0.012, 100.0, 0.01, 2.0),
            Err(CulvertError::InvalidFlow(0.0))
        );
    }
}
