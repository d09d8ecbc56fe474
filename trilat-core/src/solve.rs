/// Closed-form intersection of three spheres in the canonical frame
use nalgebra::{Point3, Vector3};
use tracing::debug;

use crate::config::SolverConfig;
use crate::error::{DegenerateStage, Result, TrilaterationError};
use crate::geometry::Sphere;

/// Solve for the intersection point of three spheres.
///
/// Intended for spheres already in the canonical frame, where the result is
/// simply `(x, y, z)` with `z >= 0`. The local basis is built from the
/// centers so that the arithmetic does not rely on the frame being exact.
/// Only the root on the `(B - A) x (C - A)` side of the center plane is
/// returned.
pub fn solve(a: &Sphere, b: &Sphere, c: &Sphere, config: &SolverConfig) -> Result<Point3<f64>> {
    let eps = config.epsilon();
    let ab = b.center - a.center;
    let ac = c.center - a.center;

    let d = ab.norm();
    if d <= eps {
        return Err(degenerate("A and B are too close to define an axis"));
    }
    let ex = ab / d;
    let i = ex.dot(&ac);

    // `j` below equals this norm, so one guard covers the division by `j`
    let in_plane = ac - ex * i;
    let in_plane_norm = in_plane.norm();
    if in_plane_norm <= eps {
        return Err(degenerate("C is collinear with A and B"));
    }
    let ey = in_plane / in_plane_norm;
    let j = ey.dot(&ac);
    let ez: Vector3<f64> = ex.cross(&ey);

    let (ra, rb, rc) = (a.radius, b.radius, c.radius);
    if (d - ra) >= rb || rb >= (d + ra) {
        debug!(d, ra, rb, "spheres A and B do not meet");
        return Err(TrilaterationError::NoXSolution);
    }

    let x = (ra * ra - rb * rb + d * d) / (2.0 * d);
    let y = (ra * ra - rc * rc + i * i + j * j) / (2.0 * j) - (i / j) * x;
    let z_squared = ra * ra - x * x - y * y;
    if z_squared < 0.0 {
        debug!(x, y, z_squared, "no common point");
        return Err(TrilaterationError::NoZSolution { z_squared });
    }
    let z = z_squared.sqrt();

    Ok(a.center + ex * x + ey * y + ez * z)
}

fn degenerate(reason: &str) -> TrilaterationError {
    debug!(reason, "degenerate canonical configuration");
    TrilaterationError::NumericDegeneracy {
        stage: DegenerateStage::CanonicalSolve,
    }
}
