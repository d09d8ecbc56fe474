/// End-to-end trilateration: verify, align, solve, map back
use nalgebra::Point3;

use crate::config::SolverConfig;
use crate::error::Result;
use crate::geometry::Sphere;
use crate::solve::solve;
use crate::transform::{align, RigidTransform};
use crate::verify::verify;

/// Everything one successful solve produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trilateration {
    /// Intersection point in the caller's frame
    pub point: Point3<f64>,
    /// Intersection point in the canonical frame
    pub canonical: Point3<f64>,
    pub transform: RigidTransform,
}

/// Find the point on all three sphere surfaces, using the default configuration
pub fn trilaterate(a: &Sphere, b: &Sphere, c: &Sphere) -> Result<Point3<f64>> {
    trilaterate_with(a, b, c, &SolverConfig::default())
}

pub fn trilaterate_with(
    a: &Sphere,
    b: &Sphere,
    c: &Sphere,
    config: &SolverConfig,
) -> Result<Point3<f64>> {
    trilaterate_detailed(a, b, c, config).map(|solution| solution.point)
}

/// Run the whole pipeline, keeping the canonical point and transform.
///
/// The first failing stage aborts the solve and its error is returned as is.
pub fn trilaterate_detailed(
    a: &Sphere,
    b: &Sphere,
    c: &Sphere,
    config: &SolverConfig,
) -> Result<Trilateration> {
    verify(a, b, c, config)?;
    let frame = align(a, b, c, config)?;
    let canonical = solve(&frame.a, &frame.b, &frame.c, config)?;

    Ok(Trilateration {
        point: frame.transform.inverse(&canonical),
        canonical,
        transform: frame.transform,
    })
}
