/// Geometry primitives for sphere intersection
use nalgebra::{distance, Point3};

/// A sphere given by its center and radius
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Point3<f64>,
    pub radius: f64,
}

impl Sphere {
    pub fn new(x: f64, y: f64, z: f64, radius: f64) -> Self {
        Self {
            center: Point3::new(x, y, z),
            radius,
        }
    }

    pub fn from_center(center: Point3<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// The same radius around a different center
    pub fn moved_to(&self, center: Point3<f64>) -> Self {
        Self {
            center,
            radius: self.radius,
        }
    }

    /// True when every coordinate is finite and the radius is finite and non-negative
    pub fn is_valid(&self) -> bool {
        self.center.coords.iter().all(|c| c.is_finite()) && self.radius.is_finite() && self.radius >= 0.0
    }

    pub fn center_distance(&self, other: &Sphere) -> f64 {
        distance(&self.center, &other.center)
    }

    /// Signed distance from `point` to this sphere's surface
    pub fn surface_residual(&self, point: &Point3<f64>) -> f64 {
        distance(&self.center, point) - self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_distance() {
        let a = Sphere::new(0.0, 0.0, 0.0, 1.0);
        let b = Sphere::new(3.0, 4.0, 0.0, 1.0);
        assert!((a.center_distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_validity() {
        assert!(Sphere::new(1.0, 2.0, 3.0, 0.0).is_valid());
        assert!(!Sphere::new(1.0, 2.0, 3.0, -0.5).is_valid());
        assert!(!Sphere::new(f64::NAN, 2.0, 3.0, 1.0).is_valid());
        assert!(!Sphere::new(1.0, 2.0, 3.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_surface_residual() {
        let s = Sphere::new(1.0, 1.0, 1.0, 2.0);
        assert!(s.surface_residual(&Point3::new(3.0, 1.0, 1.0)).abs() < 1e-12);
        assert!((s.surface_residual(&Point3::new(1.0, 1.0, 1.0)) + 2.0).abs() < 1e-12);
    }
}
