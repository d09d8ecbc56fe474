/// Pairwise feasibility checks run before any alignment work
use tracing::debug;

use crate::config::{ContainmentPolicy, SolverConfig};
use crate::error::{Result, SphereId, SpherePair, TrilaterationError};
use crate::geometry::Sphere;

/// Check that three spheres are well formed and pairwise intersecting.
///
/// Pairs are checked in the order A-B, B-C, A-C and the first failing pair
/// is reported.
pub fn verify(a: &Sphere, b: &Sphere, c: &Sphere, config: &SolverConfig) -> Result<()> {
    for (id, sphere) in [(SphereId::A, a), (SphereId::B, b), (SphereId::C, c)] {
        if !sphere.is_valid() {
            debug!(sphere = %id, "rejecting malformed sphere");
            return Err(TrilaterationError::InvalidSphere { sphere: id });
        }
    }

    check_pair(SpherePair::AB, a, b, config)?;
    check_pair(SpherePair::BC, b, c, config)?;
    check_pair(SpherePair::AC, a, c, config)?;
    Ok(())
}

/// Boolean form of [`verify`] using the default configuration
pub fn is_feasible(a: &Sphere, b: &Sphere, c: &Sphere) -> bool {
    verify(a, b, c, &SolverConfig::default()).is_ok()
}

/// Check one pair of spheres
pub fn check_pair(
    pair: SpherePair,
    first: &Sphere,
    second: &Sphere,
    config: &SolverConfig,
) -> Result<()> {
    let distance = first.center_distance(second);

    if distance < config.epsilon() {
        debug!(pair = %pair, distance, "sphere centers coincide");
        return Err(TrilaterationError::CoincidentCenters { pair });
    }

    let radius_sum = first.radius + second.radius;
    if distance >= radius_sum {
        debug!(pair = %pair, distance, radius_sum, "spheres do not overlap");
        return Err(TrilaterationError::Disjoint {
            pair,
            distance,
            radius_sum,
        });
    }

    if config.containment() == ContainmentPolicy::Reject {
        let (inner, outer) = if first.radius <= second.radius {
            (pair.0, pair.1)
        } else {
            (pair.1, pair.0)
        };
        let (small, large) = (
            first.radius.min(second.radius),
            first.radius.max(second.radius),
        );
        if distance + small < large {
            debug!(pair = %pair, distance, "one sphere lies inside the other");
            return Err(TrilaterationError::Contained { inner, outer });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn spheres() -> (Sphere, Sphere, Sphere) {
        (
            Sphere::new(4.0, 5.0, 6.0, 7.5),
            Sphere::new(13.0, 4.5, 5.5, 5.0),
            Sphere::new(10.0, 11.0, 5.6, 7.0),
        )
    }

    #[test]
    fn test_feasible_input() {
        let (a, b, c) = spheres();
        assert!(verify(&a, &b, &c, &SolverConfig::default()).is_ok());
        assert!(is_feasible(&a, &b, &c));
    }

    #[test]
    fn test_coincident_centers() {
        let (a, _, c) = spheres();
        let b = a.moved_to(a.center);
        let err = verify(&a, &b, &c, &SolverConfig::default()).unwrap_err();
        assert_eq!(
            err,
            TrilaterationError::CoincidentCenters {
                pair: SpherePair::AB
            }
        );
        assert!(!is_feasible(&a, &b, &c));
    }

    #[test]
    fn test_disjoint_pair() {
        let a = Sphere::new(0.0, 0.0, 0.0, 1.0);
        let b = Sphere::new(100.0, 0.0, 0.0, 1.0);
        let err = check_pair(SpherePair::AB, &a, &b, &SolverConfig::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Disjoint);
    }

    #[test]
    fn test_touching_spheres_are_disjoint() {
        let a = Sphere::new(0.0, 0.0, 0.0, 1.0);
        let b = Sphere::new(2.0, 0.0, 0.0, 1.0);
        assert!(check_pair(SpherePair::AB, &a, &b, &SolverConfig::default()).is_err());
    }

    #[test]
    fn test_reports_first_failing_pair() {
        let a = Sphere::new(0.0, 0.0, 0.0, 2.0);
        let b = Sphere::new(1.0, 0.0, 0.0, 2.0);
        let c = Sphere::new(50.0, 0.0, 0.0, 2.0);
        match verify(&a, &b, &c, &SolverConfig::default()) {
            Err(TrilaterationError::Disjoint { pair, .. }) => assert_eq!(pair, SpherePair::BC),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_containment_policy() {
        let outer = Sphere::new(0.0, 0.0, 0.0, 10.0);
        let inner = Sphere::new(1.0, 0.0, 0.0, 2.0);

        let allow = SolverConfig::default();
        assert!(check_pair(SpherePair::AB, &outer, &inner, &allow).is_ok());

        let reject = allow.with_containment(ContainmentPolicy::Reject);
        let err = check_pair(SpherePair::AB, &outer, &inner, &reject).unwrap_err();
        assert_eq!(
            err,
            TrilaterationError::Contained {
                inner: SphereId::B,
                outer: SphereId::A
            }
        );
    }

    #[test]
    fn test_invalid_radius() {
        let (a, b, _) = spheres();
        let c = Sphere::new(10.0, 11.0, 5.6, -1.0);
        let err = verify(&a, &b, &c, &SolverConfig::default()).unwrap_err();
        assert_eq!(err, TrilaterationError::InvalidSphere { sphere: SphereId::C });
    }
}
