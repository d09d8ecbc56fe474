/// Error taxonomy for the trilateration pipeline
use std::fmt;

use thiserror::Error;

/// Result type for trilateration operations
pub type Result<T> = std::result::Result<T, TrilaterationError>;

/// Identifies one of the three input spheres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SphereId {
    A,
    B,
    C,
}

impl fmt::Display for SphereId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SphereId::A => "A",
            SphereId::B => "B",
            SphereId::C => "C",
        };
        f.write_str(name)
    }
}

/// An ordered pair of input spheres, as checked by the verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpherePair(pub SphereId, pub SphereId);

impl SpherePair {
    pub const AB: SpherePair = SpherePair(SphereId::A, SphereId::B);
    pub const BC: SpherePair = SpherePair(SphereId::B, SphereId::C);
    pub const AC: SpherePair = SpherePair(SphereId::A, SphereId::C);
}

impl fmt::Display for SpherePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.0, self.1)
    }
}

/// Pipeline step at which a near-zero pivot was found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateStage {
    /// B coincides with A after translation, so no y angle exists
    YRotation,
    /// C lies on the A-B axis, so no x angle exists
    XRotation,
    /// The canonical solve would divide by a near-zero `d` or `j`
    CanonicalSolve,
}

impl fmt::Display for DegenerateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DegenerateStage::YRotation => "y rotation",
            DegenerateStage::XRotation => "x rotation",
            DegenerateStage::CanonicalSolve => "canonical solve",
        };
        f.write_str(name)
    }
}

/// Fieldless discriminant of [`TrilaterationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    CoincidentCenters,
    Disjoint,
    NumericDegeneracy,
    NoXSolution,
    NoZSolution,
}

/// Reasons a trilateration query resolves to no point
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrilaterationError {
    /// A sphere has a non-finite coordinate or a negative/non-finite radius
    #[error("sphere {sphere} has a non-finite coordinate or an invalid radius")]
    InvalidSphere { sphere: SphereId },

    /// The solver tolerance is negative or not finite
    #[error("invalid tolerance {epsilon}: must be finite and non-negative")]
    InvalidConfig { epsilon: f64 },

    /// Two centers are within tolerance of each other
    #[error("sphere centers {pair} coincide")]
    CoincidentCenters { pair: SpherePair },

    /// Two spheres are too far apart for their surfaces to meet
    #[error("spheres {pair} are disjoint: distance {distance} >= radius sum {radius_sum}")]
    Disjoint {
        pair: SpherePair,
        distance: f64,
        radius_sum: f64,
    },

    /// One sphere lies strictly inside the other without touching it
    #[error("sphere {inner} lies inside sphere {outer} without touching its surface")]
    Contained { inner: SphereId, outer: SphereId },

    /// A pivot quantity was within tolerance of zero
    #[error("numerically degenerate configuration at {stage}")]
    NumericDegeneracy { stage: DegenerateStage },

    /// Spheres A and B admit no real x coordinate in the canonical frame
    #[error("no x solution: spheres A and B do not intersect")]
    NoXSolution,

    /// The three spheres are pairwise feasible but share no point
    #[error("no z solution: z^2 = {z_squared} is negative")]
    NoZSolution { z_squared: f64 },
}

impl TrilaterationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TrilaterationError::InvalidSphere { .. } | TrilaterationError::InvalidConfig { .. } => {
                ErrorKind::InvalidInput
            }
            TrilaterationError::CoincidentCenters { .. } => ErrorKind::CoincidentCenters,
            TrilaterationError::Disjoint { .. } | TrilaterationError::Contained { .. } => {
                ErrorKind::Disjoint
            }
            TrilaterationError::NumericDegeneracy { .. } => ErrorKind::NumericDegeneracy,
            TrilaterationError::NoXSolution => ErrorKind::NoXSolution,
            TrilaterationError::NoZSolution { .. } => ErrorKind::NoZSolution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_display() {
        assert_eq!(SpherePair::AB.to_string(), "A-B");
        assert_eq!(SpherePair::AC.to_string(), "A-C");
    }

    #[test]
    fn test_containment_is_disjoint_kind() {
        let err = TrilaterationError::Contained {
            inner: SphereId::B,
            outer: SphereId::A,
        };
        assert_eq!(err.kind(), ErrorKind::Disjoint);
        assert!(err.to_string().contains("inside sphere A"));
    }
}
