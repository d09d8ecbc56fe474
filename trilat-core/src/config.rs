/// Solver configuration
use crate::error::{Result, TrilaterationError};

/// Default length tolerance, in the caller's working unit
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// How the verifier treats a sphere lying wholly inside another
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContainmentPolicy {
    /// Only reject pairs whose center distance reaches the radius sum
    #[default]
    Allow,
    /// Also reject pairs where one sphere is strictly inside the other
    Reject,
}

/// Tolerances and policies shared by every stage of one solve.
///
/// Only constructible through [`SolverConfig::new`] or `Default`, so the
/// tolerance is always finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    epsilon: f64,
    containment: ContainmentPolicy,
}

impl SolverConfig {
    pub fn new(epsilon: f64, containment: ContainmentPolicy) -> Result<Self> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(TrilaterationError::InvalidConfig { epsilon });
        }
        Ok(Self {
            epsilon,
            containment,
        })
    }

    /// Length tolerance below which quantities count as zero
    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn containment(&self) -> ContainmentPolicy {
        self.containment
    }

    pub fn with_epsilon(self, epsilon: f64) -> Result<Self> {
        Self::new(epsilon, self.containment)
    }

    pub fn with_containment(self, containment: ContainmentPolicy) -> Self {
        Self {
            containment,
            ..self
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            containment: ContainmentPolicy::Allow,
        }
    }
}
