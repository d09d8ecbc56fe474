/// Trilat Core Library - three-sphere trilateration
///
/// Given three spheres, finds the point lying on all three surfaces. The
/// solve is a pure pipeline: pairwise feasibility checks, a rigid change of
/// basis into a canonical frame, a closed-form solve there, and the inverse
/// change of basis. Nothing here performs I/O.

pub mod config;
pub mod error;
pub mod geometry;
pub mod pipeline;
pub mod solve;
pub mod transform;
pub mod verify;

// Re-export commonly used types
pub use config::{ContainmentPolicy, SolverConfig, DEFAULT_EPSILON};
pub use error::{DegenerateStage, ErrorKind, Result, SphereId, SpherePair, TrilaterationError};
pub use geometry::Sphere;
pub use pipeline::{trilaterate, trilaterate_detailed, trilaterate_with, Trilateration};
pub use solve::solve;
pub use transform::{align, unalign, AlignedFrame, RigidTransform, RotationAngles};
pub use verify::{is_feasible, verify};
