/// Trilat Web - WASM bindings for the trilateration solver
///
/// Spheres cross the boundary as `[x, y, z, radius]` number arrays and the
/// intersection point comes back as `[x, y, z]`.

use trilat_core::{trilaterate_with, ContainmentPolicy, SolverConfig, Sphere};
use wasm_bindgen::prelude::*;

/// Build a sphere from a `[x, y, z, radius]` slice
pub fn sphere_from_slice(values: &[f64]) -> Result<Sphere, String> {
    match values {
        [x, y, z, radius] => Ok(Sphere::new(*x, *y, *z, *radius)),
        _ => Err(format!(
            "expected [x, y, z, radius], got {} values",
            values.len()
        )),
    }
}

/// Solve three `[x, y, z, radius]` spheres with the given configuration
pub fn solve_slices(
    a: &[f64],
    b: &[f64],
    c: &[f64],
    config: &SolverConfig,
) -> Result<[f64; 3], String> {
    let a = sphere_from_slice(a)?;
    let b = sphere_from_slice(b)?;
    let c = sphere_from_slice(c)?;
    let point = trilaterate_with(&a, &b, &c, config).map_err(|e| e.to_string())?;
    Ok([point.x, point.y, point.z])
}

/// Reusable solver holding its configuration between calls
#[wasm_bindgen]
pub struct WebSolver {
    config: SolverConfig,
}

#[wasm_bindgen]
impl WebSolver {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebSolver {
        WebSolver {
            config: SolverConfig::default(),
        }
    }

    /// Set the length tolerance used by every stage
    pub fn set_epsilon(&mut self, epsilon: f64) -> Result<(), JsValue> {
        self.config = self
            .config
            .with_epsilon(epsilon)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(())
    }

    /// Treat a sphere strictly inside another as infeasible
    pub fn set_reject_containment(&mut self, reject: bool) {
        let policy = if reject {
            ContainmentPolicy::Reject
        } else {
            ContainmentPolicy::Allow
        };
        self.config = self.config.with_containment(policy);
    }

    pub fn solve(&self, a: &[f64], b: &[f64], c: &[f64]) -> Result<Vec<f64>, JsValue> {
        solve_slices(a, b, c, &self.config)
            .map(|point| point.to_vec())
            .map_err(|e| JsValue::from_str(&e))
    }
}

impl Default for WebSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot solve with the default configuration
#[wasm_bindgen]
pub fn trilaterate(a: &[f64], b: &[f64], c: &[f64]) -> Result<Vec<f64>, JsValue> {
    WebSolver::new().solve(a, b, c)
}
