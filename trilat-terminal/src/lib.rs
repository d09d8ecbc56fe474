/// Terminal front end: scene loading, reporting and OpenSCAD export
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use trilat_core::{trilaterate_detailed, ContainmentPolicy, SolverConfig, Trilateration};

pub mod report;
pub mod scad;
pub mod scene;

pub use scad::write_scad;
pub use scene::{parse_scene, LabeledSphere, Scene, SceneError};

pub const USAGE: &str =
    "usage: trilat [scene-file] [--scad <out.scad>] [--epsilon <tolerance>] [--reject-containment]";

fn invalid_input(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

/// Read and parse a scene file
pub fn load_scene(path: &Path) -> io::Result<Scene> {
    let text = fs::read_to_string(path).map_err(|e| {
        io::Error::new(e.kind(), format!("Failed to read scene {}: {}", path.display(), e))
    })?;
    parse_scene(&text).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Failed to parse scene {}: {}", path.display(), e),
        )
    })
}

/// One trilateration run from the command line
pub struct TrilatApp {
    scene: Scene,
    config: SolverConfig,
    scad_path: Option<PathBuf>,
}

impl TrilatApp {
    pub fn new(scene: Scene, config: SolverConfig) -> Self {
        Self {
            scene,
            config,
            scad_path: None,
        }
    }

    pub fn with_scad_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.scad_path = Some(path.into());
        self
    }

    /// Build an app from command-line arguments (program name excluded)
    pub fn from_args(args: &[String]) -> io::Result<Self> {
        let mut scene_path = None;
        let mut scad_path = None;
        let mut config = SolverConfig::default();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--scad" => {
                    let path = iter
                        .next()
                        .ok_or_else(|| invalid_input(format!("--scad needs a path\n{}", USAGE)))?;
                    scad_path = Some(PathBuf::from(path));
                }
                "--epsilon" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| invalid_input(format!("--epsilon needs a value\n{}", USAGE)))?;
                    let epsilon: f64 = value
                        .parse()
                        .map_err(|e| invalid_input(format!("bad --epsilon `{}`: {}", value, e)))?;
                    config = config
                        .with_epsilon(epsilon)
                        .map_err(|e| invalid_input(e.to_string()))?;
                }
                "--reject-containment" => {
                    config = config.with_containment(ContainmentPolicy::Reject);
                }
                flag if flag.starts_with("--") => {
                    return Err(invalid_input(format!("unknown option `{}`\n{}", flag, USAGE)));
                }
                path if scene_path.is_none() => scene_path = Some(PathBuf::from(path)),
                extra => {
                    return Err(invalid_input(format!("unexpected argument `{}`\n{}", extra, USAGE)));
                }
            }
        }

        let scene = match scene_path {
            Some(path) => load_scene(&path)?,
            None => Scene::reference(),
        };

        let mut app = Self::new(scene, config);
        app.scad_path = scad_path;
        Ok(app)
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve the scene, print the report to `out` and export if asked.
    ///
    /// Returns whether an intersection point was found.
    pub fn run<W: Write>(&self, out: &mut W) -> io::Result<bool> {
        let [a, b, c] = self.scene.bare_spheres();

        match trilaterate_detailed(&a, &b, &c, &self.config) {
            Ok(solution) => {
                info!(point = ?solution.point, "trilateration succeeded");
                report::print_success(out, &self.scene, &solution)?;
                if let Some(path) = &self.scad_path {
                    self.export(path, &solution)?;
                    writeln!(out, "result output to \"{}\"", path.display())?;
                }
                Ok(true)
            }
            Err(error) => {
                warn!(%error, kind = ?error.kind(), "trilateration failed");
                report::print_failure(out, &self.scene, &error)?;
                Ok(false)
            }
        }
    }

    fn export(&self, path: &Path, solution: &Trilateration) -> io::Result<()> {
        let mut file = BufWriter::new(File::create(path)?);
        write_scad(&mut file, &self.scene, &solution.point)?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_args() {
        let app = TrilatApp::from_args(&[]).unwrap();
        assert_eq!(app.scene(), &Scene::reference());
        assert_eq!(app.config(), &SolverConfig::default());
    }

    #[test]
    fn test_option_args() {
        let app = TrilatApp::from_args(&args(&["--epsilon", "1e-3", "--reject-containment"])).unwrap();
        assert!((app.config().epsilon() - 1e-3).abs() < 1e-12);
        assert_eq!(app.config().containment(), ContainmentPolicy::Reject);
    }

    #[test]
    fn test_bad_args() {
        assert!(TrilatApp::from_args(&args(&["--epsilon"])).is_err());
        assert!(TrilatApp::from_args(&args(&["--epsilon", "-1"])).is_err());
        assert!(TrilatApp::from_args(&args(&["--frobnicate"])).is_err());
    }

    #[test]
    fn test_run_reference_scene() {
        let app = TrilatApp::new(Scene::reference(), SolverConfig::default());
        let mut out = Vec::new();
        assert!(app.run(&mut out).unwrap());
    }

    #[test]
    fn test_run_reports_failure() {
        let scene = Scene::new(
            LabeledSphere::new("A", trilat_core::Sphere::new(0.0, 0.0, 0.0, 1.0)),
            LabeledSphere::new("B", trilat_core::Sphere::new(100.0, 0.0, 0.0, 1.0)),
            LabeledSphere::new("C", trilat_core::Sphere::new(0.0, 1.0, 0.0, 1.0)),
        );
        let app = TrilatApp::new(scene, SolverConfig::default());
        let mut out = Vec::new();
        assert!(!app.run(&mut out).unwrap());
        assert!(String::from_utf8_lossy(&out).contains("disjoint"));
    }

    #[test]
    fn test_run_writes_scad() {
        let path = std::env::temp_dir().join(format!("trilat-test-{}.scad", std::process::id()));
        let app = TrilatApp::new(Scene::reference(), SolverConfig::default()).with_scad_output(&path);
        let mut out = Vec::new();
        assert!(app.run(&mut out).unwrap());

        let text = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(text.contains("color(\"yellow\")"));
    }

    #[test]
    fn test_bundled_scenes() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("scenes");

        let reference = load_scene(&dir.join("reference.tri")).unwrap();
        assert_eq!(reference, Scene::reference());

        let unsolvable = load_scene(&dir.join("no_common_point.tri")).unwrap();
        let app = TrilatApp::new(unsolvable, SolverConfig::default());
        assert!(!app.run(&mut Vec::new()).unwrap());
    }
}
