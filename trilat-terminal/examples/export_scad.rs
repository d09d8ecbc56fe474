/// Example: solve a scene file and print the OpenSCAD script to stdout
///
/// Usage: cargo run --example export_scad -- path/to/scene.tri

use std::env;
use std::io::{self, stdout};
use std::path::Path;
use trilat_core::trilaterate;
use trilat_terminal::{load_scene, write_scad, Scene};

fn main() -> io::Result<()> {
    let args: Vec<String> = env::args().collect();

    let scene = match args.get(1) {
        Some(path) => load_scene(Path::new(path))?,
        None => {
            eprintln!("Usage: {} <scene-file>", args[0]);
            eprintln!("\nNo scene file provided, using the reference scene...");
            Scene::reference()
        }
    };

    let [a, b, c] = scene.bare_spheres();
    let point = trilaterate(&a, &b, &c)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, format!("Failed to trilaterate: {}", e)))?;

    write_scad(&mut stdout(), &scene, &point)
}
