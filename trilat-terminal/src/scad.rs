/// OpenSCAD export of a solved scene
use nalgebra::Point3;
use std::io::{self, Write};

use crate::scene::Scene;

/// Radius used to draw the intersection marker
const MARKER_RADIUS: f64 = 1.0;

fn write_preamble<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "// OpenSCAD script")?;
    writeln!(out, "// https://www.openscad.org/")?;
    writeln!(out)?;
    writeln!(out, "// Generated by trilat")?;
    writeln!(out)?;
    writeln!(out, "module show_sphere(pos, radius)")?;
    writeln!(out, "{{")?;
    writeln!(out, "   translate(pos){{")?;
    writeln!(out, "      sphere(r = radius, $fn = 50);")?;
    writeln!(out, "   }}")?;
    writeln!(out, "}}")?;
    writeln!(out)
}

fn scad_vector(p: &Point3<f64>) -> String {
    format!("[{}, {}, {}]", p.x, p.y, p.z)
}

/// Write the three input spheres in blue and the intersection point in yellow
pub fn write_scad<W: Write>(out: &mut W, scene: &Scene, point: &Point3<f64>) -> io::Result<()> {
    write_preamble(out)?;

    writeln!(out, "color(\"blue\"){{")?;
    for labeled in &scene.spheres {
        writeln!(
            out,
            "   show_sphere({}, {}); // {}",
            scad_vector(&labeled.sphere.center),
            labeled.sphere.radius,
            labeled.label
        )?;
    }
    writeln!(out, "}}")?;
    writeln!(out)?;

    writeln!(out, "color(\"yellow\"){{")?;
    writeln!(out, "   show_sphere({}, {});", scad_vector(point), MARKER_RADIUS)?;
    writeln!(out, "}}")
}
