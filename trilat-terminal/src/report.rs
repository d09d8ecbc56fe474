/// Colored terminal report for a trilateration run
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point3;
use std::io::{self, Write};
use trilat_core::{Trilateration, TrilaterationError};

use crate::scene::Scene;

fn heading<W: Write>(writer: &mut W, text: &str) -> io::Result<()> {
    writer.queue(SetForegroundColor(Color::Yellow))?;
    writer.queue(Print(format!("{}\n", text)))?;
    writer.queue(ResetColor)?;
    Ok(())
}

fn format_point(p: &Point3<f64>) -> String {
    format!("({:.6}, {:.6}, {:.6})", p.x, p.y, p.z)
}

fn print_spheres<W: Write>(writer: &mut W, scene: &Scene) -> io::Result<()> {
    heading(writer, "Spheres")?;
    for labeled in &scene.spheres {
        writer.queue(Print(format!(
            "  {:<8} center = {}  radius = {}\n",
            labeled.label,
            format_point(&labeled.sphere.center),
            labeled.sphere.radius
        )))?;
    }
    Ok(())
}

/// Report a successful solve, including per-sphere residuals
pub fn print_success<W: Write>(
    writer: &mut W,
    scene: &Scene,
    solution: &Trilateration,
) -> io::Result<()> {
    print_spheres(writer, scene)?;

    heading(writer, "Canonical frame")?;
    let (y, z, x) = solution.transform.angles().to_degrees();
    let t = solution.transform.translation();
    writer.queue(Print(format!(
        "  translation = ({:.6}, {:.6}, {:.6})\n",
        t.x, t.y, t.z
    )))?;
    writer.queue(Print(format!(
        "  angles      = y {:.4} deg, z {:.4} deg, x {:.4} deg\n",
        y, z, x
    )))?;
    writer.queue(Print(format!(
        "  point       = {}\n",
        format_point(&solution.canonical)
    )))?;

    heading(writer, "Intersection")?;
    writer.queue(SetForegroundColor(Color::Green))?;
    writer.queue(Print(format!("  point = {}\n", format_point(&solution.point))))?;
    writer.queue(ResetColor)?;

    for labeled in &scene.spheres {
        let residual = labeled.sphere.surface_residual(&solution.point);
        writer.queue(Print(format!(
            "  |P - {}| - r = {:+.3e}\n",
            labeled.label, residual
        )))?;
    }

    writer.flush()
}

/// Report why a scene has no intersection point
pub fn print_failure<W: Write>(
    writer: &mut W,
    scene: &Scene,
    error: &TrilaterationError,
) -> io::Result<()> {
    print_spheres(writer, scene)?;

    writer.queue(SetForegroundColor(Color::Red))?;
    writer.queue(Print(format!("failed to trilaterate: {}\n", error)))?;
    writer.queue(ResetColor)?;
    writer.flush()
}
