/// Parser for plain-text trilateration scenes
///
/// One sphere per line:
///
/// ```text
/// # comment
/// sphere A center 4 5 6 radius 7.5
/// ```
use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{space0, space1},
    number::complete::double,
    sequence::preceded,
    IResult,
};
use thiserror::Error;
use trilat_core::Sphere;

/// Errors raised while reading a scene
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("a scene needs exactly three spheres, found {0}")]
    SphereCount(usize),
}

/// A sphere with the name it was given in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSphere {
    pub label: String,
    pub sphere: Sphere,
}

impl LabeledSphere {
    pub fn new(label: &str, sphere: Sphere) -> Self {
        Self {
            label: label.to_string(),
            sphere,
        }
    }
}

/// Three labeled spheres, in A, B, C order
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub spheres: [LabeledSphere; 3],
}

impl Scene {
    pub fn new(a: LabeledSphere, b: LabeledSphere, c: LabeledSphere) -> Self {
        Self { spheres: [a, b, c] }
    }

    /// The three-beacon scene used when no file is given
    pub fn reference() -> Self {
        Self::new(
            LabeledSphere::new("A", Sphere::new(4.0, 5.0, 6.0, 7.5)),
            LabeledSphere::new("B", Sphere::new(13.0, 4.5, 5.5, 5.0)),
            LabeledSphere::new("C", Sphere::new(10.0, 11.0, 5.6, 7.0)),
        )
    }

    pub fn bare_spheres(&self) -> [Sphere; 3] {
        [
            self.spheres[0].sphere,
            self.spheres[1].sphere,
            self.spheres[2].sphere,
        ]
    }
}

/// Parse a scene, skipping blank lines and `#` comments
pub fn parse_scene(input: &str) -> Result<Scene, SceneError> {
    let mut spheres = Vec::with_capacity(3);

    for (index, raw_line) in input.lines().enumerate() {
        let line = match raw_line.split_once('#') {
            Some((content, _)) => content,
            None => raw_line,
        }
        .trim();
        if line.is_empty() {
            continue;
        }

        let syntax_error = |message: String| SceneError::Syntax {
            line: index + 1,
            message,
        };
        match parse_sphere_line(line) {
            Ok(("", sphere)) => spheres.push(sphere),
            Ok((rest, _)) => return Err(syntax_error(format!("unexpected trailing input `{}`", rest))),
            Err(e) => return Err(syntax_error(format!("expected `sphere <label> center <x> <y> <z> radius <r>` ({:?})", e))),
        }
    }

    let count = spheres.len();
    match <[LabeledSphere; 3]>::try_from(spheres) {
        Ok(spheres) => Ok(Scene { spheres }),
        Err(_) => Err(SceneError::SphereCount(count)),
    }
}

fn parse_sphere_line(input: &str) -> IResult<&str, LabeledSphere> {
    let (input, _) = tag("sphere")(input)?;
    let (input, label) = preceded(space1, take_while1(is_label_char))(input)?;
    let (input, _) = preceded(space1, tag("center"))(input)?;
    let (input, (x, y, z)) = parse_vector3(input)?;
    let (input, _) = preceded(space1, tag("radius"))(input)?;
    let (input, radius) = preceded(space1, double)(input)?;
    let (input, _) = space0(input)?;
    Ok((input, LabeledSphere::new(label, Sphere::new(x, y, z, radius))))
}

fn parse_vector3(input: &str) -> IResult<&str, (f64, f64, f64)> {
    let (input, x) = preceded(space1, double)(input)?;
    let (input, y) = preceded(space1, double)(input)?;
    let (input, z) = preceded(space1, double)(input)?;
    Ok((input, (x, y, z)))
}

fn is_label_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '-'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_scene() {
        let text = "\
# reference beacons
sphere A center 4 5 6 radius 7.5
sphere B center 13 4.5 5.5 radius 5   # trailing comment

sphere C center 10 11 5.6 radius 7.0
";
        let scene = parse_scene(text).unwrap();
        assert_eq!(scene, Scene::reference());
    }

    #[test]
    fn test_negative_and_exponent_values() {
        let text = "sphere north center -1.5 2e1 0 radius 3\n\
                    sphere east center 0 0 0 radius 4\n\
                    sphere up_1 center 1 1 1 radius 1e0\n";
        let scene = parse_scene(text).unwrap();
        assert_eq!(scene.spheres[0].label, "north");
        assert_eq!(scene.spheres[0].sphere, Sphere::new(-1.5, 20.0, 0.0, 3.0));
        assert_eq!(scene.spheres[2].label, "up_1");
    }

    #[test]
    fn test_wrong_sphere_count() {
        let text = "sphere A center 0 0 0 radius 1\n";
        assert_eq!(parse_scene(text).unwrap_err(), SceneError::SphereCount(1));
    }

    #[test]
    fn test_reports_line_number() {
        let text = "sphere A center 0 0 0 radius 1\n\nsphere B centre 1 0 0 radius 1\n";
        match parse_scene(text).unwrap_err() {
            SceneError::Syntax { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_trailing_garbage() {
        let text = "sphere A center 0 0 0 radius 1 extra\n";
        assert!(matches!(parse_scene(text), Err(SceneError::Syntax { line: 1, .. })));
    }
}
