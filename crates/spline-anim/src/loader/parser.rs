//! Parser implementation for keyframe spec files
//!
//! The format is line oriented. Blank lines and lines starting with `#` are
//! skipped; every remaining line holds exactly one record:
//!
//! ```text
//! # spline group count (must be 1)
//! 1
//! # control point count
//! 4
//! # animation time in seconds
//! 4.0
//! # position, then Euler rotation, per control point
//! 0.0, 0.0, 0.0
//! 0.0, 0.0, 0.0
//! ...
//! ```

use std::io::Read;
use std::iter::Enumerate;
use std::str::{FromStr, Lines};

use super::{AngleUnit, ControlPoint, SplineSpec};
use crate::error::{Result, SplineAnimError};
use crate::math::Vector3;

/// Parser for keyframe spec files
///
/// # Examples
///
/// ```
/// use spline_anim::loader::{AngleUnit, SplineSpecParser};
///
/// let text = "1\n2\n1.5\n0, 0, 0\n0, 0, 0\n1, 0, 0\n0, 0, 90\n";
/// let spec = SplineSpecParser::with_angle_unit(AngleUnit::Degrees)
///     .parse_str(text)
///     .unwrap();
/// assert_eq!(spec.control_points().len(), 2);
/// assert_eq!(spec.animation_time(), 1.5);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct SplineSpecParser {
    angle_unit: AngleUnit,
}

impl SplineSpecParser {
    /// Creates a parser reading rotations as radians
    pub fn new() -> Self {
        Self {
            angle_unit: AngleUnit::Radians,
        }
    }

    /// Creates a parser reading rotations in the given unit
    pub fn with_angle_unit(angle_unit: AngleUnit) -> Self {
        Self { angle_unit }
    }

    /// Unit used for rotation records
    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    /// Parses a spec file from a reader
    pub fn parse<R: Read>(&self, reader: &mut R) -> Result<SplineSpec> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        self.parse_str(&text)
    }

    /// Parses a spec file held in memory
    pub fn parse_str(&self, text: &str) -> Result<SplineSpec> {
        let mut records = Records::new(text);

        let group_count: usize = records.next_value("spline group count")?;
        if group_count != 1 {
            return Err(SplineAnimError::UnsupportedGroupCount(group_count));
        }

        let point_count: usize = records.next_value("control point count")?;
        let animation_time: f64 = records.next_value("animation time")?;

        // the declared count is untrusted until its records have been read
        let mut control_points = Vec::new();
        for index in 0..point_count {
            let position = records.next_vector(&format!("position of control point {index}"))?;
            let [roll, pitch, yaw] = records
                .next_vector(&format!("rotation of control point {index}"))?
                .to_array();

            control_points.push(ControlPoint {
                position,
                rotation: self.angle_unit.rotation(roll, pitch, yaw),
            });
        }

        if let Some((line, _)) = records.next() {
            log::debug!("Ignoring trailing records from line {line}");
        }

        log::debug!(
            "Loaded spline spec: {} control points over {}s ({:?} rotations)",
            control_points.len(),
            animation_time,
            self.angle_unit
        );

        SplineSpec::new(control_points, animation_time)
    }
}

/// Non-blank, non-comment lines paired with their 1-based line number
struct Records<'a> {
    lines: Enumerate<Lines<'a>>,
}

impl<'a> Records<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
        }
    }

    fn next_record(&mut self, expected: &str) -> Result<(usize, &'a str)> {
        self.next().ok_or_else(|| SplineAnimError::eof(expected))
    }

    fn next_value<T>(&mut self, expected: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let (line, text) = self.next_record(expected)?;
        text.parse().map_err(|err| {
            SplineAnimError::parse(line, format!("invalid {expected} '{text}': {err}"))
        })
    }

    fn next_vector(&mut self, expected: &str) -> Result<Vector3> {
        let (line, text) = self.next_record(expected)?;
        let components = text
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|token| !token.is_empty())
            .map(|token| {
                let value = token.parse::<f64>().map_err(|err| {
                    SplineAnimError::parse(
                        line,
                        format!("invalid number '{token}' in {expected}: {err}"),
                    )
                })?;
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(SplineAnimError::parse(
                        line,
                        format!("non-finite number '{token}' in {expected}"),
                    ))
                }
            })
            .collect::<Result<Vec<_>>>()?;

        match components.as_slice() {
            [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
            _ => Err(SplineAnimError::parse(
                line,
                format!(
                    "expected 3 components for {expected}, found {}",
                    components.len()
                ),
            )),
        }
    }
}

impl<'a> Iterator for Records<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.lines
            .by_ref()
            .map(|(index, line)| (index + 1, line.trim()))
            .find(|(_, line)| !line.is_empty() && !line.starts_with('#'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Quaternion;
    use std::f64::consts::FRAC_PI_2;
    use std::io::Cursor;
    use test_case::test_case;

    const SQUARE: &str = "\
# Square path
1

4
4.0
0.0, 0.0, 0.0
0.0, 0.0, 0.0
1.0, 0.0, 0.0
0.0, 0.0, 0.0
1.0, 1.0, 0.0
0.0, 0.0, 0.0
0.0, 1.0, 0.0
0.0, 0.0, 0.0
";

    #[test]
    fn test_parse_square() {
        let spec = SplineSpecParser::new().parse_str(SQUARE).unwrap();
        assert_eq!(spec.animation_time(), 4.0);
        assert_eq!(
            spec.positions(),
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(1.0, 1.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ]
        );
        assert!(spec.rotations().iter().all(|q| *q == Quaternion::IDENTITY));
    }

    #[test]
    fn test_parse_from_reader() {
        let mut cursor = Cursor::new(SQUARE.as_bytes());
        let spec = SplineSpecParser::new().parse(&mut cursor).unwrap();
        assert_eq!(spec.control_points().len(), 4);
    }

    #[test]
    fn test_whitespace_and_comma_delimiters() {
        let text = "1\n1\n2\n  1 2 3  \n0,0,1.5707963267948966\n";
        let spec = SplineSpecParser::new().parse_str(text).unwrap();
        let point = spec.control_points()[0];
        assert_eq!(point.position, Vector3::new(1.0, 2.0, 3.0));
        let expected = Quaternion::from_angle_axis(FRAC_PI_2, Vector3::Z);
        assert!((point.rotation - expected).norm() < 1e-12);
    }

    #[test]
    fn test_degrees() {
        let text = "1\n1\n1\n0, 0, 0\n0, 0, 90\n";
        let spec = SplineSpecParser::with_angle_unit(AngleUnit::Degrees)
            .parse_str(text)
            .unwrap();
        let rotation = spec.control_points()[0].rotation;
        let expected = Quaternion::from_angle_axis(FRAC_PI_2, Vector3::Z);
        assert!((rotation - expected).norm() < 1e-12);
    }

    #[test]
    fn test_rejects_two_groups() {
        let text = SQUARE.replacen("1\n", "2\n", 1);
        assert!(matches!(
            SplineSpecParser::new().parse_str(&text),
            Err(SplineAnimError::UnsupportedGroupCount(2))
        ));
    }

    #[test_case("", "spline group count" ; "empty input")]
    #[test_case("1\n", "control point count" ; "missing point count")]
    #[test_case("1\n2\n", "animation time" ; "missing animation time")]
    #[test_case("1\n2\n3.0\n0, 0, 0\n0, 0, 0\n1, 1, 1\n", "rotation of control point 1" ; "missing rotation")]
    #[test_case("1\n4294967295\n1.0\n0, 0, 0\n0, 0, 0\n", "position of control point 1" ; "huge point count")]
    fn test_unexpected_eof(text: &str, expected: &str) {
        match SplineSpecParser::new().parse_str(text) {
            Err(SplineAnimError::UnexpectedEof { expected: found }) => assert_eq!(found, expected),
            other => panic!("expected UnexpectedEof, got {:?}", other),
        }
    }

    #[test_case("one\n", 1 ; "bad group count")]
    #[test_case("1\n# comment\n-4\n", 3 ; "negative point count")]
    #[test_case("1\n1\nfast\n", 3 ; "bad animation time")]
    #[test_case("1\n1\n1.0\n\n0, 0\n", 5 ; "two components")]
    #[test_case("1\n1\n1.0\n0, 0, 0, 0\n", 4 ; "four components")]
    #[test_case("1\n1\n1.0\n0, x, 0\n", 4 ; "bad component")]
    #[test_case("1\n1\n1.0\nnan, 0, 0\n", 4 ; "nan position")]
    #[test_case("1\n1\n1.0\n0, 0, 0\n0, inf, 0\n", 5 ; "infinite rotation")]
    #[test_case("1\n1\n1.0\n0, 0, -infinity\n", 4 ; "negative infinity")]
    fn test_parse_errors_report_line(text: &str, expected_line: usize) {
        match SplineSpecParser::new().parse_str(text) {
            Err(SplineAnimError::Parse { line, .. }) => assert_eq!(line, expected_line),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_animation_time() {
        let text = "1\n1\n0.0\n0, 0, 0\n0, 0, 0\n";
        assert!(matches!(
            SplineSpecParser::new().parse_str(text),
            Err(SplineAnimError::InvalidAnimationTime(_))
        ));
    }

    #[test]
    fn test_zero_control_points() {
        assert!(matches!(
            SplineSpecParser::new().parse_str("1\n0\n1.0\n"),
            Err(SplineAnimError::EmptyControlPoints)
        ));
    }
}
