//! Spline geometries: basis matrices and control-point windowing

use std::fmt;
use std::str::FromStr;

use glam::{DMat4, DVec4};

use crate::math::Vector3;

/// Catmull-Rom basis, pre-scaled by 1/2 (rows are powers t^3, t^2, t, 1)
const CATMULL_ROM_BASIS: [[f64; 4]; 4] = [
    [-0.5, 1.5, -1.5, 0.5],
    [1.0, -2.5, 2.0, -0.5],
    [-0.5, 0.0, 0.5, 0.0],
    [0.0, 1.0, 0.0, 0.0],
];

/// Uniform cubic B-spline basis, pre-scaled by 1/6
const UNIFORM_B_BASIS: [[f64; 4]; 4] = [
    [-1.0 / 6.0, 3.0 / 6.0, -3.0 / 6.0, 1.0 / 6.0],
    [3.0 / 6.0, -6.0 / 6.0, 3.0 / 6.0, 0.0],
    [-3.0 / 6.0, 0.0, 3.0 / 6.0, 0.0],
    [1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0, 0.0],
];

/// Cubic spline geometry
///
/// Each kind is a stateless strategy: a fixed basis matrix plus the rule that
/// picks the four governing control points of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SplineKind {
    /// Interpolating spline with synthesized end tangents
    CatmullRom,
    /// Approximating uniform cubic B-spline
    UniformB,
}

impl SplineKind {
    /// Every supported geometry, in load order
    pub const ALL: [Self; 2] = [Self::CatmullRom, Self::UniformB];

    /// Minimum number of control points needed for any segment
    pub const MIN_POINTS: usize = 4;

    /// Short identifier used on the command line and in output
    pub const fn name(self) -> &'static str {
        match self {
            Self::CatmullRom => "catmull-rom",
            Self::UniformB => "uniform-b",
        }
    }

    /// Basis matrix rows as written, first row multiplying `t^3`
    pub const fn basis_rows(self) -> [[f64; 4]; 4] {
        match self {
            Self::CatmullRom => CATMULL_ROM_BASIS,
            Self::UniformB => UNIFORM_B_BASIS,
        }
    }

    /// Basis matrix `M`
    pub fn basis_matrix(self) -> DMat4 {
        // glam reads nested arrays as columns
        DMat4::from_cols_array_2d(&self.basis_rows()).transpose()
    }

    /// Offsets `(i_start, i_end)` bounding the segment index range
    /// `[i_start, len + i_end)`
    pub const fn index_offsets(self) -> (isize, isize) {
        match self {
            Self::CatmullRom => (0, -1),
            Self::UniformB => (0, -3),
        }
    }

    /// Number of evaluable segments for `len` control points
    pub fn segment_count(self, len: usize) -> usize {
        if len < Self::MIN_POINTS {
            return 0;
        }
        let (start, end) = self.index_offsets();
        usize::try_from(len as isize + end - start).unwrap_or(0)
    }

    /// Weights of the four control points at local parameter `t`: the row
    /// vector `U * M` with `U = (t^3, t^2, t, 1)`
    pub fn weights(self, t: f64) -> DVec4 {
        let u = DVec4::new(t * t * t, t * t, t, 1.0);
        self.basis_matrix().transpose() * u
    }

    /// The four control points governing segment `index`
    ///
    /// Catmull-Rom uses the true neighbours of `points[index]` and
    /// `points[index + 1]`, synthesizing the missing outer point on the first
    /// and last segment. Uniform B-splines use `points[index..index + 4]`.
    /// Returns `None` when the window falls outside `points`.
    pub fn control_point_window(self, points: &[Vector3], index: usize) -> Option<[Vector3; 4]> {
        match self {
            Self::CatmullRom => {
                let p2 = *points.get(index)?;
                let p3 = *points.get(index + 1)?;

                let p1 = if index == 0 {
                    let p4 = *points.get(index + 2)?;
                    let tangent = (2.0 * p3 - p4 - p2) / 2.0;
                    p2 - tangent
                } else {
                    points[index - 1]
                };

                let p4 = match points.get(index + 2) {
                    Some(p4) => *p4,
                    None => {
                        let tangent = (2.0 * p2 - p1 - p3) / 2.0;
                        p3 + tangent
                    }
                };

                Some([p1, p2, p3, p4])
            }
            Self::UniformB => {
                let window = points.get(index..index + 4)?;
                Some([window[0], window[1], window[2], window[3]])
            }
        }
    }
}

impl fmt::Display for SplineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SplineKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "catmull-rom" | "catmullrom" | "catmull_rom" | "cr" => Ok(Self::CatmullRom),
            "uniform-b" | "uniformb" | "uniform_b" | "bspline" | "b-spline" => Ok(Self::UniformB),
            _ => Err(format!("Unknown spline kind: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    fn points(coords: &[[f64; 3]]) -> Vec<Vector3> {
        coords.iter().map(|c| Vector3::from_array(*c)).collect()
    }

    #[test]
    fn test_basis_matrix_rows() {
        let m = SplineKind::CatmullRom.basis_matrix();
        assert_eq!(m.row(0), DVec4::new(-0.5, 1.5, -1.5, 0.5));
        assert_eq!(m.row(3), DVec4::new(0.0, 1.0, 0.0, 0.0));

        let m = SplineKind::UniformB.basis_matrix();
        assert_eq!(m.row(3), DVec4::new(1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0, 0.0));
    }

    #[test_case(SplineKind::CatmullRom, 0.0, [0.0, 1.0, 0.0, 0.0] ; "catmull-rom start")]
    #[test_case(SplineKind::CatmullRom, 1.0, [0.0, 0.0, 1.0, 0.0] ; "catmull-rom end")]
    #[test_case(SplineKind::UniformB, 0.0, [1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0, 0.0] ; "b-spline start")]
    #[test_case(SplineKind::UniformB, 1.0, [0.0, 1.0 / 6.0, 4.0 / 6.0, 1.0 / 6.0] ; "b-spline end")]
    fn test_weights_at_segment_ends(kind: SplineKind, t: f64, expected: [f64; 4]) {
        let weights = kind.weights(t);
        assert!(
            weights.abs_diff_eq(DVec4::from_array(expected), 1e-12),
            "{:?} != {:?}",
            weights,
            expected
        );
    }

    #[test_case(SplineKind::CatmullRom, 3, 0)]
    #[test_case(SplineKind::CatmullRom, 4, 3)]
    #[test_case(SplineKind::CatmullRom, 10, 9)]
    #[test_case(SplineKind::UniformB, 3, 0)]
    #[test_case(SplineKind::UniformB, 4, 1)]
    #[test_case(SplineKind::UniformB, 10, 7)]
    fn test_segment_count(kind: SplineKind, len: usize, expected: usize) {
        assert_eq!(kind.segment_count(len), expected);
    }

    #[test]
    fn test_catmull_rom_interior_window() {
        let pts = points(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
            [4.0, 0.0, 0.0],
        ]);
        let window = SplineKind::CatmullRom.control_point_window(&pts, 1).unwrap();
        assert_eq!(window, [pts[0], pts[1], pts[2], pts[3]]);
    }

    #[test]
    fn test_catmull_rom_synthesized_ends() {
        let pts = points(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ]);

        let first = SplineKind::CatmullRom.control_point_window(&pts, 0).unwrap();
        // tangent = (2 * p3 - p4 - p2) / 2 = (0.5, -0.5, 0)
        assert_eq!(first[0], Vector3::new(-0.5, 0.5, 0.0));
        assert_eq!(&first[1..], &[pts[0], pts[1], pts[2]]);

        let last = SplineKind::CatmullRom.control_point_window(&pts, 2).unwrap();
        // tangent = (2 * p2 - p1 - p3) / 2 = (0.5, 0.5, 0)
        assert_eq!(&last[..3], &[pts[1], pts[2], pts[3]]);
        assert_eq!(last[3], Vector3::new(0.5, 1.5, 0.0));
    }

    #[test]
    fn test_uniform_b_window() {
        let pts = points(&[
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
            [0.0, 2.0, 0.0],
        ]);
        let window = SplineKind::UniformB.control_point_window(&pts, 1).unwrap();
        assert_eq!(window, [pts[1], pts[2], pts[3], pts[4]]);
        assert_eq!(SplineKind::UniformB.control_point_window(&pts, 2), None);
    }

    #[test]
    fn test_parse_kind() {
        assert_eq!("catmull-rom".parse(), Ok(SplineKind::CatmullRom));
        assert_eq!("Uniform-B".parse(), Ok(SplineKind::UniformB));
        assert!("hermite".parse::<SplineKind>().is_err());
        assert_eq!(SplineKind::UniformB.to_string(), "uniform-b");
    }

    proptest! {
        #[test]
        fn prop_weights_form_partition_of_unity(t in 0.0f64..=1.0) {
            for kind in SplineKind::ALL {
                let w = kind.weights(t);
                prop_assert!((w.x + w.y + w.z + w.w - 1.0).abs() < 1e-12);
            }
        }

        #[test]
        fn prop_b_spline_weights_are_convex(t in 0.0f64..=1.0) {
            let w = SplineKind::UniformB.weights(t);
            prop_assert!(w.min_element() >= -1e-12);
        }
    }
}
