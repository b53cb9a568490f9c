//! The six cube faces and the basis table used to build their texel directions.

use std::fmt;

use glam::DVec3;

/// The six faces of a cubemap.
///
/// Names follow the cubemap file convention, which treats the image's "up"
/// as `+Y`. See [`FaceBasis`] for the actual orientation of each face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CubeFace {
    /// +X face
    PosX = 0,
    /// −X face
    NegX = 1,
    /// +Y face
    PosY = 2,
    /// −Y face
    NegY = 3,
    /// +Z face
    PosZ = 4,
    /// −Z face
    NegZ = 5,
}

/// Orientation of one face: a face-local `(u, v)` in `[0, 1]` maps to the
/// direction `normalize(base + u * u_axis + v * v_axis)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceBasis {
    /// Cube-surface point at `(u, v) = (0, 0)` on a cube of edge 1.
    pub base: DVec3,
    /// Step along the face for increasing `u`.
    pub u_axis: DVec3,
    /// Step along the face for increasing `v`.
    pub v_axis: DVec3,
}

impl FaceBasis {
    /// Unnormalized cube-surface point for face-local `(u, v)`.
    #[inline]
    #[must_use]
    pub fn cube_point(&self, u: f64, v: f64) -> DVec3 {
        self.base + u * self.u_axis + v * self.v_axis
    }

    /// Unit direction for face-local `(u, v)`.
    #[inline]
    #[must_use]
    pub fn direction(&self, u: f64, v: f64) -> DVec3 {
        self.cube_point(u, v).normalize()
    }
}

const fn basis(base: [f64; 3], u_axis: [f64; 3], v_axis: [f64; 3]) -> FaceBasis {
    FaceBasis {
        base: DVec3::new(base[0], base[1], base[2]),
        u_axis: DVec3::new(u_axis[0], u_axis[1], u_axis[2]),
        v_axis: DVec3::new(v_axis[0], v_axis[1], v_axis[2]),
    }
}

/// Indexed by `CubeFace as usize`. Swapping any sign mirrors or rotates a face.
const FACE_BASES: [FaceBasis; 6] = [
    // +X
    basis([0.5, -0.5, -0.5], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
    // −X
    basis([-0.5, -0.5, 0.5], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
    // +Y
    basis([-0.5, -0.5, 0.5], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
    // −Y
    basis([-0.5, 0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
    // +Z
    basis([-0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
    // −Z
    basis([0.5, -0.5, 0.5], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
];

impl CubeFace {
    /// All six faces in canonical order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// The face's entry in the basis table.
    #[inline]
    #[must_use]
    pub fn basis(self) -> &'static FaceBasis {
        &FACE_BASES[self as usize]
    }

    /// Short label such as `"+X"`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CubeFace::PosX => "+X",
            CubeFace::NegX => "-X",
            CubeFace::PosY => "+Y",
            CubeFace::NegY => "-Y",
            CubeFace::PosZ => "+Z",
            CubeFace::NegZ => "-Z",
        }
    }
}

impl fmt::Display for CubeFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_six_face_variants_exist() {
        assert_eq!(CubeFace::ALL.len(), 6);
        for (i, face) in CubeFace::ALL.iter().enumerate() {
            assert_eq!(*face as usize, i);
        }
    }

    #[test]
    fn test_base_lies_on_half_unit_cube() {
        for face in CubeFace::ALL {
            let b = face.basis().base;
            assert_eq!(b.abs(), DVec3::splat(0.5), "base of {face} not a cube corner");
        }
    }

    #[test]
    fn test_axes_are_unit_and_perpendicular() {
        for face in CubeFace::ALL {
            let fb = face.basis();
            assert!((fb.u_axis.length() - 1.0).abs() < 1e-12);
            assert!((fb.v_axis.length() - 1.0).abs() < 1e-12);
            assert!(
                fb.u_axis.dot(fb.v_axis).abs() < 1e-12,
                "axes of {face} are not perpendicular"
            );
        }
    }

    #[test]
    fn test_whole_face_stays_on_one_cube_plane() {
        for face in CubeFace::ALL {
            let fb = face.basis();
            let normal = fb.u_axis.cross(fb.v_axis);
            let plane = fb.base.dot(normal);
            for &(u, v) in &[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0), (0.5, 0.5)] {
                let p = fb.cube_point(u, v);
                assert!((p.dot(normal) - plane).abs() < 1e-12);
                assert!(p.abs().max_element() <= 0.5 + 1e-12);
            }
        }
    }

    #[test]
    fn test_face_centers_are_distinct_axes() {
        let centers: Vec<DVec3> = CubeFace::ALL
            .iter()
            .map(|face| face.basis().direction(0.5, 0.5))
            .collect();
        for (i, a) in centers.iter().enumerate() {
            assert!((a.abs().max_element() - 1.0).abs() < 1e-12, "center {a:?} not axis aligned");
            for b in &centers[i + 1..] {
                assert!((*a - *b).length() > 1.0, "two faces share a center");
            }
        }
    }

    #[test]
    fn test_known_face_centers() {
        assert_eq!(CubeFace::PosX.basis().direction(0.5, 0.5), DVec3::X);
        assert_eq!(CubeFace::NegX.basis().direction(0.5, 0.5), DVec3::NEG_X);
        assert_eq!(CubeFace::PosY.basis().direction(0.5, 0.5), DVec3::NEG_Y);
        assert_eq!(CubeFace::NegY.basis().direction(0.5, 0.5), DVec3::Y);
        assert_eq!(CubeFace::PosZ.basis().direction(0.5, 0.5), DVec3::NEG_Z);
        assert_eq!(CubeFace::NegZ.basis().direction(0.5, 0.5), DVec3::Z);
    }

    #[test]
    fn test_directions_are_unit_length() {
        for face in CubeFace::ALL {
            for i in 0..=8 {
                for j in 0..=8 {
                    let d = face.basis().direction(i as f64 / 8.0, j as f64 / 8.0);
                    assert!((d.length() - 1.0).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(CubeFace::NegZ.to_string(), "-Z");
        assert_eq!(format!("{}", CubeFace::PosY), "+Y");
    }
}
