//! Cubemap to equirectangular: equirectangular pixel → direction → cube face lookup.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

use crate::approx::{FACE_EPSILON, is_close_to};
use crate::{CubeFace, CubemapFaces, PixelBuffer};

/// Unit direction for equirectangular pixel `(x, y)` of a `width x height` image.
///
/// This parameterization is the inverse of
/// [`direction_to_angles`](crate::direction_to_angles) composed with the
/// face basis table; changing one requires changing the other.
#[must_use]
pub fn equirect_direction(x: u32, y: u32, width: u32, height: u32) -> DVec3 {
    let v = 1.0 - f64::from(y) / f64::from(height);
    let theta = v * PI;
    let u = f64::from(x) / f64::from(width);
    let phi = u * TAU;

    DVec3::new(
        phi.sin() * -theta.sin(),
        theta.cos(),
        phi.cos() * -theta.sin(),
    )
}

/// Where a direction lands on the cube: the face it hits plus `u`, `v` in
/// `[0, 1]`, measured from the top-left corner of the face's layout cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceCoord {
    /// Face hit by the direction.
    pub face: CubeFace,
    /// Horizontal position on the face.
    pub u: f64,
    /// Vertical position on the face.
    pub v: f64,
}

/// One row of the face selection table.
///
/// A projected point `coord` in `[0, 1]^3` hits this face when
/// `coord[axis] ≈ plane`; the face-local coordinate is then
/// `(|coord[u_axis] + u_offset|, |coord[v_axis] + v_offset|)`.
#[derive(Clone, Copy, Debug)]
struct FaceHit {
    face: CubeFace,
    axis: usize,
    plane: f64,
    u_axis: usize,
    u_offset: f64,
    v_axis: usize,
    v_offset: f64,
}

const X: usize = 0;
const Y: usize = 1;
const Z: usize = 2;

const fn hit(face: CubeFace, axis: usize, plane: f64, u: (usize, f64), v: (usize, f64)) -> FaceHit {
    FaceHit {
        face,
        axis,
        plane,
        u_axis: u.0,
        u_offset: u.1,
        v_axis: v.0,
        v_offset: v.1,
    }
}

/// Checked in order, first match wins. The Y axis is inverted relative to
/// X and Z: `coord.y ≈ 1` is the `-Y` face.
const FACE_HITS: [FaceHit; 6] = [
    hit(CubeFace::PosX, X, 1.0, (Z, -1.0), (Y, 0.0)),
    hit(CubeFace::NegX, X, 0.0, (Z, 0.0), (Y, 0.0)),
    hit(CubeFace::NegY, Y, 1.0, (X, 0.0), (Z, -1.0)),
    hit(CubeFace::PosY, Y, 0.0, (X, 0.0), (Z, 0.0)),
    hit(CubeFace::PosZ, Z, 1.0, (X, 0.0), (Y, 0.0)),
    hit(CubeFace::NegZ, Z, 0.0, (X, -1.0), (Y, 0.0)),
];

impl FaceHit {
    #[inline]
    fn matches(&self, coord: DVec3) -> bool {
        is_close_to(coord[self.axis], self.plane, FACE_EPSILON)
    }

    /// Rounding can push the offset coordinate a hair past the face edge,
    /// so the result is clamped back into the face.
    #[inline]
    fn face_coord(&self, coord: DVec3) -> FaceCoord {
        let along = |axis: usize, offset: f64| (coord[axis] + offset).abs().clamp(0.0, 1.0);
        FaceCoord {
            face: self.face,
            u: along(self.u_axis, self.u_offset),
            v: along(self.v_axis, self.v_offset),
        }
    }
}

/// Project a direction onto the unit cube `[0, 1]^3`.
///
/// The dominant axis lands exactly on `0` or `1`.
#[inline]
#[must_use]
pub fn project_to_cube(dir: DVec3) -> DVec3 {
    let fac = dir.abs().max_element();
    (dir / fac + DVec3::ONE) * 0.5
}

/// Find the cube face and face-local coordinate a direction points at.
///
/// Returns `None` when no face test matches, which only happens for
/// degenerate input such as a zero or NaN direction.
#[must_use]
pub fn cube_lookup(dir: DVec3) -> Option<FaceCoord> {
    let coord = project_to_cube(dir);
    FACE_HITS
        .iter()
        .find(|hit| hit.matches(coord))
        .map(|hit| hit.face_coord(coord))
}

/// Compute equirectangular pixel `(x, y)` of a `width x height` image from
/// the packed cubemap `source`, writing into `out`.
///
/// Returns `false` and leaves `out` untouched if the pixel's direction
/// matched no face.
pub fn sample_equirect_texel(
    source: &PixelBuffer,
    faces: &CubemapFaces,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
    out: &mut [f32],
) -> bool {
    let dir = equirect_direction(x, y, width, height);
    match cube_lookup(dir) {
        Some(fc) => {
            faces.view(source, fc.face).get_pixel_into(fc.u, fc.v, out);
            true
        }
        None => false,
    }
}
