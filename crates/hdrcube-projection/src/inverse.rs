//! Equirectangular to cubemap: face texel → direction → equirectangular lookup.

use std::f64::consts::{PI, TAU};

use glam::{DVec2, DVec3};

use crate::sampler::{AddressMode, sample_into};
use crate::{CubeFace, PixelBuffer};

/// Wrap `t` into `[0, 1)`. `%` keeps the sign of `t`, so negative results
/// are shifted up by one.
#[inline]
fn wrap_unit(t: f64) -> f64 {
    let r = t % 1.0;
    let r = if r < 0.0 { r + 1.0 } else { r };
    // -ε + 1.0 rounds to exactly 1.0.
    if r >= 1.0 { 0.0 } else { r }
}

/// Spherical angles of a unit direction as `(theta, phi)`.
///
/// `phi` is the polar angle in `[0, π]`, measured so that `-Y` maps to `0`;
/// `theta` is the azimuth in `(-π, π]`.
#[inline]
#[must_use]
pub fn direction_to_angles(dir: DVec3) -> (f64, f64) {
    let phi = (-dir.y).clamp(-1.0, 1.0).acos();
    let theta = (-dir.x).atan2(dir.z);
    (theta, phi)
}

/// Normalized equirectangular coordinate of a unit direction.
///
/// `u` wraps into `[0, 1)`. `v` is `phi / π` clamped to `[0, 1]`, so the
/// exact pole `phi == π` stays on the bottom row.
#[must_use]
pub fn direction_to_equirect_uv(dir: DVec3) -> DVec2 {
    let (theta, phi) = direction_to_angles(dir);
    DVec2::new(wrap_unit(theta / TAU), (phi / PI).clamp(0.0, 1.0))
}

/// Compute the value of texel `(x, y)` of `face` in a cubemap with faces of
/// `face_res` pixels, sampling the equirectangular `source`.
///
/// Pure in its inputs; writes exactly `source.channel_count()` values to `out`.
pub fn sample_cubemap_texel(
    source: &PixelBuffer,
    face: CubeFace,
    x: u32,
    y: u32,
    face_res: u32,
    out: &mut [f32],
) {
    let res_fac = 1.0 / f64::from(face_res);
    let dir = face
        .basis()
        .direction(f64::from(x) * res_fac, f64::from(y) * res_fac);
    let uv = direction_to_equirect_uv(dir);

    sample_into(
        source,
        (uv.x * f64::from(source.width())) as f32,
        (uv.y * f64::from(source.height())) as f32,
        AddressMode::RepeatX,
        out,
    );
}
