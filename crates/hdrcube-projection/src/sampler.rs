//! Bilinear reconstruction of continuous-coordinate pixel values.

use crate::PixelBuffer;

/// How integer corner indices outside the buffer are resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AddressMode {
    /// Clamp both axes to the last valid row/column.
    #[default]
    Clamp,
    /// Wrap horizontally (periodic azimuth), clamp vertically.
    RepeatX,
}

impl AddressMode {
    #[inline]
    fn resolve_x(self, x: i64, width: u32) -> u32 {
        let w = i64::from(width);
        match self {
            AddressMode::Clamp => x.clamp(0, w - 1) as u32,
            AddressMode::RepeatX => x.rem_euclid(w) as u32,
        }
    }

    #[inline]
    fn resolve_y(self, y: i64, height: u32) -> u32 {
        y.clamp(0, i64::from(height) - 1) as u32
    }
}

/// Sample `buffer` at continuous coordinate `(x, y)`, writing one value per
/// channel into `out`.
///
/// Corners are `floor`/`ceil` of each coordinate, so an integer coordinate
/// collapses to the stored pixel exactly.
///
/// # Panics
///
/// Panics if `out.len()` differs from the buffer's channel count, or if the
/// buffer is empty.
pub fn sample_into(buffer: &PixelBuffer, x: f32, y: f32, mode: AddressMode, out: &mut [f32]) {
    assert_eq!(out.len(), buffer.channel_count());

    let left = x.floor();
    let right = x.ceil();
    let top = y.floor();
    let bottom = y.ceil();
    let xt = x - left;
    let yt = y - top;

    let (w, h) = buffer.dimensions();
    let l = mode.resolve_x(left as i64, w);
    let r = mode.resolve_x(right as i64, w);
    let t = mode.resolve_y(top as i64, h);
    let b = mode.resolve_y(bottom as i64, h);

    let tl = buffer.pixel(l, t);
    let tr = buffer.pixel(r, t);
    let bl = buffer.pixel(l, b);
    let br = buffer.pixel(r, b);

    let w_tl = (1.0 - xt) * (1.0 - yt);
    let w_tr = xt * (1.0 - yt);
    let w_bl = (1.0 - xt) * yt;
    let w_br = xt * yt;

    for (c, value) in out.iter_mut().enumerate() {
        *value = tl[c] * w_tl + tr[c] * w_tr + bl[c] * w_bl + br[c] * w_br;
    }
}

/// Allocating convenience over [`sample_into`].
#[must_use]
pub fn sample(buffer: &PixelBuffer, x: f32, y: f32, mode: AddressMode) -> Vec<f32> {
    let mut out = vec![0.0; buffer.channel_count()];
    sample_into(buffer, x, y, mode, &mut out);
    out
}
