//! Whole-image conversions between equirectangular and packed cubemap buffers.

use std::time::Instant;

use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::forward::sample_equirect_texel;
use crate::inverse::sample_cubemap_texel;
use crate::{CubeFace, CubemapFaces, Layout, PixelBuffer, ProjectionError};

/// Drives the per-pixel projectors over a destination buffer.
///
/// Every destination pixel is computed independently, so rows can be
/// processed in any order. With `parallel` set, rows are spread over the
/// rayon thread pool; the output is identical either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Converter {
    parallel: bool,
}

impl Default for Converter {
    fn default() -> Self {
        Self { parallel: true }
    }
}

impl Converter {
    /// A converter that uses the rayon thread pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable row-parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Whether rows are processed on the rayon thread pool.
    #[must_use]
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Resample an equirectangular image into a packed cubemap.
    ///
    /// Faces are `source.width() / 4` pixels square. Unused cells of the
    /// `cube` layout stay zero.
    #[must_use]
    pub fn to_cubemap(&self, source: &PixelBuffer, layout: Layout) -> PixelBuffer {
        let start = Instant::now();
        let face_res = source.width() / 4;
        let (width, height) = layout.packed_size(face_res);
        let channels = source.channel_count();
        let faces = CubemapFaces::new(layout, face_res);
        let mut dest = PixelBuffer::new(width, height, channels);

        debug!(%layout, face_res, width, height, "equirectangular -> cubemap");

        let stride = dest.row_stride();
        if self.parallel && stride > 0 {
            dest.as_mut_slice()
                .par_chunks_mut(stride)
                .enumerate()
                .for_each(|(y, row)| {
                    for x in 0..width {
                        if let Some((face, lx, ly)) = faces.locate(x, y as u32) {
                            let px = x as usize * channels;
                            let out = &mut row[px..px + channels];
                            sample_cubemap_texel(source, face, lx, ly, face_res, out);
                        }
                    }
                });
        } else {
            let mut texel = vec![0.0; channels];
            for face in CubeFace::ALL {
                let mut view = faces.view_mut(&mut dest, face);
                for y in 0..face_res {
                    for x in 0..face_res {
                        sample_cubemap_texel(source, face, x, y, face_res, &mut texel);
                        view.set_pixel(x, y, &texel);
                    }
                }
            }
        }

        info!(
            %layout,
            face_res,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "converted equirectangular to cubemap"
        );
        dest
    }

    /// Resample a packed cubemap into an equirectangular image of
    /// `4 * face_res` by `2 * face_res` pixels.
    ///
    /// The source dimensions must match `layout`; a mismatch is not detected.
    /// Pixels whose direction matches no face stay zero and are reported.
    #[must_use]
    pub fn to_equirectangular(&self, source: &PixelBuffer, layout: Layout) -> PixelBuffer {
        let start = Instant::now();
        let faces = CubemapFaces::for_buffer(layout, source);
        let face_res = faces.face_res();
        let (width, height) = (face_res * 4, face_res * 2);
        let channels = source.channel_count();
        let mut dest = PixelBuffer::new(width, height, channels);

        debug!(%layout, face_res, width, height, "cubemap -> equirectangular");

        let stride = dest.row_stride();
        let unmatched: usize = if self.parallel && stride > 0 {
            dest.as_mut_slice()
                .par_chunks_mut(stride)
                .enumerate()
                .map(|(y, row)| {
                    let y = y as u32;
                    let mut misses = 0;
                    for x in 0..width {
                        let px = x as usize * channels;
                        let out = &mut row[px..px + channels];
                        if !sample_equirect_texel(source, &faces, x, y, width, height, out) {
                            debug!(x, y, "direction matched no cube face, pixel left unset");
                            misses += 1;
                        }
                    }
                    misses
                })
                .sum()
        } else {
            let mut misses = 0;
            let mut texel = vec![0.0; channels];
            for y in 0..height {
                for x in 0..width {
                    if sample_equirect_texel(source, &faces, x, y, width, height, &mut texel) {
                        dest.set_pixel(x, y, &texel);
                    } else {
                        debug!(x, y, "direction matched no cube face, pixel left unset");
                        misses += 1;
                    }
                }
            }
            misses
        };

        if unmatched > 0 {
            warn!(unmatched, "some pixels matched no cube face and were left unset");
        }
        info!(
            %layout,
            face_res,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "converted cubemap to equirectangular"
        );
        dest
    }
}

/// Convert an equirectangular image to a packed cubemap in the named layout.
///
/// # Errors
///
/// Returns [`ProjectionError::InvalidLayout`] before any allocation if
/// `layout` is not `"line"` or `"cube"`.
pub fn to_cubemap(source: &PixelBuffer, layout: &str) -> Result<PixelBuffer, ProjectionError> {
    let layout: Layout = layout.parse()?;
    Ok(Converter::default().to_cubemap(source, layout))
}

/// Convert a packed cubemap in the named layout to an equirectangular image.
///
/// # Errors
///
/// Returns [`ProjectionError::InvalidLayout`] before any allocation if
/// `layout` is not `"line"` or `"cube"`.
pub fn to_equirectangular(
    source: &PixelBuffer,
    layout: &str,
) -> Result<PixelBuffer, ProjectionError> {
    let layout: Layout = layout.parse()?;
    Ok(Converter::default().to_equirectangular(source, layout))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(width: u32, height: u32, channels: usize) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height, channels);
        for y in 0..height {
            for x in 0..width {
                for c in 0..channels {
                    let v = ((x * 7 + y * 13 + c as u32 * 5) % 17) as f32 / 17.0;
                    buffer.set(x, y, c, v);
                }
            }
        }
        buffer
    }

    #[test]
    fn test_cubemap_dimensions() {
        let source = pattern(64, 32, 3);
        let converter = Converter::new();
        assert_eq!(converter.to_cubemap(&source, Layout::Line).dimensions(), (96, 16));
        assert_eq!(converter.to_cubemap(&source, Layout::Cube).dimensions(), (64, 48));
    }

    #[test]
    fn test_equirect_dimensions() {
        let converter = Converter::new();
        let line = PixelBuffer::new(48, 8, 1);
        assert_eq!(converter.to_equirectangular(&line, Layout::Line).dimensions(), (32, 16));
        let cube = PixelBuffer::new(32, 24, 1);
        assert_eq!(converter.to_equirectangular(&cube, Layout::Cube).dimensions(), (32, 16));
    }

    #[test]
    fn test_channel_count_preserved() {
        let source = pattern(16, 8, 4);
        let cube = to_cubemap(&source, "cube").unwrap();
        assert_eq!(cube.channel_count(), 4);
        let back = to_equirectangular(&cube, "cube").unwrap();
        assert_eq!(back.channel_count(), 4);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let source = pattern(32, 16, 3);
        let par = Converter::new();
        let seq = Converter::new().with_parallel(false);
        assert!(!seq.is_parallel());
        for layout in Layout::ALL {
            let a = par.to_cubemap(&source, layout);
            let b = seq.to_cubemap(&source, layout);
            assert_eq!(a, b, "{layout} cubemap differs between schedules");

            let ea = par.to_equirectangular(&a, layout);
            let eb = seq.to_equirectangular(&b, layout);
            assert_eq!(ea, eb, "{layout} equirect differs between schedules");
        }
    }

    #[test]
    fn test_unused_cube_cells_stay_zero() {
        let mut source = PixelBuffer::new(16, 8, 1);
        for y in 0..8 {
            for x in 0..16 {
                source.set(x, y, 0, 1.0);
            }
        }
        let cube = Converter::new().to_cubemap(&source, Layout::Cube);
        let faces = CubemapFaces::new(Layout::Cube, 4);
        for y in 0..12 {
            for x in 0..16 {
                let v = cube.get(x, y, 0);
                if faces.locate(x, y).is_some() {
                    assert!((v - 1.0).abs() < 1e-6, "face pixel ({x}, {y}) = {v}");
                } else {
                    assert_eq!(v, 0.0, "unused pixel ({x}, {y}) written");
                }
            }
        }
    }

    #[test]
    fn test_invalid_layout_rejected() {
        let source = pattern(16, 8, 3);
        assert_eq!(
            to_cubemap(&source, "hex"),
            Err(ProjectionError::InvalidLayout("hex".to_string()))
        );
        assert!(matches!(
            to_equirectangular(&source, "hex"),
            Err(ProjectionError::InvalidLayout(_))
        ));
    }

    #[test]
    fn test_tiny_source_yields_empty_cubemap() {
        let source = pattern(3, 2, 1);
        let cube = Converter::new().to_cubemap(&source, Layout::Line);
        assert_eq!(cube.dimensions(), (0, 0));
    }
}
