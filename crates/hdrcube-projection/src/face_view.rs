//! Per-face windows into a packed cubemap buffer.

use crate::sampler::{AddressMode, sample_into};
use crate::{CubeFace, Layout, PixelBuffer};

/// The square region one face occupies in a packed buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceRect {
    /// Face stored in this region.
    pub face: CubeFace,
    /// Left edge in buffer pixels.
    pub origin_x: u32,
    /// Top edge in buffer pixels.
    pub origin_y: u32,
    /// Side length in pixels.
    pub size: u32,
}

impl FaceRect {
    /// Whether buffer pixel `(x, y)` lies inside this face.
    #[inline]
    #[must_use]
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.origin_x
            && y >= self.origin_y
            && x - self.origin_x < self.size
            && y - self.origin_y < self.size
    }

    /// Whether two face regions share at least one pixel.
    #[must_use]
    pub fn overlaps(&self, other: &FaceRect) -> bool {
        self.origin_x < other.origin_x + other.size
            && other.origin_x < self.origin_x + self.size
            && self.origin_y < other.origin_y + other.size
            && other.origin_y < self.origin_y + self.size
    }

    /// Whether the region fits inside a `width x height` buffer.
    #[must_use]
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.origin_x + self.size <= width && self.origin_y + self.size <= height
    }
}

/// The six face regions of one packed cubemap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CubemapFaces {
    layout: Layout,
    face_res: u32,
    rects: [FaceRect; 6],
}

impl CubemapFaces {
    /// Face regions for `layout` with faces of `face_res` pixels.
    #[must_use]
    pub fn new(layout: Layout, face_res: u32) -> Self {
        let rects = CubeFace::ALL.map(|face| {
            let (col, row) = layout.cell(face);
            FaceRect {
                face,
                origin_x: col * face_res,
                origin_y: row * face_res,
                size: face_res,
            }
        });
        Self {
            layout,
            face_res,
            rects,
        }
    }

    /// Face regions of an existing packed buffer, sized from its dimensions.
    #[must_use]
    pub fn for_buffer(layout: Layout, buffer: &PixelBuffer) -> Self {
        let (w, h) = buffer.dimensions();
        Self::new(layout, layout.face_res(w, h))
    }

    /// The packing layout.
    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// Side length of every face in pixels.
    #[must_use]
    pub fn face_res(&self) -> u32 {
        self.face_res
    }

    /// Region of one face.
    #[must_use]
    pub fn rect(&self, face: CubeFace) -> FaceRect {
        self.rects[face as usize]
    }

    /// All six regions, indexed by `CubeFace as usize`.
    #[must_use]
    pub fn rects(&self) -> &[FaceRect; 6] {
        &self.rects
    }

    /// The face owning buffer pixel `(x, y)` and the face-local coordinate
    /// of that pixel, or `None` if the pixel sits in an unused cell.
    #[must_use]
    pub fn locate(&self, x: u32, y: u32) -> Option<(CubeFace, u32, u32)> {
        if self.face_res == 0 {
            return None;
        }
        let face = self
            .layout
            .face_at_cell(x / self.face_res, y / self.face_res)?;
        Some((face, x % self.face_res, y % self.face_res))
    }

    /// Read-only view of one face.
    #[must_use]
    pub fn view<'a>(&self, buffer: &'a PixelBuffer, face: CubeFace) -> FaceView<'a> {
        let rect = self.rect(face);
        debug_assert!(rect.fits_within(buffer.width(), buffer.height()));
        FaceView { buffer, rect }
    }

    /// Writable view of one face.
    #[must_use]
    pub fn view_mut<'a>(&self, buffer: &'a mut PixelBuffer, face: CubeFace) -> FaceViewMut<'a> {
        let rect = self.rect(face);
        debug_assert!(rect.fits_within(buffer.width(), buffer.height()));
        FaceViewMut { buffer, rect }
    }
}

/// Bilinear read access to one face of a packed buffer.
#[derive(Clone, Copy, Debug)]
pub struct FaceView<'a> {
    buffer: &'a PixelBuffer,
    rect: FaceRect,
}

impl FaceView<'_> {
    /// The region this view covers.
    #[must_use]
    pub fn rect(&self) -> FaceRect {
        self.rect
    }

    /// Sample the face at normalized `(u, v)`, writing into `out`.
    ///
    /// The face-local pixel coordinate `u * size` is clamped to
    /// `[0, size - 1]` so bilinear corners never leave the face.
    pub fn get_pixel_into(&self, u: f64, v: f64, out: &mut [f32]) {
        let max = f64::from(self.rect.size.saturating_sub(1));
        let size = f64::from(self.rect.size);
        let x = f64::from(self.rect.origin_x) + (u * size).clamp(0.0, max);
        let y = f64::from(self.rect.origin_y) + (v * size).clamp(0.0, max);
        sample_into(self.buffer, x as f32, y as f32, AddressMode::Clamp, out);
    }

    /// Allocating form of [`get_pixel_into`](Self::get_pixel_into).
    #[must_use]
    pub fn get_pixel(&self, u: f64, v: f64) -> Vec<f32> {
        let mut out = vec![0.0; self.buffer.channel_count()];
        self.get_pixel_into(u, v, &mut out);
        out
    }
}

/// Exact write access to one face of a packed buffer.
#[derive(Debug)]
pub struct FaceViewMut<'a> {
    buffer: &'a mut PixelBuffer,
    rect: FaceRect,
}

impl FaceViewMut<'_> {
    /// The region this view covers.
    #[must_use]
    pub fn rect(&self) -> FaceRect {
        self.rect
    }

    /// Write `value` to face-local pixel `(x, y)` without interpolation.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the face.
    pub fn set_pixel(&mut self, x: u32, y: u32, value: &[f32]) {
        assert!(
            x < self.rect.size && y < self.rect.size,
            "({x}, {y}) outside {} face of size {}",
            self.rect.face,
            self.rect.size
        );
        self.buffer
            .set_pixel(self.rect.origin_x + x, self.rect.origin_y + y, value);
    }
}
