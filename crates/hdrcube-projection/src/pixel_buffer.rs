//! Owned multi-channel floating point image storage.

use crate::ProjectionError;

/// A row-major image of `f32` channel values.
///
/// Pixel `(x, y)` occupies `channels` consecutive values starting at
/// `(y * width + x) * channels`. Out-of-range coordinates are a programming
/// error and panic.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: usize,
    data: Vec<f32>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer.
    ///
    /// # Panics
    ///
    /// Panics if `channels` is zero.
    #[must_use]
    pub fn new(width: u32, height: u32, channels: usize) -> Self {
        assert!(channels > 0, "pixel buffer needs at least one channel");
        Self {
            width,
            height,
            channels,
            data: vec![0.0; width as usize * height as usize * channels],
        }
    }

    /// Wrap existing row-major channel data.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::ZeroChannels`] for `channels == 0` and
    /// [`ProjectionError::BufferSizeMismatch`] when `data` has the wrong length.
    pub fn from_raw(
        width: u32,
        height: u32,
        channels: usize,
        data: Vec<f32>,
    ) -> Result<Self, ProjectionError> {
        if channels == 0 {
            return Err(ProjectionError::ZeroChannels);
        }
        let expected = width as usize * height as usize * channels;
        if data.len() != expected {
            return Err(ProjectionError::BufferSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of channels per pixel.
    #[inline]
    #[must_use]
    pub fn channel_count(&self) -> usize {
        self.channels
    }

    /// Returns `(width, height)`.
    #[must_use]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) outside {}x{} buffer",
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * self.channels
    }

    /// Read one channel of one pixel.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u32, y: u32, channel: usize) -> f32 {
        assert!(channel < self.channels, "channel {channel} out of range");
        self.data[self.offset(x, y) + channel]
    }

    /// Write one channel of one pixel.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, channel: usize, value: f32) {
        assert!(channel < self.channels, "channel {channel} out of range");
        let idx = self.offset(x, y) + channel;
        self.data[idx] = value;
    }

    /// All channels of one pixel.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> &[f32] {
        let start = self.offset(x, y);
        &self.data[start..start + self.channels]
    }

    /// Overwrite all channels of one pixel.
    ///
    /// # Panics
    ///
    /// Panics if `value.len()` differs from the channel count.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, value: &[f32]) {
        let start = self.offset(x, y);
        self.data[start..start + self.channels].copy_from_slice(value);
    }

    /// Number of `f32` values in one row.
    #[inline]
    #[must_use]
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.channels
    }

    /// The raw channel data.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// The raw channel data, mutably. Rows are `row_stride()` values long.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the buffer and return its raw channel data.
    #[must_use]
    pub fn into_raw(self) -> Vec<f32> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_zeroed() {
        let buffer = PixelBuffer::new(4, 3, 2);
        assert_eq!(buffer.dimensions(), (4, 3));
        assert_eq!(buffer.channel_count(), 2);
        assert_eq!(buffer.as_slice().len(), 24);
        assert!(buffer.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_set_and_get_channel() {
        let mut buffer = PixelBuffer::new(5, 5, 3);
        buffer.set(2, 4, 1, 0.75);
        assert_eq!(buffer.get(2, 4, 1), 0.75);
        assert_eq!(buffer.get(2, 4, 0), 0.0);
        assert_eq!(buffer.pixel(2, 4), &[0.0, 0.75, 0.0]);
    }

    #[test]
    fn test_set_pixel_writes_row_major() {
        let mut buffer = PixelBuffer::new(3, 2, 2);
        buffer.set_pixel(1, 1, &[1.0, 2.0]);
        let idx = (3 + 1) * 2;
        assert_eq!(&buffer.as_slice()[idx..idx + 2], &[1.0, 2.0]);
        assert_eq!(buffer.row_stride(), 6);
    }

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        let err = PixelBuffer::from_raw(2, 2, 3, vec![0.0; 11]).unwrap_err();
        assert_eq!(
            err,
            ProjectionError::BufferSizeMismatch {
                expected: 12,
                actual: 11
            }
        );
    }

    #[test]
    fn test_from_raw_rejects_zero_channels() {
        let err = PixelBuffer::from_raw(2, 2, 0, Vec::new()).unwrap_err();
        assert_eq!(err, ProjectionError::ZeroChannels);
    }

    #[test]
    fn test_from_raw_roundtrips_data() {
        let data: Vec<f32> = (0..8).map(|i| i as f32).collect();
        let buffer = PixelBuffer::from_raw(2, 2, 2, data.clone()).unwrap();
        assert_eq!(buffer.pixel(1, 1), &[6.0, 7.0]);
        assert_eq!(buffer.into_raw(), data);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_read_panics() {
        let buffer = PixelBuffer::new(2, 2, 1);
        let _ = buffer.get(2, 0, 0);
    }
}
