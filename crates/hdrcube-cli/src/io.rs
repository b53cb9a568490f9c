//! Loading and saving [`PixelBuffer`]s through the `image` crate.

use std::path::Path;

use hdrcube_projection::PixelBuffer;
use image::{DynamicImage, ImageFormat, ImageReader, Rgb32FImage, Rgba32FImage};
use tracing::debug;

use crate::error::CliError;

/// Decode `path` into a linear `f32` buffer.
///
/// Images with alpha load as 4 channels, everything else as RGB.
pub fn load_image(path: &Path) -> Result<PixelBuffer, CliError> {
    let image = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let (width, height) = (image.width(), image.height());
    let color = image.color();

    let (channels, data) = if color.has_alpha() {
        (4, image.into_rgba32f().into_raw())
    } else {
        (3, image.into_rgb32f().into_raw())
    };
    debug!(path = %path.display(), width, height, ?color, channels, "loaded image");
    Ok(PixelBuffer::from_raw(width, height, channels, data)?)
}

/// Encode `buffer` to `path`, picking the format from the extension.
///
/// `.hdr` is written as RGB32F with alpha dropped, `.exr` keeps full `f32`
/// precision, and every other format is quantized to 8 bits.
pub fn save_image(path: &Path, buffer: &PixelBuffer) -> Result<(), CliError> {
    let format = ImageFormat::from_path(path)?;
    let image = to_dynamic_image(buffer)?;

    let encoded = match format {
        ImageFormat::Hdr => DynamicImage::ImageRgb32F(image.into_rgb32f()),
        ImageFormat::OpenExr => image,
        ImageFormat::Jpeg => DynamicImage::ImageRgb8(image.into_rgb8()),
        _ if image.color().has_alpha() => DynamicImage::ImageRgba8(image.into_rgba8()),
        _ => DynamicImage::ImageRgb8(image.into_rgb8()),
    };

    debug!(path = %path.display(), ?format, color = ?encoded.color(), "writing image");
    encoded.save_with_format(path, format)?;
    Ok(())
}

fn to_dynamic_image(buffer: &PixelBuffer) -> Result<DynamicImage, CliError> {
    let (width, height) = buffer.dimensions();
    let channels = buffer.channel_count();
    let data = buffer.as_slice().to_vec();

    let image = match channels {
        3 => Rgb32FImage::from_raw(width, height, data).map(DynamicImage::ImageRgb32F),
        4 => Rgba32FImage::from_raw(width, height, data).map(DynamicImage::ImageRgba32F),
        n => return Err(CliError::UnsupportedChannels(n)),
    };
    image.ok_or(CliError::UnsupportedChannels(channels))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32, channels: usize) -> PixelBuffer {
        let mut buffer = PixelBuffer::new(width, height, channels);
        for y in 0..height {
            for x in 0..width {
                let r = x as f32 / (width - 1) as f32;
                let g = y as f32 / (height - 1) as f32;
                let mut texel = vec![r, g, 0.25];
                if channels == 4 {
                    texel.push(1.0);
                }
                buffer.set_pixel(x, y, &texel);
            }
        }
        buffer
    }

    #[test]
    fn test_exr_roundtrip_is_lossless() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sky.exr");
        let buffer = gradient(8, 4, 3);

        save_image(&path, &buffer).unwrap();
        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded, buffer);
    }

    #[test]
    fn test_hdr_roundtrip_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sky.hdr");
        let buffer = gradient(8, 4, 3);

        save_image(&path, &buffer).unwrap();
        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.dimensions(), (8, 4));
        assert_eq!(loaded.channel_count(), 3);
        for (a, b) in buffer.as_slice().iter().zip(loaded.as_slice()) {
            assert!((a - b).abs() < 0.02, "rgbe error too large: {a} vs {b}");
        }
    }

    #[test]
    fn test_hdr_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sky.hdr");
        save_image(&path, &gradient(4, 2, 4)).unwrap();
        assert_eq!(load_image(&path).unwrap().channel_count(), 3);
    }

    #[test]
    fn test_png_keeps_alpha_channel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sky.png");
        let buffer = gradient(6, 3, 4);

        save_image(&path, &buffer).unwrap();
        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.channel_count(), 4);
        for (a, b) in buffer.as_slice().iter().zip(loaded.as_slice()) {
            assert!((a - b).abs() <= 1.0 / 255.0 + 1e-6, "8-bit error: {a} vs {b}");
        }
    }

    #[test]
    fn test_unsupported_channel_count() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_image(&dir.path().join("a.exr"), &PixelBuffer::new(2, 2, 2)).unwrap_err();
        assert!(matches!(err, CliError::UnsupportedChannels(2)));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_image(&dir.path().join("a.xyz"), &gradient(2, 2, 3)).unwrap_err();
        assert!(matches!(err, CliError::Image(_)));
    }
}
