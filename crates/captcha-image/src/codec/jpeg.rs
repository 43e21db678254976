//! JPEG codec backed by the `image` crate.
//!
//! Captcha canvases are usually RGBA; JPEG has no alpha channel, so images
//! with alpha are composited onto black (color premultiplied by alpha)
//! before encoding. Fully transparent areas therefore come out black.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{
    DynamicImage, ExtendedColorType, ImageEncoder, ImageFormat, ImageReader, Rgb, RgbImage, Rgba,
};

use super::{CodecError, ImageCodec};

/// Lossy JPEG codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct JpegCodec;

impl ImageCodec for JpegCodec {
    fn mime_type(&self) -> &'static str {
        "image/jpeg"
    }

    /// Encode to JPEG bytes.
    ///
    /// # Quality Guidelines
    ///
    /// * 100: encoder default used by the adapters
    /// * 70-90: good quality, most captcha backgrounds
    /// * 50-60: small payloads, visible artifacts around glyph edges
    fn encode_to_bytes(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>, CodecError> {
        // Clamp quality to valid range (1-100)
        let quality = quality.clamp(1, 100);

        let rgb = flatten_onto_black(image);
        let (width, height) = rgb.dimensions();
        log::trace!("encoding {}x{} JPEG at quality {}", width, height, quality);

        let mut buffer = Cursor::new(Vec::new());
        let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
        encoder
            .write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
            .map_err(|source| CodecError::EncodingFailed {
                format: "JPEG",
                source,
            })?;

        Ok(buffer.into_inner())
    }

    fn decode_bytes_to_image(&self, bytes: &[u8]) -> Result<DynamicImage, CodecError> {
        ImageReader::with_format(Cursor::new(bytes), ImageFormat::Jpeg)
            .decode()
            .map_err(|source| CodecError::DecodingFailed {
                format: "JPEG",
                source,
            })
    }
}

/// Drop the alpha channel, premultiplying color by alpha.
fn flatten_onto_black(image: &DynamicImage) -> RgbImage {
    if !image.color().has_alpha() {
        return image.to_rgb8();
    }

    let rgba = image.to_rgba8();
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        let premultiply = |c: u8| (c as u16 * a as u16 / 255) as u8;
        Rgb([premultiply(r), premultiply(g), premultiply(b)])
    })
}
