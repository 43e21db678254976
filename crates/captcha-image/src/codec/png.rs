//! Lossless PNG codec backed by the `image` crate.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::{DynamicImage, ImageFormat, ImageReader};

use super::{CodecError, ImageCodec};

/// PNG codec. The quality argument is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl ImageCodec for PngCodec {
    fn mime_type(&self) -> &'static str {
        "image/png"
    }

    fn encode_to_bytes(&self, image: &DynamicImage, _quality: u8) -> Result<Vec<u8>, CodecError> {
        log::trace!("encoding {}x{} PNG", image.width(), image.height());

        let mut buffer = Cursor::new(Vec::new());
        image
            .write_with_encoder(PngEncoder::new(&mut buffer))
            .map_err(|source| CodecError::EncodingFailed {
                format: "PNG",
                source,
            })?;

        Ok(buffer.into_inner())
    }

    fn decode_bytes_to_image(&self, bytes: &[u8]) -> Result<DynamicImage, CodecError> {
        ImageReader::with_format(Cursor::new(bytes), ImageFormat::Png)
            .decode()
            .map_err(|source| CodecError::DecodingFailed {
                format: "PNG",
                source,
            })
    }
}
