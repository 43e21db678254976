//! Encoder/decoder collaborators for the export adapters.
//!
//! The adapters in [`crate::imagedata`] never touch pixel data themselves.
//! They hand the held image to an [`ImageCodec`], which owns the byte-level
//! format. Two implementations are provided:
//! - [`JpegCodec`] - lossy JPEG with a quality setting
//! - [`PngCodec`] - lossless PNG, quality is ignored
//!
//! Base64 and data-URI output are derived from the encoded bytes by the
//! trait's provided methods, so a codec only has to implement raw encoding
//! and decoding.

mod jpeg;
mod png;
mod types;

use base64::{engine::general_purpose, Engine as _};
use image::DynamicImage;

pub use jpeg::JpegCodec;
pub use png::PngCodec;
pub use types::CodecError;

/// Capability interface the export adapters encode through.
pub trait ImageCodec {
    /// MIME type used in data URIs, e.g. `image/jpeg`.
    fn mime_type(&self) -> &'static str;

    /// Encode `image` at `quality` (1-100; codecs may ignore it).
    fn encode_to_bytes(&self, image: &DynamicImage, quality: u8) -> Result<Vec<u8>, CodecError>;

    /// Decode a full file worth of bytes into an image.
    fn decode_bytes_to_image(&self, bytes: &[u8]) -> Result<DynamicImage, CodecError>;

    /// Encode and return standard base64 (with padding).
    fn encode_to_base64(&self, image: &DynamicImage, quality: u8) -> Result<String, CodecError> {
        let bytes = self.encode_to_bytes(image, quality)?;
        Ok(general_purpose::STANDARD.encode(bytes))
    }

    /// Encode and return a `data:<mime>;base64,<payload>` URI.
    fn encode_to_base64_data(
        &self,
        image: &DynamicImage,
        quality: u8,
    ) -> Result<String, CodecError> {
        let b64 = self.encode_to_base64(image, quality)?;
        Ok(data_uri(self.mime_type(), &b64))
    }
}

/// Format a base64 payload as a data URI.
pub(crate) fn data_uri(mime_type: &str, base64_payload: &str) -> String {
    format!("data:{};base64,{}", mime_type, base64_payload)
}
