//! JPEG export adapter.

use std::path::Path;

use image::DynamicImage;

use super::{save_to_file, ImageDataError};
use crate::codec::{ImageCodec, JpegCodec};
use crate::quality::{clamp_quality, normalize_quality, QUALITY_NONE};

/// A rendered image exported as JPEG.
///
/// Holds at most one image for its whole lifetime. Exports with an explicit
/// quality forward it only when it lies in
/// `QUALITY_LEVEL_5..=QUALITY_NONE`; anything else silently falls back to
/// [`QUALITY_NONE`].
#[derive(Debug, Clone)]
pub struct JpegImageData<C = JpegCodec> {
    image: Option<DynamicImage>,
    codec: C,
}

impl JpegImageData<JpegCodec> {
    /// Wrap `image` using the built-in JPEG codec. `None` is accepted.
    pub fn new(image: Option<DynamicImage>) -> Self {
        Self::with_codec(image, JpegCodec)
    }
}

impl From<DynamicImage> for JpegImageData<JpegCodec> {
    fn from(image: DynamicImage) -> Self {
        Self::new(Some(image))
    }
}

impl<C: ImageCodec> JpegImageData<C> {
    /// Wrap `image` using a caller-supplied codec.
    pub fn with_codec(image: Option<DynamicImage>, codec: C) -> Self {
        Self { image, codec }
    }

    /// The original image, if any.
    pub fn get(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    fn image(&self) -> Result<&DynamicImage, ImageDataError> {
        self.image.as_ref().ok_or(ImageDataError::ImageEmpty)
    }

    /// Encode at the encoder default quality.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ImageDataError> {
        self.to_bytes_with_quality(QUALITY_NONE)
    }

    /// Encode at `quality`, or the default if it is out of range.
    pub fn to_bytes_with_quality(&self, quality: i32) -> Result<Vec<u8>, ImageDataError> {
        let image = self.image()?;
        Ok(self
            .codec
            .encode_to_bytes(image, normalize_quality(quality))?)
    }

    /// Base64 of [`to_bytes`](Self::to_bytes).
    pub fn to_base64(&self) -> Result<String, ImageDataError> {
        self.to_base64_with_quality(QUALITY_NONE)
    }

    pub fn to_base64_with_quality(&self, quality: i32) -> Result<String, ImageDataError> {
        let image = self.image()?;
        Ok(self
            .codec
            .encode_to_base64(image, normalize_quality(quality))?)
    }

    /// Base64 data URI (`data:image/jpeg;base64,...`).
    pub fn to_base64_data(&self) -> Result<String, ImageDataError> {
        self.to_base64_data_with_quality(QUALITY_NONE)
    }

    pub fn to_base64_data_with_quality(&self, quality: i32) -> Result<String, ImageDataError> {
        let image = self.image()?;
        Ok(self
            .codec
            .encode_to_base64_data(image, normalize_quality(quality))?)
    }

    /// Encode and write to `path`, overwriting any existing file.
    ///
    /// Unlike the `*_with_quality` exports, `quality` is only clamped to the
    /// encoder's 1-100 range, not checked against the level band.
    ///
    /// # Errors
    ///
    /// Returns `ImageDataError::ImageMissingData` without touching the
    /// filesystem when no image is held.
    pub fn save_to_file(&self, path: impl AsRef<Path>, quality: i32) -> Result<(), ImageDataError> {
        let image = self
            .image
            .as_ref()
            .ok_or(ImageDataError::ImageMissingData)?;
        save_to_file(&self.codec, image, path.as_ref(), clamp_quality(quality))
    }
}
