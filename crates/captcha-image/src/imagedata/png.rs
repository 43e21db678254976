//! PNG export adapter.
//!
//! Same contract as the JPEG adapter minus quality control: PNG is lossless,
//! so every export uses the codec's default settings.

use std::path::Path;

use image::DynamicImage;

use super::{save_to_file, ImageDataError};
use crate::codec::{ImageCodec, PngCodec};
use crate::quality::QUALITY_NONE;

/// A rendered image exported as PNG.
#[derive(Debug, Clone)]
pub struct PngImageData<C = PngCodec> {
    image: Option<DynamicImage>,
    codec: C,
}

impl PngImageData<PngCodec> {
    pub fn new(image: Option<DynamicImage>) -> Self {
        Self::with_codec(image, PngCodec)
    }
}

impl From<DynamicImage> for PngImageData<PngCodec> {
    fn from(image: DynamicImage) -> Self {
        Self::new(Some(image))
    }
}

impl<C: ImageCodec> PngImageData<C> {
    pub fn with_codec(image: Option<DynamicImage>, codec: C) -> Self {
        Self { image, codec }
    }

    pub fn get(&self) -> Option<&DynamicImage> {
        self.image.as_ref()
    }

    fn image(&self) -> Result<&DynamicImage, ImageDataError> {
        self.image.as_ref().ok_or(ImageDataError::ImageEmpty)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ImageDataError> {
        Ok(self
            .codec
            .encode_to_bytes(self.image()?, QUALITY_NONE as u8)?)
    }

    pub fn to_base64(&self) -> Result<String, ImageDataError> {
        Ok(self
            .codec
            .encode_to_base64(self.image()?, QUALITY_NONE as u8)?)
    }

    /// Base64 data URI (`data:image/png;base64,...`).
    pub fn to_base64_data(&self) -> Result<String, ImageDataError> {
        Ok(self
            .codec
            .encode_to_base64_data(self.image()?, QUALITY_NONE as u8)?)
    }

    /// Encode and write to `path`, overwriting any existing file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ImageDataError> {
        let image = self
            .image
            .as_ref()
            .ok_or(ImageDataError::ImageMissingData)?;
        save_to_file(&self.codec, image, path.as_ref(), QUALITY_NONE as u8)
    }
}
