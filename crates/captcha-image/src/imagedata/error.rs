//! Error model for the export adapters.

use thiserror::Error;

use crate::codec::CodecError;

/// Errors returned by [`JpegImageData`](super::JpegImageData) and
/// [`PngImageData`](super::PngImageData).
///
/// `ImageEmpty` and `ImageMissingData` are raised before any codec or
/// filesystem call. Everything else is a collaborator failure passed through
/// unchanged.
#[derive(Debug, Error)]
pub enum ImageDataError {
    /// An export was requested but the adapter holds no image.
    #[error("image is empty")]
    ImageEmpty,

    /// A file save was requested but the adapter holds no image.
    #[error("missing image data")]
    ImageMissingData,

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
