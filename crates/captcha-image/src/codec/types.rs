//! Error type shared by the codecs.

use thiserror::Error;

/// Errors raised by an [`ImageCodec`](super::ImageCodec).
///
/// The underlying `image` error is kept as the source so callers can inspect
/// it unchanged.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Encoding the image failed.
    #[error("{format} encoding failed: {source}")]
    EncodingFailed {
        format: &'static str,
        #[source]
        source: image::ImageError,
    },

    /// The bytes could not be decoded.
    #[error("{format} decoding failed: {source}")]
    DecodingFailed {
        format: &'static str,
        #[source]
        source: image::ImageError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_codec_error_display_and_source() {
        let inner = image::ImageError::IoError(std::io::Error::other("truncated"));
        let err = CodecError::DecodingFailed {
            format: "PNG",
            source: inner,
        };

        assert_eq!(err.to_string(), "PNG decoding failed: truncated");
        assert!(err.source().is_some());
    }
}
