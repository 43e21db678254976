//! Recording codec for adapter tests.

use std::cell::Cell;

use image::DynamicImage;

use crate::codec::{CodecError, ImageCodec};

/// Encodes to `[quality]` and counts calls. Optionally fails every encode.
#[derive(Default)]
pub(crate) struct FakeCodec {
    pub calls: Cell<usize>,
    pub last_quality: Cell<Option<u8>>,
    pub fail: bool,
}

impl FakeCodec {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl ImageCodec for FakeCodec {
    fn mime_type(&self) -> &'static str {
        "image/fake"
    }

    fn encode_to_bytes(&self, _image: &DynamicImage, quality: u8) -> Result<Vec<u8>, CodecError> {
        self.calls.set(self.calls.get() + 1);
        self.last_quality.set(Some(quality));
        if self.fail {
            return Err(CodecError::EncodingFailed {
                format: "FAKE",
                source: image::ImageError::IoError(std::io::Error::other("encoder exploded")),
            });
        }
        Ok(vec![quality])
    }

    fn decode_bytes_to_image(&self, _bytes: &[u8]) -> Result<DynamicImage, CodecError> {
        self.calls.set(self.calls.get() + 1);
        Ok(DynamicImage::new_rgb8(1, 1))
    }
}
