//! Export adapters around a single rendered image.
//!
//! A captcha renderer produces one [`DynamicImage`] per challenge. The
//! adapters here hold that image (or nothing) and expose the formats a web
//! handler needs:
//! - raw encoded bytes
//! - plain base64 text
//! - base64 data URIs for `<img src=...>`
//! - files on disk
//!
//! Every call re-encodes; nothing is cached. The held image is never
//! mutated, so the adapters can be shared across threads for read-only
//! exports.

mod error;
mod jpeg;
mod png;

#[cfg(test)]
mod fake;

use std::fs;
use std::path::Path;

use image::DynamicImage;

use crate::codec::ImageCodec;

pub use error::ImageDataError;
pub use jpeg::JpegImageData;
pub use png::PngImageData;

/// Encode `image` with `codec` and write it to `path`, creating or
/// truncating the file.
///
/// Encoding happens before the file is opened, so an encode failure leaves
/// any existing file untouched.
fn save_to_file<C: ImageCodec>(
    codec: &C,
    image: &DynamicImage,
    path: &Path,
    quality: u8,
) -> Result<(), ImageDataError> {
    let bytes = codec.encode_to_bytes(image, quality)?;
    fs::write(path, &bytes)?;

    log::debug!(
        "wrote {} bytes of {} to {}",
        bytes.len(),
        codec.mime_type(),
        path.display()
    );
    Ok(())
}
