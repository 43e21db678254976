//! Captcha Image - export adapters for rendered captcha images
//!
//! A captcha renderer produces an in-memory [`image::DynamicImage`]. This
//! crate wraps it and hands it back in the shapes a server needs: encoded
//! bytes, base64 text, base64 data URIs, or files.
//!
//! # Module Structure
//!
//! - `quality` - JPEG quality levels and normalization
//! - `codec` - the [`ImageCodec`] trait and JPEG/PNG implementations
//! - `imagedata` - [`JpegImageData`] and [`PngImageData`] adapters
//!
//! # Usage
//!
//! ```ignore
//! use captcha_image::{JpegImageData, QUALITY_LEVEL_2};
//!
//! let data = JpegImageData::new(Some(rendered));
//! let src = data.to_base64_data_with_quality(QUALITY_LEVEL_2)?;
//! data.save_to_file("captcha.jpg", QUALITY_LEVEL_2)?;
//! ```

pub mod codec;
pub mod imagedata;
pub mod quality;

pub use codec::{CodecError, ImageCodec, JpegCodec, PngCodec};
pub use imagedata::{ImageDataError, JpegImageData, PngImageData};
pub use quality::{
    normalize_quality, QualityLevel, QUALITY_LEVEL_1, QUALITY_LEVEL_2, QUALITY_LEVEL_3,
    QUALITY_LEVEL_4, QUALITY_LEVEL_5, QUALITY_NONE,
};
