//! Fixture loading shared by the integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use captcha_image::{ImageCodec, ImageDataError, PngCodec};
use image::{DynamicImage, Rgb, RgbImage};

/// Path of a file committed under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Read and decode a PNG fixture. Read and decode failures are returned.
pub fn load_png(path: impl AsRef<Path>) -> Result<DynamicImage, ImageDataError> {
    let bytes = fs::read(path)?;
    Ok(PngCodec.decode_bytes_to_image(&bytes)?)
}

/// Font bytes that parsed as a TrueType/OpenType face.
pub struct FontFixture {
    data: Vec<u8>,
}

impl FontFixture {
    pub fn face(&self) -> ttf_parser::Face<'_> {
        ttf_parser::Face::parse(&self.data, 0).expect("validated in load_font")
    }
}

/// Read and parse a font fixture.
///
/// A missing or unreadable file panics: tests cannot run without their
/// fonts. Parse errors are returned.
pub fn load_font(path: impl AsRef<Path>) -> Result<FontFixture, ttf_parser::FaceParsingError> {
    let path = path.as_ref();
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) => panic!("failed to read font fixture {}: {}", path.display(), err),
    };
    ttf_parser::Face::parse(&data, 0)?;
    Ok(FontFixture { data })
}

/// Diagonal gradient, busy enough that JPEG quality changes the output.
pub fn gradient(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width) as u8,
            (y * 255 / height) as u8,
            ((x + y) * 127 / (width + height)) as u8,
        ])
    }))
}

/// Write `image` as a PNG fixture under `dir` and return its path.
pub fn write_png_fixture(dir: &Path, name: &str, image: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    let bytes = PngCodec
        .encode_to_bytes(image, 100)
        .expect("encode fixture");
    fs::write(&path, bytes).expect("write fixture");
    path
}
