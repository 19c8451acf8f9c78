//! Image format detection
//!
//! Detects image formats by examining magic numbers in the file header.

use crate::{IoError, IoResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Image file formats understood by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// Windows BMP
    Bmp,
    /// JPEG
    Jpeg,
    /// PNG
    Png,
    /// Portable any-map (PBM/PGM/PPM/PAM)
    Pnm,
    /// GIF
    Gif,
    /// TIFF
    Tiff,
    /// WebP
    WebP,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Bmp => "bmp",
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Pnm => "pnm",
            Self::Gif => "gif",
            Self::Tiff => "tif",
            Self::WebP => "webp",
        }
    }

    /// Guess the format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "bmp" => Self::Bmp,
            "jpg" | "jpeg" => Self::Jpeg,
            "png" => Self::Png,
            "pnm" | "pgm" | "ppm" | "pbm" | "pam" => Self::Pnm,
            "gif" => Self::Gif,
            "tif" | "tiff" => Self::Tiff,
            "webp" => Self::WebP,
            _ => Self::Unknown,
        }
    }

    /// Corresponding codec format of the `image` crate.
    pub(crate) fn codec(self) -> IoResult<image::ImageFormat> {
        match self {
            Self::Bmp => Ok(image::ImageFormat::Bmp),
            Self::Jpeg => Ok(image::ImageFormat::Jpeg),
            Self::Png => Ok(image::ImageFormat::Png),
            Self::Pnm => Ok(image::ImageFormat::Pnm),
            Self::Gif => Ok(image::ImageFormat::Gif),
            Self::Tiff => Ok(image::ImageFormat::Tiff),
            Self::WebP => Ok(image::ImageFormat::WebP),
            Self::Unknown => Err(IoError::UnsupportedFormat(
                "unknown image format".to_string(),
            )),
        }
    }
}

/// Magic numbers for image format detection
mod magic {
    /// BMP: "BM"
    pub const BMP: &[u8] = b"BM";

    /// PNG: 89 50 4E 47 0D 0A 1A 0A
    pub const PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    /// JPEG: FF D8 FF
    pub const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    /// GIF87a
    pub const GIF87A: &[u8] = b"GIF87a";

    /// GIF89a
    pub const GIF89A: &[u8] = b"GIF89a";

    /// TIFF little-endian: II 2A 00
    pub const TIFF_LE: &[u8] = &[0x49, 0x49, 0x2A, 0x00];

    /// TIFF big-endian: MM 00 2A
    pub const TIFF_BE: &[u8] = &[0x4D, 0x4D, 0x00, 0x2A];

    /// WebP: RIFF....WEBP
    pub const RIFF: &[u8] = b"RIFF";
    pub const WEBP: &[u8] = b"WEBP";

    /// PNM magics P1..P6 and PAM (P7)
    pub const PNM: [&[u8]; 7] = [b"P1", b"P2", b"P3", b"P4", b"P5", b"P6", b"P7"];
}

/// Detect image format from a file path
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut file = File::open(path)?;
    let mut header = [0u8; 12];
    let bytes_read = file.read(&mut header)?;
    detect_format_from_bytes(&header[..bytes_read])
}

/// Detect image format from bytes
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.len() < 2 {
        return Err(IoError::InvalidData(
            "not enough data to detect format".to_string(),
        ));
    }

    if data.starts_with(magic::BMP) {
        return Ok(ImageFormat::Bmp);
    }

    if data.starts_with(magic::PNG) {
        return Ok(ImageFormat::Png);
    }

    if data.starts_with(magic::JPEG) {
        return Ok(ImageFormat::Jpeg);
    }

    if data.starts_with(magic::GIF87A) || data.starts_with(magic::GIF89A) {
        return Ok(ImageFormat::Gif);
    }

    if data.starts_with(magic::TIFF_LE) || data.starts_with(magic::TIFF_BE) {
        return Ok(ImageFormat::Tiff);
    }

    if data.len() >= 12 && data.starts_with(magic::RIFF) && &data[8..12] == magic::WEBP {
        return Ok(ImageFormat::WebP);
    }

    if magic::PNM.iter().any(|m| data.starts_with(m)) {
        return Ok(ImageFormat::Pnm);
    }

    Err(IoError::UnsupportedFormat(
        "unknown image format".to_string(),
    ))
}
