//! digitsvm-io - Image decoding and encoding
//!
//! Turns photographs on disk or in memory into [`GrayscaleImage`]s for the
//! preprocessing pipeline, and writes grayscale images (e.g. binarized
//! previews) back out. Codecs come from the `image` crate; which formats are
//! compiled in is controlled by this crate's cargo features.
//!
//! Colour input is reduced to one channel according to [`GrayConversion`].

mod error;
pub mod format;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use digitsvm_core::GrayscaleImage;
use image::DynamicImage;
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

/// How colour pixels are reduced to a single 8-bit intensity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrayConversion {
    /// Take the red channel (gray sources have R == G == B)
    #[default]
    RedChannel,
    /// Luminance weighting of R, G and B
    Luma,
}

/// Read an image file and convert it to grayscale via the red channel.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<GrayscaleImage> {
    read_image_with(path, GrayConversion::default())
}

/// Read an image file with an explicit gray conversion.
///
/// Every failure to open, detect or decode the file is reported as
/// [`IoError::ImageLoad`] carrying the path.
pub fn read_image_with<P: AsRef<Path>>(
    path: P,
    conversion: GrayConversion,
) -> IoResult<GrayscaleImage> {
    let path = path.as_ref();
    let load_error = |e: IoError| IoError::ImageLoad {
        path: path.display().to_string(),
        message: e.to_string(),
    };

    let data = std::fs::read(path).map_err(|e| load_error(IoError::Io(e)))?;
    let img = read_image_mem(&data, conversion).map_err(load_error)?;
    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "decoded image"
    );
    Ok(img)
}

/// Decode an in-memory encoded image.
pub fn read_image_mem(data: &[u8], conversion: GrayConversion) -> IoResult<GrayscaleImage> {
    let format = detect_format_from_bytes(data)?;
    let decoded = image::load_from_memory_with_format(data, format.codec()?)
        .map_err(map_decode_error)?;
    to_grayscale(&decoded, conversion)
}

/// Reduce a decoded image to a [`GrayscaleImage`].
pub fn to_grayscale(img: &DynamicImage, conversion: GrayConversion) -> IoResult<GrayscaleImage> {
    let (width, height) = (img.width(), img.height());
    let data = match (img, conversion) {
        (DynamicImage::ImageLuma8(gray), _) => gray.as_raw().clone(),
        (_, GrayConversion::RedChannel) => img.to_rgb8().pixels().map(|p| p.0[0]).collect(),
        (_, GrayConversion::Luma) => img.to_luma8().into_raw(),
    };
    Ok(GrayscaleImage::from_raw(width, height, data)?)
}

/// Encode a grayscale image to a file.
///
/// With [`ImageFormat::Unknown`] the format is taken from the file
/// extension of `path`.
pub fn write_image<P: AsRef<Path>>(
    img: &GrayscaleImage,
    path: P,
    format: ImageFormat,
) -> IoResult<()> {
    let path = path.as_ref();
    let format = match format {
        ImageFormat::Unknown => path
            .extension()
            .and_then(|ext| ext.to_str())
            .map_or(ImageFormat::Unknown, ImageFormat::from_extension),
        known => known,
    };
    let bytes = write_image_mem(img, format)?;
    std::fs::write(path, bytes)?;
    debug!(path = %path.display(), ?format, "wrote image");
    Ok(())
}

/// Encode a grayscale image to memory.
///
/// PNM output is a binary graymap (`P5`).
pub fn write_image_mem(img: &GrayscaleImage, format: ImageFormat) -> IoResult<Vec<u8>> {
    let buffer = image::GrayImage::from_raw(img.width(), img.height(), img.data().to_vec())
        .ok_or_else(|| IoError::InvalidData("pixel buffer does not match size".to_string()))?;
    let mut out = Cursor::new(Vec::new());
    match format {
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => {
            use image::ImageEncoder;
            use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};

            PnmEncoder::new(&mut out)
                .with_subtype(PnmSubtype::Graymap(SampleEncoding::Binary))
                .write_image(
                    buffer.as_raw(),
                    buffer.width(),
                    buffer.height(),
                    image::ExtendedColorType::L8,
                )
                .map_err(map_encode_error)?;
        }
        _ => DynamicImage::ImageLuma8(buffer)
            .write_to(&mut out, format.codec()?)
            .map_err(map_encode_error)?,
    }
    Ok(out.into_inner())
}

fn map_encode_error(e: image::ImageError) -> IoError {
    match e {
        image::ImageError::Unsupported(u) => IoError::UnsupportedFormat(u.to_string()),
        other => IoError::EncodeError(other.to_string()),
    }
}

fn map_decode_error(e: image::ImageError) -> IoError {
    match e {
        image::ImageError::Unsupported(u) => IoError::UnsupportedFormat(u.to_string()),
        image::ImageError::IoError(io) => IoError::Io(io),
        other => IoError::DecodeError(other.to_string()),
    }
}
