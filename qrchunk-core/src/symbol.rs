//! Symbol rendering and recognition
//!
//! Thin wrappers around the two symbol engines: `qrcode` renders payload
//! text into a single optical symbol, `rqrr` locates and reads symbols
//! back out of raster images. Both engines are black boxes here; this
//! module owns only capacity checks, error mapping and the selection
//! rule for ambiguous images.

use crate::constants::{DEFAULT_MODULE_PIXELS, MAX_SYMBOL_TEXT_LEN};
use crate::error::CodecError;
use image::{GrayImage, Luma};
use qrcode::types::QrError;
use qrcode::QrCode;

#[cfg(feature = "logging")]
use tracing::{debug, warn};

/// Render payload text into an image containing exactly one symbol.
///
/// The engine picks the smallest symbol version that holds the text at
/// the default error-correction level. Text longer than the largest
/// supported capacity fails with [`CodecError::PayloadTooLarge`].
pub fn render(text: &str) -> Result<GrayImage, CodecError> {
    render_scaled(text, DEFAULT_MODULE_PIXELS)
}

/// Render with an explicit module pixel size
pub fn render_scaled(text: &str, module_pixels: u32) -> Result<GrayImage, CodecError> {
    if text.len() > MAX_SYMBOL_TEXT_LEN {
        return Err(CodecError::PayloadTooLarge(text.len(), MAX_SYMBOL_TEXT_LEN));
    }

    let code = QrCode::new(text.as_bytes()).map_err(|err| match err {
        QrError::DataTooLong => CodecError::PayloadTooLarge(text.len(), MAX_SYMBOL_TEXT_LEN),
        other => CodecError::MalformedPayload(other.to_string()),
    })?;

    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(module_pixels, module_pixels)
        .build();

    #[cfg(feature = "logging")]
    debug!(
        "Rendered {} payload characters into a {}x{} symbol image",
        text.len(),
        image.width(),
        image.height()
    );

    Ok(image)
}

/// Read the payload text of the symbol in an image.
///
/// Zero detected symbols fails with [`CodecError::NoSymbolFound`]. When
/// an image contains more than one symbol, the first grid in detection
/// order is read and the extras are ignored; detection order is
/// deterministic for a given image. A symbol whose pattern is detected
/// but whose content fails the format's internal error correction fails
/// with [`CodecError::ChecksumMismatch`].
pub fn read(image: &GrayImage) -> Result<String, CodecError> {
    let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
        image.width() as usize,
        image.height() as usize,
        |x, y| image.get_pixel(x as u32, y as u32)[0],
    );
    let grids = prepared.detect_grids();

    if grids.is_empty() {
        return Err(CodecError::NoSymbolFound);
    }

    #[cfg(feature = "logging")]
    if grids.len() > 1 {
        warn!(
            "Image contains {} symbols, reading the first detected",
            grids.len()
        );
    }

    match grids[0].decode() {
        Ok((_meta, content)) => Ok(content),
        Err(err) => Err(CodecError::ChecksumMismatch(err.to_string())),
    }
}
