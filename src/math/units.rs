//! Physical unit conversions between centimeters and pixels

use crate::io::configuration::CM_PER_INCH;
use crate::io::error::{MosaicError, Result};

/// Reject DPI values that cannot scale a measurement
///
/// # Errors
///
/// Returns `InvalidDpi` if `dpi` is zero, negative or not finite
pub const fn validate_dpi(dpi: f64) -> Result<f64> {
    if dpi.is_finite() && dpi > 0.0 {
        Ok(dpi)
    } else {
        Err(MosaicError::InvalidDpi { value: dpi })
    }
}

/// Exact (unrounded) pixel length of a physical measurement
pub const fn cm_to_px_exact(cm: f64, dpi: f64) -> f64 {
    cm * dpi / CM_PER_INCH
}

/// Pixel length of a physical measurement, rounded to the nearest pixel
pub fn cm_to_px(cm: f64, dpi: f64) -> u32 {
    cm_to_px_exact(cm, dpi).round().max(0.0) as u32
}

/// Physical length of a pixel count
pub fn px_to_cm(px: u32, dpi: f64) -> f64 {
    f64::from(px) * CM_PER_INCH / dpi
}

