//! Image watermark overlay and the compositing helpers shared with text.

use libvips::{ops, VipsImage};
use tracing::debug;
use crate::core::WatermarkSettings;
use crate::utils::{ConvertError, ConvertResult, display_name};

use super::loader::{normalise_rgba, open_decoded};
use super::resize::shrink_to_fit;

/// Multiplies the alpha band of a 4-band image by `transparency / 255`.
pub(super) fn scale_alpha(image: VipsImage, transparency: u8) -> ConvertResult<VipsImage> {
    if transparency == u8::MAX {
        return Ok(image);
    }

    let err = |e: libvips::error::Error| ConvertError::processing(format!("Alpha scaling failed: {e}"));

    let rgb = ops::extract_band_with_opts(&image, 0, &ops::ExtractBandOptions { n: 3 }).map_err(err)?;
    let alpha = ops::extract_band(&image, 3).map_err(err)?;
    let alpha = ops::linear_with_opts(
        &alpha,
        &mut [transparency as f64 / 255.0],
        &mut [0.0],
        &ops::LinearOptions { uchar: true },
    )
    .map_err(err)?;

    ops::bandjoin(&mut [rgb, alpha]).map_err(err)
}

/// Source-over composites `overlay` onto `base` with its top-left at `(x, y)`.
///
/// The result keeps the size of `base`.
pub(super) fn composite_over(base: &VipsImage, overlay: &VipsImage, x: u32, y: u32) -> ConvertResult<VipsImage> {
    let opts = ops::Composite2Options {
        x: x as i32,
        y: y as i32,
        compositing_space: ops::Interpretation::Srgb,
        premultiplied: false,
    };

    ops::composite_2_with_opts(base, overlay, ops::BlendMode::Over, &opts)
        .map_err(|e| ConvertError::processing(format!("Compositing failed: {e}")))
}

/// Loads the watermark file as RGBA, or fails with `WatermarkUnreadable`.
fn load_watermark(settings: &WatermarkSettings) -> ConvertResult<VipsImage> {
    let path = &settings.path;
    let decoded = open_decoded(path).map_err(|e| ConvertError::watermark_unreadable(path, e))?;
    let (image, _) = normalise_rgba(decoded).map_err(|e| ConvertError::watermark_unreadable(path, e))?;
    Ok(image)
}

/// Overlays the configured watermark, centered and shrunk to fit `base`.
///
/// The watermark file is still loaded when `transparency` is 0 so that a
/// broken watermark path is reported consistently, but nothing is drawn.
pub fn apply_image_watermark(base: VipsImage, settings: &WatermarkSettings) -> ConvertResult<VipsImage> {
    let watermark = load_watermark(settings)?;

    if settings.transparency == 0 {
        debug!("Watermark transparency is 0, skipping overlay");
        return Ok(base);
    }

    let base_w = base.get_width() as u32;
    let base_h = base.get_height() as u32;

    let watermark = shrink_to_fit(watermark, (base_w, base_h))?;
    let watermark = scale_alpha(watermark, settings.transparency)?;

    let wm_w = watermark.get_width() as u32;
    let wm_h = watermark.get_height() as u32;
    let x = base_w.saturating_sub(wm_w) / 2;
    let y = base_h.saturating_sub(wm_h) / 2;

    debug!(
        "Watermark '{}' {}×{} at ({}, {}), transparency {}",
        display_name(&settings.path),
        wm_w,
        wm_h,
        x,
        y,
        settings.transparency
    );

    composite_over(&base, &watermark, x, y)
}
