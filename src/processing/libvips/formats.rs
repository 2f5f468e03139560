//! WebP encoding.

use std::path::Path;
use libvips::ops::{self, ForeignKeep};
use libvips::VipsImage;
use crate::utils::{ConvertError, ConvertResult};

/// libvips effort 6 is the slowest, smallest setting (cwebp `-m 6`).
const WEBP_EFFORT: i32 = 6;

/// Drops the alpha band, leaving an RGB image.
pub fn flatten_alpha(image: VipsImage) -> ConvertResult<VipsImage> {
    if !image.image_hasalpha() {
        return Ok(image);
    }
    ops::extract_band_with_opts(&image, 0, &ops::ExtractBandOptions { n: 3 })
        .map_err(|e| ConvertError::processing(format!("Removing alpha failed: {e}")))
}

/// Saves `image` as lossy WebP at `quality` with maximum compression effort.
///
/// Metadata is stripped. The output file handle is closed when libvips
/// finishes writing.
pub fn save_webp(image: &VipsImage, output_path: &Path, quality: u8) -> ConvertResult<()> {
    let path_str = output_path
        .to_str()
        .ok_or_else(|| ConvertError::encode(output_path, "path is not valid UTF-8"))?;

    let q = quality as i32;
    let opts = ops::WebpsaveOptions {
        q,
        lossless: false,
        alpha_q: q,            // alpha quality matches overall quality
        effort: WEBP_EFFORT,
        smart_subsample: true,
        keep: ForeignKeep::None,
        ..ops::WebpsaveOptions::default()
    };

    ops::webpsave_with_opts(image, path_str, &opts)
        .map_err(|e| ConvertError::encode(output_path, format!("WebP save failed: {e}")))
}
