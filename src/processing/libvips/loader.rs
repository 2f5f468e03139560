//! Decoding inputs into sRGB + alpha images.

use std::path::Path;
use libvips::{ops, VipsImage};
use tracing::debug;
use crate::utils::{ConvertError, ConvertResult, display_name};

/// A decoded image normalised to 4-band sRGB.
pub struct LoadedImage {
    pub image: VipsImage,
    /// Whether the file carried its own alpha channel (otherwise it was added opaque)
    pub has_source_alpha: bool,
}

/// Opens `path` and decodes it fully into memory.
///
/// libvips decodes lazily, so the pixels are copied to memory here; a
/// truncated or corrupt file fails now rather than during encoding, and the
/// read handle is released before the next stage runs.
pub(super) fn open_decoded(path: &Path) -> Result<VipsImage, String> {
    let path_str = path
        .to_str()
        .ok_or_else(|| "path is not valid UTF-8".to_string())?;

    if !path.is_file() {
        return Err("file does not exist".to_string());
    }

    let image = VipsImage::new_from_file(path_str).map_err(|e| e.to_string())?;
    VipsImage::image_copy_memory(image).map_err(|e| e.to_string())
}

/// Converts any decoded image to sRGB and guarantees an alpha band.
pub(super) fn normalise_rgba(image: VipsImage) -> Result<(VipsImage, bool), String> {
    let has_alpha = image.image_hasalpha();

    let image = ops::colourspace(&image, ops::Interpretation::Srgb).map_err(|e| e.to_string())?;

    let image = if has_alpha {
        image
    } else {
        ops::bandjoin_const(&image, &mut [255.0]).map_err(|e| e.to_string())?
    };

    Ok((image, has_alpha))
}

/// Loads an input image as RGBA.
pub fn load_rgba(path: &Path) -> ConvertResult<LoadedImage> {
    let decoded = open_decoded(path).map_err(|e| ConvertError::unreadable_image(path, e))?;
    let (image, has_source_alpha) =
        normalise_rgba(decoded).map_err(|e| ConvertError::unreadable_image(path, e))?;

    debug!(
        "Loaded '{}': {}×{} (alpha: {})",
        display_name(path),
        image.get_width(),
        image.get_height(),
        has_source_alpha
    );

    Ok(LoadedImage { image, has_source_alpha })
}
