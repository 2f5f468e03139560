//! Fit-within-bounds resizing.

use libvips::{ops, VipsImage};
use crate::core::ResizeSettings;
use crate::utils::{ConvertError, ConvertResult};

type Result<T> = std::result::Result<T, ConvertError>;

/// Computes the size of `src` shrunk to fit inside `bounds`.
///
/// Returns `None` when the image already fits, i.e. it would need to be
/// enlarged or kept as is. The scale is `min(bw/sw, bh/sh)`; each side is
/// rounded and never drops below 1.
pub fn fit_within(src: (u32, u32), bounds: (u32, u32)) -> Option<(u32, u32)> {
    let (sw, sh) = src;
    let (bw, bh) = bounds;
    if sw == 0 || sh == 0 {
        return None;
    }

    let scale = (bw as f64 / sw as f64).min(bh as f64 / sh as f64);
    if scale >= 1.0 {
        return None;
    }

    let scaled = |side: u32, bound: u32| ((side as f64 * scale).round() as u32).clamp(1, bound.max(1));
    Some((scaled(sw, bw), scaled(sh, bh)))
}

/// Shrinks `image` to fit in `bounds`, returning it unchanged when it fits.
///
/// Uses `thumbnail_image` with the exact target box and `Size::Down` so libvips
/// picks its high-quality shrink path and never upscales.
pub fn shrink_to_fit(image: VipsImage, bounds: (u32, u32)) -> Result<VipsImage> {
    use ops::{Size, ThumbnailImageOptions};

    let src = (image.get_width() as u32, image.get_height() as u32);
    let Some((width, height)) = fit_within(src, bounds) else {
        return Ok(image);
    };

    let opts = ThumbnailImageOptions {
        height: height as i32,
        size: Size::Down, // never upscale
        ..ThumbnailImageOptions::default()
    };

    ops::thumbnail_image_with_opts(&image, width as i32, &opts)
        .map_err(|e| ConvertError::processing(format!(
            "Resize {}×{} → {}×{} failed: {e}", src.0, src.1, width, height
        )))
}

/// Applies the configured maximum dimensions to `image`.
pub fn apply_resize(image: VipsImage, settings: &ResizeSettings) -> ConvertResult<VipsImage> {
    shrink_to_fit(image, (settings.max_width, settings.max_height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn landscape_into_square() {
        assert_eq!(fit_within((800, 600), (400, 400)), Some((400, 300)));
    }

    #[test]
    fn portrait_into_square() {
        assert_eq!(fit_within((600, 800), (400, 400)), Some((300, 400)));
    }

    #[test]
    fn never_upscales() {
        assert_eq!(fit_within((300, 200), (1024, 1024)), None);
        assert_eq!(fit_within((1024, 1024), (1024, 1024)), None);
    }

    #[test]
    fn one_side_over_bounds() {
        assert_eq!(fit_within((2000, 100), (1000, 1000)), Some((1000, 50)));
    }

    #[test]
    fn extreme_aspect_keeps_one_pixel() {
        assert_eq!(fit_within((10_000, 3), (100, 100)), Some((100, 1)));
    }

    proptest! {
        #[test]
        fn result_fits_and_keeps_aspect(
            sw in 1u32..8000, sh in 1u32..8000,
            bw in 1u32..4000, bh in 1u32..4000,
        ) {
            match fit_within((sw, sh), (bw, bh)) {
                None => {
                    prop_assert!(sw <= bw && sh <= bh);
                }
                Some((w, h)) => {
                    prop_assert!(w <= sw && h <= sh);
                    prop_assert!(w <= bw && h <= bh);
                    prop_assert!(w >= 1 && h >= 1);
                    // at least one side reaches its bound
                    prop_assert!(w + 1 >= bw.min(sw) || h + 1 >= bh.min(sh));
                    // aspect within rounding: each side is off by at most one pixel
                    let err = (w as f64 * sh as f64 - h as f64 * sw as f64).abs();
                    prop_assert!(err <= (sw + sh) as f64);
                }
            }
        }
    }
}
