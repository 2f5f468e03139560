//! Text watermark rendering.

use libvips::{ops, VipsImage};
use tracing::{debug, warn};
use crate::core::{FontSource, TextSettings};
use crate::utils::{ConvertError, ConvertResult};

use super::resize::shrink_to_fit;
use super::watermark::{composite_over, scale_alpha};

/// Rendering resolution; at 72 dpi one point is one pixel.
const TEXT_DPI: i32 = 72;

/// Escapes the characters Pango markup treats specially.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

/// Markup for a system font: the family and size travel in a span.
fn span_markup(text: &str, font: &FontSource, size: u32) -> String {
    format!(
        "<span font_desc=\"{}\">{}</span>",
        escape_markup(&font.description(size)),
        escape_markup(text)
    )
}

/// Renders `text` as a one-band glyph mask (0 = empty, 255 = ink).
///
/// A configured font file that libvips refuses to load is reported as
/// `FontUnavailable` and rendering is retried with the built-in font.
fn render_mask(text: &str, font: &FontSource, size: u32) -> ConvertResult<VipsImage> {
    let builtin = FontSource::builtin();

    let font = match &font.file {
        None => font,
        Some(file) => {
            let opts = ops::TextOptions {
                font: font.description(size),
                fontfile: file.to_string_lossy().into_owned(),
                dpi: TEXT_DPI,
                ..ops::TextOptions::default()
            };

            match ops::text_with_opts(&escape_markup(text), &opts) {
                Ok(mask) => return Ok(mask),
                Err(e) => {
                    let unavailable = ConvertError::font_unavailable(file, e);
                    warn!("{unavailable}; falling back to the default font");
                    &builtin
                }
            }
        }
    };

    // `ops::text` keeps the default dpi of 72 and no font file
    ops::text(&span_markup(text, font, size))
        .map_err(|e| ConvertError::processing(format!("Text rendering failed: {e}")))
}

/// Builds the RGBA text layer: font colour everywhere, glyph mask as alpha.
fn colour_layer(mask: &VipsImage, settings: &TextSettings) -> ConvertResult<VipsImage> {
    let err = |e: libvips::error::Error| ConvertError::processing(format!("Text layer failed: {e}"));

    let fill = ops::black_with_opts(
        mask.get_width(),
        mask.get_height(),
        &ops::BlackOptions { bands: 3 },
    )
    .map_err(err)?;
    let rgb = ops::linear_with_opts(
        &fill,
        &mut [1.0, 1.0, 1.0],
        &mut settings.color.as_f64_array(),
        &ops::LinearOptions { uchar: true },
    )
    .map_err(err)?;
    let alpha = ops::cast(mask, ops::BandFormat::Uchar).map_err(err)?;

    let layer = ops::bandjoin(&mut [rgb, alpha]).map_err(err)?;
    scale_alpha(layer, settings.transparency)
}

/// Draws the configured text onto `base`.
pub fn apply_text_watermark(base: VipsImage, settings: &TextSettings) -> ConvertResult<VipsImage> {
    if settings.transparency == 0 {
        debug!("Text transparency is 0, skipping overlay");
        return Ok(base);
    }

    let base_w = base.get_width() as u32;
    let base_h = base.get_height() as u32;

    let mask = render_mask(&settings.text, &settings.font, settings.size)?;
    let layer = colour_layer(&mask, settings)?;
    let layer = shrink_to_fit(layer, (base_w, base_h))?;

    let layer_size = (layer.get_width() as u32, layer.get_height() as u32);
    let (x, y) = settings.position.offset((base_w, base_h), layer_size, settings.margin);

    debug!(
        "Text '{}' {}×{} at ({}, {}) colour {} transparency {}",
        settings.text,
        layer_size.0,
        layer_size.1,
        x,
        y,
        settings.color,
        settings.transparency
    );

    composite_over(&base, &layer, x, y)
}
