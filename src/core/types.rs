//! Core types for conversion settings and results.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use crate::utils::ConvertError;

/// Fully resolved, validated settings for one run.
///
/// Built once by [`crate::cli::Args::into_settings`] before any file is
/// touched. Every stage reads from it; nothing mutates it afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct ConvertSettings {
    /// Lossy WebP quality (0-100)
    pub quality: u8,
    /// Prepended to every output file stem
    pub prefix: String,
    /// Directory receiving the `.webp` files
    pub output_dir: PathBuf,
    /// Bounding box the image is shrunk into
    pub resize: ResizeSettings,
    /// Optional centered image watermark
    pub watermark: Option<WatermarkSettings>,
    /// Optional text watermark
    pub text: Option<TextSettings>,
}

/// Maximum output dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResizeSettings {
    pub max_width: u32,
    pub max_height: u32,
}

/// Image watermark overlay.
#[derive(Debug, Clone, Serialize)]
pub struct WatermarkSettings {
    pub path: PathBuf,
    /// Alpha multiplier numerator; 0 is invisible, 255 keeps the file's own alpha
    pub transparency: u8,
}

/// Text watermark overlay.
#[derive(Debug, Clone, Serialize)]
pub struct TextSettings {
    pub text: String,
    pub font: FontSource,
    /// Nominal size in pixels
    pub size: u32,
    pub color: Rgb,
    pub transparency: u8,
    pub position: TextPosition,
    /// Distance from the edges for corner positions
    pub margin: u32,
}

/// Which font the text renderer should ask for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontSource {
    /// Font file to register before rendering; `None` uses the built-in font
    pub file: Option<PathBuf>,
    /// Family name handed to the renderer together with the size
    pub family: String,
}

/// Family used when no font file is configured or it cannot be loaded.
pub const DEFAULT_FONT_FAMILY: &str = "sans";

impl FontSource {
    /// The built-in fallback font.
    pub fn builtin() -> Self {
        Self {
            file: None,
            family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }

    /// Renderer description such as `"DejaVu Sans 36"`.
    pub fn description(&self, size: u32) -> String {
        format!("{} {}", self.family, size)
    }

    /// Guesses a family name from a font file such as `Roboto-Bold.ttf` → `Roboto`.
    pub fn family_from_file_name(path: &std::path::Path) -> Option<String> {
        let stem = path.file_stem()?.to_str()?;
        let family = stem.split(['-', '_']).next()?.trim();
        (!family.is_empty()).then(|| family.to_string())
    }
}

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    pub fn as_f64_array(self) -> [f64; 3] {
        [self.0 as f64, self.1 as f64, self.2 as f64]
    }
}

impl FromStr for Rgb {
    type Err = ConvertError;

    /// Accepts `#rrggbb`, `#rgb` and `r,g,b`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ConvertError::invalid_argument(format!(
            "Invalid colour '{s}': expected #rrggbb, #rgb or r,g,b"
        ));

        if let Some(hex) = s.strip_prefix('#') {
            if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
            return match hex.len() {
                6 => Ok(Rgb(channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?)),
                3 => {
                    // #abc is shorthand for #aabbcc
                    let expand = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                    Ok(Rgb(expand(0)?, expand(1)?, expand(2)?))
                }
                _ => Err(invalid()),
            };
        }

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        match parts.as_slice() {
            [r, g, b] => Ok(Rgb(
                r.parse().map_err(|_| invalid())?,
                g.parse().map_err(|_| invalid())?,
                b.parse().map_err(|_| invalid())?,
            )),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Where the text layer is anchored on the base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum TextPosition {
    #[default]
    Center,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl TextPosition {
    /// Top-left offset of a `layer` sized box inside a `base` sized canvas.
    ///
    /// Offsets never go negative; a margin that does not fit collapses to 0.
    pub fn offset(self, base: (u32, u32), layer: (u32, u32), margin: u32) -> (u32, u32) {
        let free_x = base.0.saturating_sub(layer.0);
        let free_y = base.1.saturating_sub(layer.1);
        let near = |free: u32| margin.min(free);
        let far = |free: u32| free.saturating_sub(margin);

        match self {
            Self::Center => (free_x / 2, free_y / 2),
            Self::TopLeft => (near(free_x), near(free_y)),
            Self::TopRight => (far(free_x), near(free_y)),
            Self::BottomLeft => (near(free_x), far(free_y)),
            Self::BottomRight => (far(free_x), far(free_y)),
        }
    }
}

/// Outcome of converting one file.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Output pixel dimensions
    pub width: u32,
    pub height: u32,
    pub savings: crate::report::SavingsRecord,
}
