//! Command-line surface and resolution into [`ConvertSettings`].

use clap::{ArgAction, Parser, ValueHint};
use std::path::PathBuf;

use crate::core::{
    ConvertSettings, ResizeSettings, Rgb, TextPosition, TextSettings, WatermarkSettings,
};
use crate::utils::{
    ConvertError, ConvertResult, resolve_font, validate_byte_range, validate_positive,
};

/// Default watermark transparency when `--transparency` is not given.
pub const DEFAULT_TRANSPARENCY: u32 = 100;

#[derive(Parser, Debug)]
#[command(
    name = "webp-batch",
    version,
    about = "Convert images to WebP with optional watermarking, quality, prefix, and report total savings."
)]
pub struct Args {
    /// Files to convert (PNG, JPG, JPEG)
    #[arg(required = true, num_args = 1.., value_hint = ValueHint::FilePath)]
    pub files: Vec<PathBuf>,

    /// Output WebP quality (0-100)
    #[arg(long, default_value_t = 85)]
    pub quality: u32,

    /// Filename prefix for output files
    #[arg(long, default_value = "")]
    pub prefix: String,

    /// Max width to resize to
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Max height to resize to
    #[arg(long, default_value_t = 1024)]
    pub height: u32,

    /// Directory the WebP files are written to
    #[arg(long, default_value = "./webp", value_hint = ValueHint::DirPath)]
    pub output_dir: PathBuf,

    /// Path to watermark image
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Watermark")]
    pub watermark: Option<PathBuf>,

    /// Watermark transparency (0-255)
    #[arg(long, default_value_t = DEFAULT_TRANSPARENCY, help_heading = "Watermark")]
    pub transparency: u32,

    /// Text to draw over the image
    #[arg(long, help_heading = "Text")]
    pub text: Option<String>,

    /// Font file for the text; falls back to the default font if unusable
    #[arg(long, value_hint = ValueHint::FilePath, help_heading = "Text")]
    pub font_path: Option<PathBuf>,

    /// Font family name inside --font-path (guessed from the file name if omitted)
    #[arg(long, help_heading = "Text")]
    pub font_family: Option<String>,

    /// Font size in pixels
    #[arg(long, default_value_t = 36, help_heading = "Text")]
    pub font_size: u32,

    /// Text colour as #rrggbb, #rgb or r,g,b
    #[arg(long, default_value_t = Rgb::WHITE.to_string(), help_heading = "Text")]
    pub font_color: String,

    /// Text transparency (0-255)
    #[arg(long, default_value_t = 100, help_heading = "Text")]
    pub text_transparency: u32,

    /// Where the text is placed
    #[arg(long, value_enum, default_value_t = TextPosition::Center, help_heading = "Text")]
    pub text_position: TextPosition,

    /// Distance in pixels from the edges for corner positions
    #[arg(long, default_value_t = 10, help_heading = "Text")]
    pub text_margin: u32,

    /// Print the final report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Validates every option and produces the immutable run settings.
    ///
    /// Any problem is an [`ConvertError::InvalidArgument`] except an unusable
    /// font file, which resolves to the built-in font.
    pub fn into_settings(self) -> ConvertResult<ConvertSettings> {
        let quality = validate_byte_range("quality", self.quality, 100)?;
        let resize = ResizeSettings {
            max_width: validate_positive("Width", self.width)?,
            max_height: validate_positive("Height", self.height)?,
        };

        let transparency = validate_byte_range("transparency", self.transparency, u8::MAX)?;
        let watermark = self.watermark.map(|path| WatermarkSettings { path, transparency });

        // text options are checked even when no --text is given
        let size = validate_positive("Font size", self.font_size)?;
        let color = self.font_color.parse::<Rgb>()?;
        let text_transparency =
            validate_byte_range("text transparency", self.text_transparency, u8::MAX)?;

        let text = match self.text {
            None => None,
            Some(text) if text.trim().is_empty() => {
                return Err(ConvertError::invalid_argument("--text cannot be empty"));
            }
            Some(text) => Some(TextSettings {
                text,
                size,
                color,
                transparency: text_transparency,
                position: self.text_position,
                margin: self.text_margin,
                font: resolve_font(self.font_path, self.font_family),
            }),
        };

        Ok(ConvertSettings {
            quality,
            prefix: self.prefix,
            output_dir: self.output_dir,
            resize,
            watermark,
            text,
        })
    }
}
