use std::path::{Path, PathBuf};
use tracing::warn;
use crate::core::FontSource;
use crate::utils::{ConvertError, ConvertResult, format_from_extension};

/// Checks `value` lies in `0..=max` and narrows it to `u8`.
pub fn validate_byte_range(name: &str, value: u32, max: u8) -> ConvertResult<u8> {
    u8::try_from(value)
        .ok()
        .filter(|v| *v <= max)
        .ok_or_else(|| ConvertError::invalid_argument(format!(
            "Invalid {name} value: {value}. Must be between 0 and {max}"
        )))
}

/// Checks a dimension-like value is at least 1.
pub fn validate_positive(name: &str, value: u32) -> ConvertResult<u32> {
    if value == 0 {
        return Err(ConvertError::invalid_argument(format!("{name} cannot be 0")));
    }
    Ok(value)
}

/// Validates the input file path and format
pub fn validate_input_path(path: &Path) -> ConvertResult<()> {
    format_from_extension(path)?;

    if !path.exists() {
        return Err(ConvertError::unreadable_image(path, "file does not exist"));
    }

    if !path.is_file() {
        return Err(ConvertError::unreadable_image(path, "not a file"));
    }

    Ok(())
}

/// Resolves the font to use for text rendering.
///
/// A missing or unreadable font file is not an error: the condition is
/// logged as [`ConvertError::FontUnavailable`] and the built-in font is used.
pub fn resolve_font(path: Option<PathBuf>, family: Option<String>) -> FontSource {
    let Some(path) = path else {
        return FontSource {
            file: None,
            family: family.unwrap_or_else(|| FontSource::builtin().family),
        };
    };

    if let Err(e) = check_font_file(&path) {
        warn!("{e}; falling back to the default font");
        return FontSource::builtin();
    }

    let family = family
        .or_else(|| FontSource::family_from_file_name(&path))
        .unwrap_or_else(|| FontSource::builtin().family);

    FontSource { file: Some(path), family }
}

fn check_font_file(path: &Path) -> ConvertResult<()> {
    let meta = std::fs::metadata(path)
        .map_err(|e| ConvertError::font_unavailable(path, e))?;
    if !meta.is_file() {
        return Err(ConvertError::font_unavailable(path, "not a file"));
    }
    // Opening proves readability; the handle is dropped straight away.
    std::fs::File::open(path).map_err(|e| ConvertError::font_unavailable(path, e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_range_bounds() {
        assert_eq!(validate_byte_range("quality", 0, 100).unwrap(), 0);
        assert_eq!(validate_byte_range("quality", 100, 100).unwrap(), 100);
        assert_eq!(validate_byte_range("transparency", 255, 255).unwrap(), 255);
        assert!(validate_byte_range("quality", 101, 100).unwrap_err().is_fatal());
        assert!(validate_byte_range("transparency", 256, 255).unwrap_err().is_fatal());
    }

    #[test]
    fn zero_dimensions_rejected() {
        assert!(validate_positive("Width", 0).is_err());
        assert_eq!(validate_positive("Width", 1).unwrap(), 1);
    }

    #[test]
    fn missing_input_is_unreadable() {
        let err = validate_input_path(Path::new("/no/such/photo.jpg")).unwrap_err();
        assert!(matches!(err, ConvertError::UnreadableImage { .. }));
    }

    #[test]
    fn wrong_extension_checked_first() {
        let err = validate_input_path(Path::new("/no/such/photo.bmp")).unwrap_err();
        assert!(matches!(err, ConvertError::UnsupportedFormat(_)));
    }

    #[test]
    fn missing_font_falls_back() {
        let font = resolve_font(Some(PathBuf::from("/no/such/missing.ttf")), Some("Fancy".into()));
        assert_eq!(font, FontSource::builtin());
    }

    #[test]
    fn no_font_file_keeps_family() {
        let font = resolve_font(None, Some("Serif".into()));
        assert_eq!(font.file, None);
        assert_eq!(font.family, "Serif");
        assert_eq!(resolve_font(None, None), FontSource::builtin());
    }

    #[test]
    fn readable_font_file_is_kept() {
        let dir = std::env::temp_dir().join(format!("webp-batch-font-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("Lobster-Regular.ttf");
        std::fs::write(&path, b"not really a font").unwrap();

        let font = resolve_font(Some(path.clone()), None);
        assert_eq!(font.file.as_deref(), Some(path.as_path()));
        assert_eq!(font.family, "Lobster");

        let _ = std::fs::remove_dir_all(dir);
    }
}
