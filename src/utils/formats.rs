use serde::Serialize;
use std::path::Path;
use crate::utils::ConvertError;

/// Raster formats accepted as conversion input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    JPEG,
    PNG,
}

impl InputFormat {
    pub const ALL: [InputFormat; 2] = [Self::JPEG, Self::PNG];

    /// Get file extensions associated with this format
    pub fn extensions(&self) -> &[&str] {
        match self {
            Self::JPEG => &["jpg", "jpeg"],
            Self::PNG => &["png"],
        }
    }

    /// Check if the extension matches this format
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = ext.to_lowercase();
        self.extensions().contains(&ext.as_str())
    }
}

/// Get input format from a path's extension.
///
/// Fails with [`ConvertError::UnsupportedFormat`] carrying the whole path.
pub fn format_from_extension(path: &Path) -> Result<InputFormat, ConvertError> {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(|ext| InputFormat::ALL.into_iter().find(|f| f.matches_extension(ext)))
        .ok_or_else(|| ConvertError::UnsupportedFormat(path.to_path_buf()))
}
