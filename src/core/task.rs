//! Image task definition and creation.

use serde::Serialize;
use std::path::{Path, PathBuf};
use crate::core::ConvertSettings;
use crate::utils::webp_output_path;

/// Represents a single conversion task.
///
/// Pairs an input file with the `.webp` path it will be written to.
#[derive(Debug, Clone, Serialize)]
pub struct ImageTask {
    /// Path to the source image file
    pub input_path: PathBuf,
    /// Path where the WebP image will be written
    pub output_path: PathBuf,
}

impl ImageTask {
    pub fn new(input_path: impl AsRef<Path>, settings: &ConvertSettings) -> Self {
        let input_path = input_path.as_ref().to_path_buf();
        let output_path = webp_output_path(&settings.output_dir, &settings.prefix, &input_path);
        Self { input_path, output_path }
    }

    /// Builds one task per input, preserving command-line order.
    pub fn from_inputs<P: AsRef<Path>>(inputs: &[P], settings: &ConvertSettings) -> Vec<Self> {
        inputs.iter().map(|p| Self::new(p, settings)).collect()
    }
}
