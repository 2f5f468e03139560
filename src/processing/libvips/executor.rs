//! Per-file pipeline and the sequential batch loop.
//!
//! Each file runs load → resize → watermark → encode → measure to
//! completion before the next one starts. libvips uses its own internal
//! thread pool for within-image parallelism; files themselves are never
//! processed concurrently.

use tracing::{debug, info, warn};

use crate::core::{ConversionResult, ConvertSettings, ImageTask, VipsRuntime};
use crate::report::{BatchReport, FailedFile, SavingsRecord};
use crate::utils::{ConvertError, ConvertResult, display_name, ensure_dir, get_file_size, validate_input_path};

use super::formats::{flatten_alpha, save_webp};
use super::loader::load_rgba;
use super::resize::apply_resize;
use super::text::apply_text_watermark;
use super::watermark::apply_image_watermark;

/// Runs the conversion pipeline with one set of settings.
pub struct Converter<'a> {
    settings: &'a ConvertSettings,
    runtime: &'a VipsRuntime,
}

impl<'a> Converter<'a> {
    pub fn new(settings: &'a ConvertSettings, runtime: &'a VipsRuntime) -> Self {
        Self { settings, runtime }
    }

    /// Converts all `tasks` in order, calling `on_converted` after each success.
    ///
    /// A failing file is logged and recorded in the report; the loop always
    /// moves on to the next task.
    pub fn execute_batch(
        &self,
        tasks: &[ImageTask],
        mut on_converted: impl FnMut(&ConversionResult),
    ) -> BatchReport {
        let total = tasks.len();
        let mut report = BatchReport::default();
        info!("Converting {} file(s) into {}", total, self.settings.output_dir.display());

        for (idx, task) in tasks.iter().enumerate() {
            debug!("[{}/{}] {}", idx + 1, total, task.input_path.display());

            match self.convert(task) {
                Ok(result) => {
                    report.totals = report.totals.add(&result.savings);
                    on_converted(&result);
                    report.results.push(result);
                }
                Err(error) => {
                    warn!("Skipping {}: {}", task.input_path.display(), error);
                    if let Some(detail) = self.runtime.last_error() {
                        debug!("libvips: {detail}");
                    }
                    report.failures.push(FailedFile {
                        path: task.input_path.clone(),
                        error,
                    });
                }
            }
        }

        if report.has_failures() {
            warn!(
                "Batch completed with {} failed file(s) out of {}",
                report.failures.len(),
                total
            );
        } else {
            info!("Batch completed successfully: {} file(s) converted", report.totals.processed);
        }

        report
    }

    /// Converts one image task synchronously.
    pub fn convert(&self, task: &ImageTask) -> ConvertResult<ConversionResult> {
        let settings = self.settings;
        let input_path = &task.input_path;

        validate_input_path(input_path)?;

        // Original size before any transformation
        let original_size = get_file_size(input_path)
            .map_err(|e| ConvertError::unreadable_image(input_path, e))?;

        let loaded = load_rgba(input_path)?;
        let keep_alpha = loaded.has_source_alpha;

        let mut image = apply_resize(loaded.image, &settings.resize)?;

        if let Some(watermark) = &settings.watermark {
            image = apply_image_watermark(image, watermark)?;
        }
        if let Some(text) = &settings.text {
            image = apply_text_watermark(image, text)?;
        }

        let image = if keep_alpha { image } else { flatten_alpha(image)? };
        let (width, height) = (image.get_width() as u32, image.get_height() as u32);

        ensure_dir(&settings.output_dir)
            .map_err(|e| ConvertError::encode(&task.output_path, e))?;
        save_webp(&image, &task.output_path, settings.quality)?;
        drop(image);

        let output_size = get_file_size(&task.output_path)
            .map_err(|e| ConvertError::encode(&task.output_path, e))?;
        let savings = SavingsRecord::new(original_size, output_size);

        debug!(
            "'{}' → {}×{}, {} bytes saved ({:.1}%)",
            display_name(input_path),
            width,
            height,
            savings.saved_bytes(),
            savings.percent()
        );

        Ok(ConversionResult {
            input_path: input_path.clone(),
            output_path: task.output_path.clone(),
            width,
            height,
            savings,
        })
    }
}
