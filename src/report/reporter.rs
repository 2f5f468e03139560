use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use crate::core::ConversionResult;
use crate::utils::{ConvertError, ConvertResult};
use super::SavingsTotals;

/// A file the batch skipped and why.
#[derive(Debug, Serialize)]
pub struct FailedFile {
    pub path: PathBuf,
    pub error: ConvertError,
}

/// Everything a finished batch produced.
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub results: Vec<ConversionResult>,
    pub failures: Vec<FailedFile>,
    pub totals: SavingsTotals,
}

impl BatchReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn to_json(&self) -> ConvertResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ConvertError::processing(format!("Cannot serialise report: {e}")))
    }
}

/// The two lines printed right after a file is converted.
pub struct FileSavings<'a>(pub &'a ConversionResult);

impl fmt::Display for FileSavings<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let result = self.0;
        let savings = &result.savings;
        writeln!(
            f,
            "Processed {} -> {}",
            result.input_path.display(),
            result.output_path.display()
        )?;
        write!(
            f,
            " → Saved {} bytes ({:.2} MB), {:.1}% smaller",
            savings.saved_bytes(),
            savings.saved_mb(),
            savings.percent()
        )
    }
}

impl fmt::Display for BatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let totals = &self.totals;
        if totals.processed > 0 {
            writeln!(f)?;
            writeln!(f, "=== Overall Savings ===")?;
            writeln!(f, "Processed {} images", totals.processed)?;
            write!(
                f,
                "Total saved: {} bytes ({:.2} MB), {:.1}% reduction overall",
                totals.saved_bytes(),
                totals.saved_mb(),
                totals.percent()
            )?;
        } else {
            write!(f, "No images were processed.")?;
        }

        if self.has_failures() {
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "Skipped {} file(s):", self.failures.len())?;
            for failed in &self.failures {
                writeln!(f)?;
                write!(f, "  └── {}: {}", failed.path.display(), failed.error)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SavingsRecord;

    fn converted(input: &str, output: &str, original: u64, new: u64) -> ConversionResult {
        ConversionResult {
            input_path: input.into(),
            output_path: output.into(),
            width: 10,
            height: 10,
            savings: SavingsRecord::new(original, new),
        }
    }

    #[test]
    fn per_file_lines() {
        let result = converted("cat.jpg", "./webp/cat.webp", 1_048_576, 262_144);
        assert_eq!(
            FileSavings(&result).to_string(),
            "Processed cat.jpg -> ./webp/cat.webp\n → Saved 786432 bytes (0.75 MB), 75.0% smaller"
        );
    }

    #[test]
    fn summary_block() {
        let results = vec![
            converted("a.png", "webp/a.webp", 1000, 250),
            converted("b.png", "webp/b.webp", 3000, 750),
        ];
        let totals = results
            .iter()
            .fold(SavingsTotals::default(), |t, r| t.add(&r.savings));
        let report = BatchReport { results, failures: Vec::new(), totals };

        assert_eq!(
            report.to_string(),
            "\n=== Overall Savings ===\nProcessed 2 images\n\
             Total saved: 3000 bytes (0.00 MB), 75.0% reduction overall"
        );
        assert!(!report.has_failures());
    }

    #[test]
    fn empty_batch_lists_skips() {
        let report = BatchReport {
            failures: vec![FailedFile {
                path: "broken.png".into(),
                error: ConvertError::unreadable_image("broken.png", "truncated"),
            }],
            ..BatchReport::default()
        };
        assert_eq!(
            report.to_string(),
            "No images were processed.\n\nSkipped 1 file(s):\n  └── broken.png: Cannot read image broken.png: truncated"
        );
    }

    #[test]
    fn json_contains_totals_and_failures() {
        let report = BatchReport {
            failures: vec![FailedFile {
                path: "x.jpg".into(),
                error: ConvertError::UnsupportedFormat("x.gif".into()),
            }],
            ..BatchReport::default()
        };
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["totals"]["processed"], 0);
        assert_eq!(value["failures"][0]["path"], "x.jpg");
        assert!(value["failures"][0]["error"]["UnsupportedFormat"].is_string());
    }
}
