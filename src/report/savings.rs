use serde::Serialize;

const MB: f64 = 1024.0 * 1024.0;

fn safe_percent(numerator: i64, denominator: u64) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64 * 100.0
    }
}

/// Byte sizes before and after converting one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SavingsRecord {
    pub original_size: u64,
    pub output_size: u64,
}

impl SavingsRecord {
    pub fn new(original_size: u64, output_size: u64) -> Self {
        Self { original_size, output_size }
    }

    /// Bytes saved (negative if the file grew)
    pub fn saved_bytes(&self) -> i64 {
        self.original_size as i64 - self.output_size as i64
    }

    pub fn saved_mb(&self) -> f64 {
        self.saved_bytes() as f64 / MB
    }

    /// Reduction relative to the original; 0 when the original was empty.
    pub fn percent(&self) -> f64 {
        safe_percent(self.saved_bytes(), self.original_size)
    }
}

/// Running totals across a batch.
///
/// Passed by value through the batch loop: each successful file folds its
/// record in with [`SavingsTotals::add`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SavingsTotals {
    pub processed: usize,
    pub total_original: u64,
    pub total_output: u64,
}

impl SavingsTotals {
    #[must_use]
    pub fn add(self, record: &SavingsRecord) -> Self {
        Self {
            processed: self.processed + 1,
            total_original: self.total_original + record.original_size,
            total_output: self.total_output + record.output_size,
        }
    }

    pub fn saved_bytes(&self) -> i64 {
        self.total_original as i64 - self.total_output as i64
    }

    pub fn saved_mb(&self) -> f64 {
        self.saved_bytes() as f64 / MB
    }

    pub fn percent(&self) -> f64 {
        safe_percent(self.saved_bytes(), self.total_original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn per_file_savings() {
        let rec = SavingsRecord::new(2 * 1024 * 1024, 512 * 1024);
        assert_eq!(rec.saved_bytes(), 1_572_864);
        assert!((rec.saved_mb() - 1.5).abs() < 1e-9);
        assert!((rec.percent() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn growth_is_negative() {
        let rec = SavingsRecord::new(100, 150);
        assert_eq!(rec.saved_bytes(), -50);
        assert!((rec.percent() + 50.0).abs() < 1e-9);
    }

    #[test]
    fn empty_original_is_zero_percent() {
        assert_eq!(SavingsRecord::new(0, 40).percent(), 0.0);
        assert_eq!(SavingsTotals::default().percent(), 0.0);
    }

    #[test]
    fn totals_accumulate() {
        let totals = [SavingsRecord::new(1000, 400), SavingsRecord::new(3000, 600)]
            .iter()
            .fold(SavingsTotals::default(), SavingsTotals::add);
        assert_eq!(totals.processed, 2);
        assert_eq!(totals.saved_bytes(), 3000);
        assert!((totals.percent() - 75.0).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn shrinking_output_percent_in_range(original in 1u64..1_000_000_000, frac in 0.0f64..1.0) {
            let output = (original as f64 * frac) as u64;
            let pct = SavingsRecord::new(original, output).percent();
            prop_assert!((0.0..=100.0).contains(&pct));
        }

        #[test]
        fn total_saved_is_sum_of_parts(
            sizes in prop::collection::vec((0u64..10_000_000, 0u64..10_000_000), 0..20)
        ) {
            let records: Vec<_> = sizes.iter().map(|&(o, n)| SavingsRecord::new(o, n)).collect();
            let totals = records.iter().fold(SavingsTotals::default(), SavingsTotals::add);
            let summed: i64 = records.iter().map(SavingsRecord::saved_bytes).sum();
            prop_assert_eq!(totals.saved_bytes(), summed);
            prop_assert_eq!(totals.processed, records.len());
        }
    }
}
