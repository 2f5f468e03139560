//! Size savings bookkeeping and the text/JSON report.

mod reporter;
mod savings;

pub use reporter::{BatchReport, FailedFile, FileSavings};
pub use savings::{SavingsRecord, SavingsTotals};
