// Module declarations in dependency order
pub mod utils;
pub mod core;
pub mod report;
pub mod processing;
pub mod cli;

// Public exports for external consumers
pub use crate::core::{ConversionResult, ConvertSettings, ImageTask, VipsRuntime};
pub use processing::Converter;
pub use report::{BatchReport, SavingsRecord, SavingsTotals};
pub use utils::{ConvertError, ConvertResult};

// This library file is used as a public API for consuming this crate as a library.
// The actual application entry point is in main.rs.
