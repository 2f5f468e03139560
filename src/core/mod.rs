//! Core application types and runtime state.
//!
//! - [`ConvertSettings`]: resolved configuration for a run
//! - [`ImageTask`]: one input file and its output path
//! - [`ConversionResult`]: what a successful conversion produced
//! - [`VipsRuntime`]: keeps libvips alive for the run

mod state;
mod task;
mod types;

pub use state::VipsRuntime;
pub use task::ImageTask;
pub use types::{
    ConversionResult, ConvertSettings, FontSource, ResizeSettings, Rgb, TextPosition,
    TextSettings, WatermarkSettings, DEFAULT_FONT_FAMILY,
};
