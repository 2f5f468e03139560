//! Native image processing via libvips-rs.
//!
//! # Architecture
//!
//! - [`Converter`]: drives the per-file pipeline and the batch loop.
//! - [`loader`]: decodes inputs and normalises them to sRGB + alpha.
//! - [`resize`]: fit-within-bounds shrinking via `ops::thumbnail_image_with_opts`.
//! - [`watermark`] / [`text`]: image and text overlays, source-over composited.
//! - [`formats`]: lossy WebP output via `ops::webpsave_with_opts`.

mod executor;
pub mod formats;
pub mod loader;
pub mod resize;
pub mod text;
pub mod watermark;

pub use executor::Converter;
pub use loader::{LoadedImage, load_rgba};
pub use resize::{apply_resize, fit_within, shrink_to_fit};
pub use text::apply_text_watermark;
pub use watermark::apply_image_watermark;
