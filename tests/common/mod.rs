//! Shared fixtures for the integration tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use lazy_static::lazy_static;
use libvips::{ops, VipsImage};
use webp_batch::core::{ConvertSettings, ResizeSettings};
use webp_batch::VipsRuntime;

lazy_static! {
    /// One libvips instance per test binary; it is never shut down.
    pub static ref VIPS: VipsRuntime =
        VipsRuntime::start("webp-batch-tests").expect("libvips must be installed to run these tests");
}

static NEXT_DIR: AtomicUsize = AtomicUsize::new(0);

/// A scratch directory removed when dropped.
pub struct Scratch(PathBuf);

impl Scratch {
    pub fn new(label: &str) -> Self {
        let n = NEXT_DIR.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "webp-batch-{label}-{}-{n}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    pub fn path(&self) -> &Path {
        &self.0
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.0.join(name)
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

/// A solid 3-band sRGB image.
pub fn solid_rgb(width: i32, height: i32, rgb: [f64; 3]) -> VipsImage {
    let black = ops::black_with_opts(width, height, &ops::BlackOptions { bands: 3 }).unwrap();
    let mut rgb = rgb;
    ops::linear_with_opts(&black, &mut [1.0, 1.0, 1.0], &mut rgb, &ops::LinearOptions { uchar: true })
        .unwrap()
}

/// A solid 4-band image with a constant alpha.
pub fn solid_rgba(width: i32, height: i32, rgb: [f64; 3], alpha: f64) -> VipsImage {
    ops::bandjoin_const(&solid_rgb(width, height, rgb), &mut [alpha]).unwrap()
}

pub fn write_jpeg(path: &Path, width: i32, height: i32, rgb: [f64; 3]) -> PathBuf {
    ops::jpegsave(&solid_rgb(width, height, rgb), path.to_str().unwrap()).unwrap();
    path.to_path_buf()
}

pub fn write_png(path: &Path, image: &VipsImage) -> PathBuf {
    ops::pngsave(image, path.to_str().unwrap()).unwrap();
    path.to_path_buf()
}

pub fn open(path: &Path) -> VipsImage {
    VipsImage::new_from_file(path.to_str().unwrap()).unwrap()
}

pub fn pixel(image: &VipsImage, x: i32, y: i32) -> Vec<f64> {
    ops::getpoint(image, x, y).unwrap()
}

pub fn settings(output_dir: &Path) -> ConvertSettings {
    ConvertSettings {
        quality: 85,
        prefix: String::new(),
        output_dir: output_dir.to_path_buf(),
        resize: ResizeSettings { max_width: 1024, max_height: 1024 },
        watermark: None,
        text: None,
    }
}
