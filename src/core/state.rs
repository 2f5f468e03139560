//! libvips runtime lifecycle.

use tracing::debug;
use crate::utils::{ConvertError, ConvertResult};

/// Owns the libvips `VipsApp` for the lifetime of a run.
///
/// `VipsApp` initializes the libvips thread pool and global state on creation
/// and shuts it down on drop, so exactly one instance should exist per
/// process and it must outlive every `VipsImage`.
pub struct VipsRuntime(libvips::VipsApp);

// libvips is designed for concurrent use; individual VipsImage instances must
// not be shared between threads, but the global runtime handle may be.
unsafe impl Send for VipsRuntime {}
unsafe impl Sync for VipsRuntime {}

impl VipsRuntime {
    /// Initializes libvips.
    pub fn start(name: &str) -> ConvertResult<Self> {
        let vips = libvips::VipsApp::default(name)
            .map_err(|e| ConvertError::processing(format!("Failed to initialize libvips: {e}")))?;
        // 0 = let libvips decide based on available CPU cores
        vips.concurrency_set(0);
        debug!("libvips initialized (concurrency: {})", vips.concurency_get());
        Ok(Self(vips))
    }

    /// Drains libvips' thread-local error buffer, for attaching to messages.
    pub fn last_error(&self) -> Option<String> {
        let msg = self.0.error_buffer().ok()?.trim().to_string();
        self.0.error_clear();
        (!msg.is_empty()).then_some(msg)
    }
}
