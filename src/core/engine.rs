//! The external OCR engine seam.
//!
//! Detection is the one slow, failure-prone collaborator this crate depends
//! on. It is modeled as an explicitly constructed resource with its own
//! lifecycle: the caller builds the engine once at process start (loading
//! models or opening API clients is the expensive part) and passes it by
//! reference into the pipeline. There is no module-level engine state.

use crate::core::errors::EngineError;
use crate::domain::RawDetection;
use image::RgbImage;

/// A producer of `(polygon, text, confidence)` detections for one page
/// raster.
///
/// Implementations wrap whatever backend performs recognition (an ONNX text
/// detector, a vision API client, a test stub). Failures must be classified
/// into [`EngineError`] variants so callers can drive
/// [`crate::core::retry::RetryPolicy`] without inspecting error text.
pub trait OcrEngine: Send + Sync {
    /// Runs detection over a page raster.
    ///
    /// Returning an empty vector is valid (a blank page) and is not an error.
    fn detect(&self, image: &RgbImage) -> Result<Vec<RawDetection>, EngineError>;
}
