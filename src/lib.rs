//! # Exam Redact
//!
//! A Rust library that extracts and blacks out identity fields (student name,
//! student number) on scanned exam-sheet images before any downstream grading
//! sees them, so automated graders and stored artifacts never retain
//! identity-linked content.
//!
//! The engine is purely geometric: given the `(box, text, confidence)`
//! detections an OCR collaborator produced for a page, it classifies which
//! detections are identity *labels*, infers the bounded region where each
//! label's *value* is written, extracts the value text, and paints solid
//! rectangles over both. There is no semantic model; classification is
//! literal keyword containment and association is spatial.
//!
//! ## Pipeline
//!
//! - **Label classification**: header-zone blocks are matched against
//!   configurable keyword sets; number labels outrank name labels.
//! - **Scan zone resolution**: each label's value region extends right to the
//!   page edge, barred by the nearest other label on the same visual line.
//! - **Value extraction**: blocks inside the zone are ordered left to right
//!   and their text is normalized into the field value.
//! - **Redaction**: the label box plus the value region (or a blind fallback
//!   strip) are solid-filled on a working copy of the raster. Every label is
//!   painted even when no value was found; over-redaction is preferred to
//!   leaking identity data.
//!
//! ## Modules
//!
//! * [`core`] - Configuration, errors, the OCR engine seam, retry policy
//! * [`domain`] - Normalized detections, field roles, redaction rectangles
//! * [`processors`] - Geometric primitives
//! * [`redaction`] - The pipeline stages and orchestration
//! * [`utils`] - Logging setup
//!
//! ## Quick Start
//!
//! ```
//! use exam_redact::prelude::*;
//! use image::RgbImage;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Detections normally come from an OCR engine; shown inline here.
//! let detections = vec![
//!     RawDetection::new(
//!         vec![
//!             Point::new(10.0, 50.0),
//!             Point::new(140.0, 50.0),
//!             Point::new(140.0, 90.0),
//!             Point::new(10.0, 90.0),
//!         ],
//!         "Ad Soyad:",
//!         0.98,
//!     ),
//!     RawDetection::new(
//!         vec![
//!             Point::new(160.0, 52.0),
//!             Point::new(320.0, 52.0),
//!             Point::new(320.0, 92.0),
//!             Point::new(160.0, 92.0),
//!         ],
//!         "Ali Veli",
//!         0.91,
//!     ),
//! ];
//!
//! let page = Page::from_detections(RgbImage::new(1200, 1000), detections);
//! let anonymizer = PageAnonymizer::new(AnonymizerConfig::default())?;
//! let result = anonymizer.redact_page(&page);
//!
//! assert_eq!(result.fields.get(FieldRole::Name), Some("Ali Veli"));
//! assert!(result.redaction_applied());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domain;
pub mod processors;
pub mod redaction;
pub mod utils;

/// Commonly used types, re-exported for convenient glob imports.
pub mod prelude {
    pub use crate::core::config::{AnonymizerConfig, ConfigValidator, ParallelPolicy};
    pub use crate::core::engine::OcrEngine;
    pub use crate::core::errors::{EngineError, RedactError, RedactResult};
    pub use crate::core::retry::RetryPolicy;
    pub use crate::domain::{ExtractedFields, FieldRole, Page, RawDetection, RedactionRect, TextBlock};
    pub use crate::processors::{BoundingBox, Point};
    pub use crate::redaction::{PageAnonymizer, PageRedactionResult, redact_document};
}
