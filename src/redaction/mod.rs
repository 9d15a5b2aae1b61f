//! The redaction pipeline module.
//!
//! This module contains the stages that turn a page's OCR detections into a
//! redacted raster and an extracted field map:
//!
//! - [`classifier`] - Tags header-zone blocks as identity labels
//! - [`zones`] - Resolves each label's value search zone
//! - [`extractor`] - Extracts value text from a zone
//! - [`redactor`] - Accumulates and paints redaction rectangles
//! - [`pipeline`] - Sequences the stages over pages
//!
//! # Main APIs
//!
//! - [`PageAnonymizer`] - Per-page orchestration
//! - [`redact_document`] - Multi-page fan-out

pub mod classifier;
pub mod extractor;
pub mod pipeline;
pub mod redactor;
pub mod result;
pub mod zones;

pub use classifier::{LabelCandidate, LabelClassifier};
pub use extractor::{ExtractedValue, extract_value};
pub use pipeline::{PageAnonymizer, redact_document};
pub use redactor::Redactor;
pub use result::PageRedactionResult;
pub use zones::{ScanZone, resolve_scan_zone};
