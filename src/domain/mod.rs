//! Domain types for the redaction pipeline.
//!
//! This module defines the normalized OCR detection model ([`TextBlock`],
//! [`Page`]), the identity field vocabulary ([`FieldRole`],
//! [`ExtractedFields`]), and the redaction rectangle type the redactor paints.

pub mod block;
pub mod fields;

pub use block::{Page, RawDetection, TextBlock};
pub use fields::{ExtractedFields, FieldRole, RedactionRect};
