//! Result types for the page redaction pipeline.

use crate::domain::{ExtractedFields, RedactionRect};
use image::RgbImage;
use serde::Serialize;
use std::fmt;

/// Everything produced by redacting one page.
///
/// The raster has the same dimensions as the input page. When no label was
/// found the raster is a pixel-identical copy of the input and
/// [`redaction_applied`](Self::redaction_applied) is false, which callers use
/// to decide whether the page is safe to publish.
#[derive(Debug, Clone, Serialize)]
pub struct PageRedactionResult {
    /// Index of the page in a multi-page document (0 for single pages).
    pub page_index: usize,
    /// The redacted raster.
    #[serde(skip)]
    pub redacted_image: RgbImage,
    /// Extracted identity fields, at most one value per role.
    pub fields: ExtractedFields,
    /// The rectangles that were painted, two per identified label.
    pub rects: Vec<RedactionRect>,
    /// Number of label candidates identified on the page.
    pub label_count: usize,
}

impl PageRedactionResult {
    /// Returns true when at least one label was identified and painted over.
    ///
    /// False means the output raster is unmodified; the caller may choose to
    /// withhold it from downstream consumers.
    pub fn redaction_applied(&self) -> bool {
        self.label_count > 0
    }
}

impl fmt::Display for PageRedactionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Page index: {}", self.page_index)?;
        writeln!(
            f,
            "Image dimensions: [{}, {}]",
            self.redacted_image.width(),
            self.redacted_image.height()
        )?;
        writeln!(f, "Labels identified: {}", self.label_count)?;
        writeln!(f, "Rectangles painted: {}", self.rects.len())?;
        // Field values are identity data; report which roles resolved, never
        // their contents.
        let resolved: Vec<&str> = self.fields.iter().map(|(role, _)| role.as_str()).collect();
        if resolved.is_empty() {
            writeln!(f, "Fields resolved: none")?;
        } else {
            writeln!(f, "Fields resolved: {}", resolved.join(", "))?;
        }
        Ok(())
    }
}
