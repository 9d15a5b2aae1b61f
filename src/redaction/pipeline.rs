//! # Stage Definition: Page Anonymization
//!
//! This stage is considered "Done" when it fulfills the following contract:
//!
//! - **Inputs**: One [`Page`] (raster plus normalized OCR blocks).
//! - **Outputs**: [`PageRedactionResult`] with the redacted raster, the
//!   extracted identity fields, and the painted rectangles.
//! - **Logging**: Traces label classification, zone resolution, extraction
//!   outcomes, and the final paint under the `redaction` target. Extracted
//!   values are identity data and are never logged.
//! - **Error Behavior**: Total over its inputs. Empty detections, missing
//!   labels, and unmatched values produce ordinary results; only
//!   configuration rejection and engine failures surface as errors, and only
//!   from the constructors and engine-backed entry points.
//! - **Invariants**:
//!     - Exactly two rectangles are emitted per identified label (the label
//!       box and its value or blind fallback), regardless of extraction
//!       success.
//!     - A page without labels yields a pixel-identical raster copy and an
//!       empty field map, with `redaction_applied()` reporting false.
//!     - The first label of a role yielding a non-empty value resolves that
//!       role; later values for the role are discarded but still redacted.

use super::classifier::LabelClassifier;
use super::extractor::{ExtractedValue, extract_value};
use super::redactor::Redactor;
use super::result::PageRedactionResult;
use super::zones::resolve_scan_zone;
use crate::core::config::{AnonymizerConfig, ConfigValidator, ParallelPolicy};
use crate::core::engine::OcrEngine;
use crate::core::errors::RedactResult;
use crate::domain::{ExtractedFields, Page};
use image::RgbImage;
use rayon::prelude::*;

/// The page anonymization pipeline.
///
/// Sequences classification, zone resolution, value extraction, and redaction
/// over one page. Construction validates the configuration once; a built
/// anonymizer is immutable and may be shared across threads.
#[derive(Debug, Clone)]
pub struct PageAnonymizer {
    config: AnonymizerConfig,
    classifier: LabelClassifier,
}

impl PageAnonymizer {
    /// Builds an anonymizer from a configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the knobs are out of range or a
    /// keyword set is empty.
    pub fn new(config: AnonymizerConfig) -> RedactResult<Self> {
        config.validate()?;
        let classifier = LabelClassifier::from_config(&config);
        Ok(Self { config, classifier })
    }

    /// The configuration this anonymizer was built with.
    pub fn config(&self) -> &AnonymizerConfig {
        &self.config
    }

    /// Redacts one page.
    pub fn redact_page(&self, page: &Page) -> PageRedactionResult {
        self.redact_page_at(page, 0)
    }

    /// Runs detection through the injected engine, then redacts the page.
    ///
    /// The engine call is a single attempt; callers wanting backoff wrap it
    /// with [`crate::core::retry::RetryPolicy::run`] and hand the detections
    /// to [`Page::from_detections`] and [`redact_page`](Self::redact_page)
    /// themselves.
    ///
    /// # Errors
    ///
    /// Propagates the engine's failure classification.
    pub fn redact_image(
        &self,
        engine: &dyn OcrEngine,
        image: RgbImage,
    ) -> RedactResult<PageRedactionResult> {
        let detections = engine.detect(&image)?;
        let page = Page::from_detections(image, detections);
        Ok(self.redact_page(&page))
    }

    fn redact_page_at(&self, page: &Page, page_index: usize) -> PageRedactionResult {
        let labels = self.classifier.classify(&page.blocks, page.height());

        if labels.is_empty() {
            tracing::info!(
                target: "redaction",
                page_index,
                blocks = page.blocks.len(),
                "No identity labels in header zone; returning page unmodified"
            );
            return PageRedactionResult {
                page_index,
                redacted_image: page.image.clone(),
                fields: ExtractedFields::new(),
                rects: Vec::new(),
                label_count: 0,
            };
        }

        tracing::debug!(
            target: "redaction",
            page_index,
            labels = labels.len(),
            "Classified identity labels"
        );

        let mut redactor = Redactor::new(&self.config, page.width());
        let mut fields = ExtractedFields::new();

        for label in &labels {
            let zone = resolve_scan_zone(
                label,
                &labels,
                &page.blocks,
                page.width(),
                self.config.line_tolerance_factor,
            );

            let value = if zone.is_searchable() {
                extract_value(label, &zone, &labels, &page.blocks)
            } else {
                tracing::warn!(
                    target: "redaction",
                    page_index,
                    role = %label.role,
                    "Scan zone has no width; degrading to blind redaction"
                );
                ExtractedValue::empty()
            };

            if !value.is_empty() {
                if fields.insert_first(label.role, value.text.clone()) {
                    tracing::info!(
                        target: "redaction",
                        page_index,
                        role = %label.role,
                        "Resolved identity field"
                    );
                } else {
                    tracing::debug!(
                        target: "redaction",
                        page_index,
                        role = %label.role,
                        "Role already resolved; discarding duplicate value"
                    );
                }
            }

            let label_block = label.block(&page.blocks);
            redactor.cover_label(&label_block.bbox);
            redactor.cover_value(label.role, &label_block.bbox, &zone, value.covering.as_ref());
        }

        let redacted_image = redactor.apply(&page.image);
        let rects = redactor.into_rects();

        tracing::info!(
            target: "redaction",
            page_index,
            labels = labels.len(),
            rects = rects.len(),
            fields = fields.len(),
            "Page redaction complete"
        );

        PageRedactionResult {
            page_index,
            redacted_image,
            fields,
            rects,
            label_count: labels.len(),
        }
    }
}

/// Redacts every page of a document.
///
/// Pages are independent (each owns its raster copy and block list), so
/// documents above the policy's page threshold are fanned out across the
/// rayon thread pool. Results are returned in page order either way, with
/// `page_index` set from the input position.
pub fn redact_document(
    anonymizer: &PageAnonymizer,
    pages: &[Page],
    policy: &ParallelPolicy,
) -> Vec<PageRedactionResult> {
    if policy.should_parallelize(pages.len()) {
        tracing::debug!(
            target: "redaction",
            pages = pages.len(),
            "Fanning document out across thread pool"
        );
        pages
            .par_iter()
            .enumerate()
            .map(|(index, page)| anonymizer.redact_page_at(page, index))
            .collect()
    } else {
        pages
            .iter()
            .enumerate()
            .map(|(index, page)| anonymizer.redact_page_at(page, index))
            .collect()
    }
}
