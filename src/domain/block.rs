//! Normalized OCR detection types.
//!
//! The pipeline never talks to an OCR engine directly; it consumes the
//! engine's `(polygon, text, confidence)` triples after normalizing them into
//! [`TextBlock`]s. Normalization derives the axis-aligned metrics every later
//! stage keys on and drops detections whose geometry cannot be reasoned about.

use crate::processors::{BoundingBox, Point};
use image::RgbImage;
use serde::{Deserialize, Serialize};

/// One raw detection as produced by an OCR engine.
///
/// The polygon is a four-point outline in page pixel space; corner ordering is
/// not trusted. Confidence is carried through verbatim and is currently not
/// used by any pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RawDetection {
    /// Detection outline in page pixel space.
    pub polygon: Vec<Point>,
    /// Recognized text for the outline.
    pub text: String,
    /// Engine confidence score.
    pub confidence: f32,
}

impl RawDetection {
    /// Creates a detection from an outline, its text, and a confidence score.
    pub fn new(polygon: Vec<Point>, text: impl Into<String>, confidence: f32) -> Self {
        Self {
            polygon,
            text: text.into(),
            confidence,
        }
    }
}

/// A normalized OCR detection.
///
/// Immutable once constructed: classification attaches roles externally
/// instead of mutating the block. The lowercased, trimmed text is derived at
/// construction because both keyword matching and logging reuse it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TextBlock {
    /// The detection outline.
    pub bbox: BoundingBox,
    /// The raw recognized text.
    pub text: String,
    /// Lowercased, trimmed text used for keyword containment checks.
    pub text_lower: String,
    /// Engine confidence score (unused by the geometric pipeline).
    pub confidence: f32,
}

impl TextBlock {
    /// Normalizes a raw detection into a block.
    ///
    /// Returns `None` for detections whose geometry is degenerate (zero-area
    /// extents, too few corners, non-finite coordinates); such detections are
    /// dropped at the page boundary rather than propagated into
    /// classification or extraction.
    pub fn from_detection(detection: RawDetection) -> Option<Self> {
        let bbox = BoundingBox::new(detection.polygon);
        if bbox.is_degenerate() {
            return None;
        }
        let text_lower = detection.text.trim().to_lowercase();
        Some(Self {
            bbox,
            text: detection.text,
            text_lower,
            confidence: detection.confidence,
        })
    }

    /// Minimum x-coordinate of the block's extent.
    pub fn x_min(&self) -> f32 {
        self.bbox.x_min()
    }

    /// Maximum x-coordinate of the block's extent.
    pub fn x_max(&self) -> f32 {
        self.bbox.x_max()
    }

    /// Minimum y-coordinate of the block's extent.
    pub fn y_min(&self) -> f32 {
        self.bbox.y_min()
    }

    /// Maximum y-coordinate of the block's extent.
    pub fn y_max(&self) -> f32 {
        self.bbox.y_max()
    }

    /// Vertical center of the block's extent.
    pub fn y_center(&self) -> f32 {
        self.bbox.y_center()
    }

    /// Height of the block's extent.
    pub fn height(&self) -> f32 {
        self.bbox.height()
    }
}

/// One page raster together with its normalized detections.
///
/// Input to a single pipeline invocation. The raster is read-only; the
/// pipeline paints onto a working copy.
#[derive(Debug, Clone)]
pub struct Page {
    /// The source raster.
    pub image: RgbImage,
    /// Normalized detections, in the order the engine produced them.
    pub blocks: Vec<TextBlock>,
}

impl Page {
    /// Builds a page from a raster and raw engine detections.
    ///
    /// Degenerate detections are silently dropped; an empty detection list is
    /// a valid degenerate input (the pipeline then returns the raster
    /// unmodified).
    pub fn from_detections(image: RgbImage, detections: Vec<RawDetection>) -> Self {
        let total = detections.len();
        let blocks: Vec<TextBlock> = detections
            .into_iter()
            .filter_map(TextBlock::from_detection)
            .collect();
        if blocks.len() < total {
            tracing::debug!(
                target: "redaction",
                dropped = total - blocks.len(),
                kept = blocks.len(),
                "Dropped detections with degenerate geometry"
            );
        }
        Self { image, blocks }
    }

    /// Page width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Page height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}
