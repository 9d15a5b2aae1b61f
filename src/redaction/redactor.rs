//! Rectangle accumulation and raster painting.
//!
//! Every identified label contributes exactly two rectangles: its own box and
//! either the matched value region or a blind fallback strip. A label without
//! a recoverable value still gets the fallback; the pipeline fails safe
//! toward over-redaction. Painting is a destructive solid fill, never a blur,
//! so the output retains no pixel information from covered regions.

use super::zones::ScanZone;
use crate::core::config::AnonymizerConfig;
use crate::domain::{FieldRole, RedactionRect};
use crate::processors::BoundingBox;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

/// Fill color for redacted regions.
const REDACTION_FILL: Rgb<u8> = Rgb([0, 0, 0]);

/// Accumulates redaction rectangles for one page and paints them onto a
/// working copy of the raster.
#[derive(Debug)]
pub struct Redactor {
    margin: f32,
    name_blind_width: f32,
    number_blind_width: f32,
    page_width: f32,
    rects: Vec<RedactionRect>,
}

impl Redactor {
    /// Creates a redactor for one page.
    pub fn new(config: &AnonymizerConfig, page_width: u32) -> Self {
        Self {
            margin: config.redaction_margin_px,
            name_blind_width: config.name_blind_width_px,
            number_blind_width: config.number_blind_width_px,
            page_width: page_width as f32,
            rects: Vec::new(),
        }
    }

    /// Queues the label's own box, grown by the margin.
    pub fn cover_label(&mut self, label_bbox: &BoundingBox) {
        self.rects.push(RedactionRect::from_bbox(label_bbox, self.margin));
    }

    /// Queues the value region for a label.
    ///
    /// With a covering box the matched region is painted (grown by the
    /// margin). Without one a blind strip of the role's configured width is
    /// painted immediately right of the label, vertically spanning the label,
    /// capped at the page edge.
    pub fn cover_value(
        &mut self,
        role: FieldRole,
        label_bbox: &BoundingBox,
        zone: &ScanZone,
        covering: Option<&BoundingBox>,
    ) {
        let rect = match covering {
            Some(covering) => RedactionRect::from_bbox(covering, self.margin),
            None => {
                let width = match role {
                    FieldRole::Name => self.name_blind_width,
                    FieldRole::Number => self.number_blind_width,
                };
                RedactionRect::new(
                    zone.x_start,
                    label_bbox.y_min() - self.margin,
                    (zone.x_start + width).min(self.page_width),
                    label_bbox.y_max() + self.margin,
                )
            }
        };
        self.rects.push(rect);
    }

    /// The rectangles queued so far, in emission order.
    pub fn rects(&self) -> &[RedactionRect] {
        &self.rects
    }

    /// Consumes the redactor, returning the accumulated rectangles.
    pub fn into_rects(self) -> Vec<RedactionRect> {
        self.rects
    }

    /// Paints every queued rectangle onto a copy of `image`.
    ///
    /// The source raster is never mutated. Rectangles lying fully outside the
    /// raster (a blind strip for a label flush against the page edge) clamp
    /// to nothing and are skipped.
    pub fn apply(&self, image: &RgbImage) -> RgbImage {
        let mut output = image.clone();
        for rect in &self.rects {
            if let Some((x, y, w, h)) = rect.clamped(output.width(), output.height()) {
                draw_filled_rect_mut(&mut output, Rect::at(x, y).of_size(w, h), REDACTION_FILL);
            }
        }
        output
    }
}
