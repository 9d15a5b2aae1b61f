//! Scan zone resolution.
//!
//! For each label the value is assumed to be written to its right, on the
//! same visual line. The zone's right edge defaults to the page edge and is
//! tightened to the nearest other label on that line, so two adjacent fields
//! ("Ad Soyad:" and "No:" sharing a line) never bleed into each other's value
//! region.

use super::classifier::LabelCandidate;
use crate::domain::TextBlock;

/// The rectangular search region to a label's right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanZone {
    /// Left edge of the search region (the label's right edge).
    pub x_start: f32,
    /// Right edge of the search region (the page edge, or the nearest
    /// same-line label to the right).
    pub x_end: f32,
    /// Vertical center of the label, used for same-line checks.
    pub y_center: f32,
    /// Vertical tolerance for same-line checks, derived from label height.
    pub y_tolerance: f32,
}

impl ScanZone {
    /// Returns true when the zone has searchable width.
    ///
    /// A label flush against the page edge produces a zero-width zone; the
    /// caller degrades to blind redaction instead of searching.
    pub fn is_searchable(&self) -> bool {
        self.x_start < self.x_end
    }

    /// Returns true when `y_center` lies on the zone's visual line.
    pub fn on_same_line(&self, y_center: f32) -> bool {
        (y_center - self.y_center).abs() < self.y_tolerance
    }

    /// Returns true when a block starting at `x_min` falls horizontally
    /// inside the zone.
    pub fn contains_x(&self, x_min: f32) -> bool {
        self.x_start < x_min && x_min <= self.x_end
    }
}

/// Resolves the value search zone for one label.
///
/// # Arguments
///
/// * `label` - The label to resolve a zone for.
/// * `labels` - All label candidates on the page (sorted order not required
///   here; the minimum over same-line right-hand neighbors is taken).
/// * `blocks` - The page's full block list.
/// * `page_width` - Page width in pixels.
/// * `tolerance_factor` - Fraction of the label height used as the same-line
///   tolerance.
///
/// When two candidate barriers are equidistant the smaller `x_min` wins,
/// which the running minimum yields without a separate tie-break.
pub fn resolve_scan_zone(
    label: &LabelCandidate,
    labels: &[LabelCandidate],
    blocks: &[TextBlock],
    page_width: u32,
    tolerance_factor: f32,
) -> ScanZone {
    let label_block = label.block(blocks);
    let x_start = label_block.x_max();
    let y_center = label_block.y_center();
    let y_tolerance = label_block.height() * tolerance_factor;

    let mut x_end = page_width as f32;
    for other in labels {
        if other.block_index == label.block_index {
            continue;
        }
        let other_block = other.block(blocks);
        if (other_block.y_center() - y_center).abs() < y_tolerance
            && other_block.x_min() > x_start
            && other_block.x_min() < x_end
        {
            x_end = other_block.x_min();
        }
    }

    ScanZone {
        x_start,
        x_end,
        y_center,
        y_tolerance,
    }
}
