//! Value extraction within a resolved scan zone.
//!
//! Collects the non-label blocks that fall inside a label's zone, orders them
//! left to right, and normalizes their concatenated text into the field
//! value. Extraction never fails: an empty result simply means the caller
//! falls back to blind redaction.

use super::classifier::LabelCandidate;
use super::zones::ScanZone;
use crate::domain::TextBlock;
use crate::processors::BoundingBox;
use std::cmp::Ordering;

/// The outcome of searching one scan zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedValue {
    /// The cleaned value text; empty when nothing usable was found.
    pub text: String,
    /// Bounding box spanning every matched block, or `None` when no block
    /// matched. Margin expansion happens at redaction time.
    pub covering: Option<BoundingBox>,
}

impl ExtractedValue {
    /// An extraction that matched nothing.
    pub fn empty() -> Self {
        Self {
            text: String::new(),
            covering: None,
        }
    }

    /// Returns true when no usable text was extracted.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Searches a label's scan zone for its value.
///
/// Label candidates of any role are excluded from the match set: a label is
/// never another label's value, and the barrier label bounding the zone sits
/// exactly on `x_end`, where the horizontal containment check would otherwise
/// admit it.
pub fn extract_value(
    label: &LabelCandidate,
    zone: &ScanZone,
    labels: &[LabelCandidate],
    blocks: &[TextBlock],
) -> ExtractedValue {
    let mut matched: Vec<&TextBlock> = blocks
        .iter()
        .enumerate()
        .filter(|(index, _)| *index != label.block_index)
        .filter(|(index, _)| !labels.iter().any(|l| l.block_index == *index))
        .map(|(_, block)| block)
        .filter(|block| !block.bbox.is_degenerate())
        .filter(|block| zone.on_same_line(block.y_center()))
        .filter(|block| zone.contains_x(block.x_min()))
        .collect();

    if matched.is_empty() {
        return ExtractedValue::empty();
    }

    matched.sort_by(|a, b| {
        a.x_min()
            .partial_cmp(&b.x_min())
            .unwrap_or(Ordering::Equal)
    });

    let joined = matched
        .iter()
        .map(|block| block.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let text = clean_value(&joined);

    let covering = matched
        .iter()
        .skip(1)
        .fold(matched[0].bbox.clone(), |acc, block| acc.union(&block.bbox));

    ExtractedValue {
        text,
        covering: Some(covering),
    }
}

/// Normalizes extracted text: collapses whitespace runs, then strips one
/// leading colon left over from label separators like "Ad Soyad: ...".
fn clean_value(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    let cleaned = match collapsed.strip_prefix(':') {
        Some(rest) => rest.trim_start(),
        None => collapsed.as_str(),
    };
    cleaned.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FieldRole, RawDetection};
    use crate::processors::Point;
    use crate::redaction::zones::resolve_scan_zone;

    fn block(x1: f32, y1: f32, x2: f32, y2: f32, text: &str) -> TextBlock {
        let polygon = vec![
            Point::new(x1, y1),
            Point::new(x2, y1),
            Point::new(x2, y2),
            Point::new(x1, y2),
        ];
        TextBlock::from_detection(RawDetection::new(polygon, text, 0.9)).expect("valid block")
    }

    #[test]
    fn test_clean_value_rules() {
        assert_eq!(clean_value("  Ali   Veli  "), "Ali Veli");
        assert_eq!(clean_value(": Ali Veli"), "Ali Veli");
        assert_eq!(clean_value(":Ali"), "Ali");
        // Only one leading colon is stripped; interior colons stay.
        assert_eq!(clean_value(":: 42"), ": 42");
        assert_eq!(clean_value("Sınıf: 9A"), "Sınıf: 9A");
        assert_eq!(clean_value("   "), "");
    }

    #[test]
    fn test_matches_are_concatenated_left_to_right() {
        let blocks = vec![
            block(10.0, 50.0, 120.0, 80.0, "Ad Soyad:"),
            // Listed out of visual order on purpose.
            block(300.0, 52.0, 380.0, 82.0, "Veli"),
            block(140.0, 50.0, 280.0, 80.0, "Ali"),
        ];
        let labels = vec![LabelCandidate {
            block_index: 0,
            role: FieldRole::Name,
        }];
        let zone = resolve_scan_zone(&labels[0], &labels, &blocks, 1200, 0.8);
        let value = extract_value(&labels[0], &zone, &labels, &blocks);
        assert_eq!(value.text, "Ali Veli");

        let covering = value.covering.expect("covering rect");
        assert_eq!(covering.x_min(), 140.0);
        assert_eq!(covering.x_max(), 380.0);
        assert_eq!(covering.y_min(), 50.0);
        assert_eq!(covering.y_max(), 82.0);
    }

    #[test]
    fn test_barrier_scenario_splits_fields() {
        // "Ad Soyad:" and "No:" share a line; "123" belongs to the number.
        let blocks = vec![
            block(10.0, 50.0, 120.0, 80.0, "Ad Soyad:"),
            block(400.0, 50.0, 440.0, 80.0, "No:"),
            block(450.0, 50.0, 490.0, 80.0, "123"),
        ];
        let labels = vec![
            LabelCandidate {
                block_index: 0,
                role: FieldRole::Name,
            },
            LabelCandidate {
                block_index: 1,
                role: FieldRole::Number,
            },
        ];

        let name_zone = resolve_scan_zone(&labels[0], &labels, &blocks, 1200, 0.8);
        let name_value = extract_value(&labels[0], &name_zone, &labels, &blocks);
        // The name zone ends at the number label; neither "No:" nor "123" is
        // absorbed.
        assert!(name_value.is_empty());
        assert!(name_value.covering.is_none());

        let number_zone = resolve_scan_zone(&labels[1], &labels, &blocks, 1200, 0.8);
        let number_value = extract_value(&labels[1], &number_zone, &labels, &blocks);
        assert_eq!(number_value.text, "123");
    }

    #[test]
    fn test_blocks_on_other_lines_are_ignored() {
        let blocks = vec![
            block(10.0, 50.0, 120.0, 80.0, "Numara:"),
            block(140.0, 200.0, 220.0, 230.0, "20250042"),
        ];
        let labels = vec![LabelCandidate {
            block_index: 0,
            role: FieldRole::Number,
        }];
        let zone = resolve_scan_zone(&labels[0], &labels, &blocks, 1200, 0.8);
        let value = extract_value(&labels[0], &zone, &labels, &blocks);
        assert!(value.is_empty());
    }

    #[test]
    fn test_same_role_labels_are_not_values() {
        // Two name labels on one line: the right one bounds the left one's
        // zone and must not be extracted as its value.
        let blocks = vec![
            block(10.0, 50.0, 80.0, 80.0, "Adı:"),
            block(300.0, 50.0, 380.0, 80.0, "Soyadı:"),
            block(100.0, 50.0, 200.0, 80.0, "Ali"),
        ];
        let labels = vec![
            LabelCandidate {
                block_index: 0,
                role: FieldRole::Name,
            },
            LabelCandidate {
                block_index: 1,
                role: FieldRole::Name,
            },
        ];
        let zone = resolve_scan_zone(&labels[0], &labels, &blocks, 1200, 0.8);
        let value = extract_value(&labels[0], &zone, &labels, &blocks);
        assert_eq!(value.text, "Ali");
    }

    #[test]
    fn test_punctuation_only_match_yields_covering_but_no_text() {
        // A stray ":" detected right of the label: nothing usable to extract,
        // but the matched region is still reported for redaction.
        let blocks = vec![
            block(10.0, 50.0, 120.0, 80.0, "Ad Soyad"),
            block(130.0, 50.0, 140.0, 80.0, ":"),
        ];
        let labels = vec![LabelCandidate {
            block_index: 0,
            role: FieldRole::Name,
        }];
        let zone = resolve_scan_zone(&labels[0], &labels, &blocks, 1200, 0.8);
        let value = extract_value(&labels[0], &zone, &labels, &blocks);
        assert!(value.is_empty());
        assert!(value.covering.is_some());
    }
}
