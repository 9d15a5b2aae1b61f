//! Identity label classification.
//!
//! Scans the header zone of a page and tags blocks that look like form-field
//! labels. Matching is literal keyword containment on the lowercased text;
//! there is no language model involved. Roles are tried in a fixed precedence
//! order so that number labels ("Öğrenci No") are never misread as name
//! labels even when both keyword sets hit.

use crate::core::config::AnonymizerConfig;
use crate::domain::{FieldRole, TextBlock};
use itertools::Itertools;
use std::cmp::Ordering;

/// A block identified as an identity label.
///
/// Holds an index into the page's block list rather than a copy so later
/// stages can distinguish the label from its surrounding blocks by identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelCandidate {
    /// Index of the label block in the page's block list.
    pub block_index: usize,
    /// The role the block was classified as.
    pub role: FieldRole,
}

impl LabelCandidate {
    /// Borrows the underlying block from the page's block list.
    pub fn block<'a>(&self, blocks: &'a [TextBlock]) -> &'a TextBlock {
        &blocks[self.block_index]
    }
}

/// One classification rule: a role plus the keywords that mark it.
#[derive(Debug, Clone)]
struct LabelRule {
    role: FieldRole,
    keywords: Vec<String>,
}

impl LabelRule {
    fn matches(&self, text_lower: &str) -> bool {
        self.keywords.iter().any(|k| text_lower.contains(k.as_str()))
    }
}

/// Classifies header-zone blocks into label candidates.
///
/// Rules are tried in order and the first match wins, which encodes the role
/// precedence (number before name) without nested conditionals; adding a
/// future field type means appending a rule.
#[derive(Debug, Clone)]
pub struct LabelClassifier {
    rules: Vec<LabelRule>,
    header_fraction: f32,
}

impl LabelClassifier {
    /// Builds the classifier from a validated configuration.
    ///
    /// Keywords are lowercased here once so per-block matching stays a plain
    /// substring scan.
    pub fn from_config(config: &AnonymizerConfig) -> Self {
        let lowercase = |keywords: &[String]| -> Vec<String> {
            keywords.iter().map(|k| k.trim().to_lowercase()).collect()
        };
        Self {
            rules: vec![
                LabelRule {
                    role: FieldRole::Number,
                    keywords: lowercase(&config.number_keywords),
                },
                LabelRule {
                    role: FieldRole::Name,
                    keywords: lowercase(&config.name_keywords),
                },
            ],
            header_fraction: config.header_fraction,
        }
    }

    /// Tags every header-zone block that matches a rule.
    ///
    /// # Arguments
    ///
    /// * `blocks` - The page's full block list.
    /// * `page_height` - Page height in pixels, used to derive the header
    ///   limit.
    ///
    /// # Returns
    ///
    /// Label candidates sorted top-to-bottom then left-to-right. The ordering
    /// is load-bearing: zone resolution and first-value-wins extraction both
    /// iterate it.
    pub fn classify(&self, blocks: &[TextBlock], page_height: u32) -> Vec<LabelCandidate> {
        let header_limit = page_height as f32 * self.header_fraction;

        blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| !block.bbox.is_degenerate())
            .filter(|(_, block)| block.y_min() < header_limit)
            .filter_map(|(index, block)| {
                self.rules
                    .iter()
                    .find(|rule| rule.matches(&block.text_lower))
                    .map(|rule| LabelCandidate {
                        block_index: index,
                        role: rule.role,
                    })
            })
            .sorted_by(|a, b| {
                let (ab, bb) = (a.block(blocks), b.block(blocks));
                ab.y_min()
                    .partial_cmp(&bb.y_min())
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| {
                        ab.x_min()
                            .partial_cmp(&bb.x_min())
                            .unwrap_or(Ordering::Equal)
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawDetection;
    use crate::processors::Point;

    fn block(x1: f32, y1: f32, x2: f32, y2: f32, text: &str) -> TextBlock {
        let polygon = vec![
            Point::new(x1, y1),
            Point::new(x2, y1),
            Point::new(x2, y2),
            Point::new(x1, y2),
        ];
        TextBlock::from_detection(RawDetection::new(polygon, text, 0.9)).expect("valid block")
    }

    fn classifier() -> LabelClassifier {
        LabelClassifier::from_config(&AnonymizerConfig::default())
    }

    #[test]
    fn test_number_outranks_name() {
        // "Öğrenci No" also contains name-adjacent tokens; the number rule
        // runs first and must win.
        let blocks = vec![block(10.0, 10.0, 120.0, 40.0, "Öğrenci No")];
        let labels = classifier().classify(&blocks, 1000);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].role, FieldRole::Number);
    }

    #[test]
    fn test_header_zone_gates_eligibility() {
        let config = AnonymizerConfig::default().with_header_fraction(0.30);
        let classifier = LabelClassifier::from_config(&config);
        let blocks = vec![
            block(10.0, 50.0, 120.0, 80.0, "Ad Soyad:"),
            // Same text but below the 300px header limit of a 1000px page.
            block(10.0, 400.0, 120.0, 430.0, "Ad Soyad:"),
        ];
        let labels = classifier.classify(&blocks, 1000);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].block_index, 0);
    }

    #[test]
    fn test_non_label_blocks_are_discarded() {
        let blocks = vec![
            block(10.0, 10.0, 120.0, 40.0, "Matematik Sınavı"),
            block(10.0, 60.0, 120.0, 90.0, "Ad Soyad:"),
        ];
        let labels = classifier().classify(&blocks, 1000);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].role, FieldRole::Name);
        assert_eq!(labels[0].block_index, 1);
    }

    #[test]
    fn test_output_sorted_top_to_bottom_then_left_to_right() {
        let blocks = vec![
            block(400.0, 60.0, 450.0, 90.0, "No:"),
            block(10.0, 60.0, 120.0, 90.0, "Ad Soyad:"),
            block(10.0, 10.0, 120.0, 40.0, "Numara:"),
        ];
        let labels = classifier().classify(&blocks, 1000);
        let order: Vec<usize> = labels.iter().map(|l| l.block_index).collect();
        assert_eq!(order, vec![2, 1, 0]);
    }

    #[test]
    fn test_multiple_labels_of_same_role_are_all_kept() {
        let blocks = vec![
            block(10.0, 10.0, 120.0, 40.0, "Adı:"),
            block(10.0, 60.0, 120.0, 90.0, "Soyadı:"),
        ];
        let labels = classifier().classify(&blocks, 1000);
        assert_eq!(labels.len(), 2);
        assert!(labels.iter().all(|l| l.role == FieldRole::Name));
    }

    #[test]
    fn test_matching_is_case_insensitive_containment() {
        let blocks = vec![block(10.0, 10.0, 180.0, 40.0, "  ÖĞRENCİ NUMARA  ")];
        let labels = classifier().classify(&blocks, 1000);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].role, FieldRole::Number);
    }
}
