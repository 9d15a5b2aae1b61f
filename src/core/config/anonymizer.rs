//! Configuration for the page anonymization pipeline.

use super::errors::{ConfigError, ConfigValidator};
use crate::core::constants::{
    DEFAULT_HEADER_FRACTION, DEFAULT_LINE_TOLERANCE_FACTOR, DEFAULT_NAME_BLIND_WIDTH_PX,
    DEFAULT_NAME_KEYWORDS, DEFAULT_NUMBER_BLIND_WIDTH_PX, DEFAULT_NUMBER_KEYWORDS,
    DEFAULT_REDACTION_MARGIN_PX,
};
use serde::{Deserialize, Serialize};

/// Tunable knobs for label classification, value search, and redaction.
///
/// The defaults target Turkish exam sheets; keyword sets and geometry
/// tolerances are configurable so the same pipeline serves other form layouts.
///
/// # Example
///
/// ```
/// use exam_redact::core::config::AnonymizerConfig;
/// use exam_redact::core::config::ConfigValidator;
///
/// let config = AnonymizerConfig::default()
///     .with_header_fraction(0.3)
///     .with_redaction_margin_px(8.0);
/// config.validate().expect("valid configuration");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnonymizerConfig {
    /// Fraction of the page height forming the header zone; only blocks whose
    /// top edge lies above `height * header_fraction` can be labels.
    #[serde(default = "AnonymizerConfig::default_header_fraction")]
    pub header_fraction: f32,

    /// Keywords marking a block as a name label (matched case-insensitively
    /// by containment).
    #[serde(default = "AnonymizerConfig::default_name_keywords")]
    pub name_keywords: Vec<String>,

    /// Keywords marking a block as a number label. Number classification has
    /// precedence over name classification.
    #[serde(default = "AnonymizerConfig::default_number_keywords")]
    pub number_keywords: Vec<String>,

    /// Fraction of a label's height used as the vertical tolerance when
    /// deciding that two boxes share a visual line. Sensible values lie in
    /// `0.8..=1.2`.
    #[serde(default = "AnonymizerConfig::default_line_tolerance_factor")]
    pub line_tolerance_factor: f32,

    /// Pixels added on every side of a painted rectangle.
    #[serde(default = "AnonymizerConfig::default_redaction_margin_px")]
    pub redaction_margin_px: f32,

    /// Blind fallback width for unresolved name values.
    #[serde(default = "AnonymizerConfig::default_name_blind_width_px")]
    pub name_blind_width_px: f32,

    /// Blind fallback width for unresolved number values.
    #[serde(default = "AnonymizerConfig::default_number_blind_width_px")]
    pub number_blind_width_px: f32,
}

impl AnonymizerConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the header zone fraction.
    pub fn with_header_fraction(mut self, fraction: f32) -> Self {
        self.header_fraction = fraction;
        self
    }

    /// Replaces the name keyword set.
    pub fn with_name_keywords(mut self, keywords: Vec<String>) -> Self {
        self.name_keywords = keywords;
        self
    }

    /// Replaces the number keyword set.
    pub fn with_number_keywords(mut self, keywords: Vec<String>) -> Self {
        self.number_keywords = keywords;
        self
    }

    /// Sets the same-line tolerance factor.
    pub fn with_line_tolerance_factor(mut self, factor: f32) -> Self {
        self.line_tolerance_factor = factor;
        self
    }

    /// Sets the redaction margin in pixels.
    pub fn with_redaction_margin_px(mut self, margin: f32) -> Self {
        self.redaction_margin_px = margin;
        self
    }

    /// Sets the blind fallback width for name labels.
    pub fn with_name_blind_width_px(mut self, width: f32) -> Self {
        self.name_blind_width_px = width;
        self
    }

    /// Sets the blind fallback width for number labels.
    pub fn with_number_blind_width_px(mut self, width: f32) -> Self {
        self.number_blind_width_px = width;
        self
    }

    fn default_header_fraction() -> f32 {
        DEFAULT_HEADER_FRACTION
    }

    fn default_name_keywords() -> Vec<String> {
        DEFAULT_NAME_KEYWORDS.iter().map(|s| s.to_string()).collect()
    }

    fn default_number_keywords() -> Vec<String> {
        DEFAULT_NUMBER_KEYWORDS.iter().map(|s| s.to_string()).collect()
    }

    fn default_line_tolerance_factor() -> f32 {
        DEFAULT_LINE_TOLERANCE_FACTOR
    }

    fn default_redaction_margin_px() -> f32 {
        DEFAULT_REDACTION_MARGIN_PX
    }

    fn default_name_blind_width_px() -> f32 {
        DEFAULT_NAME_BLIND_WIDTH_PX
    }

    fn default_number_blind_width_px() -> f32 {
        DEFAULT_NUMBER_BLIND_WIDTH_PX
    }
}

impl Default for AnonymizerConfig {
    fn default() -> Self {
        Self {
            header_fraction: Self::default_header_fraction(),
            name_keywords: Self::default_name_keywords(),
            number_keywords: Self::default_number_keywords(),
            line_tolerance_factor: Self::default_line_tolerance_factor(),
            redaction_margin_px: Self::default_redaction_margin_px(),
            name_blind_width_px: Self::default_name_blind_width_px(),
            number_blind_width_px: Self::default_number_blind_width_px(),
        }
    }
}

impl ConfigValidator for AnonymizerConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        self.validate_fraction("header_fraction", self.header_fraction)?;
        self.validate_positive("line_tolerance_factor", self.line_tolerance_factor)?;
        self.validate_non_negative("redaction_margin_px", self.redaction_margin_px)?;
        self.validate_positive("name_blind_width_px", self.name_blind_width_px)?;
        self.validate_positive("number_blind_width_px", self.number_blind_width_px)?;
        self.validate_keywords("name_keywords", &self.name_keywords)?;
        self.validate_keywords("number_keywords", &self.number_keywords)?;
        Ok(())
    }

    fn get_defaults() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        AnonymizerConfig::get_defaults().validate().expect("defaults validate");
    }

    #[test]
    fn test_header_fraction_must_be_a_fraction() {
        let config = AnonymizerConfig::default().with_header_fraction(1.5);
        assert!(config.validate().is_err());

        let config = AnonymizerConfig::default().with_header_fraction(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_keyword_lists_must_be_populated() {
        let config = AnonymizerConfig::default().with_name_keywords(Vec::new());
        assert!(config.validate().is_err());

        let config = AnonymizerConfig::default().with_number_keywords(vec!["  ".into()]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blind_widths_must_be_positive() {
        let config = AnonymizerConfig::default().with_name_blind_width_px(0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_serde_fills_missing_fields_with_defaults() {
        let config: AnonymizerConfig =
            serde_json::from_str(r#"{"header_fraction": 0.25}"#).expect("deserialize");
        assert_eq!(config.header_fraction, 0.25);
        assert!(!config.number_keywords.is_empty());
        assert_eq!(config.redaction_margin_px, DEFAULT_REDACTION_MARGIN_PX);
    }
}
