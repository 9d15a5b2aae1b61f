//! Identity field roles, extracted values, and redaction rectangles.

use crate::processors::BoundingBox;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// The role a label block plays on the sheet.
///
/// Classification tries roles in a fixed precedence order; [`FieldRole::Number`]
/// outranks [`FieldRole::Name`] because number keywords ("öğrenci no") contain
/// substrings that also hit loose name keyword sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldRole {
    /// Student name field ("Ad Soyad", "İsim").
    Name,
    /// Student number field ("Numara", "Öğrenci No").
    Number,
}

impl FieldRole {
    /// Stable key used in the extracted-field mapping.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldRole::Name => "name",
            FieldRole::Number => "number",
        }
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The per-page mapping of identity fields to their extracted values.
///
/// At most one value per role; the first successfully extracted value for a
/// role wins and later candidates are discarded, never overwritten.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields(BTreeMap<FieldRole, String>);

impl ExtractedFields {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `value` for `role` unless the role is already resolved.
    ///
    /// Returns true if the value was stored.
    pub fn insert_first(&mut self, role: FieldRole, value: String) -> bool {
        if self.0.contains_key(&role) {
            return false;
        }
        self.0.insert(role, value);
        true
    }

    /// Returns the resolved value for a role, if any.
    pub fn get(&self, role: FieldRole) -> Option<&str> {
        self.0.get(&role).map(String::as_str)
    }

    /// Returns true when no field was resolved.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of resolved fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over resolved `(role, value)` pairs in role order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldRole, &str)> {
        self.0.iter().map(|(role, value)| (*role, value.as_str()))
    }
}

/// An axis-aligned rectangle to be solid-filled on the output raster.
///
/// Rectangles are accumulated per label (always two per label: the label box
/// and its value or blind fallback) and are the only channel through which the
/// redactor touches pixels. Coordinates are unclamped page-space values;
/// clamping to the raster happens at paint time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RedactionRect {
    /// Left edge.
    pub x0: f32,
    /// Top edge.
    pub y0: f32,
    /// Right edge.
    pub x1: f32,
    /// Bottom edge.
    pub y1: f32,
}

impl RedactionRect {
    /// Creates a rectangle from explicit edges.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Creates a rectangle covering a bounding box grown by `margin` pixels.
    pub fn from_bbox(bbox: &BoundingBox, margin: f32) -> Self {
        let grown = bbox.expand(margin);
        Self::new(grown.x_min(), grown.y_min(), grown.x_max(), grown.y_max())
    }

    /// Clamps the rectangle to a `width` x `height` raster.
    ///
    /// Returns integer pixel bounds `(x, y, w, h)`, or `None` when nothing of
    /// the rectangle lies on the raster.
    pub fn clamped(&self, width: u32, height: u32) -> Option<(i32, i32, u32, u32)> {
        let x0 = self.x0.max(0.0).floor() as i64;
        let y0 = self.y0.max(0.0).floor() as i64;
        let x1 = (self.x1.ceil() as i64).min(width as i64);
        let y1 = (self.y1.ceil() as i64).min(height as i64);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0 as i32, y0 as i32, (x1 - x0) as u32, (y1 - y0) as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_value_wins_per_role() {
        let mut fields = ExtractedFields::new();
        assert!(fields.insert_first(FieldRole::Name, "Ali Veli".into()));
        assert!(!fields.insert_first(FieldRole::Name, "Someone Else".into()));
        assert_eq!(fields.get(FieldRole::Name), Some("Ali Veli"));
        assert_eq!(fields.get(FieldRole::Number), None);
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_roles_serialize_lowercase() {
        let mut fields = ExtractedFields::new();
        fields.insert_first(FieldRole::Number, "20250042".into());
        let json = serde_json::to_string(&fields).expect("serialize");
        assert_eq!(json, r#"{"number":"20250042"}"#);
    }

    #[test]
    fn test_rect_clamping() {
        // Fully inside.
        let rect = RedactionRect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.clamped(100, 100), Some((10, 20, 20, 20)));

        // Margin pushed past the top-left corner.
        let rect = RedactionRect::new(-5.0, -5.0, 30.0, 40.0);
        assert_eq!(rect.clamped(100, 100), Some((0, 0, 30, 40)));

        // Overhanging the right edge.
        let rect = RedactionRect::new(90.0, 10.0, 150.0, 20.0);
        assert_eq!(rect.clamped(100, 100), Some((90, 10, 10, 10)));

        // Entirely off-raster.
        let rect = RedactionRect::new(120.0, 10.0, 150.0, 20.0);
        assert_eq!(rect.clamped(100, 100), None);
    }

    #[test]
    fn test_rect_from_bbox_applies_margin() {
        let bbox = BoundingBox::from_coords(10.0, 10.0, 20.0, 20.0);
        let rect = RedactionRect::from_bbox(&bbox, 5.0);
        assert_eq!(rect, RedactionRect::new(5.0, 5.0, 25.0, 25.0));
    }
}
