//! Geometric primitives for redaction processing.
//!
//! This module provides the point and bounding box types used to reason about
//! OCR detections on a page raster. Detection polygons arrive as arbitrary
//! four-point outlines; all downstream logic works on the derived axis-aligned
//! bounds, so the accessors here fold over every corner rather than trusting
//! any particular corner ordering.

use serde::{Deserialize, Serialize};

/// A 2D point with floating-point coordinates in page pixel space.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    /// X-coordinate of the point.
    pub x: f32,
    /// Y-coordinate of the point.
    pub y: f32,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A bounding box represented by a collection of points.
///
/// OCR engines return four-corner polygons, but nothing here requires exactly
/// four points; the axis-aligned extent is always derived from the full point
/// set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BoundingBox {
    /// The points that define the bounding box.
    pub points: Vec<Point>,
}

impl BoundingBox {
    /// Creates a new bounding box from a vector of points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates an axis-aligned bounding box from corner coordinates.
    ///
    /// # Arguments
    ///
    /// * `x1` - The x-coordinate of the top-left corner.
    /// * `y1` - The y-coordinate of the top-left corner.
    /// * `x2` - The x-coordinate of the bottom-right corner.
    /// * `y2` - The y-coordinate of the bottom-right corner.
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let points = vec![
            Point::new(x1, y1),
            Point::new(x2, y1),
            Point::new(x2, y2),
            Point::new(x1, y2),
        ];
        Self { points }
    }

    /// Gets the minimum x-coordinate of all points, or 0.0 if there are none.
    pub fn x_min(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|p| p.x)
            .fold(f32::INFINITY, f32::min)
    }

    /// Gets the maximum x-coordinate of all points, or 0.0 if there are none.
    pub fn x_max(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|p| p.x)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Gets the minimum y-coordinate of all points, or 0.0 if there are none.
    pub fn y_min(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|p| p.y)
            .fold(f32::INFINITY, f32::min)
    }

    /// Gets the maximum y-coordinate of all points, or 0.0 if there are none.
    pub fn y_max(&self) -> f32 {
        if self.points.is_empty() {
            return 0.0;
        }
        self.points
            .iter()
            .map(|p| p.y)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// Width of the axis-aligned extent.
    pub fn width(&self) -> f32 {
        self.x_max() - self.x_min()
    }

    /// Height of the axis-aligned extent.
    pub fn height(&self) -> f32 {
        self.y_max() - self.y_min()
    }

    /// Vertical center of the axis-aligned extent.
    ///
    /// Used to decide whether two detections sit on the same visual line.
    pub fn y_center(&self) -> f32 {
        (self.y_min() + self.y_max()) / 2.0
    }

    /// Returns true if the box cannot contain any pixel.
    ///
    /// Degenerate boxes (fewer than two points, zero-width or zero-height
    /// extents, or non-finite coordinates) are filtered out before
    /// classification rather than propagated through the pipeline.
    pub fn is_degenerate(&self) -> bool {
        if self.points.len() < 2 {
            return true;
        }
        let (x_min, x_max) = (self.x_min(), self.x_max());
        let (y_min, y_max) = (self.y_min(), self.y_max());
        if !(x_min.is_finite() && x_max.is_finite() && y_min.is_finite() && y_max.is_finite()) {
            return true;
        }
        x_max <= x_min || y_max <= y_min
    }

    /// Computes the union (minimum enclosing axis-aligned box) of this box and
    /// another.
    pub fn union(&self, other: &Self) -> Self {
        let new_x_min = self.x_min().min(other.x_min());
        let new_y_min = self.y_min().min(other.y_min());
        let new_x_max = self.x_max().max(other.x_max());
        let new_y_max = self.y_max().max(other.y_max());
        BoundingBox::from_coords(new_x_min, new_y_min, new_x_max, new_y_max)
    }

    /// Returns the axis-aligned extent grown by `margin` pixels on every side.
    ///
    /// Coordinates may go negative; callers clamp to the page at paint time.
    pub fn expand(&self, margin: f32) -> Self {
        BoundingBox::from_coords(
            self.x_min() - margin,
            self.y_min() - margin,
            self.x_max() + margin,
            self.y_max() + margin,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_extent_accessors() {
        let bbox = BoundingBox::from_coords(10.0, 20.0, 100.0, 80.0);
        assert_eq!(bbox.x_min(), 10.0);
        assert_eq!(bbox.y_min(), 20.0);
        assert_eq!(bbox.x_max(), 100.0);
        assert_eq!(bbox.y_max(), 80.0);
        assert_eq!(bbox.width(), 90.0);
        assert_eq!(bbox.height(), 60.0);
        assert_eq!(bbox.y_center(), 50.0);
    }

    #[test]
    fn test_extent_ignores_corner_ordering() {
        // A polygon listed bottom-right first must derive the same extent.
        let bbox = BoundingBox::new(vec![
            Point::new(100.0, 80.0),
            Point::new(10.0, 80.0),
            Point::new(10.0, 20.0),
            Point::new(100.0, 20.0),
        ]);
        assert_eq!(bbox.x_min(), 10.0);
        assert_eq!(bbox.y_min(), 20.0);
        assert_eq!(bbox.x_max(), 100.0);
        assert_eq!(bbox.y_max(), 80.0);
    }

    #[test]
    fn test_union() {
        let a = BoundingBox::from_coords(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::from_coords(5.0, 5.0, 20.0, 15.0);
        let u = a.union(&b);
        assert_eq!(u.x_min(), 0.0);
        assert_eq!(u.y_min(), 0.0);
        assert_eq!(u.x_max(), 20.0);
        assert_eq!(u.y_max(), 15.0);
    }

    #[test]
    fn test_expand_grows_every_side() {
        let bbox = BoundingBox::from_coords(10.0, 20.0, 100.0, 80.0);
        let grown = bbox.expand(5.0);
        assert_eq!(grown.x_min(), 5.0);
        assert_eq!(grown.y_min(), 15.0);
        assert_eq!(grown.x_max(), 105.0);
        assert_eq!(grown.y_max(), 85.0);
    }

    #[test]
    fn test_expand_may_go_negative() {
        let bbox = BoundingBox::from_coords(2.0, 2.0, 10.0, 10.0);
        let grown = bbox.expand(5.0);
        assert_eq!(grown.x_min(), -3.0);
        assert_eq!(grown.y_min(), -3.0);
    }

    #[test]
    fn test_degenerate_boxes() {
        // Zero width.
        assert!(BoundingBox::from_coords(10.0, 0.0, 10.0, 50.0).is_degenerate());
        // Zero height.
        assert!(BoundingBox::from_coords(0.0, 10.0, 50.0, 10.0).is_degenerate());
        // Inverted coordinates collapse to a valid extent via min/max
        // derivation, so they are not degenerate on their own.
        assert!(!BoundingBox::from_coords(50.0, 50.0, 0.0, 0.0).is_degenerate());
        // Too few points.
        assert!(BoundingBox::new(vec![Point::new(1.0, 1.0)]).is_degenerate());
        assert!(BoundingBox::new(Vec::new()).is_degenerate());
        // Non-finite coordinates.
        assert!(BoundingBox::from_coords(0.0, 0.0, f32::NAN, 10.0).is_degenerate());
        // Healthy box.
        assert!(!BoundingBox::from_coords(0.0, 0.0, 10.0, 10.0).is_degenerate());
    }
}
