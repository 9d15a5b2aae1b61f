//! Geometric processing utilities shared across the redaction pipeline.

pub mod geometry;

pub use geometry::{BoundingBox, Point};
