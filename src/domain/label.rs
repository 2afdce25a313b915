//! Tag cloud label model.
//!
//! A [`Label`] is one rotating text element of the cloud. Its text and color are
//! fixed at creation; only its position changes, once per animation frame.

use serde::{Deserialize, Serialize};

/// A point in the cloud's 3D space, centered on the sphere's origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Euclidean distance from the origin.
    #[must_use]
    pub fn norm(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }
}

/// Text and color for one label, as read from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSpec {
    pub text: String,
    pub color: String,
}

impl LabelSpec {
    #[must_use]
    pub fn new(text: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: color.into(),
        }
    }
}

/// One text element of the tag cloud.
///
/// `text` and `color` are private so they cannot change after creation; the
/// renderer owns `position` and overwrites it every frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    text: String,
    color: String,
    pub position: Point3,
}

impl Label {
    #[must_use]
    pub fn new(spec: &LabelSpec, position: Point3) -> Self {
        Self {
            text: spec.text.clone(),
            color: spec.color.clone(),
            position,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }
}
