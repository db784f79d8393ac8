//! Pixel-space boxes and their relative (TensorFlow-style) form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Decimal places kept in relative coordinates.
const DECIMALS: i32 = 5;

/// Axis-aligned rectangle in pixels, as the detections endpoint returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl PixelRect {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self { x, y, width, height }
    }

    /// See [`rect_to_relative`].
    pub fn to_relative(&self, img_width: u32, img_height: u32) -> RelativeBox {
        rect_to_relative(self, img_width, img_height)
    }
}

/// A polygon vertex in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Ordered polygon, as the recognition endpoint returns it under `bounding`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// See [`polygon_to_relative`].
    pub fn to_relative(&self, img_width: u32, img_height: u32) -> RelativeBox {
        polygon_to_relative(&self.vertices, img_width, img_height)
    }
}

/// Bounding box as fractions of the image size, in `(y_min, x_min, y_max, x_max)` order.
///
/// For a 200 x 100 (width x height) image, `(0.1, 0.2, 0.5, 0.9)` spans pixel
/// corners `(40, 10)` to `(180, 50)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema)]
pub struct RelativeBox {
    pub y_min: f64,
    pub x_min: f64,
    pub y_max: f64,
    pub x_max: f64,
}

impl RelativeBox {
    pub fn new(y_min: f64, x_min: f64, y_max: f64, x_max: f64) -> Self {
        Self { y_min, x_min, y_max, x_max }
    }

    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.y_min, self.x_min, self.y_max, self.x_max)
    }
}

/// Convert a pixel rectangle to a relative box.
///
/// `img_width` and `img_height` must be non-zero.
pub fn rect_to_relative(rect: &PixelRect, img_width: u32, img_height: u32) -> RelativeBox {
    let w = f64::from(img_width);
    let h = f64::from(img_height);

    RelativeBox {
        y_min: round(rect.y as f64 / h),
        x_min: round(rect.x as f64 / w),
        y_max: round((rect.y as f64 + rect.height as f64) / h),
        x_max: round((rect.x as f64 + rect.width as f64) / w),
    }
}

/// Convert polygon vertices to the relative box enclosing them.
///
/// `img_width` and `img_height` must be non-zero. An empty vertex list maps to
/// the zero box.
pub fn polygon_to_relative(vertices: &[Point], img_width: u32, img_height: u32) -> RelativeBox {
    let Some(first) = vertices.first() else {
        return RelativeBox::default();
    };

    let (x_min, y_min, x_max, y_max) = vertices.iter().fold(
        (first.x, first.y, first.x, first.y),
        |(x_min, y_min, x_max, y_max), p| {
            (x_min.min(p.x), y_min.min(p.y), x_max.max(p.x), y_max.max(p.y))
        },
    );

    let w = f64::from(img_width);
    let h = f64::from(img_height);

    RelativeBox {
        y_min: round(y_min as f64 / h),
        x_min: round(x_min as f64 / w),
        y_max: round(y_max as f64 / h),
        x_max: round(x_max as f64 / w),
    }
}

/// Round half away from zero to `DECIMALS` places.
fn round(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMALS);
    (value * scale).round() / scale
}
