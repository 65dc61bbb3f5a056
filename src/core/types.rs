use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Axis-aligned rectangle, in screen space or data space depending on context.
///
/// Immutable value: holders replace it wholesale instead of mutating fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// `(left, right)` bounds along the x axis.
    #[must_use]
    pub fn x_bounds(self) -> (f64, f64) {
        (self.x, self.x + self.width)
    }

    /// `(top, bottom)` bounds along the y axis, in increasing-coordinate order.
    #[must_use]
    pub fn y_bounds(self) -> (f64, f64) {
        (self.y, self.y + self.height)
    }
}

/// One data-space sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Caller-supplied series of ordered data points.
///
/// Ids must be unique within one redraw pass; they key the shared
/// [`SeriesMetadataMap`] and the derived screen-space series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSeries {
    pub id: String,
    pub points: Vec<DataPoint>,
}

impl DataSeries {
    #[must_use]
    pub fn new(id: impl Into<String>, points: Vec<DataPoint>) -> Self {
        Self {
            id: id.into(),
            points,
        }
    }
}

/// Screen-space rendition of one [`DataSeries`].
///
/// `paths` interleaves x,y pairs (two floats per source point, same order).
/// Owned exclusively by the node that produced it and replaced wholesale on
/// every coordinate recompute.
#[derive(Debug, Clone, PartialEq)]
pub struct DataInternalSeries {
    pub id: String,
    pub paths: Vec<f32>,
}

impl DataInternalSeries {
    #[must_use]
    pub fn new(id: impl Into<String>, paths: Vec<f32>) -> Self {
        Self {
            id: id.into(),
            paths,
        }
    }
}

/// Presentation hints for one series, keyed by series id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataSeriesMetadata {
    pub visible: bool,
    pub color: Color,
}

impl Default for DataSeriesMetadata {
    fn default() -> Self {
        Self {
            visible: true,
            color: Color::rgb(0.2, 0.4, 0.8),
        }
    }
}

/// Insertion-ordered metadata map shared across every paintable node.
pub type SeriesMetadataMap = IndexMap<String, DataSeriesMetadata>;
