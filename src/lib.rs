//! linechart-core: layout, coordinate-transform, and repaint-minimization
//! engine for interactive 2-D line charts.
//!
//! The crate lays out nested rectangular regions, maps data-space points into
//! screen coordinates under linear or logarithmic scaling, and repaints only
//! the nodes whose geometry or data actually changed. Pixel drawing stays
//! behind the [`render::Renderer`] capability; input handling, state stores,
//! and styling belong to the embedding dashboard.

pub mod core;
pub mod error;
pub mod layout;
pub mod painters;
pub mod render;
pub mod telemetry;

pub use error::{ChartError, ChartResult};
pub use layout::{LayoutNode, NodeKind, Paint, PaintContext, RootLayout};
