//! Built-in paint routines for common chart content.
//!
//! Hosts with custom visuals implement [`Paint`] themselves; these two cover
//! the standard dashboard line chart.

use crate::core::scale::{LinearScale, Scale};
use crate::core::types::DataPoint;
use crate::layout::{Paint, PaintContext};
use crate::render::{Color, LinePrimitive, PolylinePrimitive};

/// Strokes one polyline per visible series, using the shared metadata map for
/// visibility and color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesLinePainter {
    pub stroke_width: f64,
}

impl Default for SeriesLinePainter {
    fn default() -> Self {
        Self { stroke_width: 1.5 }
    }
}

impl Paint for SeriesLinePainter {
    fn group_key(&self) -> &'static str {
        "series-lines"
    }

    fn paint(&mut self, ctx: PaintContext<'_>) {
        for series in ctx.series {
            let (visible, color) = match ctx.metadata.get(&series.id) {
                Some(metadata) => (metadata.visible, metadata.color),
                None => (true, crate::core::types::DataSeriesMetadata::default().color),
            };
            if !visible {
                continue;
            }
            // A polyline needs two vertices; singleton series have no extent.
            if series.paths.len() < 4 {
                continue;
            }
            ctx.frame.push_polyline(PolylinePrimitive::new(
                series.paths.clone(),
                self.stroke_width,
                color,
            ));
        }
    }
}

/// Strokes horizontal and vertical grid lines at round data values of the
/// current view box.
///
/// Holds no series data, so hosts re-arm it after view-box moves with
/// `mark_as_paint_dirty_if_coordinate_stale` and advance its coordinate
/// identifier once repainted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLinesPainter {
    pub ticks_per_axis: usize,
    pub stroke_width: f64,
    pub color: Color,
}

impl Default for GridLinesPainter {
    fn default() -> Self {
        Self {
            ticks_per_axis: 5,
            stroke_width: 1.0,
            color: Color::rgba(0.0, 0.0, 0.0, 0.12),
        }
    }
}

impl Paint for GridLinesPainter {
    fn group_key(&self) -> &'static str {
        "grid-lines"
    }

    fn paint(&mut self, ctx: PaintContext<'_>) {
        let scale = LinearScale;
        let view_box = ctx.coordinator.view_box_rect();
        let (top, bottom) = (ctx.rect.y, ctx.rect.y + ctx.rect.height);
        let (left, right) = (ctx.rect.x, ctx.rect.x + ctx.rect.width);

        for tick in scale.ticks(view_box.x_bounds(), self.ticks_per_axis) {
            let (x, _) = ctx
                .coordinator
                .get_view_coordinate(ctx.rect, DataPoint::new(tick, view_box.y));
            ctx.frame.push_line(LinePrimitive::new(
                x,
                top,
                x,
                bottom,
                self.stroke_width,
                self.color,
            ));
        }
        for tick in scale.ticks(view_box.y_bounds(), self.ticks_per_axis) {
            let (_, y) = ctx
                .coordinator
                .get_view_coordinate(ctx.rect, DataPoint::new(view_box.x, tick));
            ctx.frame.push_line(LinePrimitive::new(
                left,
                y,
                right,
                y,
                self.stroke_width,
                self.color,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GridLinesPainter, SeriesLinePainter};
    use crate::core::coordinator::Coordinator;
    use crate::core::types::{
        DataInternalSeries, DataSeriesMetadata, Rect, SeriesMetadataMap,
    };
    use crate::layout::{Paint, PaintContext};
    use crate::render::GroupFrame;

    fn paint_into_frame(
        painter: &mut dyn Paint,
        series: &[DataInternalSeries],
        metadata: &SeriesMetadataMap,
        coordinator: &Coordinator,
    ) -> GroupFrame {
        let mut frame = GroupFrame::new();
        painter.paint(PaintContext {
            rect: Rect::new(0.0, 0.0, 100.0, 100.0),
            series,
            metadata,
            coordinator,
            frame: &mut frame,
        });
        frame
    }

    #[test]
    fn series_painter_skips_invisible_and_singleton_series() {
        let coordinator = Coordinator::new();
        let mut metadata = SeriesMetadataMap::new();
        metadata.insert(
            "hidden".to_owned(),
            DataSeriesMetadata {
                visible: false,
                ..DataSeriesMetadata::default()
            },
        );

        let series = vec![
            DataInternalSeries::new("visible", vec![0.0, 0.0, 10.0, 10.0]),
            DataInternalSeries::new("hidden", vec![0.0, 0.0, 10.0, 10.0]),
            DataInternalSeries::new("singleton", vec![5.0, 5.0]),
        ];

        let mut painter = SeriesLinePainter::default();
        let frame = paint_into_frame(&mut painter, &series, &metadata, &coordinator);
        assert_eq!(frame.polylines.len(), 1);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn grid_painter_emits_lines_for_both_axes() {
        let mut coordinator = Coordinator::new();
        coordinator.set_view_box_rect(Rect::new(0.0, 0.0, 10.0, 10.0));

        let metadata = SeriesMetadataMap::new();
        let mut painter = GridLinesPainter::default();
        let frame = paint_into_frame(&mut painter, &[], &metadata, &coordinator);
        assert!(frame.lines.len() >= 4);
        assert!(frame.validate().is_ok());
    }
}
