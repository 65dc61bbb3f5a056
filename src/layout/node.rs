use std::collections::VecDeque;

#[cfg(feature = "parallel-transform")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::coordinator::Coordinator;
use crate::core::types::{DataInternalSeries, DataSeries, Rect, SeriesMetadataMap};
use crate::layout::drawable::{DataState, DrawableState, Paint, PaintContext};
use crate::render::Renderer;

/// Capabilities a layout node opts into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Pure container; owns a rectangle and optionally a child grid.
    Flex,
    /// Paintable node without its own data series.
    Drawable,
    /// Paintable node that owns data series and their screen-space mapping.
    DataDrawable,
}

#[derive(Debug)]
enum NodeContent {
    Flex,
    Drawable(DrawableState),
    DataDrawable(DrawableState, DataState),
}

/// One element of the layout tree: a rectangle, an ordered grid of child
/// nodes (rows of columns), and the staleness flags driving the repaint
/// protocol.
#[derive(Debug)]
pub struct LayoutNode {
    rect: Rect,
    layout_changed: bool,
    grid: Vec<Vec<LayoutNode>>,
    content: NodeContent,
}

impl LayoutNode {
    /// Container node with no paint behavior of its own.
    #[must_use]
    pub fn flex() -> Self {
        Self::with_content(NodeContent::Flex)
    }

    /// Paintable node; repaints whenever its paint-dirty or layout-changed
    /// flag is set.
    #[must_use]
    pub fn drawable(painter: Box<dyn Paint>) -> Self {
        Self::with_content(NodeContent::Drawable(DrawableState::new(painter)))
    }

    /// Paintable node that owns series data and keeps a screen-space mapping
    /// of it, recomputed lazily when the coordinate state moves.
    #[must_use]
    pub fn data_drawable(painter: Box<dyn Paint>) -> Self {
        Self::with_content(NodeContent::DataDrawable(
            DrawableState::new(painter),
            DataState::default(),
        ))
    }

    /// Attaches a child grid: rows of columns, laid out top-to-bottom and
    /// left-to-right.
    #[must_use]
    pub fn with_grid(mut self, grid: Vec<Vec<LayoutNode>>) -> Self {
        self.grid = grid;
        self
    }

    fn with_content(content: NodeContent) -> Self {
        Self {
            rect: Rect::ZERO,
            layout_changed: false,
            grid: Vec::new(),
            content,
        }
    }

    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self.content {
            NodeContent::Flex => NodeKind::Flex,
            NodeContent::Drawable(_) => NodeKind::Drawable,
            NodeContent::DataDrawable(..) => NodeKind::DataDrawable,
        }
    }

    #[must_use]
    pub fn is_paintable(&self) -> bool {
        self.drawable_state().is_some()
    }

    #[must_use]
    pub fn is_data_bearing(&self) -> bool {
        matches!(self.content, NodeContent::DataDrawable(..))
    }

    #[must_use]
    pub fn layout_rect(&self) -> Rect {
        self.rect
    }

    #[must_use]
    pub fn layout_changed(&self) -> bool {
        self.layout_changed
    }

    #[must_use]
    pub fn is_paint_dirty(&self) -> bool {
        self.drawable_state()
            .map(|state| state.paint_dirty)
            .unwrap_or(false)
    }

    /// Render-group key of the attached painter, for paintable nodes.
    #[must_use]
    pub fn group_key(&self) -> Option<&'static str> {
        self.drawable_state().map(|state| state.painter.group_key())
    }

    #[must_use]
    pub fn grid(&self) -> &[Vec<LayoutNode>] {
        &self.grid
    }

    /// Screen-space series from the latest transform pass. Empty for nodes
    /// without data or before the first redraw.
    #[must_use]
    pub fn data_series(&self) -> &[DataInternalSeries] {
        match &self.content {
            NodeContent::DataDrawable(_, data) => &data.series,
            _ => &[],
        }
    }

    fn drawable_state(&self) -> Option<&DrawableState> {
        match &self.content {
            NodeContent::Flex => None,
            NodeContent::Drawable(state) | NodeContent::DataDrawable(state, _) => Some(state),
        }
    }

    fn drawable_state_mut(&mut self) -> Option<&mut DrawableState> {
        match &mut self.content {
            NodeContent::Flex => None,
            NodeContent::Drawable(state) | NodeContent::DataDrawable(state, _) => Some(state),
        }
    }

    /// Assigns a new rectangle, marking geometry changed only when it
    /// actually differs.
    pub(crate) fn set_layout_rect(&mut self, rect: Rect) {
        if self.rect != rect {
            self.layout_changed = true;
        }
        self.rect = rect;
    }

    /// Partitions this node's rectangle evenly among its grid: rows split
    /// the height, each row's columns split the width. Children with their
    /// own grids subdivide recursively; leaves simply receive their
    /// rectangle.
    pub fn relayout(&mut self) {
        let row_count = self.grid.len();
        if row_count == 0 {
            return;
        }

        let row_height = self.rect.height / row_count as f64;
        let rect = self.rect;
        for (row_index, row) in self.grid.iter_mut().enumerate() {
            let column_count = row.len();
            if column_count == 0 {
                continue;
            }
            let column_width = rect.width / column_count as f64;
            let y = rect.y + row_height * row_index as f64;
            for (column_index, child) in row.iter_mut().enumerate() {
                let x = rect.x + column_width * column_index as f64;
                child.set_layout_rect(Rect::new(x, y, column_width, row_height));
                child.relayout();
            }
        }
    }

    /// Visits every descendant breadth-first: this node's grid row-major,
    /// left-to-right, before any child's own grid. Driven by an explicit
    /// worklist so the sequence is finite and restartable.
    pub(crate) fn for_each_descendant_mut(&mut self, mut visit: impl FnMut(&mut LayoutNode)) {
        let mut queue: VecDeque<&mut LayoutNode> = self.grid.iter_mut().flatten().collect();
        while let Some(node) = queue.pop_front() {
            visit(&mut *node);
            queue.extend(node.grid.iter_mut().flatten());
        }
    }

    /// First descendant satisfying `predicate`, in breadth-first order.
    #[must_use]
    pub fn find_descendant_where(
        &self,
        mut predicate: impl FnMut(&LayoutNode) -> bool,
    ) -> Option<&LayoutNode> {
        let mut queue: VecDeque<&LayoutNode> = self.grid.iter().flatten().collect();
        while let Some(node) = queue.pop_front() {
            if predicate(node) {
                return Some(node);
            }
            queue.extend(node.grid.iter().flatten());
        }
        None
    }

    /// Mutable variant of [`find_descendant_where`](Self::find_descendant_where).
    #[must_use]
    pub fn find_descendant_where_mut(
        &mut self,
        mut predicate: impl FnMut(&LayoutNode) -> bool,
    ) -> Option<&mut LayoutNode> {
        let mut queue: VecDeque<&mut LayoutNode> = self.grid.iter_mut().flatten().collect();
        while let Some(node) = queue.pop_front() {
            if predicate(&*node) {
                return Some(node);
            }
            queue.extend(node.grid.iter_mut().flatten());
        }
        None
    }

    /// Forces a repaint of this node on the next redraw pass. No-op for pure
    /// containers.
    pub fn mark_as_paint_dirty(&mut self) {
        if let Some(state) = self.drawable_state_mut() {
            state.paint_dirty = true;
        }
    }

    /// Whether the cached coordinate identifier no longer matches the
    /// coordinator. Always `false` for pure containers.
    #[must_use]
    pub fn is_coordinate_stale(&self, coordinator: &Coordinator) -> bool {
        self.drawable_state()
            .map(|state| state.is_coordinate_stale(coordinator))
            .unwrap_or(false)
    }

    /// Marks this node paint-dirty when its cached coordinate identifier is
    /// stale. For nodes whose appearance depends on coordinate state without
    /// owning series data; such nodes advance the identifier themselves via
    /// [`update_coordinate_identifier`](Self::update_coordinate_identifier)
    /// once they have repainted.
    pub fn mark_as_paint_dirty_if_coordinate_stale(&mut self, coordinator: &Coordinator) {
        if self.is_coordinate_stale(coordinator) {
            self.mark_as_paint_dirty();
        }
    }

    /// Records the coordinator's current identifier as consumed.
    pub fn update_coordinate_identifier(&mut self, coordinator: &Coordinator) {
        let identifier = coordinator.update_identifier();
        if let Some(state) = self.drawable_state_mut() {
            state.coordinate_identifier = Some(identifier);
        }
    }

    /// Drops the cached coordinate identifier so the next transform pass
    /// recomputes unconditionally.
    pub fn clear_coordinate_identifier(&mut self) {
        if let Some(state) = self.drawable_state_mut() {
            state.coordinate_identifier = None;
        }
    }

    /// Replaces this node's raw series wholesale and invalidates the cached
    /// screen-space mapping. Recompute and repaint happen lazily on the next
    /// redraw pass. Returns whether this node accepts series data at all.
    pub fn set_data(&mut self, series: Vec<DataSeries>) -> bool {
        match &mut self.content {
            NodeContent::DataDrawable(drawable, data) => {
                drawable.coordinate_identifier = None;
                data.raw = series;
                true
            }
            _ => false,
        }
    }

    /// Recomputes the screen-space mapping of every owned series unless the
    /// cached coordinate identifier already matches the coordinator. A
    /// recompute replaces the derived series wholesale and marks the node
    /// paint-dirty.
    pub(crate) fn transform_if_stale(&mut self, coordinator: &Coordinator) {
        let rect = self.rect;
        let NodeContent::DataDrawable(drawable, data) = &mut self.content else {
            return;
        };
        if !drawable.is_coordinate_stale(coordinator) {
            return;
        }

        #[cfg(feature = "parallel-transform")]
        let series: Vec<DataInternalSeries> = data
            .raw
            .par_iter()
            .map(|datum| transform_series(coordinator, rect, datum))
            .collect();
        #[cfg(not(feature = "parallel-transform"))]
        let series: Vec<DataInternalSeries> = data
            .raw
            .iter()
            .map(|datum| transform_series(coordinator, rect, datum))
            .collect();

        trace!(
            series = series.len(),
            identifier = coordinator.update_identifier(),
            "recomputed screen-space series"
        );
        data.series = series;
        drawable.coordinate_identifier = Some(coordinator.update_identifier());
        drawable.paint_dirty = true;
    }

    /// Repaints this node through the renderer when its paint-dirty or
    /// layout-changed flag is set, then clears both flags. No-op for pure
    /// containers and for clean nodes.
    pub(crate) fn redraw_if_needed(
        &mut self,
        coordinator: &Coordinator,
        metadata: &SeriesMetadataMap,
        renderer: &mut dyn Renderer,
    ) {
        let rect = self.rect;
        let layout_changed = self.layout_changed;
        let (drawable, series): (&mut DrawableState, &[DataInternalSeries]) =
            match &mut self.content {
                NodeContent::Flex => return,
                NodeContent::Drawable(state) => (state, &[]),
                NodeContent::DataDrawable(state, data) => (state, &data.series),
            };
        if !drawable.paint_dirty && !layout_changed {
            return;
        }

        let group_key = drawable.painter.group_key();
        let painter = &mut drawable.painter;
        renderer.render_group(group_key, &mut |frame| {
            painter.paint(PaintContext {
                rect,
                series,
                metadata,
                coordinator,
                frame,
            });
        });

        drawable.paint_dirty = false;
        self.layout_changed = false;
    }
}

fn transform_series(coordinator: &Coordinator, rect: Rect, datum: &DataSeries) -> DataInternalSeries {
    let mut paths = Vec::with_capacity(datum.points.len() * 2);
    for point in &datum.points {
        let (x, y) = coordinator.get_view_coordinate(rect, *point);
        paths.push(x as f32);
        paths.push(y as f32);
    }
    DataInternalSeries::new(datum.id.clone(), paths)
}

#[cfg(test)]
mod tests {
    use super::{LayoutNode, NodeKind};
    use crate::core::coordinator::Coordinator;
    use crate::core::types::{DataPoint, DataSeries, Rect};
    use crate::layout::drawable::{Paint, PaintContext};

    struct TestPainter(&'static str);

    impl Paint for TestPainter {
        fn group_key(&self) -> &'static str {
            self.0
        }

        fn paint(&mut self, _ctx: PaintContext<'_>) {}
    }

    fn drawable(key: &'static str) -> LayoutNode {
        LayoutNode::drawable(Box::new(TestPainter(key)))
    }

    #[test]
    fn relayout_splits_rows_then_columns() {
        let mut node = LayoutNode::flex().with_grid(vec![
            vec![LayoutNode::flex(), LayoutNode::flex()],
            vec![LayoutNode::flex()],
        ]);
        node.set_layout_rect(Rect::new(0.0, 0.0, 100.0, 80.0));
        node.relayout();

        let grid = node.grid();
        assert_eq!(grid[0][0].layout_rect(), Rect::new(0.0, 0.0, 50.0, 40.0));
        assert_eq!(grid[0][1].layout_rect(), Rect::new(50.0, 0.0, 50.0, 40.0));
        assert_eq!(grid[1][0].layout_rect(), Rect::new(0.0, 40.0, 100.0, 40.0));
    }

    #[test]
    fn set_layout_rect_marks_change_only_when_rect_differs() {
        let mut node = LayoutNode::flex();
        assert!(!node.layout_changed());

        node.set_layout_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(node.layout_changed());

        let mut unchanged = LayoutNode::flex();
        unchanged.set_layout_rect(Rect::ZERO);
        assert!(!unchanged.layout_changed());
    }

    #[test]
    fn descendants_visit_breadth_first_row_major() {
        let nested = LayoutNode::flex().with_grid(vec![vec![drawable("c"), drawable("d")]]);
        let mut root = LayoutNode::flex().with_grid(vec![
            vec![drawable("a"), nested],
            vec![drawable("b")],
        ]);

        let mut visited = Vec::new();
        root.for_each_descendant_mut(|node| visited.push(node.group_key()));
        assert_eq!(
            visited,
            vec![Some("a"), None, Some("b"), Some("c"), Some("d")]
        );
    }

    #[test]
    fn find_descendant_prefers_shallow_matches() {
        let deep = LayoutNode::flex().with_grid(vec![vec![drawable("deep")]]);
        let root = LayoutNode::flex().with_grid(vec![vec![deep, drawable("shallow")]]);

        let found = root
            .find_descendant_where(|node| node.kind() == NodeKind::Drawable)
            .expect("a drawable exists");
        assert_eq!(found.group_key(), Some("shallow"));
    }

    #[test]
    fn set_data_invalidates_cached_coordinates_without_transforming() {
        let mut coordinator = Coordinator::new();
        coordinator.set_view_box_rect(Rect::new(0.0, 0.0, 1.0, 1.0));

        let mut node = LayoutNode::data_drawable(Box::new(TestPainter("series")));
        node.set_layout_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        node.transform_if_stale(&coordinator);
        assert!(!node.is_coordinate_stale(&coordinator));

        let accepted = node.set_data(vec![DataSeries::new(
            "foo",
            vec![DataPoint::new(0.0, 0.0)],
        )]);
        assert!(accepted);
        assert!(node.is_coordinate_stale(&coordinator));
        assert!(node.data_series().is_empty());

        node.transform_if_stale(&coordinator);
        assert_eq!(node.data_series().len(), 1);
        assert!(node.is_paint_dirty());
    }

    #[test]
    fn flex_nodes_reject_series_data() {
        let mut node = LayoutNode::flex();
        assert!(!node.set_data(vec![DataSeries::new("foo", Vec::new())]));
    }

    #[test]
    fn transform_is_a_no_op_when_identifier_matches() {
        let coordinator = Coordinator::new();
        let mut node = LayoutNode::data_drawable(Box::new(TestPainter("series")));
        node.set_layout_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        node.set_data(vec![DataSeries::new("foo", vec![DataPoint::new(0.5, 0.5)])]);

        node.transform_if_stale(&coordinator);
        let first = node.data_series().to_vec();
        node.transform_if_stale(&coordinator);
        assert_eq!(node.data_series(), first.as_slice());
    }
}
