use tracing::debug;

use crate::core::coordinator::Coordinator;
use crate::core::types::{DataSeries, Rect, SeriesMetadataMap};
use crate::layout::node::LayoutNode;
use crate::layout::snapshot::LayoutSnapshot;
use crate::render::Renderer;

/// Root of one chart's layout tree.
///
/// Owns the tree, the shared [`Coordinator`], the shared series metadata map,
/// and the renderer. All mutation of descendant nodes flows through the entry
/// points here (or through a node handle obtained from
/// [`find_child_where_mut`](Self::find_child_where_mut)); siblings never
/// touch each other's state.
pub struct RootLayout<R: Renderer> {
    coordinator: Coordinator,
    metadata: SeriesMetadataMap,
    renderer: R,
    node: LayoutNode,
}

impl<R: Renderer> RootLayout<R> {
    /// Builds the tree from a row-major content grid and lays it out into
    /// `rect`.
    #[must_use]
    pub fn new(renderer: R, content_grid: Vec<Vec<LayoutNode>>, rect: Rect) -> Self {
        let mut root = Self {
            coordinator: Coordinator::new(),
            metadata: SeriesMetadataMap::new(),
            renderer,
            node: LayoutNode::flex().with_grid(content_grid),
        };
        root.on_resize(rect);
        root
    }

    /// Assigns a new root rectangle and recomputes every descendant's
    /// sub-rectangle, so no stale cached geometry survives the resize.
    pub fn on_resize(&mut self, rect: Rect) {
        debug!(
            width = rect.width,
            height = rect.height,
            "resizing layout tree"
        );
        self.node.set_layout_rect(rect);
        self.node.relayout();
        self.node.for_each_descendant_mut(LayoutNode::relayout);
    }

    /// Two-phase redraw pass.
    ///
    /// Phase 1 recomputes the screen-space mapping of every data-bearing
    /// descendant whose coordinates went stale; phase 2 repaints every
    /// paintable descendant whose paint-dirty or layout-changed flag is set.
    /// Phase 1 runs to completion first: its recomputes mark nodes
    /// paint-dirty, and phase 2 must observe those marks within the same
    /// pass.
    pub fn redraw(&mut self) {
        let Self {
            coordinator,
            metadata,
            renderer,
            node,
        } = self;
        let renderer: &mut dyn Renderer = renderer;

        node.for_each_descendant_mut(|descendant| descendant.transform_if_stale(coordinator));
        node.for_each_descendant_mut(|descendant| {
            descendant.redraw_if_needed(coordinator, metadata, renderer);
        });
    }

    /// Hands `series` to the first data-bearing descendant, in breadth-first
    /// order. Exactly one node receives the data; returns `false` (and drops
    /// the series) when the tree has no data-bearing node.
    pub fn set_data(&mut self, series: Vec<DataSeries>) -> bool {
        match self
            .node
            .find_descendant_where_mut(LayoutNode::is_data_bearing)
        {
            Some(node) => {
                node.set_data(series);
                true
            }
            None => {
                debug!("no data-bearing layout node; series dropped");
                false
            }
        }
    }

    /// Forces every paintable descendant to repaint on the next redraw pass.
    pub fn mark_as_paint_dirty(&mut self) {
        self.node
            .for_each_descendant_mut(LayoutNode::mark_as_paint_dirty);
    }

    /// First descendant satisfying `predicate`, breadth-first.
    #[must_use]
    pub fn find_child_where(
        &self,
        predicate: impl FnMut(&LayoutNode) -> bool,
    ) -> Option<&LayoutNode> {
        self.node.find_descendant_where(predicate)
    }

    /// Mutable variant of [`find_child_where`](Self::find_child_where).
    #[must_use]
    pub fn find_child_where_mut(
        &mut self,
        predicate: impl FnMut(&LayoutNode) -> bool,
    ) -> Option<&mut LayoutNode> {
        self.node.find_descendant_where_mut(predicate)
    }

    /// Serializable picture of the current rectangle tree.
    #[must_use]
    pub fn layout_snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::from_node(&self.node)
    }

    #[must_use]
    pub fn node(&self) -> &LayoutNode {
        &self.node
    }

    /// Splits the root into its shared coordinator and the mutable node
    /// tree, for per-node operations that need both at once (e.g. re-arming
    /// a coordinate-dependent node after a view-box move).
    #[must_use]
    pub fn coordinator_and_tree_mut(&mut self) -> (&Coordinator, &mut LayoutNode) {
        (&self.coordinator, &mut self.node)
    }

    #[must_use]
    pub fn coordinator(&self) -> &Coordinator {
        &self.coordinator
    }

    #[must_use]
    pub fn coordinator_mut(&mut self) -> &mut Coordinator {
        &mut self.coordinator
    }

    #[must_use]
    pub fn metadata(&self) -> &SeriesMetadataMap {
        &self.metadata
    }

    #[must_use]
    pub fn metadata_mut(&mut self) -> &mut SeriesMetadataMap {
        &mut self.metadata
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
