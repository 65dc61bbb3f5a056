use std::fmt;

use crate::core::coordinator::Coordinator;
use crate::core::types::{DataInternalSeries, DataSeries, Rect, SeriesMetadataMap};
use crate::render::GroupFrame;

/// Paint routine a host attaches to a paintable layout node.
///
/// Implementations receive the node's current geometry and derived series and
/// push primitives into the node's render group. They never talk to a backend
/// directly and never decide *whether* to paint; the dirty-tracking protocol
/// owns that decision.
pub trait Paint {
    /// Stable key identifying this node kind's render group. The renderer
    /// clears and redraws one group per dirty node.
    fn group_key(&self) -> &'static str;

    /// Issues primitive draw commands for the node's current state.
    fn paint(&mut self, ctx: PaintContext<'_>);
}

/// Everything a [`Paint`] implementation may read or draw into.
pub struct PaintContext<'a> {
    /// Rectangle owned by the node being painted.
    pub rect: Rect,
    /// Screen-space series from the latest transform pass; empty for nodes
    /// that hold no data.
    pub series: &'a [DataInternalSeries],
    /// Shared per-series presentation hints, keyed by series id.
    pub metadata: &'a SeriesMetadataMap,
    /// Shared coordinate state, for nodes that derive geometry from the
    /// current view box.
    pub coordinator: &'a Coordinator,
    /// Primitive sink for this node's render group.
    pub frame: &'a mut GroupFrame,
}

/// Repaint bookkeeping for a paintable node.
pub(crate) struct DrawableState {
    pub(crate) paint_dirty: bool,
    pub(crate) coordinate_identifier: Option<u64>,
    pub(crate) painter: Box<dyn Paint>,
}

impl DrawableState {
    pub(crate) fn new(painter: Box<dyn Paint>) -> Self {
        Self {
            // A node that has never painted must paint on the first pass.
            paint_dirty: true,
            coordinate_identifier: None,
            painter,
        }
    }

    pub(crate) fn is_coordinate_stale(&self, coordinator: &Coordinator) -> bool {
        self.coordinate_identifier != Some(coordinator.update_identifier())
    }
}

impl fmt::Debug for DrawableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawableState")
            .field("paint_dirty", &self.paint_dirty)
            .field("coordinate_identifier", &self.coordinate_identifier)
            .field("group_key", &self.painter.group_key())
            .finish()
    }
}

/// Raw and derived series owned by a data-bearing node.
#[derive(Debug, Default)]
pub(crate) struct DataState {
    pub(crate) raw: Vec<DataSeries>,
    pub(crate) series: Vec<DataInternalSeries>,
}
