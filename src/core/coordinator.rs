use crate::core::scale::{LinearScale, Scale};
use crate::core::types::{DataPoint, Rect};

/// Shared coordinate state for one chart instance.
///
/// Owns the data-space view box and the screen-space container rectangle, and
/// converts data points into screen coordinates for a specific layout
/// rectangle. Every mutation bumps an update identifier; nodes cache the
/// identifier they last transformed against and treat any mismatch as stale.
#[derive(Debug, Clone, PartialEq)]
pub struct Coordinator {
    view_box_rect: Rect,
    dom_container_rect: Rect,
    update_identifier: u64,
    scale: LinearScale,
}

impl Default for Coordinator {
    fn default() -> Self {
        Self {
            view_box_rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            dom_container_rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            update_identifier: 0,
            scale: LinearScale,
        }
    }
}

impl Coordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier that strictly increases on every view-box or container
    /// mutation. Equality with a cached value proves cached coordinates are
    /// still current.
    #[must_use]
    pub fn update_identifier(&self) -> u64 {
        self.update_identifier
    }

    #[must_use]
    pub fn view_box_rect(&self) -> Rect {
        self.view_box_rect
    }

    #[must_use]
    pub fn dom_container_rect(&self) -> Rect {
        self.dom_container_rect
    }

    pub fn set_view_box_rect(&mut self, rect: Rect) {
        self.view_box_rect = rect;
        self.update_identifier += 1;
    }

    pub fn set_dom_container_rect(&mut self, rect: Rect) {
        self.dom_container_rect = rect;
        self.update_identifier += 1;
    }

    /// Screen coordinate of `point` when the view box is projected onto
    /// `layout_rect` (the rectangle of the node being rendered, not the full
    /// container).
    ///
    /// The y axis is inverted here, and only here: increasing data-y maps to
    /// decreasing screen-y.
    #[must_use]
    pub fn get_view_coordinate(&self, layout_rect: Rect, point: DataPoint) -> (f64, f64) {
        let (view_left, view_right) = self.view_box_rect.x_bounds();
        let (view_top, view_bottom) = self.view_box_rect.y_bounds();
        let (rect_left, rect_right) = layout_rect.x_bounds();
        let (rect_top, rect_bottom) = layout_rect.y_bounds();

        let x = self
            .scale
            .forward((view_left, view_right), (rect_left, rect_right), point.x);
        let y = self
            .scale
            .forward((view_top, view_bottom), (rect_bottom, rect_top), point.y);
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinator;
    use crate::core::types::{DataPoint, Rect};

    #[test]
    fn update_identifier_increases_on_every_mutation() {
        let mut coordinator = Coordinator::new();
        let before = coordinator.update_identifier();

        coordinator.set_view_box_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(coordinator.update_identifier(), before + 1);

        coordinator.set_dom_container_rect(Rect::new(0.0, 0.0, 640.0, 480.0));
        assert_eq!(coordinator.update_identifier(), before + 2);

        // Re-setting the same rect still counts as a mutation.
        coordinator.set_view_box_rect(Rect::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(coordinator.update_identifier(), before + 3);
    }

    #[test]
    fn view_coordinate_maps_into_layout_rect_with_inverted_y() {
        let mut coordinator = Coordinator::new();
        coordinator.set_view_box_rect(Rect::new(0.0, -50.0, 2.0, 100.0));
        coordinator.set_dom_container_rect(Rect::new(0.0, 0.0, 100.0, 100.0));

        let layout_rect = Rect::new(50.0, 0.0, 50.0, 100.0);
        assert_eq!(
            coordinator.get_view_coordinate(layout_rect, DataPoint::new(0.0, 0.0)),
            (50.0, 50.0)
        );
        assert_eq!(
            coordinator.get_view_coordinate(layout_rect, DataPoint::new(1.0, 1.0)),
            (75.0, 49.0)
        );
        assert_eq!(
            coordinator.get_view_coordinate(layout_rect, DataPoint::new(2.0, -1.0)),
            (100.0, 51.0)
        );
    }
}
