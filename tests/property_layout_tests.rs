use linechart_core::core::types::Rect;
use linechart_core::layout::{LayoutNode, RootLayout};
use linechart_core::render::NullRenderer;
use proptest::prelude::*;

fn grid_of_flex(rows: usize, columns: usize) -> Vec<Vec<LayoutNode>> {
    (0..rows)
        .map(|_| (0..columns).map(|_| LayoutNode::flex()).collect())
        .collect()
}

proptest! {
    #[test]
    fn children_tile_the_parent_exactly(
        rows in 1usize..5,
        columns in 1usize..5,
        x in -1_000.0f64..1_000.0,
        y in -1_000.0f64..1_000.0,
        width in 1.0f64..4_000.0,
        height in 1.0f64..4_000.0,
    ) {
        let rect = Rect::new(x, y, width, height);
        let root = RootLayout::new(NullRenderer::new(), grid_of_flex(rows, columns), rect);

        let epsilon = 1e-9 * width.max(height).max(1.0);
        let grid = root.node().grid();
        prop_assert_eq!(grid.len(), rows);

        for (row_index, row) in grid.iter().enumerate() {
            prop_assert_eq!(row.len(), columns);
            let expected_y = y + height / rows as f64 * row_index as f64;
            let mut cursor = x;
            for child in row {
                let child_rect = child.layout_rect();
                prop_assert!((child_rect.x - cursor).abs() <= epsilon);
                prop_assert!((child_rect.y - expected_y).abs() <= epsilon);
                prop_assert!((child_rect.width - width / columns as f64).abs() <= epsilon);
                prop_assert!((child_rect.height - height / rows as f64).abs() <= epsilon);
                cursor = child_rect.x + child_rect.width;
            }
            // The last child's right edge closes the row without gap or overlap.
            prop_assert!((cursor - (x + width)).abs() <= epsilon);
        }
    }

    #[test]
    fn nested_grids_subdivide_their_own_cell_only(
        width in 1.0f64..2_000.0,
        height in 1.0f64..2_000.0,
    ) {
        let nested = LayoutNode::flex()
            .with_grid(vec![vec![LayoutNode::flex(), LayoutNode::flex()]]);
        let root = RootLayout::new(
            NullRenderer::new(),
            vec![vec![LayoutNode::flex(), nested]],
            Rect::new(0.0, 0.0, width, height),
        );

        let epsilon = 1e-9 * width.max(height);
        let outer = root.node().grid()[0][1].layout_rect();
        let inner = root.node().grid()[0][1].grid();
        let left = inner[0][0].layout_rect();
        let right = inner[0][1].layout_rect();

        prop_assert!((left.x - outer.x).abs() <= epsilon);
        prop_assert!((left.width - outer.width / 2.0).abs() <= epsilon);
        prop_assert!((right.x - (outer.x + outer.width / 2.0)).abs() <= epsilon);
        prop_assert!((right.x + right.width - (outer.x + outer.width)).abs() <= epsilon);
        prop_assert!((left.height - outer.height).abs() <= epsilon);
        prop_assert!((right.height - outer.height).abs() <= epsilon);
    }

    #[test]
    fn relayout_is_idempotent(
        rows in 1usize..4,
        columns in 1usize..4,
        width in 1.0f64..1_000.0,
        height in 1.0f64..1_000.0,
    ) {
        let rect = Rect::new(0.0, 0.0, width, height);
        let mut root = RootLayout::new(NullRenderer::new(), grid_of_flex(rows, columns), rect);
        let first = root.layout_snapshot();

        root.on_resize(rect);
        let second = root.layout_snapshot();
        prop_assert_eq!(first, second);
    }
}
