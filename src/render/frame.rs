use crate::error::ChartResult;
use crate::render::{LinePrimitive, PolylinePrimitive, RectPrimitive};

/// Primitive sink for one render group's draw pass.
///
/// A renderer hands a fresh frame to each dirty node; whatever the node pushes
/// replaces the group's previous content wholesale.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupFrame {
    pub lines: Vec<LinePrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub rects: Vec<RectPrimitive>,
}

impl GroupFrame {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.lines.push(line);
    }

    pub fn push_polyline(&mut self, polyline: PolylinePrimitive) {
        self.polylines.push(polyline);
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.rects.push(rect);
    }

    pub fn validate(&self) -> ChartResult<()> {
        for line in &self.lines {
            line.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.polylines.is_empty() && self.rects.is_empty()
    }
}
