mod frame;
mod null_renderer;
mod primitives;

pub use frame::GroupFrame;
pub use null_renderer::{GroupRenderRecord, NullRenderer};
pub use primitives::{Color, LinePrimitive, PolylinePrimitive, RectPrimitive};

/// Contract implemented by any rendering backend.
///
/// The layout engine calls `render_group` once per dirty node per redraw
/// pass. The backend must scope drawing under `group_key`, discard the
/// group's previous content, and replay whatever `draw` pushes into the
/// provided frame. Nothing else is assumed about how a backend turns
/// primitives into pixels.
pub trait Renderer {
    fn render_group(&mut self, group_key: &str, draw: &mut dyn FnMut(&mut GroupFrame));
}
