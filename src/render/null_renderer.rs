use indexmap::IndexMap;

use crate::render::{GroupFrame, Renderer};

/// Per-group record kept by [`NullRenderer`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupRenderRecord {
    pub render_count: usize,
    pub last_frame: GroupFrame,
    pub last_frame_valid: bool,
}

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced, and records how often each group was
/// rendered.
#[derive(Debug, Default)]
pub struct NullRenderer {
    groups: IndexMap<String, GroupRenderRecord>,
}

impl NullRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times the named group has been rendered so far.
    #[must_use]
    pub fn render_count(&self, group_key: &str) -> usize {
        self.groups
            .get(group_key)
            .map(|record| record.render_count)
            .unwrap_or(0)
    }

    /// Render invocations across all groups.
    #[must_use]
    pub fn total_render_count(&self) -> usize {
        self.groups.values().map(|record| record.render_count).sum()
    }

    #[must_use]
    pub fn last_frame(&self, group_key: &str) -> Option<&GroupFrame> {
        self.groups.get(group_key).map(|record| &record.last_frame)
    }

    #[must_use]
    pub fn group_keys(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }
}

impl Renderer for NullRenderer {
    fn render_group(&mut self, group_key: &str, draw: &mut dyn FnMut(&mut GroupFrame)) {
        let mut frame = GroupFrame::new();
        draw(&mut frame);

        let record = self.groups.entry(group_key.to_owned()).or_default();
        record.render_count += 1;
        record.last_frame_valid = frame.validate().is_ok();
        record.last_frame = frame;
    }
}
