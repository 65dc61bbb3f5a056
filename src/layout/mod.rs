mod drawable;
mod node;
mod root;
mod snapshot;

pub use drawable::{Paint, PaintContext};
pub use node::{LayoutNode, NodeKind};
pub use root::RootLayout;
pub use snapshot::{LAYOUT_SNAPSHOT_JSON_SCHEMA_V1, LayoutSnapshot, LayoutSnapshotJsonContractV1};
