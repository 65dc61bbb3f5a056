use serde::{Deserialize, Serialize};

use crate::core::types::Rect;
use crate::error::{ChartError, ChartResult};
use crate::layout::node::{LayoutNode, NodeKind};

pub const LAYOUT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable picture of a layout subtree: node kinds, render-group keys,
/// and assigned rectangles. Diagnostic aid for hosts; carries no behavior
/// back into the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub kind: NodeKind,
    pub group_key: Option<String>,
    pub rect: Rect,
    pub grid: Vec<Vec<LayoutSnapshot>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub layout: LayoutSnapshot,
}

impl LayoutSnapshot {
    #[must_use]
    pub fn from_node(node: &LayoutNode) -> Self {
        Self {
            kind: node.kind(),
            group_key: node.group_key().map(str::to_owned),
            rect: node.layout_rect(),
            grid: node
                .grid()
                .iter()
                .map(|row| row.iter().map(Self::from_node).collect())
                .collect(),
        }
    }

    /// Number of nodes in the snapshot, this node included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self
            .grid
            .iter()
            .flatten()
            .map(Self::node_count)
            .sum::<usize>()
    }

    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = LayoutSnapshotJsonContractV1 {
            schema_version: LAYOUT_SNAPSHOT_JSON_SCHEMA_V1,
            layout: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize layout snapshot: {e}"))
        })
    }

    pub fn from_json_contract_v1_str(input: &str) -> ChartResult<Self> {
        let payload: LayoutSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse layout snapshot json: {e}"))
        })?;
        if payload.schema_version != LAYOUT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported layout snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.layout)
    }
}
