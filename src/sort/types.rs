use crate::geometry::Rect;
use crate::ir::{Pane, PaneId};

/// Node of the transient clustering tree built for one sort pass.
///
/// Trees are rebuilt from scratch on every pass and never shared between
/// passes, so the variants own their children outright.
#[derive(Debug, Clone, PartialEq)]
pub enum SortNode {
    Leaf {
        pane_id: PaneId,
        bounds: Rect,
    },
    /// Nodes whose vertical extents overlap.
    Row {
        children: Vec<SortNode>,
        bounds: Rect,
    },
    /// Nodes whose horizontal extents overlap.
    Col {
        children: Vec<SortNode>,
        bounds: Rect,
    },
}

impl SortNode {
    pub fn leaf(pane: &Pane) -> Self {
        SortNode::Leaf {
            pane_id: pane.id.clone(),
            bounds: pane.sort_bounds(),
        }
    }

    pub fn bounds(&self) -> Rect {
        match self {
            SortNode::Leaf { bounds, .. }
            | SortNode::Row { bounds, .. }
            | SortNode::Col { bounds, .. } => *bounds,
        }
    }

    /// Manhattan distance of the node's origin from the canvas origin.
    pub fn origin_key(&self) -> f32 {
        let bounds = self.bounds();
        bounds.x + bounds.y
    }

    pub fn children(&self) -> &[SortNode] {
        match self {
            SortNode::Leaf { .. } => &[],
            SortNode::Row { children, .. } | SortNode::Col { children, .. } => children,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            SortNode::Leaf { .. } => "leaf",
            SortNode::Row { .. } => "row",
            SortNode::Col { .. } => "col",
        }
    }

    /// Pane ids under this node in child order.
    pub fn pane_ids(&self) -> Vec<&str> {
        let mut ids = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node {
                SortNode::Leaf { pane_id, .. } => ids.push(pane_id.as_str()),
                SortNode::Row { children, .. } | SortNode::Col { children, .. } => {
                    stack.extend(children.iter().rev());
                }
            }
        }
        ids
    }
}
