use crate::geometry::Rect;
use crate::ir::PaneSnapshot;

use super::types::SortNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Axis {
    /// Row pass: sweep along y, merge on vertical overlap.
    Vertical,
    /// Column pass: sweep along x, merge on horizontal overlap.
    Horizontal,
}

impl Axis {
    fn start(self, bounds: &Rect) -> f32 {
        match self {
            Axis::Vertical => bounds.y,
            Axis::Horizontal => bounds.x,
        }
    }

    fn end(self, bounds: &Rect) -> f32 {
        match self {
            Axis::Vertical => bounds.y + bounds.height,
            Axis::Horizontal => bounds.x + bounds.width,
        }
    }
}

struct OpenGroup {
    children: Vec<SortNode>,
    bounds: Rect,
}

impl OpenGroup {
    fn start(node: SortNode) -> Self {
        let bounds = node.bounds();
        Self {
            children: vec![node],
            bounds,
        }
    }

    // Inclusive: a node starting exactly on the group's far edge still joins.
    fn accepts(&self, axis: Axis, bounds: &Rect) -> bool {
        axis.start(bounds) <= axis.end(&self.bounds)
    }

    fn push(&mut self, node: SortNode) {
        self.bounds = self.bounds.union(&node.bounds());
        self.children.push(node);
    }

    fn close(mut self, axis: Axis) -> SortNode {
        if self.children.len() == 1 {
            if let Some(only) = self.children.pop() {
                return only;
            }
        }
        match axis {
            Axis::Vertical => SortNode::Row {
                children: self.children,
                bounds: self.bounds,
            },
            Axis::Horizontal => SortNode::Col {
                children: self.children,
                bounds: self.bounds,
            },
        }
    }
}

pub(super) fn build_leaves(panes: &PaneSnapshot) -> Vec<SortNode> {
    panes.iter().map(SortNode::leaf).collect()
}

/// Single sweep along `axis`. Nodes are sorted by their leading edge and
/// greedily merged into the open group while they overlap it; single-child
/// groups collapse to the child itself.
pub(super) fn sweep(mut nodes: Vec<SortNode>, axis: Axis) -> Vec<SortNode> {
    // Snapshots may carry NaN or infinite coordinates.
    nodes.sort_by(|a, b| axis.start(&a.bounds()).total_cmp(&axis.start(&b.bounds())));

    let mut grouped = Vec::with_capacity(nodes.len());
    let mut open: Option<OpenGroup> = None;
    for node in nodes {
        match open.as_mut() {
            Some(group) if group.accepts(axis, &node.bounds()) => group.push(node),
            _ => {
                if let Some(closed) = open.replace(OpenGroup::start(node)) {
                    grouped.push(closed.close(axis));
                }
            }
        }
    }
    if let Some(closed) = open {
        grouped.push(closed.close(axis));
    }
    grouped
}

pub(super) fn group_by_row(nodes: Vec<SortNode>) -> Vec<SortNode> {
    sweep(nodes, Axis::Vertical)
}

pub(super) fn group_by_col(nodes: Vec<SortNode>) -> Vec<SortNode> {
    sweep(nodes, Axis::Horizontal)
}

/// Sorts by descending Manhattan key. The linearizer pops from the back, so
/// the node closest to the origin is visited first.
pub(super) fn order_for_stack(nodes: &mut [SortNode]) {
    nodes.sort_by(|a, b| b.origin_key().total_cmp(&a.origin_key()));
}

pub(super) fn group_and_order(nodes: Vec<SortNode>) -> Vec<SortNode> {
    let mut grouped = group_by_col(group_by_row(nodes));
    order_for_stack(&mut grouped);
    grouped
}
