use std::collections::HashSet;

use crate::ir::PaneId;

use super::grouping::order_for_stack;
use super::types::SortNode;

/// Flattens an ordered forest into the navigation order.
///
/// Iterative depth-first walk over an explicit stack. `forest` must already
/// be in stack order (see [`order_for_stack`]); children of every group are
/// put into the same order before being pushed, so each level is visited
/// nearest-origin first.
pub(super) fn linearize(forest: Vec<SortNode>) -> Vec<PaneId> {
    let mut stack = forest;
    let mut visited: HashSet<PaneId> = HashSet::new();
    let mut order = Vec::new();

    while let Some(node) = stack.pop() {
        match node {
            SortNode::Leaf { pane_id, .. } => {
                if visited.contains(&pane_id) {
                    continue;
                }
                visited.insert(pane_id.clone());
                order.push(pane_id);
            }
            SortNode::Row { mut children, .. } | SortNode::Col { mut children, .. } => {
                order_for_stack(&mut children);
                stack.extend(children);
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::ir::Pane;
    use crate::sort::grouping::{build_leaves, group_and_order};

    fn sort(panes: Vec<Pane>) -> Vec<PaneId> {
        linearize(group_and_order(build_leaves(&panes.into())))
    }

    #[test]
    fn row_members_stay_adjacent() {
        let order = sort(vec![
            Pane::new("c", 0.0, 200.0, 100.0, 100.0),
            Pane::new("b", 50.0, 0.0, 100.0, 100.0),
            Pane::new("a", 0.0, 0.0, 100.0, 100.0),
        ]);
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn separate_clusters_follow_manhattan_distance() {
        let order = sort(vec![
            Pane::new("far", 2000.0, 2000.0, 100.0, 100.0),
            Pane::new("mid", 1000.0, 0.0, 100.0, 100.0),
            Pane::new("near", 0.0, 500.0, 100.0, 100.0),
        ]);
        assert_eq!(order, vec!["near", "mid", "far"]);
    }

    #[test]
    fn grid_is_visited_row_by_row() {
        let mut panes = Vec::new();
        for row in 0..3 {
            for col in 0..3 {
                panes.push(Pane::new(
                    format!("r{row}c{col}"),
                    col as f32 * 150.0,
                    row as f32 * 150.0,
                    100.0,
                    100.0,
                ));
            }
        }
        panes.reverse();
        let order = sort(panes);
        assert_eq!(
            order,
            vec!["r0c0", "r0c1", "r0c2", "r1c0", "r1c1", "r1c2", "r2c0", "r2c1", "r2c2"]
        );
    }

    #[test]
    fn duplicate_leaves_are_emitted_once() {
        let leaf = SortNode::Leaf {
            pane_id: "a".to_string(),
            bounds: Rect::new(0.0, 0.0, 1.0, 1.0),
        };
        let order = linearize(vec![leaf.clone(), leaf]);
        assert_eq!(order, vec!["a"]);
    }
}
