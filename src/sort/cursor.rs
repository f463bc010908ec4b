use crate::ir::{Direction, PaneId, PaneSnapshot, Selection, Viewport};

/// Wrap-around step through an order of `len` entries.
pub(super) fn step_index(index: usize, len: usize, direction: Direction) -> usize {
    match direction {
        Direction::Next => {
            if index + 1 >= len {
                0
            } else {
                index + 1
            }
        }
        Direction::Previous => {
            if index == 0 {
                len.saturating_sub(1)
            } else {
                index - 1
            }
        }
    }
}

/// With exactly one pane selected, the neighbour of that pane in `order`.
pub(super) fn selection_neighbor(
    order: &[PaneId],
    selection: &Selection,
    direction: Direction,
) -> Option<usize> {
    if selection.len() != 1 {
        return None;
    }
    let index = order.iter().position(|id| selection.contains(id))?;
    Some(step_index(index, order.len(), direction))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchPass {
    TopLevelInView,
    AnyInView,
    Everywhere,
}

const SEARCH_PASSES: [SearchPass; 3] = [
    SearchPass::TopLevelInView,
    SearchPass::AnyInView,
    SearchPass::Everywhere,
];

/// Nearest pane to the viewport center, widening the candidate set until
/// some pass finds one. Ties go to the earlier pane in `order`.
pub(super) fn closest_index(
    order: &[PaneId],
    panes: &PaneSnapshot,
    viewport: &Viewport,
) -> Option<usize> {
    for pass in SEARCH_PASSES {
        let mut best: Option<(usize, f32)> = None;
        for (index, id) in order.iter().enumerate() {
            let Some(pane) = panes.get(id) else {
                continue;
            };
            let eligible = match pass {
                SearchPass::TopLevelInView => pane.is_top_level() && viewport.fully_contains(pane),
                SearchPass::AnyInView => viewport.fully_contains(pane),
                SearchPass::Everywhere => true,
            };
            if !eligible {
                continue;
            }
            let distance = viewport
                .pane_rect(pane)
                .origin()
                .distance_squared(viewport.center);
            // NaN positions rank behind every real distance.
            let distance = if distance.is_nan() { f32::INFINITY } else { distance };
            if best.is_none_or(|(_, current)| distance < current) {
                best = Some((index, distance));
            }
        }
        if let Some((index, _)) = best {
            log::trace!("nearest pane resolved by {pass:?} pass at index {index}");
            return Some(index);
        }
    }
    None
}
