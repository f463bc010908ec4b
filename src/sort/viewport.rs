use crate::ir::{PaneId, PaneSnapshot, Viewport};

// Digit keys address visible panes 1..=9, with 0 standing for slot `slots`.

pub(super) fn nth_visible<'a>(
    order: &'a [PaneId],
    panes: &PaneSnapshot,
    viewport: &Viewport,
    n: usize,
    slots: usize,
) -> Option<&'a PaneId> {
    let mut counter = 0;
    for id in order {
        let Some(pane) = panes.get(id) else {
            continue;
        };
        if !viewport.overlaps(pane) {
            continue;
        }
        counter += 1;
        if counter == n || (n == 0 && counter == slots) {
            return Some(id);
        }
    }
    None
}

pub(super) fn visible_slot(
    order: &[PaneId],
    panes: &PaneSnapshot,
    viewport: &Viewport,
    target: &str,
    slots: usize,
) -> Option<usize> {
    let mut counter = 1;
    for id in order {
        let Some(pane) = panes.get(id) else {
            continue;
        };
        if !viewport.overlaps(pane) {
            continue;
        }
        if id == target {
            return Some(if counter == slots { 0 } else { counter });
        }
        counter += 1;
    }
    None
}
