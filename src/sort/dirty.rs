use crate::ir::{Pane, PaneSnapshot};

/// Whether two observations of a pane describe the same relationship source:
/// same kind, editor identifier, pin state and current symbol range.
pub fn same_relationship_identity(a: &Pane, b: &Pane) -> bool {
    a.kind == b.kind
        && a.identifier == b.identifier
        && a.pinned == b.pinned
        && a.current_symbol_range == b.current_symbol_range
}

/// True when the pane set changed structurally since `cached`.
pub(super) fn relationships_stale(cached: &PaneSnapshot, incoming: &PaneSnapshot) -> bool {
    if cached.len() != incoming.len() {
        return true;
    }
    incoming.iter().any(|pane| match cached.get(&pane.id) {
        Some(previous) => !same_relationship_identity(previous, pane),
        None => true,
    })
}

/// True when dependency arrows drawn for `previous` may be out of date for
/// `current`: structural changes plus any move or resize.
pub fn arrows_need_refresh(previous: &PaneSnapshot, current: &PaneSnapshot) -> bool {
    if previous.len() != current.len() {
        return true;
    }
    current.iter().any(|pane| match previous.get(&pane.id) {
        Some(before) => {
            before.kind != pane.kind
                || before.x != pane.x
                || before.y != pane.y
                || before.width != pane.width
                || before.height != pane.height
                || before.pinned != pane.pinned
                || before.current_symbol_range != pane.current_symbol_range
        }
        None => true,
    })
}
