mod cursor;
mod dirty;
mod grouping;
mod linearize;
mod types;
mod viewport;

pub use dirty::{arrows_need_refresh, same_relationship_identity};
pub use types::SortNode;

use crate::config::NavigationConfig;
use crate::ir::{Direction, Pane, PaneId, PaneSnapshot, Selection, SymbolRange, Viewport};
use crate::relationships::{RawRelationship, RelationshipGraph};

/// Flat navigation order for a snapshot, without any engine state.
pub fn sort_panes(panes: &PaneSnapshot) -> Vec<PaneId> {
    linearize::linearize(grouping::group_and_order(grouping::build_leaves(panes)))
}

/// Spatial navigation engine for one workspace.
///
/// Owns the last observed pane snapshot, the flat order derived from it, the
/// navigation cursor and the relationship graph. Viewport and selection are
/// read-only inputs passed on each call.
#[derive(Debug, Clone)]
pub struct SpatialSorter {
    config: NavigationConfig,
    panes: PaneSnapshot,
    order: Vec<PaneId>,
    current: Option<usize>,
    dirty: bool,
    relationships: RelationshipGraph,
}

impl Default for SpatialSorter {
    fn default() -> Self {
        Self::new(NavigationConfig::default())
    }
}

impl SpatialSorter {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            panes: PaneSnapshot::new(),
            order: Vec::new(),
            current: None,
            dirty: true,
            relationships: RelationshipGraph::new(),
        }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    pub fn panes(&self) -> &PaneSnapshot {
        &self.panes
    }

    /// Records a newly observed pane set and reports whether the relationship
    /// graph has to be rebuilt. The flat order is always marked dirty.
    pub fn should_regenerate_relationships(&mut self, panes: PaneSnapshot) -> bool {
        let stale = dirty::relationships_stale(&self.panes, &panes);
        self.panes = panes;
        self.dirty = true;
        stale
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Recomputes the flat order and forgets the cursor position.
    pub fn sort(&mut self) {
        self.order = sort_panes(&self.panes);
        self.dirty = false;
        self.current = None;
        log::debug!("sorted {} panes", self.order.len());
    }

    fn ensure_sorted(&mut self) {
        if self.dirty {
            self.sort();
        }
    }

    pub fn sorted_panes(&mut self) -> &[PaneId] {
        self.ensure_sorted();
        &self.order
    }

    /// Top-level grouping of the current snapshot, ordered for traversal.
    pub fn forest(&self) -> Vec<SortNode> {
        grouping::group_and_order(grouping::build_leaves(&self.panes))
    }

    /// Moves the cursor one step and returns the pane it lands on.
    ///
    /// Without a known position the cursor starts next to a single selected
    /// pane, or else at the pane nearest the viewport center.
    pub fn next(
        &mut self,
        direction: Direction,
        viewport: &Viewport,
        selection: &Selection,
    ) -> Option<&Pane> {
        self.ensure_sorted();
        if self.order.is_empty() {
            return None;
        }

        let index = match self.current {
            Some(index) => cursor::step_index(index, self.order.len(), direction),
            None => cursor::selection_neighbor(&self.order, selection, direction)
                .or_else(|| cursor::closest_index(&self.order, &self.panes, viewport))?,
        };
        self.current = Some(index);
        self.panes.get(&self.order[index])
    }

    pub fn current(&self) -> Option<&Pane> {
        let index = self.current?;
        self.order.get(index).and_then(|id| self.panes.get(id))
    }

    /// Forgets the cursor position; the next step re-resolves it.
    pub fn reset_index(&mut self) {
        self.current = None;
    }

    pub fn build_relationship_graph(&mut self, facts: &[RawRelationship]) -> &RelationshipGraph {
        self.relationships = RelationshipGraph::build(facts);
        &self.relationships
    }

    pub fn add_relationship_unconditionally(
        &mut self,
        source_ranges: Vec<SymbolRange>,
        from: impl Into<PaneId>,
        to: impl Into<PaneId>,
    ) {
        self.relationships
            .add_edge_unconditionally(source_ranges, from, to);
    }

    pub fn relationships(&self) -> &RelationshipGraph {
        &self.relationships
    }

    /// Pane bound to digit key `n` among panes visible in `viewport`.
    pub fn nth_in_viewport(&mut self, n: usize, viewport: &Viewport) -> Option<&Pane> {
        self.ensure_sorted();
        let id = viewport::nth_visible(
            &self.order,
            &self.panes,
            viewport,
            n,
            self.config.viewport_slots,
        )?;
        self.panes.get(id)
    }

    /// Digit key bound to `id`, if the pane is visible in `viewport`.
    pub fn viewport_slot(&mut self, id: &str, viewport: &Viewport) -> Option<usize> {
        self.ensure_sorted();
        viewport::visible_slot(
            &self.order,
            &self.panes,
            viewport,
            id,
            self.config.viewport_slots,
        )
    }
}
