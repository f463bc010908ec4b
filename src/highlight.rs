use std::collections::{BTreeMap, VecDeque};

use crate::ir::{PaneId, PaneKind, PaneSnapshot};
use crate::relationships::{Relationship, RelationshipGraph};
use crate::sort::same_relationship_identity;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightColor {
    pub color: u32,
    /// Start (line, column) of the first source range, if any.
    pub anchor: Option<(u32, u32)>,
}

/// Rotating colour source: hands out the back entry and moves it to the front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: VecDeque<u32>,
    fallback: u32,
}

impl Palette {
    pub fn new(theme: &Theme) -> Self {
        Self {
            colors: theme.palette.iter().copied().collect(),
            fallback: theme.fallback_color,
        }
    }

    pub fn next_color(&mut self) -> u32 {
        match self.colors.pop_back() {
            Some(color) => {
                self.colors.push_front(color);
                color
            }
            None => self.fallback,
        }
    }
}

/// Stable colours for dependency pairs, so a pair keeps its colour across
/// relationship rebuilds as long as both panes are unchanged.
#[derive(Debug, Clone)]
pub struct HighlightColors {
    palette: Palette,
    assigned: BTreeMap<(PaneId, PaneId), HighlightColor>,
}

impl HighlightColors {
    pub fn new(theme: &Theme) -> Self {
        Self {
            palette: Palette::new(theme),
            assigned: BTreeMap::new(),
        }
    }

    pub fn get(&self, from: &str, to: &str) -> Option<HighlightColor> {
        self.assigned
            .get(&(from.to_string(), to.to_string()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&(PaneId, PaneId), &HighlightColor)> {
        self.assigned.iter()
    }

    /// Gives every unassigned dependency pair between two present, unpinned
    /// panes a colour. The reverse edge of a symmetrical pair shares it.
    pub fn assign(&mut self, graph: &RelationshipGraph, panes: &PaneSnapshot) {
        for (from_id, edges) in graph.iter() {
            let Some(from) = panes.get(from_id) else {
                continue;
            };
            if from.pinned || from.kind != PaneKind::Code {
                continue;
            }

            for edge in edges {
                if edge.is_same_file() {
                    continue;
                }
                let to_id = edge.target();
                if panes.get(to_id).is_none_or(|to| to.pinned) {
                    continue;
                }
                let key = (from_id.clone(), to_id.to_string());
                if self.assigned.contains_key(&key) {
                    continue;
                }

                let color = self.palette.next_color();
                self.assigned.insert(key, highlight(color, edge));

                if let Some(reverse @ Relationship::SymbolDependency { .. }) =
                    graph.edge(to_id, from_id)
                {
                    self.assigned
                        .insert((to_id.to_string(), from_id.clone()), highlight(color, reverse));
                }
            }
        }
    }

    /// Drops assignments whose panes disappeared or changed identity between
    /// `previous` and `current`. Unconditionally added edges are kept.
    pub fn prune(
        &mut self,
        previous: &PaneSnapshot,
        current: &PaneSnapshot,
        graph: &RelationshipGraph,
    ) {
        let before = self.assigned.len();
        self.assigned.retain(|(from, to), _| {
            let unconditional = graph.edges_from(from).iter().any(|edge| match edge {
                Relationship::SymbolDependency {
                    to: target,
                    unconditional: true,
                    ..
                } => target == to,
                _ => false,
            });
            if unconditional {
                return true;
            }
            let unchanged = |id: &str| match (previous.get(id), current.get(id)) {
                (Some(a), Some(b)) => same_relationship_identity(a, b),
                _ => false,
            };
            unchanged(from.as_str()) && unchanged(to.as_str())
        });
        if self.assigned.len() != before {
            log::debug!(
                "dropped {} stale highlight colours",
                before - self.assigned.len()
            );
        }
    }
}

fn highlight(color: u32, edge: &Relationship) -> HighlightColor {
    HighlightColor {
        color,
        anchor: edge.source_ranges().first().map(|range| range.start()),
    }
}
