use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::ir::{PaneId, SymbolRange};

/// A relationship fact as reported by the code-intelligence service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRelationship {
    pub from_pane_id: PaneId,
    pub to_pane_id: PaneId,
    #[serde(flatten)]
    pub kind: RawRelationshipKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum RawRelationshipKind {
    SameFile,
    SymbolDependency {
        #[serde(rename = "sourceRange")]
        source_range: SymbolRange,
    },
}

impl RawRelationship {
    pub fn same_file(from: impl Into<PaneId>, to: impl Into<PaneId>) -> Self {
        Self {
            from_pane_id: from.into(),
            to_pane_id: to.into(),
            kind: RawRelationshipKind::SameFile,
        }
    }

    pub fn symbol_dependency(
        from: impl Into<PaneId>,
        to: impl Into<PaneId>,
        source_range: SymbolRange,
    ) -> Self {
        Self {
            from_pane_id: from.into(),
            to_pane_id: to.into(),
            kind: RawRelationshipKind::SymbolDependency { source_range },
        }
    }
}

/// Directed edge stored under its source pane.
#[derive(Debug, Clone, PartialEq)]
pub enum Relationship {
    SameFile {
        to: PaneId,
    },
    SymbolDependency {
        to: PaneId,
        /// Ranges on the source pane that reference the target.
        source_ranges: Vec<SymbolRange>,
        /// Added directly by a caller rather than aggregated from facts.
        unconditional: bool,
    },
}

impl Relationship {
    pub fn target(&self) -> &str {
        match self {
            Relationship::SameFile { to } | Relationship::SymbolDependency { to, .. } => to,
        }
    }

    pub fn is_same_file(&self) -> bool {
        matches!(self, Relationship::SameFile { .. })
    }

    pub fn source_ranges(&self) -> &[SymbolRange] {
        match self {
            Relationship::SameFile { .. } => &[],
            Relationship::SymbolDependency { source_ranges, .. } => source_ranges,
        }
    }
}

/// Outgoing edges per source pane.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RelationshipGraph {
    edges: BTreeMap<PaneId, Vec<Relationship>>,
}

impl RelationshipGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aggregates raw facts into at most one edge per (source, target) pair.
    ///
    /// Dependency facts accumulate ranges on an existing dependency edge and
    /// never replace a same-file edge; same-file facts always replace
    /// whatever edge exists. Edges keep the position of the first fact that
    /// mentioned their target.
    pub fn build(facts: &[RawRelationship]) -> Self {
        let mut edges: BTreeMap<PaneId, Vec<Relationship>> = BTreeMap::new();
        let mut slots: HashMap<(&str, &str), usize> = HashMap::new();

        for fact in facts {
            let outgoing = edges.entry(fact.from_pane_id.clone()).or_default();
            let key = (fact.from_pane_id.as_str(), fact.to_pane_id.as_str());
            let existing = slots.get(&key).copied();

            match &fact.kind {
                RawRelationshipKind::SymbolDependency { source_range } => match existing {
                    None => {
                        slots.insert(key, outgoing.len());
                        outgoing.push(Relationship::SymbolDependency {
                            to: fact.to_pane_id.clone(),
                            source_ranges: vec![*source_range],
                            unconditional: false,
                        });
                    }
                    Some(slot) => {
                        if let Relationship::SymbolDependency { source_ranges, .. } =
                            &mut outgoing[slot]
                        {
                            source_ranges.push(*source_range);
                        }
                    }
                },
                RawRelationshipKind::SameFile => {
                    let edge = Relationship::SameFile {
                        to: fact.to_pane_id.clone(),
                    };
                    match existing {
                        Some(slot) => outgoing[slot] = edge,
                        None => {
                            slots.insert(key, outgoing.len());
                            outgoing.push(edge);
                        }
                    }
                }
            }
        }

        let graph = Self { edges };
        log::debug!(
            "built relationship graph: {} sources, {} edges from {} facts",
            graph.edges.len(),
            graph.edge_count(),
            facts.len()
        );
        graph
    }

    /// Appends a dependency edge without merging into existing edges.
    pub fn add_edge_unconditionally(
        &mut self,
        source_ranges: Vec<SymbolRange>,
        from: impl Into<PaneId>,
        to: impl Into<PaneId>,
    ) {
        self.edges
            .entry(from.into())
            .or_default()
            .push(Relationship::SymbolDependency {
                to: to.into(),
                source_ranges,
                unconditional: true,
            });
    }

    pub fn edges_from(&self, source: &str) -> &[Relationship] {
        self.edges.get(source).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge(&self, source: &str, target: &str) -> Option<&Relationship> {
        self.edges_from(source)
            .iter()
            .find(|edge| edge.target() == target)
    }

    /// True when `target` also has an edge back to `source`.
    pub fn is_symmetrical(&self, source: &str, target: &str) -> bool {
        self.edge(target, source).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PaneId, &[Relationship])> {
        self.edges.iter().map(|(id, edges)| (id, edges.as_slice()))
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
