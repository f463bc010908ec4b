use crate::arrows::{ArrowKind, DependencyArrow};
use crate::ir::{SymbolRange, Viewport};
use crate::relationships::{Relationship, RelationshipGraph};
use crate::sort::{SortNode, SpatialSorter};
use crate::theme::format_hex_color;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct OrderDump {
    pub panes: Vec<OrderEntryDump>,
}

#[derive(Debug, Serialize)]
pub struct OrderEntryDump {
    pub index: usize,
    pub id: String,
    /// Digit key bound to the pane in the current viewport.
    pub slot: Option<usize>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl OrderDump {
    pub fn from_sorter(sorter: &mut SpatialSorter, viewport: &Viewport) -> Self {
        let order = sorter.sorted_panes().to_vec();
        let mut panes = Vec::with_capacity(order.len());
        for (index, id) in order.into_iter().enumerate() {
            let slot = sorter.viewport_slot(&id, viewport);
            let Some(pane) = sorter.panes().get(&id) else {
                continue;
            };
            panes.push(OrderEntryDump {
                index,
                slot,
                x: pane.x,
                y: pane.y,
                width: pane.width,
                height: pane.height,
                id,
            });
        }
        OrderDump { panes }
    }
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub kind: &'static str,
    pub pane_id: Option<String>,
    pub bounds: [f32; 4],
    pub children: Vec<NodeDump>,
}

impl NodeDump {
    pub fn from_node(node: &SortNode) -> Self {
        let bounds = node.bounds();
        NodeDump {
            kind: node.kind_name(),
            pane_id: match node {
                SortNode::Leaf { pane_id, .. } => Some(pane_id.clone()),
                _ => None,
            },
            bounds: [bounds.x, bounds.y, bounds.width, bounds.height],
            children: node.children().iter().map(NodeDump::from_node).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TreeDump {
    pub roots: Vec<NodeDump>,
}

impl TreeDump {
    pub fn from_forest(forest: &[SortNode]) -> Self {
        TreeDump {
            roots: forest.iter().map(NodeDump::from_node).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NavigationDump {
    pub direction: String,
    /// Pane reached by each step; `None` when the step had no answer.
    pub steps: Vec<Option<String>>,
}

#[derive(Debug, Serialize)]
pub struct EdgeDump {
    pub to: String,
    pub kind: &'static str,
    pub source_ranges: Vec<SymbolRange>,
    pub unconditional: bool,
    pub symmetrical: bool,
}

#[derive(Debug, Serialize)]
pub struct SourceDump {
    pub from: String,
    pub edges: Vec<EdgeDump>,
}

#[derive(Debug, Serialize)]
pub struct GraphDump {
    pub sources: Vec<SourceDump>,
}

impl GraphDump {
    pub fn from_graph(graph: &RelationshipGraph) -> Self {
        let sources = graph
            .iter()
            .map(|(from, edges)| SourceDump {
                from: from.clone(),
                edges: edges
                    .iter()
                    .map(|edge| EdgeDump {
                        to: edge.target().to_string(),
                        kind: match edge {
                            Relationship::SameFile { .. } => "sameFile",
                            Relationship::SymbolDependency { .. } => "symbolDependency",
                        },
                        source_ranges: edge.source_ranges().to_vec(),
                        unconditional: matches!(
                            edge,
                            Relationship::SymbolDependency { unconditional: true, .. }
                        ),
                        symmetrical: graph.is_symmetrical(from, edge.target()),
                    })
                    .collect(),
            })
            .collect();
        GraphDump { sources }
    }
}

#[derive(Debug, Serialize)]
pub struct ArrowDump {
    pub from_pane: String,
    pub to_pane: String,
    pub from: [f32; 2],
    pub to: [f32; 2],
    pub symmetrical: bool,
    pub color: String,
    pub kind: &'static str,
}

impl ArrowDump {
    pub fn from_arrow(arrow: &DependencyArrow) -> Self {
        ArrowDump {
            from_pane: arrow.from_pane.clone(),
            to_pane: arrow.to_pane.clone(),
            from: [arrow.from.x, arrow.from.y],
            to: [arrow.to.x, arrow.to.y],
            symmetrical: arrow.symmetrical,
            color: format_hex_color(arrow.color),
            kind: match arrow.kind {
                ArrowKind::SameFile => "sameFile",
                ArrowKind::SymbolDependency => "symbolDependency",
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SlotDump {
    pub slot: usize,
    pub id: String,
}

pub fn slot_dump(sorter: &mut SpatialSorter, viewport: &Viewport) -> Vec<SlotDump> {
    let slots = sorter.config().viewport_slots;
    (1..=slots)
        .filter_map(|slot| {
            let key = if slot == slots { 0 } else { slot };
            sorter
                .nth_in_viewport(key, viewport)
                .map(|pane| SlotDump {
                    slot: key,
                    id: pane.id.clone(),
                })
        })
        .collect()
}

/// Writes `dump` as pretty JSON to `path`, or to stdout when `path` is `None`.
pub fn write_dump<T: Serialize>(path: Option<&Path>, dump: &T) -> anyhow::Result<()> {
    match path {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            serde_json::to_writer_pretty(writer, dump)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            serde_json::to_writer_pretty(&mut handle, dump)?;
            writeln!(handle)?;
        }
    }
    Ok(())
}
