use std::collections::HashSet;

use crate::geometry::{Point, Rect};
use crate::highlight::HighlightColors;
use crate::ir::{Pane, PaneId, PaneSnapshot};
use crate::relationships::{Relationship, RelationshipGraph};
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKind {
    SameFile,
    SymbolDependency,
}

/// Directional indicator between two panes, in canvas space.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyArrow {
    pub from_pane: PaneId,
    pub to_pane: PaneId,
    pub from: Point,
    pub to: Point,
    /// The target also depends on the source; drawn once with two heads.
    pub symmetrical: bool,
    pub color: u32,
    pub kind: ArrowKind,
}

pub fn dependency_arrows(
    graph: &RelationshipGraph,
    panes: &PaneSnapshot,
    colors: &HighlightColors,
    theme: &Theme,
) -> Vec<DependencyArrow> {
    let mut arrows = Vec::new();
    let mut drawn_pairs: HashSet<(&str, &str)> = HashSet::new();

    for (from_id, edges) in graph.iter() {
        let Some(from_pane) = panes.get(from_id) else {
            continue;
        };
        if from_pane.pinned || from_pane.identifier.is_none() {
            continue;
        }

        for edge in edges {
            let to_id = edge.target();
            if drawn_pairs.contains(&(to_id, from_id.as_str())) {
                continue;
            }
            let Some(to_pane) = panes.get(to_id) else {
                continue;
            };
            if to_pane.pinned {
                continue;
            }

            let symmetrical = graph.is_symmetrical(from_id, to_id);
            if symmetrical {
                drawn_pairs.insert((from_id.as_str(), to_id));
            }

            let Some((from, to)) = clip_between(&pane_rect(from_pane), &pane_rect(to_pane)) else {
                continue;
            };

            let (kind, color) = match edge {
                Relationship::SameFile { .. } => (ArrowKind::SameFile, theme.same_file_color),
                Relationship::SymbolDependency { .. } => (
                    ArrowKind::SymbolDependency,
                    colors
                        .get(from_id, to_id)
                        .map(|highlight| highlight.color)
                        .unwrap_or(theme.fallback_color),
                ),
            };

            arrows.push(DependencyArrow {
                from_pane: from_id.clone(),
                to_pane: to_id.to_string(),
                from,
                to,
                symmetrical,
                color,
                kind,
            });
        }
    }

    log::debug!("computed {} dependency arrows", arrows.len());
    arrows
}

fn pane_rect(pane: &Pane) -> Rect {
    Rect::new(pane.x, pane.y, pane.width, pane.height)
}

/// Segment between the centers of `from` and `to`, trimmed to where it
/// leaves each rectangle. `None` when either center lies inside the other
/// rectangle's half-extent along the segment.
fn clip_between(from: &Rect, to: &Rect) -> Option<(Point, Point)> {
    let from_center = from.center();
    let to_center = to.center();
    let delta = to_center - from_center;

    let from_t = exit_fraction(from, delta);
    if from_t >= 1.0 {
        return None;
    }
    let to_t = exit_fraction(to, delta);
    if to_t >= 1.0 {
        return None;
    }

    Some((from_center + delta * from_t, to_center - delta * to_t))
}

fn exit_fraction(rect: &Rect, delta: Point) -> f32 {
    let half_width = (rect.right() - rect.left()) / 2.0;
    let half_height = (rect.bottom() - rect.top()) / 2.0;
    let along_x = if delta.x != 0.0 {
        half_width / delta.x.abs()
    } else {
        f32::MAX
    };
    let along_y = if delta.y != 0.0 {
        half_height / delta.y.abs()
    } else {
        f32::MAX
    };
    along_x.min(along_y)
}
