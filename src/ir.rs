use crate::geometry::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub type PaneId = String;

/// Externally tracked selection set.
pub type Selection = HashSet<PaneId>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

impl Direction {
    pub fn from_sign(sign: i32) -> Option<Self> {
        match sign {
            1 => Some(Self::Next),
            -1 => Some(Self::Previous),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaneKind {
    #[default]
    Code,
    Diff,
    Ghost,
    Merge,
    References,
    Modal,
    Settings,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolRange {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl SymbolRange {
    pub const fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    pub fn start(&self) -> (u32, u32) {
        (self.start_line, self.start_column)
    }
}

/// One pane as observed in a workspace snapshot.
///
/// Pinned panes are drawn at a fixed viewport scale and carry their own
/// viewport-space geometry in `vx`/`vy`/`vwidth`/`vheight`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pane {
    pub id: PaneId,
    #[serde(rename = "type", default)]
    pub kind: PaneKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(rename = "isPinned", default)]
    pub pinned: bool,
    #[serde(default)]
    pub vx: f32,
    #[serde(default)]
    pub vy: f32,
    #[serde(default)]
    pub vwidth: f32,
    #[serde(default)]
    pub vheight: f32,
    #[serde(
        rename = "parentIdentifier",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_symbol_range: Option<SymbolRange>,
}

impl Pane {
    pub fn new(id: impl Into<PaneId>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            kind: PaneKind::Code,
            x,
            y,
            width,
            height,
            pinned: false,
            vx: 0.0,
            vy: 0.0,
            vwidth: 0.0,
            vheight: 0.0,
            parent: None,
            identifier: None,
            current_symbol_range: None,
        }
    }

    pub fn with_kind(mut self, kind: PaneKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn pinned_at(mut self, vx: f32, vy: f32, vwidth: f32, vheight: f32) -> Self {
        self.pinned = true;
        self.vx = vx;
        self.vy = vy;
        self.vwidth = vwidth;
        self.vheight = vheight;
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    pub fn with_symbol_range(mut self, range: SymbolRange) -> Self {
        self.current_symbol_range = Some(range);
        self
    }

    pub fn is_top_level(&self) -> bool {
        self.parent.is_none()
    }

    /// Size used for grouping: the viewport-fixed size when pinned.
    pub fn size(&self) -> Size {
        if self.pinned {
            Size::new(self.vwidth, self.vheight)
        } else {
            Size::new(self.width, self.height)
        }
    }

    pub fn sort_bounds(&self) -> Rect {
        Rect::from_origin_size(Point::new(self.x, self.y), self.size())
    }
}

/// Pane set keyed by id, iterated in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Pane>", into = "Vec<Pane>")]
pub struct PaneSnapshot {
    panes: Vec<Pane>,
    index: HashMap<PaneId, usize>,
}

impl PaneSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a pane. A replaced pane keeps its original slot.
    pub fn insert(&mut self, pane: Pane) {
        if let Some(&slot) = self.index.get(&pane.id) {
            log::warn!("pane `{}` appears more than once; keeping the last entry", pane.id);
            self.panes[slot] = pane;
            return;
        }
        self.index.insert(pane.id.clone(), self.panes.len());
        self.panes.push(pane);
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Pane> {
        self.index.get(id).map(|&slot| &self.panes[slot])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pane> {
        self.panes.iter()
    }
}

impl From<Vec<Pane>> for PaneSnapshot {
    fn from(panes: Vec<Pane>) -> Self {
        panes.into_iter().collect()
    }
}

impl From<PaneSnapshot> for Vec<Pane> {
    fn from(snapshot: PaneSnapshot) -> Self {
        snapshot.panes
    }
}

impl FromIterator<Pane> for PaneSnapshot {
    fn from_iter<I: IntoIterator<Item = Pane>>(iter: I) -> Self {
        let mut snapshot = PaneSnapshot::new();
        for pane in iter {
            snapshot.insert(pane);
        }
        snapshot
    }
}

impl<'a> IntoIterator for &'a PaneSnapshot {
    type Item = &'a Pane;
    type IntoIter = std::slice::Iter<'a, Pane>;

    fn into_iter(self) -> Self::IntoIter {
        self.panes.iter()
    }
}

/// Camera state read from the renderer at call time.
///
/// `bounds` is the visible area in canvas space and `center` the logical
/// canvas point the camera looks at.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Viewport {
    pub center: Point,
    pub scale: f32,
    pub bounds: Rect,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: Point::default(),
            scale: 1.0,
            bounds: Rect::default(),
        }
    }
}

impl Viewport {
    pub fn new(center: Point, scale: f32, bounds: Rect) -> Self {
        Self {
            center,
            scale,
            bounds,
        }
    }

    pub fn from_bounds(bounds: Rect, scale: f32) -> Self {
        Self::new(bounds.center(), scale, bounds)
    }

    /// Zoom factor with degenerate values treated as 1.
    pub fn effective_scale(&self) -> f32 {
        if self.scale.is_finite() && self.scale > 0.0 {
            self.scale
        } else {
            1.0
        }
    }

    /// Pane rectangle in canvas space. Pinned panes are anchored to the
    /// viewport, so their viewport geometry is unscaled into the visible area.
    pub fn pane_rect(&self, pane: &Pane) -> Rect {
        if pane.pinned {
            let scale = self.effective_scale();
            Rect::new(
                self.bounds.left() + pane.vx / scale,
                self.bounds.top() + pane.vy / scale,
                pane.vwidth / scale,
                pane.vheight / scale,
            )
        } else {
            Rect::new(pane.x, pane.y, pane.width, pane.height)
        }
    }

    pub fn fully_contains(&self, pane: &Pane) -> bool {
        self.bounds.contains_rect(&self.pane_rect(pane))
    }

    pub fn overlaps(&self, pane: &Pane) -> bool {
        self.bounds.intersects(&self.pane_rect(pane))
    }
}
