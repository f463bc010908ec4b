use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::parse_lenient;
use crate::error::InputError;
use crate::ir::{PaneSnapshot, Selection, Viewport};
use crate::relationships::RawRelationship;

/// Everything the engine reads from its collaborators at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub panes: PaneSnapshot,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub selection: Selection,
    #[serde(default)]
    pub relationships: Vec<RawRelationship>,
}

pub fn parse_workspace(input: &str) -> Result<Workspace, InputError> {
    let workspace: Workspace = parse_lenient(input)?;
    log::debug!(
        "parsed workspace: {} panes, {} relationship facts, {} selected",
        workspace.panes.len(),
        workspace.relationships.len(),
        workspace.selection.len()
    );
    Ok(workspace)
}

pub fn load_workspace(path: &Path) -> Result<Workspace, InputError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_workspace(&contents)
}
