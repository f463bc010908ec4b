use std::path::Path;

use pane_nav::{SpatialSorter, sort_panes};
use pane_nav::arrows::{ArrowKind, dependency_arrows};
use pane_nav::highlight::HighlightColors;
use pane_nav::ir::{Direction, Selection};
use pane_nav::relationships::Relationship;
use pane_nav::snapshot::{Workspace, load_workspace, parse_workspace};
use pane_nav::sort::arrows_need_refresh;
use pane_nav::theme::Theme;

fn fixture(name: &str) -> Workspace {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    load_workspace(&path).expect("fixture load failed")
}

fn sorter_for(workspace: &Workspace) -> SpatialSorter {
    let mut sorter = SpatialSorter::default();
    sorter.should_regenerate_relationships(workspace.panes.clone());
    sorter
}

fn step(sorter: &mut SpatialSorter, workspace: &Workspace, direction: Direction) -> Option<String> {
    sorter
        .next(direction, &workspace.viewport, &workspace.selection)
        .map(|pane| pane.id.clone())
}

#[test]
fn every_fixture_orders_each_pane_once() {
    // Keep this list explicit so new fixtures must be added intentionally.
    for name in ["overlap_rows.json", "mixed_workspace.json", "offscreen.json"] {
        let workspace = fixture(name);
        let mut sorter = sorter_for(&workspace);
        let order = sorter.sorted_panes().to_vec();

        assert_eq!(order.len(), workspace.panes.len(), "{name}: wrong pane count");
        for pane in &workspace.panes {
            assert_eq!(
                order.iter().filter(|id| **id == pane.id).count(),
                1,
                "{name}: {} not listed exactly once",
                pane.id
            );
        }

        let mut again = sorter_for(&workspace);
        assert_eq!(again.sorted_panes(), order.as_slice(), "{name}: order not deterministic");
    }
}

#[test]
fn overlapping_row_stays_together() {
    let workspace = fixture("overlap_rows.json");
    let mut sorter = sorter_for(&workspace);
    assert_eq!(sorter.sorted_panes(), ["a", "b", "c"]);
}

#[test]
fn mixed_workspace_order_and_cursor() {
    let workspace = fixture("mixed_workspace.json");
    let mut sorter = sorter_for(&workspace);
    assert_eq!(
        sorter.sorted_panes(),
        ["main", "side", "peek", "notes", "palette"]
    );

    // Nearest in-view top-level pane to the camera center.
    assert_eq!(step(&mut sorter, &workspace, Direction::Next).as_deref(), Some("side"));
    assert_eq!(step(&mut sorter, &workspace, Direction::Next).as_deref(), Some("peek"));
    assert_eq!(step(&mut sorter, &workspace, Direction::Previous).as_deref(), Some("side"));

    let start = sorter.current().map(|pane| pane.id.clone());
    for _ in 0..workspace.panes.len() {
        step(&mut sorter, &workspace, Direction::Next);
    }
    assert_eq!(sorter.current().map(|pane| pane.id.clone()), start);
}

#[test]
fn selection_seeds_navigation_after_reset() {
    let workspace = fixture("mixed_workspace.json");
    let mut sorter = sorter_for(&workspace);
    sorter.sorted_panes();

    let selection: Selection = ["peek".to_string()].into_iter().collect();
    let previous = sorter
        .next(Direction::Previous, &workspace.viewport, &selection)
        .map(|pane| pane.id.clone());
    assert_eq!(previous.as_deref(), Some("side"));

    sorter.reset_index();
    let next = sorter
        .next(Direction::Next, &workspace.viewport, &selection)
        .map(|pane| pane.id.clone());
    assert_eq!(next.as_deref(), Some("notes"));
}

#[test]
fn offscreen_camera_falls_back_to_global_nearest() {
    let workspace = fixture("offscreen.json");
    let mut sorter = sorter_for(&workspace);
    assert_eq!(step(&mut sorter, &workspace, Direction::Next).as_deref(), Some("below"));
    assert_eq!(step(&mut sorter, &workspace, Direction::Next).as_deref(), Some("left"));
}

#[test]
fn digit_slots_count_visible_panes() {
    let workspace = fixture("mixed_workspace.json");
    let mut sorter = sorter_for(&workspace);
    let viewport = workspace.viewport;

    assert_eq!(sorter.viewport_slot("main", &viewport), Some(1));
    assert_eq!(sorter.viewport_slot("peek", &viewport), Some(3));
    assert_eq!(sorter.viewport_slot("notes", &viewport), None);
    assert_eq!(sorter.viewport_slot("palette", &viewport), Some(4));
    assert_eq!(
        sorter.nth_in_viewport(4, &viewport).map(|pane| pane.id.as_str()),
        Some("palette")
    );
    assert!(sorter.nth_in_viewport(5, &viewport).is_none());
}

#[test]
fn relationship_graph_and_arrows() {
    let workspace = fixture("mixed_workspace.json");
    let mut sorter = sorter_for(&workspace);
    let graph = sorter.build_relationship_graph(&workspace.relationships);

    assert_eq!(graph.edges_from("main").len(), 3);
    assert_eq!(graph.edges_from("main")[0].source_ranges().len(), 2);
    assert!(matches!(
        graph.edge("main", "peek"),
        Some(Relationship::SameFile { .. })
    ));
    assert!(graph.is_symmetrical("main", "side"));

    let theme = Theme::light();
    let mut colors = HighlightColors::new(&theme);
    colors.assign(sorter.relationships(), sorter.panes());
    assert_eq!(colors.len(), 3);
    assert_eq!(
        colors.get("main", "side").map(|c| c.color),
        colors.get("side", "main").map(|c| c.color)
    );
    assert!(colors.get("main", "palette").is_none());

    let arrows = dependency_arrows(sorter.relationships(), sorter.panes(), &colors, &theme);
    let pairs: Vec<(&str, &str)> = arrows
        .iter()
        .map(|arrow| (arrow.from_pane.as_str(), arrow.to_pane.as_str()))
        .collect();
    assert_eq!(pairs, vec![("main", "side"), ("main", "peek"), ("notes", "main")]);
    assert!(arrows[0].symmetrical);
    assert_eq!(arrows[1].kind, ArrowKind::SameFile);
    assert_eq!(arrows[1].color, theme.same_file_color);
    assert_eq!(Some(arrows[0].color), colors.get("main", "side").map(|c| c.color));
}

#[test]
fn re_observing_panes_controls_regeneration() {
    let workspace = fixture("mixed_workspace.json");
    let mut sorter = sorter_for(&workspace);
    step(&mut sorter, &workspace, Direction::Next);

    let mut moved = workspace.clone();
    moved.panes = moved
        .panes
        .iter()
        .cloned()
        .map(|mut pane| {
            pane.x += 10.0;
            pane
        })
        .collect();
    assert!(arrows_need_refresh(&workspace.panes, &moved.panes));
    assert!(!sorter.should_regenerate_relationships(moved.panes.clone()));
    assert!(sorter.is_dirty());

    let mut retargeted = moved.clone();
    retargeted.panes = retargeted
        .panes
        .iter()
        .cloned()
        .map(|pane| {
            if pane.id == "side" {
                pane.with_identifier("e-other")
            } else {
                pane
            }
        })
        .collect();
    assert!(sorter.should_regenerate_relationships(retargeted.panes));
    assert!(!arrows_need_refresh(&moved.panes, &moved.panes));
}

#[test]
fn empty_workspace_yields_nothing() {
    let workspace = parse_workspace(r#"{"panes": []}"#).expect("parse failed");
    let mut sorter = sorter_for(&workspace);
    assert!(sorter.sorted_panes().is_empty());
    assert!(step(&mut sorter, &workspace, Direction::Next).is_none());
    assert!(sorter.nth_in_viewport(1, &workspace.viewport).is_none());
}

#[test]
fn non_finite_geometry_is_still_ordered() {
    let panes: Vec<String> = (0..64)
        .map(|idx| {
            let x = match idx % 7 {
                0 => "NaN".to_string(),
                3 => "Infinity".to_string(),
                5 => "-Infinity".to_string(),
                _ => format!("{}", (idx % 8) * 120),
            };
            let y = if idx % 11 == 0 {
                "Infinity".to_string()
            } else {
                format!("{}", (idx / 8) * 90)
            };
            format!("{{ id: 'p{idx}', x: {x}, y: {y}, width: 100, height: 80 }}")
        })
        .collect();
    let workspace = parse_workspace(&format!("{{ panes: [{}] }}", panes.join(",\n")))
        .expect("json5 snapshot with non-finite numbers");
    assert_eq!(workspace.panes.len(), 64);

    let order = sort_panes(&workspace.panes);
    assert_eq!(order.len(), 64);
    for pane in &workspace.panes {
        assert_eq!(order.iter().filter(|id| **id == pane.id).count(), 1, "{}", pane.id);
    }

    let mut sorter = sorter_for(&workspace);
    for _ in 0..64 {
        assert!(step(&mut sorter, &workspace, Direction::Next).is_some());
    }
}
