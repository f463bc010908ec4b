use pane_nav::SpatialSorter;
use pane_nav::arrows::dependency_arrows;
use pane_nav::config::NavigationConfig;
use pane_nav::dump::ArrowDump;
use pane_nav::highlight::HighlightColors;
use pane_nav::ir::{Direction, PaneSnapshot, Selection, SymbolRange, Viewport};
use pane_nav::relationships::RawRelationship;
use pane_nav::theme::Theme;
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NavigatorOptions {
    theme: Option<String>,
    viewport_slots: Option<usize>,
}

fn to_js(error: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&error.to_string())
}

fn parse<T: for<'de> Deserialize<'de>>(raw: &str) -> Result<T, JsValue> {
    serde_json::from_str(raw).map_err(to_js)
}

/// Navigation engine handle owned by the host page.
#[wasm_bindgen]
pub struct PaneNavigator {
    sorter: SpatialSorter,
    theme: Theme,
    colors: HighlightColors,
}

#[wasm_bindgen]
impl PaneNavigator {
    #[wasm_bindgen(constructor)]
    pub fn new(options_json: Option<String>) -> Result<PaneNavigator, JsValue> {
        let options = match options_json {
            Some(raw) => parse::<NavigatorOptions>(&raw)?,
            None => NavigatorOptions::default(),
        };
        let theme = match options.theme.as_deref() {
            Some(name) => Theme::by_name(name)
                .ok_or_else(|| JsValue::from_str(&format!("unknown theme `{name}`")))?,
            None => Theme::light(),
        };
        let mut navigation = NavigationConfig::default();
        if let Some(slots) = options.viewport_slots {
            navigation.viewport_slots = slots.max(1);
        }
        Ok(PaneNavigator {
            sorter: SpatialSorter::new(navigation),
            colors: HighlightColors::new(&theme),
            theme,
        })
    }

    /// Records a pane list (JSON array); true when relationships must be
    /// fetched again.
    #[wasm_bindgen(js_name = observePanes)]
    pub fn observe_panes(&mut self, panes_json: &str) -> Result<bool, JsValue> {
        let panes: PaneSnapshot = parse(panes_json)?;
        let previous = self.sorter.panes().clone();
        let regenerate = self.sorter.should_regenerate_relationships(panes);
        self.colors
            .prune(&previous, self.sorter.panes(), self.sorter.relationships());
        Ok(regenerate)
    }

    #[wasm_bindgen(js_name = sortedPanes)]
    pub fn sorted_panes(&mut self) -> Vec<String> {
        self.sorter.sorted_panes().to_vec()
    }

    /// Steps the cursor by `direction` (+1 or -1) and returns the pane id.
    pub fn next(
        &mut self,
        direction: i32,
        viewport_json: &str,
        selection_json: Option<String>,
    ) -> Result<Option<String>, JsValue> {
        let direction = Direction::from_sign(direction)
            .ok_or_else(|| JsValue::from_str("direction must be 1 or -1"))?;
        let viewport: Viewport = parse(viewport_json)?;
        let selection: Selection = match selection_json {
            Some(raw) => parse(&raw)?,
            None => Selection::new(),
        };
        Ok(self
            .sorter
            .next(direction, &viewport, &selection)
            .map(|pane| pane.id.clone()))
    }

    #[wasm_bindgen(js_name = resetIndex)]
    pub fn reset_index(&mut self) {
        self.sorter.reset_index();
    }

    #[wasm_bindgen(js_name = nthInViewport)]
    pub fn nth_in_viewport(
        &mut self,
        n: usize,
        viewport_json: &str,
    ) -> Result<Option<String>, JsValue> {
        let viewport: Viewport = parse(viewport_json)?;
        Ok(self
            .sorter
            .nth_in_viewport(n, &viewport)
            .map(|pane| pane.id.clone()))
    }

    #[wasm_bindgen(js_name = viewportSlot)]
    pub fn viewport_slot(
        &mut self,
        id: &str,
        viewport_json: &str,
    ) -> Result<Option<usize>, JsValue> {
        let viewport: Viewport = parse(viewport_json)?;
        Ok(self.sorter.viewport_slot(id, &viewport))
    }

    /// Rebuilds the relationship graph from raw facts (JSON array).
    #[wasm_bindgen(js_name = buildRelationships)]
    pub fn build_relationships(&mut self, facts_json: &str) -> Result<usize, JsValue> {
        let facts: Vec<RawRelationship> = parse(facts_json)?;
        let edges = self.sorter.build_relationship_graph(&facts).edge_count();
        self.colors
            .assign(self.sorter.relationships(), self.sorter.panes());
        Ok(edges)
    }

    #[wasm_bindgen(js_name = addRelationship)]
    pub fn add_relationship(
        &mut self,
        ranges_json: &str,
        from: &str,
        to: &str,
    ) -> Result<(), JsValue> {
        let ranges: Vec<SymbolRange> = parse(ranges_json)?;
        self.sorter.add_relationship_unconditionally(ranges, from, to);
        self.colors
            .assign(self.sorter.relationships(), self.sorter.panes());
        Ok(())
    }

    /// Arrow geometry for the current graph as a JSON array.
    pub fn arrows(&self) -> Result<String, JsValue> {
        let arrows: Vec<ArrowDump> = dependency_arrows(
            self.sorter.relationships(),
            self.sorter.panes(),
            &self.colors,
            &self.theme,
        )
        .iter()
        .map(ArrowDump::from_arrow)
        .collect();
        serde_json::to_string(&arrows).map_err(to_js)
    }
}

#[cfg(test)]
mod tests {
    use crate::PaneNavigator;

    const PANES: &str = r#"[
        {"id":"a","x":0,"y":0,"width":100,"height":100,"identifier":"ea"},
        {"id":"b","x":300,"y":0,"width":100,"height":100,"identifier":"eb"}
    ]"#;

    const VIEWPORT: &str = r#"{
        "center": {"x": 200, "y": 50},
        "scale": 1,
        "bounds": {"x": -50, "y": -50, "width": 500, "height": 200}
    }"#;

    #[test]
    fn navigates_and_draws_arrows() {
        let mut navigator = PaneNavigator::new(None).expect("default options");
        assert!(navigator.observe_panes(PANES).expect("panes parse"));
        assert_eq!(navigator.sorted_panes(), vec!["a".to_string(), "b".to_string()]);
        assert_eq!(navigator.viewport_slot("b", VIEWPORT).expect("viewport parse"), Some(2));

        let first = navigator.next(1, VIEWPORT, None).expect("viewport parse");
        let second = navigator.next(1, VIEWPORT, None).expect("viewport parse");
        assert!(first.is_some());
        assert_ne!(first, second);

        let edges = navigator
            .build_relationships(
                r#"[{"fromPaneId":"a","toPaneId":"b","type":"symbolDependency",
                     "sourceRange":{"startLine":1,"startColumn":1,"endLine":1,"endColumn":4}}]"#,
            )
            .expect("facts parse");
        assert_eq!(edges, 1);
        let arrows = navigator.arrows().expect("arrows serialize");
        assert!(arrows.contains("symbolDependency"));
    }
}
