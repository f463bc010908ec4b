use crate::theme::{parse_hex_color, Theme};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Number of digit-addressable panes; key 0 maps to the last slot.
    pub viewport_slots: usize,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { viewport_slots: 10 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub theme: Theme,
    pub navigation: NavigationConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::light(),
            navigation: NavigationConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    same_file_color: Option<String>,
    fallback_color: Option<String>,
    palette: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct NavigationConfigFile {
    viewport_slots: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    navigation: Option<NavigationConfigFile>,
}

/// Strict JSON first; hand-edited files with comments or trailing commas go
/// through json5. The strict error is reported when both fail.
pub(crate) fn parse_lenient<T: DeserializeOwned>(contents: &str) -> Result<T, serde_json::Error> {
    match serde_json::from_str(contents) {
        Ok(value) => Ok(value),
        Err(err) => json5::from_str(contents).map_err(|_| err),
    }
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = parse_lenient(&contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        config.theme = Theme::by_name(theme_name)
            .ok_or_else(|| anyhow::anyhow!("unknown theme `{theme_name}`"))?;
    }

    if let Some(vars) = parsed.theme_variables {
        if let Some(v) = vars.same_file_color {
            config.theme.same_file_color = parse_hex_color(&v)?;
        }
        if let Some(v) = vars.fallback_color {
            config.theme.fallback_color = parse_hex_color(&v)?;
        }
        if let Some(colors) = vars.palette {
            config.theme.palette = colors
                .iter()
                .map(|color| parse_hex_color(color))
                .collect::<Result<_, _>>()?;
        }
    }

    if let Some(navigation) = parsed.navigation {
        if let Some(slots) = navigation.viewport_slots {
            if slots == 0 {
                return Err(anyhow::anyhow!("navigation.viewportSlots must be at least 1"));
            }
            config.navigation.viewport_slots = slots;
        }
    }

    log::debug!(
        "loaded config from {}: theme {}, {} viewport slots",
        path.display(),
        config.theme.name,
        config.navigation.viewport_slots
    );
    Ok(config)
}
