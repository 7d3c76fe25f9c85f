use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from helpdesk.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelpdeskConfig {
    #[serde(default)]
    pub desk: DeskConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeskConfig {
    /// Dashboard heading
    #[serde(default = "default_name")]
    pub name: String,
    /// Staff roster offered by the assignee pickers
    #[serde(default = "default_staff")]
    pub staff: Vec<String>,
    /// Start with the placeholder tickets
    #[serde(default = "default_true")]
    pub sample_tickets: bool,
}

impl Default for DeskConfig {
    fn default() -> Self {
        DeskConfig {
            name: default_name(),
            staff: default_staff(),
            sample_tickets: true,
        }
    }
}

fn default_name() -> String {
    "Hotel Helpdesk Dashboard".to_string()
}

fn default_staff() -> Vec<String> {
    ["John Doe", "Jane Smith", "Mike Johnson", "Emily Brown"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    /// Hex overrides for theme slots, e.g. `highlight = "#FB4196"`
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
        }
    }
}
