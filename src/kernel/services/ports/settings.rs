use super::config::{default_file_filters, EditorConfig, FileFilter};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default = "default_file_filters")]
    pub file_filters: Vec<FileFilter>,
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
            file_filters: default_file_filters(),
            keybindings: Vec::new(),
        }
    }
}
