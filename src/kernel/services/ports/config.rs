use serde::{Deserialize, Serialize};

pub const DEFAULT_FONT_FAMILY: &str = "Arial";
pub const DEFAULT_EXTENSION: &str = ".txt";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub font_family: String,
    pub default_extension: String,
    pub tab_size: u8,
    pub scroll_lines: usize,
    pub double_click_ms: u64,
    pub triple_click_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            default_extension: DEFAULT_EXTENSION.to_string(),
            tab_size: 4,
            scroll_lines: 3,
            double_click_ms: 300,
            triple_click_ms: 450,
        }
    }
}

impl EditorConfig {
    pub fn scroll_step(&self) -> usize {
        self.scroll_lines.max(1)
    }
}

/// One entry of the file dialog's type filter, e.g. `Text Files (*.txt)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileFilter {
    pub label: String,
    pub pattern: String,
}

impl FileFilter {
    pub fn new(label: &str, pattern: &str) -> Self {
        Self {
            label: label.to_string(),
            pattern: pattern.to_string(),
        }
    }

    pub fn display(&self) -> String {
        format!("{} ({})", self.label, self.pattern)
    }

    /// `*` and `*.*` match everything; `*.ext` matches by suffix; anything
    /// else must equal the file name.
    pub fn matches(&self, file_name: &str) -> bool {
        match self.pattern.as_str() {
            "*" | "*.*" => true,
            pattern => match pattern.strip_prefix('*') {
                Some(suffix) => file_name.ends_with(suffix),
                None => file_name == pattern,
            },
        }
    }
}

pub fn default_file_filters() -> Vec<FileFilter> {
    vec![
        FileFilter::new("All Files", "*.*"),
        FileFilter::new("Text Files", "*.txt"),
        FileFilter::new("Python Scripts", "*.py"),
    ]
}
