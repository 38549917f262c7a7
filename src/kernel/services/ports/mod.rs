//! Service ports: traits + data contracts.

pub mod config;
pub mod file;
pub mod fonts;
pub mod settings;

pub use config::{default_file_filters, EditorConfig, FileFilter};
pub use file::{DirEntry, FileError, FileProvider, Result as FileResult};
pub use fonts::{sorted_families, FontCatalog};
pub use settings::{KeybindingRule, Settings};
