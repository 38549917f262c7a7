//! Service adapters: OS specific implementations (filesystem, fonts, settings).

pub mod file;
pub mod fonts;
pub mod keybinding;
pub mod paths;
pub mod settings;

pub use file::LocalFileProvider;
#[cfg(feature = "system-fonts")]
pub use fonts::SystemFontCatalog;
pub use fonts::{discover_font_families, StaticFontCatalog, FALLBACK_FAMILIES};
pub use keybinding::{KeybindingContext, KeybindingService};
pub use paths::{ensure_log_dir, get_app_data_dir, get_log_dir, get_settings_path};
pub use settings::{ensure_settings_file, load_settings_from, parse_command, parse_keybinding};
