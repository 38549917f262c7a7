//! 字体目录实现
//!
//! - SystemFontCatalog: 通过 fontique 枚举系统字体（feature `system-fonts`）
//! - StaticFontCatalog: 固定列表（测试 / 无字体后端时的兜底）

use crate::kernel::services::ports::fonts::FontCatalog;

/// 系统字体不可用或为空时使用的兜底列表
pub const FALLBACK_FAMILIES: &[&str] = &[
    "Arial",
    "Courier New",
    "DejaVu Sans",
    "DejaVu Sans Mono",
    "Helvetica",
    "Liberation Serif",
    "Times New Roman",
];

#[derive(Debug, Clone, Default)]
pub struct StaticFontCatalog {
    families: Vec<String>,
}

impl StaticFontCatalog {
    pub fn new<I, S>(families: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            families: families.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_FAMILIES.iter().copied())
    }
}

impl FontCatalog for StaticFontCatalog {
    fn families(&self) -> Vec<String> {
        self.families.clone()
    }
}

#[cfg(feature = "system-fonts")]
pub struct SystemFontCatalog;

#[cfg(feature = "system-fonts")]
impl FontCatalog for SystemFontCatalog {
    fn families(&self) -> Vec<String> {
        use fontique::{Collection, CollectionOptions};

        let mut collection = Collection::new(CollectionOptions {
            shared: false,
            system_fonts: true,
        });
        let families: Vec<String> = collection.family_names().map(str::to_string).collect();
        tracing::debug!(count = families.len(), "enumerated system font families");
        families
    }
}

/// 优先系统字体，否则使用兜底列表
pub fn discover_font_families() -> Vec<String> {
    #[cfg(feature = "system-fonts")]
    {
        let families = crate::kernel::services::ports::sorted_families(&SystemFontCatalog);
        if !families.is_empty() {
            return families;
        }
        tracing::warn!("no system fonts found, using fallback font list");
    }

    crate::kernel::services::ports::sorted_families(&StaticFontCatalog::fallback())
}
