//! 字体目录契约：Font 菜单按字典序列出已安装的字体族

pub trait FontCatalog {
    /// 已安装的字体族名，未排序，可能重复
    fn families(&self) -> Vec<String>;
}

/// 按字节字典序排序、去重，丢弃空白名称
pub fn sorted_families(catalog: &dyn FontCatalog) -> Vec<String> {
    let mut families: Vec<String> = catalog
        .families()
        .into_iter()
        .map(|f| f.trim().to_string())
        .filter(|f| !f.is_empty())
        .collect();
    families.sort();
    families.dedup();
    families
}
