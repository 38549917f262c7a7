//! 模态对话框：文件选择（打开 / 另存为）与颜色选择
//!
//! 对话框只持有状态并给出决定（导航 / 接受 / 取消），
//! 真正的目录读取与文件读写由 Effect 交给外层执行。

use crate::kernel::services::ports::{DirEntry, FileFilter};
use crate::models::HexColor;
use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

// ==================== 单行输入 ====================

/// 单行输入：光标为字节偏移，始终落在字符边界上
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineInput {
    pub value: String,
    pub cursor: usize,
}

impl LineInput {
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn insert(&mut self, ch: char) {
        if self.cursor > self.value.len() {
            self.cursor = self.value.len();
        }
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_boundary();
        self.value.drain(prev..self.cursor);
        self.cursor = prev;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        let next = self.next_boundary();
        self.value.drain(self.cursor..next);
        true
    }

    pub fn left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = self.prev_boundary();
        true
    }

    pub fn right(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        self.cursor = self.next_boundary();
        true
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.value[self.cursor..]
            .chars()
            .next()
            .map(|c| self.cursor + c.len_utf8())
            .unwrap_or(self.value.len())
    }
}

// ==================== 文件对话框 ====================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileDialogMode {
    #[default]
    Open,
    SaveAs,
}

impl FileDialogMode {
    pub fn title(self) -> &'static str {
        match self {
            FileDialogMode::Open => "Open",
            FileDialogMode::SaveAs => "Save As",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDialogRow<'a> {
    Parent,
    Entry(&'a DirEntry),
}

impl FileDialogRow<'_> {
    pub fn label(&self) -> String {
        match self {
            FileDialogRow::Parent => "../".to_string(),
            FileDialogRow::Entry(entry) if entry.is_dir => format!("{}/", entry.name),
            FileDialogRow::Entry(entry) => entry.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileDialogOutcome {
    Nothing,
    Navigate(PathBuf),
    Accept(PathBuf),
}

#[derive(Debug, Clone, Default)]
pub struct FileDialogState {
    pub visible: bool,
    pub mode: FileDialogMode,
    pub dir: PathBuf,
    pub entries: Vec<DirEntry>,
    pub filter: usize,
    pub selected: usize,
    pub scroll: usize,
    pub view_height: usize,
    pub input: LineInput,
    pub error: Option<String>,
}

impl FileDialogState {
    pub fn open(&mut self, mode: FileDialogMode, dir: PathBuf, initial_name: &str) {
        *self = Self {
            visible: true,
            mode,
            dir,
            view_height: self.view_height,
            ..Self::default()
        };
        self.input.set(initial_name);
    }

    pub fn close(&mut self) -> bool {
        let was_visible = self.visible;
        self.visible = false;
        self.entries.clear();
        self.error = None;
        was_visible
    }

    pub fn set_listing(&mut self, dir: PathBuf, entries: Vec<DirEntry>) {
        self.dir = dir;
        self.entries = entries;
        self.selected = 0;
        self.scroll = 0;
        self.error = None;
    }

    /// 列表行：上级目录（根目录除外）、所有目录、再是匹配当前过滤器的文件
    pub fn rows<'a>(&'a self, filters: &[FileFilter]) -> Vec<FileDialogRow<'a>> {
        let filter = filters.get(self.filter);
        let mut rows = Vec::with_capacity(self.entries.len() + 1);
        if self.dir.parent().is_some() {
            rows.push(FileDialogRow::Parent);
        }
        rows.extend(
            self.entries
                .iter()
                .filter(|e| e.is_dir || filter.map_or(true, |f| f.matches(&e.name)))
                .map(FileDialogRow::Entry),
        );
        rows
    }

    pub fn cycle_filter(&mut self, filters: &[FileFilter]) -> bool {
        if filters.len() < 2 {
            return false;
        }
        self.filter = (self.filter + 1) % filters.len();
        self.selected = 0;
        self.scroll = 0;
        true
    }

    /// 移动选中行，并把该行文本填入输入框（目录带 `/` 后缀），Enter 即作用于它
    pub fn move_selection(&mut self, delta: isize, filters: &[FileFilter]) -> bool {
        let len = self.rows(filters).len();
        if len == 0 {
            return false;
        }
        let next = if delta < 0 {
            self.selected.saturating_sub(delta.unsigned_abs())
        } else {
            (self.selected + delta as usize).min(len - 1)
        };
        self.select(next, filters)
    }

    pub fn select(&mut self, index: usize, filters: &[FileFilter]) -> bool {
        let Some(label) = self.rows(filters).get(index).map(FileDialogRow::label) else {
            return false;
        };
        let changed = index != self.selected;
        self.selected = index;
        self.input.set(label);
        self.ensure_visible();
        changed
    }

    fn ensure_visible(&mut self) {
        let height = self.view_height.max(1);
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.selected >= self.scroll + height {
            self.scroll = self.selected + 1 - height;
        }
    }

    /// 根据输入和选中行决定 Enter 的含义
    pub fn resolve(&self, filters: &[FileFilter], default_extension: &str) -> FileDialogOutcome {
        let name = self.input.value.trim();

        if name.is_empty() {
            return match self.rows(filters).get(self.selected) {
                Some(FileDialogRow::Parent) => match self.dir.parent() {
                    Some(parent) => FileDialogOutcome::Navigate(parent.to_path_buf()),
                    None => FileDialogOutcome::Nothing,
                },
                Some(FileDialogRow::Entry(entry)) if entry.is_dir => {
                    FileDialogOutcome::Navigate(entry.path.clone())
                }
                Some(FileDialogRow::Entry(entry)) => FileDialogOutcome::Accept(entry.path.clone()),
                None => FileDialogOutcome::Nothing,
            };
        }

        let path = normalize_path(&join_input(&self.dir, name));
        let names_dir = name.ends_with('/')
            || name == ".."
            || name == "."
            || self.entries.iter().any(|e| e.is_dir && e.name == name);
        if names_dir {
            return FileDialogOutcome::Navigate(path);
        }

        let path = match self.mode {
            FileDialogMode::SaveAs if path.extension().is_none() => {
                with_extension_suffix(path, default_extension)
            }
            FileDialogMode::Open if path.extension().is_none() => {
                let suffixed = format!("{}{}", name, dot_extension(default_extension));
                let has_exact = self.entries.iter().any(|e| e.name == name);
                let has_suffixed = self.entries.iter().any(|e| e.name == suffixed);
                if !has_exact && has_suffixed {
                    with_extension_suffix(path, default_extension)
                } else {
                    path
                }
            }
            _ => path,
        };
        FileDialogOutcome::Accept(path)
    }
}

fn dot_extension(ext: &str) -> String {
    let ext = ext.trim();
    if ext.is_empty() || ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{ext}")
    }
}

/// 给最后一段追加扩展名 `ext`（含前导点）
pub fn with_extension_suffix(path: PathBuf, ext: &str) -> PathBuf {
    let ext = dot_extension(ext);
    if ext.is_empty() {
        return path;
    }
    let mut raw: OsString = path.into_os_string();
    raw.push(ext);
    PathBuf::from(raw)
}

/// 绝对路径原样使用，`~/` 展开为主目录，其余相对于对话框当前目录
fn join_input(dir: &Path, input: &str) -> PathBuf {
    if let Some(rest) = input.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    let path = Path::new(input);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}

/// 按字面去掉 `.`、折叠 `..`
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component.as_os_str());
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

// ==================== 颜色对话框 ====================

pub const SWATCH_COLUMNS: usize = 8;

pub const SWATCHES: [HexColor; 16] = [
    HexColor::new(0xff, 0xff, 0x00),
    HexColor::new(0xff, 0xa5, 0x00),
    HexColor::new(0xff, 0x00, 0x00),
    HexColor::new(0xff, 0x69, 0xb4),
    HexColor::new(0xee, 0x82, 0xee),
    HexColor::new(0x80, 0x00, 0x80),
    HexColor::new(0x00, 0x00, 0xff),
    HexColor::new(0x87, 0xce, 0xeb),
    HexColor::new(0x00, 0xff, 0xff),
    HexColor::new(0x00, 0x80, 0x80),
    HexColor::new(0x00, 0xff, 0x00),
    HexColor::new(0x00, 0x80, 0x00),
    HexColor::new(0xa5, 0x2a, 0x2a),
    HexColor::new(0x80, 0x80, 0x80),
    HexColor::new(0xd3, 0xd3, 0xd3),
    HexColor::new(0xff, 0xff, 0xff),
];

#[derive(Debug, Clone, Default)]
pub struct ColorDialogState {
    pub visible: bool,
    pub selected: usize,
    pub input: LineInput,
    pub error: Option<String>,
}

impl ColorDialogState {
    pub fn open(&mut self, initial: Option<HexColor>) {
        self.visible = true;
        self.error = None;
        self.selected = initial
            .and_then(|c| SWATCHES.iter().position(|s| *s == c))
            .unwrap_or(0);
        let color = initial.unwrap_or(SWATCHES[self.selected]);
        self.input.set(color.to_hex());
    }

    pub fn close(&mut self) -> bool {
        let was_visible = self.visible;
        self.visible = false;
        self.error = None;
        was_visible
    }

    /// 在色板网格中移动，十六进制输入跟随色块
    pub fn move_swatch(&mut self, dx: isize, dy: isize) -> bool {
        let cols = SWATCH_COLUMNS as isize;
        let rows = (SWATCHES.len() / SWATCH_COLUMNS) as isize;
        let col = (self.selected as isize % cols + dx).rem_euclid(cols);
        let row = (self.selected as isize / cols + dy).rem_euclid(rows);
        self.pick((row * cols + col) as usize)
    }

    pub fn pick(&mut self, index: usize) -> bool {
        let Some(color) = SWATCHES.get(index) else {
            return false;
        };
        let changed = index != self.selected;
        self.selected = index;
        self.error = None;
        self.input.set(color.to_hex());
        changed
    }

    /// 解析十六进制输入；无效时保留错误用于显示
    pub fn accept(&mut self) -> Option<HexColor> {
        match HexColor::parse(&self.input.value) {
            Ok(color) => Some(color),
            Err(err) => {
                self.error = Some(err.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/dialog.rs"]
mod tests;
