//! 菜单栏：File / Font / Style
//!
//! - 下拉菜单的条目由当前状态生成（Font 菜单为每个字体族一个单选项）
//! - 键盘导航（跳过分隔线）、长菜单的滚动窗口、标题栏的命中测试

use crate::core::Command;
use rustc_hash::FxHashMap;
use std::ops::Range;

pub const MENU_TITLES: [&str; 3] = ["File", "Font", "Style"];
pub const MENU_FILE: usize = 0;
pub const MENU_FONT: usize = 1;
pub const MENU_STYLE: usize = 2;

/// 菜单栏距左边缘一格
const MENU_BAR_PADDING: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub shortcut: Option<String>,
    pub command: Option<Command>,
    /// 单选项为 `Some`，`Some(true)` 表示当前项
    pub checked: Option<bool>,
}

impl MenuItem {
    fn command(label: &str, shortcut: Option<String>, command: Command) -> Self {
        Self {
            label: label.to_string(),
            shortcut,
            command: Some(command),
            checked: None,
        }
    }

    fn radio(label: &str, checked: bool, command: Command) -> Self {
        Self {
            label: label.to_string(),
            shortcut: None,
            command: Some(command),
            checked: Some(checked),
        }
    }

    fn separator() -> Self {
        Self {
            label: String::new(),
            shortcut: None,
            command: None,
            checked: None,
        }
    }

    pub fn is_separator(&self) -> bool {
        self.command.is_none()
    }
}

/// 每个菜单标题在菜单栏上的列区间 `[start, end)`；标题绘制为 ` File `
pub fn title_spans() -> Vec<Range<u16>> {
    let mut x = MENU_BAR_PADDING;
    MENU_TITLES
        .iter()
        .map(|title| {
            let start = x;
            x += title.len() as u16 + 2;
            start..x
        })
        .collect()
}

pub fn title_at(x: u16) -> Option<usize> {
    title_spans().iter().position(|span| span.contains(&x))
}

#[derive(Debug, Clone, Default)]
pub struct MenuBarState {
    families: Vec<String>,
    open: Option<usize>,
    selected: usize,
    scroll: usize,
    max_visible: usize,
    shortcuts: FxHashMap<Command, String>,
}

impl MenuBarState {
    /// `families` 须已排序去重
    pub fn new(families: Vec<String>) -> Self {
        Self {
            families,
            open: None,
            selected: 0,
            scroll: 0,
            max_visible: usize::MAX,
            shortcuts: FxHashMap::default(),
        }
    }

    /// File / Style 菜单项旁的快捷键文本，取自当前生效的绑定
    pub fn set_shortcuts(&mut self, shortcuts: FxHashMap<Command, String>) {
        self.shortcuts = shortcuts;
    }

    fn command_item(&self, label: &str, command: Command) -> MenuItem {
        let shortcut = self.shortcuts.get(&command).cloned();
        MenuItem::command(label, shortcut, command)
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    pub fn open_menu(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    pub fn items(&self, menu: usize, current_family: &str) -> Vec<MenuItem> {
        match menu {
            MENU_FILE => vec![
                self.command_item("New", Command::New),
                self.command_item("Open", Command::Open),
                self.command_item("Save", Command::Save),
                MenuItem::separator(),
                self.command_item("Exit", Command::Exit),
            ],
            MENU_FONT => self
                .families
                .iter()
                .map(|family| {
                    MenuItem::radio(
                        family,
                        family == current_family,
                        Command::ChangeFont(family.clone()),
                    )
                })
                .collect(),
            MENU_STYLE => vec![
                self.command_item("Bold", Command::ToggleBold),
                self.command_item("Italic", Command::ToggleItalic),
                self.command_item("Highlight", Command::Highlight),
            ],
            _ => Vec::new(),
        }
    }

    /// 打开菜单：Font 菜单选中当前字体，其余选中第一项
    pub fn open(&mut self, menu: usize, current_family: &str) -> bool {
        if menu >= MENU_TITLES.len() {
            return false;
        }
        let prev = (self.open, self.selected);
        self.open = Some(menu);
        self.scroll = 0;
        self.selected = if menu == MENU_FONT {
            self.families
                .iter()
                .position(|f| f == current_family)
                .unwrap_or(0)
        } else {
            0
        };
        self.ensure_visible();
        prev != (self.open, self.selected)
    }

    pub fn close(&mut self) -> bool {
        let was_open = self.open.is_some();
        self.open = None;
        self.selected = 0;
        self.scroll = 0;
        was_open
    }

    /// 切换到相邻菜单（循环）
    pub fn switch_menu(&mut self, delta: isize, current_family: &str) -> bool {
        let Some(menu) = self.open else {
            return false;
        };
        let count = MENU_TITLES.len() as isize;
        let next = (menu as isize + delta).rem_euclid(count) as usize;
        self.open(next, current_family)
    }

    /// 按 `delta` 移动选中项，循环并跳过分隔线
    pub fn move_selection(&mut self, delta: isize, current_family: &str) -> bool {
        let Some(menu) = self.open else {
            return false;
        };
        let items = self.items(menu, current_family);
        if items.is_empty() || delta == 0 {
            return false;
        }

        let len = items.len() as isize;
        let step = delta.signum();
        let mut idx = self.selected as isize;
        for _ in 0..delta.unsigned_abs() {
            for _ in 0..len {
                idx = (idx + step).rem_euclid(len);
                if !items[idx as usize].is_separator() {
                    break;
                }
            }
        }

        let prev = self.selected;
        self.selected = idx as usize;
        self.ensure_visible();
        prev != self.selected
    }

    /// 鼠标悬停/点击选中第 `index` 项；分隔线和越界行忽略
    pub fn select(&mut self, index: usize, current_family: &str) -> bool {
        let Some(menu) = self.open else {
            return false;
        };
        let items = self.items(menu, current_family);
        match items.get(index) {
            Some(item) if !item.is_separator() => {
                let prev = self.selected;
                self.selected = index;
                self.ensure_visible();
                prev != index
            }
            _ => false,
        }
    }

    pub fn selected_command(&self, current_family: &str) -> Option<Command> {
        let menu = self.open?;
        self.items(menu, current_family)
            .into_iter()
            .nth(self.selected)
            .and_then(|item| item.command)
    }

    /// 屏幕能放下的下拉行数，超出则滚动
    pub fn set_max_visible(&mut self, rows: usize) -> bool {
        let rows = rows.max(1);
        if self.max_visible == rows {
            return false;
        }
        self.max_visible = rows;
        self.ensure_visible();
        true
    }

    pub fn scroll_by(&mut self, delta: isize, current_family: &str) -> bool {
        let Some(menu) = self.open else {
            return false;
        };
        let len = self.items(menu, current_family).len();
        let max_scroll = len.saturating_sub(self.max_visible);
        let prev = self.scroll;
        self.scroll = if delta < 0 {
            self.scroll.saturating_sub(delta.unsigned_abs())
        } else {
            (self.scroll + delta as usize).min(max_scroll)
        };
        prev != self.scroll
    }

    /// 下拉菜单当前显示的条目下标
    pub fn visible_range(&self, item_count: usize) -> Range<usize> {
        let end = self.scroll.saturating_add(self.max_visible).min(item_count);
        self.scroll.min(end)..end
    }

    fn ensure_visible(&mut self) {
        if self.selected < self.scroll {
            self.scroll = self.selected;
        } else if self.max_visible != usize::MAX && self.selected >= self.scroll + self.max_visible
        {
            self.scroll = self.selected + 1 - self.max_visible;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/menu.rs"]
mod tests;
