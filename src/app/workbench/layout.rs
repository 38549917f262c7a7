//! 布局：渲染与鼠标命中测试共用同一套几何计算

use crate::kernel::dialog::SWATCH_COLUMNS;
use crate::kernel::menu::{title_spans, MenuItem};
use crate::kernel::AppState;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use unicode_width::UnicodeWidthStr;

pub(super) const TITLE_HEIGHT: u16 = 1;
pub(super) const MENU_BAR_HEIGHT: u16 = 1;
pub(super) const STATUS_HEIGHT: u16 = 1;

const FILE_DIALOG_MAX_WIDTH: u16 = 72;
const FILE_DIALOG_MAX_HEIGHT: u16 = 22;
pub(super) const SWATCH_WIDTH: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct WorkbenchLayout {
    pub area: Rect,
    pub title: Rect,
    pub menu_bar: Rect,
    pub editor: Rect,
    pub status: Rect,
}

pub(super) fn split(area: Rect) -> WorkbenchLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Length(MENU_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    WorkbenchLayout {
        area,
        title: chunks[0],
        menu_bar: chunks[1],
        editor: chunks[2],
        status: chunks[3],
    }
}

pub(super) fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x.saturating_add(rect.width) && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

pub(super) fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn inner(rect: Rect) -> Rect {
    Rect::new(
        rect.x.saturating_add(1),
        rect.y.saturating_add(1),
        rect.width.saturating_sub(2),
        rect.height.saturating_sub(2),
    )
}

// ==================== 下拉菜单 ====================

/// 下拉菜单可用的行数（不含边框）
pub(super) fn menu_max_rows(layout: &WorkbenchLayout) -> usize {
    layout.editor.height.saturating_sub(2) as usize
}

pub(super) fn menu_item_width(item: &MenuItem) -> u16 {
    let marker = if item.checked.is_some() { 2 } else { 0 };
    let shortcut = item.shortcut.as_ref().map(|s| s.width() + 3).unwrap_or(0);
    (marker + item.label.width() + shortcut) as u16
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct DropdownLayout {
    pub outer: Rect,
    pub rows: Rect,
}

/// 当前下拉菜单的几何位置，挂在其标题下方
pub(super) fn dropdown(layout: &WorkbenchLayout, state: &AppState) -> Option<DropdownLayout> {
    let menu = state.menu.open_menu()?;
    let items = state.menu.items(menu, &state.document.font().family);
    let span = title_spans().get(menu)?.clone();

    let content_width = items.iter().map(menu_item_width).max().unwrap_or(0).max(8);
    let visible = state.menu.visible_range(items.len()).len() as u16;

    let x = layout.menu_bar.x + span.start;
    let y = layout.menu_bar.y + layout.menu_bar.height;
    let max_width = layout.area.width.saturating_sub(x.saturating_sub(layout.area.x));
    let width = (content_width + 4).min(max_width);
    let height = (visible + 2).min(layout.editor.height);
    let outer = Rect::new(x, y, width, height);
    Some(DropdownLayout {
        outer,
        rows: inner(outer),
    })
}

// ==================== 文件对话框 ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct FileDialogLayout {
    pub outer: Rect,
    pub dir: Rect,
    pub list: Rect,
    pub name: Rect,
    pub filter: Rect,
    pub message: Rect,
}

pub(super) fn file_dialog(area: Rect) -> FileDialogLayout {
    let outer = centered(
        area,
        FILE_DIALOG_MAX_WIDTH.min(area.width.saturating_sub(4)),
        FILE_DIALOG_MAX_HEIGHT.min(area.height.saturating_sub(2)),
    );
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner(outer));

    FileDialogLayout {
        outer,
        dir: chunks[0],
        list: chunks[1],
        name: chunks[2],
        filter: chunks[3],
        message: chunks[4],
    }
}

// ==================== 颜色对话框 ====================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct ColorDialogLayout {
    pub outer: Rect,
    pub swatches: Rect,
    pub input: Rect,
    pub message: Rect,
}

pub(super) fn color_dialog(area: Rect) -> ColorDialogLayout {
    let swatch_rows = (crate::kernel::dialog::SWATCHES.len() / SWATCH_COLUMNS) as u16;
    let width = SWATCH_COLUMNS as u16 * SWATCH_WIDTH + 4;
    let outer = centered(area, width, swatch_rows + 6);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(swatch_rows),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner(outer));

    let swatches = Rect::new(
        chunks[0].x + 1,
        chunks[0].y,
        (SWATCH_COLUMNS as u16 * SWATCH_WIDTH).min(chunks[0].width.saturating_sub(1)),
        chunks[0].height,
    );
    ColorDialogLayout {
        outer,
        swatches,
        input: chunks[2],
        message: chunks[3],
    }
}

pub(super) fn swatch_at(dialog: &ColorDialogLayout, x: u16, y: u16) -> Option<usize> {
    if !contains(dialog.swatches, x, y) {
        return None;
    }
    let col = ((x - dialog.swatches.x) / SWATCH_WIDTH) as usize;
    let row = (y - dialog.swatches.y) as usize;
    Some(row * SWATCH_COLUMNS + col)
}
