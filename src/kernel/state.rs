use std::path::{Path, PathBuf};

use crate::kernel::dialog::{ColorDialogState, FileDialogState};
use crate::kernel::menu::MenuBarState;
use crate::kernel::services::ports::{default_file_filters, EditorConfig, FileFilter};
use crate::kernel::viewport::ViewportState;
use crate::models::{BaseFont, Document, FONT_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

/// 键盘输入的接收者，按层级从上到下
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    FileDialog,
    ColorDialog,
    Menu,
    Editor,
}

pub struct AppState {
    pub document: Document,
    pub config: EditorConfig,
    pub file_filters: Vec<FileFilter>,
    /// 未命名文档时文件对话框的起始目录
    pub workspace_dir: PathBuf,
    pub menu: MenuBarState,
    pub file_dialog: FileDialogState,
    pub color_dialog: ColorDialogState,
    pub viewport: ViewportState,
    pub status: Option<StatusMessage>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(workspace_dir: PathBuf, config: EditorConfig, families: Vec<String>) -> Self {
        let font = BaseFont::new(config.font_family.clone(), FONT_SIZE);
        Self {
            document: Document::new(font),
            config,
            file_filters: default_file_filters(),
            workspace_dir,
            menu: MenuBarState::new(families),
            file_dialog: FileDialogState::default(),
            color_dialog: ColorDialogState::default(),
            viewport: ViewportState::default(),
            status: None,
            should_quit: false,
        }
    }

    pub fn with_file_filters(mut self, filters: Vec<FileFilter>) -> Self {
        if !filters.is_empty() {
            self.file_filters = filters;
        }
        self
    }

    pub fn focus(&self) -> FocusTarget {
        if self.file_dialog.visible {
            FocusTarget::FileDialog
        } else if self.color_dialog.visible {
            FocusTarget::ColorDialog
        } else if self.menu.is_open() {
            FocusTarget::Menu
        } else {
            FocusTarget::Editor
        }
    }

    pub fn title(&self) -> String {
        self.document.title()
    }

    /// 文件对话框起始目录：当前文件所在目录，未命名时为工作目录
    pub fn dialog_start_dir(&self) -> PathBuf {
        self.document
            .path()
            .and_then(Path::parent)
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.workspace_dir.clone())
    }
}
