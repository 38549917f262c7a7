use std::path::PathBuf;

use crate::core::Command;
use crate::kernel::services::ports::DirEntry;
use crate::models::Granularity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOp {
    Read,
    Write,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    RunCommand(Command),
    OpenPath(PathBuf),
    /// 括号粘贴，交给当前焦点处理
    Paste(String),
    Tick,

    // File effect results
    FileLoaded {
        path: PathBuf,
        content: String,
    },
    FileSaved {
        path: PathBuf,
    },
    FileFailed {
        path: PathBuf,
        op: FileOp,
        error: String,
    },
    DirListed {
        dir: PathBuf,
        entries: Vec<DirEntry>,
    },
    DirListFailed {
        dir: PathBuf,
        error: String,
    },

    // Layout
    SetEditorViewSize {
        width: usize,
        height: usize,
    },
    SetMenuViewHeight {
        rows: usize,
    },
    SetFileDialogViewHeight {
        rows: usize,
    },

    // Text area mouse
    EditorMouseDown {
        pos: (usize, usize),
        granularity: Granularity,
        extend: bool,
    },
    EditorMouseDrag {
        pos: (usize, usize),
    },
    EditorScroll {
        delta: isize,
    },

    // Menu bar
    MenuOpen(usize),
    MenuClose,
    MenuMoveSelection(isize),
    MenuSwitch(isize),
    MenuSelect(usize),
    MenuScroll(isize),
    MenuActivate,

    // File dialog
    FileDialogAppend(char),
    FileDialogBackspace,
    FileDialogDelete,
    FileDialogCursorLeft,
    FileDialogCursorRight,
    FileDialogMoveSelection(isize),
    FileDialogSelect(usize),
    FileDialogCycleFilter,
    FileDialogAccept,
    FileDialogCancel,

    // Color dialog
    ColorDialogAppend(char),
    ColorDialogBackspace,
    ColorDialogMoveSwatch {
        dx: isize,
        dy: isize,
    },
    ColorDialogPick(usize),
    ColorDialogAccept,
    ColorDialogCancel,
}
