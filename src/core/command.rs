//! 命令系统：语义命令定义
//!
//! 架构：
//! - Command: 语义命令枚举（不关心具体按键）
//! - 菜单项、快捷键、设置文件里的绑定都解析到同一个 Command

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 光标移动 ====================
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorLineStart,
    CursorLineEnd,
    CursorFileStart,
    CursorFileEnd,

    // ==================== 扩展选区 ====================
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    SelectLineStart,
    SelectLineEnd,

    // ==================== 编辑操作 ====================
    InsertChar(char),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,

    // ==================== 选择操作 ====================
    ClearSelection,
    SelectAll,

    // ==================== 滚动操作 ====================
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,

    // ==================== 文件菜单 ====================
    New,
    Open,
    Save,
    Exit,

    // ==================== 字体 / 样式菜单 ====================
    ChangeFont(String),
    ToggleBold,
    ToggleItalic,
    Highlight,

    // ==================== 菜单栏 ====================
    OpenMenu(usize),
    FocusMenuBar,

    // ==================== 扩展点 ====================
    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::CursorLeft => "cursorLeft",
            Command::CursorRight => "cursorRight",
            Command::CursorUp => "cursorUp",
            Command::CursorDown => "cursorDown",
            Command::CursorLineStart => "cursorLineStart",
            Command::CursorLineEnd => "cursorLineEnd",
            Command::CursorFileStart => "cursorFileStart",
            Command::CursorFileEnd => "cursorFileEnd",
            Command::SelectLeft => "selectLeft",
            Command::SelectRight => "selectRight",
            Command::SelectUp => "selectUp",
            Command::SelectDown => "selectDown",
            Command::SelectLineStart => "selectLineStart",
            Command::SelectLineEnd => "selectLineEnd",
            Command::InsertChar(_) => "insertChar",
            Command::InsertNewline => "insertNewline",
            Command::InsertTab => "insertTab",
            Command::DeleteBackward => "deleteBackward",
            Command::DeleteForward => "deleteForward",
            Command::ClearSelection => "clearSelection",
            Command::SelectAll => "selectAll",
            Command::ScrollUp => "scrollUp",
            Command::ScrollDown => "scrollDown",
            Command::PageUp => "pageUp",
            Command::PageDown => "pageDown",
            Command::New => "new",
            Command::Open => "open",
            Command::Save => "save",
            Command::Exit => "exit",
            Command::ChangeFont(_) => "changeFont",
            Command::ToggleBold => "toggleBold",
            Command::ToggleItalic => "toggleItalic",
            Command::Highlight => "highlight",
            Command::OpenMenu(_) => "openMenu",
            Command::FocusMenuBar => "focusMenuBar",
            Command::Custom(name) => name,
        }
    }

    /// 按名称解析命令；带参数的命令（insertChar / changeFont / openMenu）不能从名称构造。
    pub fn from_name(name: &str) -> Command {
        match name {
            "cursorLeft" => Command::CursorLeft,
            "cursorRight" => Command::CursorRight,
            "cursorUp" => Command::CursorUp,
            "cursorDown" => Command::CursorDown,
            "cursorLineStart" => Command::CursorLineStart,
            "cursorLineEnd" => Command::CursorLineEnd,
            "cursorFileStart" => Command::CursorFileStart,
            "cursorFileEnd" => Command::CursorFileEnd,
            "selectLeft" => Command::SelectLeft,
            "selectRight" => Command::SelectRight,
            "selectUp" => Command::SelectUp,
            "selectDown" => Command::SelectDown,
            "selectLineStart" => Command::SelectLineStart,
            "selectLineEnd" => Command::SelectLineEnd,
            "insertNewline" => Command::InsertNewline,
            "insertTab" => Command::InsertTab,
            "deleteBackward" => Command::DeleteBackward,
            "deleteForward" => Command::DeleteForward,
            "clearSelection" => Command::ClearSelection,
            "selectAll" => Command::SelectAll,
            "scrollUp" => Command::ScrollUp,
            "scrollDown" => Command::ScrollDown,
            "pageUp" => Command::PageUp,
            "pageDown" => Command::PageDown,
            "new" => Command::New,
            "open" => Command::Open,
            "save" => Command::Save,
            "exit" | "quit" => Command::Exit,
            "toggleBold" | "bold" => Command::ToggleBold,
            "toggleItalic" | "italic" => Command::ToggleItalic,
            "highlight" => Command::Highlight,
            "focusMenuBar" => Command::FocusMenuBar,
            other => Command::Custom(other.to_string()),
        }
    }

    pub fn is_edit_command(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::InsertNewline
                | Command::InsertTab
                | Command::DeleteBackward
                | Command::DeleteForward
        )
    }

    pub fn is_cursor_command(&self) -> bool {
        matches!(
            self,
            Command::CursorLeft
                | Command::CursorRight
                | Command::CursorUp
                | Command::CursorDown
                | Command::CursorLineStart
                | Command::CursorLineEnd
                | Command::CursorFileStart
                | Command::CursorFileEnd
        )
    }

    pub fn is_selection_command(&self) -> bool {
        matches!(
            self,
            Command::SelectLeft
                | Command::SelectRight
                | Command::SelectUp
                | Command::SelectDown
                | Command::SelectLineStart
                | Command::SelectLineEnd
                | Command::ClearSelection
                | Command::SelectAll
        )
    }

    pub fn is_style_command(&self) -> bool {
        matches!(
            self,
            Command::ToggleBold | Command::ToggleItalic | Command::Highlight
        )
    }
}
