//! 核心框架模块
//!
//! 提供编辑器框架的核心抽象：
//! - Event: 统一输入事件（与终端后端解耦）
//! - Command: 命令系统
//! - text_window: 固定宽度文本工具

pub mod command;
pub mod event;
pub mod text_window;

pub use command::Command;
pub use event::{InputEvent, Key, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
