//! texteditor - 终端富文本编辑器库
//!
//! 模块结构：
//! - core: 输入事件、命令、定宽文本工具
//! - models: 文本缓冲、选区、样式标签、文档
//! - kernel: 状态、Action / Effect、Store 与各个 reducer，服务端口与适配器
//! - app: 工作台（输入路由、效果执行、绘制）
//! - tui: 终端集成（crossterm 事件转换、终端守护）

pub mod core;
pub mod kernel;
pub mod models;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod tui;
