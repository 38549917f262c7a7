//! 应用层：工作台（输入路由、效果执行、绘制）与主题

pub mod theme;
mod workbench;

pub use workbench::Workbench;
