//! 文件服务模块
//!
//! 本地文件系统实现；编辑器只需要读、写、列目录

pub mod local;

pub use local::LocalFileProvider;
