use std::path::PathBuf;

/// store 请求的副作用；在 kernel 之外执行，结果以 [`Action`](super::Action) 回灌
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ReadFile(PathBuf),
    WriteFile { path: PathBuf, content: String },
    ListDir(PathBuf),
    SetTitle(String),
    Quit,
}
