//! 文件访问契约：打开 / 保存 / 列目录（文件对话框用）

use std::io;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, FileError>;

#[derive(Debug)]
pub enum FileError {
    Io(io::Error),
    NotFound(PathBuf),
    PermissionDenied(PathBuf),
    NotADirectory(PathBuf),
    NotAFile(PathBuf),
    InvalidData(PathBuf),
}

impl FileError {
    /// Attaches `path` to bare IO errors whose kind we can name.
    pub fn with_path(err: io::Error, path: &Path) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => FileError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => FileError::PermissionDenied(path.to_path_buf()),
            io::ErrorKind::InvalidData => FileError::InvalidData(path.to_path_buf()),
            _ => FileError::Io(err),
        }
    }
}

impl std::fmt::Display for FileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileError::Io(e) => write!(f, "IO error: {}", e),
            FileError::NotFound(p) => write!(f, "Not found: {}", p.display()),
            FileError::PermissionDenied(p) => write!(f, "Permission denied: {}", p.display()),
            FileError::NotADirectory(p) => write!(f, "Not a directory: {}", p.display()),
            FileError::NotAFile(p) => write!(f, "Not a file: {}", p.display()),
            FileError::InvalidData(p) => write!(f, "Not valid UTF-8 text: {}", p.display()),
        }
    }
}

impl std::error::Error for FileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FileError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FileError {
    fn from(e: io::Error) -> Self {
        FileError::Io(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
}

impl DirEntry {
    pub fn new(path: PathBuf, is_dir: bool) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        Self { path, name, is_dir }
    }
}

pub trait FileProvider: Send + Sync {
    /// 目录项：目录在前，再按名称（不区分大小写）排序
    fn read_dir(&self, path: &Path) -> Result<Vec<DirEntry>>;

    /// 整个文件读入内存
    fn read_file(&self, path: &Path) -> Result<String>;

    /// 直接覆盖写入（无临时文件、无备份）
    fn write_file(&self, path: &Path, content: &str) -> Result<()>;
}
