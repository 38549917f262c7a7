//! 编辑操作：缓冲区每次修改的描述，供样式标签随文本平移

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOp {
    Insert { char_offset: usize, text: String },
    Delete { start: usize, end: usize },
}

impl EditOp {
    /// 插入的字符数（删除为 0）
    pub fn inserted_len(&self) -> usize {
        match self {
            EditOp::Insert { text, .. } => text.chars().count(),
            EditOp::Delete { .. } => 0,
        }
    }
}
