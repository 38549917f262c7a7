//! 数据模型层

pub mod color;
pub mod document;
pub mod edit_op;
pub mod selection;
pub mod style_tags;
pub mod text_buffer;

pub use color::{HexColor, ParseColorError};
pub use document::{window_title, Document, StyleError, ToggleOutcome, APP_NAME, FONT_SIZE};
pub use edit_op::EditOp;
pub use selection::{Granularity, Selection};
pub use style_tags::{
    BaseFont, FontSlant, FontWeight, ResolvedStyle, TagName, TagSet, TagStyle, TagTable,
};
pub use text_buffer::{slice_to_cow, TextBuffer};
