//! Data model: characters, pages, and stroke data.

pub mod character;
pub mod page;
pub mod strokes;

pub use character::{parse_text, select_pinyin, CharacterData};
pub use page::Page;
pub use strokes::{
    fetch_missing, merge_into, parse_stroke_paths, DirStrokeProvider, StrokeCache, StrokeProvider,
};
