use std::ops::Range;

use super::character::CharacterData;

/// One page of the paginated document: a contiguous slice of the input
/// character sequence plus its position in the document.
///
/// Pages are always produced fresh by pagination and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Index range into the full character sequence.
    pub range: Range<usize>,
    /// 1-based page number.
    pub number: usize,
    /// Total page count of the document.
    pub total: usize,
}

impl Page {
    /// The characters on this page.
    pub fn slice<'a>(&self, characters: &'a [CharacterData]) -> &'a [CharacterData] {
        &characters[self.range.clone()]
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}
