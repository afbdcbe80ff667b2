//! Hit regions for the interactive pronunciation picker.
//!
//! Recomputes the drawn pinyin-cell geometry in a display coordinate space
//! (the page may be shown scaled to fit a container) so a UI layer can place
//! clickable regions in registration with the rendered pinyin band. Pure
//! geometry, no drawing.

use crate::config::Settings;
use crate::model::{CharacterData, Page};

use super::geometry::{PageGeometry, Rect};
use super::units::{page_height_px, PAGE_WIDTH_PX};

/// A clickable pinyin cell for one character with multiple candidate readings.
#[derive(Debug, Clone, PartialEq)]
pub struct HitRegion {
    /// Display-space rectangle of the head pinyin cell.
    pub rect: Rect,
    /// Position of the character in the full input sequence.
    pub char_index: usize,
    /// All candidate readings.
    pub pinyin: Vec<String>,
    /// The reading currently shown on the sheet.
    pub selected: String,
}

/// Compute hit regions for one page, scaled into a display surface of
/// `display_size` pixels.
///
/// Only characters with more than one candidate reading produce a region, and
/// only when the pinyin band is drawn at all.
pub fn hit_regions(
    characters: &[CharacterData],
    page: &Page,
    settings: &Settings,
    display_size: (f32, f32),
) -> Vec<HitRegion> {
    if !settings.show_pinyin {
        return Vec::new();
    }

    let geom = PageGeometry::new(settings);
    let sx = display_size.0 / PAGE_WIDTH_PX;
    let sy = display_size.1 / page_height_px();

    page.slice(characters)
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_ambiguous())
        .map(|(row, c)| HitRegion {
            rect: geom.pinyin_rect(row, 0).scaled(sx, sy),
            char_index: page.range.start + row,
            pinyin: c.pinyin.clone(),
            selected: c.selected_pinyin.clone(),
        })
        .collect()
}
