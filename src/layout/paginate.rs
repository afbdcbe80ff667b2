//! Greedy pagination of the character sequence under the page height budget.

use crate::config::Settings;
use crate::model::{CharacterData, Page};

use super::geometry::PageGeometry;

/// Partition the character sequence into pages.
///
/// Single greedy pass: a page closes when the next character's row unit would
/// exceed the available height and the page already holds something. A
/// character too tall for any page still gets its own page rather than being
/// dropped or split. The result is a fresh partition every call and is fully
/// determined by the inputs.
pub fn paginate(characters: &[CharacterData], settings: &Settings) -> Vec<Page> {
    let geom = PageGeometry::new(settings);
    let unit = geom.row_unit_height;
    let budget = geom.avail_height;

    let mut breaks = Vec::new();
    let mut start = 0usize;
    let mut used = 0.0f32;

    for index in 0..characters.len() {
        if used + unit > budget && index > start {
            breaks.push(start..index);
            start = index;
            used = 0.0;
        }
        used += unit;
    }
    if start < characters.len() {
        breaks.push(start..characters.len());
    }

    let total = breaks.len();
    breaks
        .into_iter()
        .enumerate()
        .map(|(i, range)| Page {
            range,
            number: i + 1,
            total,
        })
        .collect()
}
