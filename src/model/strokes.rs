//! Stroke-order path data: cache, provider boundary, and batched fetch.
//!
//! Stroke data comes from outside the core (hanzi-writer JSON files or any
//! other source implementing `StrokeProvider`). The cache is owned by the
//! caller and merged additively; a character that fails to load simply renders
//! without a stroke diagram.

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::PathBuf;
use std::thread;

use kurbo::BezPath;
use serde::Deserialize;

use crate::error::StrokeError;

/// Parsed stroke outlines per character, in drawing order, in the
/// 1024-unit hanzi-writer coordinate space (y-up).
pub type StrokeCache = HashMap<char, Vec<BezPath>>;

/// Source of raw stroke path strings for a character.
///
/// `Sync` so a batch fetch can issue lookups concurrently.
pub trait StrokeProvider: Sync {
    fn load(&self, ch: char) -> Result<Vec<String>, StrokeError>;
}

/// hanzi-writer data file: one JSON object per character. Only the stroke
/// outlines are used here; medians and radicals are ignored.
#[derive(Deserialize)]
struct StrokeFile {
    strokes: Vec<String>,
}

/// Loads `<dir>/<char>.json` hanzi-writer data files.
pub struct DirStrokeProvider {
    dir: PathBuf,
}

impl DirStrokeProvider {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl StrokeProvider for DirStrokeProvider {
    fn load(&self, ch: char) -> Result<Vec<String>, StrokeError> {
        let path = self.dir.join(format!("{ch}.json"));
        if !path.is_file() {
            return Err(StrokeError::NotFound(ch));
        }
        let data = fs::read_to_string(&path)?;
        let file: StrokeFile =
            serde_json::from_str(&data).map_err(|e| StrokeError::Malformed {
                ch,
                message: e.to_string(),
            })?;
        Ok(file.strokes)
    }
}

/// Parse raw SVG path strings into outlines.
///
/// An unparsable path is logged and skipped so one bad stroke cannot drop the
/// whole character.
pub fn parse_stroke_paths(ch: char, raw: &[String]) -> Vec<BezPath> {
    raw.iter()
        .filter_map(|svg| match BezPath::from_svg(svg) {
            Ok(path) => Some(path),
            Err(e) => {
                log::warn!("Skipping unparsable stroke path for '{ch}': {e}");
                None
            }
        })
        .collect()
}

/// Fetch stroke data for every requested character not already cached.
///
/// Requests are deduplicated and issued concurrently; the result holds only
/// the successful lookups. Failures are logged per character and dropped.
/// The caller merges the result with `merge_into` and re-runs layout;
/// discarding the returned map instead is how a torn-down consumer cancels.
pub fn fetch_missing(
    provider: &dyn StrokeProvider,
    cache: &StrokeCache,
    characters: impl IntoIterator<Item = char>,
) -> StrokeCache {
    let missing: BTreeSet<char> = characters
        .into_iter()
        .filter(|ch| !cache.contains_key(ch))
        .collect();

    let mut fetched = StrokeCache::new();
    if missing.is_empty() {
        return fetched;
    }

    thread::scope(|scope| {
        let handles: Vec<_> = missing
            .iter()
            .map(|&ch| scope.spawn(move || (ch, provider.load(ch))))
            .collect();

        for handle in handles {
            match handle.join() {
                Ok((ch, Ok(raw))) => {
                    fetched.insert(ch, parse_stroke_paths(ch, &raw));
                }
                Ok((ch, Err(e))) => {
                    log::warn!("Stroke lookup failed for '{ch}': {e}");
                }
                Err(_) => log::warn!("Stroke lookup thread panicked"),
            }
        }
    });

    fetched
}

/// Merge fetched entries into the cache without replacing resolved ones.
pub fn merge_into(cache: &mut StrokeCache, fetched: StrokeCache) {
    for (ch, strokes) in fetched {
        cache.entry(ch).or_insert(strokes);
    }
}
