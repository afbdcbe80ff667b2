use pinyin::ToPinyinMulti;

/// One input character with its candidate pronunciations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterData {
    pub ch: char,
    /// All candidate pinyin readings, tone-marked, deduplicated, in
    /// dictionary order.
    pub pinyin: Vec<String>,
    /// The reading currently chosen for the pinyin row. Defaults to the
    /// first candidate; empty when no reading is known.
    pub selected_pinyin: String,
}

impl CharacterData {
    pub fn new(ch: char, pinyin: Vec<String>) -> Self {
        let selected_pinyin = pinyin.first().cloned().unwrap_or_default();
        Self {
            ch,
            pinyin,
            selected_pinyin,
        }
    }

    /// Whether the pinyin row needs a pronunciation picker for this character.
    pub fn is_ambiguous(&self) -> bool {
        self.pinyin.len() > 1
    }
}

/// CJK unified ideographs range accepted as practice characters.
fn is_hanzi(ch: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&ch)
}

/// Parse input text into practice characters.
///
/// Non-CJK characters (Latin, punctuation, whitespace) are skipped. Each kept
/// character gets its full candidate reading list; heteronyms keep every
/// distinct reading, first one selected.
pub fn parse_text(text: &str) -> Vec<CharacterData> {
    text.chars()
        .filter(|ch| is_hanzi(*ch))
        .map(|ch| CharacterData::new(ch, lookup_pinyin(ch)))
        .collect()
}

/// All candidate tone-marked readings for one character, deduplicated in order.
fn lookup_pinyin(ch: char) -> Vec<String> {
    let mut readings = Vec::new();
    if let Some(multi) = ch.to_pinyin_multi() {
        for p in multi {
            let reading = p.with_tone().to_string();
            if !readings.contains(&reading) {
                readings.push(reading);
            }
        }
    }
    readings
}

/// Select a pronunciation for the character at `index`.
///
/// No-op when the index is out of bounds or the value is not one of the
/// character's candidates.
pub fn select_pinyin(characters: &mut [CharacterData], index: usize, reading: &str) {
    if let Some(c) = characters.get_mut(index) {
        if c.pinyin.iter().any(|p| p == reading) {
            c.selected_pinyin = reading.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_skips_non_hanzi() {
        let chars = parse_text("你a好, 世界!");
        let text: String = chars.iter().map(|c| c.ch).collect();
        assert_eq!(text, "你好世界");
    }

    #[test]
    fn test_parse_text_attaches_readings() {
        let chars = parse_text("你");
        assert_eq!(chars.len(), 1);
        assert_eq!(chars[0].pinyin, vec!["nǐ"]);
        assert_eq!(chars[0].selected_pinyin, "nǐ");
    }

    #[test]
    fn test_heteronym_keeps_all_readings() {
        // 好 reads hǎo or hào
        let chars = parse_text("好");
        assert!(chars[0].pinyin.len() > 1, "expected multiple readings");
        assert!(chars[0].is_ambiguous());
        assert_eq!(chars[0].selected_pinyin, chars[0].pinyin[0]);
    }

    #[test]
    fn test_select_pinyin_only_accepts_candidates() {
        let mut chars = parse_text("好");
        let second = chars[0].pinyin[1].clone();
        select_pinyin(&mut chars, 0, &second);
        assert_eq!(chars[0].selected_pinyin, second);

        select_pinyin(&mut chars, 0, "zzz");
        assert_eq!(chars[0].selected_pinyin, second);

        // Out of bounds is a no-op
        select_pinyin(&mut chars, 5, &second);
    }
}
