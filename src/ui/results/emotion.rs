// SPDX-License-Identifier: MPL-2.0
//! Emotion label presentation: glyph table and label casing.

/// Glyph shown for labels missing from the table, and on the placeholder.
pub const DEFAULT_GLYPH: &str = "🐶";

/// Glyph shown above the error panel.
pub const ERROR_GLYPH: &str = "📡";

const GLYPHS: [(&str, &str); 7] = [
    ("happy", "🥰"),
    ("sad", "🥺"),
    ("angry", "😠"),
    ("relaxed", "😌"),
    ("scared", "😨"),
    ("playful", "🎾"),
    ("aggressive", "😡"),
];

/// Returns the glyph for an emotion label. Case-insensitive.
#[must_use]
pub fn emotion_glyph(label: &str) -> &'static str {
    GLYPHS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(label))
        .map_or(DEFAULT_GLYPH, |(_, glyph)| glyph)
}

/// Upper-cases the first character and leaves the rest untouched.
#[must_use]
pub fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Upper-cases the first character of every whitespace-separated word.
#[must_use]
pub fn capitalize_words(label: &str) -> String {
    let mut at_word_start = true;
    let mut out = String::with_capacity(label.len());
    for ch in label.chars() {
        if at_word_start && !ch.is_whitespace() {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        at_word_start = ch.is_whitespace();
    }
    out
}
