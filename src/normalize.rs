//! Unicode-to-ASCII normalization of raw input.

/// Unicode glyphs and their canonical ASCII spellings.
pub const SUBSTITUTIONS: [(char, &str); 8] = [
    ('¬', "~"),
    ('∧', "&"),
    ('∨', "|"),
    ('⊕', "^"),
    ('→', "->"),
    ('↔', "<->"),
    ('⊤', "1"),
    ('⊥', "0"),
];

/// Replaces logical glyphs by their ASCII spelling, collapses whitespace runs
/// into a single space and trims both ends.
pub fn normalize(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut pending_space = false;

    for c in raw.chars() {
        if c.is_whitespace() {
            pending_space = !result.is_empty();
            continue;
        }
        if pending_space {
            result.push(' ');
            pending_space = false;
        }
        match SUBSTITUTIONS.iter().find(|(glyph, _)| *glyph == c) {
            Some((_, ascii)) => result.push_str(ascii),
            None => result.push(c),
        }
    }

    result
}
