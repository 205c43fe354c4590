// Highlight palette
//
// Each entry is a light background with a darker text color of the same hue.
// Keyword lists are priority-ordered: the first keyword found in the text wins.

/// Background + text color, both `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub background: &'static str,
    pub text: &'static str,
}

pub const RED: ColorPair = ColorPair { background: "#fef2f2", text: "#dc2626" };
pub const BLUE: ColorPair = ColorPair { background: "#eff6ff", text: "#1d4ed8" };
pub const GREEN: ColorPair = ColorPair { background: "#f0fdf4", text: "#16a34a" };
pub const YELLOW: ColorPair = ColorPair { background: "#fefce8", text: "#ca8a04" };
pub const ORANGE: ColorPair = ColorPair { background: "#fff7ed", text: "#ea580c" };
pub const PURPLE: ColorPair = ColorPair { background: "#faf5ff", text: "#7e22ce" };
pub const PINK: ColorPair = ColorPair { background: "#fdf2f8", text: "#be185d" };
pub const GRAY: ColorPair = ColorPair { background: "#f9fafb", text: "#4b5563" };
pub const BLACK: ColorPair = ColorPair { background: "#f3f4f6", text: "#111827" };

/// Fill used for banded (alternate) rows.
pub const BAND_BACKGROUND: &str = "#f9fafb";

/// Used when no keyword matches.
pub const DEFAULT_PAIR: ColorPair = RED;

/// Keywords recognized by the literal highlighter. Red is the fallback, not a keyword.
pub const LITERAL_KEYWORDS: [(&str, ColorPair); 3] = [
    ("blue", BLUE),
    ("green", GREEN),
    ("yellow", YELLOW),
];

/// Keywords recognized by the prompt parser.
pub const EXTENDED_KEYWORDS: [(&str, ColorPair); 9] = [
    ("red", RED),
    ("blue", BLUE),
    ("green", GREEN),
    ("yellow", YELLOW),
    ("orange", ORANGE),
    ("purple", PURPLE),
    ("pink", PINK),
    ("gray", GRAY),
    ("black", BLACK),
];

/// Case-sensitive, unanchored: "Blue" does not match, "bluetooth" does.
pub fn literal_color(instruction: &str) -> ColorPair {
    first_match(&LITERAL_KEYWORDS, instruction)
}

/// Same first-match rule over the larger palette. Callers lower-case first.
pub fn extended_color(lowered: &str) -> ColorPair {
    first_match(&EXTENDED_KEYWORDS, lowered)
}

fn first_match(keywords: &[(&str, ColorPair)], text: &str) -> ColorPair {
    keywords
        .iter()
        .find(|(name, _)| text.contains(name))
        .map(|(_, pair)| *pair)
        .unwrap_or(DEFAULT_PAIR)
}

impl ColorPair {
    /// Look up a palette entry by name (case-insensitive). Accepts "grey".
    pub fn by_name(name: &str) -> Option<ColorPair> {
        let lowered = name.trim().to_ascii_lowercase();
        let lowered = if lowered == "grey" { "gray".to_string() } else { lowered };
        EXTENDED_KEYWORDS
            .iter()
            .find(|(n, _)| *n == lowered)
            .map(|(_, pair)| *pair)
    }

    /// Palette names in priority order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        EXTENDED_KEYWORDS.iter().map(|(n, _)| *n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_priority() {
        assert_eq!(literal_color("highlight blue and green rows"), BLUE);
        assert_eq!(literal_color("green then yellow"), GREEN);
        assert_eq!(literal_color("yellow"), YELLOW);
        assert_eq!(literal_color("highlight rows"), RED);
        assert_eq!(literal_color(""), RED);
    }

    #[test]
    fn test_literal_is_case_sensitive_and_unanchored() {
        assert_eq!(literal_color("Highlight BLUE rows"), RED);
        assert_eq!(literal_color("bluetooth devices"), BLUE);
    }

    #[test]
    fn test_literal_ignores_extended_colors() {
        assert_eq!(literal_color("highlight in purple"), RED);
    }

    #[test]
    fn test_extended_priority() {
        assert_eq!(extended_color("red or blue"), RED);
        assert_eq!(extended_color("make them purple"), PURPLE);
        assert_eq!(extended_color("nothing here"), RED);
    }

    #[test]
    fn test_by_name() {
        assert_eq!(ColorPair::by_name("Green"), Some(GREEN));
        assert_eq!(ColorPair::by_name("grey"), Some(GRAY));
        assert_eq!(ColorPair::by_name("teal"), None);
        assert_eq!(ColorPair::names().count(), 9);
    }
}
