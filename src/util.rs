/// Whitespace stripped from user input: Unicode White_Space plus U+FEFF
/// (BOM / zero-width no-break space), but not U+0085 (NEL).
pub fn is_trimmable(c: char) -> bool {
    c == '\u{feff}' || (c != '\u{85}' && c.is_whitespace())
}

pub fn trim_input(s: &str) -> &str {
    s.trim_matches(is_trimmable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bom_and_ordinary_whitespace() {
        assert_eq!(trim_input("\u{feff} key\t\u{a0}\n"), "key");
        assert_eq!(trim_input("\u{2028}key\u{3000}"), "key");
    }

    #[test]
    fn keeps_next_line_character() {
        assert_eq!(trim_input("\u{85}key\u{85}"), "\u{85}key\u{85}");
        assert_eq!(trim_input(" \u{85}key "), "\u{85}key");
    }
}
