// Small string helpers shared by the classifier and the UI.

/// Cut `s` to at most `max` characters, appending `...` when anything was dropped.
pub fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((byte, _)) => format!("{}...", &s[..byte]),
        None => s.to_string(),
    }
}

/// Seed for the per-session RNG, drawn from the browser's `Math.random`.
pub fn browser_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_strings_pass_through() {
        assert_eq!(truncate_chars("abc", 20), "abc");
        assert_eq!(truncate_chars("", 20), "");
    }

    #[test]
    fn exact_length_is_not_truncated() {
        let s = "a".repeat(20);
        assert_eq!(truncate_chars(&s, 20), s);
    }

    #[test]
    fn counts_characters_not_bytes() {
        let s = "Сделай гоночную игру";
        assert_eq!(s.chars().count(), 20);
        assert_eq!(truncate_chars(s, 20), s);
        assert_eq!(truncate_chars("Приготовь суп быстро!", 20), "Приготовь суп быстро...");
    }
}
