//! Excerpt truncation helper

/// Take the first `max_len` characters of `text`, appending `"..."` when
/// anything was cut
///
/// Returns the excerpt and whether truncation occurred. Operates on
/// characters, not bytes, so multi-byte input never splits mid-character.
pub fn excerpt(text: &str, max_len: usize) -> (String, bool) {
    let mut chars = text.char_indices();
    match chars.nth(max_len) {
        None => (text.to_string(), false),
        Some((byte_index, _)) => {
            let mut cut = text[..byte_index].to_string();
            cut.push_str("...");
            (cut, true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_untouched() {
        let (text, truncated) = excerpt("short clause", 80);
        assert_eq!(text, "short clause");
        assert!(!truncated);
    }

    #[test]
    fn test_exact_length_untouched() {
        let (text, truncated) = excerpt("abcde", 5);
        assert_eq!(text, "abcde");
        assert!(!truncated);
    }

    #[test]
    fn test_long_text_truncated() {
        let (text, truncated) = excerpt("abcdefgh", 5);
        assert_eq!(text, "abcde...");
        assert!(truncated);
    }

    #[test]
    fn test_multibyte_boundary() {
        let (text, truncated) = excerpt("§1 Haftungsbegrenzung über alles", 4);
        assert_eq!(text, "§1 H...");
        assert!(truncated);
    }

    #[test]
    fn test_empty() {
        let (text, truncated) = excerpt("", 80);
        assert_eq!(text, "");
        assert!(!truncated);
    }
}
