//! Client text to printable text.

/// Code units the client uses as string-markup prefixes.
const MARKUP_UNITS: [u16; 3] = [0x0ba9, 0x0107, 0x0001];

/// Shown when a non-empty name has no printable characters left.
pub const UNREADABLE_PLACEHOLDER: &str = "(unreadable)";

/// Drop markup prefixes, control characters and unpaired surrogates.
pub fn sanitize_encoded(units: &[u16]) -> String {
    let printable = units
        .iter()
        .copied()
        .filter(|unit| *unit >= 0x20 && !MARKUP_UNITS.contains(unit));
    char::decode_utf16(printable).filter_map(Result::ok).collect()
}

/// Sanitized text, or the placeholder when sanitizing removed everything.
pub fn display_text(units: &[u16]) -> String {
    let text = sanitize_encoded(units);
    if text.is_empty() && !units.is_empty() {
        return UNREADABLE_PLACEHOLDER.to_string();
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn units(s: &str) -> Vec<u16> {
        s.encode_utf16().collect()
    }

    #[test]
    fn strips_markup_and_controls() {
        let mut raw = vec![0x0ba9, 0x0107];
        raw.extend(units("Mesmer\tBob"));
        raw.push(0x0001);
        assert_eq!(sanitize_encoded(&raw), "MesmerBob");
    }

    #[test]
    fn drops_unpaired_surrogates_keeps_pairs() {
        let mut raw = units("a");
        raw.push(0xd800);
        raw.extend(units("b\u{1F600}"));
        assert_eq!(sanitize_encoded(&raw), "ab\u{1F600}");
    }

    #[test]
    fn placeholder_only_for_nonempty_input() {
        assert_eq!(display_text(&[]), "");
        assert_eq!(display_text(&[0x0ba9, 0xdc00]), UNREADABLE_PLACEHOLDER);
    }
}
