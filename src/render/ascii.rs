use unicode_normalization::UnicodeNormalization;

/// Fold text into printable ASCII for renderers limited to the base fonts.
///
/// Typographic punctuation and a few letters without a decomposition are
/// substituted; everything else is NFKD-decomposed and non-ASCII marks are
/// dropped, so "Sé" becomes "Se".
pub fn to_ascii(text: &str) -> String {
    let mut folded = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii() {
            folded.push(ch);
        } else if let Some(replacement) = substitute(ch) {
            folded.push_str(replacement);
        } else {
            folded.extend(std::iter::once(ch).nfkd().filter(char::is_ascii));
        }
    }
    folded
}

fn substitute(ch: char) -> Option<&'static str> {
    let replacement = match ch {
        '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => "'",
        '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => "\"",
        '\u{2013}' | '\u{2014}' | '\u{2212}' => "-",
        '\u{2022}' | '\u{00B7}' => "*",
        '\u{00A0}' => " ",
        '\u{20AC}' => "EUR",
        '\u{00A3}' => "GBP",
        '\u{00DF}' => "ss",
        '\u{00E6}' => "ae",
        '\u{00C6}' => "AE",
        '\u{0153}' => "oe",
        '\u{0152}' => "OE",
        '\u{00F8}' => "o",
        '\u{00D8}' => "O",
        '\u{0142}' => "l",
        '\u{0141}' => "L",
        '\u{0111}' => "d",
        '\u{0110}' => "D",
        _ => return None,
    };
    Some(replacement)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accents_are_stripped() {
        assert_eq!(to_ascii("São Paulo"), "Sao Paulo");
        assert_eq!(to_ascii("Zürich café"), "Zurich cafe");
        assert_eq!(to_ascii("Kraków"), "Krakow");
    }

    #[test]
    fn test_punctuation_is_substituted() {
        assert_eq!(to_ascii("Don’t miss “Fado” – nightly"), "Don't miss \"Fado\" - nightly");
        assert_eq!(to_ascii("Wait…"), "Wait...");
        assert_eq!(to_ascii("Tickets €12"), "Tickets EUR12");
    }

    #[test]
    fn test_letters_without_decomposition() {
        assert_eq!(to_ascii("Łódź"), "Lodz");
        assert_eq!(to_ascii("Straße"), "Strasse");
        assert_eq!(to_ascii("Ærøskøbing"), "AEroskobing");
    }

    #[test]
    fn test_unmappable_characters_are_dropped() {
        assert_eq!(to_ascii("東京 Tokyo"), " Tokyo");
        assert!(to_ascii("🎉 party").is_ascii());
    }
}
