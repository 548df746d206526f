//! Advance widths of the standard Helvetica faces, from the Adobe AFM files.
//!
//! Widths are in thousandths of the font size and cover printable ASCII.
//! Helvetica-Oblique shares the Helvetica widths.

/// Width used for anything outside printable ASCII.
const FALLBACK_WIDTH: u16 = 556;

/// Helvetica, codes 32 through 126.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold, codes 32 through 126.
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

pub(crate) fn glyph_width(bold: bool, ch: char) -> u16 {
    let table = if bold { &HELVETICA_BOLD } else { &HELVETICA };
    match ch {
        ' '..='~' => table[ch as usize - 32],
        ch if ch.is_ascii_control() => table[0],
        _ => FALLBACK_WIDTH,
    }
}

/// Rendered width of `text` in points.
pub(crate) fn text_width(bold: bool, text: &str, size: f32) -> f32 {
    let units: u32 = text.chars().map(|ch| u32::from(glyph_width(bold, ch))).sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_glyph_widths() {
        assert_eq!(glyph_width(false, ' '), 278);
        assert_eq!(glyph_width(false, 'W'), 944);
        assert_eq!(glyph_width(false, 'i'), 222);
        assert_eq!(glyph_width(true, 'i'), 278);
        assert_eq!(glyph_width(true, '~'), 584);
        assert_eq!(glyph_width(false, '\u{e9}'), FALLBACK_WIDTH);
    }

    #[test]
    fn test_text_width_scales_with_size() {
        assert!((text_width(false, "WW", 10.0) - 18.88).abs() < 1e-3);
        assert!((text_width(true, "WW", 20.0) - 37.76).abs() < 1e-3);
        assert_eq!(text_width(false, "", 12.0), 0.0);
    }
}
