//! Static font metrics for the résumé attachment.
//!
//! Character widths are in em units (relative to font size) and cover ASCII
//! 0x20..=0x7E; anything outside falls back to an average width. The
//! approximation is deliberate: the attachment uses one built-in PDF font at a
//! fixed size, so a static table is enough to word-wrap within ±1–2% of the
//! true line width.

/// Character-width table for the attachment font (a Helvetica-class
/// sans-serif). `widths[i]` = width of ASCII character `(i + 32)`.
pub struct FontMetrics {
    widths: [f32; 95],
    /// Fallback for non-ASCII codepoints.
    pub average_char_width: f32,
    pub space_width: f32,
}

/// Metrics for the single font the renderer embeds (Helvetica).
pub static BODY_FONT: FontMetrics = FontMetrics {
    #[rustfmt::skip]
    widths: [
        // sp    !     "     #     $     %     &     '     (     )     *     +     ,     -     .     /
        0.25, 0.30, 0.38, 0.56, 0.56, 0.89, 0.67, 0.22, 0.33, 0.33, 0.39, 0.59, 0.28, 0.33, 0.28, 0.31,
        // 0     1     2     3     4     5     6     7     8     9
        0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56, 0.56,
        // :     ;     <     =     >     ?     @
        0.28, 0.28, 0.59, 0.59, 0.59, 0.50, 1.02,
        // A     B     C     D     E     F     G     H     I     J     K     L     M
        0.67, 0.61, 0.61, 0.67, 0.56, 0.50, 0.67, 0.67, 0.25, 0.39, 0.61, 0.53, 0.78,
        // N     O     P     Q     R     S     T     U     V     W     X     Y     Z
        0.67, 0.72, 0.56, 0.72, 0.61, 0.50, 0.56, 0.67, 0.67, 0.89, 0.61, 0.61, 0.56,
        // [     \     ]     ^     _     `
        0.28, 0.31, 0.28, 0.47, 0.56, 0.34,
        // a     b     c     d     e     f     g     h     i     j     k     l     m
        0.56, 0.56, 0.50, 0.56, 0.56, 0.31, 0.56, 0.56, 0.22, 0.22, 0.53, 0.22, 0.83,
        // n     o     p     q     r     s     t     u     v     w     x     y     z
        0.56, 0.56, 0.56, 0.56, 0.33, 0.44, 0.39, 0.56, 0.50, 0.72, 0.50, 0.50, 0.44,
        // {     |     }     ~
        0.33, 0.26, 0.33, 0.59,
    ],
    average_char_width: 0.52,
    space_width: 0.25,
};

impl FontMetrics {
    /// Rendered width of a string in em units.
    pub fn measure_str(&self, s: &str) -> f32 {
        s.chars()
            .map(|c| {
                let code = c as usize;
                if (32..=126).contains(&code) {
                    self.widths[code - 32]
                } else {
                    self.average_char_width
                }
            })
            .sum()
    }

    /// Greedy word-wrap at `max_width_em`, returning the printed lines.
    /// A single word wider than the line gets a line of its own rather than
    /// being split.
    pub fn wrap(&self, text: &str, max_width_em: f32) -> Vec<String> {
        let mut lines = Vec::new();
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in text.split_whitespace() {
            let word_width = self.measure_str(word);
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + self.space_width + word_width > max_width_em {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += self.space_width + word_width;
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_empty_is_zero() {
        assert_eq!(BODY_FONT.measure_str(""), 0.0);
    }

    #[test]
    fn test_measure_known_word() {
        // "Rust" = R(0.61) + u(0.56) + s(0.44) + t(0.39) = 2.00
        let width = BODY_FONT.measure_str("Rust");
        assert!((width - 2.00).abs() < 1e-3, "got {width}");
    }

    #[test]
    fn test_non_ascii_uses_average_width() {
        let width = BODY_FONT.measure_str("é");
        assert!((width - BODY_FONT.average_char_width).abs() < 1e-4);
    }

    #[test]
    fn test_wrap_short_text_is_one_line() {
        let lines = BODY_FONT.wrap("Senior engineer", 40.0);
        assert_eq!(lines, vec!["Senior engineer".to_string()]);
    }

    #[test]
    fn test_wrap_long_text_breaks_between_words() {
        let text = "word ".repeat(30);
        let lines = BODY_FONT.wrap(&text, 10.0);
        assert!(lines.len() > 1);
        // Every line except the last stays within the width budget.
        for line in &lines[..lines.len() - 1] {
            assert!(BODY_FONT.measure_str(line) <= 10.0 + 1e-3);
        }
    }

    #[test]
    fn test_wrap_empty_text_yields_no_lines() {
        assert!(BODY_FONT.wrap("   ", 40.0).is_empty());
    }

    #[test]
    fn test_oversized_word_gets_its_own_line() {
        let lines = BODY_FONT.wrap("tiny Pneumonoultramicroscopicsilicovolcanoconiosis tiny", 5.0);
        assert_eq!(lines.len(), 3);
    }
}
