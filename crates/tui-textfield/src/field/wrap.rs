//! Word wrapping and measurement of error label text.

use ratatui::layout::Size;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` into lines no wider than `width` cells.
///
/// Words move to the next line when they do not fit; words wider than a whole
/// line are split between characters. Explicit newlines start a new line.
/// A non-empty text always yields at least one line. A zero width is treated
/// as one cell so every character still gets a line.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let width = usize::from(width.max(1));
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();

            if word_width > width {
                if !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if line_width + ch_width > width && !line.is_empty() {
                        lines.push(std::mem::take(&mut line));
                        line_width = 0;
                    }
                    line.push(ch);
                    line_width += ch_width;
                }
                continue;
            }

            if line.is_empty() {
                line.push_str(word);
                line_width = word_width;
            } else if line_width + 1 + word_width <= width {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
            } else {
                lines.push(std::mem::replace(&mut line, word.to_string()));
                line_width = word_width;
            }
        }

        lines.push(line);
    }

    lines
}

/// Size of `text` wrapped at `width`: widest line by number of lines.
pub fn measure(text: &str, width: u16) -> Size {
    let lines = wrap(text, width);
    let widest = lines.iter().map(|l| l.width()).max().unwrap_or(0);

    Size {
        width: u16::try_from(widest).unwrap_or(u16::MAX),
        height: u16::try_from(lines.len()).unwrap_or(u16::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_fits_on_one_line() {
        assert_eq!(wrap("Email is not valid.", 40), vec!["Email is not valid."]);
    }

    #[test]
    fn test_wrap_breaks_between_words() {
        assert_eq!(
            wrap("Password have to contain at least 8 symbols", 20),
            vec!["Password have to", "contain at least 8", "symbols"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert_eq!(wrap("ab abcdefgh", 4), vec!["ab", "abcd", "efgh"]);
    }

    #[test]
    fn test_wrap_newlines_and_blank_text() {
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
        assert_eq!(wrap("   ", 10), vec![""]);
        assert!(wrap("", 10).is_empty());
    }

    #[test]
    fn test_wrap_zero_width() {
        assert_eq!(wrap("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_wrap_wide_chars() {
        // each CJK character takes two cells
        assert_eq!(wrap("日本語", 4), vec!["日本", "語"]);
        assert_eq!(wrap("日本", 1), vec!["日", "本"]);
    }

    #[test]
    fn test_measure() {
        let size = measure("Password have to contain at least 8 symbols", 20);
        assert_eq!(size.height, 3);
        assert_eq!(size.width, 18);

        assert_eq!(measure("", 20), Size { width: 0, height: 0 });
    }
}
