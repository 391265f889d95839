use crate::glyphs::{HELVETICA_BOLD, HELVETICA_REGULAR};

pub const ELLIPSIS: char = '…';
const DEFAULT_GLYPH_WIDTH: f64 = 1.0;

/// Points per centimetre.
pub const PT_PER_CM: f64 = 28.35;

/// Advance width lookup, in units of the font size.
pub trait GlyphWidths {
    fn glyph_width(&self, ch: char) -> f64;

    fn text_width(&self, text: &str) -> f64 {
        text.chars().map(|ch| self.glyph_width(ch)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Font {
    #[default]
    Helvetica,
    HelveticaBold,
}

impl GlyphWidths for Font {
    fn glyph_width(&self, ch: char) -> f64 {
        let table = match self {
            Font::Helvetica => HELVETICA_REGULAR,
            Font::HelveticaBold => HELVETICA_BOLD,
        };
        table
            .binary_search_by_key(&ch, |(glyph, _)| *glyph)
            .map(|idx| table[idx].1)
            .unwrap_or(DEFAULT_GLYPH_WIDTH)
    }
}

/// Converts a physical width into font-relative units for a given size.
pub fn width_in_font_units(width_cm: f64, font_size_pt: f64) -> f64 {
    width_cm * PT_PER_CM / font_size_pt
}

/// Breaks lines that do not fit into `max_width` at spaces. Words wider than
/// the whole line are split between characters instead. Lines that already
/// fit, including empty ones, are kept as they are.
pub fn reflow_at_space<G: GlyphWidths>(lines: &[String], max_width: f64, font: &G) -> Vec<String> {
    let space_width = font.glyph_width(' ');
    let mut reflowed = Vec::new();
    for line in lines {
        if font.text_width(line) < max_width {
            reflowed.push(line.clone());
            continue;
        }
        let mut current = String::new();
        let mut current_width = 0.0;
        for word in line.split_whitespace() {
            let word_width = font.text_width(word);
            if word_width > max_width {
                if !current.is_empty() {
                    current.push(' ');
                    current_width += space_width;
                }
                push_chars(word, max_width, font, &mut current, &mut current_width, &mut reflowed);
                continue;
            }
            // A word that fits on its own always goes onto an empty line.
            if !current.is_empty() {
                if current_width + space_width + word_width > max_width {
                    reflowed.push(std::mem::take(&mut current));
                    current_width = 0.0;
                } else {
                    current.push(' ');
                    current_width += space_width;
                }
            }
            current.push_str(word);
            current_width += word_width;
        }
        reflowed.push(current);
    }
    reflowed
}

/// Breaks lines that do not fit into `max_width` between any two
/// characters, ignoring word boundaries.
pub fn reflow_at_char<G: GlyphWidths>(lines: &[String], max_width: f64, font: &G) -> Vec<String> {
    let mut reflowed = Vec::new();
    for line in lines {
        if font.text_width(line) < max_width {
            reflowed.push(line.clone());
            continue;
        }
        let mut current = String::new();
        let mut current_width = 0.0;
        push_chars(line, max_width, font, &mut current, &mut current_width, &mut reflowed);
        reflowed.push(current);
    }
    reflowed
}

fn push_chars<G: GlyphWidths>(
    text: &str,
    max_width: f64,
    font: &G,
    current: &mut String,
    current_width: &mut f64,
    reflowed: &mut Vec<String>,
) {
    for ch in text.chars() {
        let width = font.glyph_width(ch);
        if *current_width + width > max_width {
            reflowed.push(std::mem::take(current));
            *current_width = 0.0;
        }
        *current_width += width;
        current.push(ch);
    }
}

/// Cuts `line` so that it plus a trailing ellipsis fits into `max_width`.
/// A line that fits as a whole is returned unchanged.
pub fn shorten_to_width<G: GlyphWidths>(line: &str, max_width: f64, font: &G) -> String {
    if font.text_width(line) <= max_width {
        return line.to_string();
    }
    let ellipsis_width = font.glyph_width(ELLIPSIS);
    let mut shortened = String::new();
    let mut current_width = 0.0;
    for ch in line.chars() {
        let width = font.glyph_width(ch);
        if current_width + ellipsis_width + width > max_width {
            shortened.push(ELLIPSIS);
            return shortened;
        }
        current_width += width;
        shortened.push(ch);
    }
    line.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lorem() -> Vec<String> {
        vec![
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit,".to_string(),
            "sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.".to_string(),
        ]
    }

    fn five_cm_at_ten_pt() -> f64 {
        width_in_font_units(5.0, 10.0)
    }

    #[test]
    fn glyph_lookup() {
        let font = Font::Helvetica;
        assert_eq!(font.glyph_width(' '), 0.278);
        assert_eq!(font.glyph_width(ELLIPSIS), 1.0);
        assert_eq!(font.glyph_width('\u{4E2D}'), DEFAULT_GLYPH_WIDTH);
        assert!(Font::HelveticaBold.glyph_width('a') > font.glyph_width('a'));
        assert!((font.text_width("ab") - (font.glyph_width('a') + font.glyph_width('b'))).abs() < 1e-9);
    }

    #[test]
    fn reflow_at_char_ignores_words() {
        let expected = vec![
            "Lorem ipsum dolor sit amet, co",
            "nsectetur adipiscing elit,",
            "sed do eiusmod tempor incididu",
            "nt ut labore et dolore magna ali",
            "qua.",
        ];
        assert_eq!(reflow_at_char(&lorem(), five_cm_at_ten_pt(), &Font::Helvetica), expected);
    }

    #[test]
    fn reflow_at_space_keeps_words() {
        let max_width = five_cm_at_ten_pt();
        let expected = vec![
            "Lorem ipsum dolor sit amet,",
            "consectetur adipiscing elit,",
            "sed do eiusmod tempor",
            "incididunt ut labore et dolore",
            "magna aliqua.",
        ];
        let actual = reflow_at_space(&lorem(), max_width, &Font::Helvetica);
        assert_eq!(actual, expected);
        for line in &actual {
            assert!(Font::Helvetica.text_width(line) <= max_width, "{line}");
        }
    }

    #[test]
    fn reflow_at_space_splits_long_word() {
        let lines = vec![
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit,".to_string(),
            "sed do eiusmodtemporincididuntutlaboreetdoloremagna aliqua.".to_string(),
        ];
        let expected = vec![
            "Lorem ipsum dolor sit amet,",
            "consectetur adipiscing elit,",
            "sed do eiusmodtemporincididun",
            "tutlaboreetdoloremagna aliqua.",
        ];
        assert_eq!(reflow_at_space(&lines, five_cm_at_ten_pt(), &Font::Helvetica), expected);
    }

    #[test]
    fn reflow_at_space_output_rebuilds_input() {
        let max_width = five_cm_at_ten_pt();
        let lines = vec![
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit,".to_string(),
            "sed do eiusmodtemporincididuntutlaboreetdoloremagna aliqua.".to_string(),
        ];
        for line in &lines {
            let reflowed = reflow_at_space(std::slice::from_ref(line), max_width, &Font::Helvetica);
            let mut rebuilt = String::new();
            for part in &reflowed {
                assert!(Font::Helvetica.text_width(part) <= max_width, "{part}");
                // Word breaks drop one space, breaks inside a word drop nothing.
                if !rebuilt.is_empty() && line[rebuilt.len()..].starts_with(' ') {
                    rebuilt.push(' ');
                }
                rebuilt.push_str(part);
            }
            assert_eq!(&rebuilt, line);
        }
    }

    struct UnitWidths;

    impl GlyphWidths for UnitWidths {
        fn glyph_width(&self, _ch: char) -> f64 {
            1.0
        }
    }

    #[test]
    fn reflow_width_boundaries() {
        let reflow = |text: &str, max_width: f64| {
            reflow_at_space(&[text.to_string()], max_width, &UnitWidths)
        };
        // Exactly as wide as the line: no fast path, but packing still fits it.
        assert_eq!(reflow("ab cd", 5.0), vec!["ab cd"]);
        assert_eq!(reflow("ab cd", 6.0), vec!["ab cd"]);
        assert_eq!(reflow("ab cd", 4.0), vec!["ab", "cd"]);
        assert_eq!(reflow("abc de", 3.0), vec!["abc", "de"]);
        assert_eq!(reflow("abcdef", 3.0), vec!["abc", "def"]);
        assert_eq!(
            reflow_at_char(&["abcdef".to_string()], 3.0, &UnitWidths),
            vec!["abc", "def"]
        );
        assert_eq!(shorten_to_width("abc", 3.0, &UnitWidths), "abc");
        assert_eq!(shorten_to_width("abcd", 3.0, &UnitWidths), "ab…");
    }

    #[test]
    fn reflow_at_space_only_long_word() {
        let lines = vec!["Eiusmodtemporincididuntutlaboreetdoloremagna.".to_string()];
        let expected = vec!["Eiusmodtemporincididuntutlabo", "reetdoloremagna."];
        assert_eq!(reflow_at_space(&lines, five_cm_at_ten_pt(), &Font::Helvetica), expected);
    }

    #[test]
    fn empty_lines_survive_reflow() {
        let lines = vec![String::new(), "short".to_string(), String::new()];
        assert_eq!(reflow_at_space(&lines, 10.0, &Font::Helvetica), lines);
        assert_eq!(reflow_at_char(&lines, 10.0, &Font::Helvetica), lines);
    }

    #[test]
    fn reflow_preserves_characters() {
        let max_width = five_cm_at_ten_pt();
        let joined: String = reflow_at_char(&lorem(), max_width, &Font::Helvetica).concat();
        assert_eq!(joined, lorem().concat());
    }

    #[test]
    fn shorten_leaves_fitting_text() {
        let font = Font::Helvetica;
        let text = "UV;UltraPay005;12345";
        assert_eq!(shorten_to_width(text, font.text_width(text), &font), text);
        assert_eq!(shorten_to_width("", 0.0, &font), "");
    }

    #[test]
    fn shorten_appends_ellipsis() {
        let font = Font::Helvetica;
        let text = "Procedure that is much too long for the available space";
        let max_width = 10.0;
        let shortened = shorten_to_width(text, max_width, &font);
        assert!(shortened.ends_with(ELLIPSIS));
        assert!(font.text_width(&shortened) <= max_width);
        let prefix = shortened.trim_end_matches(ELLIPSIS);
        assert!(text.starts_with(prefix));
        assert!(prefix.len() < text.len());
    }
}
