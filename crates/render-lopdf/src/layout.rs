//! Greedy line breaking over styled runs.

use folio_render_core::StyleProperties;

/// Average glyph advance as a fraction of the font size.
const AVERAGE_GLYPH_WIDTH: f32 = 0.5;
pub(crate) const LINE_SPACING: f32 = 1.2;

pub(crate) fn measure(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * AVERAGE_GLYPH_WIDTH
}

pub(crate) struct Word<'a> {
    pub text: &'a str,
    pub style: &'a StyleProperties,
    pub x: f32,
    pub width: f32,
}

pub(crate) struct LaidLine<'a> {
    pub words: Vec<Word<'a>>,
    pub width: f32,
    pub height: f32,
}

/// Breaks `runs` into lines no wider than `max_width`. A word wider than the
/// line is placed on its own line and overflows.
pub(crate) fn layout_runs<'a>(
    runs: &[(&'a str, &'a StyleProperties)],
    max_width: f32,
) -> Vec<LaidLine<'a>> {
    let mut lines = Vec::new();
    let mut current = LaidLine {
        words: Vec::new(),
        width: 0.0,
        height: 0.0,
    };

    for (text, style) in runs {
        let space = measure(" ", style.font_size);
        for word in text.split_whitespace() {
            let width = measure(word, style.font_size);
            let gap = if current.words.is_empty() { 0.0 } else { space };
            if !current.words.is_empty() && current.width + gap + width > max_width {
                lines.push(std::mem::replace(
                    &mut current,
                    LaidLine {
                        words: Vec::new(),
                        width: 0.0,
                        height: 0.0,
                    },
                ));
            }
            let gap = if current.words.is_empty() { 0.0 } else { space };
            current.words.push(Word {
                text: word,
                style,
                x: current.width + gap,
                width,
            });
            current.width += gap + width;
            current.height = current.height.max(style.font_size * LINE_SPACING);
        }
    }
    if !current.words.is_empty() {
        lines.push(current);
    }
    lines
}

/// Encodes text for a WinAnsi Type1 font; characters outside Latin-1 become `?`.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_at_width() {
        let style = StyleProperties::default();
        // 10pt font: each char is 5pt wide.
        let lines = layout_runs(&[("aaaa bbbb cccc", &style)], 50.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].words.len(), 2);
        assert_eq!(lines[0].width, 45.0);
        assert_eq!(lines[1].words[0].text, "cccc");
        assert_eq!(lines[1].words[0].x, 0.0);
    }

    #[test]
    fn test_overlong_word_gets_own_line() {
        let style = StyleProperties::default();
        let lines = layout_runs(&[("a verylongword b", &style)], 20.0);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_empty_text_has_no_lines() {
        let style = StyleProperties::default();
        assert!(layout_runs(&[("   ", &style)], 100.0).is_empty());
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Aé€"), vec![b'A', 0xE9, b'?']);
    }
}
