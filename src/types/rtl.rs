use unicode_bidi::{ BidiInfo, Level };

use crate::types::shaping::{ reshape, ShapingOptions };

/// base direction of a paragraph, decides how its lines wrap
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum Direction {
    Ltr,
    Rtl,
}

/// Turns logical-order text into a visually ordered, contextually shaped string that can be
/// drawn glyph by glyph from left to right.
#[derive(Debug,Default,Clone)]
pub struct RtlNormalizer {
    pub options: ShapingOptions,
}

impl RtlNormalizer {
    pub fn new(options: ShapingOptions) -> Self {
        RtlNormalizer { options }
    }

    /// shapes `text` and reorders every paragraph of it with the bidi algorithm
    pub fn normalize(&self, text: &str) -> String {
        visual_order(&self.shape(text))
    }

    /// The shaping stage alone. The result is still in logical order, ready to be wrapped and
    /// then reordered line by line with `visual_line`.
    pub fn shape(&self, text: &str) -> String {
        reshape(text, &self.options)
    }

    /// the direction of the first paragraph, taken from its first strong character
    pub fn direction(text: &str) -> Direction {
        let bidi_info = BidiInfo::new(text, None);

        match bidi_info.paragraphs.first() {
            Some(paragraph) if paragraph.level.is_rtl() => Direction::Rtl,
            _ => Direction::Ltr,
        }
    }
}

/// Mirrored pairs for the brackets, quotation marks and relations most likely to show up in
/// running text. This is a subset of Bidi_Mirroring_Glyph, not the whole table.
const MIRRORED: &[(char, char)] = &[
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('<', '>'),
    ('\u{AB}', '\u{BB}'),
    ('\u{2039}', '\u{203A}'),
    ('\u{2045}', '\u{2046}'),
    ('\u{207D}', '\u{207E}'),
    ('\u{208D}', '\u{208E}'),
    ('\u{2208}', '\u{220B}'),
    ('\u{2264}', '\u{2265}'),
    ('\u{226A}', '\u{226B}'),
    ('\u{2282}', '\u{2283}'),
    ('\u{2329}', '\u{232A}'),
    ('\u{3008}', '\u{3009}'),
    ('\u{300A}', '\u{300B}'),
];

/// the glyph drawn for `ch` inside a right-to-left run
pub fn mirror(ch: char) -> char {
    MIRRORED
        .iter()
        .find_map(|&(open, close)| {
            if ch == open {
                Some(close)
            } else if ch == close {
                Some(open)
            } else {
                None
            }
        })
        .unwrap_or(ch)
}

/// Applies the bidi algorithm paragraph by paragraph, detecting each paragraph level from its
/// first strong character. Right-to-left runs are reversed and their brackets mirrored.
/// Paragraph separators are kept out of the reordered range and the visual paragraphs are joined
/// back with `\n` in their logical order.
pub fn visual_order(text: &str) -> String {
    reorder(text, None)
}

/// Reorders one wrapped line of shaped text with the paragraph level fixed by `direction`, so a
/// line that happens to start with a Latin word still flows right to left.
pub fn visual_line(text: &str, direction: Direction) -> String {
    let level = match direction {
        Direction::Ltr => Level::ltr(),
        Direction::Rtl => Level::rtl(),
    };

    reorder(text, Some(level))
}

fn reorder(text: &str, level: Option<Level>) -> String {
    let bidi_info = BidiInfo::new(text, level);
    let mut lines: Vec<String> = Vec::with_capacity(bidi_info.paragraphs.len());

    for paragraph in bidi_info.paragraphs.iter() {
        let start = paragraph.range.start;
        let body = text[paragraph.range.clone()].trim_end_matches(PARAGRAPH_SEPARATORS);
        let line = start..start + body.len();

        if line.is_empty() {
            lines.push(String::new());
            continue;
        }

        let (levels, runs) = bidi_info.visual_runs(paragraph, line);
        let mut visual = String::with_capacity(body.len());

        for run in runs {
            let segment = &text[run.clone()];

            if levels[run.start].is_rtl() {
                visual.extend(segment.chars().rev().map(mirror));
            } else {
                visual.push_str(segment);
            }
        }

        lines.push(visual);
    }

    lines.join("\n")
}

const PARAGRAPH_SEPARATORS: [char; 7] = ['\n', '\r', '\u{2029}', '\u{85}', '\u{1C}', '\u{1D}', '\u{1E}'];
