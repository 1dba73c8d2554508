use crate::types::{ Direction, TextAlignment };

/// block level container the `Writer` fills with `Line` objects
/// ```
/// use tarikh_pdf::types::{ Direction, TextAlignment, TextBlock };
///
/// let text_block = TextBlock::new()
///     .with_font_size(14.0)
///     .and_leading(18.0)
///     .and_alignment(TextAlignment::Right)
///     .and_direction(Direction::Rtl);
///
/// assert!(text_block.lines.is_empty());
/// ```
#[derive(Debug)]
pub struct TextBlock<'a> {
    pub alignment: TextAlignment,
    pub direction: Direction,
    pub lines: Vec<Line<'a>>,
    pub font_size: f32,
    pub leading: f32,
}

impl TextBlock<'_> {
    /// default settings:
    /// - Font size: 12.0
    /// - Leading: 16.0
    /// - Text alignment: Right
    /// - Direction: Rtl
    pub fn new() -> Self {
        TextBlock::default()
    }

    /// builder function setting font size
    pub fn with_font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// builder function setting the distance between baselines
    pub fn and_leading(mut self, leading: f32) -> Self {
        self.leading = leading;
        self
    }

    /// builder function setting block alignment
    pub fn and_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// builder function setting the wrapping direction
    pub fn and_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

/// Wrapper for `Word` objects that fit one line, stored in reading order
#[derive(Debug,Default)]
pub struct Line <'a> {
    pub body: Vec<Word<'a>>,
    pub width: f32,
    pub offset: f32,
}

impl Line<'_> {
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// the words of the line joined by single spaces
    pub fn text(&self) -> String {
        self.body
            .iter()
            .map(|word| word.text)
            .collect::<Vec<&str>>()
            .join(" ")
    }
}

/// &str container with its measured width in points
#[derive(Debug)]
pub struct Word <'a>{
    pub text: &'a str,
    pub width: f32,
}

impl Default for TextBlock<'_> {
    fn default() -> Self {
        TextBlock {
            alignment: TextAlignment::Right,
            direction: Direction::Rtl,
            font_size: 12.0,
            leading: 16.0,
            lines: Vec::new(),
        }
    }
}
