/// horizontal placement of a line inside the writeable area
#[derive(Debug,Clone,Copy,PartialEq)]
pub enum TextAlignment {
    Left,
    Right,
    Center,
}

impl TextAlignment {
    /// offset from the left margin for a line `line_width` wide
    pub fn offset(&self, line_width: f32, writeable_area: f32) -> f32 {
        if line_width >= writeable_area {
            return 0.0;
        }

        match self {
            TextAlignment::Left => 0.0,
            TextAlignment::Right => writeable_area - line_width,
            TextAlignment::Center => (writeable_area - line_width) / 2.0,
        }
    }
}
