/// Metrics the layout engine needs from a font. `Font` implements it for a parsed TrueType file;
/// the layout code only ever talks to this trait so it can be driven by any face with a unicode cmap.
pub trait FontType {
    /// logical name the style profiles use to refer to the font
    fn label(&self) -> &str;
    fn units_per_em(&self) -> u16;
    fn glyph_id(&self, ch: char) -> Option<u16>;
    fn advance(&self, glyph_id: u16) -> u16;

    /// converts font units to points at `font_size`
    fn standardize(&self, units: f32, font_size: f32) -> f32 {
        units * font_size / self.units_per_em() as f32
    }

    /// missing glyphs fall back to `.notdef` (glyph 0)
    fn char_width(&self, ch: char, font_size: f32) -> f32 {
        let glyph = self.glyph_id(ch).unwrap_or(0);
        self.standardize(self.advance(glyph) as f32, font_size)
    }

    fn text_width(&self, text: &str, font_size: f32) -> f32 {
        text.chars()
            .filter(|ch| !is_invisible_control(*ch) || self.glyph_id(*ch).is_some())
            .map(|ch| self.char_width(ch, font_size))
            .sum()
    }
}

/// zero width joiners are dropped when the font has no glyph for them
pub fn is_invisible_control(ch: char) -> bool {
    matches!(ch, '\u{200C}' | '\u{200D}')
}
