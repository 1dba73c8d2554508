use std::collections::BTreeMap;

use log::{ debug, warn };
use pdf_writer::{ Name, Ref, Str };

use crate::{
    traits::{ is_invisible_control, FontType },
    types::{
        visual_line,
        FontReference,
        Line,
        Page,
        Paragraph,
        TextBlock,
        Word,
}};

/// A4 in points
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;
pub const PAGE_MARGIN: f32 = 72.0;

/// the layout engine
/// contains
/// - page references
/// - ref allocator
/// - the font every line is set in
/// - the glyphs used so far, for the font widths and the ToUnicode map
/// - default page settings
pub struct Writer<'a, F: FontType> {
    pub x: f32,
    pub y: f32,
    pub alloc: Ref,
    pub font: &'a F,
    pub font_ref: FontReference<'a>,
    pub pages: Vec<Page>,
    pub used_glyphs: BTreeMap<u16, char>,
    pub page_height: f32,
    pub page_width: f32,
    pub page_margin: f32,
}

impl<'a, F: FontType> Writer<'a, F> {
    /// Sets the write head to the top margin of a first A4 page and allocates the font reference
    pub fn new(font: &'a F) -> Self {
        let mut alloc = Ref::new(1);
        let first_page = Page::new(alloc.bump(), alloc.bump());
        let font_ref = FontReference {
            id: alloc.bump(),
            name: Name(b"F1"),
        };

        Writer {
            x: PAGE_MARGIN,
            y: PAGE_HEIGHT - PAGE_MARGIN,
            alloc,
            font,
            font_ref,
            pages: Vec::from([first_page]),
            used_glyphs: BTreeMap::new(),
            page_height: PAGE_HEIGHT,
            page_width: PAGE_WIDTH,
            page_margin: PAGE_MARGIN,
        }
    }

    /// get a new reference for indirect object
    pub fn bump(&mut self) -> Ref {
        self.alloc.bump()
    }

    /// scrolls the writer down the page
    pub fn feed(&mut self, num: f32) {
        self.y -= num;
    }

    /// moves the writer to a new position
    pub fn go_to(&mut self, num_x: f32, num_y: f32) {
        self.x = num_x;
        self.y = num_y;
    }

    pub fn writeable_area(&self) -> f32 {
        self.page_width - (self.page_margin * 2.0)
    }

    pub fn build_new_page(&mut self) {
        let page = Page::new(self.bump(), self.bump());

        debug!("starting page {}", self.pages.len() + 1);

        self.pages.push(page);
        self.go_to(self.page_margin, self.page_height - self.page_margin);
    }

    /// Vertical space. A spacer that does not fit ends the page; the rest of it is dropped.
    pub fn space(&mut self, height: f32) {
        if self.y - height < self.page_margin {
            self.y = self.page_margin;
        } else {
            self.feed(height);
        }
    }

    /// lays the paragraph out in lines and draws them
    pub fn write_paragraph(&mut self, paragraph: &Paragraph) {
        let text_block = self.layout(paragraph);
        self.write(text_block);
    }

    /// Breaks the paragraph into lines that fit the writeable area.
    ///
    /// Every `\n` starts a new line. Words are filled in reading order whatever the direction, so
    /// the first line holds the words read first; `write` reorders each line for display.
    pub fn layout<'p>(&self, paragraph: &'p Paragraph) -> TextBlock<'p> {
        let font_size = paragraph.style.font_size;
        let writeable_area = self.writeable_area();
        let space_width = self.font.char_width(' ', font_size);

        let mut text_block = TextBlock::new()
            .with_font_size(font_size)
            .and_leading(paragraph.style.leading)
            .and_alignment(paragraph.style.alignment)
            .and_direction(paragraph.direction);

        for segment in paragraph.text.split('\n') {
            let words: Vec<Word> = segment
                .split(' ')
                .filter(|text| !text.is_empty())
                .map(|text| Word { text, width: self.font.text_width(text, font_size) })
                .collect();

            if words.is_empty() {
                text_block.lines.push(Line::default());
                continue;
            }

            let mut lines = Self::fill(words.into_iter(), space_width, writeable_area);

            for line in lines.iter_mut() {
                line.offset = text_block.alignment.offset(line.width, writeable_area);
            }

            text_block.lines.append(&mut lines);
        }

        text_block
    }

    /// greedy line filling in the order the words are given
    fn fill<'w>(words: impl Iterator<Item = Word<'w>>, space_width: f32, writeable_area: f32) -> Vec<Line<'w>> {
        let mut lines: Vec<Line> = Vec::new();
        let mut line = Line::default();

        for word in words {
            // an overlong word still gets a line of its own
            if !line.is_empty() && line.width + space_width + word.width > writeable_area {
                lines.push(std::mem::take(&mut line));
            }

            if !line.is_empty() {
                line.width += space_width;
            }

            line.width += word.width;
            line.body.push(word);
        }

        if !line.is_empty() {
            lines.push(line);
        }

        lines
    }

    /// does the heavy lifting of rendering the `TextBlock` to the current page
    pub fn write(&mut self, text_block: TextBlock) {
        // a page must exist by now
        debug_assert!(!self.pages.is_empty());

        for line in text_block.lines.iter() {
            if self.y - text_block.leading < self.page_margin {
                self.build_new_page();
            }

            self.feed(text_block.leading);

            // line break
            if line.is_empty() {
                continue;
            }

            self.x = self.page_margin + line.offset;

            let visual = visual_line(&line.text(), text_block.direction);
            let glyphs = self.encode(&visual);
            let font_name = self.font_ref.name;

            if let Some(page) = self.pages.last_mut() {
                let target = &mut page.contents.content;

                target.begin_text();
                target.set_font(font_name, text_block.font_size);
                target.next_line(self.x, self.y);
                target.show(Str(&glyphs));
                target.end_text();
            }
        }
    }

    /// Encodes text as big endian glyph ids for the Identity-H encoding and records which glyph
    /// stands for which character.
    pub fn encode(&mut self, text: &str) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(text.len() * 2);

        for ch in text.chars() {
            let glyph = match self.font.glyph_id(ch) {
                Some(glyph) => glyph,
                None if is_invisible_control(ch) => continue,
                None => {
                    warn!("{} has no glyph for U+{:04X}", self.font.label(), ch as u32);
                    0
                }
            };

            if glyph != 0 {
                self.used_glyphs.entry(glyph).or_insert(ch);
            }

            bytes.extend_from_slice(&glyph.to_be_bytes());
        }

        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ Direction, StyleSheet, TextAlignment };

    /// every character is half an em wide and maps to its codepoint truncated to 16 bits
    struct FixedFont;

    impl FontType for FixedFont {
        fn label(&self) -> &str { "fixed" }
        fn units_per_em(&self) -> u16 { 1000 }
        fn glyph_id(&self, ch: char) -> Option<u16> {
            match ch {
                '\u{200C}' | '\u{200D}' => None,
                _ => Some(ch as u32 as u16),
            }
        }
        fn advance(&self, _glyph_id: u16) -> u16 { 500 }
    }

    fn paragraph(text: &str, direction: Direction) -> Paragraph {
        Paragraph {
            text: text.to_string(),
            style: StyleSheet::new(&FixedFont).normal,
            direction,
        }
    }

    #[test]
    fn short_rtl_line_is_right_aligned() {
        let writer = Writer::new(&FixedFont);
        let paragraph = paragraph("ab cd", Direction::Rtl);
        let block = writer.layout(&paragraph);

        assert_eq!(block.lines.len(), 1);
        // five characters at 6pt each
        assert_eq!(block.lines[0].width, 30.0);
        assert_eq!(block.lines[0].offset, writer.writeable_area() - 30.0);
        assert_eq!(block.alignment, TextAlignment::Right);
    }

    #[test]
    fn rtl_wrapping_keeps_the_reading_order() {
        let writer = Writer::new(&FixedFont);
        // 451.28pt / 6pt per char: 75 characters fit on a line
        let first = "\u{0628}".repeat(40);
        let middle = "\u{067E}".repeat(40);
        let last = "\u{062A}".repeat(40);
        let logical = format!("{first} {middle} {last}");

        let paragraph = paragraph(&logical, Direction::Rtl);
        let block = writer.layout(&paragraph);

        let texts: Vec<String> = block.lines.iter().map(|line| line.text()).collect();
        assert_eq!(texts, vec![first, middle, last]);
    }

    #[test]
    fn latin_run_inside_rtl_text_wraps_in_reading_order() {
        let writer = Writer::new(&FixedFont);
        let rtl_first = "\u{0628}".repeat(40);
        let latin_first = "a".repeat(30);
        let latin_second = "b".repeat(30);
        let rtl_last = "\u{062A}".repeat(40);
        let logical = format!("{rtl_first} {latin_first} {latin_second} {rtl_last}");

        let paragraph = paragraph(&logical, Direction::Rtl);
        let block = writer.layout(&paragraph);
        let texts: Vec<String> = block.lines.iter().map(|line| line.text()).collect();

        assert_eq!(texts, vec![
            format!("{rtl_first} {latin_first}"),
            format!("{latin_second} {rtl_last}"),
        ]);

        // drawn left to right: the Latin run sits left of the Persian run it follows
        assert_eq!(visual_line(&texts[0], Direction::Rtl), format!("{latin_first} {rtl_first}"));
        assert_eq!(visual_line(&texts[1], Direction::Rtl), format!("{rtl_last} {latin_second}"));
    }

    #[test]
    fn font_resource_is_allocated_after_the_first_page() {
        let writer = Writer::new(&FixedFont);

        assert_eq!(writer.font_ref.name, Name(b"F1"));
        assert_eq!(writer.pages[0].page_id, Ref::new(1));
        assert_eq!(writer.font_ref.id, Ref::new(3));
    }

    #[test]
    fn ltr_wrapping_fills_forwards() {
        let writer = Writer::new(&FixedFont);
        let visual = format!("{} {} {}", "a".repeat(40), "b".repeat(30), "c".repeat(40));

        let paragraph = paragraph(&visual, Direction::Ltr);
        let block = writer.layout(&paragraph);
        let texts: Vec<String> = block.lines.iter().map(|line| line.text()).collect();

        assert_eq!(texts, vec![format!("{} {}", "a".repeat(40), "b".repeat(30)), "c".repeat(40)]);
    }

    #[test]
    fn newlines_are_hard_breaks() {
        let writer = Writer::new(&FixedFont);
        let paragraph = paragraph("one\ntwo\n\nthree", Direction::Rtl);
        let block = writer.layout(&paragraph);

        assert_eq!(block.lines.len(), 4);
        assert!(block.lines[2].is_empty());
    }

    #[test]
    fn long_paragraphs_paginate() {
        let mut writer = Writer::new(&FixedFont);
        let text = vec!["line"; 100].join("\n");

        writer.write_paragraph(&paragraph(&text, Direction::Ltr));

        // (841.89 - 144) / 16 = 43 lines per page
        assert_eq!(writer.pages.len(), 3);
        assert!(writer.y >= writer.page_margin);
    }

    #[test]
    fn spacer_past_the_margin_ends_the_page() {
        let mut writer = Writer::new(&FixedFont);
        writer.go_to(writer.page_margin, writer.page_margin + 10.0);

        writer.space(28.8);
        assert_eq!(writer.y, writer.page_margin);
        assert_eq!(writer.pages.len(), 1);

        writer.write_paragraph(&paragraph("next", Direction::Ltr));
        assert_eq!(writer.pages.len(), 2);
        assert_eq!(writer.y, writer.page_height - writer.page_margin - 16.0);
    }

    #[test]
    fn encode_skips_joiners_and_records_glyphs() {
        let mut writer = Writer::new(&FixedFont);
        let bytes = writer.encode("a\u{200C}b");

        assert_eq!(bytes, vec![0x00, 0x61, 0x00, 0x62]);
        assert_eq!(writer.used_glyphs.get(&0x61), Some(&'a'));
        assert_eq!(writer.used_glyphs.len(), 2);
    }
}
