use std::path::Path;

use log::{ debug, info };
use miniz_oxide::deflate::compress_to_vec_zlib;
use pdf_writer::{
    types::{ CidFontType, FontFlags, SystemInfo, UnicodeCmap },
    Chunk,
    Filter,
    Finish,
    Name,
    Pdf,
    Rect,
    Str,
    TextStr,
};

use crate::{
    traits::FontType,
    types::{
        ContentTable,
        Error,
        Flowable,
        Font,
        RtlNormalizer,
        StyleSheet,
        Writer,
        INCH,
}};

const PRODUCER: &str = concat!("tarikh-pdf ", env!("CARGO_PKG_VERSION"));
const COMPRESSION_LEVEL: u8 = 6;

fn identity_system_info() -> SystemInfo<'static> {
    SystemInfo {
        registry: Str(b"Adobe"),
        ordering: Str(b"Identity"),
        supplement: 0,
    }
}

/// # The assembled document
/// An ordered list of flowables, ready to be laid out by `render()`.
#[derive(Debug)]
pub struct Doc {
    /// logical order title, used for the document information dictionary
    pub title: String,
    pub elements: Vec<Flowable>,
}

impl Doc {
    /// Title and a spacer, then heading, spacer, body, spacer for every section in table order.
    /// Paragraph text is shaped here; the bidi reordering happens per wrapped line when rendering.
    pub fn assemble(table: &ContentTable, styles: &StyleSheet, normalizer: &RtlNormalizer) -> Self {
        let mut elements: Vec<Flowable> = Vec::with_capacity(2 + 4 * table.len());

        elements.push(Flowable::paragraph(normalizer, &table.title, &styles.title));
        elements.push(Flowable::spacer(0.3 * INCH));

        for section in table.sections.iter() {
            elements.push(Flowable::paragraph(normalizer, &section.heading, &styles.section));
            elements.push(Flowable::spacer(0.2 * INCH));
            elements.push(Flowable::paragraph(normalizer, section.body.trim(), &styles.normal));
            elements.push(Flowable::spacer(0.4 * INCH));
        }

        debug!("assembled {} elements from {} sections", elements.len(), table.len());

        Doc {
            title: table.title.clone(),
            elements,
        }
    }

    /// Entry point: lays out every element on A4 pages, embeds the font and outputs a finished PDF
    pub fn render(&self, font: &Font) -> Vec<u8> {
        let mut pdf = Pdf::new();
        let mut secondary = Chunk::new();
        let mut write_head = Writer::new(font);

        let page_tree_id = write_head.bump();
        let catalog_id = write_head.bump();
        let info_id = write_head.bump();

        for element in self.elements.iter() {
            match element {
                Flowable::Paragraph(paragraph) => write_head.write_paragraph(paragraph),
                Flowable::Spacer { height } => write_head.space(*height),
            }
        }

        Doc::embed_font(&mut pdf, &mut write_head, font);

        let page_ids: Vec<_> = write_head.pages.iter().map(|page| page.page_id).collect();

        for page in write_head.pages.drain(..) {
            let mut pdf_page = pdf.page(page.page_id);

            pdf_page.media_box(Rect::new(0.0, 0.0, write_head.page_width, write_head.page_height));
            pdf_page.parent(page_tree_id);
            pdf_page.contents(page.contents.content_id);
            pdf_page.resources().fonts().pair(write_head.font_ref.name, write_head.font_ref.id);
            pdf_page.finish();

            let compressed = compress_to_vec_zlib(&page.contents.content.finish(), COMPRESSION_LEVEL);
            secondary.stream(page.contents.content_id, &compressed).filter(Filter::FlateDecode);
        }

        pdf.extend(&secondary);

        // Write the root of the page tree.
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        // Write the document catalog.
        pdf.catalog(catalog_id).pages(page_tree_id);

        pdf.document_info(info_id)
            .title(TextStr(&self.title))
            .producer(TextStr(PRODUCER));

        info!("rendered {} pages", page_ids.len());

        pdf.finish()
    }

    /// renders the document and writes it to `path`, replacing any existing file
    pub fn save(&self, font: &Font, path: &Path) -> Result<(), Error> {
        let bytes = self.render(font);
        std::fs::write(path, &bytes)?;

        info!("wrote {} bytes to {}", bytes.len(), path.display());

        Ok(())
    }

    /// Embeds the whole TrueType file as a CID keyed font with glyph ids as character codes.
    ///
    /// Widths and the ToUnicode map only cover the glyphs the writer actually used.
    fn embed_font(pdf: &mut Pdf, write_head: &mut Writer<Font>, font: &Font) {
        let type0_id = write_head.font_ref.id;
        let cid_id = write_head.bump();
        let descriptor_id = write_head.bump();
        let file_id = write_head.bump();
        let cmap_id = write_head.bump();

        let base_font = Name(font.postscript_name.as_bytes());

        pdf.type0_font(type0_id)
            .base_font(base_font)
            .encoding_predefined(Name(b"Identity-H"))
            .descendant_font(cid_id)
            .to_unicode(cmap_id);

        let mut cid = pdf.cid_font(cid_id);
        cid.subtype(CidFontType::Type2);
        cid.base_font(base_font);
        cid.system_info(identity_system_info());
        cid.font_descriptor(descriptor_id);
        cid.default_width(0.0);
        cid.cid_to_gid_map_predefined(Name(b"Identity"));

        let mut widths = cid.widths();
        for glyph in write_head.used_glyphs.keys() {
            widths.consecutive(*glyph, [font.to_pdf_units(font.advance(*glyph) as f32)]);
        }
        widths.finish();
        cid.finish();

        let bbox = Rect::new(
            font.to_pdf_units(font.bbox.x1),
            font.to_pdf_units(font.bbox.y1),
            font.to_pdf_units(font.bbox.x2),
            font.to_pdf_units(font.bbox.y2),
        );

        pdf.font_descriptor(descriptor_id)
            .name(base_font)
            .flags(FontFlags::SYMBOLIC)
            .bbox(bbox)
            .italic_angle(0.0)
            .ascent(font.to_pdf_units(font.ascender as f32))
            .descent(font.to_pdf_units(font.descender as f32))
            .cap_height(font.to_pdf_units(font.cap_height as f32))
            .stem_v(80.0)
            .font_file2(file_id);

        let compressed = compress_to_vec_zlib(&font.data, COMPRESSION_LEVEL);
        let mut stream = pdf.stream(file_id, &compressed);
        stream.filter(Filter::FlateDecode);
        stream.pair(Name(b"Length1"), font.data.len() as i32);
        stream.finish();

        let mut cmap = UnicodeCmap::new(Name(b"Custom"), identity_system_info());
        for (glyph, ch) in write_head.used_glyphs.iter() {
            cmap.pair(*glyph, *ch);
        }
        pdf.cmap(cmap_id, &cmap.finish());

        debug!("embedded {} with {} used glyphs", font.postscript_name, write_head.used_glyphs.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ Paragraph, StyleProfile, TextAlignment };

    struct Label;

    impl FontType for Label {
        fn label(&self) -> &str { "Vazir" }
        fn units_per_em(&self) -> u16 { 1000 }
        fn glyph_id(&self, _ch: char) -> Option<u16> { None }
        fn advance(&self, _glyph_id: u16) -> u16 { 0 }
    }

    fn assembled() -> (ContentTable, Doc) {
        let table = ContentTable::embedded().unwrap();
        let doc = Doc::assemble(&table, &StyleSheet::new(&Label), &RtlNormalizer::default());
        (table, doc)
    }

    fn paragraphs(doc: &Doc) -> Vec<&Paragraph> {
        doc.elements
            .iter()
            .filter_map(|element| match element {
                Flowable::Paragraph(paragraph) => Some(paragraph),
                Flowable::Spacer { .. } => None,
            })
            .collect()
    }

    #[test]
    fn element_count_is_two_plus_four_per_section() {
        let (table, doc) = assembled();
        assert_eq!(doc.elements.len(), 2 + 4 * table.len());
        assert_eq!(doc.elements.len(), 38);
    }

    #[test]
    fn every_section_is_heading_spacer_body_spacer() {
        let (_, doc) = assembled();

        assert!(matches!(&doc.elements[0], Flowable::Paragraph(p) if p.style.name == "Title"));
        assert_eq!(doc.elements[1], Flowable::spacer(0.3 * INCH));

        for chunk in doc.elements[2..].chunks(4) {
            assert!(matches!(&chunk[0], Flowable::Paragraph(p) if p.style.name == "Section"));
            assert_eq!(chunk[1], Flowable::spacer(0.2 * INCH));
            assert!(matches!(&chunk[2], Flowable::Paragraph(p) if p.style.name == "Normal"));
            assert_eq!(chunk[3], Flowable::spacer(0.4 * INCH));
        }
    }

    #[test]
    fn sections_keep_table_order() {
        let (table, doc) = assembled();
        let normalizer = RtlNormalizer::default();
        let headings: Vec<&Paragraph> = paragraphs(&doc)
            .into_iter()
            .filter(|p| p.style.name == "Section")
            .collect();

        assert_eq!(headings.len(), 9);

        for (heading, section) in headings.iter().zip(table.sections.iter()) {
            assert_eq!(heading.text, normalizer.shape(&section.heading));
        }

        assert!(table.sections[0].heading.starts_with("۱) شکل‌گیری افغانستان مستقل"));
        assert!(table.sections[8].heading.starts_with("۹) بازگشت طالبان"));
    }

    #[test]
    fn bodies_are_trimmed_before_shaping() {
        let (table, doc) = assembled();
        let normalizer = RtlNormalizer::default();
        let body = paragraphs(&doc)[2];

        assert_eq!(body.text, normalizer.shape(table.sections[0].body.trim()));
        assert!(!body.text.starts_with('\n'));
        assert!(!body.text.ends_with('\n'));
    }

    #[test]
    fn styles_reference_the_font_handle() {
        let (_, doc) = assembled();

        for paragraph in paragraphs(&doc) {
            let StyleProfile { font, alignment, .. } = &paragraph.style;
            assert_eq!(font, "Vazir");
            assert_eq!(*alignment, TextAlignment::Right);
        }
    }
}
