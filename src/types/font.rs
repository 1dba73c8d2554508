use std::collections::HashMap;
use std::path::Path;

use log::{ debug, info };
use pdf_writer::Rect;
use ttf_parser::{ name_id, Face, GlyphId };

use crate::{ traits::FontType, types::Error };

/// A parsed TrueType font, loaded once and handed explicitly to the styles and the writer.
///
/// The raw file bytes are kept so the whole font can be embedded as `FontFile2`.
#[derive(Debug)]
pub struct Font {
    pub label: String,
    pub postscript_name: String,
    pub data: Vec<u8>,
    pub units_per_em: u16,
    pub ascender: i16,
    pub descender: i16,
    pub cap_height: i16,
    pub bbox: Rect,
    advances: Vec<u16>,
    glyph_map: HashMap<char, u16>,
}

impl Font {
    /// Resolves the font at `path` and registers it under `label`.
    ///
    /// Fails with `Error::MissingResource` before reading anything when the file is absent.
    pub fn resolve(path: &Path, label: &str) -> Result<Self, Error> {
        if !path.is_file() {
            return Err(Error::MissingResource { path: path.to_path_buf() });
        }

        let data = std::fs::read(path)?;
        let font = Font::from_bytes(data, label)?;

        info!("registered font {} ({}) from {}", font.label, font.postscript_name, path.display());

        Ok(font)
    }

    pub fn from_bytes(data: Vec<u8>, label: &str) -> Result<Self, Error> {
        let face = Face::parse(&data, 0)?;

        let postscript_name = face
            .names()
            .into_iter()
            .filter(|name| name.name_id == name_id::POST_SCRIPT_NAME)
            .find_map(|name| name.to_string())
            .unwrap_or_else(|| label.to_string());

        let advances: Vec<u16> = (0..face.number_of_glyphs())
            .map(|id| face.glyph_hor_advance(GlyphId(id)).unwrap_or(0))
            .collect();

        let mut glyph_map: HashMap<char, u16> = HashMap::new();

        if let Some(cmap) = face.tables().cmap {
            for subtable in cmap.subtables.into_iter().filter(|s| s.is_unicode()) {
                subtable.codepoints(|codepoint| {
                    if let Some(ch) = char::from_u32(codepoint) {
                        if let Some(glyph) = subtable.glyph_index(codepoint) {
                            glyph_map.entry(ch).or_insert(glyph.0);
                        }
                    }
                });
            }
        }

        debug!("{postscript_name}: {} glyphs, {} mapped characters", advances.len(), glyph_map.len());

        let global = face.global_bounding_box();
        let bbox = Rect::new(
            global.x_min as f32,
            global.y_min as f32,
            global.x_max as f32,
            global.y_max as f32
        );

        let cap_height = face.capital_height().unwrap_or(face.ascender());
        let ascender = face.ascender();
        let descender = face.descender();
        let units_per_em = face.units_per_em();

        Ok(Font {
            label: label.to_string(),
            postscript_name,
            units_per_em,
            ascender,
            descender,
            cap_height,
            bbox,
            advances,
            glyph_map,
            data,
        })
    }

    /// scales a value in font units to the 1000 unit glyph space PDF expects
    pub fn to_pdf_units(&self, units: f32) -> f32 {
        units * 1000.0 / self.units_per_em as f32
    }
}

impl FontType for Font {
    fn label(&self) -> &str {
        &self.label
    }

    fn units_per_em(&self) -> u16 {
        self.units_per_em
    }

    fn glyph_id(&self, ch: char) -> Option<u16> {
        self.glyph_map.get(&ch).copied()
    }

    fn advance(&self, glyph_id: u16) -> u16 {
        self.advances.get(glyph_id as usize).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_font_is_reported_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fonts").join("Vazirmatn-Regular.ttf");

        match Font::resolve(&path, "Vazir") {
            Err(Error::MissingResource { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected MissingResource, got {other:?}"),
        }
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"definitely not a font").unwrap();

        assert!(matches!(Font::resolve(&path, "Vazir"), Err(Error::FontParse(_))));
    }
}
