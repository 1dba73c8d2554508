use crate::{ traits::FontType, types::TextAlignment };

/// A fixed text presentation profile. `font` is the label of the font handle it was built from.
#[derive(Debug,Clone,PartialEq)]
pub struct StyleProfile {
    pub name: &'static str,
    pub font: String,
    pub font_size: f32,
    pub leading: f32,
    pub alignment: TextAlignment,
}

/// The three profiles used by the document: title, section heading and body text.
///
/// Building it requires the resolved font, so styles can't exist before the font does.
#[derive(Debug,Clone)]
pub struct StyleSheet {
    pub title: StyleProfile,
    pub section: StyleProfile,
    pub normal: StyleProfile,
}

impl StyleSheet {
    pub fn new<F: FontType>(font: &F) -> Self {
        let profile = |name, font_size, leading| StyleProfile {
            name,
            font: font.label().to_string(),
            font_size,
            leading,
            alignment: TextAlignment::Right,
        };

        StyleSheet {
            title: profile("Title", 18.0, 22.0),
            section: profile("Section", 14.0, 18.0),
            normal: profile("Normal", 12.0, 16.0),
        }
    }
}
