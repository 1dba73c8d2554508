use crate::types::{ Direction, RtlNormalizer, StyleProfile };

/// 1 inch in PDF points
pub const INCH: f32 = 72.0;

/// A paragraph whose text is already shaped but still in logical order. The `Writer` wraps it
/// and then reorders every line for display.
#[derive(Debug,Clone,PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub style: StyleProfile,
    pub direction: Direction,
}

/// a unit of document content, placed top to bottom by the `Writer`
#[derive(Debug,Clone,PartialEq)]
pub enum Flowable {
    Paragraph(Paragraph),
    Spacer { height: f32 },
}

impl Flowable {
    /// shapes `logical` and wraps it in a paragraph
    pub fn paragraph(normalizer: &RtlNormalizer, logical: &str, style: &StyleProfile) -> Self {
        Flowable::Paragraph(Paragraph {
            text: normalizer.shape(logical),
            style: style.clone(),
            direction: RtlNormalizer::direction(logical),
        })
    }

    pub fn spacer(height: f32) -> Self {
        Flowable::Spacer { height }
    }
}
