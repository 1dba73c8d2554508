use pdf_writer::{ Name, Ref };

/// the embedded font as seen from a page: the Type0 font object and its resource name
#[derive(Debug)]
pub struct FontReference<'a> {
    pub id: Ref,
    pub name: Name<'a>,
}
