use pdf_writer::{ Content, Ref };

/// container for pdf_writer page references
pub struct Page {
    pub page_id: Ref,
    pub contents: PageContent
}

/// each page gets a single `Content` stream the writer draws into
pub struct PageContent {
    pub content_id: Ref,
    pub content: Content
}

impl Page {
    pub fn new(page_id: Ref, content_id: Ref) -> Self {
        Page {
            page_id,
            contents: PageContent {
                content_id,
                content: Content::new()
            }
        }
    }
}
