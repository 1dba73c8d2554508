mod config;
mod content;
mod doc;
mod error;
mod flowable;
mod font;
mod font_reference;
mod page;
mod rtl;
mod style;
mod text;
mod text_alignment;
mod writer;

pub mod shaping;

pub use config::{ Config, FONT_FILE, FONT_LABEL, OUTPUT_FILE };
pub use content::{ ContentTable, Section };
pub use doc::Doc;
pub use error::Error;
pub use flowable::{ Flowable, Paragraph, INCH };
pub use font::Font;
pub use font_reference::FontReference;
pub use page::{ Page, PageContent };
pub use rtl::{ visual_line, visual_order, Direction, RtlNormalizer };
pub use shaping::ShapingOptions;
pub use style::{ StyleProfile, StyleSheet };
pub use text::{ Line, TextBlock, Word };
pub use text_alignment::TextAlignment;
pub use writer::{ Writer, PAGE_HEIGHT, PAGE_MARGIN, PAGE_WIDTH };
