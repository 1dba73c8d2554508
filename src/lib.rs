//! # Introduction
//!
//! Tarikh PDF renders a short Persian history of Afghanistan ("تاریخ افغانستان پس از جدایی از ایران")
//! to an A4 PDF. Built on top of pdf_writer (Typst), this is a no frills crate: one font, three text
//! styles, one static narrative.
//!
//! Persian is written right to left with letters that change shape depending on their neighbours.
//! PDF viewers draw glyphs left to right, one after the other, so every string goes through the
//! `RtlNormalizer` first:
//! - contextual shaping replaces letters with their initial/medial/final/isolated presentation forms
//! - the Unicode bidi algorithm reorders each wrapped line of shaped text into visual order
//!
//! ## Links
//! PDF Writer:
//!
//! - <https://github.com/typst/pdf-writer>
//!
//! Unicode Bidirectional Algorithm:
//!
//! - <https://www.unicode.org/reports/tr9/>
//!
//! # Basic Usage
//! The font is expected at `fonts/Vazirmatn-Regular.ttf` next to `Cargo.toml`, the PDF is written to
//! `afghanisstan.pdf` in the same directory.
//!
//! ### Simple render
//! ```no_run
//! use tarikh_pdf::types::Config;
//!
//! let output = tarikh_pdf::build(&Config::default())?;
//! println!("{}", output.display());
//! # Ok::<(), tarikh_pdf::types::Error>(())
//! ```
//!
//! ### Step by step
//! ```no_run
//! use std::path::Path;
//! use tarikh_pdf::types::{ ContentTable, Doc, Font, RtlNormalizer, StyleSheet };
//!
//! let font = Font::resolve(Path::new("fonts/Vazirmatn-Regular.ttf"), "Vazir")?;
//! let styles = StyleSheet::new(&font);
//! let table = ContentTable::embedded()?;
//!
//! let doc = Doc::assemble(&table, &styles, &RtlNormalizer::default());
//! doc.save(&font, Path::new("afghanisstan.pdf"))?;
//! # Ok::<(), tarikh_pdf::types::Error>(())
//! ```
pub mod traits;
pub mod types;

use std::path::PathBuf;

use log::info;

use types::{ Config, ContentTable, Doc, Error, Font, RtlNormalizer, StyleSheet };

/// Runs the whole pipeline: font, styles, content, normalization, layout, file.
///
/// The font is resolved before anything else, so a missing font never leaves an output file behind.
pub fn build(config: &Config) -> Result<PathBuf, Error> {
    let font = Font::resolve(&config.font_path, &config.font_label)?;
    let styles = StyleSheet::new(&font);
    let table = ContentTable::embedded()?;

    info!("assembling {} sections", table.len());

    let doc = Doc::assemble(&table, &styles, &RtlNormalizer::default());
    doc.save(&font, &config.output_path)?;

    Ok(config.output_path.clone())
}
