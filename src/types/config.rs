use std::path::{ Path, PathBuf };

pub const FONT_LABEL: &str = "Vazir";
pub const FONT_FILE: &str = "Vazirmatn-Regular.ttf";
pub const OUTPUT_FILE: &str = "afghanisstan.pdf";

/// Where the font is read from and where the PDF is written to.
#[derive(Debug,Clone)]
pub struct Config {
    pub font_path: PathBuf,
    pub output_path: PathBuf,
    pub font_label: String,
}

impl Config {
    pub fn new(font_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Config {
            font_path: font_path.into(),
            output_path: output_path.into(),
            font_label: FONT_LABEL.to_string(),
        }
    }

    /// `<base>/fonts/Vazirmatn-Regular.ttf` in, `<base>/afghanisstan.pdf` out
    pub fn from_base_dir(base_dir: &Path) -> Self {
        Config::new(
            base_dir.join("fonts").join(FONT_FILE),
            base_dir.join(OUTPUT_FILE)
        )
    }
}

/// paths are fixed at build time, relative to the crate root
impl Default for Config {
    fn default() -> Self {
        Config::from_base_dir(Path::new(env!("CARGO_MANIFEST_DIR")))
    }
}
