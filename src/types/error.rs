use core::fmt;
use std::path::PathBuf;
use derive_more::From;

#[derive(Debug,From)]
pub enum Error {
    /// a required resource (the font) is not at its expected path
    MissingResource { path: PathBuf },
   #[from]
    Io(std::io::Error),
   #[from]
    FontParse(ttf_parser::FaceParsingError),
   #[from]
    Content(serde_json::Error),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::MissingResource { path } => write!(f, "Font not found: {}", path.display()),
            _ => write!(f, "{self:?}")
        }
    }
}
