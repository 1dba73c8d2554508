use serde::Deserialize;

use crate::types::Error;

const EMBEDDED_CONTENT: &str = include_str!("../../content/afghanistan.json");

/// One heading and its body text, both in logical order.
#[derive(Debug,Deserialize,PartialEq)]
pub struct Section {
    pub heading: String,
    pub body: String,
}

/// The static narrative: a title and its sections in document order.
#[derive(Debug,Deserialize)]
pub struct ContentTable {
    pub title: String,
    pub sections: Vec<Section>,
}

impl ContentTable {
    /// the narrative shipped with the binary
    pub fn embedded() -> Result<Self, Error> {
        ContentTable::from_json(EMBEDDED_CONTENT)
    }

    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str::<ContentTable>(json)?)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
