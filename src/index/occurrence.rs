use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type Frequency = u32;

/// One document's contribution of one keyword: the document identifier and
/// the number of times the keyword occurred in it.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: Frequency,
}

impl Occurrence {
    #[must_use]
    pub const fn new(document: String, frequency: Frequency) -> Self {
        Self {
            document,
            frequency,
        }
    }
}

/// Keywords of a single document, each with its occurrence in that document.
pub type DocumentKeywords = HashMap<String, Occurrence>;
