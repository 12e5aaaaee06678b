use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Biography or query content as it arrives from a collaborator.
///
/// Some sources hand over a flat string, others a list of paragraphs or
/// tokens. Either way it becomes one string before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawText {
    Text(String),
    Tokens(Vec<String>),
}

impl RawText {
    pub fn flatten(&self) -> String {
        match self {
            RawText::Text(s) => s.clone(),
            RawText::Tokens(parts) => parts.join(" "),
        }
    }
}

impl From<&str> for RawText {
    fn from(s: &str) -> Self {
        RawText::Text(s.to_string())
    }
}

impl From<String> for RawText {
    fn from(s: String) -> Self {
        RawText::Text(s)
    }
}

impl From<Vec<String>> for RawText {
    fn from(parts: Vec<String>) -> Self {
        RawText::Tokens(parts)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub biography: String,
}

impl Document {
    pub fn new(name: impl Into<String>, biography: impl Into<String>) -> Self {
        Document {
            name: name.into(),
            biography: biography.into(),
        }
    }
}

/// Name-keyed documents in first-seen order.
///
/// Inserting a name that is already present replaces its biography but keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSet {
    docs: Vec<Document>,
    positions: HashMap<String, usize>,
}

impl DocumentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, doc: Document) {
        match self.positions.get(&doc.name) {
            Some(&pos) => self.docs[pos].biography = doc.biography,
            None => {
                self.positions.insert(doc.name.clone(), self.docs.len());
                self.docs.push(doc);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.positions
            .get(name)
            .map(|&pos| self.docs[pos].biography.as_str())
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Document> {
        self.docs.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.docs.iter().map(|d| d.name.as_str())
    }
}

impl FromIterator<Document> for DocumentSet {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut set = DocumentSet::new();
        for doc in iter {
            set.insert(doc);
        }
        set
    }
}

impl<'a> IntoIterator for &'a DocumentSet {
    type Item = &'a Document;
    type IntoIter = std::slice::Iter<'a, Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}
