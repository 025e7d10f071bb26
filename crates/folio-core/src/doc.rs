//! Serialized document format.
//!
//! The whole page/group/guide structure round-trips through JSON. Import
//! validates the shape *before* deserializing so a malformed file is
//! rejected without touching the caller's live model.

use crate::model::{Group, Guide, Page};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The on-disk / over-the-wire shape of a folio document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub pages: Vec<Page>,
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub guides: Vec<Guide>,
}

#[derive(Debug, Error)]
pub enum DocError {
    #[error("document root must be a JSON object")]
    NotAnObject,
    #[error("document has no `pages` list")]
    MissingPages,
    #[error("`pages` must be a list")]
    PagesNotAList,
    #[error("document must contain at least one page")]
    NoPages,
    #[error("malformed document: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl Document {
    pub fn to_json(&self) -> Result<String, DocError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse and validate a document. `pages` must be a non-empty list;
    /// anything else is rejected up front.
    pub fn from_json(input: &str) -> Result<Self, DocError> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        let root = value.as_object().ok_or(DocError::NotAnObject)?;
        match root.get("pages") {
            None => return Err(DocError::MissingPages),
            Some(pages) => match pages.as_array() {
                None => return Err(DocError::PagesNotAList),
                Some(list) if list.is_empty() => return Err(DocError::NoPages),
                Some(_) => {}
            },
        }
        let doc: Document = serde_json::from_value(value)?;
        log::debug!("parsed document with {} page(s)", doc.pages.len());
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Component, Page};
    use pretty_assertions::assert_eq;

    #[test]
    fn json_roundtrip() {
        let mut page = Page::new("Cover");
        page.components.push(Component::text("Title"));
        let doc = Document {
            pages: vec![page],
            groups: Vec::new(),
            guides: Vec::new(),
        };

        let json = doc.to_json().unwrap();
        let parsed = Document::from_json(&json).unwrap();
        assert_eq!(doc, parsed);
    }

    #[test]
    fn rejects_missing_pages() {
        assert!(matches!(
            Document::from_json(r#"{"groups": []}"#),
            Err(DocError::MissingPages)
        ));
    }

    #[test]
    fn rejects_non_list_pages() {
        assert!(matches!(
            Document::from_json(r#"{"pages": "nope"}"#),
            Err(DocError::PagesNotAList)
        ));
    }

    #[test]
    fn rejects_empty_pages() {
        assert!(matches!(
            Document::from_json(r#"{"pages": []}"#),
            Err(DocError::NoPages)
        ));
    }

    #[test]
    fn rejects_non_object_root() {
        assert!(matches!(
            Document::from_json("[1, 2, 3]"),
            Err(DocError::NotAnObject)
        ));
        assert!(matches!(
            Document::from_json("not json"),
            Err(DocError::Malformed(_))
        ));
    }
}
