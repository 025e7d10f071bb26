//! Persistence boundary: whole-document JSON in and out.
//!
//! This is the only surface of the engine that reports errors. Import
//! validates the document shape before anything is replaced, so a rejected
//! file leaves the current document untouched.

use crate::editor::Editor;
use folio_core::{DocError, Document};

impl Editor {
    /// Snapshot the whole document (all pages flushed) for serialization
    /// or autosave.
    pub fn to_document(&mut self) -> Document {
        self.flush_current();
        Document {
            pages: self.pages.clone(),
            groups: self.groups.clone(),
            guides: self.guides.clone(),
        }
    }

    pub fn export_json(&mut self) -> Result<String, DocError> {
        self.to_document().to_json()
    }

    /// Replace the live model with an already-validated document. The first
    /// page becomes current; the history log is re-seeded, which is the
    /// import's single commit. Documents without pages are ignored
    /// (`Document::from_json` rejects them before they get here).
    pub fn load_document(&mut self, doc: Document) {
        if doc.pages.is_empty() {
            return;
        }
        self.pages = doc.pages;
        self.groups = doc.groups;
        self.guides = doc.guides;
        self.pending = None;
        self.load_page(0);
        self.reconcile_groups();
        log::info!("loaded document with {} page(s)", self.pages.len());
    }

    /// Parse, validate, and load a JSON document. On any error the current
    /// document is left exactly as it was.
    pub fn load_json(&mut self, input: &str) -> Result<(), DocError> {
        let doc = Document::from_json(input)?;
        self.load_document(doc);
        Ok(())
    }
}
