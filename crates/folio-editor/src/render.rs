//! Renderer and export contracts.
//!
//! Rendering and export live outside the engine; these traits pin down the
//! boundary. Both read the model and never mutate it. The one piece of
//! engine cooperation is guide hiding during export: guides are advisory
//! and must not appear in output, so [`Editor::export_current`] hides them
//! for the duration and restores them whether the exporter succeeds or
//! fails.

use crate::editor::Editor;
use folio_core::{Component, Guide, Page};

/// Turn one component into a visual primitive.
///
/// Implementations receive only visible components (invisible ones are
/// omitted before the call) and must treat `locked` as "no interactive
/// handles", nothing more.
pub trait Renderer {
    fn draw(&mut self, component: &Component);
}

/// Visible components in paint order: ascending z, list position breaking
/// ties.
pub fn paint_order(components: &[Component]) -> Vec<&Component> {
    let mut visible: Vec<&Component> = components.iter().filter(|c| c.visible).collect();
    visible.sort_by_key(|c| c.z); // stable sort keeps list order on ties
    visible
}

/// Walk a component list through a renderer in paint order.
pub fn paint_page(components: &[Component], renderer: &mut dyn Renderer) {
    for component in paint_order(components) {
        renderer.draw(component);
    }
}

/// Produce a rasterized or vector page at the fixed page dimensions
/// ([`folio_core::PAGE_WIDTH`] × [`folio_core::PAGE_HEIGHT`]). The guide
/// list is passed along for hosts that overlay guides in editing views;
/// during export every guide arrives hidden.
pub trait PageExporter {
    type Output;
    type Error;

    fn export(&mut self, page: &Page, guides: &[Guide]) -> Result<Self::Output, Self::Error>;
}

impl Editor {
    /// Export the current page. The live working set is flushed first so
    /// the exporter sees in-flight edits; guide visibility is saved, forced
    /// off, and restored afterwards regardless of the outcome.
    pub fn export_current<E: PageExporter>(
        &mut self,
        exporter: &mut E,
    ) -> Result<E::Output, E::Error> {
        self.flush_current();

        let saved: Vec<bool> = self.guides.iter().map(|g| g.visible).collect();
        for g in self.guides.iter_mut() {
            g.visible = false;
        }

        let result = exporter.export(&self.pages[self.current], &self.guides);

        for (g, was) in self.guides.iter_mut().zip(saved) {
            g.visible = was;
        }
        result
    }
}
