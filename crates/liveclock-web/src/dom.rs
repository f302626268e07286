//! `Document` and `DisplayTarget` over `web_sys`.

use liveclock_core::document::{Detached, DisplayTarget, Document, Selector};
use web_sys::Element;

/// The page's DOM document.
#[derive(Debug, Clone)]
pub struct DomDocument {
    document: web_sys::Document,
}

impl DomDocument {
    /// Wrap a DOM document.
    #[must_use]
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }
}

impl Document for DomDocument {
    type Target = DomTarget;

    /// A selector the browser rejects is reported on the console and then
    /// treated as matching nothing.
    fn locate(&self, selector: &Selector) -> Option<DomTarget> {
        let css = selector.css();
        first_match(self.document.query_selector(&css), |err| {
            web_sys::console::warn_2(&format!("invalid selector {css}:").into(), &err);
        })
        .map(DomTarget)
    }
}

/// Collapse a `querySelector` result to its match, passing a rejected
/// selector's error to `on_error`.
fn first_match<T, E>(result: Result<Option<T>, E>, on_error: impl FnOnce(E)) -> Option<T> {
    match result {
        Ok(found) => found,
        Err(err) => {
            on_error(err);
            None
        }
    }
}

/// A located DOM element.
#[derive(Debug, Clone)]
pub struct DomTarget(Element);

impl DisplayTarget for DomTarget {
    fn set_text(&mut self, text: &str) -> Result<(), Detached> {
        if !self.0.is_connected() {
            return Err(Detached);
        }
        self.0.set_text_content(Some(text));
        Ok(())
    }
}
