//! `Document` implementation over a shared in-memory page.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use liveclock_core::document::{Detached, DisplayTarget, Document, Selector};
use tracing::trace;

use crate::page::{NodeId, Page};

/// A page shared between the clock updater and its readers.
pub type SharedPage = Arc<Mutex<Page>>;

/// Lock a shared page. A panic mid-write cannot leave a page inconsistent,
/// so a poisoned lock is recovered rather than propagated.
pub fn lock(page: &Mutex<Page>) -> MutexGuard<'_, Page> {
    page.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A hosting document backed by a shared [`Page`].
#[derive(Debug, Clone)]
pub struct PageDocument {
    page: SharedPage,
}

impl PageDocument {
    /// Take ownership of `page` and share it.
    #[must_use]
    pub fn new(page: Page) -> Self {
        Self {
            page: Arc::new(Mutex::new(page)),
        }
    }

    /// A second handle to the underlying page.
    #[must_use]
    pub fn shared(&self) -> SharedPage {
        Arc::clone(&self.page)
    }

    /// Render the page as it currently stands.
    #[must_use]
    pub fn render(&self) -> String {
        lock(&self.page).render()
    }

    /// Current text of the first element matching `selector`.
    #[must_use]
    pub fn text_of(&self, selector: &Selector) -> Option<String> {
        let page = lock(&self.page);
        page.find(selector)
            .and_then(|id| page.text(id))
            .map(str::to_owned)
    }
}

impl Document for PageDocument {
    type Target = PageTarget;

    fn locate(&self, selector: &Selector) -> Option<PageTarget> {
        let node = lock(&self.page).find(selector)?;
        Some(PageTarget {
            page: Arc::clone(&self.page),
            node,
        })
    }
}

/// A located element of a shared page.
#[derive(Debug, Clone)]
pub struct PageTarget {
    page: SharedPage,
    node: NodeId,
}

impl PageTarget {
    /// The element's node id.
    #[must_use]
    pub fn node(&self) -> NodeId {
        self.node
    }
}

impl DisplayTarget for PageTarget {
    fn set_text(&mut self, text: &str) -> Result<(), Detached> {
        lock(&self.page).set_text(self.node, text)?;
        trace!(node = ?self.node, text, "page text updated");
        Ok(())
    }
}
