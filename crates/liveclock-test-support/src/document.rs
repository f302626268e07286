//! Test documents — `Document` and `DisplayTarget` doubles that record
//! every write.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use liveclock_core::document::{Detached, DisplayTarget, Document, Selector};

/// A display target that records every text write. Clones share the same
/// log, so a test keeps one handle while the updater owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    writes: Rc<RefCell<Vec<String>>>,
    detached: Rc<Cell<bool>>,
}

impl RecordingTarget {
    /// Create an attached target with no writes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of every text written, oldest first.
    #[must_use]
    pub fn writes(&self) -> Vec<String> {
        self.writes.borrow().clone()
    }

    /// The currently displayed text, if anything has been written.
    #[must_use]
    pub fn text(&self) -> Option<String> {
        self.writes.borrow().last().cloned()
    }

    /// Simulate the element being removed from its document.
    pub fn detach(&self) {
        self.detached.set(true);
    }
}

impl DisplayTarget for RecordingTarget {
    fn set_text(&mut self, text: &str) -> Result<(), Detached> {
        if self.detached.get() {
            return Err(Detached);
        }
        self.writes.borrow_mut().push(text.to_owned());
        Ok(())
    }
}

/// A document holding at most one element, identified by a `data-testid`
/// value.
#[derive(Debug, Clone)]
pub struct RecordingDocument {
    test_id: Option<&'static str>,
    target: RecordingTarget,
    lookups: Rc<Cell<usize>>,
}

impl RecordingDocument {
    /// A document whose single element carries `data-testid="<test_id>"`.
    #[must_use]
    pub fn with_test_id(test_id: &'static str) -> Self {
        Self {
            test_id: Some(test_id),
            target: RecordingTarget::new(),
            lookups: Rc::new(Cell::new(0)),
        }
    }

    /// A document with no identifiable elements.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            test_id: None,
            target: RecordingTarget::new(),
            lookups: Rc::new(Cell::new(0)),
        }
    }

    /// A handle to the document's element, sharing its write log.
    #[must_use]
    pub fn target(&self) -> RecordingTarget {
        self.target.clone()
    }

    /// Number of `locate` calls made against this document.
    #[must_use]
    pub fn lookups(&self) -> usize {
        self.lookups.get()
    }
}

impl Document for RecordingDocument {
    type Target = RecordingTarget;

    fn locate(&self, selector: &Selector) -> Option<RecordingTarget> {
        self.lookups.set(self.lookups.get() + 1);
        self.test_id
            .filter(|value| selector.matches("data-testid", value))
            .map(|_| self.target.clone())
    }
}
