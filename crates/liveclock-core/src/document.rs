//! Hosting document and display target abstractions.
//!
//! A host (the browser DOM, or the in-memory page served natively) exposes
//! its elements through [`Document`]; the element matching the clock's
//! [`Selector`] is handed back as a [`DisplayTarget`] whose text the clock
//! replaces on every tick.

use std::fmt;

use thiserror::Error;

/// Selector of the element the clock writes into.
pub const TARGET_SELECTOR: Selector = Selector::TestId("test-user-time");

/// A stable identifying attribute used to locate an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Matches `data-testid="<value>"`.
    TestId(&'static str),
}

impl Selector {
    /// The attribute name this selector matches on.
    #[must_use]
    pub const fn attribute(&self) -> &'static str {
        match self {
            Self::TestId(_) => "data-testid",
        }
    }

    /// The attribute value this selector matches.
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::TestId(value) => value,
        }
    }

    /// Returns `true` if an element attribute `name="value"` satisfies this
    /// selector.
    #[must_use]
    pub fn matches(&self, name: &str, value: &str) -> bool {
        name == self.attribute() && value == self.value()
    }

    /// CSS attribute-selector form, e.g. `[data-testid="test-user-time"]`.
    #[must_use]
    pub fn css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}=\"{}\"]", self.attribute(), self.value())
    }
}

/// The element was removed from its document after it was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("element is no longer attached to its document")]
pub struct Detached;

/// A single UI element whose visible text can be replaced.
pub trait DisplayTarget {
    /// Replace the element's text content.
    ///
    /// # Errors
    ///
    /// Returns [`Detached`] if the element no longer belongs to a document.
    fn set_text(&mut self, text: &str) -> Result<(), Detached>;
}

/// A hosting document that can look up elements by selector.
pub trait Document {
    /// Handle type for located elements.
    type Target: DisplayTarget + 'static;

    /// Find the first element matching `selector`, in document order.
    fn locate(&self, selector: &Selector) -> Option<Self::Target>;
}
