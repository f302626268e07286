//! Live Clock Page — the in-memory document served by native hosts.
//!
//! `Page` is a small element arena with attribute lookup and HTML
//! rendering. `PageDocument` shares a page between the clock updater (the
//! only writer) and whoever renders it.

pub mod document;
pub mod page;
pub mod profile;

pub use document::{PageDocument, PageTarget, SharedPage};
pub use page::{Element, NodeId, Page};
