//! The profile card page that hosts the clock.

use crate::page::{Element, Page};

/// Title of the profile page.
pub const PAGE_TITLE: &str = "Profile Card";

/// The person shown on the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Technology stack, e.g. `Rust/Axum`.
    pub stack: String,
}

/// Build the profile card page for `profile`.
///
/// The `data-testid="test-user-time"` element starts empty; the clock
/// updater fills it on start.
#[must_use]
pub fn profile_page(profile: &Profile) -> Page {
    let mut page = Page::new(PAGE_TITLE);
    let body = page.body();

    let card = page.append(body, Element::new("article").test_id("test-profile-card"));
    page.append(
        card,
        Element::new("h2")
            .test_id("test-user-name")
            .text(profile.name.as_str()),
    );
    page.append(
        card,
        Element::new("a")
            .test_id("test-user-email")
            .attr("href", format!("mailto:{}", profile.email))
            .text(profile.email.as_str()),
    );
    page.append(
        card,
        Element::new("p")
            .test_id("test-user-stack")
            .text(profile.stack.as_str()),
    );

    let time = page.append(card, Element::new("p"));
    page.append(time, Element::new("span").text("Current time (ms since epoch): "));
    page.append(
        time,
        Element::new("span")
            .test_id("test-user-time")
            .attr("aria-live", "polite"),
    );

    page
}
