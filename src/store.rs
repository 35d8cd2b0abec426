//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::Portfolio;

/// Page-wide state shared by the sections
#[derive(Clone, Debug, Store)]
pub struct PageState {
    /// Embedded content
    pub portfolio: Portfolio,
    /// Window width in CSS pixels, updated on resize
    pub viewport_width: u32,
    /// Page has scrolled past the hero section
    pub past_hero: bool,
}

impl PageState {
    pub fn new(portfolio: Portfolio, viewport_width: u32) -> Self {
        Self { portfolio, viewport_width, past_hero: false }
    }
}

/// Type alias for the store
pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}
