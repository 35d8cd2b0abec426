//! Portfolio App
//!
//! Single scrolling page: hero, about, projects.

use leptos::prelude::*;
use leptos_motion::{use_window_scroll, use_window_width, window_height};
use reactive_stores::Store;

use crate::components::{AboutSection, Hero, ProjectsSection};
use crate::content;
use crate::models::Portfolio;
use crate::store::{PageState, PageStateStoreFields};

/// Scrolled this far above the bottom of the hero counts as past it
const PAST_HERO_OFFSET_PX: f64 = 200.0;

#[component]
pub fn App() -> impl IntoView {
    match content::load_portfolio() {
        Ok(portfolio) => view! { <Page portfolio=portfolio /> }.into_any(),
        Err(e) => {
            web_sys::console::error_1(&format!("[CONTENT] {}", e).into());
            view! { <p class="content-error">"Portfolio content could not be loaded."</p> }.into_any()
        }
    }
}

#[component]
fn Page(portfolio: Portfolio) -> impl IntoView {
    // Listeners live as long as the page
    let width = use_window_width();
    let scroll = use_window_scroll();

    let store = Store::new(PageState::new(portfolio, width.get_untracked()));
    provide_context(store);

    Effect::new(move |_| {
        *store.viewport_width().write() = width.get();
    });

    Effect::new(move |_| {
        let past = scroll.get() > window_height() - PAST_HERO_OFFSET_PX;
        if store.past_hero().get_untracked() != past {
            *store.past_hero().write() = past;
        }
    });

    view! {
        <div class="page">
            <Hero />
            <AboutSection />
            <ProjectsSection />
        </div>
    }
}
