//! Projects Section Component

use leptos::prelude::*;

use crate::components::FileCabinet;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let store = use_page_store();
    let projects = store.portfolio().get_untracked().projects;
    let viewport_width = Signal::derive(move || store.viewport_width().get());

    view! {
        <section class="projects-section">
            <h2 class="projects-title">"Projects"</h2>
            <FileCabinet items=projects viewport_width=viewport_width />
        </section>
    }
}
