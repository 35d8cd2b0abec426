//! Project Links Component
//!
//! Link list at the bottom of an open folder.

use leptos::prelude::*;

use crate::links::{open_link, LinkEntry, REQUEST_ACCESS_LABEL};

/// Renders each available link; a private repository shows a note instead
#[component]
pub fn ProjectLinks(links: Vec<LinkEntry>) -> impl IntoView {
    let rows = links
        .into_iter()
        .map(|entry| match entry {
            LinkEntry::Link { kind, url } => {
                let href = url.clone();
                view! {
                    <li>
                        <a
                            class="project-link"
                            href=href
                            on:click=move |ev| {
                                ev.prevent_default();
                                open_link(&url);
                            }
                        >
                            {kind.label()}
                        </a>
                    </li>
                }
                .into_any()
            }
            LinkEntry::RequestAccess => view! {
                <li class="request-access">{REQUEST_ACCESS_LABEL}</li>
            }
            .into_any(),
        })
        .collect_view();

    view! {
        <div class="project-links">
            <span class="project-links-title">"Project Links"</span>
            <ul>{rows}</ul>
        </div>
    }
}
