//! About Section Component
//!
//! Bio, location and contact links on the left, skills on the right.

use leptos::prelude::*;

use crate::links::open_link;
use crate::markdown::parse_markdown;
use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn AboutSection() -> impl IntoView {
    let store = use_page_store();
    let profile = store.portfolio().get_untracked().profile;
    let bio_html = parse_markdown(&profile.bio);

    let contacts = profile
        .contacts
        .into_iter()
        .map(|contact| {
            let url = contact.url.clone();
            view! {
                <a
                    class="contact"
                    href=contact.url
                    on:click=move |ev| {
                        ev.prevent_default();
                        open_link(&url);
                    }
                >
                    {contact.label}
                </a>
            }
        })
        .collect_view();

    let skills = profile
        .skills
        .into_iter()
        .map(|group| {
            view! {
                <h3 class="skill-category">{group.category}</h3>
                <p class="skill-list">{group.list}</p>
            }
        })
        .collect_view();

    view! {
        <section class="about-section">
            <div class="about-left">
                <h2 class="section-title">"About Me"</h2>
                <div class="about-text" inner_html=bio_html></div>
                <p class="location">{profile.location}</p>
                <div class="contacts">{contacts}</div>
            </div>
            <div class="skills-right">
                <h2 class="section-title">"Skills"</h2>
                {skills}
            </div>
        </section>
    }
}
