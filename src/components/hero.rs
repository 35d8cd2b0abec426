//! Hero Component
//!
//! Full-height banner with the typewriter descriptor line and a scroll button.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_motion::{scroll_page_to, window_height};

use crate::layout::hero_font_size;
use crate::store::{use_page_store, PageStateStoreFields};
use crate::typewriter::Typewriter;

/// Hexagon outline of the scroll button
const HEX_POINTS: &str = "50,5 90,25 90,75 50,95 10,75 10,25";

#[component]
pub fn Hero() -> impl IntoView {
    let store = use_page_store();
    let profile = store.portfolio().get_untracked().profile;
    let (typed, set_typed) = signal(String::new());

    let words = profile.descriptors;
    spawn_local(async move {
        let mut typewriter = Typewriter::new(&words);
        loop {
            let delay = typewriter.step();
            // Stop once the hero is gone
            if set_typed.try_set(typewriter.text()).is_some() {
                break;
            }
            TimeoutFuture::new(delay).await;
        }
    });

    let heading_style = move || format!("font-size: {}px;", hero_font_size(store.viewport_width().get()));

    view! {
        <section class="hero">
            <h1 class="hero-greeting" style=heading_style>{profile.greeting}</h1>
            <div class="hero-typewriter" style=heading_style>
                <span class="hero-typed">{typed}</span>
                <span class="hero-cursor">"|"</span>
            </div>
            <ScrollButton />
        </section>
    }
}

/// Jumps one screen down, or back to the top once past the hero
#[component]
fn ScrollButton() -> impl IntoView {
    let store = use_page_store();
    let past_hero = move || store.past_hero().get();

    let on_click = move |_| {
        let target = if store.past_hero().get_untracked() { 0.0 } else { window_height() };
        scroll_page_to(target);
    };

    view! {
        <button
            class="scroll-button"
            title=move || if past_hero() { "Back to top" } else { "Next section" }
            on:click=on_click
        >
            <svg class="scroll-hex outer" viewBox="0 0 100 100">
                <polygon points=HEX_POINTS />
            </svg>
            <svg class="scroll-hex middle" viewBox="0 0 100 100">
                <polygon points=HEX_POINTS />
            </svg>
            <svg class="scroll-hex inner" viewBox="0 0 100 100">
                <polygon points=HEX_POINTS />
            </svg>
            <span class="scroll-arrow">{move || if past_hero() { "⇈" } else { "⇊" }}</span>
        </button>
    }
}
