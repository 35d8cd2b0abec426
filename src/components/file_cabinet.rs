//! File Cabinet Component
//!
//! Projects as a cabinet of folders: closed folders stack as tabs on the
//! left edge, the open folder slides in from the left.

use leptos::prelude::*;
use leptos_motion::{now_ms, run_frame_loop};

use crate::cabinet::CabinetState;
use crate::components::ProjectLinks;
use crate::layout::{CabinetLayout, BODY_TOP, CORNER_RADIUS, OPEN_SCALE, PANEL_HEIGHT, PANEL_TOP};
use crate::links::project_links;
use crate::models::{Item, ItemId};
use crate::outline::FolderShape;

fn px(value: f64) -> String {
    format!("{:.2}px", value)
}

/// File cabinet widget
///
/// # Arguments
/// * `items` - Projects in display order; the first one starts open
/// * `viewport_width` - Width of the host surface, drives the responsive layout
#[component]
pub fn FileCabinet(
    items: Vec<Item>,
    #[prop(into)] viewport_width: Signal<u32>,
) -> impl IntoView {
    let ids = items.iter().map(|item| item.id.clone()).collect();
    let state = match CabinetState::new(ids, now_ms()) {
        Ok(state) => RwSignal::new(state),
        Err(e) => {
            web_sys::console::warn_1(&format!("[CABINET] {}", e).into());
            return ().into_any();
        }
    };

    let items = StoredValue::new(items);
    // Frame clock, only ticks while a transition is running
    let clock = RwSignal::new(now_ms());
    let animating = RwSignal::new(false);
    let layout = Memo::new(move |_| CabinetLayout::for_width(viewport_width.get()));

    let animate = move || {
        if animating.get_untracked() {
            return;
        }
        animating.set(true);

        run_frame_loop(move |timestamp| {
            // Widget was unmounted mid-transition
            if clock.try_set(timestamp).is_some() {
                return false;
            }
            let running = state
                .try_with_untracked(|s| s.is_animating(timestamp))
                .unwrap_or(false);
            if !running {
                animating.try_set(false);
            }
            running
        });
    };

    let select = move |id: &ItemId| {
        let now = now_ms();
        state.update(|s| {
            if !s.select(id, now) {
                web_sys::console::warn_1(&format!("[CABINET] Ignoring selection of unknown item '{}'", id.0).into());
            }
        });
        clock.set(now);
        animate();
    };

    // Initial opening of the first folder
    animate();

    let closed_tabs = move || {
        state
            .with(|s| s.closed_items())
            .into_iter()
            .map(|(rank, index, id)| {
                let title = items.with_value(|items| items[index].title.clone());
                let tab_style = move || {
                    let l = layout.get();
                    format!(
                        "top: {}; width: {}; height: {};",
                        px(l.closed_tab_offset(rank)),
                        px(l.closed_tab_thickness()),
                        px(l.closed_tab_length()),
                    )
                };
                let label_style = move || {
                    let l = layout.get();
                    format!(
                        "width: {}; font-size: {};",
                        px(l.closed_tab_length() - 10.0),
                        px(l.closed_font_size()),
                    )
                };

                view! {
                    <button class="closed-tab" style=tab_style on:click=move |_| select(&id)>
                        <span class="closed-tab-label" style=label_style>{title}</span>
                    </button>
                }
            })
            .collect_view()
    };

    let open_folder = move || {
        let index = state.with(|s| s.open_index());
        let item = items.with_value(|items| items[index].clone());
        view! { <OpenFolder item=item state=state clock=clock layout=layout /> }
    };

    view! {
        <div class="file-cabinet">
            <div class="closed-stack">{closed_tabs}</div>
            {open_folder}
        </div>
    }
    .into_any()
}

/// The expanded folder of the open project
#[component]
fn OpenFolder(
    item: Item,
    state: RwSignal<CabinetState>,
    clock: RwSignal<f64>,
    layout: Memo<CabinetLayout>,
) -> impl IntoView {
    let id = item.id.clone();
    let progress = move || {
        let now = clock.get();
        state.with(|s| s.progress(&id, now))
    };

    let panel_style = move || {
        let l = layout.get();
        format!(
            "left: {}; top: {}; width: {}; height: {}; transform: scale({});",
            px(l.panel_left(progress())),
            px(PANEL_TOP),
            px(l.panel_width),
            px(PANEL_HEIGHT),
            OPEN_SCALE,
        )
    };

    let shape = move || {
        let l = layout.get();
        FolderShape {
            width: l.panel_width,
            height: PANEL_HEIGHT,
            tab_width: l.tab_width,
            tab_height: l.tab_height,
            radius: CORNER_RADIUS,
        }
    };

    let title_style = move || {
        let l = layout.get();
        format!(
            "width: {}; height: {}; font-size: {};",
            px(l.tab_width),
            px(l.tab_height),
            px(l.title_font_size()),
        )
    };
    let description_style = move || format!("font-size: {};", px(layout.get().body_font_size()));
    let tech_style = move || format!("font-size: {};", px(layout.get().tech_font_size()));

    let links = project_links(&item);

    view! {
        <div class="open-folder" style=panel_style>
            <svg
                class="folder-outline"
                width=move || shape().width.to_string()
                height=move || shape().height.to_string()
                viewBox=move || format!("0 0 {} {}", shape().width, shape().height)
            >
                <path class="folder-path" d=move || shape().outline().to_svg_path() />
            </svg>

            // Title sits in the folder tab
            <div class="folder-tab-label" style=title_style>{item.title}</div>

            <div class="folder-body" style=format!("top: {};", px(BODY_TOP))>
                <p class="folder-description" style=description_style>{item.description}</p>
                <p class="folder-tech" style=tech_style>{item.tech}</p>
                <ProjectLinks links=links />
            </div>
        </div>
    }
}
