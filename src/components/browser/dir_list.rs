//! Entry list for one directory.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::LoadState;
use crate::models::{AppRoute, EntryInfo};

stylance::import_crate_style!(css, "src/components/browser/dir_list.module.css");

const SKELETON_ROWS: usize = 6;

/// Children of `base`, one link per entry.
///
/// `current` marks the entry whose full path equals it (used by the player's
/// sibling panel to highlight the playing file).
#[component]
pub fn DirList(
    #[prop(into)] base: Signal<String>,
    #[prop(into)] entries: Signal<LoadState<Vec<EntryInfo>>>,
    #[prop(optional, into)] current: Option<Signal<String>>,
) -> impl IntoView {
    move || match entries.get() {
        LoadState::Loading => view! {
            <ul class=css::list aria-busy="true">
                {(0..SKELETON_ROWS)
                    .map(|_| view! { <li class=css::skeleton></li> })
                    .collect_view()}
            </ul>
        }
        .into_any(),
        LoadState::Failed => {
            view! { <p class=css::message>"error! this folder could not be loaded."</p> }
                .into_any()
        }
        LoadState::Loaded(list) if list.is_empty() => {
            view! { <p class=css::message>"Empty folder"</p> }.into_any()
        }
        LoadState::Loaded(list) => {
            let base = base.get();
            view! {
                <ul class=css::list>
                    {list
                        .into_iter()
                        .map(|entry| {
                            let route = AppRoute::new(&base).join(&entry.name);
                            view! { <DirListItem entry=entry route=route current=current /> }
                        })
                        .collect_view()}
                </ul>
            }
            .into_any()
        }
    }
}

#[component]
fn DirListItem(entry: EntryInfo, route: AppRoute, current: Option<Signal<String>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let href = route.url();
    let item_path = route.path().to_string();
    let item_class = move || {
        let is_current = current.is_some_and(|c| AppRoute::new(&c.get()).path() == item_path);
        if is_current {
            format!("{} {}", css::item, css::itemCurrent)
        } else {
            css::item.to_string()
        }
    };

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ctx.navigate(route.clone());
    };

    view! {
        <li>
            <a class=item_class href=href on:click=on_click>
                <span class=css::icon>
                    <Icon icon=ic::for_entry(entry.kind) />
                </span>
                <span class=css::name>{entry.name}</span>
            </a>
        </li>
    }
}
