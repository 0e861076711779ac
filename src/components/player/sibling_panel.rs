//! Side panel listing the playing video's directory.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::handle::PlayerHandle;
use crate::components::browser::DirList;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::LoadState;
use crate::models::{AppRoute, EntryInfo};

stylance::import_crate_style!(css, "src/components/player/sibling_panel.module.css");

#[component]
pub fn SiblingPanel(
    player: PlayerHandle,
    #[prop(into)] dir: Signal<String>,
    #[prop(into)] entries: Signal<LoadState<Vec<EntryInfo>>>,
) -> impl IntoView {
    let panel_class = move || {
        if player.panel_open.get() {
            format!("{} {}", css::panel, css::panelOpen)
        } else {
            css::panel.to_string()
        }
    };
    let title = move || {
        let route = AppRoute::new(&dir.get());
        if route.is_root() {
            APP_NAME.to_string()
        } else {
            route.name().to_string()
        }
    };

    view! {
        <aside
            class=panel_class
            aria-hidden=move || (!player.panel_open.get()).to_string()
            on:touchend=|ev: leptos::ev::TouchEvent| ev.stop_propagation()
        >
            <header class=css::header>
                <span class=css::title>{title}</span>
                <button
                    class=css::close
                    aria-label="Close"
                    on:click=move |_| player.set_panel_open(false)
                >
                    <Icon icon=ic::CLOSE />
                </button>
            </header>
            <div class=css::body>
                <DirList base=dir entries=entries current=player.video_path />
            </div>
        </aside>
    }
}
