//! Full-viewport video page.

use leptos::html::{Div, Video};
use leptos::prelude::*;
use leptos_use::use_media_query;

use super::controls::Controls;
use super::handle::PlayerHandle;
use super::sibling_panel::SiblingPanel;
use crate::app::AppContext;
use crate::components::browser::PathBar;
use crate::components::hooks::use_entries;
use crate::core::path::parent_of;
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/player/video.module.css");

/// Plays the video at `route` and, when it ends, the next video of the same
/// directory.
#[component]
pub fn VideoPage(route: AppRoute) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let node = NodeRef::<Video>::new();
    let container = NodeRef::<Div>::new();
    let player = PlayerHandle::new(route.path(), node, container);
    let video_path = player.video_path;

    // Siblings only refetch when the directory itself changes.
    let dir = Memo::new(move |_| parent_of(&video_path.get()));
    let siblings = use_entries(dir.into());
    Effect::new(move |_| {
        if let Some(entries) = siblings.with(|s| s.data().cloned()) {
            player.set_siblings(entries);
        }
    });

    let src = move || ctx.api.with_value(|api| api.data_url(&video_path.get()));

    // Touch screens toggle the controls with a tap; clicking the picture
    // only plays/pauses with a real pointer.
    let is_coarse = use_media_query("(pointer: coarse)");

    let on_click = move |_: leptos::ev::MouseEvent| {
        if !is_coarse.get_untracked() {
            player.toggle_play();
        }
    };
    let on_touch = move |_: leptos::ev::TouchEvent| player.touch();
    // Browsers emulate mouse events after a tap; those must not re-arm the
    // hide timer.
    let on_pointer = move |_: leptos::ev::MouseEvent| {
        if !is_coarse.get_untracked() {
            player.pointer_activity();
        }
    };
    let on_leave = move |_: leptos::ev::MouseEvent| {
        if !is_coarse.get_untracked() {
            player.pointer_left();
        }
    };
    let on_controls = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        if !is_coarse.get_untracked() {
            player.pointer_on_controls();
        }
    };

    let container_class = move || {
        if player.controls_shown.get() {
            css::container.to_string()
        } else {
            format!("{} {}", css::container, css::idle)
        }
    };
    let overlay_class = move || {
        if player.controls_shown.get() {
            css::overlay.to_string()
        } else {
            format!("{} {}", css::overlay, css::hidden)
        }
    };

    view! {
        <div
            node_ref=container
            class=container_class
            on:mouseenter=on_pointer
            on:mousemove=on_pointer
            on:mouseleave=on_leave
            on:touchend=on_touch
        >
            <video
                node_ref=node
                class=css::video
                src=src
                autoplay=true
                playsinline=true
                on:click=on_click
                on:loadedmetadata=move |_| player.loaded()
                on:durationchange=move |_| player.duration_changed()
                on:timeupdate=move |_| player.progress()
                on:progress=move |_| player.progress()
                on:ended=move |_| player.ended()
            ></video>

            <div class=overlay_class>
                <div class=css::topBar on:mousemove=on_controls>
                    <PathBar path=video_path />
                </div>
                <Controls player=player on_hover=on_controls />
            </div>

            <SiblingPanel player=player dir=dir entries=siblings />
        </div>
    }
}
