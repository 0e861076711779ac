//! Bottom control bar: seek bar, transport and preference buttons.

use leptos::html::Div;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::handle::PlayerHandle;
use super::speed_menu::SpeedMenu;
use crate::components::icons as ic;
use crate::config::SKIP_STEPS;
use crate::utils::format::{format_second, fraction_percent};

stylance::import_crate_style!(css, "src/components/player/controls.module.css");

#[component]
pub fn Controls(
    player: PlayerHandle,
    /// Pointer resting on the bar.
    #[prop(into)]
    on_hover: Callback<leptos::ev::MouseEvent>,
) -> impl IntoView {
    let state = player.state;

    let play_icon = move || if state.with(|s| s.playing) { ic::PAUSE } else { ic::PLAY };
    let mute_icon = move || {
        if player.settings.with(|s| s.is_muted) {
            ic::MUTED
        } else {
            ic::UNMUTED
        }
    };
    let time = move || {
        state.with(|s| {
            format!(
                "{} / {}",
                format_second(s.played_seconds),
                format_second(s.total_seconds)
            )
        })
    };

    view! {
        <div
            class=css::controls
            on:mousemove=move |ev| on_hover.run(ev)
            on:touchend=|ev: leptos::ev::TouchEvent| ev.stop_propagation()
        >
            <SeekBar player=player />
            <div class=css::row>
                <button class=css::button aria-label="Play/Pause" on:click=move |_| player.toggle_play()>
                    {move || view! { <Icon icon=play_icon() /> }}
                </button>
                <button class=css::button aria-label="Mute" on:click=move |_| player.toggle_muted()>
                    {move || view! { <Icon icon=mute_icon() /> }}
                </button>
                <span class=css::time>{time}</span>

                <div class=css::skips>
                    {SKIP_STEPS
                        .iter()
                        .map(|&step| {
                            view! {
                                <button
                                    class=css::skip
                                    on:click=move |_| player.skip(f64::from(step))
                                >
                                    {format!("{:+}", step)}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class=css::end>
                    <button
                        class=css::button
                        aria-label="Videos in this folder"
                        on:click=move |_| player.set_panel_open(true)
                    >
                        <Icon icon=ic::SIBLINGS />
                    </button>
                    <div class=css::speed>
                        <button
                            class=css::button
                            aria-label="Playback speed"
                            on:click=move |_| {
                                player.set_speed_menu_open(!player.speed_menu_open.get_untracked())
                            }
                        >
                            <Icon icon=ic::SPEED />
                            <span class=css::rate>
                                {move || player.settings.with(|s| format!("{}x", s.playback_rate))}
                            </span>
                        </button>
                        <SpeedMenu player=player />
                    </div>
                    <button
                        class=css::button
                        aria-label="Fullscreen"
                        on:click=move |_| player.toggle_fullscreen()
                    >
                        <Icon icon=ic::FULLSCREEN />
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Progress bar with the buffered amount behind the played amount.
#[component]
fn SeekBar(player: PlayerHandle) -> impl IntoView {
    let bar = NodeRef::<Div>::new();
    let state = player.state;

    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(bar) = bar.get_untracked() else {
            return;
        };
        let rect = bar.get_bounding_client_rect();
        player.seek_from_pointer(f64::from(ev.client_x()) - rect.left(), rect.width());
    };

    view! {
        <div node_ref=bar class=css::seek on:click=on_click>
            <div
                class=css::loaded
                style:width=move || state.with(|s| fraction_percent(s.loaded_fraction))
            ></div>
            <div
                class=css::played
                style:width=move || state.with(|s| fraction_percent(s.played_fraction))
            ></div>
        </div>
    }
}
