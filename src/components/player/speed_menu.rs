use leptos::prelude::*;

use super::handle::PlayerHandle;
use crate::config::PLAYBACK_RATES;

stylance::import_crate_style!(css, "src/components/player/speed_menu.module.css");

/// Playback-rate choices. Choosing one persists it and closes the menu.
#[component]
pub fn SpeedMenu(player: PlayerHandle) -> impl IntoView {
    let list_class = move || menu_class(player.speed_menu_open.get());

    view! {
        <ul class=list_class role="menu">
            {PLAYBACK_RATES
                .iter()
                .map(|&rate| {
                    let button_class =
                        move || option_class(player.settings.with(|s| s.playback_rate == rate));
                    let on_click = move |_| {
                        player.set_playback_rate(rate);
                        player.set_speed_menu_open(false);
                    };
                    view! {
                        <li role="menuitem">
                            <button class=button_class on:click=on_click>
                                {format!("{}x", rate)}
                            </button>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

fn menu_class(open: bool) -> String {
    if open {
        format!("{} {}", css::menu, css::menuOpen)
    } else {
        css::menu.to_string()
    }
}

fn option_class(current: bool) -> String {
    if current {
        format!("{} {}", css::option, css::optionCurrent)
    } else {
        css::option.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_classes() {
        assert_eq!(menu_class(false), css::menu);
        assert_eq!(menu_class(true), format!("{} {}", css::menu, css::menuOpen));
        assert_ne!(css::menu, css::menuOpen);
    }

    #[test]
    fn test_only_current_rate_is_highlighted() {
        assert_eq!(option_class(false), css::option);
        assert!(option_class(true).ends_with(css::optionCurrent));
        assert_ne!(css::option, css::optionCurrent);
    }
}
