//! Breadcrumb path bar.
//!
//! A home link followed by one segment per path component. Every segment but
//! the last links to its ancestor directory.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::path::{Crumb, breadcrumbs};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/browser/pathbar.module.css");

/// Path bar for `path` (decoded or encoded).
#[component]
pub fn PathBar(#[prop(into)] path: Signal<String>) -> impl IntoView {
    let crumbs = Memo::new(move |_| breadcrumbs(&path.get()));
    let at_root = move || crumbs.with(|c| c.is_empty());

    view! {
        <nav class=css::pathbar aria-label="Breadcrumb">
            <Show
                when=at_root
                fallback=|| view! { <SegmentLink route=AppRoute::root() home=true /> }
            >
                <span class=format!("{} {}", css::segment, css::segmentCurrent)>
                    <Icon icon=ic::HOME />
                </span>
            </Show>
            <For
                each=move || crumbs.get()
                key=|crumb| crumb.path.clone()
                children=move |crumb| view! { <CrumbView crumb=crumb /> }
            />
        </nav>
    }
}

#[component]
fn CrumbView(crumb: Crumb) -> impl IntoView {
    let segment = if crumb.is_current {
        view! {
            <span class=format!("{} {}", css::segment, css::segmentCurrent)>
                {crumb.label}
            </span>
        }
        .into_any()
    } else {
        view! { <SegmentLink route=AppRoute::new(&crumb.path) label=crumb.label /> }.into_any()
    };

    view! {
        <span class=css::separator aria-hidden="true">
            <Icon icon=ic::CHEVRON_RIGHT />
        </span>
        {segment}
    }
}

/// Clickable ancestor segment.
#[component]
fn SegmentLink(
    route: AppRoute,
    #[prop(optional)] label: String,
    #[prop(optional)] home: bool,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let href = route.url();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ctx.navigate(route.clone());
    };

    view! {
        <a class=css::segment href=href on:click=on_click>
            {home.then(|| view! { <Icon icon=ic::HOME /> })}
            {label}
        </a>
    }
}
