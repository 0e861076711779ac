//! Directory page and shared page layout.

use leptos::prelude::*;

use super::{DirList, PathBar};
use crate::components::hooks::use_entries;
use crate::models::AppRoute;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/browser/page.module.css");

/// Centered single-column layout used by every non-player page.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class=css::page>
            <main class=css::column>{children()}</main>
        </div>
    }
}

/// Listing of one directory with breadcrumbs above it.
#[component]
pub fn DirectoryPage(route: AppRoute) -> impl IntoView {
    dom::set_title(&route.title());

    let path = route.path().to_string();
    let path = Signal::derive(move || path.clone());
    let entries = use_entries(path);

    view! {
        <Layout>
            <PathBar path=path />
            <div class=css::spacer></div>
            <DirList base=path entries=entries />
        </Layout>
    }
}
