//! Data-loading hooks for the listing API.
//!
//! Each hook owns one state slot and re-fetches whenever its path signal
//! changes. Only the most recent request may write to the slot.

use std::future::Future;

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::core::error::FetchError;
use crate::core::{ApiClient, EntrySource, LatestRequest, LoadState, load_latest};
use crate::models::EntryInfo;

/// Metadata of the entry at `path`.
pub fn use_entry(path: Signal<String>) -> Signal<LoadState<EntryInfo>> {
    use_latest(path, |api, path| async move { api.fetch_entry(&path).await })
}

/// Children of the directory at `path`, in display order.
pub fn use_entries(path: Signal<String>) -> Signal<LoadState<Vec<EntryInfo>>> {
    use_latest(path, |api, path| async move { api.fetch_entries(&path).await })
}

fn use_latest<T, F, Fut>(path: Signal<String>, request: F) -> Signal<LoadState<T>>
where
    T: Send + Sync + 'static,
    F: Fn(ApiClient, String) -> Fut + 'static,
    Fut: Future<Output = Result<T, FetchError>> + 'static,
{
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let state = RwSignal::new(LoadState::Loading);
    let guard = LatestRequest::default();

    Effect::new(move |_| {
        let path = path.get();
        let ticket = guard.begin();
        state.set(LoadState::Loading);

        let pending = request(ctx.api.get_value(), path.clone());
        spawn_local(async move {
            // The slot may be gone if the component unmounted meanwhile.
            load_latest(ticket, &path, pending, move |result| {
                let _ = state.try_set(result);
            })
            .await;
        });
    });

    state.into()
}
