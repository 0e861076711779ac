//! Entry-listing client.
//!
//! Translates tree paths into metadata through the external API:
//!
//! - `GET {base}/api/entry?path=...` → one [`EntryInfo`]
//! - `GET {base}/api/dir?path=...` → a [`DirListing`]
//! - `GET {base}/data/...` → raw media bytes
//!
//! Requests that re-target the same state slot are tagged with a
//! [`LatestRequest`] ticket so a slow response for an old path never
//! overwrites the state of a newer one.

use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use crate::core::error::FetchError;
use crate::core::path::{encode_path, path_join};
use crate::models::{DirListing, EntryInfo};
use crate::utils::fetch_json;

// =============================================================================
// API Client
// =============================================================================

/// URL builder for the listing API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    /// `base` is an origin such as `http://nas.local:3000`; a trailing
    /// separator is ignored. An empty base targets the page's own origin.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn entry_url(&self, path: &str) -> String {
        format!("{}/api/entry?path={}", self.base, query_path(path))
    }

    pub fn dir_url(&self, path: &str) -> String {
        format!("{}/api/dir?path={}", self.base, query_path(path))
    }

    /// Source URL for a media file.
    pub fn data_url(&self, path: &str) -> String {
        format!("{}/data/{}", self.base, encode_path(&path_join(&[path])))
    }
}

/// Absolute, normalized path encoded as one query value.
fn query_path(path: &str) -> String {
    let absolute = format!("/{}", path_join(&[path]));
    urlencoding::encode(&absolute).into_owned()
}

// =============================================================================
// Entry Source
// =============================================================================

/// Anything that can resolve tree paths into metadata.
pub trait EntrySource {
    fn fetch_entry(&self, path: &str) -> impl Future<Output = Result<EntryInfo, FetchError>>;

    /// Children of a directory, in display order.
    fn fetch_entries(
        &self,
        path: &str,
    ) -> impl Future<Output = Result<Vec<EntryInfo>, FetchError>>;
}

impl EntrySource for ApiClient {
    async fn fetch_entry(&self, path: &str) -> Result<EntryInfo, FetchError> {
        fetch_json::<EntryInfo>(&self.entry_url(path)).await
    }

    async fn fetch_entries(&self, path: &str) -> Result<Vec<EntryInfo>, FetchError> {
        let listing = fetch_json::<DirListing>(&self.dir_url(path)).await?;
        Ok(listing.into_sorted())
    }
}

// =============================================================================
// Load State
// =============================================================================

/// What a caller observes for one request slot.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState<T> {
    Loading,
    Loaded(T),
    /// Request failed; the error has already been logged.
    Failed,
}

impl<T> LoadState<T> {
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for LoadState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(data) => Self::Loaded(data),
            Err(_) => Self::Failed,
        }
    }
}

// =============================================================================
// Latest-Request Guard
// =============================================================================

/// Generation counter for one state slot.
///
/// Every new request takes a [`Ticket`]; only the most recent ticket may
/// apply its result.
#[derive(Clone, Debug, Default)]
pub struct LatestRequest {
    generation: Rc<Cell<u64>>,
}

impl LatestRequest {
    /// Start a new request, invalidating all earlier tickets.
    pub fn begin(&self) -> Ticket {
        let id = self.generation.get().wrapping_add(1);
        self.generation.set(id);
        Ticket {
            id,
            generation: Rc::clone(&self.generation),
        }
    }
}

/// Permission to apply one request's result.
#[derive(Debug)]
pub struct Ticket {
    id: u64,
    generation: Rc<Cell<u64>>,
}

impl Ticket {
    pub fn is_current(&self) -> bool {
        self.generation.get() == self.id
    }
}

/// Await `request` and hand its outcome to `apply` if `ticket` is still current.
///
/// Failures are logged and applied as [`LoadState::Failed`]. Returns whether
/// the result was applied.
pub async fn load_latest<T, Fut, F>(ticket: Ticket, path: &str, request: Fut, apply: F) -> bool
where
    Fut: Future<Output = Result<T, FetchError>>,
    F: FnOnce(LoadState<T>),
{
    let result = request.await;
    if let Err(e) = &result {
        log::error!("failed to load '/{}': {}", path, e);
    }

    if !ticket.is_current() {
        log::debug!("dropping stale response for '/{}'", path);
        return false;
    }

    apply(result.into());
    true
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;
    use crate::models::EntryKind;

    /// In-memory tree keyed by normalized directory path.
    #[derive(Default)]
    struct FakeSource {
        dirs: HashMap<String, Vec<EntryInfo>>,
    }

    impl FakeSource {
        fn with_dir(mut self, path: &str, entries: Vec<EntryInfo>) -> Self {
            self.dirs.insert(path.to_string(), entries);
            self
        }
    }

    impl EntrySource for FakeSource {
        async fn fetch_entry(&self, path: &str) -> Result<EntryInfo, FetchError> {
            let path = path_join(&[path]);
            let (parent, name) = path.rsplit_once('/').unwrap_or(("", path.as_str()));
            if self.dirs.contains_key(&path) {
                return Ok(EntryInfo::new(name, EntryKind::Dir));
            }
            self.dirs
                .get(parent)
                .and_then(|entries| entries.iter().find(|e| e.name == name).cloned())
                .ok_or(FetchError::Http(404))
        }

        async fn fetch_entries(&self, path: &str) -> Result<Vec<EntryInfo>, FetchError> {
            self.dirs
                .get(&path_join(&[path]))
                .cloned()
                .ok_or(FetchError::Http(404))
        }
    }

    fn source() -> FakeSource {
        FakeSource::default()
            .with_dir("a", vec![EntryInfo::new("old.mp4", EntryKind::Video)])
            .with_dir("b", vec![EntryInfo::new("new.mp4", EntryKind::Video)])
    }

    #[test]
    fn test_urls() {
        let api = ApiClient::new("http://nas.local:3000/");
        assert_eq!(
            api.entry_url("/movies/a b.mp4"),
            "http://nas.local:3000/api/entry?path=%2Fmovies%2Fa%20b.mp4"
        );
        assert_eq!(api.dir_url(""), "http://nas.local:3000/api/dir?path=%2F");
        assert_eq!(
            api.data_url("movies/a b.mp4"),
            "http://nas.local:3000/data/movies/a%20b.mp4"
        );
    }

    #[test]
    fn test_urls_relative_to_page_origin() {
        let api = ApiClient::new("");
        assert_eq!(api.dir_url("x"), "/api/dir?path=%2Fx");
        assert_eq!(api.data_url("/x/y.mp4"), "/data/x/y.mp4");
    }

    #[test]
    fn test_ticket_invalidation() {
        let guard = LatestRequest::default();
        let first = guard.begin();
        assert!(first.is_current());

        let second = guard.begin();
        assert!(!first.is_current());
        assert!(second.is_current());

        let third = guard.begin();
        assert!(!second.is_current());
        assert!(third.is_current());
    }

    #[tokio::test]
    async fn test_stale_response_is_dropped() {
        let source = source();
        let guard = LatestRequest::default();
        let state = RefCell::new(LoadState::<Vec<EntryInfo>>::Loading);

        // Request /a, then supersede it with /b before /a completes.
        let ticket_a = guard.begin();
        let pending_a = load_latest(ticket_a, "a", source.fetch_entries("a"), |s| {
            *state.borrow_mut() = s
        });
        let ticket_b = guard.begin();
        let pending_b = load_latest(ticket_b, "b", source.fetch_entries("b"), |s| {
            *state.borrow_mut() = s
        });

        // /b resolves first, /a resolves late.
        assert!(pending_b.await);
        assert!(!pending_a.await);

        assert_eq!(
            *state.borrow(),
            LoadState::Loaded(vec![EntryInfo::new("new.mp4", EntryKind::Video)])
        );
    }

    #[tokio::test]
    async fn test_failure_collapses_to_failed() {
        let source = source();
        let guard = LatestRequest::default();
        let mut observed = LoadState::Loading;

        let applied = load_latest(guard.begin(), "missing", source.fetch_entries("missing"), |s| {
            observed = s
        })
        .await;

        assert!(applied);
        assert_eq!(observed, LoadState::Failed);
        assert!(observed.data().is_none());
    }

    #[tokio::test]
    async fn test_fetch_entry_kinds() {
        let source = source();
        assert_eq!(
            source.fetch_entry("/a").await,
            Ok(EntryInfo::new("a", EntryKind::Dir))
        );
        assert_eq!(
            source.fetch_entry("/b/new.mp4").await,
            Ok(EntryInfo::new("new.mp4", EntryKind::Video))
        );
        assert_eq!(source.fetch_entry("/c").await, Err(FetchError::Http(404)));
    }
}
