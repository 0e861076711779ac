//! Path normalization for the remote tree.
//!
//! Paths are `/`-delimited and never carry a leading separator once
//! normalized. `..` cancels one preceding segment; at the top it is dropped.

use std::borrow::Cow;

use crate::models::{EntryInfo, EntryKind};

/// Join and normalize path segments.
///
/// Separators are collapsed, `.` is dropped, and `..` removes the previous
/// segment (or nothing, at the top). The result has no leading or trailing
/// separator, so `path_join(&[path_join(x)]) == path_join(x)`.
pub fn path_join<S: AsRef<str>>(segments: &[S]) -> String {
    let mut resolved: Vec<&str> = Vec::new();

    for (idx, segment) in segments.iter().enumerate() {
        let mut segment = segment.as_ref();
        if idx > 0 {
            segment = segment.trim_start_matches('/');
        }
        segment = segment.trim_end_matches('/');

        for part in segment.split('/') {
            match part {
                "" | "." => {}
                ".." => {
                    resolved.pop();
                }
                _ => resolved.push(part),
            }
        }
    }

    resolved.join("/")
}

/// Parent directory of `path` (root stays root).
pub fn parent_of(path: &str) -> String {
    path_join(&[path, ".."])
}

/// Percent-decode a path. Malformed input is returned unchanged.
pub fn decode_path(path: &str) -> String {
    urlencoding::decode(path)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| path.to_string())
}

/// Percent-encode each segment of a normalized path, keeping separators.
pub fn encode_path(path: &str) -> String {
    path.split('/')
        .filter(|s| !s.is_empty())
        .map(|s| urlencoding::encode(s).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Find the video that should play after `current_path`.
///
/// `siblings` is the listing of the parent directory, in display order. Paths
/// are compared decoded, so an encoded `current_path` still matches. Returns
/// the decoded path of the first video after the current entry, or `None` if
/// the current entry is missing or last. There is no wrap-around.
pub fn get_next_video(current_path: &str, siblings: &[EntryInfo]) -> Option<String> {
    let current = path_join(&[decode_path(current_path)]);
    let parent = parent_of(&current);

    let mut found = false;
    for entry in siblings {
        let candidate = path_join(&[parent.as_str(), entry.name.as_str()]);
        if found && entry.kind == EntryKind::Video {
            return Some(candidate);
        }
        if candidate == current {
            found = true;
        }
    }
    None
}

/// One breadcrumb segment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    /// Decoded ancestor path up to and including this segment.
    pub path: String,
    /// The last segment is the current location and is not a link.
    pub is_current: bool,
}

/// Split a path into breadcrumb segments.
///
/// Each crumb's path is the decoded input truncated at that segment.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let decoded = decode_path(path);
    let segments: Vec<&str> = decoded.split('/').filter(|s| !s.is_empty()).collect();

    segments
        .iter()
        .enumerate()
        .map(|(idx, segment)| Crumb {
            label: segment.to_string(),
            path: segments[..=idx].join("/"),
            is_current: idx + 1 == segments.len(),
        })
        .collect()
}
