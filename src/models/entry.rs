//! Entry metadata as reported by the listing API.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Kind of a remote filesystem entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Dir,
    Video,
    Image,
    Text,
}

impl EntryKind {
    pub fn is_dir(self) -> bool {
        self == Self::Dir
    }
}

/// One file or directory node.
///
/// Identity is `(parent path, name)`; the API does not report the parent, so
/// callers carry it alongside.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryInfo {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub name: String,
}

impl EntryInfo {
    pub fn new(name: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Body of `GET /api/dir`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirListing {
    #[serde(default)]
    pub entries: Vec<EntryInfo>,
}

impl DirListing {
    /// Consume the listing, returning entries in display order.
    pub fn into_sorted(mut self) -> Vec<EntryInfo> {
        sort_entries(&mut self.entries);
        self.entries
    }
}

/// Directories first, then case-insensitive by name.
///
/// Exact name breaks ties so the order is total and stable across reloads.
fn sort_entries(entries: &mut [EntryInfo]) {
    entries.sort_by(compare_entries);
}

fn compare_entries(a: &EntryInfo, b: &EntryInfo) -> Ordering {
    b.kind
        .is_dir()
        .cmp(&a.kind.is_dir())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_wire_format() {
        let entry: EntryInfo = serde_json::from_str(r#"{"type":"video","name":"a.mp4"}"#).unwrap();
        assert_eq!(entry, EntryInfo::new("a.mp4", EntryKind::Video));

        let json = serde_json::to_string(&EntryInfo::new("docs", EntryKind::Dir)).unwrap();
        assert_eq!(json, r#"{"type":"dir","name":"docs"}"#);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let parsed = serde_json::from_str::<EntryInfo>(r#"{"type":"socket","name":"x"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_listing_missing_entries_defaults_empty() {
        let listing: DirListing = serde_json::from_str("{}").unwrap();
        assert!(listing.entries.is_empty());
    }

    #[test]
    fn test_sort_dirs_first_then_name() {
        let listing = DirListing {
            entries: vec![
                EntryInfo::new("b.mp4", EntryKind::Video),
                EntryInfo::new("Zeta", EntryKind::Dir),
                EntryInfo::new("A.mp4", EntryKind::Video),
                EntryInfo::new("alpha", EntryKind::Dir),
                EntryInfo::new("notes.txt", EntryKind::Text),
            ],
        };

        let names: Vec<_> = listing
            .into_sorted()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, ["alpha", "Zeta", "A.mp4", "b.mp4", "notes.txt"]);
    }
}
