//! Persisted library of saved and draft snapshots.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{AppError, Image};
use crate::ports::BlobStore;

/// Fixed key the library blob is stored under.
pub const LIBRARY_KEY: &str = "imagelab.library";

/// Library classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Draft,
    Saved,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Draft => "draft",
            ItemKind::Saved => "saved",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "draft" | "drafts" => Ok(ItemKind::Draft),
            "saved" => Ok(ItemKind::Saved),
            _ => Err(AppError::InvalidItemKind(s.to_string())),
        }
    }
}

/// A snapshot saved outside the edit history. Never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryItem {
    pub id: String,
    pub kind: ItemKind,
    pub image: Image,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
}

/// Wire layout of one persisted item.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredItem {
    id: String,
    #[serde(rename = "type")]
    kind: ItemKind,
    image_data: String,
    timestamp: i64,
}

impl From<&LibraryItem> for StoredItem {
    fn from(item: &LibraryItem) -> Self {
        Self {
            id: item.id.clone(),
            kind: item.kind,
            image_data: item.image.to_data_url(),
            timestamp: item.timestamp,
        }
    }
}

/// Decode a persisted blob. Malformed blobs degrade to an empty list.
pub fn decode_items(blob: &str) -> Vec<LibraryItem> {
    let stored: Vec<StoredItem> = match serde_json::from_str(blob) {
        Ok(stored) => stored,
        Err(err) => {
            tracing::warn!(error = %err, "Ignoring malformed library data");
            return Vec::new();
        }
    };

    stored
        .into_iter()
        .filter_map(|s| match Image::from_data_url(&s.image_data) {
            Ok(image) => Some(LibraryItem { id: s.id, kind: s.kind, image, timestamp: s.timestamp }),
            Err(err) => {
                tracing::warn!(id = %s.id, error = %err, "Skipping library item with unreadable image");
                None
            }
        })
        .collect()
}

pub fn encode_items(items: &[LibraryItem]) -> Result<String, AppError> {
    let stored: Vec<StoredItem> = items.iter().map(StoredItem::from).collect();
    Ok(serde_json::to_string(&stored)?)
}

/// Most-recent-first collection backed by a blob store.
///
/// Loaded once on open; written best-effort after every mutation.
#[derive(Debug)]
pub struct Library<S: BlobStore> {
    store: S,
    items: Vec<LibraryItem>,
}

impl<S: BlobStore> Library<S> {
    /// Load the library from `store`. Read failures and corrupt data yield an empty library.
    pub fn open(store: S) -> Self {
        let items = match store.get(LIBRARY_KEY) {
            Ok(Some(blob)) => decode_items(&blob),
            Ok(None) => Vec::new(),
            Err(err) => {
                tracing::warn!(error = %err, "Failed to read library; starting empty");
                Vec::new()
            }
        };
        Self { store, items }
    }

    /// Insert a new item at the head and persist.
    pub fn add(&mut self, image: Image, kind: ItemKind) -> &LibraryItem {
        let item = LibraryItem {
            id: Uuid::new_v4().to_string(),
            kind,
            image,
            timestamp: chrono::Utc::now().timestamp_millis(),
        };
        tracing::debug!(id = %item.id, kind = %kind, "Adding library item");
        self.items.insert(0, item);
        self.persist();
        &self.items[0]
    }

    /// Remove the item with `id`. Returns false if nothing matched.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        let removed = self.items.len() != before;
        if removed {
            self.persist();
        }
        removed
    }

    pub fn get(&self, id: &str) -> Option<&LibraryItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[LibraryItem] {
        &self.items
    }

    pub fn of_kind(&self, kind: ItemKind) -> impl Iterator<Item = &LibraryItem> {
        self.items.iter().filter(move |item| item.kind == kind)
    }

    pub fn drafts(&self) -> impl Iterator<Item = &LibraryItem> {
        self.of_kind(ItemKind::Draft)
    }

    pub fn saved(&self) -> impl Iterator<Item = &LibraryItem> {
        self.of_kind(ItemKind::Saved)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self) {
        let result = encode_items(&self.items).and_then(|blob| self.store.put(LIBRARY_KEY, &blob));
        if let Err(err) = result {
            tracing::warn!(error = %err, "Failed to persist library");
        }
    }
}
