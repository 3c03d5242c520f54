use crate::domain::error::BookmarkError;
use crate::domain::model::{Bookmark, ListEntry};

/// In-memory bookmark sequence. Insertion order is the addressing scheme.
///
/// The store is the sole owner of its bookmarks; readers get borrowed views.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkStore {
    bookmarks: Vec<Bookmark>,
}

impl BookmarkStore {
    pub fn new(bookmarks: Vec<Bookmark>) -> Self {
        Self { bookmarks }
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Appends and returns the new bookmark's index.
    pub fn add(&mut self, bookmark: Bookmark) -> usize {
        self.bookmarks.push(bookmark);
        self.bookmarks.len() - 1
    }

    /// Resolves `index` to the entry it addresses.
    pub fn get(&self, index: i64) -> Result<ListEntry<'_>, BookmarkError> {
        let idx = self.checked_index(index)?;
        Ok(ListEntry {
            index: idx,
            bookmark: &self.bookmarks[idx],
        })
    }

    /// Removes the bookmark at `index`, shifting later entries down by one.
    /// The bounds check runs before any mutation. Returns the checked
    /// position alongside the removed bookmark.
    pub fn delete(&mut self, index: i64) -> Result<(usize, Bookmark), BookmarkError> {
        let idx = self.checked_index(index)?;
        Ok((idx, self.bookmarks.remove(idx)))
    }

    pub fn list(&self) -> impl Iterator<Item = ListEntry<'_>> {
        self.bookmarks
            .iter()
            .enumerate()
            .map(|(index, bookmark)| ListEntry { index, bookmark })
    }

    fn checked_index(&self, index: i64) -> Result<usize, BookmarkError> {
        let len = self.bookmarks.len();
        match usize::try_from(index) {
            Ok(idx) if idx < len => Ok(idx),
            _ => Err(BookmarkError::IndexOutOfRange { index, len }),
        }
    }
}

impl From<Vec<Bookmark>> for BookmarkStore {
    fn from(bookmarks: Vec<Bookmark>) -> Self {
        Self::new(bookmarks)
    }
}
