use crate::domain::error::{BookmarkError, BoxError};
use crate::domain::model::Bookmark;
use crate::domain::store::BookmarkStore;
use crate::infrastructure::schema_validator::validate_bookmarks_file;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs;

/// Missing keys and `null` values decode as empty, so files written by
/// older tools (`"tags": null`, absent `link`) load without loss.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct BookmarkDto {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl From<BookmarkDto> for Bookmark {
    fn from(dto: BookmarkDto) -> Self {
        Bookmark {
            name: dto.name,
            link: dto.link,
            tags: dto.tags,
        }
    }
}

impl From<&Bookmark> for BookmarkDto {
    fn from(bm: &Bookmark) -> Self {
        BookmarkDto {
            name: bm.name.clone(),
            link: bm.link.clone(),
            tags: bm.tags.clone(),
        }
    }
}

/// Creates an empty bookmarks file when none exists. Returns whether it created one.
pub async fn ensure_bookmarks_file(path: &Path) -> Result<bool, BookmarkError> {
    let created = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await;

    match created {
        Ok(_) => Ok(true),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(source) => Err(BookmarkError::FileAccess {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Reads the bookmarks file. A missing file, or one holding nothing but
/// whitespace, reads as an empty list.
pub async fn read_bookmarks_file(path: &Path) -> Result<Vec<BookmarkDto>, BookmarkError> {
    let raw = match fs::read(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(BookmarkError::FileAccess {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    decode_bookmarks(&raw).map_err(|source| BookmarkError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

pub fn decode_bookmarks(raw: &[u8]) -> Result<Vec<BookmarkDto>, BoxError> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }

    let value: Value = serde_json::from_slice(raw)?;
    validate_bookmarks_file(&value)?;

    // `null` decodes to no bookmarks.
    let dtos: Option<Vec<BookmarkDto>> = serde_json::from_value(value)?;
    Ok(dtos.unwrap_or_default())
}

/// Create-or-truncate then write. No rename swap, no fsync.
pub async fn write_bookmarks_file(path: &Path, bookmarks: &[BookmarkDto]) -> Result<(), BookmarkError> {
    let pretty = serde_json::to_string_pretty(bookmarks).map_err(|e| BookmarkError::Persist {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    fs::write(path, pretty)
        .await
        .map_err(|e| BookmarkError::Persist {
            path: path.to_path_buf(),
            source: e.into(),
        })
}

pub async fn read_store(path: &Path) -> Result<BookmarkStore, BookmarkError> {
    let dtos = read_bookmarks_file(path).await?;
    Ok(dtos.into_iter().map(Bookmark::from).collect::<Vec<_>>().into())
}

pub async fn write_store(path: &Path, store: &BookmarkStore) -> Result<(), BookmarkError> {
    let dtos: Vec<BookmarkDto> = store.bookmarks().iter().map(BookmarkDto::from).collect();
    write_bookmarks_file(path, &dtos).await
}
