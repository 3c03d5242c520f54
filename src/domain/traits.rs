use crate::domain::error::BookmarkError;

/// Hands a link to the user's default URL/file handler.
pub trait Opener {
    fn open(&self, link: &str) -> Result<(), BookmarkError>;
}
