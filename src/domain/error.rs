use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Every failure a single `bit` invocation can hit.
///
/// Causes are carried as sources rather than interpolated into the message, so
/// printing the error chain (`{:#}` through `anyhow`) shows each cause once.
#[derive(Debug, Error)]
pub enum BookmarkError {
    #[error("cannot access bookmarks file {}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed bookmarks JSON in {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("index {index} is out of range for {len} bookmark(s)")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("invalid argument {input:?}")]
    ArgumentParse {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("missing argument <{name}>")]
    MissingArgument { name: &'static str },

    #[error("failed to launch opener {program:?}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write bookmarks file {}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: BoxError,
    },
}

/// Parses a positional index argument. Negative values parse fine and are
/// rejected later by the store's bounds check.
pub fn parse_index(input: &str) -> Result<i64, BookmarkError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|source| BookmarkError::ArgumentParse {
            input: input.to_string(),
            source,
        })
}
