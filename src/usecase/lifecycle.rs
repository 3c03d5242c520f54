use crate::domain::error::BookmarkError;
use crate::domain::store::BookmarkStore;
use crate::domain::traits::Opener;
use crate::infrastructure::serde_json_adapter::{ensure_bookmarks_file, read_store, write_store};
use crate::usecase::command::{Command, Outcome};
use crate::usecase::event::AppEvent;
use anyhow::Error;
use std::path::Path;
use tokio::sync::mpsc;

/// The store a run starts from, plus the problems it recovered from on the way.
#[derive(Debug)]
pub struct LoadedStore {
    pub store: BookmarkStore,
    pub recovered: Vec<Error>,
}

/// Ensures the file exists and loads it. Never fails: create and load
/// problems are collected and the run continues with whatever could be read,
/// an empty store at worst.
pub async fn load_store(path: &Path, sink: &Option<mpsc::Sender<AppEvent>>) -> LoadedStore {
    let mut recovered = Vec::new();

    match ensure_bookmarks_file(path).await {
        Ok(true) => log::info!("created empty bookmarks file at {}", path.display()),
        Ok(false) => {}
        Err(e) => recovered.push(Error::new(e).context("unable to create bookmarks file")),
    }

    let store = match read_store(path).await {
        Ok(store) => store,
        Err(e) => {
            let err = Error::new(e).context("unable to load bookmarks from file");
            emit(
                sink,
                AppEvent::StoreRecovered {
                    reason: format!("{err:#}"),
                },
            )
            .await;
            recovered.push(err);
            BookmarkStore::default()
        }
    };

    log::debug!("loaded {} bookmark(s) from {}", store.len(), path.display());
    emit(
        sink,
        AppEvent::StoreLoaded {
            path: path.display().to_string(),
            count: store.len(),
        },
    )
    .await;

    LoadedStore { store, recovered }
}

/// Applies one command. On error the store is left exactly as it was.
pub async fn execute(
    store: &mut BookmarkStore,
    command: Command,
    opener: &dyn Opener,
    sink: &Option<mpsc::Sender<AppEvent>>,
) -> Result<Outcome, BookmarkError> {
    match command {
        Command::Add(bookmark) => {
            let name = bookmark.name.clone();
            let index = store.add(bookmark);
            emit(sink, AppEvent::BookmarkAdded { index, name }).await;
            Ok(Outcome::Added { index })
        }
        Command::List => Ok(Outcome::Listed),
        Command::Delete { index } => {
            let (index, bookmark) = store.delete(index)?;
            emit(
                sink,
                AppEvent::BookmarkDeleted {
                    index,
                    name: bookmark.name.clone(),
                },
            )
            .await;
            Ok(Outcome::Deleted { index, bookmark })
        }
        Command::Open { index } => {
            let entry = store.get(index)?;
            let (index, link) = (entry.index, entry.bookmark.link.clone());
            opener.open(&link)?;
            emit(
                sink,
                AppEvent::BookmarkOpened {
                    index,
                    link: link.clone(),
                },
            )
            .await;
            Ok(Outcome::Opened { index, link })
        }
        Command::Help => Ok(Outcome::Help),
    }
}

/// Rewrites the whole file from the in-memory store. A failure here does not
/// undo the mutation already applied in memory.
pub async fn persist_store(
    path: &Path,
    store: &BookmarkStore,
    sink: &Option<mpsc::Sender<AppEvent>>,
) -> Result<(), BookmarkError> {
    write_store(path, store).await?;

    emit(
        sink,
        AppEvent::StorePersisted {
            path: path.display().to_string(),
            count: store.len(),
        },
    )
    .await;
    Ok(())
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
