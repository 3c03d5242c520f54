use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    StoreLoaded {
        path: String,
        count: usize,
    },

    StoreRecovered {
        reason: String,
    },

    BookmarkAdded {
        index: usize,
        name: String,
    },

    BookmarkDeleted {
        index: usize,
        name: String,
    },

    BookmarkOpened {
        index: usize,
        link: String,
    },

    StorePersisted {
        path: String,
        count: usize,
    },
}
