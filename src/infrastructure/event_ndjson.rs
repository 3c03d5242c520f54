use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::StoreLoaded { path, count } => {
            json!({"type":"store_loaded","path":path,"count":count})
        }
        AppEvent::StoreRecovered { reason } => json!({"type":"store_recovered","reason":reason}),
        AppEvent::BookmarkAdded { index, name } => {
            json!({"type":"bookmark_added","index":index,"name":name})
        }
        AppEvent::BookmarkDeleted { index, name } => {
            json!({"type":"bookmark_deleted","index":index,"name":name})
        }
        AppEvent::BookmarkOpened { index, link } => {
            json!({"type":"bookmark_opened","index":index,"link":link})
        }
        AppEvent::StorePersisted { path, count } => {
            json!({"type":"store_persisted","path":path,"count":count})
        }
    }
}

/// Drains events until every sender is dropped.
pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stderr; stdout is reserved for `list` output.
            eprintln!("{line}");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_event_to_json_covers_all_variants() {
        let v = app_event_to_json(&AppEvent::StoreLoaded {
            path: "/tmp/b.json".to_string(),
            count: 2,
        });
        assert_eq!(v["type"], "store_loaded");
        assert_eq!(v["count"], 2);

        let v = app_event_to_json(&AppEvent::StoreRecovered {
            reason: "bad json".to_string(),
        });
        assert_eq!(v["type"], "store_recovered");

        let v = app_event_to_json(&AppEvent::BookmarkAdded {
            index: 0,
            name: "Docs".to_string(),
        });
        assert_eq!(v["type"], "bookmark_added");
        assert_eq!(v["name"], "Docs");

        let v = app_event_to_json(&AppEvent::BookmarkDeleted {
            index: 1,
            name: "Old".to_string(),
        });
        assert_eq!(v["type"], "bookmark_deleted");

        let v = app_event_to_json(&AppEvent::BookmarkOpened {
            index: 0,
            link: "https://x.test".to_string(),
        });
        assert_eq!(v["type"], "bookmark_opened");
        assert_eq!(v["link"], "https://x.test");

        let v = app_event_to_json(&AppEvent::StorePersisted {
            path: "/tmp/b.json".to_string(),
            count: 1,
        });
        assert_eq!(v["type"], "store_persisted");
    }

    #[tokio::test]
    async fn spawn_ndjson_printer_drains_and_exits() {
        let (tx, rx) = mpsc::channel::<AppEvent>(8);
        let handle = spawn_ndjson_printer(rx);

        tx.send(AppEvent::StoreRecovered {
            reason: "x".to_string(),
        })
        .await
        .expect("send");
        drop(tx);

        handle.await.expect("join");
    }
}
