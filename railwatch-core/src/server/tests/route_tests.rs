use crate::board::{Classifier, RawTriple, RecordBuilder, SortOrder};
use crate::broadcast::BroadcastHub;
use crate::scheduler::now;
use crate::server::{AppState, router};
use crate::shutdown::ShutdownHandle;
use crate::snapshot::{Snapshot, SnapshotStore};
use crate::test_support::capture_events;
use chrono_tz::Asia::Tokyo;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

struct Running {
    base: String,
    store: Arc<SnapshotStore>,
    hub: BroadcastHub,
    shutdown: ShutdownHandle,
    task: JoinHandle<()>,
}

impl Running {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn stop(self) {
        self.shutdown.trigger();
        self.task.await.unwrap();
    }
}

async fn start() -> Running {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    let store = Arc::new(SnapshotStore::new(Snapshot::placeholder(now(Tokyo))).unwrap());
    let hub = BroadcastHub::new();
    let shutdown = ShutdownHandle::new();

    let app = router(AppState {
        store: store.clone(),
        hub: hub.clone(),
        shutdown: shutdown.signal(),
    });

    let mut stop = shutdown.signal();
    let task = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { stop.wait().await })
            .await
            .unwrap();
    });

    Running {
        base: format!("http://{addr}"),
        store,
        hub,
        shutdown,
        task,
    }
}

fn live_snapshot() -> Snapshot {
    let builder = RecordBuilder::canonical(Classifier::Lexical, SortOrder::Line);
    let lines = builder.assemble([
        RawTriple::new("山手線", "平常運転", ""),
        RawTriple::new("京王線", "運転見合わせ", "大雪災害の影響で運転を見合わせています。"),
    ]);
    Snapshot::live(lines, now(Tokyo))
}

#[tokio::test]
async fn update_serves_the_placeholder_before_any_commit() {
    let server = start().await;

    let res = reqwest::get(server.url("/update")).await.unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.headers()["content-type"].to_str().unwrap(),
        "application/json"
    );

    let body: Value = serde_json::from_str(&res.text().await.unwrap()).unwrap();
    assert_eq!(body["live"], false);
    assert_eq!(body["lines"], Value::Array(vec![]));

    server.stop().await;
}

#[tokio::test]
async fn update_serves_the_latest_commit_with_or_without_slash() {
    let server = start().await;
    let frame = server.store.replace(live_snapshot()).unwrap();

    for path in ["/update", "/update/"] {
        let body = reqwest::get(server.url(path))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, frame.json.as_ref());
    }

    server.stop().await;
}

#[tokio::test]
async fn healthz_reports_liveness_and_subscribers() {
    let server = start().await;
    let _sub = server.hub.subscribe(&server.store);

    let body: Value = serde_json::from_str(
        &reqwest::get(server.url("/healthz"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap(),
    )
    .unwrap();

    assert_eq!(body["live"], false);
    assert_eq!(body["subscribers"], 1);
    assert!(body["updated"].as_str().unwrap().len() == "00:00:00 2000-01-01".len());

    server.stop().await;
}

#[tokio::test]
async fn index_and_static_assets_are_embedded() {
    let server = start().await;

    let index = reqwest::get(server.url("/")).await.unwrap();
    assert_eq!(index.status(), 200);
    assert!(
        index.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );
    assert!(index.text().await.unwrap().contains("/static/app.js"));

    let script = reqwest::get(server.url("/static/app.js")).await.unwrap();
    assert_eq!(script.status(), 200);
    assert!(
        script.headers()["content-type"]
            .to_str()
            .unwrap()
            .contains("javascript")
    );

    server.stop().await;
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let server = start().await;

    for path in ["/static/missing.js", "/nope"] {
        let res = reqwest::get(server.url(path)).await.unwrap();
        assert_eq!(res.status(), 404, "{path}");
    }

    server.stop().await;
}

#[tokio::test]
async fn requests_are_logged() {
    let (_guard, events) = capture_events();
    let server = start().await;

    reqwest::get(server.url("/update")).await.unwrap();

    let logged = events.with_message("request");
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].field("method"), Some("GET"));
    assert_eq!(logged[0].field("path"), Some("/update"));
    assert_eq!(logged[0].field("status"), Some("200"));

    server.stop().await;
}
