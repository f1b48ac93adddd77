use futures_util::SinkExt;
use integration_tests::harness::ws::{connect, next_snapshot, wait_for_snapshot};
use integration_tests::harness::{Reply, TestServer, fixture_page};
use std::thread;
use std::time::{Duration, Instant};
use tokio_tungstenite::tungstenite::Message;

const CONFIG: &str = "railwatch.hcl";

fn subscribers(srv: &TestServer) -> u64 {
    let body = srv.get("/healthz").send().unwrap().text().unwrap();
    let health: serde_json::Value = serde_json::from_str(&body).unwrap();
    health["subscribers"].as_u64().unwrap()
}

#[test]
fn websocket_sends_current_snapshot_then_updates() {
    let srv = TestServer::start(CONFIG, Reply::Page(fixture_page("area_trouble.html")));
    let current = srv.wait_for_snapshot(|s| s["live"] == true);
    let url = srv.ws_url("/ws");

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let mut socket = connect(&url).await;

        let first = next_snapshot(&mut socket).await;
        assert_eq!(first["live"], true);
        assert_eq!(first["lines"], current["lines"]);

        srv.upstream()
            .set(Reply::Page(fixture_page("area_recovered.html")));
        let updated = wait_for_snapshot(&mut socket, |s| {
            s["lines"].as_array().is_some_and(|l| l.len() == 3)
        })
        .await;

        assert_eq!(updated["lines"][0]["status_en"], "Preparing to resume operations");
    });
}

#[test]
fn websocket_placeholder_then_first_live_snapshot() {
    let srv = TestServer::start(CONFIG, Reply::Status(503));
    srv.wait_for_polls(1);
    let url = srv.ws_url("/ws/");

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let mut socket = connect(&url).await;

        let first = next_snapshot(&mut socket).await;
        assert_eq!(first["live"], false);

        srv.upstream()
            .set(Reply::Page(fixture_page("area_trouble.html")));
        let live = wait_for_snapshot(&mut socket, |s| s["live"] == true).await;
        assert_eq!(live["lines"].as_array().unwrap().len(), 5);
    });
}

#[test]
fn inbound_messages_are_ignored() {
    let srv = TestServer::start(CONFIG, Reply::Page(fixture_page("area_trouble.html")));
    srv.wait_for_snapshot(|s| s["live"] == true);
    let url = srv.ws_url("/ws");

    let rt = tokio::runtime::Runtime::new().unwrap();
    rt.block_on(async {
        let mut socket = connect(&url).await;
        next_snapshot(&mut socket).await;

        socket.send(Message::Text("hello".into())).await.unwrap();
        socket.send(Message::Binary(vec![1, 2, 3])).await.unwrap();
        socket.send(Message::Ping(vec![])).await.unwrap();

        // The next cycle is still delivered.
        let next = next_snapshot(&mut socket).await;
        assert_eq!(next["live"], true);
    });
}

#[test]
fn every_subscriber_is_counted_and_released() {
    let srv = TestServer::start(CONFIG, Reply::Page(fixture_page("area_trouble.html")));
    srv.wait_for_snapshot(|s| s["live"] == true);
    let url = srv.ws_url("/ws");

    let rt = tokio::runtime::Runtime::new().unwrap();
    let sockets = rt.block_on(async {
        let mut sockets = Vec::new();
        for _ in 0..5 {
            let mut socket = connect(&url).await;
            let first = next_snapshot(&mut socket).await;
            assert_eq!(first["live"], true);
            sockets.push(socket);
        }
        sockets
    });

    assert_eq!(subscribers(&srv), 5);

    rt.block_on(async {
        for mut socket in sockets {
            socket.close(None).await.unwrap();
        }
    });

    let deadline = Instant::now() + Duration::from_secs(5);
    while subscribers(&srv) != 0 {
        assert!(Instant::now() < deadline, "subscribers were not released");
        thread::sleep(Duration::from_millis(25));
    }
}
