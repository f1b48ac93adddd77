use crate::harness::config::render_config;
use crate::harness::init_test_tracing;
use crate::harness::upstream::{Reply, Upstream};
use railwatch_core::server::serve;
use railwatch_core::shutdown::ShutdownHandle;
use reqwest::blocking::{Client, RequestBuilder};
use serde_json::Value;
use std::net::TcpStream;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use tempfile::NamedTempFile;

/// Handle to a running Railwatch service polling a stub upstream.
///
/// Dropping it shuts the service down and waits for it to exit.
pub struct TestServer {
    base_url: String,
    client: Client,
    upstream: Upstream,
    shutdown: ShutdownHandle,
    thread: Option<JoinHandle<()>>,
    _config: NamedTempFile,
}

impl TestServer {
    /// Start the service with the given config fixture, polling a stub that
    /// answers with `reply`.
    ///
    /// Ports are allocated dynamically, so tests can run in parallel.
    pub fn start(fixture: &str, reply: Reply) -> Self {
        init_test_tracing();

        let upstream = Upstream::start(reply);
        let listen_port = free_port();
        let (cfg, config_file) = render_config(fixture, listen_port, upstream.port());

        let shutdown = ShutdownHandle::new();
        let thread = thread::spawn({
            let shutdown = shutdown.clone();
            move || {
                let runtime = tokio::runtime::Builder::new_multi_thread()
                    .worker_threads(2)
                    .enable_all()
                    .build()
                    .expect("failed to build test runtime");

                if let Err(e) = runtime.block_on(serve(cfg, shutdown)) {
                    eprintln!("test server failed: {e:#}");
                }
            }
        });

        let base_url = format!("http://127.0.0.1:{listen_port}");
        wait_for_server(&base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .expect("failed to build client");

        Self {
            base_url,
            client,
            upstream,
            shutdown,
            thread: Some(thread),
            _config: config_file,
        }
    }

    /// Convenience helper for GET requests.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}{}", self.base_url, path))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn ws_url(&self, path: &str) -> String {
        format!(
            "ws://{}{}",
            self.base_url.strip_prefix("http://").unwrap_or(&self.base_url),
            path
        )
    }

    pub fn upstream(&self) -> &Upstream {
        &self.upstream
    }

    /// The current `/update` payload.
    pub fn snapshot(&self) -> Value {
        let body = self
            .get("/update")
            .send()
            .expect("GET /update failed")
            .text()
            .expect("unreadable /update body");
        serde_json::from_str(&body).expect("/update is not JSON")
    }

    /// Poll `/update` until `accept` holds (or panic).
    pub fn wait_for_snapshot(&self, accept: impl Fn(&Value) -> bool) -> Value {
        let deadline = Instant::now() + Duration::from_secs(10);

        loop {
            let snapshot = self.snapshot();
            if accept(&snapshot) {
                return snapshot;
            }
            if Instant::now() > deadline {
                panic!("snapshot never matched; last seen: {snapshot}");
            }
            thread::sleep(Duration::from_millis(50));
        }
    }

    /// Block until the stub has been polled `n` more times.
    pub fn wait_for_polls(&self, n: usize) {
        let target = self.upstream.hits() + n;
        let deadline = Instant::now() + Duration::from_secs(10);

        while self.upstream.hits() < target {
            if Instant::now() > deadline {
                panic!("upstream polled {} times, wanted {target}", self.upstream.hits());
            }
            thread::sleep(Duration::from_millis(25));
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

/// Poll until the server accepts connections (or panic).
fn wait_for_server(base_url: &str) {
    let addr = base_url.strip_prefix("http://").unwrap_or(base_url);
    let deadline = Instant::now() + Duration::from_secs(2);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {base_url}");
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

/// Allocate a free port on localhost.
/// This is required to avoid port collisions when running tests in parallel.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
