use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

/// What the stub status page answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    Page(String),
    Status(u16),
}

/// A stub status page on a free local port.
///
/// The reply can be swapped while the service is polling it.
pub struct Upstream {
    port: u16,
    reply: Arc<Mutex<Reply>>,
    hits: Arc<AtomicUsize>,
}

impl Upstream {
    pub fn start(reply: Reply) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind upstream");
        let port = listener.local_addr().expect("upstream addr").port();

        let reply = Arc::new(Mutex::new(reply));
        let hits = Arc::new(AtomicUsize::new(0));

        thread::spawn({
            let reply = reply.clone();
            let hits = hits.clone();
            move || {
                for stream in listener.incoming() {
                    let Ok(stream) = stream else { continue };
                    hits.fetch_add(1, Ordering::SeqCst);
                    let current = reply.lock().unwrap().clone();
                    respond(stream, &current);
                }
            }
        });

        Self { port, reply, hits }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn set(&self, reply: Reply) {
        *self.reply.lock().unwrap() = reply;
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

fn respond(mut stream: TcpStream, reply: &Reply) {
    // Drain the request head before answering.
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => head.extend_from_slice(&buf[..n]),
        }
    }

    let (status, body) = match reply {
        Reply::Page(page) => ("200 OK".to_string(), page.as_str()),
        Reply::Status(code) => (format!("{code} Upstream Error"), ""),
    };

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
}

/// Read a page from `fixtures/pages`.
pub fn fixture_page(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("pages")
        .join(name);

    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read {}: {e}", path.display()))
}
