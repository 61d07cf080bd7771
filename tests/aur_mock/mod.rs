//! Local stand-in for the AUR web interface.
//!
//! Serves one canned response to every request on `127.0.0.1:*` and records
//! the request targets it saw.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::{Shutdown, TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub type HarnessResult<T> = Result<T, String>;

pub struct MockAurServer {
    address: String,
    shutdown: Arc<AtomicBool>,
    targets: Arc<Mutex<Vec<String>>>,
    thread: Option<thread::JoinHandle<()>>,
}

impl MockAurServer {
    /// Start a server answering every request with `status` and `body`.
    pub fn start(status: u16, body: impl Into<String>) -> HarnessResult<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .map_err(|e| format!("failed binding mock server: {e}"))?;
        listener
            .set_nonblocking(true)
            .map_err(|e| format!("failed setting nonblocking listener: {e}"))?;
        let addr = listener
            .local_addr()
            .map_err(|e| format!("failed getting mock server addr: {e}"))?;

        let shutdown = Arc::new(AtomicBool::new(false));
        let targets = Arc::new(Mutex::new(Vec::new()));
        let shutdown_flag = Arc::clone(&shutdown);
        let seen = Arc::clone(&targets);
        let body = body.into();
        let thread = thread::spawn(move || {
            while !shutdown_flag.load(Ordering::Relaxed) {
                match listener.accept() {
                    Ok((mut stream, _)) => {
                        if let Ok(target) = handle_request(&mut stream, status, &body) {
                            if let Ok(mut seen) = seen.lock() {
                                seen.push(target);
                            }
                        }
                    }
                    Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                        thread::sleep(Duration::from_millis(10));
                    }
                    Err(_) => {
                        thread::sleep(Duration::from_millis(10));
                    }
                }
            }
        });

        Ok(Self {
            address: format!("http://{addr}"),
            shutdown,
            targets,
            thread: Some(thread),
        })
    }

    /// Base URL to hand to `AurClient::new`.
    pub fn base_url(&self) -> &str {
        &self.address
    }

    /// Request targets (path and query) in arrival order.
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().map(|t| t.clone()).unwrap_or_default()
    }
}

impl Drop for MockAurServer {
    fn drop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(host) = self.address.strip_prefix("http://") {
            let _ = TcpStream::connect(host).and_then(|s| s.shutdown(Shutdown::Both));
        }
        if let Some(join) = self.thread.take() {
            let _ = join.join();
        }
    }
}

fn handle_request(stream: &mut TcpStream, status: u16, body: &str) -> HarnessResult<String> {
    stream
        .set_nonblocking(false)
        .map_err(|e| format!("failed setting blocking stream: {e}"))?;
    let target = read_request_target(stream)?;
    let reason = match status {
        200 => "OK",
        404 => "Not Found",
        _ => "Error",
    };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream
        .write_all(response.as_bytes())
        .map_err(|e| format!("failed writing response: {e}"))?;
    let _ = stream.flush();
    Ok(target)
}

fn read_request_target(stream: &mut TcpStream) -> HarnessResult<String> {
    stream
        .set_read_timeout(Some(Duration::from_secs(5)))
        .map_err(|e| format!("failed setting read timeout: {e}"))?;
    let mut buffer = Vec::<u8>::new();
    let mut temp = [0u8; 2048];
    while find_header_terminator(&buffer).is_none() {
        let n = stream
            .read(&mut temp)
            .map_err(|e| format!("failed reading request bytes: {e}"))?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&temp[..n]);
    }

    let head = String::from_utf8_lossy(&buffer);
    let request_line = head
        .lines()
        .next()
        .ok_or_else(|| "malformed HTTP request (empty)".to_string())?;
    request_line
        .split_whitespace()
        .nth(1)
        .map(str::to_string)
        .ok_or_else(|| format!("malformed request line `{request_line}`"))
}

fn find_header_terminator(bytes: &[u8]) -> Option<usize> {
    bytes.windows(4).position(|window| window == b"\r\n\r\n")
}

/// Package page with one comment container per `(title, comments)` pair,
/// shaped like the AUR's markup.
pub fn package_page(sections: &[(&str, Vec<(&str, &str)>)]) -> String {
    let mut html = String::from("<!DOCTYPE html><html><body><div id=\"content\">\n");
    for (idx, (title, comments)) in sections.iter().enumerate() {
        html.push_str("<div class=\"comments package-comments\">\n");
        html.push_str(&format!(
            "<div class=\"comments-header\"><h3><span class=\"text\">{title}</span></h3></div>\n"
        ));
        for (n, (heading, body)) in comments.iter().enumerate() {
            let id = idx * 100 + n;
            html.push_str(&format!(
                "<h4 id=\"comment-{id}\" class=\"comment-header\">{heading}</h4>\n\
                 <div id=\"comment-{id}-content\" class=\"article-content\"><div>{body}</div></div>\n"
            ));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div></body></html>");
    html
}
