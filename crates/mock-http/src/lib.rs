//! One-shot HTTP server for client tests.
//!
//! Binds `127.0.0.1:0`, answers a single request with a canned JSON
//! response and hands back the raw request text for assertions.

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Serve one response on a random port.
///
/// Returns the base URL and a handle that yields the raw request.
pub async fn serve_once(
    status: &'static str,
    body: impl Into<String>,
) -> (String, JoinHandle<String>) {
    let body = body.into();
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock service");
    let addr = listener.local_addr().expect("Failed to get local address");

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status}\r\n\
             Content-Type: application/json\r\n\
             Content-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.expect("write failed");
        let _ = socket.shutdown().await;
        request
    });

    (format!("http://{}", addr), handle)
}

/// Base URL of a port nothing listens on.
pub async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let addr = listener.local_addr().expect("Failed to get local address");
    drop(listener);
    format!("http://{}", addr)
}

/// Read headers plus `Content-Length` bytes of body.
async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = socket.read(&mut chunk).await.expect("read failed");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(end) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let headers = String::from_utf8_lossy(&buf[..end]).to_lowercase();
            let length = headers
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                break;
            }
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}
