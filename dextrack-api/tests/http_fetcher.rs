//! `HttpFetcher` against a throwaway HTTP server on 127.0.0.1.

use std::net::SocketAddr;
use std::time::Duration;

use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use dextrack_api::{FetchError, Fetcher, HttpFetcher};

const TIMEOUT: Duration = Duration::from_secs(5);

async fn bind() -> (TcpListener, SocketAddr) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    (listener, addr)
}

/// Read until the end of the request head.
async fn read_head(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut chunk).await.expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Answer exactly one request with `status` and `body`, returning the
/// request head that was received.
fn respond_once(
    listener: TcpListener,
    status: &'static str,
    content_type: &'static str,
    body: &'static str,
) -> JoinHandle<String> {
    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let head = read_head(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        stream.shutdown().await.ok();
        head
    })
}

fn url(addr: SocketAddr, path: &str) -> String {
    format!("http://{addr}{path}")
}

#[tokio::test]
async fn test_success_parses_json_body() {
    let (listener, addr) = bind().await;
    let server = respond_once(
        listener,
        "200 OK",
        "application/json",
        r#"{"id": 25, "name": "pikachu"}"#,
    );

    let fetcher = HttpFetcher::new().unwrap();
    let value = fetcher
        .fetch(&url(addr, "/pokemon/25"), TIMEOUT)
        .await
        .unwrap();
    assert_eq!(value, json!({"id": 25, "name": "pikachu"}));

    let head = server.await.unwrap();
    assert!(head.starts_with("GET /pokemon/25 HTTP/1.1"));
    assert!(head.to_lowercase().contains("user-agent: dextrack/"));
}

#[tokio::test]
async fn test_error_status_skips_body_parsing() {
    let (listener, addr) = bind().await;
    let server = respond_once(
        listener,
        "503 Service Unavailable",
        "text/html",
        "<html>down for maintenance</html>",
    );

    let fetcher = HttpFetcher::new().unwrap();
    let err = fetcher
        .fetch(&url(addr, "/pokemon/1"), TIMEOUT)
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::Http { status: 503 });
    server.await.unwrap();
}

#[tokio::test]
async fn test_not_found_reports_status() {
    let (listener, addr) = bind().await;
    let server = respond_once(listener, "404 Not Found", "text/plain", "Not Found");

    let fetcher = HttpFetcher::new().unwrap();
    let err = fetcher
        .fetch(&url(addr, "/pokemon/missingno"), TIMEOUT)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
    server.await.unwrap();
}

#[tokio::test]
async fn test_invalid_json_is_parse_error() {
    let (listener, addr) = bind().await;
    let server = respond_once(listener, "200 OK", "application/json", "{not json");

    let fetcher = HttpFetcher::new().unwrap();
    let err = fetcher
        .fetch(&url(addr, "/pokemon/1"), TIMEOUT)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Parse(_)), "got {err:?}");
    server.await.unwrap();
}

#[tokio::test]
async fn test_silent_server_times_out_and_drops_connection() {
    let (listener, addr) = bind().await;
    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        read_head(&mut stream).await;
        // Never answer; wait for the client to hang up.
        let mut rest = [0u8; 64];
        tokio::time::timeout(TIMEOUT, stream.read(&mut rest)).await
    });

    let limit = Duration::from_millis(200);
    let fetcher = HttpFetcher::new().unwrap();
    let started = std::time::Instant::now();
    let err = fetcher
        .fetch(&url(addr, "/pokemon/1"), limit)
        .await
        .unwrap_err();
    assert_eq!(err, FetchError::Timeout(limit));
    assert!(started.elapsed() < TIMEOUT);

    // The abandoned request closes its connection instead of lingering.
    let read = server.await.unwrap();
    assert!(
        matches!(read, Ok(Ok(0)) | Ok(Err(_))),
        "connection still open: {read:?}"
    );
}

#[tokio::test]
async fn test_refused_connection_is_network_error() {
    let (listener, addr) = bind().await;
    drop(listener);

    let fetcher = HttpFetcher::new().unwrap();
    let err = fetcher
        .fetch(&url(addr, "/pokemon/1"), TIMEOUT)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
}
