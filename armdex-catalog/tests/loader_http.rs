//! Loader tests against a throwaway local HTTP server.

use std::time::Duration;

use armdex_catalog::{CatalogClient, CatalogSource, LoadError, LoadErrorKind};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serve exactly one request with a canned status line and body, returning
/// the URL to hit.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = vec![0u8; 4096];
        let mut request = Vec::new();
        loop {
            let n = socket.read(&mut buf).await.unwrap();
            request.extend_from_slice(&buf[..n]);
            if n == 0 || request.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
    });
    format!("http://{addr}/data/apps.json")
}

fn client(url: String) -> CatalogClient {
    CatalogClient::new(CatalogSource::Remote(url), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn loads_catalog_over_http() {
    let url = serve_once(
        "200 OK",
        r#"{"apps":[{"id":"1","slug":"zoom","name":"Zoom","status":"Available via Emulation"}]}"#,
    )
    .await;
    let catalog = client(url).load().await.unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.items()[0].name, "Zoom");
}

#[tokio::test]
async fn non_success_status_is_network_error() {
    let url = serve_once("404 Not Found", "{}").await;
    let err = client(url).load().await.unwrap_err();
    assert!(matches!(err, LoadError::HttpStatus { status: 404, .. }));
    assert_eq!(err.kind(), LoadErrorKind::Network);
}

#[tokio::test]
async fn wrong_shape_is_schema_error() {
    let url = serve_once("200 OK", r#"{"data":[]}"#).await;
    let err = client(url).load().await.unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Schema);
}

#[tokio::test]
async fn failure_degrades_to_empty() {
    let url = serve_once("500 Internal Server Error", "oops").await;
    let catalog = client(url).load_or_empty().await;
    assert!(catalog.is_empty());
}

#[tokio::test]
async fn connection_refused_is_network_error() {
    // Bind then drop to get a port nothing listens on.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(format!("http://{addr}/apps.json"))
        .load()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), LoadErrorKind::Network);
}
