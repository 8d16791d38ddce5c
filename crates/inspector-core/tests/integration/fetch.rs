//! HTTP fetcher and fingerprinting against a local server.

use inspector_core::config::HttpConfig;
use inspector_core::fetch::{HttpFetcher, PageFetcher};
use inspector_core::fingerprint::Fingerprinter;

use crate::common::{
    http_response, request_header, request_path, start_http_responder, start_http_server,
};

const BODY: &str = r#"<!doctype html>
<html>
<head>
  <meta name="generator" content="Hugo 0.121.1">
  <link href="https://fonts.googleapis.com/css2?family=Inter" rel="stylesheet">
  <script src="https://cdn.jsdelivr.net/npm/alpinejs@3/dist/cdn.min.js" defer></script>
</head>
<body x-data="{ open: false }">hello</body>
</html>"#;

#[tokio::test]
async fn test_fetch_returns_headers_and_body() {
    let addr = start_http_server(&[("Server", "nginx/1.24.0"), ("X-Powered-By", "Express")], BODY).await;
    let fetcher = HttpFetcher::new(&HttpConfig::default()).unwrap();

    let page = fetcher.fetch(&format!("http://{addr}/")).await.unwrap();

    assert_eq!(page.status, 200);
    assert_eq!(page.final_url, format!("http://{addr}/"));
    assert_eq!(page.header_values("server").collect::<Vec<_>>(), ["nginx/1.24.0"]);
    assert!(page.body.contains("Hugo 0.121.1"));
}

#[tokio::test]
async fn test_fetched_page_fingerprints() {
    let addr = start_http_server(&[("Server", "nginx/1.24.0"), ("X-Powered-By", "Express")], BODY).await;
    let fetcher = HttpFetcher::new(&HttpConfig::default()).unwrap();
    let fingerprinter = Fingerprinter::builtin().unwrap();

    let page = fetcher.fetch(&format!("http://{addr}/")).await.unwrap();
    let stack = fingerprinter.detect(&page);

    assert_eq!(stack["web-servers"], ["Nginx"]);
    assert_eq!(stack["web-frameworks"], ["Express"]);
    assert_eq!(stack["programming-languages"], ["Node.js"]);
    assert_eq!(stack["cms"], ["Hugo"]);
    assert_eq!(stack["font-scripts"], ["Google Font API"]);
    assert_eq!(stack["javascript-frameworks"], ["Alpine.js"]);
    assert_eq!(stack["cdn"], ["jsDelivr"]);
}

#[tokio::test]
async fn test_body_is_truncated() {
    let body = "x".repeat(10_000);
    let addr = start_http_server(&[], &body).await;
    let config = HttpConfig {
        max_body_bytes: 1_000,
        ..Default::default()
    };
    let fetcher = HttpFetcher::new(&config).unwrap();

    let page = fetcher.fetch(&format!("http://{addr}/")).await.unwrap();
    assert_eq!(page.body.len(), 1_000);
}

#[tokio::test]
async fn test_connection_refused_is_fetch_error() {
    // Bind then drop to get a port nobody listens on.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = HttpFetcher::new(&HttpConfig::default()).unwrap();
    let err = fetcher.fetch(&format!("http://{addr}/")).await.unwrap_err();
    assert!(err.is_retryable());
    assert_eq!(err.category(), "fetch");
}

#[tokio::test]
async fn test_error_status_is_still_fingerprinted() {
    let addr = start_http_responder(|_| {
        http_response(
            "404 Not Found",
            &[("Server", "nginx/1.24.0"), ("X-Powered-By", "PHP/8.3.1")],
            "<h1>Not Found</h1>",
        )
    })
    .await;
    let fetcher = HttpFetcher::new(&HttpConfig::default()).unwrap();
    let fingerprinter = Fingerprinter::builtin().unwrap();

    let page = fetcher.fetch(&format!("http://{addr}/missing")).await.unwrap();
    let stack = fingerprinter.detect(&page);

    assert_eq!(page.status, 404);
    assert_eq!(stack["web-servers"], ["Nginx"]);
    assert_eq!(stack["programming-languages"], ["PHP"]);
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let addr = start_http_responder(|head| match request_path(head) {
        "/old" => http_response("301 Moved Permanently", &[("Location", "/new")], ""),
        _ => http_response("200 OK", &[("Server", "Caddy")], "moved here"),
    })
    .await;
    let fetcher = HttpFetcher::new(&HttpConfig::default()).unwrap();

    let page = fetcher.fetch(&format!("http://{addr}/old")).await.unwrap();

    assert_eq!(page.status, 200);
    assert_eq!(page.final_url, format!("http://{addr}/new"));
    assert_eq!(page.header_values("server").collect::<Vec<_>>(), ["Caddy"]);
    assert_eq!(page.body, "moved here");
}

#[tokio::test]
async fn test_redirect_limit_is_enforced() {
    // Every hop redirects to the next one.
    let addr = start_http_responder(|head| {
        let hop: u32 = request_path(head)
            .trim_start_matches("/hop/")
            .parse()
            .unwrap_or(0);
        let next = format!("/hop/{}", hop + 1);
        http_response("302 Found", &[("Location", next.as_str())], "")
    })
    .await;
    let config = HttpConfig {
        max_redirects: 2,
        ..Default::default()
    };
    let fetcher = HttpFetcher::new(&config).unwrap();

    let err = fetcher.fetch(&format!("http://{addr}/hop/0")).await.unwrap_err();
    assert_eq!(err.category(), "fetch");
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let addr = start_http_responder(|head| {
        let agent = request_header(head, "user-agent").unwrap_or("none").to_string();
        http_response("200 OK", &[], &agent)
    })
    .await;
    let config = HttpConfig {
        user_agent: "site-audit/2.1".to_string(),
        ..Default::default()
    };
    let fetcher = HttpFetcher::new(&config).unwrap();

    let page = fetcher.fetch(&format!("http://{addr}/")).await.unwrap();
    assert_eq!(page.body, "site-audit/2.1");
}
