//! Common test doubles for inspector-core integration tests.

#![allow(dead_code)]

use std::net::{IpAddr, SocketAddr};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use inspector_core::dns::HostResolver;
use inspector_core::fetch::{Page, PageFetcher};
use inspector_core::whois::WhoisLookup;
use inspector_core::{Error, Result, WhoisInfo};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// Fetcher returning a fixed page, or failing when built with `failing()`.
pub struct StaticFetcher {
    page: Option<Page>,
    pub requested: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new(page: Page) -> Arc<Self> {
        Arc::new(Self {
            page: Some(page),
            requested: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            page: None,
            requested: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Result<Page> {
        self.requested.lock().unwrap().push(url.to_string());
        self.page
            .clone()
            .ok_or_else(|| Error::fetch(format!("connection refused: {url}")))
    }
}

/// Resolver returning a fixed address, or failing.
pub struct StaticResolver(pub Option<IpAddr>);

#[async_trait]
impl HostResolver for StaticResolver {
    async fn resolve(&self, host: &str) -> Result<IpAddr> {
        self.0.ok_or_else(|| Error::dns(host, "NXDOMAIN"))
    }
}

/// WHOIS lookup returning a fixed record and remembering what was asked.
pub struct StaticWhois {
    info: Option<WhoisInfo>,
    pub queried: Mutex<Vec<String>>,
}

impl StaticWhois {
    pub fn new(info: WhoisInfo) -> Arc<Self> {
        Arc::new(Self {
            info: Some(info),
            queried: Mutex::new(Vec::new()),
        })
    }

    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            info: None,
            queried: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl WhoisLookup for StaticWhois {
    async fn lookup(&self, domain: &str) -> Result<WhoisInfo> {
        self.queried.lock().unwrap().push(domain.to_string());
        self.info
            .clone()
            .ok_or_else(|| Error::whois(domain, "no record found"))
    }
}

/// A local WHOIS server answering from a scripted `(query, response)` list.
///
/// Each entry answers the first matching query and is then used up, so
/// the same query can get different answers in sequence. Unmatched
/// queries get an empty response. Every received query is recorded.
pub struct MockWhoisServer {
    pub addr: SocketAddr,
    pub queries: Arc<Mutex<Vec<String>>>,
}

impl MockWhoisServer {
    pub async fn start(script: &[(&str, &str)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let queries = Arc::new(Mutex::new(Vec::new()));
        let script: Arc<Mutex<Vec<(String, String)>>> = Arc::new(Mutex::new(
            script
                .iter()
                .map(|(q, r)| (q.to_string(), r.to_string()))
                .collect(),
        ));

        let recorded = queries.clone();
        tokio::spawn(async move {
            loop {
                let Ok((stream, _)) = listener.accept().await else {
                    break;
                };
                let recorded = recorded.clone();
                let script = script.clone();
                tokio::spawn(async move {
                    let mut reader = BufReader::new(stream);
                    let mut line = String::new();
                    if reader.read_line(&mut line).await.is_err() {
                        return;
                    }
                    let query = line.trim_end().to_string();
                    recorded.lock().unwrap().push(query.clone());

                    let answer = {
                        let mut script = script.lock().unwrap();
                        match script.iter().position(|(q, _)| *q == query) {
                            Some(i) => script.remove(i).1,
                            None => String::new(),
                        }
                    };
                    let mut stream = reader.into_inner();
                    let _ = stream.write_all(answer.as_bytes()).await;
                    let _ = stream.shutdown().await;
                });
            }
        });

        Self { addr, queries }
    }

    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

/// A server that accepts connections and never answers.
pub async fn start_silent_server() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    addr
}

/// Render an HTTP/1.1 response that closes the connection.
pub fn http_response(status: &str, headers: &[(&str, &str)], body: &str) -> String {
    let mut response = format!(
        "HTTP/1.1 {status}\r\ncontent-length: {}\r\nconnection: close\r\n",
        body.len()
    );
    for (name, value) in headers {
        response.push_str(&format!("{name}: {value}\r\n"));
    }
    response.push_str("\r\n");
    response.push_str(body);
    response
}

/// Path from the request line of a raw request head.
pub fn request_path(head: &str) -> &str {
    head.split_whitespace().nth(1).unwrap_or("/")
}

/// Value of a request header, by case-insensitive name.
pub fn request_header<'a>(head: &'a str, name: &str) -> Option<&'a str> {
    head.lines().skip(1).find_map(|line| {
        let (key, value) = line.split_once(':')?;
        key.trim().eq_ignore_ascii_case(name).then(|| value.trim())
    })
}

/// An HTTP/1.1 server that builds each response from the raw request head.
pub async fn start_http_responder<F>(respond: F) -> SocketAddr
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let respond = Arc::new(respond);

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let respond = respond.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 4096];
                let mut seen = Vec::new();
                while let Ok(n) = stream.read(&mut buf).await {
                    if n == 0 {
                        break;
                    }
                    seen.extend_from_slice(&buf[..n]);
                    if seen.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                let head = String::from_utf8_lossy(&seen).into_owned();
                let response = respond(&head);
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });

    addr
}

/// A server returning the same `200 OK` response to every request.
pub async fn start_http_server(headers: &[(&str, &str)], body: &str) -> SocketAddr {
    let response = http_response("200 OK", headers, body);
    start_http_responder(move |_| response.clone()).await
}
