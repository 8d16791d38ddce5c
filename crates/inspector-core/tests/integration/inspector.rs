//! Inspector orchestration with test doubles.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use inspector_core::fetch::Page;
use inspector_core::fingerprint::Fingerprinter;
use inspector_core::{Error, Inspector, InspectorConfig, WhoisInfo, WhoisOutcome};
use serde_json::json;

use crate::common::{StaticFetcher, StaticResolver, StaticWhois};

fn nginx_page() -> Page {
    Page::new("http://www.example.com/", 200, [("server", "nginx")], "<html></html>")
}

fn example_whois() -> WhoisInfo {
    WhoisInfo {
        registrar: Some("Example Registrar, Inc.".to_string()),
        org: Some("Example Holdings LLC".to_string()),
        city: None,
        country: Some("US".to_string()),
    }
}

fn inspector(fetcher: Arc<StaticFetcher>, ip: Option<IpAddr>, whois: Arc<StaticWhois>) -> Inspector {
    Inspector::new(
        fetcher,
        Arc::new(StaticResolver(ip)),
        whois,
        Arc::new(Fingerprinter::builtin().unwrap()),
    )
}

const EXAMPLE_IP: IpAddr = IpAddr::V4(Ipv4Addr::new(93, 184, 216, 34));

#[tokio::test]
async fn test_full_report() {
    let fetcher = StaticFetcher::new(nginx_page());
    let whois = StaticWhois::new(example_whois());
    let inspector = inspector(fetcher.clone(), Some(EXAMPLE_IP), whois.clone());

    let report = inspector.inspect("www.example.com").await.unwrap();

    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({
            "url": "http://www.example.com",
            "domain": "www.example.com",
            "ip": "93.184.216.34",
            "tech": {
                "reverse-proxies": ["Nginx"],
                "web-servers": ["Nginx"]
            },
            "whois": {
                "registrar": "Example Registrar, Inc.",
                "org": "Example Holdings LLC",
                "city": null,
                "country": "US"
            }
        })
    );
    assert_eq!(*fetcher.requested.lock().unwrap(), ["http://www.example.com"]);
    assert_eq!(*whois.queried.lock().unwrap(), ["example.com"]);
}

#[tokio::test]
async fn test_failed_fetch_gives_empty_tech() {
    let inspector = inspector(
        StaticFetcher::failing(),
        Some(EXAMPLE_IP),
        StaticWhois::new(example_whois()),
    );

    let report = inspector.inspect("example.com").await.unwrap();

    assert!(report.tech.is_empty());
    assert_eq!(report.ip, "93.184.216.34");
    assert!(report.whois.info().is_some());
}

#[tokio::test]
async fn test_failed_resolution_gives_hidden_ip() {
    let inspector = inspector(
        StaticFetcher::new(nginx_page()),
        None,
        StaticWhois::new(example_whois()),
    );

    let report = inspector.inspect("example.com").await.unwrap();

    assert_eq!(report.ip, "Hidden");
    assert_eq!(report.tech_count(), 2);
}

#[tokio::test]
async fn test_failed_whois_gives_placeholder() {
    let inspector = inspector(
        StaticFetcher::new(nginx_page()),
        Some(EXAMPLE_IP),
        StaticWhois::failing(),
    );

    let report = inspector.inspect("example.com").await.unwrap();

    assert_eq!(report.whois, WhoisOutcome::unavailable());
    assert_eq!(
        serde_json::to_value(&report.whois).unwrap(),
        json!({"error": "Hidden or Redacted"})
    );
}

#[tokio::test]
async fn test_everything_failing_still_reports() {
    let inspector = inspector(StaticFetcher::failing(), None, StaticWhois::failing());

    let report = inspector.inspect("https://unreachable.example/").await.unwrap();

    assert_eq!(report.url, "https://unreachable.example/");
    assert_eq!(report.domain, "unreachable.example");
    assert_eq!(report.ip, "Hidden");
    assert!(report.tech.is_empty());
    assert_eq!(report.whois, WhoisOutcome::unavailable());
}

#[tokio::test]
async fn test_ip_target_skips_whois() {
    let whois = StaticWhois::new(example_whois());
    let inspector = inspector(StaticFetcher::failing(), None, whois.clone());

    let report = inspector.inspect("203.0.113.7").await.unwrap();

    assert_eq!(report.whois, WhoisOutcome::unavailable());
    assert!(whois.queried.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_target_is_the_only_error() {
    let inspector = inspector(StaticFetcher::failing(), None, StaticWhois::failing());

    let err = inspector.inspect("  ").await.unwrap_err();
    assert!(matches!(err, Error::InvalidTarget { .. }));
}

#[tokio::test]
async fn test_from_default_config() {
    let inspector = Inspector::from_config(&InspectorConfig::default()).unwrap();
    assert!(format!("{inspector:?}").contains("Inspector"));
}
