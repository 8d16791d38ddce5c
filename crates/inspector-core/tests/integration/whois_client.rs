//! WHOIS client against a local mock server.

use std::collections::HashMap;

use inspector_core::Error;
use inspector_core::config::WhoisConfig;
use inspector_core::whois::{WhoisClient, WhoisLookup};

use crate::common::{MockWhoisServer, start_silent_server};

const REGISTRY_RESPONSE: &str = "   Domain Name: EXAMPLE.COM
   Registrar WHOIS Server: 127.0.0.1
   Registrar: Example Registrar, Inc.
   Registrant Organization: REDACTED FOR PRIVACY
";

const REGISTRAR_RESPONSE: &str = "Domain Name: example.com
Registrar: Example Registrar, Inc.
Registrant Organization: Example Holdings LLC
Registrant City: REDACTED FOR PRIVACY
Registrant Country: US
";

fn config_with_iana(iana: &str) -> WhoisConfig {
    WhoisConfig {
        timeout_secs: 5,
        iana_server: iana.to_string(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_iana_discovery_and_registrar_referral() {
    let server = MockWhoisServer::start(&[
        ("com", "refer:        localhost\n"),
        ("example.com", REGISTRY_RESPONSE),
        ("example.com", REGISTRAR_RESPONSE),
    ])
    .await;
    let client = WhoisClient::new(config_with_iana("127.0.0.1")).with_port(server.port());

    let info = client.lookup("example.com").await.unwrap();

    assert_eq!(server.queries(), ["com", "example.com", "example.com"]);
    assert_eq!(info.registrar.as_deref(), Some("Example Registrar, Inc."));
    assert_eq!(info.org.as_deref(), Some("Example Holdings LLC"));
    assert_eq!(info.city, None);
    assert_eq!(info.country.as_deref(), Some("US"));
}

#[tokio::test]
async fn test_referral_disabled_uses_registry_only() {
    let server = MockWhoisServer::start(&[("example.com", REGISTRY_RESPONSE)]).await;
    let config = WhoisConfig {
        follow_referral: false,
        servers: HashMap::from([("com".to_string(), "localhost".to_string())]),
        ..config_with_iana("127.0.0.1")
    };
    let client = WhoisClient::new(config).with_port(server.port());

    let info = client.lookup("example.com").await.unwrap();

    assert_eq!(server.queries(), ["example.com"]);
    assert_eq!(info.registrar.as_deref(), Some("Example Registrar, Inc."));
    assert_eq!(info.org, None);
}

#[tokio::test]
async fn test_configured_server_skips_iana() {
    let server = MockWhoisServer::start(&[("example.test", "registrar: Test Registrar\n")]).await;
    let config = WhoisConfig {
        servers: HashMap::from([("test".to_string(), "127.0.0.1".to_string())]),
        ..config_with_iana("iana.invalid")
    };
    let client = WhoisClient::new(config).with_port(server.port());

    let info = client.lookup("Example.TEST.").await.unwrap();

    assert_eq!(server.queries(), ["example.test"]);
    assert_eq!(info.registrar.as_deref(), Some("Test Registrar"));
}

#[tokio::test]
async fn test_tld_server_is_cached() {
    let server = MockWhoisServer::start(&[
        ("org", "refer: 127.0.0.1\n"),
        ("a.org", "Registrar: Registrar A\n"),
        ("b.org", "Registrar: Registrar B\n"),
    ])
    .await;
    let client = WhoisClient::new(config_with_iana("127.0.0.1")).with_port(server.port());

    let a = client.lookup("a.org").await.unwrap();
    let b = client.lookup("b.org").await.unwrap();

    assert_eq!(a.registrar.as_deref(), Some("Registrar A"));
    assert_eq!(b.registrar.as_deref(), Some("Registrar B"));
    assert_eq!(server.queries(), ["org", "a.org", "b.org"]);
}

#[tokio::test]
async fn test_no_record_is_error() {
    let server = MockWhoisServer::start(&[
        ("net", "refer: 127.0.0.1\n"),
        ("missing.net", "No match for \"MISSING.NET\".\n"),
    ])
    .await;
    let client = WhoisClient::new(config_with_iana("127.0.0.1")).with_port(server.port());

    let err = client.lookup("missing.net").await.unwrap_err();
    assert!(matches!(err, Error::Whois { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_unknown_tld_is_error() {
    let server = MockWhoisServer::start(&[("zz", "domain: ZZ\nstatus: not assigned\n")]).await;
    let client = WhoisClient::new(config_with_iana("127.0.0.1")).with_port(server.port());

    let err = client.lookup("example.zz").await.unwrap_err();
    assert!(matches!(err, Error::Whois { .. }), "got {err:?}");
}

#[tokio::test]
async fn test_ip_literal_rejected_without_network() {
    let client = WhoisClient::new(config_with_iana("iana.invalid"));
    let err = client.lookup("192.0.2.1").await.unwrap_err();
    assert!(matches!(err, Error::Whois { .. }));
}

#[tokio::test]
async fn test_silent_server_times_out() {
    let addr = start_silent_server().await;
    let config = WhoisConfig {
        timeout_secs: 1,
        servers: HashMap::from([("slow".to_string(), "127.0.0.1".to_string())]),
        ..config_with_iana("iana.invalid")
    };
    let client = WhoisClient::new(config).with_port(addr.port());

    let err = client.lookup("example.slow").await.unwrap_err();
    assert!(matches!(err, Error::Timeout { seconds: 1, .. }), "got {err:?}");
    assert!(err.is_retryable());
}
