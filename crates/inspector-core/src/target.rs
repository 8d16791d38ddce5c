//! Parsing user input into an inspection target.
//!
//! Users type anything from `example.com` to a full URL with port, path
//! and query. [`Target::parse`] normalises that into the URL that will be
//! fetched and the bare host that DNS and WHOIS operate on.

use std::net::IpAddr;

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Public suffixes with two labels, where the registrable name keeps three.
const SECOND_LEVEL_SUFFIXES: &[&str] = &[
    "co.uk", "org.uk", "ac.uk", "gov.uk", "me.uk", "ltd.uk", "plc.uk", "net.uk", "com.au",
    "net.au", "org.au", "edu.au", "gov.au", "co.nz", "org.nz", "net.nz", "co.jp", "ne.jp",
    "or.jp", "ac.jp", "com.br", "net.br", "org.br", "com.cn", "net.cn", "org.cn", "com.mx",
    "com.ar", "com.tr", "com.tw", "com.hk", "com.sg", "com.my", "co.in", "net.in", "org.in",
    "co.za", "co.kr", "or.kr", "co.il", "com.pl", "com.ua", "co.id", "com.vn", "com.ph",
    "com.pk", "com.ng", "com.eg", "com.sa",
];

/// A normalised inspection target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Scheme-qualified URL as it will be fetched.
    pub url: String,
    /// Lowercased host, without port or credentials.
    pub domain: String,
}

impl Target {
    /// Parse user input into a target.
    ///
    /// Input without an `http://` or `https://` scheme gets `http://`
    /// prepended. The URL string is otherwise kept as typed.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::invalid_target(input, "empty input"));
        }

        let url = if has_http_scheme(trimmed) {
            trimmed.to_string()
        } else {
            format!("http://{trimmed}")
        };

        let parsed =
            Url::parse(&url).map_err(|e| Error::invalid_target(input, e.to_string()))?;
        let domain = parsed
            .host_str()
            .map(|h| h.trim_start_matches('[').trim_end_matches(']').to_lowercase())
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::invalid_target(input, "no host in URL"))?;

        Ok(Self { url, domain })
    }

    /// Whether the host is an IP literal rather than a name.
    pub fn is_ip_literal(&self) -> bool {
        self.domain.parse::<IpAddr>().is_ok()
    }

    /// The name a registrar would hold a record for.
    pub fn registrable_domain(&self) -> String {
        registrable_domain(&self.domain)
    }
}

fn has_http_scheme(s: &str) -> bool {
    let lower = s.get(..8).unwrap_or(s).to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Reduce a host name to its registrable domain.
///
/// `www.example.com` becomes `example.com`, `shop.example.co.uk` becomes
/// `example.co.uk`. A name that is already registrable, such as `www.com`,
/// is kept whole. IP literals are returned unchanged.
pub fn registrable_domain(host: &str) -> String {
    let host = host.trim_end_matches('.').to_lowercase();
    if host.parse::<IpAddr>().is_ok() {
        return host;
    }

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    if labels.len() <= 2 {
        return labels.join(".");
    }

    let last_two = labels[labels.len() - 2..].join(".");
    let keep = if SECOND_LEVEL_SUFFIXES.contains(&last_two.as_str()) {
        3
    } else {
        2
    };
    labels[labels.len() - keep..].join(".")
}
