//! Parsing of free-form WHOIS responses.
//!
//! WHOIS has no fixed schema. Registries mostly use `Key: Value` lines,
//! but key spellings vary and some (e.g. Nominet) put the value on the
//! following indented line. The parser collects every key/value pair and
//! then picks fields through alias lists.

use crate::report::WhoisInfo;

const REGISTRAR_KEYS: &[&str] = &["registrar", "registrar name", "sponsoring registrar"];

const ORG_KEYS: &[&str] = &[
    "registrant organization",
    "registrant organisation",
    "org",
    "organization",
    "organisation",
    "registrant",
    "owner",
];

const CITY_KEYS: &[&str] = &["registrant city", "city"];

const COUNTRY_KEYS: &[&str] = &["registrant country", "registrant country code", "country"];

const REFERRAL_KEYS: &[&str] = &["registrar whois server", "whois server", "referralserver"];

const IANA_KEYS: &[&str] = &["refer", "whois"];

/// Value fragments that mean "this field is hidden".
const REDACTION_MARKERS: &[&str] = &[
    "redacted",
    "data protected",
    "not disclosed",
    "withheld",
    "gdpr masked",
    "statutory masking",
    "non-public data",
    "please query the rdds",
];

/// Parse `Key: Value` pairs out of a response.
///
/// Keys are lowercased. Comment lines (`%`, `#`, `>>>`) are skipped. A key
/// with an empty value takes the next indented line as its value.
pub fn parse_pairs(text: &str) -> Vec<(String, String)> {
    let lines: Vec<&str> = text.lines().collect();
    let mut pairs = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('%') || line.starts_with('#') || line.starts_with(">>>") {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let key = key.trim().to_lowercase();
        if key.is_empty() || key.len() > 64 {
            continue;
        }

        let mut value = value.trim().to_string();
        if value.is_empty()
            && let Some(next) = lines.get(i + 1)
            && next.starts_with(char::is_whitespace)
            && !is_key_line(next)
        {
            value = next.trim().to_string();
        }
        if !value.is_empty() {
            pairs.push((key, value));
        }
    }

    pairs
}

/// A line that starts a new `Key:` entry rather than continuing a value.
fn is_key_line(line: &str) -> bool {
    let line = line.trim();
    line.ends_with(':') || line.contains(": ")
}

fn is_redacted(value: &str) -> bool {
    let lower = value.to_lowercase();
    REDACTION_MARKERS.iter().any(|m| lower.contains(m))
}

fn first_value(pairs: &[(String, String)], keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| {
        pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v)
            .find(|v| !is_redacted(v))
            .cloned()
    })
}

/// Extract registration facts from a response.
pub fn parse_record(text: &str) -> WhoisInfo {
    let pairs = parse_pairs(text);
    WhoisInfo {
        registrar: first_value(&pairs, REGISTRAR_KEYS),
        org: first_value(&pairs, ORG_KEYS),
        city: first_value(&pairs, CITY_KEYS),
        country: first_value(&pairs, COUNTRY_KEYS),
    }
}

/// Registrar WHOIS server named in a registry response, if any.
pub fn find_referral(text: &str) -> Option<String> {
    let pairs = parse_pairs(text);
    REFERRAL_KEYS
        .iter()
        .find_map(|key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str()))
        .and_then(normalize_server)
}

/// WHOIS server IANA names for a TLD, if any.
pub fn find_iana_referral(text: &str) -> Option<String> {
    let pairs = parse_pairs(text);
    IANA_KEYS
        .iter()
        .find_map(|key| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str()))
        .and_then(normalize_server)
}

/// Reduce `whois://host/` style references to a bare host.
///
/// References to other protocols (e.g. `rwhois://`) are dropped.
fn normalize_server(value: &str) -> Option<String> {
    let value = value.trim();
    let host = match value.split_once("://") {
        Some(("whois", rest)) => rest,
        Some(_) => return None,
        None => value,
    };
    let host = host.trim_end_matches('/').to_lowercase();
    if host.is_empty() || host.contains(char::is_whitespace) || host.contains('/') {
        return None;
    }
    Some(host)
}

/// Overlay `preferred` on top of `fallback`, field by field.
pub fn merge(preferred: WhoisInfo, fallback: WhoisInfo) -> WhoisInfo {
    WhoisInfo {
        registrar: preferred.registrar.or(fallback.registrar),
        org: preferred.org.or(fallback.org),
        city: preferred.city.or(fallback.city),
        country: preferred.country.or(fallback.country),
    }
}
