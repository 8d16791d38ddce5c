//! Inspection report types.
//!
//! The serialized form is the JSON contract the web front end reads, so
//! field names and fallback values here are part of the public API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// IP placeholder used when the host cannot be resolved.
pub const HIDDEN_IP: &str = "Hidden";

/// WHOIS placeholder used when no registration data is available.
pub const WHOIS_UNAVAILABLE: &str = "Hidden or Redacted";

/// Detected technologies, keyed by category (e.g. `"web-servers"`).
pub type TechStack = BTreeMap<String, Vec<String>>;

/// Registration facts pulled from a WHOIS record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhoisInfo {
    /// Sponsoring registrar.
    pub registrar: Option<String>,
    /// Registrant organisation.
    pub org: Option<String>,
    /// Registrant city.
    pub city: Option<String>,
    /// Registrant country (name or ISO code, as the registry reports it).
    pub country: Option<String>,
}

impl WhoisInfo {
    /// True when no field was found.
    pub fn is_empty(&self) -> bool {
        self.registrar.is_none() && self.org.is_none() && self.city.is_none() && self.country.is_none()
    }

    /// Number of populated fields.
    pub fn field_count(&self) -> usize {
        [&self.registrar, &self.org, &self.city, &self.country]
            .iter()
            .filter(|f| f.is_some())
            .count()
    }
}

/// Outcome of the WHOIS probe.
///
/// `Unavailable` is listed first so untagged deserialization does not
/// mistake `{"error": ...}` for an all-null [`WhoisInfo`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WhoisOutcome {
    /// Lookup failed, was refused, or every field was redacted.
    Unavailable {
        /// Always [`WHOIS_UNAVAILABLE`] when produced by the inspector.
        error: String,
    },
    /// Lookup succeeded.
    Found(WhoisInfo),
}

impl WhoisOutcome {
    /// The standard "nothing to show" outcome.
    pub fn unavailable() -> Self {
        WhoisOutcome::Unavailable {
            error: WHOIS_UNAVAILABLE.to_string(),
        }
    }

    /// The record, if one was found.
    pub fn info(&self) -> Option<&WhoisInfo> {
        match self {
            WhoisOutcome::Found(info) => Some(info),
            WhoisOutcome::Unavailable { .. } => None,
        }
    }
}

/// Everything the inspector learned about one target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// URL that was fetched.
    pub url: String,
    /// Host name of the target.
    pub domain: String,
    /// Resolved address, or [`HIDDEN_IP`].
    pub ip: String,
    /// Detected technologies; empty when detection failed.
    pub tech: TechStack,
    /// WHOIS registration facts.
    pub whois: WhoisOutcome,
}

impl Report {
    /// Total number of detected technologies across all categories.
    pub fn tech_count(&self) -> usize {
        self.tech.values().map(Vec::len).sum()
    }
}
