//! WHOIS lookups.
//!
//! - [`WhoisLookup`]: the seam the inspector calls through
//! - [`WhoisClient`]: TCP port 43 client with IANA discovery and referrals
//! - [`parser`]: response parsing shared by both

use async_trait::async_trait;

use crate::Result;
use crate::report::WhoisInfo;

mod client;
pub mod parser;

pub use client::{WHOIS_PORT, WhoisClient};

/// Something that can look up registration data for a domain.
#[async_trait]
pub trait WhoisLookup: Send + Sync {
    /// Look up `domain` (a registrable name such as `example.co.uk`).
    async fn lookup(&self, domain: &str) -> Result<WhoisInfo>;
}
