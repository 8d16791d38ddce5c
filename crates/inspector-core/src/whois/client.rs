//! RFC 3912 WHOIS client over TCP.

use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::RwLock;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use super::parser::{find_iana_referral, find_referral, merge, parse_record};
use super::WhoisLookup;
use crate::config::WhoisConfig;
use crate::report::WhoisInfo;
use crate::{Error, Result};

/// Standard WHOIS port.
pub const WHOIS_PORT: u16 = 43;

/// Upper bound on a single response.
const MAX_RESPONSE_BYTES: u64 = 256 * 1024;

/// WHOIS client with a per-TLD server cache.
///
/// The server for a TLD comes from configuration, then from the cache,
/// then from asking IANA. Answers from IANA are cached for the life of
/// the client.
pub struct WhoisClient {
    config: WhoisConfig,
    port: u16,
    tld_servers: RwLock<HashMap<String, String>>,
}

impl WhoisClient {
    /// Create a client from configuration.
    pub fn new(config: WhoisConfig) -> Self {
        Self {
            config,
            port: WHOIS_PORT,
            tld_servers: RwLock::new(HashMap::new()),
        }
    }

    /// Talk to servers on a non-standard port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Send one query and return the raw response.
    pub async fn query(&self, server: &str, query: &str) -> Result<String> {
        let timeout = self.config.timeout();
        let exchange = async {
            let mut stream = TcpStream::connect((server, self.port)).await?;
            stream.write_all(format!("{query}\r\n").as_bytes()).await?;
            stream.flush().await?;

            let mut buf = Vec::new();
            stream.take(MAX_RESPONSE_BYTES).read_to_end(&mut buf).await?;
            Ok::<_, std::io::Error>(buf)
        };

        let bytes = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| Error::timeout(format!("whois query to {server}"), timeout.as_secs()))??;

        log::debug!("whois {server} '{query}': {} bytes", bytes.len());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// WHOIS server responsible for `tld`.
    pub async fn server_for_tld(&self, tld: &str) -> Result<String> {
        let tld = tld.trim_start_matches('.').to_lowercase();

        if let Some(server) = self.config.servers.get(&tld) {
            return Ok(server.clone());
        }
        if let Some(server) = self.cached_server(&tld) {
            return Ok(server);
        }

        let response = self.query(&self.config.iana_server, &tld).await?;
        let server = find_iana_referral(&response)
            .ok_or_else(|| Error::whois(&tld, "IANA lists no WHOIS server for this TLD"))?;

        if let Ok(mut cache) = self.tld_servers.write() {
            cache.insert(tld, server.clone());
        }
        Ok(server)
    }

    fn cached_server(&self, tld: &str) -> Option<String> {
        self.tld_servers
            .read()
            .ok()
            .and_then(|cache| cache.get(tld).cloned())
    }
}

#[async_trait]
impl WhoisLookup for WhoisClient {
    async fn lookup(&self, domain: &str) -> Result<WhoisInfo> {
        let domain = domain.trim_end_matches('.').to_lowercase();
        if domain.parse::<IpAddr>().is_ok() {
            return Err(Error::whois(domain, "IP addresses have no domain registration"));
        }
        let tld = match domain.rsplit_once('.') {
            Some((_, tld)) if !tld.is_empty() => tld.to_string(),
            _ => return Err(Error::whois(domain.clone(), "no top-level domain")),
        };

        let server = self.server_for_tld(&tld).await?;
        let response = self.query(&server, &domain).await?;
        let mut info = parse_record(&response);

        if self.config.follow_referral
            && let Some(referral) = find_referral(&response)
            && !referral.eq_ignore_ascii_case(&server)
        {
            match self.query(&referral, &domain).await {
                Ok(text) => info = merge(parse_record(&text), info),
                Err(e) => log::warn!("whois referral {referral} for {domain} failed: {e}"),
            }
        }

        if info.is_empty() {
            return Err(Error::whois(domain, "no record found"));
        }
        Ok(info)
    }
}
