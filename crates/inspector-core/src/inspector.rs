//! The inspection engine.
//!
//! [`Inspector::inspect`] runs the three probes (page fetch and
//! fingerprinting, DNS, WHOIS) concurrently and folds their outcomes into
//! a [`Report`]. A failing probe never fails the report; it degrades to
//! that probe's fallback value.

use std::sync::Arc;
use std::time::Instant;

use crate::config::InspectorConfig;
use crate::dns::{HostResolver, SystemResolver};
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::fingerprint::Fingerprinter;
use crate::report::{HIDDEN_IP, Report, TechStack, WhoisOutcome};
use crate::target::Target;
use crate::whois::{WhoisClient, WhoisLookup};
use crate::Result;

/// Site inspector. Cheap to clone; all probes are shared.
#[derive(Clone)]
pub struct Inspector {
    fetcher: Arc<dyn PageFetcher>,
    resolver: Arc<dyn HostResolver>,
    whois: Arc<dyn WhoisLookup>,
    fingerprinter: Arc<Fingerprinter>,
}

impl Inspector {
    /// Assemble an inspector from explicit probes.
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        resolver: Arc<dyn HostResolver>,
        whois: Arc<dyn WhoisLookup>,
        fingerprinter: Arc<Fingerprinter>,
    ) -> Self {
        Self {
            fetcher,
            resolver,
            whois,
            fingerprinter,
        }
    }

    /// Build an inspector with the network-backed probes.
    pub fn from_config(config: &InspectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(
            Arc::new(HttpFetcher::new(&config.http)?),
            Arc::new(SystemResolver::new(&config.dns)),
            Arc::new(WhoisClient::new(config.whois.clone())),
            Arc::new(Fingerprinter::builtin()?),
        ))
    }

    /// Inspect a site.
    ///
    /// Only an unusable target is an error.
    pub async fn inspect(&self, input: &str) -> Result<Report> {
        let target = Target::parse(input)?;
        let started = Instant::now();
        log::info!("Inspecting {} ({})", target.url, target.domain);

        let (tech, ip, whois) = tokio::join!(
            self.detect_tech(&target),
            self.resolve_ip(&target),
            self.lookup_whois(&target),
        );

        log::info!(
            "Inspected {} in {:?}: {} technologies, ip {}",
            target.domain,
            started.elapsed(),
            tech.values().map(Vec::len).sum::<usize>(),
            ip
        );

        Ok(Report {
            url: target.url,
            domain: target.domain,
            ip,
            tech,
            whois,
        })
    }

    async fn detect_tech(&self, target: &Target) -> TechStack {
        match self.fetcher.fetch(&target.url).await {
            Ok(page) => self.fingerprinter.detect(&page),
            Err(e) => {
                log::warn!("Tech detection for {} failed: {e}", target.url);
                TechStack::new()
            }
        }
    }

    async fn resolve_ip(&self, target: &Target) -> String {
        match self.resolver.resolve(&target.domain).await {
            Ok(ip) => ip.to_string(),
            Err(e) => {
                log::warn!("Resolving {} failed: {e}", target.domain);
                HIDDEN_IP.to_string()
            }
        }
    }

    async fn lookup_whois(&self, target: &Target) -> WhoisOutcome {
        if target.is_ip_literal() {
            return WhoisOutcome::unavailable();
        }
        let domain = target.registrable_domain();
        match self.whois.lookup(&domain).await {
            Ok(info) if !info.is_empty() => WhoisOutcome::Found(info),
            Ok(_) => WhoisOutcome::unavailable(),
            Err(e) => {
                log::warn!("WHOIS for {domain} failed: {e}");
                WhoisOutcome::unavailable()
            }
        }
    }
}

impl std::fmt::Debug for Inspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inspector")
            .field("signatures", &self.fingerprinter.len())
            .finish_non_exhaustive()
    }
}
