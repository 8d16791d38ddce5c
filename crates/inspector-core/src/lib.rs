//! # inspector-core
//!
//! Inspection engine for Deep Inspector.
//!
//! Given a URL (or a bare host name) the [`Inspector`] reports:
//! - the normalised URL and host
//! - the host's IP address
//! - the technology stack, grouped by category
//! - WHOIS registration facts (registrar, organisation, city, country)
//!
//! # Modules
//!
//! - [`target`]: input normalisation
//! - [`fetch`], [`dns`], [`whois`]: network probes, each behind a trait
//! - [`fingerprint`]: signature-based technology detection
//! - [`inspector`]: concurrent orchestration of the probes
//! - [`report`]: the JSON report types
//! - [`config`]: TOML configuration
//! - [`error`]: error types and `Result` alias

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod config;
pub mod dns;
pub mod error;
pub mod fetch;
pub mod fingerprint;
pub mod inspector;
pub mod report;
pub mod target;
pub mod whois;

pub use config::InspectorConfig;
pub use error::{Error, Result};
pub use inspector::Inspector;
pub use report::{Report, TechStack, WhoisInfo, WhoisOutcome};
pub use target::Target;
