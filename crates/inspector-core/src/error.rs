//! Error types for the inspection engine.

/// Errors that can occur while inspecting a site.
///
/// Marked `#[non_exhaustive]` so new probe kinds can add variants
/// without breaking downstream matches.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The user-supplied target could not be turned into a URL and host.
    #[error("Invalid target '{input}': {reason}")]
    InvalidTarget {
        /// Raw input as received
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// Fetching the target page failed.
    #[error("Fetch error: {message}")]
    Fetch {
        /// Human-readable error message
        message: String,
        /// Source error if available
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Host name resolution failed.
    #[error("DNS error for {host}: {message}")]
    Dns {
        /// Host that could not be resolved
        host: String,
        /// What went wrong
        message: String,
    },

    /// WHOIS lookup failed or returned nothing usable.
    #[error("WHOIS error for {domain}: {message}")]
    Whois {
        /// Domain that was queried
        domain: String,
        /// What went wrong
        message: String,
    },

    /// A network operation exceeded its time budget.
    #[error("{operation} timed out after {seconds}s")]
    Timeout {
        /// Operation that timed out (e.g. "whois query")
        operation: String,
        /// Timeout duration in seconds
        seconds: u64,
    },

    /// I/O error (sockets, config files)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

/// Convenience `Result` type alias for inspector operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns whether retrying the same operation could succeed.
    ///
    /// Network-level failures are transient; malformed input and
    /// configuration problems are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Fetch { .. } => true,
            Error::Dns { .. } => true,
            Error::Timeout { .. } => true,
            Error::Io(_) => true,
            Error::Whois { .. } => false,
            Error::InvalidTarget { .. } => false,
            Error::Serialization(_) => false,
            Error::Config { .. } => false,
        }
    }

    /// Creates a new invalid-target error.
    pub fn invalid_target<I, R>(input: I, reason: R) -> Self
    where
        I: Into<String>,
        R: Into<String>,
    {
        Error::InvalidTarget {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new fetch error with a message.
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Error::Fetch {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a new fetch error with a message and source error.
    pub fn fetch_with_source<S, E>(message: S, source: E) -> Self
    where
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Fetch {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Creates a new DNS error.
    pub fn dns<H: Into<String>, M: Into<String>>(host: H, message: M) -> Self {
        Error::Dns {
            host: host.into(),
            message: message.into(),
        }
    }

    /// Creates a new WHOIS error.
    pub fn whois<D: Into<String>, M: Into<String>>(domain: D, message: M) -> Self {
        Error::Whois {
            domain: domain.into(),
            message: message.into(),
        }
    }

    /// Creates a new timeout error.
    pub fn timeout<S: Into<String>>(operation: S, seconds: u64) -> Self {
        Error::Timeout {
            operation: operation.into(),
            seconds,
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Short machine-readable category, used in API error bodies.
    pub fn category(&self) -> &'static str {
        match self {
            Error::InvalidTarget { .. } => "invalid_target",
            Error::Fetch { .. } => "fetch",
            Error::Dns { .. } => "dns",
            Error::Whois { .. } => "whois",
            Error::Timeout { .. } => "timeout",
            Error::Io(_) => "io",
            Error::Serialization(_) => "serialization",
            Error::Config { .. } => "config",
        }
    }
}
