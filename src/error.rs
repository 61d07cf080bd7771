//! Unified error types for fetching, parsing and configuration.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// StructuralError
// ---------------------------------------------------------------------------

/// The fetched page does not have the layout the section parser expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// A comment section has no `h3 span.text` title node (0-based index).
    MissingSectionTitle { section: usize },
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSectionTitle { section } => {
                write!(f, "comment section #{} has no title", section + 1)
            }
        }
    }
}

impl std::error::Error for StructuralError {}

// ---------------------------------------------------------------------------
// FetchError
// ---------------------------------------------------------------------------

/// Errors from retrieving and parsing a package's comment page.
#[derive(Debug)]
pub enum FetchError {
    /// The package has no page upstream.
    NotFound(String),
    /// Non-2xx status other than 404.
    Status(u16),
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// The configured base URL cannot be turned into a package URL.
    InvalidUrl(String),
    Structure(StructuralError),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound(package) => write!(f, "Package \"{package}\" not found."),
            Self::Status(code) => write!(f, "unexpected status {code}"),
            Self::Http(e) => write!(f, "http: {e}"),
            Self::InvalidUrl(msg) => write!(f, "invalid url: {msg}"),
            Self::Structure(e) => write!(f, "malformed page: {e}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<StructuralError> for FetchError {
    fn from(e: StructuralError) -> Self {
        Self::Structure(e)
    }
}

// ---------------------------------------------------------------------------
// AppError (top-level)
// ---------------------------------------------------------------------------

/// Top-level error type for a single `aur-talk` run.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Fetch(FetchError),
    /// Writing rendered output failed.
    Io(std::io::Error),
}

impl AppError {
    /// True when the run failed because the package does not exist upstream.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Fetch(FetchError::NotFound(_)))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Fetch(FetchError::NotFound(package)) => {
                write!(f, "Package \"{package}\" not found.")
            }
            Self::Fetch(e) => write!(f, "fetch: {e}"),
            Self::Io(e) => write!(f, "output: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        Self::Fetch(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
