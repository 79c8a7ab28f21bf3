use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Why a property view could not be assembled from live data.
///
/// Every variant collapses to the same fallback view; the distinction only
/// reaches the logs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("network failure: {0}")]
    NetworkFailure(String),

    #[error("non-success status {status} from {url}")]
    NonSuccessStatus { status: u16, url: String },

    #[error("no property identifier supplied")]
    MissingIdentifier,
}

/// Watchlist controller errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WatchlistError {
    #[error("a watchlist update is already in flight")]
    Busy,

    #[error("no property identifier supplied")]
    MissingIdentifier,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Watchlist(#[from] WatchlistError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid input: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        // dialoguer::Error wraps an IO error
        Error::Io(std::io::Error::other(err.to_string()))
    }
}

impl Error {
    /// Classify this error within the load-failure taxonomy.
    #[must_use]
    pub fn as_load_error(&self) -> LoadError {
        match self {
            Self::Status { status, url } => LoadError::NonSuccessStatus {
                status: *status,
                url: url.clone(),
            },
            Self::Http(err) => match err.status() {
                Some(status) => LoadError::NonSuccessStatus {
                    status: status.as_u16(),
                    url: err.url().map(ToString::to_string).unwrap_or_default(),
                },
                None => LoadError::NetworkFailure(err.to_string()),
            },
            other => LoadError::NetworkFailure(other.to_string()),
        }
    }
}
