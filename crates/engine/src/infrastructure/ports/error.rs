//! Error types for port operations.

use pokedex_domain::DomainError;

/// PokeAPI fetch failures with the endpoint they happened on.
///
/// A 404 is not an error: ports report it as `Ok(None)`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// PokeAPI answered with a non-2xx, non-404 status.
    #[error("PokeAPI request to {endpoint} failed with status {status}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// The request never produced a response (DNS, TLS, timeout, reset...).
    #[error("Failed to fetch data from PokeAPI ({endpoint}): {message}")]
    Transport { endpoint: String, message: String },

    /// A 2xx response whose body was not JSON.
    #[error("PokeAPI returned an unreadable body for {endpoint}: {message}")]
    InvalidBody { endpoint: String, message: String },

    /// The configured base URL cannot be combined with the endpoint.
    #[error("Invalid PokeAPI URL for {endpoint}: {message}")]
    InvalidUrl { endpoint: String, message: String },
}

impl FetchError {
    pub fn status(endpoint: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            endpoint: endpoint.into(),
            status,
            body: body.into(),
        }
    }

    pub fn transport(endpoint: impl Into<String>, message: impl ToString) -> Self {
        Self::Transport {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    pub fn invalid_body(endpoint: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidBody {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    pub fn invalid_url(endpoint: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidUrl {
            endpoint: endpoint.into(),
            message: message.to_string(),
        }
    }

    /// The endpoint path the failure happened on, e.g. `/pokemon/25`.
    pub fn endpoint(&self) -> &str {
        match self {
            Self::Status { endpoint, .. }
            | Self::Transport { endpoint, .. }
            | Self::InvalidBody { endpoint, .. }
            | Self::InvalidUrl { endpoint, .. } => endpoint,
        }
    }

    /// Whether a retry could plausibly succeed.
    ///
    /// Transport faults, 5xx and 429 are transient; other statuses, bad
    /// bodies and bad URLs will fail the same way again.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport { .. } => true,
            Self::Status { status, .. } => *status >= 500 || *status == 429,
            Self::InvalidBody { .. } | Self::InvalidUrl { .. } => false,
        }
    }
}

/// Failures turning a raw PokeAPI record into a `Pokemon`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MappingError {
    #[error("API response missing required field: {0}")]
    MissingField(&'static str),

    #[error("API response has an invalid shape: {0}")]
    InvalidPayload(String),

    /// A value object rejected the data (bad id, name or stat).
    #[error(transparent)]
    Validation(#[from] DomainError),
}

impl MappingError {
    pub fn invalid_payload(message: impl ToString) -> Self {
        Self::InvalidPayload(message.to_string())
    }
}

/// Why a single Pokemon could not be loaded.
///
/// Repositories record these instead of returning them, see `SkippedPokemon`.
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadError {
    #[error("Pokemon not found")]
    NotFound,

    #[error("missing name")]
    MissingName,

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transient_classification() {
        assert!(FetchError::transport("/pokemon/1", "connection reset").is_transient());
        assert!(FetchError::status("/pokemon/1", 503, "").is_transient());
        assert!(FetchError::status("/pokemon/1", 429, "").is_transient());
        assert!(!FetchError::status("/pokemon/1", 400, "").is_transient());
        assert!(!FetchError::invalid_body("/pokemon/1", "eof").is_transient());
        assert!(!FetchError::invalid_url("/pokemon/1", "cannot be a base").is_transient());
    }

    #[test]
    fn fetch_error_carries_endpoint() {
        let err = FetchError::status("/pokemon/25", 500, "boom");
        assert_eq!(err.endpoint(), "/pokemon/25");
        assert_eq!(
            err.to_string(),
            "PokeAPI request to /pokemon/25 failed with status 500"
        );
    }

    #[test]
    fn mapping_error_names_missing_field() {
        let err = MappingError::MissingField("stats");
        assert_eq!(err.to_string(), "API response missing required field: stats");
    }

    #[test]
    fn domain_errors_convert_into_mapping_errors() {
        let err: MappingError =
            DomainError::validation("HP must be between 0 and 255, got 300").into();
        assert!(matches!(err, MappingError::Validation(_)));
        assert_eq!(
            err.to_string(),
            "Validation failed: HP must be between 0 and 255, got 300"
        );
    }

    #[test]
    fn load_error_is_transparent_over_causes() {
        let err: LoadError = FetchError::transport("/pokemon/ditto", "timed out").into();
        assert_eq!(
            err.to_string(),
            "Failed to fetch data from PokeAPI (/pokemon/ditto): timed out"
        );
    }
}
