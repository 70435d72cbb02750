//! Distance provider error types.

/// Errors from a road-distance provider.
#[derive(Debug, thiserror::Error)]
pub enum DistanceError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status code.
    #[error("provider error {status}: {message}")]
    Api { status: u16, message: String },

    /// Provider response contained no route.
    #[error("provider response contained no route")]
    MissingRoute,

    /// No provider is configured or the provider is switched off.
    #[error("distance provider unavailable")]
    Unavailable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DistanceError::Api {
            status: 503,
            message: "busy".into(),
        };
        assert_eq!(err.to_string(), "provider error 503: busy");

        assert_eq!(
            DistanceError::MissingRoute.to_string(),
            "provider response contained no route"
        );
        assert_eq!(
            DistanceError::Unavailable.to_string(),
            "distance provider unavailable"
        );
    }
}
