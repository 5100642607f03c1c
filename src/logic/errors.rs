use anyhow::Error;

use crate::api::MissingToken;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorType {
    /// Missing API token, detected before any network call
    Configuration,
    ConnectionRefused,
    Timeout,
    Unauthorized, // HTTP 401
    NotFound,     // HTTP 404
    ServerError,  // HTTP 500+
    NetworkError, // DNS, routing, etc.
    Other,
}

/// Classify an error based on its type and error chain
pub fn classify_error(error: &Error) -> ErrorType {
    if error.downcast_ref::<MissingToken>().is_some() {
        return ErrorType::Configuration;
    }

    let error_msg = error.to_string().to_lowercase();

    // Check for connection-specific errors
    if error_msg.contains("connection refused") {
        return ErrorType::ConnectionRefused;
    }
    if error_msg.contains("timeout") || error_msg.contains("timed out") {
        return ErrorType::Timeout;
    }

    // Check for HTTP status codes (via reqwest error chain)
    if let Some(reqwest_err) = error.downcast_ref::<reqwest::Error>() {
        if let Some(status) = reqwest_err.status() {
            return match status.as_u16() {
                401 => ErrorType::Unauthorized,
                404 => ErrorType::NotFound,
                500..=599 => ErrorType::ServerError,
                _ => ErrorType::Other,
            };
        }
    }

    // Network-level errors
    if error_msg.contains("dns") || error_msg.contains("network") {
        return ErrorType::NetworkError;
    }

    ErrorType::Other
}

/// Extract the most informative message from an error chain for the debug
/// log: the reqwest error if one is present, otherwise the root cause.
pub fn format_error_message(error: &Error) -> String {
    let mut current: Option<&dyn std::error::Error> = Some(error.as_ref());

    while let Some(err) = current {
        if let Some(reqwest_err) = err.downcast_ref::<reqwest::Error>() {
            return reqwest_err.to_string();
        }
        current = err.source();
    }

    let mut source = error.source();
    let mut deepest = error.to_string();

    while let Some(err) = source {
        deepest = err.to_string();
        source = err.source();
    }

    deepest
}

/// Debug-log rendition of an error: its classification plus the most
/// informative message from the chain.
pub fn describe_error(error: &Error) -> String {
    format!("[{:?}] {}", classify_error(error), format_error_message(error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_missing_token() {
        let err = anyhow::Error::new(MissingToken);
        assert_eq!(classify_error(&err), ErrorType::Configuration);
    }

    #[test]
    fn test_classify_missing_token_with_context() {
        let err = anyhow::Error::new(MissingToken).context("Failed to fetch movies");
        assert_eq!(classify_error(&err), ErrorType::Configuration);
    }

    #[test]
    fn test_classify_connection_refused() {
        let err = anyhow::anyhow!("connection refused (os error 111)");
        assert_eq!(classify_error(&err), ErrorType::ConnectionRefused);
    }

    #[test]
    fn test_classify_timeout() {
        let err = anyhow::anyhow!("request timed out");
        assert_eq!(classify_error(&err), ErrorType::Timeout);
    }

    #[test]
    fn test_classify_dns_error() {
        let err = anyhow::anyhow!("dns lookup failed");
        assert_eq!(classify_error(&err), ErrorType::NetworkError);
    }

    #[test]
    fn test_classify_other_error() {
        let err = anyhow::anyhow!("some random error");
        assert_eq!(classify_error(&err), ErrorType::Other);
    }

    #[test]
    fn test_format_shows_root_cause() {
        let inner = anyhow::anyhow!("tcp connect error");
        let outer = inner.context("Failed to fetch movies");
        assert_eq!(format_error_message(&outer), "tcp connect error");
    }

    #[test]
    fn test_format_preserves_simple_errors() {
        let err = anyhow::anyhow!("custom error message");
        assert_eq!(format_error_message(&err), "custom error message");
    }

    #[test]
    fn test_describe_includes_classification() {
        let err = anyhow::Error::new(MissingToken).context("Failed to fetch movies");
        let described = describe_error(&err);
        assert!(described.starts_with("[Configuration]"));
        assert!(described.contains("TMDB API token is not configured"));

        let err = anyhow::anyhow!("request timed out");
        assert_eq!(describe_error(&err), "[Timeout] request timed out");
    }
}
