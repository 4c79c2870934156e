use super::models::{Config, ServerConfig, UpstreamConfig};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Upstream base URL '{url}' is invalid: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Invalid upstream URL scheme '{scheme}', expected 'http://' or 'https://'")]
    InvalidUpstreamScheme { scheme: String },

    #[error("Timeout must be positive: {field} = 0")]
    ZeroTimeout { field: String },

    #[error("Directory setting must not be empty: {field}")]
    EmptyDirectory { field: String },
}

/// Validate the entire configuration
pub fn validate(config: &Config) -> Result<(), ValidationError> {
    validate_upstream(&config.upstream)?;
    validate_server(&config.server)?;
    Ok(())
}

fn validate_upstream(upstream: &UpstreamConfig) -> Result<(), ValidationError> {
    let url = reqwest::Url::parse(&upstream.base_url).map_err(|e| {
        ValidationError::InvalidBaseUrl {
            url: upstream.base_url.clone(),
            reason: e.to_string(),
        }
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ValidationError::InvalidUpstreamScheme {
            scheme: url.scheme().to_string(),
        });
    }

    if upstream.request_timeout_ms == Some(0) {
        return Err(ValidationError::ZeroTimeout {
            field: "upstream.request_timeout_ms".to_string(),
        });
    }
    if upstream.connect_timeout_ms == Some(0) {
        return Err(ValidationError::ZeroTimeout {
            field: "upstream.connect_timeout_ms".to_string(),
        });
    }

    Ok(())
}

fn validate_server(server: &ServerConfig) -> Result<(), ValidationError> {
    if server.static_dir.as_os_str().is_empty() {
        return Err(ValidationError::EmptyDirectory {
            field: "server.static_dir".to_string(),
        });
    }
    if server.images_dir.as_os_str().is_empty() {
        return Err(ValidationError::EmptyDirectory {
            field: "server.images_dir".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_with_upstream(upstream: UpstreamConfig) -> Config {
        Config {
            upstream,
            ..Config::default()
        }
    }

    #[test]
    fn test_defaults_are_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_invalid_base_url() {
        let config = config_with_upstream(UpstreamConfig {
            base_url: "not a url".to_string(),
            ..UpstreamConfig::default()
        });

        assert!(matches!(
            validate(&config),
            Err(ValidationError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_non_http_scheme() {
        let config = config_with_upstream(UpstreamConfig {
            base_url: "ftp://example.com/api".to_string(),
            ..UpstreamConfig::default()
        });

        match validate(&config) {
            Err(ValidationError::InvalidUpstreamScheme { scheme }) => assert_eq!(scheme, "ftp"),
            other => panic!("Expected InvalidUpstreamScheme, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_timeouts_rejected() {
        let config = config_with_upstream(UpstreamConfig {
            request_timeout_ms: Some(0),
            ..UpstreamConfig::default()
        });
        assert!(matches!(
            validate(&config),
            Err(ValidationError::ZeroTimeout { .. })
        ));

        let config = config_with_upstream(UpstreamConfig {
            connect_timeout_ms: Some(0),
            ..UpstreamConfig::default()
        });
        assert!(matches!(
            validate(&config),
            Err(ValidationError::ZeroTimeout { .. })
        ));
    }

    #[test]
    fn test_empty_static_dir_rejected() {
        let mut config = Config::default();
        config.server.static_dir = PathBuf::new();

        assert!(matches!(
            validate(&config),
            Err(ValidationError::EmptyDirectory { .. })
        ));
    }
}
