/// Base URL of a locally running platform backend.
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api/v1";

/// Default request timeout, seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client configuration loaded from environment variables.
///
/// All fields have defaults suitable for a local backend; override via
/// environment variables when pointing at another deployment.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base API URL, without a trailing slash.
    pub api_url: String,
    /// HTTP request timeout in seconds.
    pub timeout_secs: u64,
    /// Pre-issued bearer token for non-interactive use.
    pub access_token: Option<String>,
}

impl ClientConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                  | Default                          |
    /// |--------------------------|----------------------------------|
    /// | `AGROCARBON_API_URL`     | `http://localhost:3001/api/v1`   |
    /// | `AGROCARBON_TIMEOUT_SECS`| `30`                             |
    /// | `AGROCARBON_TOKEN`       | unset                            |
    pub fn from_env() -> Self {
        let api_url = std::env::var("AGROCARBON_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.into())
            .trim_end_matches('/')
            .to_string();

        let timeout_secs: u64 = std::env::var("AGROCARBON_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("AGROCARBON_TIMEOUT_SECS must be a valid u64");

        let access_token = std::env::var("AGROCARBON_TOKEN")
            .ok()
            .filter(|token| !token.trim().is_empty());

        Self {
            api_url,
            timeout_secs,
            access_token,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            access_token: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, "http://localhost:3001/api/v1");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.access_token, None);
    }

    #[test]
    fn default_url_has_no_trailing_slash() {
        assert!(!DEFAULT_API_URL.ends_with('/'));
    }
}
