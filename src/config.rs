use anyhow::{Context, Result};

const DEFAULT_PROVIDER_API_URL: &str =
    "https://translation.googleapis.com/language/translate/v2";

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Translation provider
    pub provider_api_url: String,
    /// Provider credential. Its absence is a request-time AUTH_ERROR, not a
    /// startup failure, so the server can boot without it.
    pub provider_api_key: Option<String>,

    // Gateway (client side)
    pub endpoint_url: String,

    // History
    pub database_path: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = std::env::var("PORT")
            .ok()
            .map(|v| v.parse::<u16>().context("PORT must be a valid port number"))
            .transpose()?
            .unwrap_or(8787);

        Ok(Self {
            provider_api_url: std::env::var("TRANSLATE_API_URL")
                .unwrap_or_else(|_| DEFAULT_PROVIDER_API_URL.to_string()),
            provider_api_key: std::env::var("TRANSLATE_API_KEY").ok(),

            endpoint_url: std::env::var("KOTOBA_ENDPOINT")
                .unwrap_or_else(|_| format!("http://{}:{}/api/translate", host, port)),

            database_path: std::env::var("HISTORY_DB_PATH")
                .unwrap_or_else(|_| "data/history.db".to_string()),

            host,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 6] = [
        "HOST",
        "PORT",
        "TRANSLATE_API_URL",
        "TRANSLATE_API_KEY",
        "KOTOBA_ENDPOINT",
        "HISTORY_DB_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8787);
        assert_eq!(config.provider_api_url, DEFAULT_PROVIDER_API_URL);
        assert!(config.provider_api_key.is_none());
        assert_eq!(config.endpoint_url, "http://127.0.0.1:8787/api/translate");
        assert_eq!(config.database_path, "data/history.db");
    }

    #[test]
    #[serial]
    fn test_overrides() {
        clear_env();
        std::env::set_var("HOST", "0.0.0.0");
        std::env::set_var("PORT", "4000");
        std::env::set_var("TRANSLATE_API_URL", "http://localhost:9999/v2");
        std::env::set_var("TRANSLATE_API_KEY", "test-key");
        std::env::set_var("HISTORY_DB_PATH", "/tmp/history.db");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4000);
        assert_eq!(config.provider_api_url, "http://localhost:9999/v2");
        assert_eq!(config.provider_api_key, Some("test-key".to_string()));
        assert_eq!(config.database_path, "/tmp/history.db");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_endpoint_derives_from_host_and_port() {
        clear_env();
        std::env::set_var("HOST", "10.0.0.5");
        std::env::set_var("PORT", "9090");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.endpoint_url, "http://10.0.0.5:9090/api/translate");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_explicit_endpoint_wins() {
        clear_env();
        std::env::set_var("KOTOBA_ENDPOINT", "http://gateway.test/api/translate");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.endpoint_url, "http://gateway.test/api/translate");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");

        let result = Config::from_env();
        assert!(result.is_err());

        clear_env();
    }
}
