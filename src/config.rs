use std::env;
use log::debug;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_CORS_MAX_AGE: usize = 3600;
const DEFAULT_JSON_BODY_LIMIT: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub cors_max_age: usize,
    pub json_body_limit: usize,
}

impl ServerConfig {
    /// Reads settings from the process environment (after `.env` is loaded)
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Box<dyn std::error::Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("SERVER_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| format!("SERVER_PORT must be a number, got {:?}: {}", raw, e))?,
            None => DEFAULT_PORT,
        };
        let log_level = lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());
        let cors_max_age = match lookup("CORS_MAX_AGE") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| format!("CORS_MAX_AGE must be a number of seconds, got {:?}: {}", raw, e))?,
            None => DEFAULT_CORS_MAX_AGE,
        };
        let json_body_limit = match lookup("JSON_BODY_LIMIT") {
            Some(raw) => raw
                .parse::<usize>()
                .map_err(|e| format!("JSON_BODY_LIMIT must be a number of bytes, got {:?}: {}", raw, e))?,
            None => DEFAULT_JSON_BODY_LIMIT,
        };

        debug!("Loaded server config: {}:{} (log level {})", host, port, log_level);

        Ok(ServerConfig {
            host,
            port,
            log_level,
            cors_max_age,
            json_body_limit,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.cors_max_age, 3600);
        assert_eq!(config.json_body_limit, 16 * 1024 * 1024);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "5000"),
            ("LOG_LEVEL", "debug"),
            ("CORS_MAX_AGE", "60"),
            ("JSON_BODY_LIMIT", "1024"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:5000");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.cors_max_age, 60);
        assert_eq!(config.json_body_limit, 1024);
    }

    #[test]
    fn test_invalid_port() {
        let result = ServerConfig::from_lookup(lookup_from(&[("SERVER_PORT", "http")]));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("SERVER_PORT must be a number"));

        let result = ServerConfig::from_lookup(lookup_from(&[("SERVER_PORT", "70000")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_numeric_limits() {
        let result = ServerConfig::from_lookup(lookup_from(&[("CORS_MAX_AGE", "-1")]));
        assert!(result.is_err());

        let result = ServerConfig::from_lookup(lookup_from(&[("JSON_BODY_LIMIT", "2MB")]));
        assert!(result.is_err());
    }
}
