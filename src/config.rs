//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Optional Variables
//!
//! - `DATA_DIR` - Directory of extracted snapshot files (default: `./data`)
//! - `REDIS_URL` / `REDIS_HOST` - Redis connection (enables caching if set)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CACHE_TTL_SECONDS` - Snapshot cache TTL (default: 30 days)
//!
//! If `REDIS_URL` is not set, it will be constructed from `REDIS_HOST`,
//! `REDIS_PORT`, `REDIS_PASSWORD`, and `REDIS_DB` when `REDIS_HOST` is
//! present; otherwise caching is disabled.

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: String,
    pub redis_url: Option<String>,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// TTL (seconds) for cached snapshots in Redis. Snapshot files are
    /// immutable, so this only bounds how long dead entries linger.
    /// Has no effect when Redis is not configured.
    pub cache_ttl_seconds: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string());

        // Load Redis URL (optional)
        let redis_url = Self::load_redis_url();

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let cache_ttl_seconds = env::var("CACHE_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60 * 60 * 24 * 30);

        Ok(Self {
            data_dir,
            redis_url,
            listen_addr,
            log_level,
            log_format,
            cache_ttl_seconds,
        })
    }

    /// Loads Redis URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `REDIS_URL` environment variable
    /// 2. Constructed from `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`
    ///
    /// Returns `None` if Redis is not configured.
    fn load_redis_url() -> Option<String> {
        // Priority 1: Use REDIS_URL if provided
        if let Ok(url) = env::var("REDIS_URL") {
            return Some(url);
        }

        // Priority 2: Build from components (if REDIS_HOST is set)
        let host = env::var("REDIS_HOST").ok()?;
        let port = env::var("REDIS_PORT").unwrap_or_else(|_| "6379".to_string());
        let password = env::var("REDIS_PASSWORD").ok();
        let db = env::var("REDIS_DB").unwrap_or_else(|_| "0".to_string());

        let url = if let Some(pwd) = password {
            // Empty password means no authentication
            if pwd.is_empty() {
                format!("redis://{}:{}/{}", host, port, db)
            } else {
                format!("redis://:{}@{}:{}/{}", pwd, host, port, db)
            }
        } else {
            format!("redis://{}:{}/{}", host, port, db)
        };

        Some(url)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `data_dir` is empty
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `redis_url` has an unknown scheme
    /// - `cache_ttl_seconds` is zero
    pub fn validate(&self) -> Result<()> {
        if self.data_dir.is_empty() {
            anyhow::bail!("DATA_DIR must not be empty");
        }

        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate listen address format
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        // Validate Redis URL format (if present)
        if let Some(ref redis_url) = self.redis_url
            && !redis_url.starts_with("redis://")
            && !redis_url.starts_with("rediss://")
        {
            anyhow::bail!(
                "REDIS_URL must start with 'redis://' or 'rediss://', got '{}'",
                redis_url
            );
        }

        // Validate cache TTL
        if self.cache_ttl_seconds == 0 {
            anyhow::bail!("CACHE_TTL_SECONDS must be greater than 0");
        }

        Ok(())
    }

    /// Returns whether Redis caching is enabled.
    pub fn is_cache_enabled(&self) -> bool {
        self.redis_url.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Data directory: {}", self.data_dir);

        if let Some(ref redis_url) = self.redis_url {
            tracing::info!("  Redis: {} (enabled)", mask_connection_string(redis_url));
            tracing::info!("  Cache TTL: {}s", self.cache_ttl_seconds);
        } else {
            tracing::info!("  Redis: disabled");
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Masks sensitive information in connection strings for logging.
///
/// Replaces password with `***` in URLs like:
/// - `redis://:password@host:port/db` → `redis://:***@host:port/db`
fn mask_connection_string(url: &str) -> String {
    if let Some(start) = url.find("://") {
        let scheme_end = start + 3;
        let rest = &url[scheme_end..];

        if let Some(at_pos) = rest.find('@') {
            let credentials = &rest[..at_pos];
            let host_part = &rest[at_pos..];

            // Check if there's a password (contains ':')
            if let Some(colon_pos) = credentials.rfind(':') {
                let username = &credentials[..colon_pos];
                return format!("{}://{}:***{}", &url[..start], username, host_part);
            }
        }
    }

    url.to_string()
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_mask_connection_string() {
        assert_eq!(
            mask_connection_string("redis://:password@localhost:6379/0"),
            "redis://:***@localhost:6379/0"
        );

        assert_eq!(
            mask_connection_string("redis://localhost:6379/0"),
            "redis://localhost:6379/0"
        );
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config {
            data_dir: "./data".to_string(),
            redis_url: None,
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            cache_ttl_seconds: 3600,
        };

        assert!(config.validate().is_ok());

        // Test invalid log format
        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        // Test invalid listen address
        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        // Test invalid Redis URL
        config.redis_url = Some("http://localhost".to_string());
        assert!(config.validate().is_err());

        config.redis_url = Some("redis://localhost:6379/0".to_string());
        assert!(config.validate().is_ok());

        // Test zero TTL
        config.cache_ttl_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_load_redis_url_from_components() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("REDIS_HOST", "redis-host");
            env::set_var("REDIS_PORT", "6380");
            env::set_var("REDIS_DB", "1");
        }

        let url = Config::load_redis_url().unwrap();
        assert_eq!(url, "redis://redis-host:6380/1");

        // Test with password
        unsafe {
            env::set_var("REDIS_PASSWORD", "secret");
        }
        let url = Config::load_redis_url().unwrap();
        assert_eq!(url, "redis://:secret@redis-host:6380/1");

        // Test with empty password (should be treated as no password)
        unsafe {
            env::set_var("REDIS_PASSWORD", "");
        }
        let url = Config::load_redis_url().unwrap();
        assert_eq!(url, "redis://redis-host:6380/1");

        // Cleanup
        unsafe {
            env::remove_var("REDIS_HOST");
            env::remove_var("REDIS_PORT");
            env::remove_var("REDIS_DB");
            env::remove_var("REDIS_PASSWORD");
        }
    }

    #[test]
    #[serial]
    fn test_redis_url_priority() {
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REDIS_URL", "redis://from-url:6379/0");
            env::set_var("REDIS_HOST", "from-components");
        }

        let url = Config::load_redis_url().unwrap();

        // REDIS_URL should take priority
        assert!(url.contains("from-url"));
        assert!(!url.contains("from-components"));

        // Cleanup
        unsafe {
            env::remove_var("REDIS_URL");
            env::remove_var("REDIS_HOST");
        }
    }

    #[test]
    #[serial]
    fn test_data_dir_default() {
        unsafe {
            env::remove_var("DATA_DIR");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.data_dir, "./data");

        unsafe {
            env::set_var("DATA_DIR", "/srv/shortstats/data");
        }
        let config = Config::from_env().unwrap();
        assert_eq!(config.data_dir, "/srv/shortstats/data");

        unsafe {
            env::remove_var("DATA_DIR");
        }
    }
}
