pub const DEFAULT_API_BASE_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_VS_CURRENCY: &str = "usd";
/// Largest page the markets endpoint serves.
pub const MAX_PER_PAGE: u32 = 250;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_FAVORITES_PATH: &str = "favorites.json";

#[derive(Debug, Clone, PartialEq)]
pub struct WatchConfig {
    pub api_base_url: String,
    pub vs_currency: String,
    pub per_page: u32,
    pub request_timeout_secs: u64,
    pub favorites_path: String,
    pub log_level: String,
    /// Problems found while reading the environment. Kept here so the caller
    /// can log them once its logger is running.
    pub warnings: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        WatchConfig {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            vs_currency: DEFAULT_VS_CURRENCY.to_string(),
            per_page: MAX_PER_PAGE,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            favorites_path: DEFAULT_FAVORITES_PATH.to_string(),
            log_level: "INFO".to_string(),
            warnings: Vec::new(),
        }
    }
}

impl WatchConfig {
    /// Read settings from the process environment. Absent values take the
    /// defaults; invalid ones do too and leave an entry in `warnings`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = WatchConfig::default();
        let mut warnings = Vec::new();

        let api_base_url = lookup("COINGECKO_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let vs_currency = lookup("VS_CURRENCY")
            .map(|c| c.to_lowercase())
            .unwrap_or(defaults.vs_currency);

        let per_page = match lookup("MARKET_PAGE_SIZE").map(|s| s.parse::<u32>()) {
            Some(Ok(size)) => {
                let clamped = size.clamp(1, MAX_PER_PAGE);
                if clamped != size {
                    warnings.push(format!(
                        "MARKET_PAGE_SIZE {} out of range, using {}",
                        size, clamped
                    ));
                }
                clamped
            }
            Some(Err(_)) => {
                warnings.push(format!(
                    "MARKET_PAGE_SIZE is not a number, using default ({})",
                    MAX_PER_PAGE
                ));
                defaults.per_page
            }
            None => defaults.per_page,
        };

        let request_timeout_secs =
            match lookup("REQUEST_TIMEOUT_SECONDS").map(|s| s.parse::<u64>()) {
                Some(Ok(secs)) => secs,
                Some(Err(_)) => {
                    warnings.push(format!(
                        "REQUEST_TIMEOUT_SECONDS is not a number, using default ({} seconds)",
                        DEFAULT_REQUEST_TIMEOUT_SECS
                    ));
                    defaults.request_timeout_secs
                }
                None => defaults.request_timeout_secs,
            };

        let favorites_path = lookup("FAVORITES_PATH").unwrap_or(defaults.favorites_path);
        let log_level = lookup("LOG_LEVEL").unwrap_or(defaults.log_level);

        WatchConfig {
            api_base_url,
            vs_currency,
            per_page,
            request_timeout_secs,
            favorites_path,
            log_level,
            warnings,
        }
    }

    pub fn markets_url(&self) -> String {
        format!("{}/coins/markets", self.api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> WatchConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        WatchConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = config_from(&[]);
        assert_eq!(config, WatchConfig::default());
        assert!(config.warnings.is_empty());
        assert_eq!(
            WatchConfig::default().markets_url(),
            "https://api.coingecko.com/api/v3/coins/markets"
        );
    }

    #[test]
    fn test_values_read_from_lookup() {
        let config = config_from(&[
            ("COINGECKO_API_URL", "http://127.0.0.1:9000/api/"),
            ("VS_CURRENCY", "EUR"),
            ("MARKET_PAGE_SIZE", "100"),
            ("REQUEST_TIMEOUT_SECONDS", "3"),
            ("FAVORITES_PATH", "/tmp/favs.json"),
            ("LOG_LEVEL", "DEBUG"),
        ]);

        assert_eq!(config.markets_url(), "http://127.0.0.1:9000/api/coins/markets");
        assert_eq!(config.vs_currency, "eur");
        assert_eq!(config.per_page, 100);
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.favorites_path, "/tmp/favs.json");
        assert_eq!(config.log_level, "DEBUG");
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn test_page_size_is_clamped() {
        assert_eq!(config_from(&[("MARKET_PAGE_SIZE", "1000")]).per_page, MAX_PER_PAGE);
        assert_eq!(config_from(&[("MARKET_PAGE_SIZE", "0")]).per_page, 1);
        assert_eq!(config_from(&[("MARKET_PAGE_SIZE", "lots")]).per_page, MAX_PER_PAGE);
        assert_eq!(config_from(&[("MARKET_PAGE_SIZE", "1000")]).warnings.len(), 1);
        assert!(config_from(&[("MARKET_PAGE_SIZE", "250")]).warnings.is_empty());
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        let config = config_from(&[("REQUEST_TIMEOUT_SECONDS", "soon")]);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains("REQUEST_TIMEOUT_SECONDS"));
    }

    #[test]
    fn test_absent_timeout_uses_default_quietly() {
        let config = config_from(&[("LOG_LEVEL", "DEBUG")]);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
        assert!(config.warnings.is_empty());
    }
}
