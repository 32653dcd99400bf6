use log::{error, info};
use reqwest::Client;
use shared::MarketEntry;

use crate::config::WatchConfig;
use crate::error::{Result, WatchlistError};

/// Read-only client for the `/coins/markets` listing.
#[derive(Debug, Clone)]
pub struct MarketClient {
    client: Client,
    markets_url: String,
    vs_currency: String,
    per_page: u32,
}

impl MarketClient {
    pub fn new(config: &WatchConfig) -> Result<Self> {
        let builder = Client::builder();

        // The wasm fetch backend has no request timeout
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(std::time::Duration::from_secs(config.request_timeout_secs));

        Ok(MarketClient {
            client: builder.build()?,
            markets_url: config.markets_url(),
            vs_currency: config.vs_currency.clone(),
            per_page: config.per_page,
        })
    }

    /// Fetch the first page of the market listing.
    pub async fn fetch_markets(&self) -> Result<Vec<MarketEntry>> {
        let per_page = self.per_page.to_string();
        info!("Fetching market listing ({} per page)", per_page);

        let response = self
            .client
            .get(&self.markets_url)
            .query(&[
                ("vs_currency", self.vs_currency.as_str()),
                ("per_page", per_page.as_str()),
                ("page", "1"),
            ])
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("Failed to reach market API: {}", e);
                WatchlistError::from(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Market API returned status: {}", status);
            return Err(WatchlistError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let entries = response.json::<Vec<MarketEntry>>().await.map_err(|e| {
            error!("Failed to parse market listing: {}", e);
            WatchlistError::from(e)
        })?;

        info!("Fetched {} market entries", entries.len());
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_configured_listing() {
        let config = WatchConfig {
            api_base_url: "http://127.0.0.1:1/api".to_string(),
            vs_currency: "eur".to_string(),
            per_page: 50,
            ..WatchConfig::default()
        };
        let client = MarketClient::new(&config).unwrap();

        assert_eq!(client.markets_url, "http://127.0.0.1:1/api/coins/markets");
        assert_eq!(client.vs_currency, "eur");
        assert_eq!(client.per_page, 50);
    }

    #[tokio::test]
    async fn test_unreachable_api_is_http_error() {
        let config = WatchConfig {
            api_base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: 2,
            ..WatchConfig::default()
        };
        let client = MarketClient::new(&config).unwrap();

        let result = client.fetch_markets().await;
        assert!(matches!(result, Err(WatchlistError::Http(_))));
    }
}
