//! Ozon seller API client
//!
//! Authenticates with the `Client-Id` / `Api-Key` header pair. Offer listing
//! is cursor-paginated via `last_id`; the listing is complete when the
//! accumulated item count reaches the total the API reports.

pub mod payload;
pub mod types;

use crate::infrastructure::config::OzonConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use types::{
    PriceImportRequest, PriceUpdate, ProductFilter, ProductListRequest, ProductListResponse,
    ProductListResult, StockImportRequest, StockUpdate,
};

#[derive(Error, Debug)]
pub enum OzonError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Ozon API error ({status}): {body}")]
    ApiError { status: StatusCode, body: String },

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),
}

pub type Result<T> = std::result::Result<T, OzonError>;

/// Ozon seller API client
pub struct OzonClient {
    base_url: String,
    client: Client,
    client_id: String,
    api_key: String,
    page_limit: u32,
}

impl OzonClient {
    pub fn new(config: &OzonConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: config.base_url.clone(),
            client,
            client_id: config.client_id.clone(),
            api_key: config.api_key.clone(),
            page_limit: config.page_limit,
        }
    }

    /// Fetch a single product-list page.
    pub async fn product_page(&self, last_id: &str) -> Result<ProductListResult> {
        let url = format!("{}/v2/product/list", self.base_url);

        let request = ProductListRequest {
            filter: ProductFilter::default(),
            last_id: last_id.to_string(),
            limit: self.page_limit,
        };

        debug!("POST {} (last_id='{}')", url, last_id);

        let response = self.post(&url).json(&request).send().await?;
        let response = require_success(response).await?;

        let parsed: ProductListResponse = parse_json(response).await?;
        Ok(parsed.result)
    }

    /// Fetch every offer id listed in the seller's catalog.
    pub async fn offer_ids(&self) -> Result<Vec<String>> {
        let mut offer_ids = Vec::new();
        let mut last_id = String::new();

        info!("Starting paginated Ozon product fetch");

        loop {
            let page = self.product_page(&last_id).await?;

            debug!("Fetched {} products in this page", page.items.len());
            offer_ids.extend(page.items.iter().map(|item| item.offer_id.clone()));

            if page.is_last_page(offer_ids.len()) {
                break;
            }
            last_id = page.last_id;

            // Rate limit protection between pages
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        info!("Fetched total of {} Ozon offers", offer_ids.len());
        Ok(offer_ids)
    }

    /// Upload one batch of stock entries.
    pub async fn update_stocks(&self, stocks: &[StockUpdate]) -> Result<serde_json::Value> {
        let url = format!("{}/v1/product/import/stocks", self.base_url);

        debug!("POST {} with {} stock entries", url, stocks.len());

        let response = self
            .post(&url)
            .json(&StockImportRequest { stocks })
            .send()
            .await?;
        let response = require_success(response).await?;

        parse_json(response).await
    }

    /// Upload one batch of price entries.
    pub async fn update_prices(&self, prices: &[PriceUpdate]) -> Result<serde_json::Value> {
        let url = format!("{}/v1/product/import/prices", self.base_url);

        debug!("POST {} with {} price entries", url, prices.len());

        let response = self
            .post(&url)
            .json(&PriceImportRequest { prices })
            .send()
            .await?;
        let response = require_success(response).await?;

        parse_json(response).await
    }

    fn post(&self, url: &str) -> reqwest::RequestBuilder {
        self.client
            .post(url)
            .header("Client-Id", &self.client_id)
            .header("Api-Key", &self.api_key)
    }
}

async fn require_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(OzonError::ApiError { status, body });
    }
    Ok(response)
}

async fn parse_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| OzonError::DeserializeFailed(e.to_string()))
}
