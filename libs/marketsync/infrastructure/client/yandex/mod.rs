//! Yandex Market campaign API client
//!
//! Authenticates with a bearer token. Offer listing is token-paginated via
//! `page_token`; the listing is complete when a page carries no
//! `nextPageToken`. All update endpoints are addressed per campaign.

pub mod payload;
pub mod types;

use crate::infrastructure::config::YandexConfig;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};
use types::{
    OfferMappingsResponse, OfferMappingsResult, OfferPrice, PriceUpdateRequest, SkuStocks,
    StockUpdateRequest, UpdateStatus,
};

#[derive(Error, Debug)]
pub enum YandexError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Yandex Market API error ({status}): {body}")]
    ApiError { status: StatusCode, body: String },

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),
}

pub type Result<T> = std::result::Result<T, YandexError>;

/// Yandex Market campaign API client
pub struct YandexClient {
    base_url: String,
    client: Client,
    token: String,
    page_limit: u32,
}

impl YandexClient {
    pub fn new(config: &YandexConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            base_url: config.base_url.clone(),
            client,
            token: config.token.clone(),
            page_limit: config.page_limit,
        }
    }

    /// Fetch a single offer-mappings page for a campaign.
    pub async fn offer_page(
        &self,
        campaign_id: &str,
        page_token: &str,
    ) -> Result<OfferMappingsResult> {
        let url = format!(
            "{}/campaigns/{}/offer-mapping-entries",
            self.base_url, campaign_id
        );

        let params = [
            ("page_token", page_token.to_string()),
            ("limit", self.page_limit.to_string()),
        ];

        debug!("GET {} (page_token='{}')", url, page_token);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&params)
            .send()
            .await?;
        let response = require_success(response).await?;

        let parsed: OfferMappingsResponse = parse_json(response).await?;
        Ok(parsed.result.unwrap_or_default())
    }

    /// Fetch every offer id (shop SKU) listed in a campaign.
    ///
    /// Entries without a shop SKU are skipped.
    pub async fn offer_ids(&self, campaign_id: &str) -> Result<Vec<String>> {
        let mut offer_ids = Vec::new();
        let mut page_token = String::new();

        info!("Starting paginated offer fetch for campaign {}", campaign_id);

        loop {
            let page = self.offer_page(campaign_id, &page_token).await?;

            debug!(
                "Fetched {} offers in this page",
                page.offer_mapping_entries.len()
            );
            offer_ids.extend(
                page.offer_mapping_entries
                    .into_iter()
                    .filter_map(|entry| entry.offer.and_then(|offer| offer.shop_sku)),
            );

            match page.paging.next_token() {
                Some(token) => page_token = token.to_string(),
                None => break,
            }

            // Rate limit protection between pages
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        info!(
            "Fetched total of {} offers for campaign {}",
            offer_ids.len(),
            campaign_id
        );
        Ok(offer_ids)
    }

    /// Upload one batch of stock entries to a campaign.
    pub async fn update_stocks(
        &self,
        campaign_id: &str,
        skus: &[SkuStocks],
    ) -> Result<UpdateStatus> {
        let url = format!("{}/campaigns/{}/offers/stocks", self.base_url, campaign_id);

        debug!("PUT {} with {} stock entries", url, skus.len());

        let response = self
            .client
            .put(&url)
            .bearer_auth(&self.token)
            .json(&StockUpdateRequest { skus })
            .send()
            .await?;
        let response = require_success(response).await?;

        parse_json(response).await
    }

    /// Upload one batch of price entries to a campaign.
    pub async fn update_prices(
        &self,
        campaign_id: &str,
        offers: &[OfferPrice],
    ) -> Result<UpdateStatus> {
        let url = format!(
            "{}/campaigns/{}/offer-prices/updates",
            self.base_url, campaign_id
        );

        debug!("POST {} with {} price entries", url, offers.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(&PriceUpdateRequest { offers })
            .send()
            .await?;
        let response = require_success(response).await?;

        parse_json(response).await
    }
}

async fn require_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(YandexError::ApiError { status, body });
    }
    Ok(response)
}

async fn parse_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    response
        .json()
        .await
        .map_err(|e| YandexError::DeserializeFailed(e.to_string()))
}
