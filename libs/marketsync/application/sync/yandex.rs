//! Yandex Market synchronization use case
//!
//! One feed download serves every campaign; each campaign (FBS, DBS) is then
//! listed and updated against its own warehouse, in sequence.

use super::Result;
use crate::domain::inventory::InventoryRecord;
use crate::domain::models::SyncReport;
use crate::infrastructure::client::yandex::{payload, types::SkuStocks, YandexClient};
use crate::infrastructure::config::{CampaignTarget, SyncConfig};
use crate::infrastructure::feed::FeedClient;
use crate::utils::divide;
use chrono::Utc;
use tracing::{debug, info};

/// One-shot stock and price sync into the Yandex Market campaigns.
pub struct YandexSyncApp {
    feed: FeedClient,
    client: YandexClient,
    campaigns: Vec<CampaignTarget>,
    stock_batch_size: usize,
    price_batch_size: usize,
}

impl YandexSyncApp {
    pub fn new(config: &SyncConfig) -> Self {
        Self {
            feed: FeedClient::new(config.feed.clone()),
            client: YandexClient::new(&config.yandex),
            campaigns: config.yandex.campaigns.clone(),
            stock_batch_size: config.yandex.stock_batch_size,
            price_batch_size: config.yandex.price_batch_size,
        }
    }

    /// Run one full sync across all configured campaigns.
    pub async fn run(&self) -> Result<Vec<(String, SyncReport)>> {
        let remnants = self.feed.fetch_inventory().await?;

        let mut reports = Vec::with_capacity(self.campaigns.len());
        for target in &self.campaigns {
            info!(
                "Syncing campaign {} ({}), warehouse {}",
                target.label, target.campaign_id, target.warehouse_id
            );
            let report = self.sync_campaign(target, &remnants).await?;
            reports.push((target.label.clone(), report));
        }

        Ok(reports)
    }

    async fn sync_campaign(
        &self,
        target: &CampaignTarget,
        remnants: &[InventoryRecord],
    ) -> Result<SyncReport> {
        let offer_ids = self.client.offer_ids(&target.campaign_id).await?;

        let stocks = payload::build_stock_updates(
            remnants,
            &offer_ids,
            target.warehouse_id,
            Utc::now(),
        )?;
        let in_stock = count_in_stock(&stocks);
        info!(
            "Built {} stock entries for campaign {} ({} in stock)",
            stocks.len(),
            target.label,
            in_stock
        );

        let mut stock_batches = 0;
        for batch in divide(&stocks, self.stock_batch_size) {
            let response = self.client.update_stocks(&target.campaign_id, batch).await?;
            stock_batches += 1;
            debug!(
                "Stock batch {} ({} entries) status: {}",
                stock_batches,
                batch.len(),
                response.status
            );
        }

        let prices = payload::build_price_updates(remnants, &offer_ids)?;
        info!(
            "Built {} price entries for campaign {}",
            prices.len(),
            target.label
        );

        let mut price_batches = 0;
        for batch in divide(&prices, self.price_batch_size) {
            let response = self.client.update_prices(&target.campaign_id, batch).await?;
            price_batches += 1;
            debug!(
                "Price batch {} ({} entries) status: {}",
                price_batches,
                batch.len(),
                response.status
            );
        }

        Ok(SyncReport {
            offers_listed: offer_ids.len(),
            stock_entries: stocks.len(),
            stock_in_stock: in_stock,
            price_entries: prices.len(),
            stock_batches,
            price_batches,
        })
    }
}

fn count_in_stock(stocks: &[SkuStocks]) -> usize {
    stocks
        .iter()
        .filter(|entry| entry.items.iter().any(|item| item.count != 0))
        .count()
}
