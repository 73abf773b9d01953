//! Ozon synchronization use case

use super::Result;
use crate::domain::models::SyncReport;
use crate::infrastructure::client::ozon::{payload, types::StockUpdate, OzonClient};
use crate::infrastructure::config::SyncConfig;
use crate::infrastructure::feed::FeedClient;
use crate::utils::divide;
use tracing::{debug, info};

/// One-shot stock and price sync into the Ozon seller catalog.
pub struct OzonSyncApp {
    feed: FeedClient,
    client: OzonClient,
    stock_batch_size: usize,
    price_batch_size: usize,
}

impl OzonSyncApp {
    pub fn new(config: &SyncConfig) -> Self {
        Self {
            feed: FeedClient::new(config.feed.clone()),
            client: OzonClient::new(&config.ozon),
            stock_batch_size: config.ozon.stock_batch_size,
            price_batch_size: config.ozon.price_batch_size,
        }
    }

    /// Run one full sync: list offers, fetch the feed, upload stocks, then
    /// prices. Batches are sent sequentially; the first failure aborts the
    /// run and skips the batches not yet sent.
    pub async fn run(&self) -> Result<SyncReport> {
        let offer_ids = self.client.offer_ids().await?;
        let remnants = self.feed.fetch_inventory().await?;

        let stocks = payload::build_stock_updates(&remnants, &offer_ids)?;
        let in_stock = count_in_stock(&stocks);
        info!(
            "Built {} Ozon stock entries ({} in stock)",
            stocks.len(),
            in_stock
        );

        let mut stock_batches = 0;
        for batch in divide(&stocks, self.stock_batch_size) {
            let response = self.client.update_stocks(batch).await?;
            stock_batches += 1;
            debug!(
                "Stock batch {} ({} entries) accepted: {}",
                stock_batches,
                batch.len(),
                response
            );
        }

        let prices = payload::build_price_updates(&remnants, &offer_ids)?;
        info!("Built {} Ozon price entries", prices.len());

        let mut price_batches = 0;
        for batch in divide(&prices, self.price_batch_size) {
            let response = self.client.update_prices(batch).await?;
            price_batches += 1;
            debug!(
                "Price batch {} ({} entries) accepted: {}",
                price_batches,
                batch.len(),
                response
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

fn count_in_stock(stocks: &[StockUpdate]) -> usize {
    stocks.iter().filter(|entry| entry.stock != 0).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_in_stock() {
        let stocks = vec![
            StockUpdate {
                offer_id: "A".to_string(),
                stock: 5,
            },
            StockUpdate {
                offer_id: "B".to_string(),
                stock: 0,
            },
        ];

        assert_eq!(count_in_stock(&stocks), 1);
    }
}
