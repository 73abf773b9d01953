//! Payload builders for Yandex Market stock and price updates
//!
//! Same matching rules as the Ozon builders, with the campaign's warehouse id
//! and a caller-supplied timestamp stamped onto every stock entry.

use super::types::{OfferPrice, PriceValue, SkuStocks, StockItem};
use crate::domain::inventory::{normalize_price, normalize_quantity, InventoryRecord, ParseError};
use chrono::{DateTime, SecondsFormat, Utc};
use std::collections::HashSet;

/// Fulfillment item type reported with every stock entry.
const STOCK_ITEM_TYPE: &str = "FIT";

/// Build stock entries for every offer listed in a campaign.
///
/// Matched records come first in record order, then zero-fill entries for
/// offers the feed no longer carries, in listing order. All entries share
/// one `updated_at` stamp (second precision, UTC).
pub fn build_stock_updates(
    remnants: &[InventoryRecord],
    offer_ids: &[String],
    warehouse_id: i64,
    updated_at: DateTime<Utc>,
) -> Result<Vec<SkuStocks>, ParseError> {
    let stamp = updated_at.to_rfc3339_opts(SecondsFormat::Secs, true);
    let mut remaining: HashSet<&str> = offer_ids.iter().map(String::as_str).collect();
    let mut stocks = Vec::with_capacity(offer_ids.len());

    for watch in remnants {
        if remaining.remove(watch.code.as_str()) {
            stocks.push(sku_stocks(
                &watch.code,
                warehouse_id,
                normalize_quantity(&watch.quantity)?,
                &stamp,
            ));
        }
    }

    for offer_id in offer_ids {
        if remaining.contains(offer_id.as_str()) {
            stocks.push(sku_stocks(offer_id, warehouse_id, 0, &stamp));
        }
    }

    Ok(stocks)
}

/// Build price entries for records matching an offer listed in a campaign.
///
/// Records without a price, and records whose code is not listed, are
/// silently skipped. The known-offer set is read-only here.
pub fn build_price_updates(
    remnants: &[InventoryRecord],
    offer_ids: &[String],
) -> Result<Vec<OfferPrice>, ParseError> {
    let known: HashSet<&str> = offer_ids.iter().map(String::as_str).collect();
    let mut prices = Vec::new();

    for watch in remnants {
        if !known.contains(watch.code.as_str()) {
            continue;
        }
        let Some(raw_price) = watch.price.as_deref() else {
            continue;
        };

        let value = normalize_price(raw_price)?
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidPrice(raw_price.to_string()))?;

        prices.push(OfferPrice {
            id: watch.code.clone(),
            price: PriceValue {
                value,
                currency_id: "RUR".to_string(),
            },
        });
    }

    Ok(prices)
}

fn sku_stocks(sku: &str, warehouse_id: i64, count: i64, stamp: &str) -> SkuStocks {
    SkuStocks {
        sku: sku.to_string(),
        warehouse_id,
        items: vec![StockItem {
            count,
            kind: STOCK_ITEM_TYPE.to_string(),
            updated_at: stamp.to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn offers(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn stamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 10, 27, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_stocks_carry_warehouse_and_timestamp() {
        let remnants = vec![InventoryRecord::new("A", ">10", None)];

        let stocks = build_stock_updates(&remnants, &offers(&["A", "B"]), 1234, stamp()).unwrap();

        assert_eq!(stocks.len(), 2);
        assert_eq!(stocks[0].sku, "A");
        assert_eq!(stocks[0].warehouse_id, 1234);
        assert_eq!(stocks[0].items.len(), 1);
        assert_eq!(stocks[0].items[0].count, 100);
        assert_eq!(stocks[0].items[0].kind, "FIT");
        assert_eq!(stocks[0].items[0].updated_at, "2023-10-27T12:00:00Z");

        // B never matched: zero-filled with the same stamp.
        assert_eq!(stocks[1].sku, "B");
        assert_eq!(stocks[1].items[0].count, 0);
        assert_eq!(stocks[1].items[0].updated_at, "2023-10-27T12:00:00Z");
    }

    #[test]
    fn test_each_offer_consumed_at_most_once() {
        let remnants = vec![
            InventoryRecord::new("A", "7", None),
            InventoryRecord::new("A", "2", None),
        ];

        let stocks = build_stock_updates(&remnants, &offers(&["A"]), 1, stamp()).unwrap();

        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].items[0].count, 7);
    }

    #[test]
    fn test_prices_parse_to_integer_values() {
        let remnants = vec![
            InventoryRecord::new("A", "2", Some("5990.00 руб.".to_string())),
            InventoryRecord::new("D", "2", Some("100.00".to_string())),
            InventoryRecord::new("B", "2", None),
        ];

        let prices = build_price_updates(&remnants, &offers(&["A", "B"])).unwrap();

        assert_eq!(prices.len(), 1);
        assert_eq!(prices[0].id, "A");
        assert_eq!(prices[0].price.value, 5990);
        assert_eq!(prices[0].price.currency_id, "RUR");
    }

    #[test]
    fn test_malformed_price_aborts_build() {
        let remnants = vec![InventoryRecord::new("A", "2", Some("уточняйте".to_string()))];
        assert!(build_price_updates(&remnants, &offers(&["A"])).is_err());
    }
}
