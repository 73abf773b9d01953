//! Payload builders for Ozon stock and price imports
//!
//! Pure functions from inventory records plus the seller's listed offer ids
//! to upload-ready payload lists. Nothing here touches the network.

use super::types::{PriceUpdate, StockUpdate};
use crate::domain::inventory::{normalize_price, normalize_quantity, InventoryRecord, ParseError};
use std::collections::HashSet;

/// Build stock entries for every listed offer.
///
/// Records matching a listed offer contribute their normalized quantity, in
/// record order; each offer is consumed at most once. Offers the feed no
/// longer carries are zero-filled afterwards, in listing order, so the
/// marketplace never keeps a stale nonzero count.
pub fn build_stock_updates(
    remnants: &[InventoryRecord],
    offer_ids: &[String],
) -> Result<Vec<StockUpdate>, ParseError> {
    let mut remaining: HashSet<&str> = offer_ids.iter().map(String::as_str).collect();
    let mut stocks = Vec::with_capacity(offer_ids.len());

    for watch in remnants {
        if remaining.remove(watch.code.as_str()) {
            stocks.push(StockUpdate {
                offer_id: watch.code.clone(),
                stock: normalize_quantity(&watch.quantity)?,
            });
        }
    }

    for offer_id in offer_ids {
        if remaining.contains(offer_id.as_str()) {
            stocks.push(StockUpdate {
                offer_id: offer_id.clone(),
                stock: 0,
            });
        }
    }

    Ok(stocks)
}

/// Build price entries for records matching a listed offer.
///
/// Records without a price, and records whose code is not listed, are
/// silently skipped. The known-offer set is read-only here.
pub fn build_price_updates(
    remnants: &[InventoryRecord],
    offer_ids: &[String],
) -> Result<Vec<PriceUpdate>, ParseError> {
    let known: HashSet<&str> = offer_ids.iter().map(String::as_str).collect();
    let mut prices = Vec::new();

    for watch in remnants {
        if !known.contains(watch.code.as_str()) {
            continue;
        }
        let Some(raw_price) = watch.price.as_deref() else {
            continue;
        };

        prices.push(PriceUpdate {
            auto_action_enabled: "UNKNOWN".to_string(),
            currency_code: "RUB".to_string(),
            offer_id: watch.code.clone(),
            old_price: "0".to_string(),
            price: normalize_price(raw_price)?,
        });
    }

    Ok(prices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offers(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_stocks_cover_matched_and_unmatched_offers() {
        let remnants = vec![
            InventoryRecord::new("A", ">10", None),
            InventoryRecord::new("B", "5", None),
        ];

        let stocks = build_stock_updates(&remnants, &offers(&["A", "B", "C"])).unwrap();

        assert_eq!(stocks.len(), 3);
        assert_eq!(stocks[0], StockUpdate { offer_id: "A".to_string(), stock: 100 });
        assert_eq!(stocks[1], StockUpdate { offer_id: "B".to_string(), stock: 5 });
        assert_eq!(stocks[2], StockUpdate { offer_id: "C".to_string(), stock: 0 });
    }

    #[test]
    fn test_each_offer_consumed_at_most_once() {
        let remnants = vec![
            InventoryRecord::new("A", "4", None),
            InventoryRecord::new("A", "9", None),
        ];

        let stocks = build_stock_updates(&remnants, &offers(&["A"])).unwrap();

        // The duplicate record must not produce a second entry.
        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].stock, 4);
    }

    #[test]
    fn test_matched_zero_is_not_zero_filled_twice() {
        // "1" normalizes to 0, but the offer was matched and must appear once.
        let remnants = vec![InventoryRecord::new("A", "1", None)];

        let stocks = build_stock_updates(&remnants, &offers(&["A"])).unwrap();

        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0].stock, 0);
    }

    #[test]
    fn test_unlisted_records_are_ignored() {
        let remnants = vec![InventoryRecord::new("X", "2", None)];

        let stocks = build_stock_updates(&remnants, &offers(&["A"])).unwrap();

        assert_eq!(stocks.len(), 1);
        assert_eq!(stocks[0], StockUpdate { offer_id: "A".to_string(), stock: 0 });
    }

    #[test]
    fn test_malformed_quantity_aborts_build() {
        let remnants = vec![InventoryRecord::new("A", "lots", None)];
        assert!(build_stock_updates(&remnants, &offers(&["A"])).is_err());
    }

    #[test]
    fn test_prices_skip_unknown_and_priceless_records() {
        let remnants = vec![
            InventoryRecord::new("A", "2", Some("5990.00 руб.".to_string())),
            InventoryRecord::new("B", "3", Some("3400.00".to_string())),
            InventoryRecord::new("B2", "3", None),
            InventoryRecord::new("D", "1", Some("100.00".to_string())),
        ];

        let prices = build_price_updates(&remnants, &offers(&["A", "B", "B2"])).unwrap();

        assert_eq!(prices.len(), 2);
        assert_eq!(prices[0].offer_id, "A");
        assert_eq!(prices[0].price, "5990");
        assert_eq!(prices[0].currency_code, "RUB");
        assert_eq!(prices[0].old_price, "0");
        assert_eq!(prices[0].auto_action_enabled, "UNKNOWN");
        assert_eq!(prices[1].offer_id, "B");
        assert_eq!(prices[1].price, "3400");
    }

    #[test]
    fn test_malformed_price_aborts_build() {
        let remnants = vec![InventoryRecord::new("A", "2", Some("договорная".to_string()))];
        assert!(build_price_updates(&remnants, &offers(&["A"])).is_err());
    }
}
