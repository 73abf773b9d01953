//! Integration tests: payload construction and batching
//!
//! Exercises the full record-to-payload path through the public API, the way
//! a sync run uses it: list of offers in, batched payloads out. No network.

use chrono::{TimeZone, Utc};
use marketsync::divide;
use marketsync::infrastructure::client::{ozon, yandex};
use marketsync::InventoryRecord;

fn offers(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| id.to_string()).collect()
}

#[test]
fn test_ozon_stock_payload_covers_every_listed_offer() {
    let remnants = vec![
        InventoryRecord::new("A", ">10", Some("5990.00 руб.".to_string())),
        InventoryRecord::new("B", "1", Some("3400.00".to_string())),
        InventoryRecord::new("D", "4", Some("100.00".to_string())),
    ];
    let offer_ids = offers(&["A", "B", "C"]);

    let stocks = ozon::payload::build_stock_updates(&remnants, &offer_ids).unwrap();

    // A and B matched, C zero-filled, D not listed.
    assert_eq!(stocks.len(), 3);
    assert_eq!(stocks[0].offer_id, "A");
    assert_eq!(stocks[0].stock, 100);
    assert_eq!(stocks[1].offer_id, "B");
    assert_eq!(stocks[1].stock, 0);
    assert_eq!(stocks[2].offer_id, "C");
    assert_eq!(stocks[2].stock, 0);

    let prices = ozon::payload::build_price_updates(&remnants, &offer_ids).unwrap();

    // D is silently absent from the price payload as well.
    assert_eq!(prices.len(), 2);
    assert_eq!(prices[0].offer_id, "A");
    assert_eq!(prices[0].price, "5990");
    assert_eq!(prices[1].offer_id, "B");
    assert_eq!(prices[1].price, "3400");
}

#[test]
fn test_yandex_payloads_mirror_ozon_matching_rules() {
    let remnants = vec![
        InventoryRecord::new("A", "3", Some("5990.00 руб.".to_string())),
        InventoryRecord::new("D", "4", Some("100.00".to_string())),
    ];
    let offer_ids = offers(&["A", "B"]);
    let stamp = Utc.with_ymd_and_hms(2023, 10, 27, 12, 0, 0).unwrap();

    let stocks =
        yandex::payload::build_stock_updates(&remnants, &offer_ids, 1234, stamp).unwrap();

    assert_eq!(stocks.len(), 2);
    assert_eq!(stocks[0].sku, "A");
    assert_eq!(stocks[0].items[0].count, 3);
    assert_eq!(stocks[1].sku, "B");
    assert_eq!(stocks[1].items[0].count, 0);
    for entry in &stocks {
        assert_eq!(entry.warehouse_id, 1234);
        assert_eq!(entry.items[0].updated_at, "2023-10-27T12:00:00Z");
    }

    let prices = yandex::payload::build_price_updates(&remnants, &offer_ids).unwrap();

    assert_eq!(prices.len(), 1);
    assert_eq!(prices[0].id, "A");
    assert_eq!(prices[0].price.value, 5990);
}

#[test]
fn test_stock_payload_batches_like_an_upload_run() {
    // 2500 listed offers, none in the feed: all zero-filled, then batched
    // the way the uploader sends them.
    let offer_ids: Vec<String> = (0..2500).map(|n| format!("SKU-{n}")).collect();

    let stocks = ozon::payload::build_stock_updates(&[], &offer_ids).unwrap();
    assert_eq!(stocks.len(), 2500);

    let batches: Vec<_> = divide(&stocks, 2000).collect();
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0].len(), 2000);
    assert_eq!(batches[1].len(), 500);

    // Order preserved across the batch boundary, every entry exactly once.
    assert_eq!(batches[0][0].offer_id, "SKU-0");
    assert_eq!(batches[0][1999].offer_id, "SKU-1999");
    assert_eq!(batches[1][0].offer_id, "SKU-2000");
    assert_eq!(batches[1][499].offer_id, "SKU-2499");
}
