//! Request and response types for the Yandex Market campaign API

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferMappingsResponse {
    #[serde(default)]
    pub result: Option<OfferMappingsResult>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferMappingsResult {
    #[serde(default)]
    pub offer_mapping_entries: Vec<OfferMappingEntry>,
    #[serde(default)]
    pub paging: Paging,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferMappingEntry {
    #[serde(default)]
    pub offer: Option<OfferInfo>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferInfo {
    #[serde(default)]
    pub shop_sku: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl Paging {
    /// Token for the next page; `None` once the listing is exhausted.
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}

/// One entry of `PUT /campaigns/{id}/offers/stocks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuStocks {
    pub sku: String,
    pub warehouse_id: i64,
    pub items: Vec<StockItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub count: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub updated_at: String,
}

/// One entry of `POST /campaigns/{id}/offer-prices/updates`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferPrice {
    pub id: String,
    pub price: PriceValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceValue {
    pub value: i64,
    pub currency_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockUpdateRequest<'a> {
    pub skus: &'a [SkuStocks],
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceUpdateRequest<'a> {
    pub offers: &'a [OfferPrice],
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateStatus {
    #[serde(default)]
    pub status: String,
}
