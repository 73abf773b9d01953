//! Request and response types for the Ozon seller API

use serde::{Deserialize, Serialize};

/// Body of `POST /v2/product/list`.
#[derive(Debug, Clone, Serialize)]
pub struct ProductListRequest {
    pub filter: ProductFilter,
    pub last_id: String,
    pub limit: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductFilter {
    pub visibility: String,
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self {
            visibility: "ALL".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductListResponse {
    pub result: ProductListResult,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListResult {
    #[serde(default)]
    pub items: Vec<ProductItem>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub last_id: String,
}

impl ProductListResult {
    /// The listing is complete once the accumulated count reaches the
    /// total this page reports.
    pub fn is_last_page(&self, accumulated: usize) -> bool {
        self.total as usize == accumulated
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductItem {
    pub offer_id: String,
}

/// One entry of `POST /v1/product/import/stocks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StockUpdate {
    pub offer_id: String,
    pub stock: i64,
}

/// One entry of `POST /v1/product/import/prices`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceUpdate {
    pub auto_action_enabled: String,
    pub currency_code: String,
    pub offer_id: String,
    pub old_price: String,
    pub price: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockImportRequest<'a> {
    pub stocks: &'a [StockUpdate],
}

#[derive(Debug, Clone, Serialize)]
pub struct PriceImportRequest<'a> {
    pub prices: &'a [PriceUpdate],
}
