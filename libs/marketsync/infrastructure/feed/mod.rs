//! Supplier stock feed adapter
//!
//! The supplier publishes a ZIP archive containing one XLS spreadsheet with
//! current watch stock and prices. The archive is downloaded, extracted and
//! parsed fully in memory; nothing is written to disk.

use crate::domain::inventory::InventoryRecord;
use crate::infrastructure::config::{FeedColumns, FeedConfig};
use calamine::{Data, Range, Reader, Xls};
use reqwest::{Client, StatusCode};
use std::io::{Cursor, Read};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Feed endpoint returned {status}: {body}")]
    ApiError { status: StatusCode, body: String },

    #[error("Failed to read archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("I/O error while extracting archive: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read spreadsheet: {0}")]
    Spreadsheet(#[from] calamine::XlsError),

    #[error("Spreadsheet has no sheets")]
    EmptyWorkbook,

    #[error("Column '{0}' not found in header row")]
    MissingColumn(String),
}

pub type Result<T> = std::result::Result<T, FeedError>;

/// Downloads and parses the supplier stock feed.
pub struct FeedClient {
    config: FeedConfig,
    client: Client,
}

impl FeedClient {
    pub fn new(config: FeedConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .connect_timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to build HTTP client");

        Self { config, client }
    }

    /// Download the feed archive and parse it into inventory records.
    pub async fn fetch_inventory(&self) -> Result<Vec<InventoryRecord>> {
        info!("Downloading stock feed from {}", self.config.url);

        let response = self.client.get(&self.config.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(FeedError::ApiError { status, body });
        }

        let archive = response.bytes().await?;
        debug!("Feed archive downloaded: {} bytes", archive.len());

        let spreadsheet = extract_entry(&archive, &self.config.archive_entry)?;
        let records =
            parse_spreadsheet(&spreadsheet, self.config.header_row, &self.config.columns)?;

        info!("Feed contains {} inventory records", records.len());
        Ok(records)
    }
}

/// Extract one entry from a ZIP archive held in memory.
fn extract_entry(archive: &[u8], entry_name: &str) -> Result<Vec<u8>> {
    let mut zip = zip::ZipArchive::new(Cursor::new(archive))?;
    let mut entry = zip.by_name(entry_name)?;

    let mut content = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut content)?;
    Ok(content)
}

fn parse_spreadsheet(
    content: &[u8],
    header_row: usize,
    columns: &FeedColumns,
) -> Result<Vec<InventoryRecord>> {
    let mut workbook = Xls::new(Cursor::new(content))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(FeedError::EmptyWorkbook)??;

    records_from_range(&range, header_row, columns)
}

/// Map spreadsheet rows below the header to inventory records.
///
/// Rows with an empty code cell are section headings or spacers and are
/// skipped. An empty price cell yields a record without a price.
fn records_from_range(
    range: &Range<Data>,
    header_row: usize,
    columns: &FeedColumns,
) -> Result<Vec<InventoryRecord>> {
    let mut rows = range.rows().skip(header_row);

    let header: Vec<String> = rows
        .next()
        .map(|row| row.iter().map(cell_text).collect())
        .unwrap_or_default();

    let code_idx = column_index(&header, &columns.code)?;
    let quantity_idx = column_index(&header, &columns.quantity)?;
    let price_idx = column_index(&header, &columns.price)?;

    let mut records = Vec::new();
    for row in rows {
        let code = cell_text(row.get(code_idx).unwrap_or(&Data::Empty));
        if code.is_empty() {
            continue;
        }

        let quantity = cell_text(row.get(quantity_idx).unwrap_or(&Data::Empty));
        let price = match cell_text(row.get(price_idx).unwrap_or(&Data::Empty)) {
            p if p.is_empty() => None,
            p => Some(p),
        };

        records.push(InventoryRecord::new(code, quantity, price));
    }

    Ok(records)
}

fn column_index(header: &[String], caption: &str) -> Result<usize> {
    header
        .iter()
        .position(|cell| cell == caption)
        .ok_or_else(|| FeedError::MissingColumn(caption.to_string()))
}

/// Render a cell the way the feed means it: whole numbers without a
/// fractional part, text trimmed.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Empty => String::new(),
        other => other.to_string().trim().to_string(),
    }
}
