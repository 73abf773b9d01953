//! Inventory records and feed normalization rules
//!
//! One `InventoryRecord` corresponds to one row of the supplier's stock
//! spreadsheet. The quantity and price columns arrive as loosely formatted
//! strings and are normalized here before any payload is built.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid quantity value: '{0}'")]
    InvalidQuantity(String),

    #[error("Invalid price value: '{0}'")]
    InvalidPrice(String),
}

/// One row of the supplier stock feed.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryRecord {
    /// Item code; matched against marketplace offer identifiers.
    pub code: String,
    /// Raw quantity cell. May be a sentinel like ">10" rather than a number.
    pub quantity: String,
    /// Raw price cell, e.g. "5990.00 руб.". Absent for some rows.
    pub price: Option<String>,
}

impl InventoryRecord {
    pub fn new(
        code: impl Into<String>,
        quantity: impl Into<String>,
        price: Option<String>,
    ) -> Self {
        Self {
            code: code.into(),
            quantity: quantity.into(),
            price,
        }
    }
}

/// Quantity reported for items the feed marks as ">10" (more than ten in stock).
pub const OVERSTOCK_QUANTITY: i64 = 100;

/// Normalize a raw quantity cell to a stock count.
///
/// The feed encodes "more than 10 in stock" as the literal `">10"`, reported
/// as 100. A literal `"1"` is reported as 0: the last unit stays reserved and
/// is not sold through the marketplaces.
// TODO: confirm with the product owner that "1" -> 0 is intentional policy
// and not a leftover from the sentinel handling.
pub fn normalize_quantity(raw: &str) -> Result<i64, ParseError> {
    match raw {
        ">10" => Ok(OVERSTOCK_QUANTITY),
        "1" => Ok(0),
        other => other
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidQuantity(other.to_string())),
    }
}

/// Normalize a raw price cell to a whole-unit digit string.
///
/// Takes the part before the first `.` and strips every non-digit character,
/// so `"5990.00 руб."` becomes `"5990"`. Returns an error if no digits
/// remain. Callers convert to an integer where their payload schema needs one.
pub fn normalize_price(raw: &str) -> Result<String, ParseError> {
    let integer_part = raw.split('.').next().unwrap_or(raw);
    let digits: String = integer_part.chars().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return Err(ParseError::InvalidPrice(raw.to_string()));
    }

    Ok(digits)
}
