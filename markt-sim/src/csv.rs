use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use markt_shared::{format_date, parse_date};

/// Column header of the product file.
pub const HEADER: &str = "Name,Base Price,Expiry Date,Start Quality,Store Date,Product Group Name";

/// Sentinel expiry value for products of non-expiring groups.
pub const NO_EXPIRY_SENTINEL: &str = "31.12.9999";

/// One row of the product file, not yet bound to a product group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CsvProduct {
    pub name: String,
    pub base_price: f64,
    /// `None` when the row carries the no-expiry sentinel.
    pub expiry_date: Option<NaiveDate>,
    pub start_quality: i32,
    pub store_date: NaiveDate,
    pub group_name: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error("cannot access product file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: expected 6 fields, got {got}")]
    FieldCount { line: usize, got: usize },

    #[error("line {line}: invalid {field}: '{value}'")]
    InvalidField {
        line: usize,
        field: &'static str,
        value: String,
    },
}

/// Read products from a CSV file.
///
/// IO failures are the caller's problem; malformed rows are reported and
/// skipped so a single bad record never takes the import down.
pub fn import_products(path: impl AsRef<Path>) -> Result<Vec<CsvProduct>, CsvError> {
    let contents = fs::read_to_string(path)?;

    let mut products = Vec::new();
    for (index, line) in contents.lines().enumerate().skip(1) {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(index + 1, line) {
            Ok(product) => products.push(product),
            Err(error) => tracing::warn!(%error, "skipping malformed product row"),
        }
    }
    Ok(products)
}

/// Write products to a CSV file, header first.
pub fn export_products(path: impl AsRef<Path>, products: &[CsvProduct]) -> Result<(), CsvError> {
    let mut out = String::from(HEADER);
    out.push('\n');
    for product in products {
        out.push_str(&format_line(product));
        out.push('\n');
    }
    fs::write(path, out)?;
    Ok(())
}

fn parse_line(line_number: usize, line: &str) -> Result<CsvProduct, CsvError> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != 6 {
        return Err(CsvError::FieldCount {
            line: line_number,
            got: fields.len(),
        });
    }

    let invalid = |field: &'static str, value: &str| CsvError::InvalidField {
        line: line_number,
        field,
        value: value.to_string(),
    };

    let base_price: f64 = fields[1]
        .parse()
        .map_err(|_| invalid("base price", fields[1]))?;
    let expiry_date = if fields[2] == NO_EXPIRY_SENTINEL {
        None
    } else {
        Some(parse_date(fields[2]).map_err(|_| invalid("expiry date", fields[2]))?)
    };
    let start_quality: i32 = fields[3]
        .parse()
        .map_err(|_| invalid("start quality", fields[3]))?;
    let store_date = parse_date(fields[4]).map_err(|_| invalid("store date", fields[4]))?;

    Ok(CsvProduct {
        name: fields[0].to_string(),
        base_price,
        expiry_date,
        start_quality,
        store_date,
        group_name: fields[5].to_string(),
    })
}

fn format_line(product: &CsvProduct) -> String {
    let expiry = product
        .expiry_date
        .map_or_else(|| NO_EXPIRY_SENTINEL.to_string(), format_date);

    format!(
        "{},{},{},{},{},{}",
        product.name,
        product.base_price,
        expiry,
        product.start_quality,
        format_date(product.store_date),
        product.group_name
    )
}

/// The stock product assortment, shelved and expiring relative to
/// `start_date`.
pub fn seed_products(start_date: NaiveDate) -> Vec<CsvProduct> {
    let expiring = |name: &str, base_price: f64, quality: i32, days: u64, group: &str| CsvProduct {
        name: name.to_string(),
        base_price,
        expiry_date: Some(start_date + chrono::Days::new(days)),
        start_quality: quality,
        store_date: start_date,
        group_name: group.to_string(),
    };
    let everlasting = |name: &str, base_price: f64, quality: i32| CsvProduct {
        name: name.to_string(),
        base_price,
        expiry_date: None,
        start_quality: quality,
        store_date: start_date,
        group_name: "Wine".to_string(),
    };

    vec![
        expiring("Gouda", 75.0, 40, 60, "Cheese"),
        expiring("Cheddar", 65.0, 140, 84, "Cheese"),
        expiring("Tilsiter", 53.0, 90, 51, "Cheese"),
        everlasting("Burgtrocken", 40.0, 20),
        everlasting("Delheim", 70.0, 40),
        everlasting("Bodegas", 90.0, 50),
        expiring("Gefluegelbrust", 7.0, 2, 9, "Meat"),
        expiring("Putenbrust", 6.0, 2, 11, "Meat"),
        expiring("Rinderfilet", 10.0, 2, 12, "Meat"),
    ]
}
