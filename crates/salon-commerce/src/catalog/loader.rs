//! CSV catalog parsing.
//!
//! The spreadsheet export has one product per row and a header naming the
//! columns. Multi-value cells (designer, silhouette, color, sizes) hold
//! comma-separated values and are quoted in the export.

use std::collections::{HashMap, HashSet};
use std::fmt;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;

use crate::catalog::Product;
use crate::error::LoadError;
use crate::ids::ProductId;

/// Columns the header row must contain.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "id",
    "name",
    "model",
    "price",
    "designer",
    "silhouette",
    "color",
    "sizes",
    "category",
    "image",
    "description",
];

/// Why a data row did not make it into the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The `id` cell is blank.
    MissingId,
    /// The `price` cell holds no leading digits.
    InvalidPrice { value: String },
    /// A multi-value cell has no values.
    EmptyField { column: &'static str },
    /// An earlier row already used this id.
    DuplicateId { id: String },
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingId => write!(f, "missing id"),
            SkipReason::InvalidPrice { value } => write!(f, "invalid price {:?}", value),
            SkipReason::EmptyField { column } => write!(f, "empty {} field", column),
            SkipReason::DuplicateId { id } => write!(f, "duplicate id {}", id),
        }
    }
}

/// A row that was left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based line number in the CSV text.
    pub line: u64,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Summary of a catalog load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Data rows read, excluding the header and blank lines.
    pub rows_read: usize,
    /// Products that made it into the catalog.
    pub products_loaded: usize,
    /// Rows left out, in file order.
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Result of parsing a catalog export.
#[derive(Debug, Clone)]
pub struct ParsedCatalog {
    pub products: Vec<Product>,
    pub report: LoadReport,
}

/// Parse an integer the way a spreadsheet cell is read: whitespace trimmed,
/// optional `+`, then the longest run of leading ASCII digits.
///
/// Returns `None` when there are no leading digits (this includes negative
/// numbers) or the value does not fit in a `u64`.
///
/// ```
/// use salon_commerce::catalog::parse_int_prefix;
/// assert_eq!(parse_int_prefix(" 5000 руб"), Some(5000));
/// assert_eq!(parse_int_prefix("-5"), None);
/// ```
pub fn parse_int_prefix(raw: &str) -> Option<u64> {
    let s = raw.trim();
    let s = s.strip_prefix('+').unwrap_or(s);
    let end = s
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    s[..end].parse().ok()
}

/// Split a multi-value cell on commas, trimming each value and dropping
/// blanks.
pub fn split_multi(cell: &str) -> Vec<String> {
    cell.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Column positions resolved from the header row.
struct Columns(HashMap<&'static str, usize>);

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let mut map = HashMap::with_capacity(REQUIRED_COLUMNS.len());
        for column in REQUIRED_COLUMNS {
            let idx = headers
                .iter()
                .position(|h| h == column)
                .ok_or(LoadError::MissingColumn(column))?;
            map.insert(column, idx);
        }
        Ok(Self(map))
    }

    /// Cell text for `column`; short rows read as blank.
    fn get<'r>(&self, record: &'r StringRecord, column: &'static str) -> &'r str {
        self.0
            .get(column)
            .and_then(|&idx| record.get(idx))
            .unwrap_or("")
    }
}

/// Parse CSV text into products.
///
/// Fails only when the text cannot be read as CSV or the header lacks a
/// required column. Individual bad rows are skipped and listed in the report.
pub fn parse_catalog(text: &str) -> Result<ParsedCatalog, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let columns = Columns::resolve(reader.headers()?)?;

    let mut products = Vec::new();
    let mut report = LoadReport::default();
    let mut seen: HashSet<String> = HashSet::new();

    for record in reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        report.rows_read += 1;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        match parse_row(&columns, &record) {
            Ok(product) => {
                if !seen.insert(product.id.as_str().to_string()) {
                    report.skipped.push(SkippedRow {
                        line,
                        reason: SkipReason::DuplicateId {
                            id: product.id.into_inner(),
                        },
                    });
                    continue;
                }
                products.push(product);
            }
            Err(reason) => report.skipped.push(SkippedRow { line, reason }),
        }
    }

    report.products_loaded = products.len();
    for skipped in &report.skipped {
        tracing::warn!(line = skipped.line, reason = %skipped.reason, "skipping catalog row");
    }

    Ok(ParsedCatalog { products, report })
}

fn parse_row(columns: &Columns, record: &StringRecord) -> Result<Product, SkipReason> {
    let id = columns.get(record, "id").trim();
    if id.is_empty() {
        return Err(SkipReason::MissingId);
    }

    let raw_price = columns.get(record, "price");
    let price = parse_int_prefix(raw_price).ok_or_else(|| SkipReason::InvalidPrice {
        value: raw_price.to_string(),
    })?;

    let multi = |column: &'static str| {
        let values = split_multi(columns.get(record, column));
        if values.is_empty() {
            Err(SkipReason::EmptyField { column })
        } else {
            Ok(values)
        }
    };

    Ok(Product {
        id: ProductId::new(id),
        name: columns.get(record, "name").to_string(),
        model: columns.get(record, "model").to_string(),
        price,
        designers: multi("designer")?,
        silhouettes: multi("silhouette")?,
        colors: multi("color")?,
        sizes: multi("sizes")?,
        category: columns.get(record, "category").trim().to_string(),
        image: columns.get(record, "image").to_string(),
        description: columns.get(record, "description").to_string(),
    })
}
