use crate::error::Error;
use crate::format;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A unique identifier for a catalog product.
pub type ProductId = Uuid;

/// Traffic-light stock level. The owner taps through these instead of
/// counting units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StockStatus {
    Ok,
    Low,
    Empty,
}

impl StockStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Ok => "Full",
            StockStatus::Low => "Low",
            StockStatus::Empty => "Empty",
        }
    }

    pub fn hindi_label(&self) -> &'static str {
        match self {
            StockStatus::Ok => "भरा",
            StockStatus::Low => "कम",
            StockStatus::Empty => "खत्म",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StockStatus::Ok => "🟢",
            StockStatus::Low => "🟡",
            StockStatus::Empty => "🔴",
        }
    }
}

impl FromStr for StockStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ok" => Ok(StockStatus::Ok),
            "low" => Ok(StockStatus::Low),
            "empty" => Ok(StockStatus::Empty),
            _ => Err(Error::Validation(
                "Invalid status. Use: OK, LOW, or EMPTY".to_string(),
            )),
        }
    }
}

/// Package size unit as printed on the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeUnit {
    #[serde(rename = "kg")]
    Kg,
    #[serde(rename = "g")]
    G,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "mL")]
    Ml,
    #[serde(rename = "pcs")]
    Pcs,
}

impl SizeUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            SizeUnit::Kg => "kg",
            SizeUnit::G => "g",
            SizeUnit::L => "L",
            SizeUnit::Ml => "mL",
            SizeUnit::Pcs => "pcs",
        }
    }

    pub fn hindi_label(&self) -> &'static str {
        match self {
            SizeUnit::Kg => "किलो",
            SizeUnit::G => "ग्राम",
            SizeUnit::L => "लीटर",
            SizeUnit::Ml => "मि.ली",
            SizeUnit::Pcs => "पीस",
        }
    }
}

impl FromStr for SizeUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kg" => Ok(SizeUnit::Kg),
            "g" => Ok(SizeUnit::G),
            "l" => Ok(SizeUnit::L),
            "ml" => Ok(SizeUnit::Ml),
            "pcs" => Ok(SizeUnit::Pcs),
            _ => Err(Error::Validation(
                "Invalid unit. Use: kg, g, L, mL, pcs".to_string(),
            )),
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Stock record attached to every product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stock {
    pub status: StockStatus,
    pub last_checked: DateTime<Utc>,
}

/// A registered product. The search core only ever reads `name` and
/// `aliases`; everything else belongs to the catalog and pricing side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub barcode: Option<String>,
    /// Owner-approved synonyms stored on the record to aid search,
    /// distinct from the static dictionary content.
    pub aliases: Vec<String>,
    pub size_value: f64,
    pub size_unit: SizeUnit,
    pub buying_price: f64,
    pub selling_price: f64,
    pub stock: Stock,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Profit margin percentage over the buying price.
    pub fn margin(&self) -> f64 {
        format::calculate_margin(self.buying_price, self.selling_price)
    }

    /// Printable size, e.g. "1 kg" or "500 g".
    pub fn size(&self) -> String {
        format::format_size(self.size_value, self.size_unit)
    }
}

/// Fields the owner fills in when registering a product.
#[derive(Debug, Clone)]
pub struct ProductInput {
    pub name: String,
    pub barcode: Option<String>,
    pub aliases: Vec<String>,
    pub size_value: f64,
    pub size_unit: SizeUnit,
    pub buying_price: f64,
    pub selling_price: f64,
    pub stock_status: Option<StockStatus>,
}

/// Partial update; `None` leaves a field untouched. The barcode is doubly
/// wrapped so it can be cleared as well as changed.
#[derive(Debug, Clone, Default)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub barcode: Option<Option<String>>,
    pub aliases: Option<Vec<String>>,
    pub size_value: Option<f64>,
    pub size_unit: Option<SizeUnit>,
    pub buying_price: Option<f64>,
    pub selling_price: Option<f64>,
}

/// Display language for labels and shared lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Hi,
    En,
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hi" => Ok(Language::Hi),
            "en" => Ok(Language::En),
            _ => Err(Error::Validation("Invalid language. Use: hi or en".to_string())),
        }
    }
}

/// Store-wide preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Pre-fills the selling price when the owner leaves it blank.
    pub default_margin: f64,
    pub language: Language,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_margin: 10.0,
            language: Language::Hi,
        }
    }
}

/// One line of the restock shopping list.
#[derive(Debug, Clone, Serialize)]
pub struct MandiItem {
    pub name: String,
    pub size: String,
    pub last_buying_price: f64,
    pub status: StockStatus,
}

#[derive(Debug, Clone, Copy)]
pub struct PageParams {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageParams {
    fn default() -> Self {
        Self { page: 1, limit: 20 }
    }
}

/// One page of catalog rows plus the counts a listing screen needs.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub page: usize,
    pub limit: usize,
    pub total: usize,
    pub total_pages: usize,
}
