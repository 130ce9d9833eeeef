use crate::catalog::Catalog;
use crate::core::aliases;
use crate::core::dictionary::Dictionary;
use crate::core::expansion;
use crate::core::matcher;
use crate::core::types::{
    Language, PageParams, Paginated, Product, ProductId, ProductInput, ProductPatch, Settings,
    StockStatus,
};
use crate::error::Result;
use crate::format;
use crate::mandi;
use crate::persistence::{self, Snapshot};
use crate::validate;
use chrono::Local;
use std::path::{Path, PathBuf};

/// A search never returns more rows than the results screen shows.
pub const MAX_SEARCH_RESULTS: usize = 15;

/// The whole shop in one value: the static term dictionary, the product
/// catalog and the store settings, with the search functions wired to
/// them. Built once at startup; the dictionary is read-only thereafter.
pub struct DukaanEngine {
    dictionary: Dictionary,
    catalog: Catalog,
    settings: Settings,
    snapshot_path: Option<PathBuf>,
}

impl DukaanEngine {
    pub fn new() -> Self {
        Self {
            dictionary: Dictionary::new(),
            catalog: Catalog::new(),
            settings: Settings::default(),
            snapshot_path: None,
        }
    }

    /// Restores the catalog and settings from a snapshot, or starts empty
    /// when there is none (first run, or an unreadable file).
    pub fn from_file_or_new(path: &Path) -> Self {
        let mut engine = persistence::load_from_disk(path)
            .map(|snapshot| Self {
                dictionary: Dictionary::new(),
                catalog: snapshot.catalog,
                settings: snapshot.settings,
                snapshot_path: None,
            })
            .unwrap_or_else(|_| Self::new());
        engine.snapshot_path = Some(path.to_path_buf());
        engine
    }

    pub fn save(&self) -> Result<()> {
        if let Some(path) = &self.snapshot_path {
            let snapshot = Snapshot {
                catalog: self.catalog.clone(),
                settings: self.settings.clone(),
            };
            persistence::save_to_disk(&snapshot, path)
        } else {
            Ok(())
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Filters the catalog for a query, capped at the screenful the
    /// results list shows. A blank query means "no filter": the matcher is
    /// never invoked with it, the first products come back as-is.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let products = self.catalog.products();
        if query.trim().is_empty() {
            return products.iter().take(MAX_SEARCH_RESULTS).collect();
        }

        products
            .iter()
            .filter(|p| matcher::matches_product(&self.dictionary, query, &p.name, &p.aliases))
            .take(MAX_SEARCH_RESULTS)
            .collect()
    }

    pub fn expand_query(&self, query: &str) -> String {
        expansion::expand_search_query(&self.dictionary, query)
    }

    pub fn suggest_aliases(&self, product_name: &str) -> Vec<String> {
        aliases::suggest_aliases(&self.dictionary, product_name)
    }

    pub fn add_product(&mut self, input: ProductInput) -> Result<Product> {
        self.catalog.create(input)
    }

    pub fn update_product(&mut self, id: ProductId, patch: ProductPatch) -> Result<Product> {
        self.catalog.update(id, patch)
    }

    pub fn remove_product(&mut self, id: ProductId) -> Result<()> {
        self.catalog.remove(id)
    }

    pub fn set_stock_status(&mut self, id: ProductId, status: StockStatus) -> Result<()> {
        self.catalog.set_stock_status(id, status)
    }

    pub fn list_products(
        &self,
        params: PageParams,
        status: Option<StockStatus>,
    ) -> Paginated<Product> {
        self.catalog.list(params, status)
    }

    /// The shareable restock list for everything currently low or out.
    pub fn mandi_list(&self) -> String {
        let items = self.catalog.low_stock_items();
        mandi::build_mandi_list(&items, Local::now().date_naive())
    }

    /// Selling price pre-fill from the store's default margin.
    pub fn default_selling_price(&self, buying_price: f64) -> f64 {
        format::calculate_selling_price(buying_price, self.settings.default_margin)
    }

    pub fn update_settings(
        &mut self,
        default_margin: Option<f64>,
        language: Option<Language>,
    ) -> Result<Settings> {
        if let Some(margin) = default_margin {
            validate::validate_margin(margin)?;
            self.settings.default_margin = margin;
        }
        if let Some(language) = language {
            self.settings.language = language;
        }
        Ok(self.settings.clone())
    }
}
