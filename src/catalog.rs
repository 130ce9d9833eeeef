use crate::core::types::{
    MandiItem, PageParams, Paginated, Product, ProductId, ProductInput, ProductPatch, Stock,
    StockStatus,
};
use crate::error::{Error, Result};
use crate::validate;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Listing screens never ask for more than this many rows at once.
pub const MAX_PAGE_LIMIT: usize = 100;

/// The in-memory product catalog. A single store's worth of items, held
/// flat; the engine owns one and the snapshot persists it whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Registers a product. A fresh stock record is attached, defaulting
    /// to `OK` unless the input says otherwise.
    pub fn create(&mut self, input: ProductInput) -> Result<Product> {
        validate::validate_product_input(&input)?;

        let barcode = input.barcode.filter(|code| !code.is_empty());
        if let Some(code) = &barcode {
            if self
                .products
                .iter()
                .any(|p| p.barcode.as_deref() == Some(code.as_str()))
            {
                return Err(Error::DuplicateBarcode(code.clone()));
            }
        }

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: input.name,
            barcode,
            aliases: input.aliases,
            size_value: input.size_value,
            size_unit: input.size_unit,
            buying_price: input.buying_price,
            selling_price: input.selling_price,
            stock: Stock {
                status: input.stock_status.unwrap_or(StockStatus::Ok),
                last_checked: now,
            },
            created_at: now,
        };

        info!(name = %product.name, id = %product.id, "product created");
        self.products.push(product.clone());
        Ok(product)
    }

    pub fn get(&self, id: ProductId) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or(Error::NotFound("Product"))
    }

    pub fn get_by_barcode(&self, barcode: &str) -> Result<&Product> {
        self.products
            .iter()
            .find(|p| p.barcode.as_deref() == Some(barcode))
            .ok_or(Error::NotFound("Product"))
    }

    /// One page of products, newest first, optionally narrowed to a stock
    /// status.
    pub fn list(&self, params: PageParams, status: Option<StockStatus>) -> Paginated<Product> {
        let page = params.page.max(1);
        let limit = params.limit.clamp(1, MAX_PAGE_LIMIT);

        let mut rows: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| status.map_or(true, |s| p.stock.status == s))
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = rows.len();
        let total_pages = (total + limit - 1) / limit;
        let data = rows
            .into_iter()
            .skip((page - 1) * limit)
            .take(limit)
            .cloned()
            .collect();

        Paginated {
            data,
            page,
            limit,
            total,
            total_pages,
        }
    }

    /// Applies a partial update and returns the new state of the product.
    pub fn update(&mut self, id: ProductId, patch: ProductPatch) -> Result<Product> {
        validate::validate_product_patch(&patch)?;

        if let Some(Some(code)) = &patch.barcode {
            if !code.is_empty()
                && self
                    .products
                    .iter()
                    .any(|p| p.id != id && p.barcode.as_deref() == Some(code.as_str()))
            {
                return Err(Error::DuplicateBarcode(code.clone()));
            }
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::NotFound("Product"))?;

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(barcode) = patch.barcode {
            product.barcode = barcode.filter(|code| !code.is_empty());
        }
        if let Some(aliases) = patch.aliases {
            product.aliases = aliases;
        }
        if let Some(size_value) = patch.size_value {
            product.size_value = size_value;
        }
        if let Some(size_unit) = patch.size_unit {
            product.size_unit = size_unit;
        }
        if let Some(buying) = patch.buying_price {
            product.buying_price = buying;
        }
        if let Some(selling) = patch.selling_price {
            product.selling_price = selling;
        }

        debug!(id = %id, "product updated");
        Ok(product.clone())
    }

    /// Deletes a product and its stock record.
    pub fn remove(&mut self, id: ProductId) -> Result<()> {
        let index = self
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(Error::NotFound("Product"))?;
        let removed = self.products.remove(index);
        info!(name = %removed.name, "product removed");
        Ok(())
    }

    /// Flips the traffic light and stamps the check time.
    pub fn set_stock_status(&mut self, id: ProductId, status: StockStatus) -> Result<()> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(Error::NotFound("Product"))?;
        product.stock.status = status;
        product.stock.last_checked = Utc::now();
        debug!(name = %product.name, status = status.label(), "stock updated");
        Ok(())
    }

    /// Everything running low or out, sorted by name, ready for the Mandi
    /// list.
    pub fn low_stock_items(&self) -> Vec<MandiItem> {
        let mut items: Vec<MandiItem> = self
            .products
            .iter()
            .filter(|p| p.stock.status != StockStatus::Ok)
            .map(|p| MandiItem {
                name: p.name.clone(),
                size: p.size(),
                last_buying_price: p.buying_price,
                status: p.stock.status,
            })
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::SizeUnit;
    use crate::seed;

    fn seeded() -> Catalog {
        let mut catalog = Catalog::new();
        for input in seed::demo_products() {
            catalog.create(input).unwrap();
        }
        catalog
    }

    fn minimal(name: &str, barcode: Option<&str>) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            barcode: barcode.map(|b| b.to_string()),
            aliases: Vec::new(),
            size_value: 1.0,
            size_unit: SizeUnit::Kg,
            buying_price: 10.0,
            selling_price: 12.0,
            stock_status: None,
        }
    }

    #[test]
    fn create_defaults_to_ok_stock() {
        let mut catalog = Catalog::new();
        let product = catalog.create(minimal("Tata Salt", None)).unwrap();
        assert_eq!(product.stock.status, StockStatus::Ok);
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn create_rejects_duplicate_barcode() {
        let mut catalog = Catalog::new();
        catalog.create(minimal("Tata Salt", Some("890105"))).unwrap();
        let err = catalog
            .create(minimal("Other Salt", Some("890105")))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateBarcode(_)));
    }

    #[test]
    fn create_rejects_invalid_input() {
        let mut catalog = Catalog::new();
        assert!(catalog.create(minimal("", None)).is_err());
    }

    #[test]
    fn lookup_by_id_and_barcode() {
        let mut catalog = Catalog::new();
        let created = catalog.create(minimal("Tata Salt", Some("890105"))).unwrap();
        assert_eq!(catalog.get(created.id).unwrap().name, "Tata Salt");
        assert_eq!(catalog.get_by_barcode("890105").unwrap().id, created.id);
        assert!(matches!(
            catalog.get(Uuid::new_v4()),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn list_paginates_and_counts() {
        let catalog = seeded();
        let page = catalog.list(PageParams { page: 1, limit: 5 }, None);
        assert_eq!(page.data.len(), 5);
        assert_eq!(page.total, 16);
        assert_eq!(page.total_pages, 4);

        let last = catalog.list(PageParams { page: 4, limit: 5 }, None);
        assert_eq!(last.data.len(), 1);
    }

    #[test]
    fn list_filters_by_stock_status() {
        let catalog = seeded();
        let low = catalog.list(PageParams::default(), Some(StockStatus::Low));
        assert_eq!(low.total, 4);
        assert!(low.data.iter().all(|p| p.stock.status == StockStatus::Low));
    }

    #[test]
    fn update_applies_partial_patch() {
        let mut catalog = Catalog::new();
        let created = catalog.create(minimal("Tata Salt", None)).unwrap();
        let updated = catalog
            .update(
                created.id,
                ProductPatch {
                    selling_price: Some(14.0),
                    ..ProductPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.selling_price, 14.0);
        assert_eq!(updated.buying_price, 10.0);
    }

    #[test]
    fn remove_deletes_the_product() {
        let mut catalog = Catalog::new();
        let created = catalog.create(minimal("Tata Salt", None)).unwrap();
        catalog.remove(created.id).unwrap();
        assert!(catalog.is_empty());
        assert!(matches!(catalog.remove(created.id), Err(Error::NotFound(_))));
    }

    #[test]
    fn stock_status_update_stamps_check_time() {
        let mut catalog = Catalog::new();
        let created = catalog.create(minimal("Tata Salt", None)).unwrap();
        catalog
            .set_stock_status(created.id, StockStatus::Empty)
            .unwrap();
        let stored = catalog.get(created.id).unwrap();
        assert_eq!(stored.stock.status, StockStatus::Empty);
        assert!(stored.stock.last_checked >= created.stock.last_checked);
    }

    #[test]
    fn low_stock_items_exclude_ok_and_sort_by_name() {
        let catalog = seeded();
        let items = catalog.low_stock_items();
        assert_eq!(items.len(), 6);
        assert!(items.iter().all(|i| i.status != StockStatus::Ok));
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
