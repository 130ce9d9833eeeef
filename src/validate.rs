use crate::core::types::{ProductInput, ProductPatch};
use crate::error::{Error, Result};

pub const MAX_NAME_LEN: usize = 200;
pub const MIN_BARCODE_LEN: usize = 3;
pub const MAX_SIZE_VALUE: f64 = 100_000.0;
pub const MAX_PRICE: f64 = 1_000_000.0;

/// Checks every field of a new-product submission. Limits mirror what the
/// add-product form enforces.
pub fn validate_product_input(input: &ProductInput) -> Result<()> {
    validate_name(&input.name)?;
    validate_barcode(input.barcode.as_deref())?;
    validate_size_value(input.size_value)?;
    validate_price("Buying price", input.buying_price)?;
    validate_price("Selling price", input.selling_price)?;
    Ok(())
}

/// Checks only the fields a patch actually sets.
pub fn validate_product_patch(patch: &ProductPatch) -> Result<()> {
    if let Some(name) = &patch.name {
        validate_name(name)?;
    }
    if let Some(barcode) = &patch.barcode {
        validate_barcode(barcode.as_deref())?;
    }
    if let Some(size_value) = patch.size_value {
        validate_size_value(size_value)?;
    }
    if let Some(buying) = patch.buying_price {
        validate_price("Buying price", buying)?;
    }
    if let Some(selling) = patch.selling_price {
        validate_price("Selling price", selling)?;
    }
    Ok(())
}

pub fn validate_margin(percent: f64) -> Result<()> {
    if percent < 0.0 {
        return Err(Error::Validation("Margin cannot be negative".to_string()));
    }
    if percent > 100.0 {
        return Err(Error::Validation("Margin cannot exceed 100%".to_string()));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation("Product name is required".to_string()));
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(Error::Validation("Product name too long".to_string()));
    }
    Ok(())
}

fn validate_barcode(barcode: Option<&str>) -> Result<()> {
    // An empty barcode counts as absent.
    if let Some(code) = barcode {
        if !code.is_empty() && code.len() < MIN_BARCODE_LEN {
            return Err(Error::Validation(
                "Barcode must be at least 3 characters".to_string(),
            ));
        }
    }
    Ok(())
}

fn validate_size_value(value: f64) -> Result<()> {
    if !(value > 0.0) {
        return Err(Error::Validation("Size value must be positive".to_string()));
    }
    if value > MAX_SIZE_VALUE {
        return Err(Error::Validation("Size value too large".to_string()));
    }
    Ok(())
}

fn validate_price(field: &str, value: f64) -> Result<()> {
    if !(value > 0.0) {
        return Err(Error::Validation(format!("{field} must be positive")));
    }
    if value > MAX_PRICE {
        return Err(Error::Validation(format!("{field} too large")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{SizeUnit, StockStatus};

    fn input() -> ProductInput {
        ProductInput {
            name: "Tata Salt".to_string(),
            barcode: Some("8901058851625".to_string()),
            aliases: vec!["namak".to_string()],
            size_value: 1.0,
            size_unit: SizeUnit::Kg,
            buying_price: 20.0,
            selling_price: 22.0,
            stock_status: Some(StockStatus::Ok),
        }
    }

    #[test]
    fn accepts_a_complete_product() {
        assert!(validate_product_input(&input()).is_ok());
    }

    #[test]
    fn rejects_blank_name() {
        let mut bad = input();
        bad.name = "  ".to_string();
        assert!(matches!(
            validate_product_input(&bad),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn rejects_short_barcode_but_allows_empty() {
        let mut bad = input();
        bad.barcode = Some("12".to_string());
        assert!(validate_product_input(&bad).is_err());

        let mut empty = input();
        empty.barcode = Some(String::new());
        assert!(validate_product_input(&empty).is_ok());
    }

    #[test]
    fn rejects_non_positive_prices() {
        let mut bad = input();
        bad.selling_price = 0.0;
        assert!(validate_product_input(&bad).is_err());
    }

    #[test]
    fn rejects_oversized_values() {
        let mut bad = input();
        bad.size_value = 200_000.0;
        assert!(validate_product_input(&bad).is_err());
    }

    #[test]
    fn patch_checks_only_present_fields() {
        let patch = ProductPatch {
            selling_price: Some(25.0),
            ..ProductPatch::default()
        };
        assert!(validate_product_patch(&patch).is_ok());

        let bad = ProductPatch {
            name: Some(String::new()),
            ..ProductPatch::default()
        };
        assert!(validate_product_patch(&bad).is_err());
    }

    #[test]
    fn margin_bounds_are_inclusive() {
        assert!(validate_margin(0.0).is_ok());
        assert!(validate_margin(100.0).is_ok());
        assert!(validate_margin(-1.0).is_err());
        assert!(validate_margin(101.0).is_err());
    }
}
