use crate::core::types::{ProductInput, SizeUnit, StockStatus};

fn product(
    name: &str,
    barcode: Option<&str>,
    aliases: &[&str],
    size_value: f64,
    size_unit: SizeUnit,
    buying_price: f64,
    selling_price: f64,
    stock_status: StockStatus,
) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        barcode: barcode.map(|code| code.to_string()),
        aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
        size_value,
        size_unit,
        buying_price,
        selling_price,
        stock_status: Some(stock_status),
    }
}

/// Sample kirana catalog for the `seed` command and for tests.
pub fn demo_products() -> Vec<ProductInput> {
    use SizeUnit::*;
    use StockStatus::*;

    vec![
        // Staples
        product(
            "Tata Salt",
            Some("8901058851625"),
            &["namak", "salt", "iodine salt"],
            1.0,
            Kg,
            20.0,
            22.0,
            Ok,
        ),
        product(
            "India Gate Basmati Rice",
            Some("8901491101219"),
            &["chawal", "rice", "basmati"],
            5.0,
            Kg,
            450.0,
            500.0,
            Low,
        ),
        product(
            "Fortune Sunflower Oil",
            Some("8901072001014"),
            &["tel", "oil", "cooking oil"],
            1.0,
            L,
            120.0,
            135.0,
            Ok,
        ),
        product(
            "Toor Dal (Arhar)",
            None,
            &["dal", "arhar", "toor", "pulses"],
            1.0,
            Kg,
            95.0,
            110.0,
            Empty,
        ),
        product(
            "Aashirvaad Atta",
            Some("8901725130503"),
            &["atta", "flour", "wheat flour", "gehun"],
            5.0,
            Kg,
            185.0,
            205.0,
            Ok,
        ),
        // Snacks & instant food
        product(
            "Maggi 2-Minute Noodles",
            Some("8901058840094"),
            &["maggi", "noodles", "instant noodles"],
            280.0,
            G,
            48.0,
            52.0,
            Low,
        ),
        product(
            "Parle-G Biscuits",
            Some("8901719106088"),
            &["parle", "biscuits", "glucose biscuits"],
            1.0,
            Kg,
            50.0,
            55.0,
            Ok,
        ),
        product(
            "Haldiram Bhujia",
            Some("8904063209214"),
            &["bhujia", "namkeen", "snacks"],
            400.0,
            G,
            80.0,
            90.0,
            Ok,
        ),
        // Dairy & beverages
        product(
            "Amul Taaza Milk",
            Some("8901088100201"),
            &["milk", "doodh", "amul"],
            500.0,
            Ml,
            28.0,
            30.0,
            Empty,
        ),
        product(
            "Red Label Tea",
            Some("8901030714184"),
            &["chai", "tea", "chai patti"],
            500.0,
            G,
            180.0,
            200.0,
            Low,
        ),
        product(
            "Bru Instant Coffee",
            Some("8901063006607"),
            &["coffee", "instant coffee"],
            200.0,
            G,
            240.0,
            265.0,
            Ok,
        ),
        // Personal care
        product(
            "Colgate Toothpaste",
            Some("8901012101001"),
            &["toothpaste", "dant manjan", "colgate"],
            200.0,
            G,
            95.0,
            105.0,
            Ok,
        ),
        product(
            "Clinic Plus Shampoo",
            Some("8901030676109"),
            &["shampoo", "hair wash"],
            180.0,
            Ml,
            70.0,
            78.0,
            Ok,
        ),
        product(
            "Lux Soap",
            Some("8901030612510"),
            &["soap", "sabun", "bathing soap"],
            125.0,
            G,
            32.0,
            35.0,
            Ok,
        ),
        // Household
        product(
            "Vim Dishwash Bar",
            Some("8901030611100"),
            &["vim", "dishwash", "bartan soap"],
            600.0,
            G,
            45.0,
            50.0,
            Low,
        ),
        product(
            "Surf Excel Detergent",
            Some("8901030612527"),
            &["surf", "detergent", "kapde dhone ka powder"],
            1.0,
            Kg,
            150.0,
            165.0,
            Ok,
        ),
    ]
}
