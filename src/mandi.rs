use crate::core::types::{MandiItem, StockStatus};
use crate::format;
use chrono::NaiveDate;
use std::fmt::Write;

/// Builds the Mandi (shopping) list as shareable text: empty items run
/// out first, low items follow, each line numbered with size and last
/// buying price. The wording is what owners forward over WhatsApp.
pub fn build_mandi_list(items: &[MandiItem], date: NaiveDate) -> String {
    if items.is_empty() {
        return "✅ सब कुछ स्टॉक में है! (Everything is in stock!)".to_string();
    }

    let urgent: Vec<&MandiItem> = items
        .iter()
        .filter(|i| i.status == StockStatus::Empty)
        .collect();
    let low: Vec<&MandiItem> = items
        .iter()
        .filter(|i| i.status == StockStatus::Low)
        .collect();

    let mut list = String::from("🛒 *खरीदारी की लिस्ट (Shopping List)*\n\n");

    if !urgent.is_empty() {
        list.push_str("🔴 *तुरंत चाहिए (Urgent):*\n");
        push_section(&mut list, &urgent);
        list.push('\n');
    }

    if !low.is_empty() {
        list.push_str("🟡 *जल्दी खरीदें (Buy Soon):*\n");
        push_section(&mut list, &low);
    }

    let _ = write!(list, "\n📅 {}", format::format_date(date));
    list
}

fn push_section(list: &mut String, items: &[&MandiItem]) {
    for (index, item) in items.iter().enumerate() {
        let _ = writeln!(
            list,
            "{}. {} ({}) - {}",
            index + 1,
            item.name,
            item.size,
            format::format_currency(item.last_buying_price)
        );
    }
}
