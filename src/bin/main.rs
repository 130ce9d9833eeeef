use crossterm::style::Stylize;
use dukaan_core::core::engine::MAX_SEARCH_RESULTS;
use dukaan_core::core::types::{
    Language, PageParams, Product, ProductInput, SizeUnit, StockStatus,
};
use dukaan_core::{format, seed, DukaanEngine};
use std::io::{stdin, stdout, Write};
use std::path::Path;

const SNAPSHOT_PATH: &str = "dukaan_catalog.bin";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut engine = DukaanEngine::from_file_or_new(Path::new(SNAPSHOT_PATH));

    println!("{}", "Kirana Digital Dukaan".bold().green());
    println!("Type 'help' for commands, 'exit' to save and quit.");
    println!("---------------------------------------------------");

    loop {
        print!("\n> ");
        let _ = stdout().flush();

        let mut input = String::new();
        if stdin().read_line(&mut input).is_err() {
            break;
        }
        let line = input.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (line, ""),
        };

        match command {
            "" => {}
            "exit" => break,
            "help" => print_help(),
            "search" => run_search(&engine, rest),
            "list" => run_list(&engine, rest),
            "add" => run_add(&mut engine),
            "stock" => run_stock(&mut engine, rest),
            "mandi" => println!("\n{}", engine.mandi_list()),
            "seed" => run_seed(&mut engine),
            "export" => run_export(&engine),
            "margin" => run_margin(&mut engine, rest),
            "lang" => run_lang(&mut engine, rest),
            _ => println!("{} unknown command '{}'", "!".red(), command),
        }
    }

    println!("\nSaving catalog...");
    if let Err(e) = engine.save() {
        eprintln!("{} could not save catalog: {}", "!".red(), e);
    } else {
        println!("Catalog saved to '{}'", SNAPSHOT_PATH);
    }
}

fn print_help() {
    println!("  search <text>        find products (Hindi or English)");
    println!("  list [page]          browse the catalog");
    println!("  add                  register a product");
    println!("  stock <text> <st>    set stock for the first match (ok/low/empty)");
    println!("  mandi                print the shopping list");
    println!("  seed                 load the demo catalog");
    println!("  export               dump the catalog as JSON");
    println!("  margin <pct>         set the default margin");
    println!("  lang <hi|en>         set the display language");
    println!("  exit                 save and quit");
}

fn run_search(engine: &DukaanEngine, query: &str) {
    if query.is_empty() {
        println!("{} usage: search <text>", "!".red());
        return;
    }

    let expanded = engine.expand_query(query);
    if expanded != query.to_lowercase() {
        println!("{} {}", "searching:".dark_grey(), expanded.clone().dark_grey());
    }

    let results = engine.search(query);
    if results.is_empty() {
        println!("No products match '{}'", query);
        return;
    }
    for product in &results {
        print_product_line(product);
    }
    if results.len() == MAX_SEARCH_RESULTS {
        println!("{}", "(showing the first 15 matches)".dark_grey());
    }
}

fn run_list(engine: &DukaanEngine, rest: &str) {
    let page = rest.parse::<usize>().unwrap_or(1);
    let listing = engine.list_products(
        PageParams {
            page,
            ..PageParams::default()
        },
        None,
    );
    if listing.data.is_empty() {
        println!("Catalog is empty. Try 'seed' or 'add'.");
        return;
    }
    for product in &listing.data {
        print_product_line(product);
    }
    println!(
        "{}",
        format!(
            "page {}/{} ({} products)",
            listing.page,
            listing.total_pages.max(1),
            listing.total
        )
        .dark_grey()
    );
}

fn print_product_line(product: &Product) {
    let price = format::format_currency(product.selling_price);
    let margin = format!("munafa {:.1}%", product.margin());
    println!(
        "  {} {} ({}) {} {} {}",
        product.stock.status.icon(),
        product.name.clone().bold(),
        product.size(),
        price,
        margin.green(),
        product
            .barcode
            .as_deref()
            .unwrap_or("")
            .to_string()
            .dark_grey()
    );
}

fn run_add(engine: &mut DukaanEngine) {
    let name = prompt("Product name");
    if name.is_empty() {
        println!("Cancelled.");
        return;
    }

    // Suggested aliases come from the dictionary; the owner picks which
    // ones to keep before anything is saved.
    let suggested = engine.suggest_aliases(&name);
    let mut aliases: Vec<String> = Vec::new();
    if !suggested.is_empty() {
        println!("Suggested aliases:");
        for (index, alias) in suggested.iter().enumerate() {
            println!("  {}: {}", index + 1, alias.clone().cyan());
        }
        let picked = prompt("Keep which? (numbers, 'a' for all, blank for none)");
        aliases = pick_aliases(&suggested, &picked);
    }
    let extra = prompt("Extra aliases (comma separated, blank for none)");
    for alias in extra.split(',') {
        let alias = alias.trim().to_lowercase();
        if !alias.is_empty() && !aliases.contains(&alias) {
            aliases.push(alias);
        }
    }

    let size_value = match format::parse_decimal(&prompt("Size value (e.g. 1 or 500)")) {
        Some(v) => v,
        None => {
            println!("{} not a number, cancelled", "!".red());
            return;
        }
    };
    let size_unit = match prompt("Unit (kg/g/L/mL/pcs)").parse::<SizeUnit>() {
        Ok(u) => u,
        Err(e) => {
            println!("{} {}", "!".red(), e);
            return;
        }
    };
    let buying_price = match format::parse_decimal(&prompt("Buying price")) {
        Some(v) => v,
        None => {
            println!("{} not a number, cancelled", "!".red());
            return;
        }
    };

    let default_selling = engine.default_selling_price(buying_price);
    let selling_prompt = format!(
        "Selling price (blank for {} at {}% munafa)",
        format::format_currency(default_selling),
        engine.settings().default_margin
    );
    let selling_raw = prompt(&selling_prompt);
    let selling_price = if selling_raw.is_empty() {
        default_selling
    } else {
        match format::parse_decimal(&selling_raw) {
            Some(v) => v,
            None => {
                println!("{} not a number, cancelled", "!".red());
                return;
            }
        }
    };

    let barcode_raw = prompt("Barcode (blank for none)");
    let barcode = if barcode_raw.is_empty() {
        None
    } else {
        Some(barcode_raw)
    };

    let status_raw = prompt("Stock status (ok/low/empty, blank for ok)");
    let stock_status = if status_raw.is_empty() {
        None
    } else {
        match status_raw.parse::<StockStatus>() {
            Ok(s) => Some(s),
            Err(e) => {
                println!("{} {}", "!".red(), e);
                return;
            }
        }
    };

    let input = ProductInput {
        name,
        barcode,
        aliases,
        size_value,
        size_unit,
        buying_price,
        selling_price,
        stock_status,
    };
    match engine.add_product(input) {
        Ok(product) => {
            println!("{} added:", "✔".green());
            print_product_line(&product);
        }
        Err(e) => println!("{} {}", "!".red(), e),
    }
}

fn pick_aliases(suggested: &[String], picked: &str) -> Vec<String> {
    let picked = picked.trim();
    if picked.is_empty() {
        return Vec::new();
    }
    if picked.eq_ignore_ascii_case("a") {
        return suggested.to_vec();
    }
    let mut kept = Vec::new();
    for token in picked.split_whitespace() {
        if let Ok(n) = token.parse::<usize>() {
            if n >= 1 && n <= suggested.len() && !kept.contains(&suggested[n - 1]) {
                kept.push(suggested[n - 1].clone());
            }
        }
    }
    kept
}

fn run_stock(engine: &mut DukaanEngine, rest: &str) {
    let Some((query, status_raw)) = rest.rsplit_once(char::is_whitespace) else {
        println!("{} usage: stock <text> <ok|low|empty>", "!".red());
        return;
    };

    let status = match status_raw.parse::<StockStatus>() {
        Ok(s) => s,
        Err(e) => {
            println!("{} {}", "!".red(), e);
            return;
        }
    };

    let target = engine.search(query).first().map(|p| (p.id, p.name.clone()));
    match target {
        Some((id, name)) => match engine.set_stock_status(id, status) {
            Ok(()) => println!(
                "{} {} -> {} {} ({})",
                "✔".green(),
                name,
                status.icon(),
                status.label(),
                status.hindi_label()
            ),
            Err(e) => println!("{} {}", "!".red(), e),
        },
        None => println!("No product matches '{}'", query),
    }
}

fn run_seed(engine: &mut DukaanEngine) {
    let mut added = 0;
    for input in seed::demo_products() {
        if engine.add_product(input).is_ok() {
            added += 1;
        }
    }
    println!("{} {} demo products added", "✔".green(), added);
}

fn run_export(engine: &DukaanEngine) {
    match serde_json::to_string_pretty(engine.catalog().products()) {
        Ok(json) => println!("{}", json),
        Err(e) => println!("{} export failed: {}", "!".red(), e),
    }
}

fn run_margin(engine: &mut DukaanEngine, rest: &str) {
    let Some(percent) = format::parse_decimal(rest) else {
        println!("{} usage: margin <percent>", "!".red());
        return;
    };
    match engine.update_settings(Some(percent), None) {
        Ok(settings) => println!(
            "{} default margin is now {}%",
            "✔".green(),
            settings.default_margin
        ),
        Err(e) => println!("{} {}", "!".red(), e),
    }
}

fn run_lang(engine: &mut DukaanEngine, rest: &str) {
    match rest.parse::<Language>() {
        Ok(language) => {
            let _ = engine.update_settings(None, Some(language));
            let label = match language {
                Language::Hi => "हिंदी",
                Language::En => "English",
            };
            println!("{} language set to {}", "✔".green(), label);
        }
        Err(e) => println!("{} {}", "!".red(), e),
    }
}

fn prompt(label: &str) -> String {
    print!("{}: ", label);
    let _ = stdout().flush();
    let mut input = String::new();
    if stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_string()
}
