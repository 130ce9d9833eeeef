// Minimal harness for eyeballing the bilingual search behavior.
// Run with: cargo run --bin search_check
use dukaan_core::core::aliases::suggest_aliases;
use dukaan_core::core::dictionary::Dictionary;
use dukaan_core::core::expansion::expand_search_query;
use dukaan_core::core::matcher::matches_product;

fn main() {
    let dictionary = Dictionary::new();

    println!("--- expansion ---");
    let queries = [
        "namak", "salt", "chai", "namak chai", "red chilli", "mirchi", "gur", "quinoa",
    ];
    for query in queries.iter() {
        println!("{} => {}", query, expand_search_query(&dictionary, query));
    }

    println!("\n--- alias suggestions ---");
    let names = [
        "Tata Salt",
        "Red Label Tea",
        "Aashirvaad Atta",
        "Fortune Mustard Oil",
        "Duracell AA Battery",
    ];
    for name in names.iter() {
        println!("{:?} => {:?}", name, suggest_aliases(&dictionary, name));
    }

    println!("\n--- matcher ---");
    let aliases: Vec<String> = vec!["chai".into(), "tea".into(), "chai patti".into()];
    let cases = [
        ("namak", "Tata Salt", &[][..]),
        ("chai", "Red Label Tea", &aliases[..]),
        ("red chilli", "Lalmirch Powder", &[][..]),
        ("namak chai", "Tata Salt", &[][..]),
    ];
    for (query, name, aliases) in cases.iter() {
        println!(
            "{:?} vs {:?} => {}",
            query,
            name,
            matches_product(&dictionary, query, name, aliases)
        );
    }
}
