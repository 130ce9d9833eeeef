use crate::core::dictionary::{Dictionary, TermSet};

/// Upper bound on suggested aliases; a hard truncation in discovery order,
/// not a ranked top list.
pub const MAX_SUGGESTIONS: usize = 8;

/// Proposes cross-language aliases for a product name, e.g. a name
/// containing "salt" yields "namak". Suggestions are an editable pre-fill
/// for the add-product form; nothing is attached to the product unless the
/// owner keeps it.
///
/// Matching is plain substring containment, not word-boundary matching, so
/// "aata" inside "Paata" counts. That looseness is deliberate: names on
/// kirana shelves run words together ("lalmirch", "kalimirch") more often
/// than they separate them.
pub fn suggest_aliases(dictionary: &Dictionary, product_name: &str) -> Vec<String> {
    if product_name.trim().is_empty() {
        return Vec::new();
    }

    let name = product_name.to_lowercase();
    let mut suggestions = TermSet::new();

    // An equivalent found inside the name suggests its canonical term.
    for (canonical, equivalents) in dictionary.entries() {
        if equivalents.iter().any(|equiv| name.contains(equiv.as_str())) {
            suggestions.insert(canonical);
        }
    }

    // A reverse-index hit hops equivalent -> canonical -> the canonical's
    // whole group, skipping anything the name already contains.
    for (equivalent, canonicals) in dictionary.reverse_entries() {
        if !name.contains(equivalent) {
            continue;
        }
        for canonical in canonicals {
            for term in dictionary.equivalents_of(canonical).unwrap_or(&[]) {
                if !name.contains(term.as_str()) {
                    suggestions.insert(term);
                }
            }
        }
    }

    // A whole token that is itself a canonical term brings in its
    // equivalents directly.
    for word in name.split_whitespace() {
        if let Some(equivalents) = dictionary.equivalents_of(word) {
            for term in equivalents {
                suggestions.insert(term);
            }
        }
    }

    suggestions
        .into_vec()
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .collect()
}
