use crate::core::dictionary::Dictionary;

/// Decides whether a product is a hit for a search query.
///
/// Checks run cheapest first: the name, then each alias, each as a
/// case-insensitive substring match. Only when both miss is the dictionary
/// consulted, and then for the query as a whole rather than word by word.
/// A multi-word query therefore reaches the dictionary only when the full
/// string is itself a key (e.g. "red chilli"); otherwise it falls back to
/// pure substring matching. Returns plain yes/no; callers wanting ranked
/// results do their own scoring.
pub fn matches_product(
    dictionary: &Dictionary,
    query: &str,
    name: &str,
    aliases: &[String],
) -> bool {
    let query = query.to_lowercase();
    let name = name.to_lowercase();

    if name.contains(&query) {
        return true;
    }
    if aliases
        .iter()
        .any(|alias| alias.to_lowercase().contains(&query))
    {
        return true;
    }

    for related in dictionary.related_terms(&query) {
        if name.contains(&related) {
            return true;
        }
        if aliases
            .iter()
            .any(|alias| alias.to_lowercase().contains(&related))
        {
            return true;
        }
    }

    false
}
