use crate::core::dictionary::{Dictionary, TermSet};

/// Expands a raw search query with every Hindi/English equivalent of its
/// words, e.g. "namak" becomes "namak salt noon sendha".
///
/// Each whitespace-separated word expands independently; there is no
/// phrase lookup, so a multi-word dictionary equivalent like "red chilli"
/// never fires here. The original tokens always survive, first, in query
/// order, followed by their relations in discovery order.
pub fn expand_search_query(dictionary: &Dictionary, query: &str) -> String {
    if query.trim().is_empty() {
        return query.to_string();
    }

    let lowered = query.to_lowercase();
    let words: Vec<&str> = lowered.trim().split_whitespace().collect();
    let mut expanded = TermSet::new();

    for word in &words {
        expanded.insert(word);
    }
    for word in &words {
        for term in dictionary.related_terms(word) {
            expanded.insert(&term);
        }
    }

    expanded.into_vec().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(expanded: &str) -> Vec<&str> {
        expanded.split_whitespace().collect()
    }

    #[test]
    fn expands_hindi_word_to_english_equivalents() {
        let dictionary = Dictionary::new();
        let expanded = expand_search_query(&dictionary, "namak");
        let tokens = tokens(&expanded);
        assert_eq!(tokens[0], "namak");
        for term in ["salt", "noon", "sendha"] {
            assert!(tokens.contains(&term), "missing {term} in {expanded}");
        }
    }

    #[test]
    fn each_word_of_a_multi_word_query_expands_independently() {
        let dictionary = Dictionary::new();
        let expanded = expand_search_query(&dictionary, "namak chai");
        let tokens = tokens(&expanded);
        for term in ["namak", "salt", "noon", "sendha", "chai"] {
            assert!(tokens.contains(&term), "missing {term} in {expanded}");
        }
    }

    #[test]
    fn multi_word_equivalents_never_fire_as_phrases() {
        let dictionary = Dictionary::new();
        // "red chilli" is an equivalent of "lalmirch", but the query is
        // split into single words before lookup, so the phrase cannot
        // match. "chilli" alone still reaches "mirch".
        let expanded = expand_search_query(&dictionary, "red chilli");
        let tokens = tokens(&expanded);
        assert!(!tokens.contains(&"lalmirch"));
        assert!(tokens.contains(&"mirch"));
    }

    #[test]
    fn blank_query_is_returned_unchanged() {
        let dictionary = Dictionary::new();
        assert_eq!(expand_search_query(&dictionary, ""), "");
        assert_eq!(expand_search_query(&dictionary, "   "), "   ");
    }

    #[test]
    fn repeated_words_are_deduplicated() {
        let dictionary = Dictionary::new();
        let expanded = expand_search_query(&dictionary, "salt SALT salt");
        let tokens = tokens(&expanded);
        assert_eq!(tokens.iter().filter(|t| **t == "salt").count(), 1);
    }

    #[test]
    fn expansion_is_pure() {
        let dictionary = Dictionary::new();
        assert_eq!(
            expand_search_query(&dictionary, "gur cheeni"),
            expand_search_query(&dictionary, "gur cheeni")
        );
    }

    #[test]
    fn unknown_words_pass_through_unexpanded() {
        let dictionary = Dictionary::new();
        assert_eq!(expand_search_query(&dictionary, "Quinoa"), "quinoa");
    }
}
