use std::collections::{HashMap, HashSet};

/// The forward term table: one transliterated Hindi (or English) root per
/// row, with its English equivalents and spelling variations. Authored in
/// source, never loaded from files, never mutated at runtime.
const TERM_TABLE: &[(&str, &[&str])] = &[
    // Salt
    ("namak", &["salt", "noon", "sendha"]),
    ("noon", &["salt", "namak"]),
    // Sugar & sweeteners
    ("cheeni", &["sugar", "chini"]),
    ("shakkar", &["sugar", "jaggery", "gur"]),
    ("gur", &["jaggery", "shakkar", "gud"]),
    ("mishri", &["rock sugar", "crystal sugar", "misri"]),
    ("shahad", &["honey", "madhu"]),
    // Rice & grains
    ("chawal", &["rice", "basmati", "chaval"]),
    ("basmati", &["rice", "chawal"]),
    ("gehun", &["wheat", "gehoon"]),
    // Flour
    ("atta", &["flour", "wheat flour", "aata"]),
    ("maida", &["refined flour", "all purpose flour", "white flour"]),
    ("besan", &["gram flour", "chickpea flour"]),
    ("suji", &["semolina", "rava", "sooji"]),
    ("rava", &["semolina", "suji"]),
    // Lentils & pulses
    ("dal", &["lentils", "pulses", "daal"]),
    ("chana", &["chickpea", "gram", "chole"]),
    ("rajma", &["kidney beans", "rajmah"]),
    ("moong", &["mung bean", "green gram", "moong dal"]),
    ("urad", &["black gram", "urad dal"]),
    ("toor", &["pigeon pea", "arhar", "toor dal"]),
    ("masoor", &["red lentils", "masur"]),
    ("kabuli", &["chickpea", "white chana", "kabuli chana"]),
    // Oils
    ("tel", &["oil", "cooking oil"]),
    ("sarson", &["mustard oil", "sarson ka tel"]),
    ("soyabean", &["soybean oil", "soya"]),
    ("mungfali", &["groundnut oil", "peanut oil"]),
    ("til", &["sesame oil", "gingelly"]),
    ("nariyal", &["coconut oil", "coconut"]),
    // Ghee & butter
    ("ghee", &["clarified butter", "desi ghee"]),
    ("makhan", &["butter", "makkhan"]),
    // Dairy
    ("doodh", &["milk", "dudh"]),
    ("dahi", &["curd", "yogurt", "yoghurt"]),
    ("paneer", &["cottage cheese", "indian cheese"]),
    // Spices
    ("masala", &["spice", "spices", "masale"]),
    ("mirch", &["chilli", "chili", "pepper", "mirchi"]),
    ("lalmirch", &["red chilli", "red chili", "lal mirch"]),
    ("kaali", &["black pepper", "kali mirch"]),
    ("haldi", &["turmeric", "haldi powder"]),
    ("jeera", &["cumin", "zeera", "jira"]),
    ("dhania", &["coriander", "dhaniya"]),
    ("rai", &["mustard seeds", "sarson"]),
    ("methi", &["fenugreek", "kasuri methi"]),
    ("ajwain", &["carom seeds", "ajvain"]),
    ("heeng", &["asafoetida", "hing"]),
    ("dalchini", &["cinnamon", "dalcheeni"]),
    ("laung", &["cloves", "lavang"]),
    ("elaichi", &["cardamom", "ilaichi", "elaichi"]),
    ("javitri", &["mace", "jawitri"]),
    ("jaiphal", &["nutmeg", "jaaiphal"]),
    ("tejpatta", &["bay leaf", "tej patta"]),
    ("kesar", &["saffron", "keshar"]),
    // Tea & coffee
    ("chai", &["tea", "chay", "chaya"]),
    ("patti", &["tea leaves", "chai patti"]),
    ("coffee", &["kaapi", "kafi", "kofi"]),
    // Common vegetables
    ("aloo", &["potato", "alu"]),
    ("pyaaz", &["onion", "pyaj", "kanda"]),
    ("tamatar", &["tomato", "tamater"]),
    ("lahsun", &["garlic", "lasun"]),
    ("adrak", &["ginger", "adrakh"]),
    // Snacks & misc
    ("namkeen", &["snacks", "savory", "namkin"]),
    ("biscuit", &["cookies", "biscuits", "biskut"]),
    ("chips", &["crisps", "wafers"]),
    ("papad", &["papadum", "pappad"]),
    ("achar", &["pickle", "achaar"]),
    // Cleaning & personal care
    ("sabun", &["soap", "saabun"]),
    ("shampoo", &["shampoo"]),
    ("detergent", &["washing powder", "surf", "rin"]),
    // Brands often searched in Hindi
    ("tata", &["tata"]),
    ("ashirvaad", &["ashirwad", "aashirvaad"]),
    ("fortune", &["fortune"]),
    ("saffola", &["saffola"]),
    ("patanjali", &["patanjali"]),
];

/// An insertion-ordered, de-duplicating collection of terms. Keeps the
/// discovery order stable so capped suggestion lists come out the same on
/// every platform.
#[derive(Debug, Default)]
pub struct TermSet {
    order: Vec<String>,
    seen: HashSet<String>,
}

impl TermSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the term was not already present.
    pub fn insert(&mut self, term: &str) -> bool {
        if self.seen.contains(term) {
            return false;
        }
        self.seen.insert(term.to_string());
        self.order.push(term.to_string());
        true
    }

    pub fn contains(&self, term: &str) -> bool {
        self.seen.contains(term)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

/// The bidirectional Hindi/English term dictionary.
///
/// Built once from `TERM_TABLE` and then only read. The reverse index is a
/// pure derivation: every `(canonical, equivalent)` pair in the forward
/// table yields a `reverse[equivalent] -> canonical` entry, case-folded and
/// de-duplicated. Both key sets keep their first-appearance order so every
/// scan over the dictionary is deterministic.
pub struct Dictionary {
    forward: HashMap<String, Vec<String>>,
    forward_order: Vec<String>,
    reverse: HashMap<String, Vec<String>>,
    reverse_order: Vec<String>,
}

impl Dictionary {
    pub fn new() -> Self {
        let mut forward = HashMap::with_capacity(TERM_TABLE.len());
        let mut forward_order = Vec::with_capacity(TERM_TABLE.len());
        let mut reverse: HashMap<String, Vec<String>> = HashMap::new();
        let mut reverse_order = Vec::new();

        for (canonical, equivalents) in TERM_TABLE {
            let canonical = canonical.to_lowercase();
            let equivalents: Vec<String> =
                equivalents.iter().map(|term| term.to_lowercase()).collect();

            for equivalent in &equivalents {
                let canonicals = reverse.entry(equivalent.clone()).or_insert_with(|| {
                    reverse_order.push(equivalent.clone());
                    Vec::new()
                });
                if !canonicals.contains(&canonical) {
                    canonicals.push(canonical.clone());
                }
            }

            forward_order.push(canonical.clone());
            forward.insert(canonical, equivalents);
        }

        Self {
            forward,
            forward_order,
            reverse,
            reverse_order,
        }
    }

    /// Every term related to `word`, in forward-then-reverse discovery
    /// order. Case-insensitive, empty for unknown words, never fails.
    pub fn related_terms(&self, word: &str) -> Vec<String> {
        let key = word.to_lowercase();
        let mut related = TermSet::new();

        if let Some(equivalents) = self.forward.get(&key) {
            for term in equivalents {
                related.insert(term);
            }
        }
        if let Some(canonicals) = self.reverse.get(&key) {
            for term in canonicals {
                related.insert(term);
            }
        }

        related.into_vec()
    }

    /// Whether `word` appears anywhere in the dictionary, as a canonical
    /// term or as an equivalent.
    pub fn is_known(&self, word: &str) -> bool {
        let key = word.to_lowercase();
        self.forward.contains_key(&key) || self.reverse.contains_key(&key)
    }

    /// Equivalents registered under a canonical term, if any.
    pub fn equivalents_of(&self, canonical: &str) -> Option<&[String]> {
        self.forward
            .get(&canonical.to_lowercase())
            .map(|terms| terms.as_slice())
    }

    /// Forward entries in authoring order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.forward_order
            .iter()
            .map(|canonical| (canonical.as_str(), self.forward[canonical].as_slice()))
    }

    /// Reverse entries in first-appearance order.
    pub fn reverse_entries(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.reverse_order
            .iter()
            .map(|equivalent| (equivalent.as_str(), self.reverse[equivalent].as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_lookup_covers_every_equivalent() {
        let dictionary = Dictionary::new();
        for (canonical, equivalents) in dictionary.entries() {
            let related = dictionary.related_terms(canonical);
            for equivalent in equivalents {
                assert!(
                    related.contains(equivalent),
                    "related_terms({canonical}) is missing {equivalent}"
                );
            }
        }
    }

    #[test]
    fn reverse_lookup_reaches_back_to_canonical() {
        let dictionary = Dictionary::new();
        let pairs: Vec<(String, Vec<String>)> = dictionary
            .entries()
            .map(|(canonical, equivalents)| (canonical.to_string(), equivalents.to_vec()))
            .collect();
        for (canonical, equivalents) in pairs {
            for equivalent in equivalents {
                assert!(
                    dictionary.related_terms(&equivalent).contains(&canonical),
                    "related_terms({equivalent}) is missing {canonical}"
                );
            }
        }
    }

    #[test]
    fn shared_equivalent_maps_to_all_canonicals() {
        let dictionary = Dictionary::new();
        let related = dictionary.related_terms("sugar");
        assert!(related.contains(&"cheeni".to_string()));
        assert!(related.contains(&"shakkar".to_string()));
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dictionary = Dictionary::new();
        assert_eq!(
            dictionary.related_terms("NAMAK"),
            dictionary.related_terms("namak")
        );
    }

    #[test]
    fn unknown_word_yields_empty_relation() {
        let dictionary = Dictionary::new();
        assert!(dictionary.related_terms("quinoa").is_empty());
    }

    #[test]
    fn lookup_is_pure() {
        let dictionary = Dictionary::new();
        assert_eq!(
            dictionary.related_terms("chai"),
            dictionary.related_terms("chai")
        );
    }

    #[test]
    fn known_terms_span_both_directions() {
        let dictionary = Dictionary::new();
        assert!(dictionary.is_known("namak"));
        assert!(dictionary.is_known("salt"));
        assert!(dictionary.is_known("red chilli"));
        assert!(!dictionary.is_known("quinoa"));
    }

    #[test]
    fn term_set_preserves_insertion_order() {
        let mut set = TermSet::new();
        assert!(set.insert("salt"));
        assert!(set.insert("noon"));
        assert!(!set.insert("salt"));
        assert_eq!(set.into_vec(), vec!["salt", "noon"]);
    }
}
