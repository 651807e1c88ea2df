use std::collections::BTreeMap;

/// Domain name to the products offered under it.
pub type DomainProducts = BTreeMap<String, Vec<String>>;

/// Response of `GET /get-classified-domain-product-map`: layer classification
/// (bronze, silver, ...) to its domains and their products.
pub type ClassifiedMap = BTreeMap<String, DomainProducts>;

/// Display label for a classification value: first character upper-cased,
/// the rest untouched.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
