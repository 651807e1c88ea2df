//! Classification → domain → product cascade.
//!
//! The page keeps one [`SelectionState`] and replaces it with the result of
//! [`SelectionState::update`] on every change. Picking a classification offers
//! its domains and selects the first one, which in turn offers and selects the
//! first product of that domain. Empty option lists leave the corresponding
//! selection empty.

use crate::model::classification::ClassifiedMap;
use crate::model::request::Meta;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    /// The classification map arrived (or was replaced).
    MapLoaded,
    ClassificationChanged(String),
    DomainChanged(String),
    ProductChanged(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub classification: String,
    pub domain: String,
    pub product: String,
    /// Domains offered for the current classification.
    pub domains: Vec<String>,
    /// Products offered for the current domain.
    pub products: Vec<String>,
}

impl SelectionState {
    pub fn update(self, map: &ClassifiedMap, event: SelectionEvent) -> SelectionState {
        match event {
            SelectionEvent::MapLoaded => {
                let first = map.keys().next().cloned().unwrap_or_default();
                self.select_classification(map, first)
            }
            SelectionEvent::ClassificationChanged(classification) => {
                self.select_classification(map, classification)
            }
            SelectionEvent::DomainChanged(domain) => self.select_domain(map, domain),
            SelectionEvent::ProductChanged(product) => SelectionState { product, ..self },
        }
    }

    fn select_classification(self, map: &ClassifiedMap, classification: String) -> SelectionState {
        let domains: Vec<String> = map
            .get(&classification)
            .map(|d| d.keys().cloned().collect())
            .unwrap_or_default();
        let first_domain = domains.first().cloned().unwrap_or_default();

        SelectionState {
            classification,
            domains,
            ..SelectionState::default()
        }
        .select_domain(map, first_domain)
    }

    fn select_domain(self, map: &ClassifiedMap, domain: String) -> SelectionState {
        let products: Vec<String> = map
            .get(&self.classification)
            .and_then(|d| d.get(&domain))
            .cloned()
            .unwrap_or_default();
        let product = products.first().cloned().unwrap_or_default();

        SelectionState {
            domain,
            product,
            products,
            ..self
        }
    }

    /// Classification values in map order.
    pub fn classifications(map: &ClassifiedMap) -> Vec<String> {
        map.keys().cloned().collect()
    }

    /// Request metadata for the current selection.
    pub fn meta(&self, user_id: &str) -> Meta {
        Meta {
            user_id: user_id.to_string(),
            layer_classification: self.classification.clone(),
            domain: self.domain.clone(),
            product: self.product.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> ClassifiedMap {
        serde_json::from_str(
            r#"{
                "bronze": {},
                "silver": {
                    "finance": ["ledger", "payables"],
                    "supply": []
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn map_loaded_selects_first_classification() {
        let state = SelectionState::default().update(&map(), SelectionEvent::MapLoaded);

        assert_eq!(state.classification, "bronze");
        assert!(state.domains.is_empty());
        assert_eq!(state.domain, "");
        assert_eq!(state.product, "");
    }

    #[test]
    fn classification_change_cascades_to_first_domain_and_product() {
        let state = SelectionState::default().update(
            &map(),
            SelectionEvent::ClassificationChanged("silver".to_string()),
        );

        assert_eq!(state.domains, vec!["finance", "supply"]);
        assert_eq!(state.domain, "finance");
        assert_eq!(state.products, vec!["ledger", "payables"]);
        assert_eq!(state.product, "ledger");
    }

    #[test]
    fn domain_without_products_clears_product() {
        let map = map();
        let state = SelectionState::default()
            .update(&map, SelectionEvent::ClassificationChanged("silver".to_string()))
            .update(&map, SelectionEvent::DomainChanged("supply".to_string()));

        assert_eq!(state.domain, "supply");
        assert!(state.products.is_empty());
        assert_eq!(state.product, "");
    }

    #[test]
    fn switching_to_empty_classification_resets_everything_below() {
        let map = map();
        let state = SelectionState::default()
            .update(&map, SelectionEvent::ClassificationChanged("silver".to_string()))
            .update(&map, SelectionEvent::ProductChanged("payables".to_string()))
            .update(&map, SelectionEvent::ClassificationChanged("bronze".to_string()));

        assert_eq!(state.classification, "bronze");
        assert!(state.domains.is_empty() && state.products.is_empty());
        assert_eq!(state.domain, "");
        assert_eq!(state.product, "");
    }

    #[test]
    fn unknown_classification_offers_nothing() {
        let state = SelectionState::default().update(
            &map(),
            SelectionEvent::ClassificationChanged("platinum".to_string()),
        );
        assert_eq!(state.classification, "platinum");
        assert!(state.domains.is_empty());
    }

    #[test]
    fn meta_reflects_selection() {
        let map = map();
        let state = SelectionState::default()
            .update(&map, SelectionEvent::ClassificationChanged("silver".to_string()))
            .update(&map, SelectionEvent::ProductChanged("payables".to_string()));

        let meta = state.meta("analyst@example.com");
        assert_eq!(meta.user_id, "analyst@example.com");
        assert_eq!(meta.layer_classification, "silver");
        assert_eq!(meta.domain, "finance");
        assert_eq!(meta.product, "payables");
    }

    #[test]
    fn empty_map_yields_empty_selection() {
        let state = SelectionState::default().update(&ClassifiedMap::new(), SelectionEvent::MapLoaded);
        assert_eq!(state, SelectionState::default());
    }
}
