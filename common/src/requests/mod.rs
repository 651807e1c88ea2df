use crate::model::request::Meta;
use serde::{Deserialize, Serialize};

/// Text fields of the multipart `POST /transform-excel` request.
///
/// The uploaded workbook travels beside them in a `file` part.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformForm {
    pub user_id: String,
    pub layer_classification: String,
    pub domain: String,
    pub product: String,
    pub sheet_name: String,
}

impl TransformForm {
    pub const FILE_FIELD: &'static str = "file";

    pub fn new(meta: Meta, sheet_name: impl Into<String>) -> Self {
        Self {
            user_id: meta.user_id,
            layer_classification: meta.layer_classification,
            domain: meta.domain,
            product: meta.product,
            sheet_name: sheet_name.into(),
        }
    }

    /// Field name and value pairs in the order they are appended after the
    /// file part.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("user_id", self.user_id.as_str()),
            ("layer_classification", self.layer_classification.as_str()),
            ("domain", self.domain.as_str()),
            ("product", self.product.as_str()),
            ("sheet_name", self.sheet_name.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_follow_form_order() {
        let meta = Meta {
            user_id: "u".to_string(),
            layer_classification: "silver".to_string(),
            domain: "finance".to_string(),
            product: "ledger".to_string(),
        };
        let form = TransformForm::new(meta, "Orders");

        let names: Vec<&str> = form.fields().iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["user_id", "layer_classification", "domain", "product", "sheet_name"]
        );
        assert_eq!(form.fields()[4].1, "Orders");
    }
}
