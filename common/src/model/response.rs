use crate::error::UploadError;
use crate::model::entry::TableEntry;
use crate::upload::entries_from_value;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_NOTEBOOK_NAME: &str = "generated_notebook.py";
pub const DEFAULT_GENERATE_ERROR: &str = "Error generating notebook.";

/// Answer of `POST /transform-excel`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformResponse {
    /// The transformed sheet, either as JSON text or already decoded.
    #[serde(default)]
    pub content: Value,
}

impl TransformResponse {
    pub fn into_entries(self) -> Result<Vec<TableEntry>, UploadError> {
        match self.content {
            Value::String(text) => entries_from_value(serde_json::from_str(&text)?),
            list @ Value::Array(_) => entries_from_value(list),
            _ => Err(UploadError::UnexpectedContent),
        }
    }
}

/// Answer of `POST /generate-notebook`.
///
/// Success carries the notebook text in `data`. The service names the file in
/// `filename` or `notebook_name` depending on its version; failures carry
/// `error`, a FastAPI style `detail`, or only a `message`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub notebook_name: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    Notebook { code: String, filename: String },
    Failed(String),
}

impl GenerateResponse {
    pub fn into_outcome(self, status: u16) -> GenerateOutcome {
        if status == 200 {
            if let Some(code) = self.data.as_ref().filter(|d| !d.is_empty()) {
                let filename = self
                    .filename
                    .as_ref()
                    .or(self.notebook_name.as_ref())
                    .filter(|f| !f.is_empty())
                    .cloned()
                    .unwrap_or_else(|| DEFAULT_NOTEBOOK_NAME.to_string());
                return GenerateOutcome::Notebook {
                    code: code.clone(),
                    filename,
                };
            }
        }

        let message = self
            .error
            .filter(|e| !e.is_empty())
            .or_else(|| self.detail.as_ref().and_then(detail_message))
            .or(self.message.filter(|m| !m.is_empty()))
            .unwrap_or_else(|| DEFAULT_GENERATE_ERROR.to_string());
        GenerateOutcome::Failed(message)
    }
}

/// Human readable text out of a FastAPI `detail` value: a plain string, an
/// object with `msg` or `error_message`, or a list of such objects.
fn detail_message(detail: &Value) -> Option<String> {
    match detail {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Object(fields) => ["msg", "error_message"]
            .iter()
            .find_map(|k| fields.get(*k).and_then(Value::as_str))
            .map(str::to_string),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(detail_message).collect();
            (!parts.is_empty()).then(|| parts.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> GenerateResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn success_uses_filename() {
        let outcome = response(json!({"data": "print(1)", "filename": "orders.py"})).into_outcome(200);
        assert_eq!(
            outcome,
            GenerateOutcome::Notebook {
                code: "print(1)".to_string(),
                filename: "orders.py".to_string()
            }
        );
    }

    #[test]
    fn success_falls_back_to_notebook_name_then_default() {
        let outcome = response(json!({
            "success": true,
            "message": "Notebook generated successfully.",
            "notebook_id": "TODO",
            "notebook_name": "silver_orders.py",
            "data": "# COMMAND ----------"
        }))
        .into_outcome(200);
        assert!(matches!(outcome, GenerateOutcome::Notebook { ref filename, .. } if filename == "silver_orders.py"));

        let outcome = response(json!({"data": "x"})).into_outcome(200);
        assert!(matches!(outcome, GenerateOutcome::Notebook { ref filename, .. } if filename == DEFAULT_NOTEBOOK_NAME));
    }

    #[test]
    fn non_200_is_a_failure_even_with_data() {
        let outcome = response(json!({"data": "x", "error": "quota exceeded"})).into_outcome(500);
        assert_eq!(outcome, GenerateOutcome::Failed("quota exceeded".to_string()));
    }

    #[test]
    fn missing_data_is_a_failure_with_default_message() {
        assert_eq!(
            response(json!({})).into_outcome(200),
            GenerateOutcome::Failed(DEFAULT_GENERATE_ERROR.to_string())
        );
        assert_eq!(
            response(json!({"data": ""})).into_outcome(200),
            GenerateOutcome::Failed(DEFAULT_GENERATE_ERROR.to_string())
        );
    }

    #[test]
    fn detail_messages_are_extracted() {
        let outcome = response(json!({
            "detail": {"type": "missing", "loc": ["body", "data"], "msg": "STTM Data can not be empty."}
        }))
        .into_outcome(422);
        assert_eq!(outcome, GenerateOutcome::Failed("STTM Data can not be empty.".to_string()));

        let outcome = response(json!({
            "detail": [{"msg": "field required"}, {"msg": "value is not a dict"}]
        }))
        .into_outcome(422);
        assert_eq!(
            outcome,
            GenerateOutcome::Failed("field required; value is not a dict".to_string())
        );

        let outcome = response(json!({"detail": "Not Found"})).into_outcome(404);
        assert_eq!(outcome, GenerateOutcome::Failed("Not Found".to_string()));
    }

    #[test]
    fn transform_content_may_be_text_or_list() {
        let text = TransformResponse {
            content: json!(r#"[{"target_table": "a"}]"#),
        };
        assert_eq!(text.into_entries().unwrap().len(), 1);

        let list = TransformResponse {
            content: json!([{"target_table": "a"}, {"target_table": "b"}]),
        };
        assert_eq!(list.into_entries().unwrap().len(), 2);
    }

    #[test]
    fn transform_content_must_hold_a_list() {
        let object = TransformResponse {
            content: json!({"target_table": "a"}),
        };
        assert!(matches!(object.into_entries(), Err(UploadError::UnexpectedContent)));

        let bad_text = TransformResponse {
            content: json!("not json"),
        };
        assert!(matches!(bad_text.into_entries(), Err(UploadError::InvalidJson(_))));

        let missing: TransformResponse = serde_json::from_value(json!({})).unwrap();
        assert!(matches!(missing.into_entries(), Err(UploadError::UnexpectedContent)));
    }
}
