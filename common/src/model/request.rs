use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /generate-notebook`.
///
/// Built fresh for every generate action by
/// [`RequestPayloadBuilder`](crate::payload::RequestPayloadBuilder) and
/// discarded once the response is handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestPayload {
    pub meta: Meta,
    /// Tables keyed by target name, in upload order.
    pub data: IndexMap<String, TableRequest>,
}

impl RequestPayload {
    /// Number of target tables carried by the request.
    pub fn table_count(&self) -> usize {
        self.data.len()
    }
}

/// Session selections, identical for every table of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    pub user_id: String,
    pub layer_classification: String,
    pub domain: String,
    pub product: String,
}

/// Per-table load settings plus the passed-through mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRequest {
    pub metadata: TableMetadata,
    pub json_sttm: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableMetadata {
    pub target_table_name: String,
    pub merge_key: String,
    pub partition_columns: String,
    pub merge_type: String,
    pub source_deduplication: String,
    pub stale_data_handling: String,
    #[serde(rename = "source_partitionBy_columns")]
    pub source_partition_by_columns: String,
    #[serde(rename = "source_orderBy_columns")]
    pub source_order_by_columns: String,
}
