//! Assembly of the notebook-generation request.
//!
//! The builder walks the uploaded entries in order, keys every entry that has a
//! `target_table` by that name and wraps its remaining fields with the load
//! settings the generator expects. Entries without a target table are skipped
//! silently, and a later entry with a repeated name replaces the earlier one.
//!
//! `merge_key` and `partition_columns` come from a [`MergePolicy`]. The default
//! [`PositionalMergePolicy`] keys them by list position: the entry at index 1
//! gets the XTNDF keys and every other entry gets the client keys. Nothing in
//! the entries explains that rule, so it lives behind the trait where a
//! content-based policy can replace it.

use crate::model::entry::{METADATA_FIELD, TARGET_TABLE_FIELD, TableEntry, target_table_of};
use crate::model::request::{Meta, RequestPayload, TableMetadata, TableRequest};
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Merge settings chosen for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSettings {
    pub merge_key: String,
    pub partition_columns: String,
}

impl MergeSettings {
    pub fn new(merge_key: impl Into<String>, partition_columns: impl Into<String>) -> Self {
        Self {
            merge_key: merge_key.into(),
            partition_columns: partition_columns.into(),
        }
    }
}

/// Chooses merge settings for the entry at `index` of the uploaded list.
///
/// `index` counts every entry, including those skipped for lacking a target
/// table.
pub trait MergePolicy {
    fn merge_settings(&self, index: usize, entry: &TableEntry) -> MergeSettings;
}

/// Position-keyed lookup table with a fallback for unlisted positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalMergePolicy {
    by_position: BTreeMap<usize, MergeSettings>,
    fallback: MergeSettings,
}

impl PositionalMergePolicy {
    pub fn new(fallback: MergeSettings) -> Self {
        Self {
            by_position: BTreeMap::new(),
            fallback,
        }
    }

    pub fn with_position(mut self, index: usize, settings: MergeSettings) -> Self {
        self.by_position.insert(index, settings);
        self
    }
}

impl Default for PositionalMergePolicy {
    fn default() -> Self {
        PositionalMergePolicy::new(MergeSettings::new(
            "ClientID, DistributionChannelCode",
            "SystemID",
        ))
        .with_position(
            1,
            MergeSettings::new("XTNDFSystemID, XTNDFReportingUnitID", "XTNDFSystemID,"),
        )
    }
}

impl MergePolicy for PositionalMergePolicy {
    fn merge_settings(&self, index: usize, _entry: &TableEntry) -> MergeSettings {
        self.by_position
            .get(&index)
            .unwrap_or(&self.fallback)
            .clone()
    }
}

/// Load settings shared by every table of a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLoadDefaults {
    pub merge_type: String,
    pub source_deduplication: String,
    pub stale_data_handling: String,
    pub source_partition_by_columns: String,
    pub source_order_by_columns: String,
}

impl Default for TableLoadDefaults {
    fn default() -> Self {
        Self {
            merge_type: "upsert".to_string(),
            source_deduplication: "Y".to_string(),
            stale_data_handling: "Y".to_string(),
            source_partition_by_columns: "KAPPL, KUNNR".to_string(),
            source_order_by_columns: "MANDT".to_string(),
        }
    }
}

/// Builds [`RequestPayload`]s from uploaded table entries.
#[derive(Debug, Clone, Default)]
pub struct RequestPayloadBuilder<P = PositionalMergePolicy> {
    policy: P,
    defaults: TableLoadDefaults,
}

impl RequestPayloadBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<P: MergePolicy> RequestPayloadBuilder<P> {
    pub fn with_policy(policy: P) -> Self {
        Self {
            policy,
            defaults: TableLoadDefaults::default(),
        }
    }

    pub fn defaults(mut self, defaults: TableLoadDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Assembles the request for `entries` under the given session selections.
    ///
    /// Pure: the same inputs always produce an equal payload.
    pub fn build(&self, entries: &[TableEntry], meta: Meta) -> RequestPayload {
        let mut data = IndexMap::new();

        for (index, entry) in entries.iter().enumerate() {
            let Some(target_table) = target_table_of(entry) else {
                continue;
            };

            let json_sttm: TableEntry = entry
                .iter()
                .filter(|(key, _)| *key != METADATA_FIELD && *key != TARGET_TABLE_FIELD)
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();

            let MergeSettings {
                merge_key,
                partition_columns,
            } = self.policy.merge_settings(index, entry);

            let metadata = TableMetadata {
                target_table_name: target_table.clone(),
                merge_key,
                partition_columns,
                merge_type: self.defaults.merge_type.clone(),
                source_deduplication: self.defaults.source_deduplication.clone(),
                stale_data_handling: self.defaults.stale_data_handling.clone(),
                source_partition_by_columns: self.defaults.source_partition_by_columns.clone(),
                source_order_by_columns: self.defaults.source_order_by_columns.clone(),
            };

            data.insert(
                target_table,
                TableRequest {
                    metadata,
                    json_sttm,
                },
            );
        }

        RequestPayload { meta, data }
    }
}

/// Builds a request with the default merge policy and load settings.
pub fn build_request_body(entries: &[TableEntry], meta: Meta) -> RequestPayload {
    RequestPayloadBuilder::new().build(entries, meta)
}
