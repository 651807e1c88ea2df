//! Reading user uploads into table entries.
//!
//! A `.json` upload is parsed directly as the entry list. A `.xlsx` upload is
//! only opened far enough to list its sheets; the chosen sheet is sent to the
//! transform endpoint, whose answer goes through
//! [`TransformResponse::into_entries`](crate::model::response::TransformResponse::into_entries).

use crate::error::UploadError;
use crate::model::entry::TableEntry;
use calamine::{Reader, Xlsx, XlsxError, open_workbook_from_rs};
use serde_json::Value;
use std::io::Cursor;

/// How an uploaded file is handled, decided by its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceFile {
    Json,
    Workbook,
    /// Anything else, with the extension it was rejected for (empty when the
    /// name has none).
    Unsupported(String),
}

impl SourceFile {
    pub fn from_file_name(name: &str) -> SourceFile {
        if name.ends_with(".json") {
            SourceFile::Json
        } else if name.ends_with(".xlsx") {
            SourceFile::Workbook
        } else {
            let extension = name
                .rsplit_once('.')
                .map(|(_, ext)| ext.to_string())
                .unwrap_or_default();
            SourceFile::Unsupported(extension)
        }
    }
}

/// Parses an uploaded JSON document into entries.
///
/// The document must be a list of objects; nothing is kept from a document
/// that fails the check.
pub fn parse_json_entries(text: &str) -> Result<Vec<TableEntry>, UploadError> {
    let value: Value = serde_json::from_str(text)?;
    entries_from_value(value)
}

pub(crate) fn entries_from_value(value: Value) -> Result<Vec<TableEntry>, UploadError> {
    let Value::Array(items) = value else {
        return Err(UploadError::NotAList);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(entry) => Ok(entry),
            _ => Err(UploadError::NotAnObject { index }),
        })
        .collect()
}

/// Lists the sheet names of an `.xlsx` workbook in workbook order.
pub fn workbook_sheet_names(bytes: &[u8]) -> Result<Vec<String>, UploadError> {
    let workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))
        .map_err(|e: XlsxError| UploadError::Workbook(e.to_string()))?;

    let names = workbook.sheet_names();
    if names.is_empty() {
        return Err(UploadError::EmptyWorkbook);
    }
    Ok(names)
}

/// Two-space indented rendering of the loaded entries for the preview pane.
pub fn pretty_json(entries: &[TableEntry]) -> String {
    serde_json::to_string_pretty(entries).unwrap_or_default()
}
