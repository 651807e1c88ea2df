//! Calls to the code-generation service.
//!
//! All paths are same-origin; the host binary relays them upstream. Errors are
//! returned as display strings for the console, the page shows its own fixed
//! messages.

use common::endpoints::{api_path, CLASSIFIED_MAP, GENERATE_NOTEBOOK, TRANSFORM_EXCEL};
use common::model::classification::ClassifiedMap;
use common::model::entry::TableEntry;
use common::model::request::RequestPayload;
use common::model::response::{GenerateOutcome, GenerateResponse, TransformResponse};
use common::requests::TransformForm;
use gloo_net::http::Request;
use wasm_bindgen::JsValue;
use web_sys::FormData;

pub async fn fetch_classified_map() -> Result<ClassifiedMap, String> {
    let response = Request::get(&api_path(CLASSIFIED_MAP))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("classification map request failed with {}", response.status()));
    }
    response
        .json::<ClassifiedMap>()
        .await
        .map_err(|e| e.to_string())
}

/// Sends one workbook sheet to the transform endpoint and decodes the table
/// definitions it answers with.
pub async fn transform_sheet(
    file: &web_sys::File,
    form: &TransformForm,
) -> Result<Vec<TableEntry>, String> {
    let data = FormData::new().map_err(js_error)?;
    data.append_with_blob_and_filename(TransformForm::FILE_FIELD, file, &file.name())
        .map_err(js_error)?;
    for (name, value) in form.fields() {
        data.append_with_str(name, value).map_err(js_error)?;
    }

    let response = Request::post(&api_path(TRANSFORM_EXCEL))
        .body(data)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let body: TransformResponse = response.json().await.map_err(|e| e.to_string())?;
    body.into_entries().map_err(|e| e.to_string())
}

/// Posts the request payload; any answer with a JSON body becomes an outcome.
pub async fn generate_notebook(payload: &RequestPayload) -> Result<GenerateOutcome, String> {
    let response = Request::post(&api_path(GENERATE_NOTEBOOK))
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let status = response.status();
    let body: GenerateResponse = response.json().await.map_err(|e| e.to_string())?;
    Ok(body.into_outcome(status))
}

fn js_error(value: JsValue) -> String {
    format!("{:?}", value)
}
