//! Browser utilities for the generator page: reading uploads, preparing the
//! notebook download and user feedback.

use common::model::entry::TableEntry;
use common::upload::{parse_json_entries, workbook_sheet_names};
use gloo_file::futures::{read_as_bytes, read_as_text};
use gloo_file::{Blob, File, ObjectUrl};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::state::Notebook;

pub async fn read_json_entries(file: web_sys::File) -> Result<Vec<TableEntry>, String> {
    let text = read_as_text(&File::from(file))
        .await
        .map_err(|e| format!("{:?}", e))?;
    parse_json_entries(&text).map_err(|e| e.to_string())
}

pub async fn read_sheet_names(file: web_sys::File) -> Result<Vec<String>, String> {
    let bytes = read_as_bytes(&File::from(file))
        .await
        .map_err(|e| format!("{:?}", e))?;
    workbook_sheet_names(&bytes).map_err(|e| e.to_string())
}

/// Wraps generated code in a downloadable object URL.
pub fn notebook_download(code: String, filename: String) -> Notebook {
    let blob = Blob::new_with_options(code.as_str(), Some("text/x-python"));
    Notebook {
        code,
        filename,
        url: ObjectUrl::from(blob),
    }
}

/// Blocking browser alert for actions that cannot proceed.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Displays a temporary notification at the bottom of the screen; it removes
/// itself after three seconds.
pub fn show_toast(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) {
                toast.set_text_content(Some(message));
                toast.set_class_name("toast");
                let html_toast: HtmlElement = toast.unchecked_into();

                if body.append_child(&html_toast).is_ok() {
                    wasm_bindgen_futures::spawn_local(async move {
                        gloo_timers::future::TimeoutFuture::new(3000).await;
                        if let Some(parent) = html_toast.parent_node() {
                            parent.remove_child(&html_toast).ok();
                        }
                    });
                }
            }
        }
    }
}
