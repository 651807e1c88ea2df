//! Update function of the generator page.
//!
//! Elm style: mutate the state for `msg`, start any asynchronous work with
//! `spawn_local`, and return whether the view needs a re-render. Failures are
//! logged to the console and shown with the page's fixed messages.

use common::model::response::GenerateOutcome;
use common::payload::build_request_body;
use common::requests::TransformForm;
use common::selection::SelectionEvent;
use common::upload::{pretty_json, SourceFile};
use gloo_console::{error, log, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use super::api::{generate_notebook, transform_sheet};
use super::helpers::{alert, notebook_download, read_json_entries, read_sheet_names, show_toast};
use super::messages::Msg;
use super::state::NotebookGeneratorComponent;

pub const INVALID_JSON: &str = "Invalid JSON file.";
pub const UNSUPPORTED_FILE: &str = "Unsupported file type. Please upload .json or .xlsx";
pub const TRANSFORM_FAILED: &str = "Failed to transform Excel to JSON.";
pub const WORKBOOK_UNREADABLE: &str = "Could not read the sheets of this workbook.";
pub const GENERATE_FAILED: &str = "Something went wrong while generating the notebook.";
pub const MAP_FAILED: &str = "Could not load classifications.";
pub const NO_SOURCE: &str = "Please upload a valid JSON or Excel file first.";
pub const NO_SHEET: &str = "Please upload a file and select a sheet.";

pub fn update(
    component: &mut NotebookGeneratorComponent,
    ctx: &Context<NotebookGeneratorComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::MapLoaded(map) => {
            component.classified_map = map;
            component.map_error = None;
            component.apply_selection(SelectionEvent::MapLoaded);
            true
        }
        Msg::MapFailed(err) => {
            error!(format!("classification map: {}", err));
            component.map_error = Some(MAP_FAILED.to_string());
            true
        }
        Msg::Select(event) => {
            component.apply_selection(event);
            true
        }
        Msg::UserIdChanged(user_id) => {
            component.user_id = user_id;
            false
        }
        Msg::FileChosen(file) => {
            let seq = component.uploads.start();
            let link = ctx.link().clone();
            component.preview_error = None;

            match SourceFile::from_file_name(&file.name()) {
                SourceFile::Json => {
                    component.clear_workbook();
                    spawn_local(async move {
                        let result = read_json_entries(file).await;
                        link.send_message(Msg::JsonRead { seq, result });
                    });
                }
                SourceFile::Workbook => {
                    component.clear_workbook();
                    spawn_local(async move {
                        let result = read_sheet_names(file.clone()).await;
                        link.send_message(Msg::WorkbookRead { seq, file, result });
                    });
                }
                SourceFile::Unsupported(extension) => {
                    warn!(format!("rejected upload with extension {:?}", extension));
                    component.preview_error = Some(UNSUPPORTED_FILE.to_string());
                }
            }
            true
        }
        Msg::JsonRead { seq, result } => {
            if !component.uploads.is_current(seq) {
                return false;
            }
            match result {
                Ok(entries) => {
                    log!(format!("loaded {} table definitions", entries.len()));
                    component.preview = pretty_json(&entries);
                    component.entries = Some(entries);
                }
                Err(err) => {
                    error!(format!("json upload: {}", err));
                    component.preview_error = Some(INVALID_JSON.to_string());
                }
            }
            true
        }
        Msg::WorkbookRead { seq, file, result } => {
            if !component.uploads.is_current(seq) {
                return false;
            }
            match result {
                Ok(sheet_names) => {
                    component.workbook = Some(file);
                    component.sheet_names = sheet_names;
                    component.selected_sheet.clear();
                }
                Err(err) => {
                    error!(format!("workbook upload: {}", err));
                    component.preview_error = Some(WORKBOOK_UNREADABLE.to_string());
                }
            }
            true
        }
        Msg::SheetChanged(sheet) => {
            component.selected_sheet = sheet;
            true
        }
        Msg::SubmitSheet => {
            let file = match (&component.workbook, component.selected_sheet.is_empty()) {
                (Some(file), false) => file.clone(),
                _ => {
                    alert(NO_SHEET);
                    return false;
                }
            };

            let seq = component.uploads.start();
            let form = TransformForm::new(
                component.selection.meta(&component.user_id),
                component.selected_sheet.clone(),
            );
            component.transforming = true;
            component.preview_error = None;

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = transform_sheet(&file, &form).await;
                link.send_message(Msg::SheetTransformed { seq, result });
            });
            true
        }
        Msg::SheetTransformed { seq, result } => {
            if !component.uploads.is_current(seq) {
                return false;
            }
            component.transforming = false;
            match result {
                Ok(entries) => {
                    log!(format!("sheet transformed into {} table definitions", entries.len()));
                    component.preview = pretty_json(&entries);
                    component.entries = Some(entries);
                }
                Err(err) => {
                    error!(format!("transform-excel: {}", err));
                    component.preview_error = Some(TRANSFORM_FAILED.to_string());
                }
            }
            true
        }
        Msg::Generate => {
            component.notebook = None;
            component.output_error = None;

            let Some(entries) = component.entries.as_ref() else {
                component.generating = false;
                alert(NO_SOURCE);
                return true;
            };

            let payload = build_request_body(entries, component.selection.meta(&component.user_id));
            if payload.table_count() == 0 {
                warn!("no entry has a target_table; sending an empty request");
            }

            let seq = component.generations.start();
            component.generating = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                let result = generate_notebook(&payload).await;
                link.send_message(Msg::Generated { seq, result });
            });
            true
        }
        Msg::Generated { seq, result } => {
            if !component.generations.is_current(seq) {
                return false;
            }
            component.generating = false;
            match result {
                Ok(GenerateOutcome::Notebook { code, filename }) => {
                    show_toast(&format!("{} is ready.", filename));
                    component.notebook = Some(notebook_download(code, filename));
                }
                Ok(GenerateOutcome::Failed(message)) => {
                    component.output_error = Some(message);
                }
                Err(err) => {
                    error!(format!("generate-notebook: {}", err));
                    component.output_error = Some(GENERATE_FAILED.to_string());
                }
            }
            true
        }
    }
}
