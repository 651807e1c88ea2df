//! Page state of the generator.
//!
//! One struct holds everything the page shows: the classification map and
//! the cascade built on it, the loaded table entries with their preview, the
//! workbook awaiting a sheet choice, and the last generated notebook.

use common::model::classification::ClassifiedMap;
use common::model::entry::TableEntry;
use common::selection::SelectionState;
use common::sequence::RequestSequence;
use gloo_file::ObjectUrl;
use yew::prelude::*;

/// A generated notebook ready for download. Dropping it revokes the URL.
pub struct Notebook {
    pub code: String,
    pub filename: String,
    pub url: ObjectUrl,
}

pub struct NotebookGeneratorComponent {
    pub classified_map: ClassifiedMap,
    pub selection: SelectionState,
    /// Set when the classification map could not be fetched.
    pub map_error: Option<String>,

    pub user_id: String,

    /// Entries the next generate action sends; `None` until an upload succeeds.
    pub entries: Option<Vec<TableEntry>>,
    /// Pretty-printed `entries`.
    pub preview: String,
    /// Inline message of the last failed upload or transform.
    pub preview_error: Option<String>,

    /// Workbook waiting for a sheet to be transformed.
    pub workbook: Option<web_sys::File>,
    pub sheet_names: Vec<String>,
    pub selected_sheet: String,
    pub transforming: bool,

    pub notebook: Option<Notebook>,
    pub output_error: Option<String>,
    pub generating: bool,

    /// Advanced by every upload or sheet submission.
    pub uploads: RequestSequence,
    /// Advanced by every generate action.
    pub generations: RequestSequence,

    pub file_input_ref: NodeRef,
    /// Guard for the one-time map fetch on first render.
    pub loaded: bool,
}

impl NotebookGeneratorComponent {
    pub fn new() -> Self {
        Self {
            classified_map: ClassifiedMap::new(),
            selection: SelectionState::default(),
            map_error: None,
            user_id: String::new(),
            entries: None,
            preview: String::new(),
            preview_error: None,
            workbook: None,
            sheet_names: Vec::new(),
            selected_sheet: String::new(),
            transforming: false,
            notebook: None,
            output_error: None,
            generating: false,
            uploads: RequestSequence::default(),
            generations: RequestSequence::default(),
            file_input_ref: NodeRef::default(),
            loaded: false,
        }
    }

    /// Replaces the selection with the result of `event`.
    pub fn apply_selection(&mut self, event: common::selection::SelectionEvent) {
        let current = std::mem::take(&mut self.selection);
        self.selection = current.update(&self.classified_map, event);
    }

    pub fn clear_workbook(&mut self) {
        self.workbook = None;
        self.sheet_names.clear();
        self.selected_sheet.clear();
        self.transforming = false;
    }
}
