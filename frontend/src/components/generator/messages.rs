use common::model::classification::ClassifiedMap;
use common::model::entry::TableEntry;
use common::model::response::GenerateOutcome;
use common::selection::SelectionEvent;
use common::sequence::Ticket;

/// Messages of the generator page.
///
/// Replies of asynchronous work carry the sequence number of the action that
/// started them; replies for superseded actions are dropped.
pub enum Msg {
    MapLoaded(ClassifiedMap),
    MapFailed(String),
    Select(SelectionEvent),
    UserIdChanged(String),
    FileChosen(web_sys::File),
    JsonRead {
        seq: Ticket,
        result: Result<Vec<TableEntry>, String>,
    },
    WorkbookRead {
        seq: Ticket,
        file: web_sys::File,
        result: Result<Vec<String>, String>,
    },
    SheetChanged(String),
    SubmitSheet,
    SheetTransformed {
        seq: Ticket,
        result: Result<Vec<TableEntry>, String>,
    },
    Generate,
    Generated {
        seq: Ticket,
        result: Result<GenerateOutcome, String>,
    },
}
