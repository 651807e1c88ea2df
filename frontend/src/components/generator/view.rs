//! View rendering for the notebook generator page.
//!
//! Three areas top to bottom: the selection bar (user, classification, domain,
//! product), the source area (file input, sheet picker and the JSON preview)
//! and the output area (generate button, generated code and its download).

use common::model::classification::capitalize;
use common::selection::{SelectionEvent, SelectionState};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::NotebookGeneratorComponent;
use crate::components::code_panel::CodePanel;

pub fn view(component: &NotebookGeneratorComponent, ctx: &Context<NotebookGeneratorComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="generator-root">
            { build_selection_bar(component, link) }
            <div class="panes">
                { build_source_pane(component, link) }
                { build_output_pane(component, link) }
            </div>
        </div>
    }
}

fn build_selection_bar(
    component: &NotebookGeneratorComponent,
    link: &Scope<NotebookGeneratorComponent>,
) -> Html {
    let selection = &component.selection;
    let classifications = SelectionState::classifications(&component.classified_map);

    let on_user = link.callback(|e: InputEvent| {
        Msg::UserIdChanged(e.target_unchecked_into::<HtmlInputElement>().value())
    });
    let on_classification = link.callback(|e: Event| {
        Msg::Select(SelectionEvent::ClassificationChanged(select_value(&e)))
    });
    let on_domain =
        link.callback(|e: Event| Msg::Select(SelectionEvent::DomainChanged(select_value(&e))));
    let on_product =
        link.callback(|e: Event| Msg::Select(SelectionEvent::ProductChanged(select_value(&e))));

    html! {
        <div class="selection-bar">
            <label>
                {"User ID"}
                <input type="text" value={component.user_id.clone()} oninput={on_user} />
            </label>
            <label>
                {"Layer"}
                <select onchange={on_classification}>
                    { for classifications.iter().map(|c| html! {
                        <option value={c.clone()} selected={*c == selection.classification}>
                            { capitalize(c) }
                        </option>
                    }) }
                </select>
            </label>
            <label>
                {"Domain"}
                <select onchange={on_domain} disabled={selection.domains.is_empty()}>
                    { options(&selection.domains, &selection.domain, "No domains available") }
                </select>
            </label>
            <label>
                {"Product"}
                <select onchange={on_product} disabled={selection.products.is_empty()}>
                    { options(&selection.products, &selection.product, "No products available") }
                </select>
            </label>
            { error_line(component.map_error.as_deref()) }
        </div>
    }
}

fn build_source_pane(
    component: &NotebookGeneratorComponent,
    link: &Scope<NotebookGeneratorComponent>,
) -> Html {
    let file_input_ref = component.file_input_ref.clone();
    let on_file = link.batch_callback(move |_: Event| {
        let input = file_input_ref.cast::<HtmlInputElement>()?;
        let file = input.files()?.get(0)?;
        Some(Msg::FileChosen(file))
    });

    html! {
        <section class="pane source-pane">
            <h2>{"Source mapping"}</h2>
            <input
                type="file"
                accept=".json,.xlsx"
                ref={component.file_input_ref.clone()}
                onchange={on_file}
            />
            { build_sheet_picker(component, link) }
            { error_line(component.preview_error.as_deref()) }
            <CodePanel
                text={component.preview.clone()}
                placeholder="Upload a .json or .xlsx mapping to preview it here."
            />
        </section>
    }
}

fn build_sheet_picker(
    component: &NotebookGeneratorComponent,
    link: &Scope<NotebookGeneratorComponent>,
) -> Html {
    if component.workbook.is_none() {
        return html! {};
    }

    let on_sheet = link.callback(|e: Event| Msg::SheetChanged(select_value(&e)));
    let submit_disabled = component.selected_sheet.is_empty() || component.transforming;

    html! {
        <div class="sheet-picker">
            <select onchange={on_sheet}>
                <option value="" selected={component.selected_sheet.is_empty()}>
                    {"Select a sheet"}
                </option>
                { for component.sheet_names.iter().map(|name| html! {
                    <option value={name.clone()} selected={*name == component.selected_sheet}>
                        { name.clone() }
                    </option>
                }) }
            </select>
            <button
                class="btn"
                disabled={submit_disabled}
                onclick={link.callback(|_| Msg::SubmitSheet)}
            >
                { if component.transforming { "Transforming..." } else { "Use sheet" } }
            </button>
        </div>
    }
}

fn build_output_pane(
    component: &NotebookGeneratorComponent,
    link: &Scope<NotebookGeneratorComponent>,
) -> Html {
    let code = component
        .notebook
        .as_ref()
        .map(|n| AttrValue::from(n.code.clone()))
        .unwrap_or_default();

    html! {
        <section class="pane output-pane">
            <h2>{"Generated notebook"}</h2>
            <div class="actions">
                <button
                    class="btn primary"
                    disabled={component.generating}
                    onclick={link.callback(|_| Msg::Generate)}
                >
                    {"Generate notebook"}
                </button>
                if component.generating {
                    <div class="loader" title="Generating"></div>
                }
                if let Some(notebook) = &component.notebook {
                    <a class="btn" href={notebook.url.to_string()} download={notebook.filename.clone()}>
                        { format!("Download {}", notebook.filename) }
                    </a>
                }
            </div>
            { error_line(component.output_error.as_deref()) }
            <CodePanel text={code} placeholder="The generated notebook appears here." />
        </section>
    }
}

fn options(values: &[String], selected: &str, empty_label: &'static str) -> Html {
    if values.is_empty() {
        return html! { <option value="">{ empty_label }</option> };
    }
    values
        .iter()
        .map(|v| html! { <option value={v.clone()} selected={v == selected}>{ v.clone() }</option> })
        .collect()
}

fn error_line(message: Option<&str>) -> Html {
    match message {
        Some(message) => html! { <p class="error">{ message.to_string() }</p> },
        None => html! {},
    }
}

fn select_value(e: &Event) -> String {
    e.target_unchecked_into::<HtmlSelectElement>().value()
}
