//! Read-only text pane with a line-number gutter, used for the source mapping
//! preview and the generated notebook.

use yew::{html, AttrValue, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CodePanelProps {
    pub text: AttrValue,
    /// Shown instead of the gutter when `text` is empty.
    #[prop_or_default]
    pub placeholder: AttrValue,
}

pub struct CodePanel;

impl Component for CodePanel {
    type Message = ();
    type Properties = CodePanelProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CodePanel
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        if props.text.is_empty() {
            return html! { <div class="code-panel empty">{ props.placeholder.clone() }</div> };
        }

        let line_count = props.text.lines().count().max(1);
        let line_numbers = (1..=line_count)
            .map(|n| html! { <div class="line-number">{n}</div> })
            .collect::<Html>();

        html! {
            <div class="code-panel">
                <div class="line-numbers">{ line_numbers }</div>
                <pre class="code-text"><code>{ props.text.clone() }</code></pre>
            </div>
        }
    }
}
