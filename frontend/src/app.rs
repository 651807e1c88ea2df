use crate::components::generator::NotebookGeneratorComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <main class="studio">
                <header class="studio-header">
                    <h1>{"Notebook Generator"}</h1>
                </header>
                <NotebookGeneratorComponent />
            </main>
        }
    }
}
