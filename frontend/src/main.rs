use crate::app::App;

mod app;
mod components;

fn main() {
    gloo_console::log!("Notebook generator studio loaded");
    yew::Renderer::<App>::new().render();
}
