//! Notebook generator page: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view rendering,
//! service calls and browser helpers.
//!
//! On first render the classification map is fetched once; everything else is
//! driven by user actions through [`Msg`].

use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

mod api;
mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::NotebookGeneratorComponent;

impl Component for NotebookGeneratorComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        NotebookGeneratorComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_classified_map().await {
                    Ok(map) => link.send_message(Msg::MapLoaded(map)),
                    Err(err) => {
                        error!(format!("failed to load classifications: {}", err));
                        link.send_message(Msg::MapFailed(err));
                    }
                }
            });
        }
    }
}
