use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod error;
mod links;
mod timer;
mod components {
    pub mod avatar;
    pub mod carousel;
    pub mod faq;
    pub mod nav;
    pub mod profile_modal;
}
mod pages {
    pub mod landing;
}

use content::SiteContent;
use pages::landing::LandingPage;

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    info!("Rendering landing page");
    html! {
        <LandingPage content={props.content.clone()} />
    }
}

#[derive(Properties, PartialEq)]
struct BrokenContentProps {
    message: String,
}

#[function_component]
fn BrokenContent(props: &BrokenContentProps) -> Html {
    html! {
        <div class="content-error">
            <h1>{"This page is temporarily unavailable"}</h1>
            <p>{&props.message}</p>
        </div>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    match SiteContent::load() {
        Ok(content) => {
            info!(
                "Site content ready: {} services, {} metrics, {} images",
                content.services.len(),
                content.metrics.len(),
                content.gallery.len()
            );
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(e) => {
            error!("Failed to load site content: {}", e);
            yew::Renderer::<BrokenContent>::with_props(BrokenContentProps {
                message: e.to_string(),
            })
            .render();
        }
    }
}
