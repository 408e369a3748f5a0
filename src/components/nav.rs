use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::avatar::{Avatar, AvatarState};
use crate::config;
use crate::content::SiteContent;

/// In-page anchors, in the order they appear on the page.
pub const SECTIONS: [&str; 6] = ["about", "metrics", "services", "results", "pricing", "contact"];

/// Desktop labels differ from the anchor ids for a couple of sections.
const DESKTOP_LABELS: [(&str, &str); 6] = [
    ("about", "About"),
    ("metrics", "Metrics"),
    ("services", "Services"),
    ("results", "Results"),
    ("pricing", "Plans"),
    ("contact", "Contact"),
];

/// Mobile drawer open/closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Anchor id with its first letter upper-cased (`about` -> `About`).
pub fn section_label(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub content: Rc<SiteContent>,
    pub avatar: AvatarState,
    pub on_avatar_click: Callback<()>,
    pub on_avatar_error: Callback<()>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { content, avatar, on_avatar_click, on_avatar_error } = props;
    let menu = use_state(MenuState::default);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let offset = scroll_window
                        .document()
                        .and_then(|document| document.document_element())
                        .map(|root| root.scroll_top())
                        .unwrap_or(0);
                    is_scrolled.set(offset > config::HEADER_SCROLL_THRESHOLD);
                }) as Box<dyn FnMut()>);

                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    warn!("Failed to register scroll listener: {:?}", e);
                }
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    if let Err(e) = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Failed to remove scroll listener: {:?}", e);
                    }
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *menu;
            next.toggle();
            menu.set(next);
        })
    };

    // Anchor navigation still happens, only the drawer is dismissed.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *menu;
            next.close();
            menu.set(next);
        })
    };

    let open_profile = {
        let on_avatar_click = on_avatar_click.clone();
        Callback::from(move |_: MouseEvent| on_avatar_click.emit(()))
    };

    html! {
        <header class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <div class="brand">
                    <button class="brand-avatar" onclick={open_profile} aria-label="About the coach">
                        <Avatar
                            src={content.brand.avatar.clone()}
                            initials={content.brand.initials.clone()}
                            alt={content.brand.name.clone()}
                            state={*avatar}
                            on_error={on_avatar_error.clone()}
                        />
                    </button>
                    <div class="brand-text">
                        <p class="brand-name">{&content.brand.name}</p>
                        <p class="brand-tagline">{&content.brand.tagline}</p>
                    </div>
                </div>

                <nav class="nav-desktop">
                    { for DESKTOP_LABELS.iter().map(|(id, label)| html! {
                        <a href={format!("#{}", id)} class="nav-link">{*label}</a>
                    }) }
                    <a href={content.whatsapp(&content.messages.book_trial)} class="button">
                        {"Book Trial"}
                    </a>
                </nav>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    {if menu.is_open() { "✕" } else { "☰" }}
                </button>
            </div>
            {
                if menu.is_open() {
                    html! {
                        <div class="nav-drawer">
                            { for SECTIONS.iter().map(|id| html! {
                                <a key={id.to_string()} href={format!("#{}", id)} onclick={close_menu.clone()} class="drawer-link">
                                    {section_label(id)}
                                </a>
                            }) }
                            <a href={content.whatsapp_default()} class="button drawer-cta">{"WhatsApp"}</a>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
