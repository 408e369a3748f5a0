use log::warn;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FaqEntry;
use crate::error::{Result, SiteError};

/// Which FAQ entry is expanded. At most one is open at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccordionSelection {
    ids: Vec<String>,
    open_id: Option<String>,
}

impl AccordionSelection {
    pub fn new(entries: &[FaqEntry]) -> Self {
        Self {
            ids: entries.iter().map(|e| e.id.clone()).collect(),
            open_id: None,
        }
    }

    /// Swaps in a new entry list. The open entry survives only if its id is
    /// still present.
    pub fn set_entries(&mut self, entries: &[FaqEntry]) {
        self.ids = entries.iter().map(|e| e.id.clone()).collect();
        if let Some(open) = &self.open_id {
            if !self.ids.contains(open) {
                self.open_id = None;
            }
        }
    }

    pub fn open_id(&self) -> Option<&str> {
        self.open_id.as_deref()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.open_id() == Some(id)
    }

    /// Opens `id` and closes whatever else was open, or collapses `id` if it
    /// already was the open one. Unknown ids are rejected and leave the
    /// selection untouched.
    pub fn toggle(&mut self, id: &str) -> Result<()> {
        if !self.ids.iter().any(|known| known == id) {
            return Err(SiteError::UnknownFaqEntry(id.to_string()));
        }
        if self.is_open(id) {
            self.open_id = None;
        } else {
            self.open_id = Some(id.to_string());
        }
        Ok(())
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    open: bool,
    on_toggle: Callback<String>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = props.entry.id.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id.clone());
        })
    };

    html! {
        <div id={props.entry.id.clone()} class={classes!("faq-item", props.open.then(|| "open"))}>
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.entry.question}</span>
                <span class="toggle-icon">{if props.open { "−" } else { "+" }}</span>
            </button>
            {
                if props.open {
                    html! { <div class="faq-answer">{&props.entry.answer}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqProps) -> Html {
    let selection = {
        let entries = props.entries.clone();
        use_state(move || AccordionSelection::new(&entries))
    };

    {
        let selection = selection.clone();
        use_effect_with_deps(
            move |entries: &Vec<FaqEntry>| {
                let mut next = (*selection).clone();
                next.set_entries(entries);
                if next != *selection {
                    selection.set(next);
                }
                || ()
            },
            props.entries.clone(),
        );
    }

    let on_toggle = {
        let selection = selection.clone();
        Callback::from(move |id: String| {
            let mut next = (*selection).clone();
            match next.toggle(&id) {
                Ok(()) => selection.set(next),
                Err(e) => warn!("Ignoring FAQ toggle: {}", e),
            }
        })
    };

    html! {
        <div class="faq-list">
            { for props.entries.iter().map(|entry| html! {
                <FaqItem
                    key={entry.id.clone()}
                    entry={entry.clone()}
                    open={selection.is_open(&entry.id)}
                    on_toggle={on_toggle.clone()}
                />
            }) }
        </div>
    }
}
