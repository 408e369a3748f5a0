use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::avatar::{Avatar, AvatarState};
use crate::content::{ContactKind, SiteContent};

/// Where a click inside the open modal landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalClick {
    Backdrop,
    CloseButton,
    Content,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    open: bool,
}

impl ModalState {
    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Backdrop and close-button clicks dismiss the dialog. Clicks on the
    /// content are stopped there and never reach the backdrop.
    pub fn click(&mut self, target: ModalClick) {
        match target {
            ModalClick::Backdrop | ModalClick::CloseButton => self.close(),
            ModalClick::Content => {}
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfileModalProps {
    pub content: Rc<SiteContent>,
    pub avatar: AvatarState,
    pub on_avatar_error: Callback<()>,
    pub on_click: Callback<ModalClick>,
}

/// Profile overlay. The parent owns `ModalState` and only mounts this while
/// it is open.
#[function_component(ProfileModal)]
pub fn profile_modal(props: &ProfileModalProps) -> Html {
    let content = &props.content;

    let on_backdrop = {
        let on_click = props.on_click.clone();
        Callback::from(move |_: MouseEvent| on_click.emit(ModalClick::Backdrop))
    };

    let on_content = {
        let on_click = props.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_click.emit(ModalClick::Content);
        })
    };

    let on_close_button = {
        let on_click = props.on_click.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_click.emit(ModalClick::CloseButton);
        })
    };

    let contacts = [ContactKind::Call, ContactKind::Message, ContactKind::Email]
        .into_iter()
        .filter_map(|kind| content.channel(kind).ok())
        .map(|channel| {
            let (label, href) = match channel.kind {
                ContactKind::Call => (format!("Call {}", channel.destination), channel.href("")),
                ContactKind::Message => ("WhatsApp".to_string(), content.whatsapp_default()),
                ContactKind::Email => ("Email".to_string(), channel.href("")),
            };
            html! { <a class="button button-outline" href={href}>{label}</a> }
        })
        .collect::<Html>();

    html! {
        <div class="modal-overlay" onclick={on_backdrop}>
            <div class="modal-content" onclick={on_content}>
                <button class="modal-close" onclick={on_close_button}>{"×"}</button>
                <Avatar
                    src={content.brand.avatar.clone()}
                    initials={content.brand.initials.clone()}
                    alt={content.brand.name.clone()}
                    state={props.avatar}
                    on_error={props.on_avatar_error.clone()}
                    large={true}
                />
                <h3>{&content.brand.name}</h3>
                <p class="modal-tagline">{&content.brand.tagline}</p>
                <p>{&content.brand.bio}</p>
                <div class="modal-actions">{contacts}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_opens() {
        let mut modal = ModalState::default();
        assert!(!modal.is_open());
        modal.open();
        assert!(modal.is_open());
    }

    #[test]
    fn content_click_keeps_it_open() {
        let mut modal = ModalState::default();
        modal.open();
        modal.click(ModalClick::Content);
        assert!(modal.is_open());
    }

    #[test]
    fn backdrop_click_closes_it() {
        let mut modal = ModalState::default();
        modal.open();
        modal.click(ModalClick::Backdrop);
        assert!(!modal.is_open());
    }

    #[test]
    fn close_button_closes_it() {
        let mut modal = ModalState::default();
        modal.open();
        modal.click(ModalClick::CloseButton);
        assert!(!modal.is_open());
    }

    #[test]
    fn clicks_while_closed_change_nothing() {
        let mut modal = ModalState::default();
        modal.click(ModalClick::Content);
        modal.click(ModalClick::Backdrop);
        assert!(!modal.is_open());
    }

    #[test]
    fn reopening_starts_from_a_clean_state() {
        let mut modal = ModalState::default();
        modal.open();
        modal.click(ModalClick::Backdrop);
        assert_eq!(modal, ModalState::default());
        modal.open();
        let mut fresh = ModalState::default();
        fresh.open();
        assert_eq!(modal, fresh);
    }
}
