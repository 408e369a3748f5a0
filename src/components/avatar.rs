use web_sys::Event;
use yew::prelude::*;

use crate::config;

/// What the avatar slot shows. Once the image fails it stays on the
/// initials glyph; the broken URL is not requested again.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AvatarState {
    failed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AvatarView<'a> {
    Image(&'a str),
    Initials(&'a str),
}

impl AvatarState {
    /// Marks the image as broken. Returns `true` only for the first failure.
    pub fn image_failed(&mut self) -> bool {
        let first = !self.failed;
        self.failed = true;
        first
    }

    pub fn view<'a>(self, src: &'a str, initials: &'a str) -> AvatarView<'a> {
        if self.failed || src.is_empty() {
            AvatarView::Initials(initials)
        } else {
            AvatarView::Image(src)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub src: String,
    pub initials: String,
    pub alt: String,
    /// Owned by the page so every avatar instance, including ones mounted
    /// later, sees the same failure.
    pub state: AvatarState,
    pub on_error: Callback<()>,
    #[prop_or_default]
    pub large: bool,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let onerror = {
        let on_error = props.on_error.clone();
        Callback::from(move |_: Event| on_error.emit(()))
    };

    let class = classes!("avatar", props.large.then(|| "avatar-large"));
    match props.state.view(&props.src, &props.initials) {
        AvatarView::Image(src) => html! {
            <img class={class} src={config::asset_url(src)} alt={props.alt.clone()} {onerror} />
        },
        AvatarView::Initials(initials) => html! {
            <div class={classes!(class, "avatar-initials")}>{initials}</div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_image_until_it_fails() {
        let state = AvatarState::default();
        assert_eq!(state.view("/images/profile.jpeg", "VS"), AvatarView::Image("/images/profile.jpeg"));
    }

    #[test]
    fn failure_switches_to_initials_and_sticks() {
        let mut state = AvatarState::default();
        state.image_failed();
        // Every later render reads the same state.
        for _ in 0..3 {
            assert_eq!(state.view("/images/profile.jpeg", "VS"), AvatarView::Initials("VS"));
        }
        assert!(!state.image_failed());
        assert_eq!(state.view("/images/profile.jpeg", "VS"), AvatarView::Initials("VS"));
    }

    #[test]
    fn failure_survives_a_remount() {
        // The page keeps one state; a freshly mounted avatar (e.g. the
        // modal reopening) reads the same value instead of a new default.
        let mut shared = AvatarState::default();
        assert!(shared.image_failed());
        let nav_view = shared.view("/images/profile.jpeg", "VS");
        let remounted = shared;
        assert_eq!(nav_view, AvatarView::Initials("VS"));
        assert_eq!(remounted.view("/images/profile.jpeg", "VS"), AvatarView::Initials("VS"));
        assert_ne!(remounted, AvatarState::default());
    }

    #[test]
    fn missing_source_uses_initials() {
        assert_eq!(AvatarState::default().view("", "VS"), AvatarView::Initials("VS"));
    }
}
