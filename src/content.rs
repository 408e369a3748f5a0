use std::collections::HashSet;
use std::fmt;

use log::debug;
use serde::Deserialize;

use crate::error::{Result, SiteError};
use crate::links;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContactKind {
    Call,
    Message,
    Email,
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContactKind::Call => "call",
            ContactKind::Message => "message",
            ContactKind::Email => "email",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub destination: String,
}

impl ContactChannel {
    /// Outbound URI for this channel. Messaging links carry `message`.
    pub fn href(&self, message: &str) -> String {
        match self.kind {
            ContactKind::Call => links::telephone_link(&self.destination),
            ContactKind::Message => links::messaging_link(&self.destination, message),
            ContactKind::Email => links::email_link(&self.destination),
        }
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IconRef {
    Scale,
    Activity,
    ActivitySquare,
    HeartPulse,
    Leaf,
}

impl IconRef {
    pub fn class_name(self) -> &'static str {
        match self {
            IconRef::Scale => "icon-scale",
            IconRef::Activity => "icon-activity",
            IconRef::ActivitySquare => "icon-activity-square",
            IconRef::HeartPulse => "icon-heart-pulse",
            IconRef::Leaf => "icon-leaf",
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct MetricTag {
    pub label: String,
    pub icon: IconRef,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ServiceOffering {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct PricingTier {
    pub name: String,
    pub billing_period: String,
    pub summary: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub highlighted: bool,
    pub cta_label: String,
    pub cta_message: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Brand {
    pub name: String,
    pub initials: String,
    pub tagline: String,
    pub avatar: String,
    pub bio: String,
}

/// Pre-filled messages for the messaging call-to-actions around the page.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Messages {
    pub book_trial: String,
    pub hero_chat: String,
    pub zoom_link: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    pub brand: Brand,
    pub messages: Messages,
    pub channels: Vec<ContactChannel>,
    pub metrics: Vec<MetricTag>,
    pub services: Vec<ServiceOffering>,
    pub pricing: Vec<PricingTier>,
    pub faq: Vec<FaqEntry>,
    pub orientation: Vec<String>,
    pub office_hours: Vec<String>,
    pub location: String,
    pub gallery: Vec<String>,
}

impl SiteContent {
    /// Parses and validates the content bundled into the binary.
    pub fn load() -> Result<Self> {
        Self::from_json(SITE_JSON)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let content: SiteContent = serde_json::from_str(raw)?;
        content.validate()?;
        debug!(
            "Loaded site content: {} images, {} FAQ entries, {} pricing tiers",
            content.gallery.len(),
            content.faq.len(),
            content.pricing.len()
        );
        Ok(content)
    }

    fn validate(&self) -> Result<()> {
        if self.gallery.is_empty() {
            return Err(SiteError::EmptyGallery);
        }

        let mut seen = HashSet::new();
        for entry in &self.faq {
            if !seen.insert(entry.id.as_str()) {
                return Err(SiteError::DuplicateFaqId(entry.id.clone()));
            }
        }

        for kind in [ContactKind::Call, ContactKind::Message, ContactKind::Email] {
            self.channel(kind)?;
        }
        Ok(())
    }

    /// First configured channel of `kind`.
    pub fn channel(&self, kind: ContactKind) -> Result<&ContactChannel> {
        self.channels
            .iter()
            .find(|c| c.kind == kind)
            .ok_or(SiteError::MissingChannel(kind))
    }

    /// Messaging deep link to the primary number with a pre-filled `message`.
    pub fn whatsapp(&self, message: &str) -> String {
        match self.channel(ContactKind::Message) {
            Ok(channel) => channel.href(message),
            Err(_) => String::new(),
        }
    }

    pub fn whatsapp_default(&self) -> String {
        match self.channel(ContactKind::Message) {
            Ok(channel) => links::default_messaging_link(&channel.destination),
            Err(_) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_content_is_valid() {
        let content = SiteContent::load().expect("bundled content");
        assert_eq!(content.gallery.len(), 29);
        assert_eq!(content.faq.len(), 3);
        assert_eq!(content.pricing.iter().filter(|t| t.highlighted).count(), 1);
        assert_eq!(content.brand.initials, "VS");
    }

    #[test]
    fn channels_build_their_own_scheme() {
        let content = SiteContent::load().unwrap();
        let call = content.channel(ContactKind::Call).unwrap();
        assert_eq!(call.href("ignored"), "tel:9302559659");
        let email = content.channel(ContactKind::Email).unwrap();
        assert_eq!(email.href("ignored"), "mailto:coach@vedprakash.fit");
        assert_eq!(
            content.whatsapp("Hi"),
            "https://wa.me/919302559659?text=Hi"
        );
    }

    fn minimal(gallery: &str, faq: &str, channels: &str) -> String {
        format!(
            r#"{{
                "brand": {{"name": "A", "initials": "AB", "tagline": "t", "avatar": "/a.png", "bio": "b"}},
                "messages": {{"book_trial": "b", "hero_chat": "h", "zoom_link": "z"}},
                "channels": {channels},
                "metrics": [], "services": [], "pricing": [],
                "faq": {faq},
                "orientation": [], "office_hours": [], "location": "x",
                "gallery": {gallery}
            }}"#
        )
    }

    const ALL_CHANNELS: &str = r#"[
        {"kind": "call", "destination": "1"},
        {"kind": "message", "destination": "2"},
        {"kind": "email", "destination": "a@b"}
    ]"#;

    #[test]
    fn empty_gallery_is_rejected() {
        let raw = minimal("[]", "[]", ALL_CHANNELS);
        assert!(matches!(SiteContent::from_json(&raw), Err(SiteError::EmptyGallery)));
    }

    #[test]
    fn duplicate_faq_ids_are_rejected() {
        let faq = r#"[
            {"id": "q1", "question": "a", "answer": "b"},
            {"id": "q1", "question": "c", "answer": "d"}
        ]"#;
        let raw = minimal(r#"["/x.jpeg"]"#, faq, ALL_CHANNELS);
        match SiteContent::from_json(&raw) {
            Err(SiteError::DuplicateFaqId(id)) => assert_eq!(id, "q1"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn missing_channel_kind_is_rejected() {
        let channels = r#"[{"kind": "call", "destination": "1"}]"#;
        let raw = minimal(r#"["/x.jpeg"]"#, "[]", channels);
        assert!(matches!(
            SiteContent::from_json(&raw),
            Err(SiteError::MissingChannel(ContactKind::Message))
        ));
    }

    #[test]
    fn malformed_json_surfaces_parse_error() {
        let err = SiteContent::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SiteError::Content(_)));
        assert!(err.to_string().starts_with("site content is malformed"));
    }
}
