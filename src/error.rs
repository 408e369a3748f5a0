use thiserror::Error;

use crate::content::ContactKind;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("site content is malformed: {0}")]
    Content(#[from] serde_json::Error),

    #[error("image gallery must contain at least one image")]
    EmptyGallery,

    #[error("duplicate FAQ id `{0}`")]
    DuplicateFaqId(String),

    #[error("unknown FAQ id `{0}`")]
    UnknownFaqEntry(String),

    #[error("no {0} contact channel configured")]
    MissingChannel(ContactKind),
}

pub type Result<T> = std::result::Result<T, SiteError>;
