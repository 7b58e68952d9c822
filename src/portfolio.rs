mod contact;
mod content;
mod scroll_spy;
mod section;
mod state;

pub use contact::{ContactDraft, ContactField, MailtoLink};
pub use content::{profile, ContentError, EducationEntry, ExperienceEntry, Profile};
pub use scroll_spy::{resolve_active, Viewport};
pub use section::{NavTarget, Section};
pub use state::{PageState, ScrollRequest};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("unknown contact field: {0}")]
    UnknownField(String),
    #[error("required field is empty: {0}")]
    MissingField(ContactField),
}
