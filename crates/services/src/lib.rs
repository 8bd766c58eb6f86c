#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod sessions;

pub use catalog::Catalog;
pub use error::{CatalogError, SessionError};
pub use sessions::{
    EditOutcome, EditRejection, PointControl, QuestionOption, SessionFrame, SessionService,
};
