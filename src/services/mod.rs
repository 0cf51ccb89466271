pub mod form;
pub mod lifecycle;
pub mod listing;

pub use form::{ApiForm, ApiFormInput, FieldErrors, FormError, FormMode, FormPatch, Submission};
pub use lifecycle::PublishOutcome;
pub use listing::{ListQuery, RowActions, SortOrder};
