//! Create/edit form for API definitions.
//!
//! The form collects raw text input, validates it into [`ApiFields`] and
//! hands the result to whoever opened it. It never talks to the store.
//!
//! ```text
//! closed -> open(create | edit) -> closed
//!              ^         |
//!              +---------+  validation failure
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::models::{ApiDefinition, ApiFields, HttpMethod};

pub const NAME_REQUIRED: &str = "Please enter API name";
pub const DESCRIPTION_REQUIRED: &str = "Please enter description";
pub const BUSINESS_REQUIRED: &str = "Please enter business";
pub const METHOD_REQUIRED: &str = "Please select method";
pub const METHOD_INVALID: &str = "Method must be one of GET, POST, PUT, DELETE";

/// Raw, unvalidated form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiFormInput {
    pub name: String,
    pub description: String,
    pub business: String,
    pub method: String,
}

impl From<&ApiDefinition> for ApiFormInput {
    fn from(record: &ApiDefinition) -> Self {
        Self {
            name: record.name.clone(),
            description: record.description.clone(),
            business: record.business.clone(),
            method: record.method.as_str().to_string(),
        }
    }
}

/// Partial input; `None` leaves the current field value in place
#[derive(Debug, Clone, Default)]
pub struct FormPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub business: Option<String>,
    pub method: Option<String>,
}

impl ApiFormInput {
    pub fn apply(&mut self, patch: FormPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(business) = patch.business {
            self.business = business;
        }
        if let Some(method) = patch.method {
            self.method = method;
        }
    }
}

/// Per-field validation messages, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn insert(&mut self, field: &'static str, message: &'static str) {
        self.0.insert(field, message);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Form is not open")]
    Closed,

    #[error("Invalid form input: {0}")]
    Invalid(FieldErrors),
}

/// Check every required field and the method enumeration. Values are
/// trimmed before they are checked and returned.
pub fn validate(input: &ApiFormInput) -> Result<ApiFields, FieldErrors> {
    let mut errors = FieldErrors::default();

    let name = input.name.trim();
    if name.is_empty() {
        errors.insert("name", NAME_REQUIRED);
    }
    let description = input.description.trim();
    if description.is_empty() {
        errors.insert("description", DESCRIPTION_REQUIRED);
    }
    let business = input.business.trim();
    if business.is_empty() {
        errors.insert("business", BUSINESS_REQUIRED);
    }

    let method = input.method.trim();
    let parsed = if method.is_empty() {
        errors.insert("method", METHOD_REQUIRED);
        None
    } else {
        let parsed = HttpMethod::parse(method);
        if parsed.is_none() {
            errors.insert("method", METHOD_INVALID);
        }
        parsed
    };

    match parsed {
        Some(method) if errors.is_empty() => Ok(ApiFields {
            name: name.to_string(),
            description: description.to_string(),
            business: business.to_string(),
            method,
        }),
        _ => Err(errors),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(Uuid),
}

/// Validated output of a submitted form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create(ApiFields),
    Update { id: Uuid, fields: ApiFields },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum FormState {
    Closed,
    Open {
        mode: FormMode,
        input: ApiFormInput,
        errors: FieldErrors,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiForm {
    state: FormState,
}

impl ApiForm {
    pub fn new() -> Self {
        Self {
            state: FormState::Closed,
        }
    }

    /// Open blank, for registering a new API
    pub fn open_create(&mut self) {
        self.state = FormState::Open {
            mode: FormMode::Create,
            input: ApiFormInput::default(),
            errors: FieldErrors::default(),
        };
    }

    /// Open pre-filled with the values of `record`
    pub fn open_edit(&mut self, record: &ApiDefinition) {
        self.state = FormState::Open {
            mode: FormMode::Edit(record.id),
            input: ApiFormInput::from(record),
            errors: FieldErrors::default(),
        };
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, FormState::Open { .. })
    }

    pub fn mode(&self) -> Option<FormMode> {
        match &self.state {
            FormState::Open { mode, .. } => Some(*mode),
            FormState::Closed => None,
        }
    }

    pub fn title(&self) -> Option<&'static str> {
        self.mode().map(|mode| match mode {
            FormMode::Create => "Register New API",
            FormMode::Edit(_) => "Edit API",
        })
    }

    pub fn input(&self) -> Option<&ApiFormInput> {
        match &self.state {
            FormState::Open { input, .. } => Some(input),
            FormState::Closed => None,
        }
    }

    /// Errors from the last failed submit
    pub fn errors(&self) -> Option<&FieldErrors> {
        match &self.state {
            FormState::Open { errors, .. } => Some(errors),
            FormState::Closed => None,
        }
    }

    pub fn fill(&mut self, patch: FormPatch) -> Result<(), FormError> {
        match &mut self.state {
            FormState::Open { input, .. } => {
                input.apply(patch);
                Ok(())
            }
            FormState::Closed => Err(FormError::Closed),
        }
    }

    /// Validate and close. On failure the form stays open with its input
    /// and the per-field errors recorded.
    pub fn submit(&mut self) -> Result<Submission, FormError> {
        let FormState::Open {
            mode,
            input,
            errors,
        } = &mut self.state
        else {
            return Err(FormError::Closed);
        };

        match validate(input) {
            Ok(fields) => {
                let submission = match *mode {
                    FormMode::Create => Submission::Create(fields),
                    FormMode::Edit(id) => Submission::Update { id, fields },
                };
                self.state = FormState::Closed;
                Ok(submission)
            }
            Err(field_errors) => {
                *errors = field_errors.clone();
                Err(FormError::Invalid(field_errors))
            }
        }
    }

    /// Discard all input and close without emitting anything
    pub fn cancel(&mut self) -> Result<(), FormError> {
        if !self.is_open() {
            return Err(FormError::Closed);
        }
        self.state = FormState::Closed;
        Ok(())
    }
}

impl Default for ApiForm {
    fn default() -> Self {
        Self::new()
    }
}
