use crate::calculator::Subject;

/// Why a submitted mark sheet was refused before any computation.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MarksError {
    /// The raw field did not parse as a finite number.
    #[error("Invalid marks format: {subject} mark `{raw}` is not a number")]
    NotANumber { subject: Subject, raw: String },
    /// The mark parsed but lies outside 0-100.
    #[error("Marks must be between 0 and 100: {subject} mark is {value}")]
    OutOfRange { subject: Subject, value: f64 },
    /// The request body could not be read as form data.
    #[error("Malformed form data: {0}")]
    MalformedForm(String),
}

impl MarksError {
    /// The subject the error refers to, if any.
    pub fn subject(&self) -> Option<Subject> {
        match self {
            MarksError::NotANumber { subject, .. } | MarksError::OutOfRange { subject, .. } => {
                Some(*subject)
            }
            MarksError::MalformedForm(_) => None,
        }
    }
}
