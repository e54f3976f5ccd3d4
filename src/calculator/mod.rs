//! Result computation: clamping, totals, percentage and letter grade.
//!
//! Everything in here is pure. The endpoint and the client fallback both go
//! through [`compute`] so a record looks the same whichever side produced it.

pub mod compute;
pub mod grade;
pub mod types;

pub use compute::{clamp_score, compute};
pub use grade::Grade;
pub use types::{
    Identity, MAX_MARKS_PER_SUBJECT, MarksInput, ResultRecord, SUBJECTS_COUNT, Subject,
    SubjectMarks,
};
