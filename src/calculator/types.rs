//! Data types shared by the calculator, the endpoint and the client.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calculator::grade::Grade;

/// Number of graded subjects on every sheet.
pub const SUBJECTS_COUNT: u32 = 5;

/// Upper bound of a single subject's mark.
pub const MAX_MARKS_PER_SUBJECT: u32 = 100;

/// The five graded subjects, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Mathematics,
    Physics,
    Chemistry,
    English,
    ComputerScience,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Mathematics,
        Subject::Physics,
        Subject::Chemistry,
        Subject::English,
        Subject::ComputerScience,
    ];

    /// Form field carrying this subject's mark.
    pub fn field(&self) -> &'static str {
        match self {
            Subject::Mathematics => "math",
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::English => "english",
            Subject::ComputerScience => "cs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::English => "English",
            Subject::ComputerScience => "Computer Science",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Who the marks belong to. Both fields are free text and copied verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub roll_number: String,
}

impl Identity {
    pub fn new(name: impl Into<String>, roll_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            roll_number: roll_number.into(),
        }
    }
}

/// One mark per subject. Serialized with the subject labels as keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectMarks {
    #[serde(rename = "Mathematics")]
    pub math: f64,
    #[serde(rename = "Physics")]
    pub physics: f64,
    #[serde(rename = "Chemistry")]
    pub chemistry: f64,
    #[serde(rename = "English")]
    pub english: f64,
    #[serde(rename = "Computer Science")]
    pub cs: f64,
}

impl SubjectMarks {
    pub fn from_array([math, physics, chemistry, english, cs]: [f64; 5]) -> Self {
        Self {
            math,
            physics,
            chemistry,
            english,
            cs,
        }
    }

    /// Marks in [`Subject::ALL`] order.
    pub fn to_array(&self) -> [f64; 5] {
        [self.math, self.physics, self.chemistry, self.english, self.cs]
    }

    pub fn get(&self, subject: Subject) -> f64 {
        match subject {
            Subject::Mathematics => self.math,
            Subject::Physics => self.physics,
            Subject::Chemistry => self.chemistry,
            Subject::English => self.english,
            Subject::ComputerScience => self.cs,
        }
    }

    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::from_array(self.to_array().map(f))
    }
}

/// A single submission: identity plus raw (not yet clamped) marks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarksInput {
    pub identity: Identity,
    pub scores: SubjectMarks,
}

/// Computed result for one submission, in the shape the endpoint serves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub roll_number: String,
    pub total: f64,
    pub percentage: f64,
    pub grade: Grade,
    #[serde(default = "default_subjects_count")]
    pub subjects_count: u32,
    #[serde(default = "default_max_marks")]
    pub max_marks_per_subject: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subjects: Option<SubjectMarks>,
}

fn default_subjects_count() -> u32 {
    SUBJECTS_COUNT
}

fn default_max_marks() -> u32 {
    MAX_MARKS_PER_SUBJECT
}
