//! Form payload exchanged with the result endpoint.
//!
//! Fields travel as `application/x-www-form-urlencoded` strings, either as a
//! POST body or as a GET query string.

use serde::{Deserialize, Serialize};

use crate::calculator::{Identity, MarksInput, Subject, SubjectMarks};
use crate::error::MarksError;

/// Raw, unvalidated submission. Marks are kept as typed so the guard and the
/// endpoint can judge them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roll: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub math: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physics: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chemistry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cs: Option<String>,
}

impl FormPayload {
    /// Builds a payload from typed-in values, trimming each one.
    pub fn new(name: &str, roll: &str, marks: [&str; 5]) -> Self {
        let [math, physics, chemistry, english, cs] = marks.map(|m| Some(m.trim().to_string()));
        Self {
            name: Some(name.trim().to_string()),
            roll: Some(roll.trim().to_string()),
            math,
            physics,
            chemistry,
            english,
            cs,
        }
    }

    pub fn from_input(input: &MarksInput) -> Self {
        let marks = input.scores.to_array().map(|m| m.to_string());
        let [math, physics, chemistry, english, cs] = marks.each_ref().map(String::as_str);
        Self::new(
            &input.identity.name,
            &input.identity.roll_number,
            [math, physics, chemistry, english, cs],
        )
    }

    pub fn mark(&self, subject: Subject) -> Option<&str> {
        let raw = match subject {
            Subject::Mathematics => &self.math,
            Subject::Physics => &self.physics,
            Subject::Chemistry => &self.chemistry,
            Subject::English => &self.english,
            Subject::ComputerScience => &self.cs,
        };
        raw.as_deref()
    }

    pub fn identity(&self) -> Identity {
        Identity::new(
            self.name.clone().unwrap_or_default(),
            self.roll.clone().unwrap_or_default(),
        )
    }

    /// Encodes the payload as a form string, usable as body or query.
    pub fn encode(&self) -> anyhow::Result<String> {
        Ok(serde_urlencoded::to_string(self)?)
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, MarksError> {
        serde_urlencoded::from_bytes(bytes).map_err(|e| MarksError::MalformedForm(e.to_string()))
    }

    /// Strict guard: every present mark must be a finite number in 0-100.
    ///
    /// An absent mark field counts as `0`.
    pub fn validate(&self) -> Result<MarksInput, MarksError> {
        let mut marks = [0.0; 5];
        for (slot, subject) in marks.iter_mut().zip(Subject::ALL) {
            if let Some(raw) = self.mark(subject) {
                *slot = parse_mark(subject, raw)?;
            }
        }

        Ok(MarksInput {
            identity: self.identity(),
            scores: SubjectMarks::from_array(marks),
        })
    }

    /// Reads marks the way the local fallback does: anything that does not
    /// parse becomes NaN and is later clamped to 0.
    pub fn to_input_lenient(&self) -> MarksInput {
        let marks = Subject::ALL.map(|subject| {
            self.mark(subject)
                .map(str::trim)
                .filter(|raw| !raw.is_empty())
                .map(|raw| raw.parse::<f64>().unwrap_or(f64::NAN))
                .unwrap_or(0.0)
        });

        MarksInput {
            identity: self.identity(),
            scores: SubjectMarks::from_array(marks),
        }
    }
}

/// Parses one typed-in mark, rejecting blanks, non-numbers and values
/// outside 0-100.
pub fn parse_mark(subject: Subject, raw: &str) -> Result<f64, MarksError> {
    let not_a_number = || MarksError::NotANumber {
        subject,
        raw: raw.to_string(),
    };

    let value: f64 = raw.trim().parse().map_err(|_| not_a_number())?;
    if !value.is_finite() {
        return Err(not_a_number());
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(MarksError::OutOfRange { subject, value });
    }
    Ok(value)
}
