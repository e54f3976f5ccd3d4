use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Letter grade derived from a percentage (0–100).
///
/// | Range   | Grade |
/// |---------|-------|
/// | >= 90   | A+    |
/// | >= 80   | A     |
/// | >= 70   | B     |
/// | >= 60   | C     |
/// | >= 50   | D     |
/// | < 50    | F     |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

/// Lower bounds, checked top-down; the first bound the percentage reaches wins.
static THRESHOLDS: &[(f64, Grade)] = &[
    (90.0, Grade::APlus),
    (80.0, Grade::A),
    (70.0, Grade::B),
    (60.0, Grade::C),
    (50.0, Grade::D),
];

impl Grade {
    /// All grades, best first.
    pub const ALL: [Grade; 6] = [
        Grade::APlus,
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::F,
    ];

    /// Maps a percentage onto a grade. Total over `f64`: NaN lands on `F`.
    pub fn from_percentage(p: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| p >= *min)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }

    /// The smallest percentage that earns this grade, `None` for `F`.
    pub fn min_percentage(&self) -> Option<f64> {
        THRESHOLDS
            .iter()
            .find(|(_, grade)| grade == self)
            .map(|(min, _)| *min)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|g| g.as_str() == s.trim())
            .ok_or_else(|| anyhow::anyhow!("unknown grade '{s}'"))
    }
}
