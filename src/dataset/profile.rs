//! Clinical profile definition

use serde::Serialize;

/// Number of severity axes every profile is scored on
pub const AXIS_COUNT: usize = 6;

/// Highest severity score on any axis
pub const MAX_SCORE: u8 = 10;

/// One severity score (0..=10) per axis, in axis order
pub type Scores = [u8; AXIS_COUNT];

/// A clinical profile
///
/// Profiles carry:
/// - A unique name (e.g. "TPB")
/// - One score per axis
/// - Declared symptoms and comorbidities, as free text
/// - The color used to draw the profile on the radar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub scores: Scores,
    pub symptoms: Vec<String>,
    pub comorbidities: Vec<String>,
    pub color: String,
}

impl Profile {
    /// Create a profile without symptoms or comorbidities
    pub fn new(name: impl Into<String>, scores: Scores, color: impl Into<String>) -> Self {
        Profile {
            name: name.into(),
            scores,
            symptoms: Vec::new(),
            comorbidities: Vec::new(),
            color: color.into(),
        }
    }

    pub fn with_symptoms<I, S>(mut self, symptoms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symptoms.extend(symptoms.into_iter().map(Into::into));
        self
    }

    pub fn with_comorbidities<I, S>(mut self, comorbidities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comorbidities
            .extend(comorbidities.into_iter().map(Into::into));
        self
    }

    /// Score on the axis at `index`, clamped to [`MAX_SCORE`]
    pub fn score(&self, index: usize) -> Option<u8> {
        self.scores.get(index).map(|s| (*s).min(MAX_SCORE))
    }
}
