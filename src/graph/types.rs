//! Core type definitions for the symptom network

use crate::error::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Node category: which kind of entity a node stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Profile,
    Symptom,
    Comorbidity,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Profile, Category::Symptom, Category::Comorbidity];

    /// Name shown in the category filter ("Profils", "Symptômes", "Comorbidités")
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Profile => "Profils",
            Category::Symptom => "Symptômes",
            Category::Comorbidity => "Comorbidités",
        }
    }

    /// Stable lowercase identifier used in JSON
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Profile => "profile",
            Category::Symptom => "symptom",
            Category::Comorbidity => "comorbidity",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Accepts either the display name or the slug, ignoring case and surrounding blanks
impl FromStr for Category {
    type Err = DashboardError;

    fn from_str(s: &str) -> DashboardResult<Self> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.display_name().to_lowercase() == wanted || c.slug() == wanted)
            .ok_or_else(|| DashboardError::UnknownCategory(s.trim().to_string()))
    }
}

/// A set of categories, iterated in declaration order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySet(BTreeSet<Category>);

impl CategorySet {
    pub fn empty() -> Self {
        CategorySet(BTreeSet::new())
    }

    pub fn all() -> Self {
        Category::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, category: Category) -> bool {
        self.0.insert(category)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0.contains(&category)
    }

    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        CategorySet(iter.into_iter().collect())
    }
}

/// Node identity: the category together with the displayed label.
///
/// Two profiles declaring the same symptom text share one node, while a
/// symptom and a comorbidity with the same text stay distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeKey {
    pub category: Category,
    pub label: String,
}

impl NodeKey {
    pub fn new(category: Category, label: impl Into<String>) -> Self {
        NodeKey {
            category,
            label: label.into(),
        }
    }

    pub fn profile(label: impl Into<String>) -> Self {
        Self::new(Category::Profile, label)
    }

    pub fn symptom(label: impl Into<String>) -> Self {
        Self::new(Category::Symptom, label)
    }

    pub fn comorbidity(label: impl Into<String>) -> Self {
        Self::new(Category::Comorbidity, label)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.category.slug())
    }
}
