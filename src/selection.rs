//! User selection: which profiles and which node categories to show
//!
//! This is the input boundary. Every name is checked against the dataset and
//! the closed category list here, so nothing downstream sees an unknown value.

use crate::dataset::Dataset;
use crate::error::{DashboardError, DashboardResult};
use crate::graph::{Category, CategorySet};
use serde::Serialize;

/// Validated selection, profiles in dataset order without duplicates
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    profiles: Vec<String>,
    categories: CategorySet,
}

impl Selection {
    /// Every profile and every category (the widgets' default)
    pub fn all(dataset: &Dataset) -> Self {
        Selection {
            profiles: dataset.profile_names().into_iter().map(String::from).collect(),
            categories: CategorySet::all(),
        }
    }

    /// Validate a selection against the dataset
    pub fn new<I, S>(dataset: &Dataset, profiles: I, categories: CategorySet) -> DashboardResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut indices = Vec::new();
        for name in profiles {
            let name = name.as_ref().trim();
            let idx = dataset
                .profile_index(name)
                .ok_or_else(|| DashboardError::UnknownProfile(name.to_string()))?;
            indices.push(idx);
        }
        indices.sort_unstable();
        indices.dedup();

        let names = dataset.profile_names();
        Ok(Selection {
            profiles: indices.into_iter().map(|i| names[i].to_string()).collect(),
            categories,
        })
    }

    /// Parse comma-separated lists as sent by the dashboard widgets.
    ///
    /// `None` selects everything; an empty string selects nothing.
    pub fn parse(
        dataset: &Dataset,
        profiles: Option<&str>,
        categories: Option<&str>,
    ) -> DashboardResult<Self> {
        let categories = match categories {
            Some(list) => parse_categories(list)?,
            None => CategorySet::all(),
        };

        match profiles {
            Some(list) => Self::new(dataset, split_list(list), categories),
            None => Ok(Selection {
                categories,
                ..Self::all(dataset)
            }),
        }
    }

    pub fn profiles(&self) -> &[String] {
        &self.profiles
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }
}

/// Parse a comma-separated category list
pub fn parse_categories(list: &str) -> DashboardResult<CategorySet> {
    split_list(list).map(str::parse::<Category>).collect()
}

fn split_list(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|item| !item.is_empty())
}
