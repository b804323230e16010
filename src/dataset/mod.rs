//! Static clinical dataset
//!
//! The dataset is an immutable value: built once at startup and shared
//! (behind an `Arc`) with the graph builder and the radar renderer.

mod builtin;
pub mod profile;

pub use profile::{Profile, Scores, AXIS_COUNT, MAX_SCORE};

use indexmap::IndexMap;

/// Ordered axes plus profiles keyed by name, in declaration order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    axes: [String; AXIS_COUNT],
    profiles: IndexMap<String, Profile>,
}

impl Dataset {
    /// Build a dataset. A later profile replaces an earlier one with the same name
    pub fn new(axes: [String; AXIS_COUNT], profiles: Vec<Profile>) -> Self {
        let profiles = profiles
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();
        Dataset { axes, profiles }
    }

    /// The four built-in profiles and the six severity axes
    pub fn builtin() -> Self {
        Self::new(
            builtin::AXES.map(String::from),
            builtin::profiles(),
        )
    }

    /// Axis names, in radar vertex order
    pub fn axes(&self) -> &[String] {
        &self.axes
    }

    pub fn profiles(&self) -> impl Iterator<Item = &Profile> {
        self.profiles.values()
    }

    pub fn profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }

    pub fn profile_names(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }

    /// Position of a profile in declaration order
    pub fn profile_index(&self, name: &str) -> Option<usize> {
        self.profiles.get_index_of(name)
    }

    /// Radar score vector of a profile, in axis order
    pub fn radar_vector(&self, name: &str) -> Option<&Scores> {
        self.profiles.get(name).map(|p| &p.scores)
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_profiles_in_order() {
        let dataset = Dataset::builtin();
        assert_eq!(
            dataset.profile_names(),
            vec!["TPB", "Bipolarité", "Schizophrénie", "Pervers narcissique"]
        );
        assert_eq!(dataset.profile_index("Schizophrénie"), Some(2));
        assert_eq!(dataset.profile_index("tpb"), None);
    }

    #[test]
    fn test_builtin_axes() {
        let dataset = Dataset::builtin();
        assert_eq!(dataset.axes().len(), AXIS_COUNT);
        assert_eq!(dataset.axes()[0], "Émotions / humeur");
        assert_eq!(dataset.axes()[5], "Risques / comorbidités");
    }

    #[test]
    fn test_radar_vectors() {
        let dataset = Dataset::builtin();
        assert_eq!(dataset.radar_vector("TPB"), Some(&[9, 9, 7, 6, 8, 8]));
        assert_eq!(dataset.radar_vector("Schizophrénie"), Some(&[6, 5, 4, 9, 5, 7]));
        assert_eq!(dataset.radar_vector("Inconnu"), None);

        for profile in dataset.profiles() {
            assert_eq!(profile.scores.len(), dataset.axes().len());
            assert!(profile.scores.iter().all(|&s| s <= MAX_SCORE));
        }
    }

    #[test]
    fn test_builtin_list_sizes() {
        let dataset = Dataset::builtin();
        let sizes: Vec<(usize, usize)> = dataset
            .profiles()
            .map(|p| (p.symptoms.len(), p.comorbidities.len()))
            .collect();
        assert_eq!(sizes, vec![(8, 5), (3, 5), (9, 6), (6, 6)]);

        for profile in dataset.profiles() {
            assert!(profile.symptoms.iter().any(|s| s == "Addictions"));
            assert!(profile.comorbidities.iter().any(|c| c == "Addictions"));
        }
    }

    #[test]
    fn test_duplicate_profile_replaced() {
        let axes = builtin::AXES.map(String::from);
        let dataset = Dataset::new(
            axes,
            vec![
                Profile::new("A", [1; AXIS_COUNT], "#111"),
                Profile::new("A", [2; AXIS_COUNT], "#222"),
            ],
        );
        assert_eq!(dataset.profile_count(), 1);
        assert_eq!(dataset.radar_vector("A"), Some(&[2; AXIS_COUNT]));
    }
}
