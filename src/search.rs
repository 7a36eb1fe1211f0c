//! Search view over the profile collection.
//!
//! Matches a term as a case-insensitive substring of a profile's name or
//! location. The view borrows the live collection and filters on every read.

use crate::storage::Profile;

/// Whether `profile` matches an already lowercased term.
fn matches_lowered(profile: &Profile, needle: &str) -> bool {
    profile.name().to_lowercase().contains(needle)
        || profile.location().to_lowercase().contains(needle)
}

/// Ordered subsequence of `profiles` matching `term`.
///
/// An empty term returns every profile.
///
/// # Example
/// ```
/// use profile_directory::search::filter;
/// use profile_directory::storage::{Profile, ProfileFields, ProfileId};
///
/// let ada = Profile {
///     id: ProfileId(1),
///     fields: ProfileFields {
///         name: "Ada".into(),
///         location: "London".into(),
///         ..Default::default()
///     },
/// };
/// let profiles = vec![ada];
/// assert_eq!(filter(&profiles, "LON").len(), 1);
/// assert!(filter(&profiles, "paris").is_empty());
/// ```
pub fn filter<'a>(profiles: &'a [Profile], term: &str) -> Vec<&'a Profile> {
    if term.is_empty() {
        return profiles.iter().collect();
    }
    let needle = term.to_lowercase();
    profiles
        .iter()
        .filter(|p| matches_lowered(p, &needle))
        .collect()
}

/// Read-only filtered projection of a profile collection.
#[derive(Debug, Clone, Copy)]
pub struct SearchView<'a> {
    profiles: &'a [Profile],
    term: &'a str,
}

impl<'a> SearchView<'a> {
    pub fn new(profiles: &'a [Profile], term: &'a str) -> Self {
        Self { profiles, term }
    }

    pub fn term(&self) -> &str {
        self.term
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Profile> + use<'a> {
        let needle = self.term.to_lowercase();
        self.profiles
            .iter()
            .filter(move |p| needle.is_empty() || matches_lowered(p, &needle))
    }

    pub fn to_vec(&self) -> Vec<&'a Profile> {
        filter(self.profiles, self.term)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl<'a> IntoIterator for SearchView<'a> {
    type Item = &'a Profile;
    type IntoIter = std::vec::IntoIter<&'a Profile>;

    fn into_iter(self) -> Self::IntoIter {
        self.to_vec().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ProfileFields, ProfileId};

    fn profile(id: u64, name: &str, location: &str) -> Profile {
        Profile {
            id: ProfileId(id),
            fields: ProfileFields {
                name: name.into(),
                photo: "p".into(),
                description: "d".into(),
                location: location.into(),
                ..Default::default()
            },
        }
    }

    fn ids(found: &[&Profile]) -> Vec<u64> {
        found.iter().map(|p| p.id.as_u64()).collect()
    }

    #[test]
    fn test_empty_term_returns_everything_in_order() {
        let all = vec![
            profile(3, "Cy", "Lima"),
            profile(1, "Al", "Oslo"),
            profile(2, "Bo", "Rome"),
        ];
        assert_eq!(ids(&filter(&all, "")), vec![3, 1, 2]);
    }

    #[test]
    fn test_matches_name_or_location_case_insensitive() {
        let all = vec![
            profile(1, "Ada", "London"),
            profile(2, "Grace", "New York"),
            profile(3, "Linus", "Helsinki"),
        ];
        assert_eq!(ids(&filter(&all, "ADA")), vec![1]);
        assert_eq!(ids(&filter(&all, "york")), vec![2]);
        assert_eq!(ids(&filter(&all, "n")), vec![1, 2, 3]);
        assert!(filter(&all, "paris").is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let all = vec![
            profile(1, "Bob", "Boston"),
            profile(2, "Eve", "Berlin"),
            profile(3, "Rob", "Boston"),
        ];
        let once: Vec<Profile> = filter(&all, "bo").into_iter().cloned().collect();
        let twice = filter(&once, "bo");
        assert_eq!(ids(&twice), vec![1, 3]);
        assert_eq!(twice.len(), once.len());
    }

    #[test]
    fn test_view_matches_filter() {
        let all = vec![profile(1, "Bob", "Boston"), profile(2, "Eve", "Berlin")];
        let view = SearchView::new(&all, "BOS");
        assert_eq!(view.term(), "BOS");
        assert_eq!(view.len(), 1);
        assert!(!view.is_empty());
        assert_eq!(ids(&view.to_vec()), vec![1]);
        assert_eq!(view.iter().map(|p| p.id).collect::<Vec<_>>(), vec![ProfileId(1)]);
    }
}
