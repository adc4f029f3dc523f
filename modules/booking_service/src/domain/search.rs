//! Name search and area grouping
//!
//! Both run over rows already ordered by id, so their output is
//! deterministic for a fixed store state.

use crate::contract::{EntitySummary, Venue, VenueGroup};
use indexmap::IndexMap;

/// Case-insensitive substring match under Unicode lowercasing.
///
/// An empty term matches every name.
pub fn name_matches(name: &str, term: &str) -> bool {
    name.to_lowercase().contains(&term.to_lowercase())
}

/// Keep the items whose name contains `term`, preserving input order
pub fn filter_by_name<T, F>(items: Vec<T>, term: &str, name_of: F) -> Vec<T>
where
    F: Fn(&T) -> &str,
{
    items
        .into_iter()
        .filter(|item| name_matches(name_of(item), term))
        .collect()
}

/// Group venues by their exact (city, state) pair.
///
/// Groups come out in order of first appearance and members keep the
/// input order.
pub fn group_by_area(venues: Vec<Venue>) -> Vec<VenueGroup> {
    let mut groups: IndexMap<(String, String), Vec<EntitySummary>> = IndexMap::new();

    for venue in venues {
        groups
            .entry((venue.city, venue.state))
            .or_default()
            .push(EntitySummary {
                id: venue.id,
                name: venue.name,
            });
    }

    groups
        .into_iter()
        .map(|((city, state), venues)| VenueGroup {
            city,
            state,
            venues,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(id: i32, name: &str, city: &str, state: &str) -> Venue {
        Venue {
            id,
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: None,
            phone: None,
            image_link: None,
            website_link: None,
            facebook_link: None,
            genres: Vec::new(),
        }
    }

    #[test]
    fn matches_substring_in_any_case() {
        assert!(name_matches("The Musical Hop", "hop"));
        assert!(name_matches("The Musical Hop", "MUSIC"));
        assert!(name_matches("Park Square Live Music & Coffee", "music"));
        assert!(!name_matches("Park Square Live Music & Coffee", "hop"));
    }

    #[test]
    fn empty_term_matches_everything() {
        assert!(name_matches("anything", ""));
        assert!(name_matches("", ""));
    }

    #[test]
    fn lowercasing_is_unicode_aware() {
        assert!(name_matches("CAFÉ ÜBER", "café über"));
        assert!(name_matches("Ωmega Hall", "ωmega"));
    }

    #[test]
    fn filter_keeps_input_order() {
        let venues = vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(2, "The Dueling Pianos Bar", "New York", "NY"),
            venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
        ];

        let found = filter_by_name(venues, "Music", |v| v.name.as_str());
        let ids: Vec<i32> = found.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn groups_share_exact_city_and_state() {
        let venues = vec![
            venue(1, "The Musical Hop", "San Francisco", "CA"),
            venue(2, "The Dueling Pianos Bar", "New York", "NY"),
            venue(3, "Park Square Live Music & Coffee", "San Francisco", "CA"),
            venue(4, "Lookalike", "San Francisco", "NY"),
        ];

        let groups = group_by_area(venues);
        assert_eq!(groups.len(), 3);

        assert_eq!(groups[0].city, "San Francisco");
        assert_eq!(groups[0].state, "CA");
        let members: Vec<i32> = groups[0].venues.iter().map(|v| v.id).collect();
        assert_eq!(members, vec![1, 3]);

        assert_eq!(groups[1].venues.len(), 1);
        assert_eq!(groups[1].venues[0].name, "The Dueling Pianos Bar");

        assert_eq!(groups[2].state, "NY");
        assert_eq!(groups[2].venues[0].id, 4);
    }

    #[test]
    fn no_venues_no_groups() {
        assert!(group_by_area(Vec::new()).is_empty());
    }
}
