//! Field validation for incoming venues, artists and shows

use crate::contract::{ArtistPatch, BookingError, NewArtist, NewVenue, VenuePatch};
use chrono::NaiveDateTime;

/// Accepted layouts for a show start time
const START_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Reject a blank value for a mandatory field
fn require(field: &str, value: &str) -> Result<(), BookingError> {
    if value.trim().is_empty() {
        return Err(BookingError::validation(format!("{field} is required")));
    }
    Ok(())
}

/// Reject a patch that would blank a mandatory field
fn require_if_present(field: &str, value: Option<&str>) -> Result<(), BookingError> {
    match value {
        Some(value) => require(field, value),
        None => Ok(()),
    }
}

/// Name, city and state are mandatory; address and phone are not
pub fn validate_new_venue(venue: &NewVenue) -> Result<(), BookingError> {
    require("name", &venue.name)?;
    require("city", &venue.city)?;
    require("state", &venue.state)
}

pub fn validate_new_artist(artist: &NewArtist) -> Result<(), BookingError> {
    require("name", &artist.name)?;
    require("city", &artist.city)?;
    require("state", &artist.state)
}

pub fn validate_venue_patch(patch: &VenuePatch) -> Result<(), BookingError> {
    require_if_present("name", patch.name.as_deref())?;
    require_if_present("city", patch.city.as_deref())?;
    require_if_present("state", patch.state.as_deref())
}

pub fn validate_artist_patch(patch: &ArtistPatch) -> Result<(), BookingError> {
    require_if_present("name", patch.name.as_deref())?;
    require_if_present("city", patch.city.as_deref())?;
    require_if_present("state", patch.state.as_deref())
}

/// Parse a show start time in any of the accepted layouts
pub fn parse_start_time(raw: &str) -> Result<NaiveDateTime, BookingError> {
    let raw = raw.trim();
    START_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .ok_or_else(|| {
            BookingError::validation(format!(
                "start_time '{raw}' is not a valid date and time (expected YYYY-MM-DDTHH:MM:SS)"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn new_venue() -> NewVenue {
        NewVenue {
            name: "The Musical Hop".to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn venue_without_address_or_phone_is_valid() {
        assert!(validate_new_venue(&new_venue()).is_ok());
    }

    #[test]
    fn venue_requires_name_city_state() {
        let mut venue = new_venue();
        venue.name = "  ".to_string();
        assert_eq!(
            validate_new_venue(&venue),
            Err(BookingError::Validation {
                message: "name is required".to_string()
            })
        );

        let mut venue = new_venue();
        venue.state = String::new();
        assert!(matches!(
            validate_new_venue(&venue),
            Err(BookingError::Validation { message }) if message == "state is required"
        ));
    }

    #[test]
    fn artist_requires_city() {
        let artist = NewArtist {
            name: "Guns N Petals".to_string(),
            state: "CA".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            validate_new_artist(&artist),
            Err(BookingError::Validation { message }) if message == "city is required"
        ));
    }

    #[test]
    fn patch_only_checks_present_fields() {
        assert!(validate_artist_patch(&ArtistPatch::default()).is_ok());

        let patch = VenuePatch {
            city: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_venue_patch(&patch).is_err());
    }

    #[test]
    fn parses_accepted_layouts() {
        let expected = NaiveDate::from_ymd_opt(2019, 5, 21)
            .and_then(|d| d.and_hms_opt(21, 30, 0))
            .unwrap();

        assert_eq!(parse_start_time("2019-05-21T21:30:00").unwrap(), expected);
        assert_eq!(parse_start_time("2019-05-21 21:30:00").unwrap(), expected);
        assert_eq!(parse_start_time("2019-05-21T21:30").unwrap(), expected);
        assert_eq!(parse_start_time(" 2019-05-21 21:30 ").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage_start_time() {
        assert!(matches!(
            parse_start_time("next tuesday"),
            Err(BookingError::Validation { .. })
        ));
    }
}
