//! Contract models for the booking service
//!
//! These models are transport-agnostic and shared by the domain, storage and
//! REST layers. NO serde derives - these are pure domain models.

use chrono::NaiveDateTime;
use std::fmt;

/// Kind of entity an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Venue,
    Artist,
    Show,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Venue => "Venue",
            Self::Artist => "Artist",
            Self::Show => "Show",
        };
        f.write_str(name)
    }
}

// ===== Venue =====

/// A physical location that can host shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Venue {
    /// Store-assigned identity
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    /// Street address
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    /// Genre tags, order and duplicates preserved
    pub genres: Vec<String>,
}

/// Fields for a venue that does not exist yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
}

/// In-place edit of a venue. `None` leaves the stored value untouched;
/// `Some(None)` clears an optional field.
///
/// Image and website links are not part of the edit path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VenuePatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub address: Option<Option<String>>,
    pub phone: Option<Option<String>>,
    pub facebook_link: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
}

/// Current venue values used to prefill an editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueEditor {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    /// Display only, never written back by the edit path
    pub image_link: Option<String>,
    /// Display only, never written back by the edit path
    pub website_link: Option<String>,
}

impl From<Venue> for VenueEditor {
    fn from(venue: Venue) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            facebook_link: venue.facebook_link,
            genres: venue.genres,
            image_link: venue.image_link,
            website_link: venue.website_link,
        }
    }
}

// ===== Artist =====

/// A performer who can be booked into shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artist {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
}

/// Fields for an artist that does not exist yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub website_link: Option<String>,
    pub facebook_link: Option<String>,
}

/// In-place edit of an artist. `None` leaves the stored value untouched;
/// `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistPatch {
    pub name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub phone: Option<Option<String>>,
    pub facebook_link: Option<Option<String>>,
    pub genres: Option<Vec<String>>,
}

/// Current artist values used to prefill an editor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistEditor {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    /// Display only, never written back by the edit path
    pub image_link: Option<String>,
    /// Display only, never written back by the edit path
    pub website_link: Option<String>,
}

impl From<Artist> for ArtistEditor {
    fn from(artist: Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            facebook_link: artist.facebook_link,
            genres: artist.genres,
            image_link: artist.image_link,
            website_link: artist.website_link,
        }
    }
}

// ===== Show =====

/// A scheduled event linking one artist to one venue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Show {
    pub id: i32,
    pub artist_id: i32,
    pub venue_id: i32,
    /// Timezone-naive start
    pub start_time: NaiveDateTime,
}

/// Fields for a show that does not exist yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShow {
    pub artist_id: i32,
    pub venue_id: i32,
    pub start_time: NaiveDateTime,
}

/// A show at a venue together with the artist playing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowWithArtist {
    pub show: Show,
    pub artist: Artist,
}

/// A show by an artist together with the venue hosting it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowWithVenue {
    pub show: Show,
    pub venue: Venue,
}

/// A show whose artist and venue both resolve
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowListing {
    pub show: Show,
    pub artist: Artist,
    pub venue: Venue,
}

/// Shows split around a boundary time.
///
/// `past` holds shows starting strictly before the boundary and `upcoming`
/// those starting strictly after it. A show starting exactly at the boundary
/// is in neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionedShows<T> {
    pub past: Vec<T>,
    pub upcoming: Vec<T>,
}

impl<T> PartitionedShows<T> {
    pub fn past_count(&self) -> usize {
        self.past.len()
    }

    pub fn upcoming_count(&self) -> usize {
        self.upcoming.len()
    }
}

impl<T> Default for PartitionedShows<T> {
    fn default() -> Self {
        Self {
            past: Vec::new(),
            upcoming: Vec::new(),
        }
    }
}

// ===== Query results =====

/// Identity and display name of a venue or artist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySummary {
    pub id: i32,
    pub name: String,
}

/// Venues sharing one (city, state) pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VenueGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<EntitySummary>,
}

/// Matches of a name search with their count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult<T> {
    pub items: Vec<T>,
    pub count: usize,
}

impl<T> SearchResult<T> {
    pub fn new(items: Vec<T>) -> Self {
        let count = items.len();
        Self { items, count }
    }
}
