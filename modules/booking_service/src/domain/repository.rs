//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs
//!
//! Every write is atomic: it either commits completely or leaves the store
//! as it was.

use crate::contract::{
    Artist, ArtistPatch, NewArtist, NewShow, NewVenue, Show, ShowListing, ShowWithArtist,
    ShowWithVenue, Venue, VenuePatch,
};
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDateTime;

/// Open interval on one side of a boundary time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeWindow {
    /// Strictly earlier than the boundary
    Before(NaiveDateTime),
    /// Strictly later than the boundary
    After(NaiveDateTime),
}

impl TimeWindow {
    /// Whether `start_time` falls inside the window
    pub fn contains(&self, start_time: NaiveDateTime) -> bool {
        match *self {
            Self::Before(boundary) => start_time < boundary,
            Self::After(boundary) => start_time > boundary,
        }
    }
}

/// Repository for venues
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// Insert a new venue and return it with its assigned id
    async fn create(&self, venue: &NewVenue) -> Result<Venue>;

    /// Find a venue by id
    async fn find_by_id(&self, id: i32) -> Result<Option<Venue>>;

    /// List all venues ordered by id
    async fn list_all(&self) -> Result<Vec<Venue>>;

    /// Overwrite the fields present in `patch`; `None` when the id is unknown
    async fn update(&self, id: i32, patch: &VenuePatch) -> Result<Option<Venue>>;

    /// Delete a venue, returning the number of rows removed
    async fn delete(&self, id: i32) -> Result<u64>;
}

/// Repository for artists
#[async_trait]
pub trait ArtistRepository: Send + Sync {
    /// Insert a new artist and return it with its assigned id
    async fn create(&self, artist: &NewArtist) -> Result<Artist>;

    /// Find an artist by id
    async fn find_by_id(&self, id: i32) -> Result<Option<Artist>>;

    /// List all artists ordered by id
    async fn list_all(&self) -> Result<Vec<Artist>>;

    /// Overwrite the fields present in `patch`; `None` when the id is unknown
    async fn update(&self, id: i32, patch: &ArtistPatch) -> Result<Option<Artist>>;
}

/// Repository for shows
#[async_trait]
pub trait ShowRepository: Send + Sync {
    /// Insert a new show. Referenced ids are checked by the store only.
    async fn create(&self, show: &NewShow) -> Result<Show>;

    /// Shows at a venue inside `window`, joined with their artist,
    /// ordered by start time then id
    async fn find_for_venue(&self, venue_id: i32, window: TimeWindow)
        -> Result<Vec<ShowWithArtist>>;

    /// Shows by an artist inside `window`, joined with their venue,
    /// ordered by start time then id
    async fn find_for_artist(
        &self,
        artist_id: i32,
        window: TimeWindow,
    ) -> Result<Vec<ShowWithVenue>>;

    /// All shows whose artist and venue both resolve, ordered by id
    async fn list_resolved(&self) -> Result<Vec<ShowListing>>;
}
