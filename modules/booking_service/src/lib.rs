//! Booking Service Module
//!
//! Venues, artists and the shows that link them. Provides grouped listing,
//! case-insensitive name search, time-partitioned show queries and
//! transactional create/update/delete on top of a sea-orm store.

// Public exports
pub mod contract;
pub use contract::{
    error::BookingError, Artist, ArtistPatch, EntityKind, EntitySummary, NewArtist, NewShow,
    NewVenue, PartitionedShows, SearchResult, Show, ShowListing, ShowWithArtist, ShowWithVenue,
    Venue, VenueGroup, VenuePatch,
};

pub mod module;
pub use module::BookingServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
