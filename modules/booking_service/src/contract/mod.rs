//! Contract layer - transport-agnostic models and errors
//!
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::BookingError;
pub use model::{
    Artist, ArtistEditor, ArtistPatch, EntityKind, EntitySummary, NewArtist, NewShow, NewVenue,
    PartitionedShows, SearchResult, Show, ShowListing, ShowWithArtist, ShowWithVenue, Venue,
    VenueEditor, VenueGroup, VenuePatch,
};
