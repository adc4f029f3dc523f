//! Domain service - business logic orchestration
//!
//! Queries are read-only. Mutations delegate to repositories that run each
//! write in its own transaction; store failures are logged here and reported
//! to callers without their cause.

use super::repository::{ArtistRepository, ShowRepository, TimeWindow, VenueRepository};
use super::{search, validation};
use crate::contract::{
    Artist, ArtistEditor, ArtistPatch, BookingError, EntityKind, NewArtist, NewShow, NewVenue,
    PartitionedShows, SearchResult, Show, ShowListing, ShowWithArtist, ShowWithVenue, Venue,
    VenueEditor, VenueGroup, VenuePatch,
};
use chrono::NaiveDateTime;
use std::sync::Arc;

/// Domain service for venue, artist and show management
pub struct Service {
    venue_repo: Arc<dyn VenueRepository>,
    artist_repo: Arc<dyn ArtistRepository>,
    show_repo: Arc<dyn ShowRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(
        venue_repo: Arc<dyn VenueRepository>,
        artist_repo: Arc<dyn ArtistRepository>,
        show_repo: Arc<dyn ShowRepository>,
    ) -> Self {
        Self {
            venue_repo,
            artist_repo,
            show_repo,
        }
    }

    // ===== Venue Queries =====

    /// Venues grouped by (city, state)
    pub async fn list_venue_groups(&self) -> Result<Vec<VenueGroup>, BookingError> {
        let venues = self.venue_repo.list_all().await.map_err(internal)?;
        Ok(search::group_by_area(venues))
    }

    /// Venues whose name contains `term`, case-insensitively
    pub async fn search_venues(&self, term: &str) -> Result<SearchResult<Venue>, BookingError> {
        let venues = self.venue_repo.list_all().await.map_err(internal)?;
        let matches = search::filter_by_name(venues, term, |v| v.name.as_str());
        tracing::debug!(term, count = matches.len(), "venue search");
        Ok(SearchResult::new(matches))
    }

    /// Get a venue by id
    pub async fn get_venue(&self, id: i32) -> Result<Venue, BookingError> {
        self.venue_repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(BookingError::NotFound {
                resource: EntityKind::Venue,
                id,
            })
    }

    /// Shows at a venue split into past and upcoming around `boundary`
    pub async fn shows_for_venue(
        &self,
        venue_id: i32,
        boundary: NaiveDateTime,
    ) -> Result<PartitionedShows<ShowWithArtist>, BookingError> {
        let past = self
            .show_repo
            .find_for_venue(venue_id, TimeWindow::Before(boundary))
            .await
            .map_err(internal)?;
        let upcoming = self
            .show_repo
            .find_for_venue(venue_id, TimeWindow::After(boundary))
            .await
            .map_err(internal)?;

        Ok(PartitionedShows { past, upcoming })
    }

    /// A venue together with its partitioned shows
    pub async fn venue_detail(
        &self,
        id: i32,
        boundary: NaiveDateTime,
    ) -> Result<(Venue, PartitionedShows<ShowWithArtist>), BookingError> {
        let venue = self.get_venue(id).await?;
        let shows = self.shows_for_venue(id, boundary).await?;
        Ok((venue, shows))
    }

    /// Current venue values for the editor
    pub async fn venue_editor(&self, id: i32) -> Result<VenueEditor, BookingError> {
        self.get_venue(id).await.map(VenueEditor::from)
    }

    // ===== Venue Mutations =====

    /// Create a venue
    pub async fn create_venue(&self, venue: NewVenue) -> Result<Venue, BookingError> {
        validation::validate_new_venue(&venue)?;

        match self.venue_repo.create(&venue).await {
            Ok(created) => {
                tracing::info!(id = created.id, "Venue {} was successfully listed!", created.name);
                Ok(created)
            }
            Err(e) => {
                tracing::error!(error = ?e, name = %venue.name, "venue insert rolled back");
                Err(BookingError::CreateFailed {
                    entity: EntityKind::Venue,
                    name: Some(venue.name),
                })
            }
        }
    }

    /// Overwrite the editable fields present in `patch`
    pub async fn update_venue(&self, id: i32, patch: VenuePatch) -> Result<Venue, BookingError> {
        validation::validate_venue_patch(&patch)?;

        self.venue_repo
            .update(id, &patch)
            .await
            .map_err(internal)?
            .ok_or(BookingError::NotFound {
                resource: EntityKind::Venue,
                id,
            })
    }

    /// Delete a venue. Unknown ids are not an error.
    pub async fn delete_venue(&self, id: i32) -> Result<(), BookingError> {
        let removed = self.venue_repo.delete(id).await.map_err(internal)?;
        if removed == 0 {
            tracing::debug!(id, "delete of unknown venue ignored");
        } else {
            tracing::info!(id, "Venue deleted successfully");
        }
        Ok(())
    }

    // ===== Artist Queries =====

    /// All artists ordered by id
    pub async fn list_artists(&self) -> Result<Vec<Artist>, BookingError> {
        self.artist_repo.list_all().await.map_err(internal)
    }

    /// Artists whose name contains `term`, case-insensitively
    pub async fn search_artists(&self, term: &str) -> Result<SearchResult<Artist>, BookingError> {
        let artists = self.artist_repo.list_all().await.map_err(internal)?;
        let matches = search::filter_by_name(artists, term, |a| a.name.as_str());
        tracing::debug!(term, count = matches.len(), "artist search");
        Ok(SearchResult::new(matches))
    }

    /// Get an artist by id
    pub async fn get_artist(&self, id: i32) -> Result<Artist, BookingError> {
        self.artist_repo
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or(BookingError::NotFound {
                resource: EntityKind::Artist,
                id,
            })
    }

    /// Shows by an artist split into past and upcoming around `boundary`
    pub async fn shows_for_artist(
        &self,
        artist_id: i32,
        boundary: NaiveDateTime,
    ) -> Result<PartitionedShows<ShowWithVenue>, BookingError> {
        let past = self
            .show_repo
            .find_for_artist(artist_id, TimeWindow::Before(boundary))
            .await
            .map_err(internal)?;
        let upcoming = self
            .show_repo
            .find_for_artist(artist_id, TimeWindow::After(boundary))
            .await
            .map_err(internal)?;

        Ok(PartitionedShows { past, upcoming })
    }

    /// An artist together with its partitioned shows
    pub async fn artist_detail(
        &self,
        id: i32,
        boundary: NaiveDateTime,
    ) -> Result<(Artist, PartitionedShows<ShowWithVenue>), BookingError> {
        let artist = self.get_artist(id).await?;
        let shows = self.shows_for_artist(id, boundary).await?;
        Ok((artist, shows))
    }

    /// Current artist values for the editor
    pub async fn artist_editor(&self, id: i32) -> Result<ArtistEditor, BookingError> {
        self.get_artist(id).await.map(ArtistEditor::from)
    }

    // ===== Artist Mutations =====

    /// Create an artist
    pub async fn create_artist(&self, artist: NewArtist) -> Result<Artist, BookingError> {
        validation::validate_new_artist(&artist)?;

        match self.artist_repo.create(&artist).await {
            Ok(created) => {
                tracing::info!(id = created.id, "Artist {} was successfully listed!", created.name);
                Ok(created)
            }
            Err(e) => {
                tracing::error!(error = ?e, name = %artist.name, "artist insert rolled back");
                Err(BookingError::CreateFailed {
                    entity: EntityKind::Artist,
                    name: Some(artist.name),
                })
            }
        }
    }

    /// Overwrite the editable fields present in `patch`
    pub async fn update_artist(
        &self,
        id: i32,
        patch: ArtistPatch,
    ) -> Result<Artist, BookingError> {
        validation::validate_artist_patch(&patch)?;

        self.artist_repo
            .update(id, &patch)
            .await
            .map_err(internal)?
            .ok_or(BookingError::NotFound {
                resource: EntityKind::Artist,
                id,
            })
    }

    // ===== Show Operations =====

    /// Every show whose artist and venue both exist
    pub async fn list_shows(&self) -> Result<Vec<ShowListing>, BookingError> {
        self.show_repo.list_resolved().await.map_err(internal)
    }

    /// Schedule a show. Integrity of the referenced ids is left to the store.
    pub async fn create_show(&self, show: NewShow) -> Result<Show, BookingError> {
        match self.show_repo.create(&show).await {
            Ok(created) => {
                tracing::info!(
                    id = created.id,
                    artist_id = created.artist_id,
                    venue_id = created.venue_id,
                    "Show was successfully listed!"
                );
                Ok(created)
            }
            Err(e) => {
                tracing::error!(
                    error = ?e,
                    artist_id = show.artist_id,
                    venue_id = show.venue_id,
                    "show insert rolled back"
                );
                Err(BookingError::CreateFailed {
                    entity: EntityKind::Show,
                    name: None,
                })
            }
        }
    }
}

/// Log a store failure and hide its cause from the caller
fn internal(error: anyhow::Error) -> BookingError {
    tracing::error!(error = ?error, "store operation failed");
    BookingError::Internal
}
