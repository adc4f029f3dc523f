//! SeaORM repository implementations

use crate::contract::{
    Artist, ArtistPatch, NewArtist, NewShow, NewVenue, Show, ShowListing, ShowWithArtist,
    ShowWithVenue, Venue, VenuePatch,
};
use crate::domain::repository::{ArtistRepository, ShowRepository, TimeWindow, VenueRepository};
use anyhow::Result;
use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Select, TransactionTrait,
};
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use super::entity::{artist, show, venue};
use super::mapper::{apply_artist_patch, apply_venue_patch};

// ===== Venue Repository =====

pub struct SeaOrmVenueRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmVenueRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VenueRepository for SeaOrmVenueRepository {
    async fn create(&self, venue: &NewVenue) -> Result<Venue> {
        let txn = self.db.begin().await?;

        let active: venue::ActiveModel = venue.into();
        let inserted = active.insert(&txn).await?;

        txn.commit().await?;
        inserted.try_into()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Venue>> {
        let result = venue::Entity::find_by_id(id).one(&*self.db).await?;

        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Venue>> {
        let results = venue::Entity::find()
            .order_by_asc(venue::Column::Id)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }

    async fn update(&self, id: i32, patch: &VenuePatch) -> Result<Option<Venue>> {
        let txn = self.db.begin().await?;

        let Some(existing) = venue::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: venue::ActiveModel = existing.clone().into();
        apply_venue_patch(&mut active, patch);

        let updated = if active.is_changed() {
            active.update(&txn).await?
        } else {
            existing
        };

        txn.commit().await?;
        Ok(Some(updated.try_into()?))
    }

    async fn delete(&self, id: i32) -> Result<u64> {
        let txn = self.db.begin().await?;

        let result = venue::Entity::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;
        Ok(result.rows_affected)
    }
}

// ===== Artist Repository =====

pub struct SeaOrmArtistRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmArtistRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ArtistRepository for SeaOrmArtistRepository {
    async fn create(&self, artist: &NewArtist) -> Result<Artist> {
        let txn = self.db.begin().await?;

        let active: artist::ActiveModel = artist.into();
        let inserted = active.insert(&txn).await?;

        txn.commit().await?;
        inserted.try_into()
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Artist>> {
        let result = artist::Entity::find_by_id(id).one(&*self.db).await?;

        match result {
            Some(entity) => Ok(Some(entity.try_into()?)),
            None => Ok(None),
        }
    }

    async fn list_all(&self) -> Result<Vec<Artist>> {
        let results = artist::Entity::find()
            .order_by_asc(artist::Column::Id)
            .all(&*self.db)
            .await?;

        results
            .into_iter()
            .map(|e| e.try_into())
            .collect::<Result<Vec<_>>>()
    }

    async fn update(&self, id: i32, patch: &ArtistPatch) -> Result<Option<Artist>> {
        let txn = self.db.begin().await?;

        let Some(existing) = artist::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: artist::ActiveModel = existing.clone().into();
        apply_artist_patch(&mut active, patch);

        let updated = if active.is_changed() {
            active.update(&txn).await?
        } else {
            existing
        };

        txn.commit().await?;
        Ok(Some(updated.try_into()?))
    }
}

// ===== Show Repository =====

/// Ids per `IN (...)` lookup
const ID_BATCH_SIZE: usize = 500;

pub struct SeaOrmShowRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmShowRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

/// Restrict a show query to one side of the boundary, ordered by start time
fn within(query: Select<show::Entity>, window: TimeWindow) -> Select<show::Entity> {
    let query = match window {
        TimeWindow::Before(boundary) => query.filter(show::Column::StartTime.lt(boundary)),
        TimeWindow::After(boundary) => query.filter(show::Column::StartTime.gt(boundary)),
    };

    query
        .order_by_asc(show::Column::StartTime)
        .order_by_asc(show::Column::Id)
}

#[async_trait]
impl ShowRepository for SeaOrmShowRepository {
    async fn create(&self, show: &NewShow) -> Result<Show> {
        let txn = self.db.begin().await?;

        let active: show::ActiveModel = show.into();
        let inserted = active.insert(&txn).await?;

        txn.commit().await?;
        Ok(inserted.into())
    }

    async fn find_for_venue(
        &self,
        venue_id: i32,
        window: TimeWindow,
    ) -> Result<Vec<ShowWithArtist>> {
        let query = show::Entity::find().filter(show::Column::VenueId.eq(venue_id));

        let rows = within(query, window)
            .find_also_related(artist::Entity)
            .all(&*self.db)
            .await?;

        // Inner join: a show whose artist row is gone is left out
        let mut shows = Vec::with_capacity(rows.len());
        for (show, artist) in rows {
            if let Some(artist) = artist {
                shows.push(ShowWithArtist {
                    show: show.into(),
                    artist: artist.try_into()?,
                });
            }
        }
        Ok(shows)
    }

    async fn find_for_artist(
        &self,
        artist_id: i32,
        window: TimeWindow,
    ) -> Result<Vec<ShowWithVenue>> {
        let query = show::Entity::find().filter(show::Column::ArtistId.eq(artist_id));

        let rows = within(query, window)
            .find_also_related(venue::Entity)
            .all(&*self.db)
            .await?;

        let mut shows = Vec::with_capacity(rows.len());
        for (show, venue) in rows {
            if let Some(venue) = venue {
                shows.push(ShowWithVenue {
                    show: show.into(),
                    venue: venue.try_into()?,
                });
            }
        }
        Ok(shows)
    }

    async fn list_resolved(&self) -> Result<Vec<ShowListing>> {
        let rows = show::Entity::find()
            .order_by_asc(show::Column::Id)
            .find_also_related(artist::Entity)
            .all(&*self.db)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        // Distinct ids only, looked up in bounded batches to stay under the
        // backend's bind parameter limit
        let venue_ids: Vec<i32> = rows
            .iter()
            .map(|(show, _)| show.venue_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut venues: HashMap<i32, venue::Model> = HashMap::with_capacity(venue_ids.len());
        for batch in venue_ids.chunks(ID_BATCH_SIZE) {
            let found = venue::Entity::find()
                .filter(venue::Column::Id.is_in(batch.iter().copied()))
                .all(&*self.db)
                .await?;
            venues.extend(found.into_iter().map(|v| (v.id, v)));
        }

        let mut listings = Vec::with_capacity(rows.len());
        for (show, artist) in rows {
            let (Some(artist), Some(venue)) = (artist, venues.get(&show.venue_id)) else {
                continue;
            };
            listings.push(ShowListing {
                show: show.into(),
                artist: artist.try_into()?,
                venue: venue.clone().try_into()?,
            });
        }
        Ok(listings)
    }
}
