//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity::{artist, show, venue};
use crate::contract::{Artist, ArtistPatch, NewArtist, NewShow, NewVenue, Show, Venue, VenuePatch};
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::prelude::Json;

// ===== Genre helpers =====

fn genres_to_json(genres: &[String]) -> Json {
    Json::from(genres.to_vec())
}

fn genres_from_json(json: Json) -> anyhow::Result<Vec<String>> {
    match json {
        Json::Null => Ok(Vec::new()),
        other => Ok(serde_json::from_value(other)?),
    }
}

// ===== Venue Conversions =====

impl TryFrom<venue::Model> for Venue {
    type Error = anyhow::Error;

    fn try_from(entity: venue::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            state: entity.state,
            address: entity.address,
            phone: entity.phone,
            image_link: entity.image_link,
            website_link: entity.website_link,
            facebook_link: entity.facebook_link,
            genres: genres_from_json(entity.genres)?,
        })
    }
}

impl From<&NewVenue> for venue::ActiveModel {
    fn from(model: &NewVenue) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            city: Set(model.city.clone()),
            state: Set(model.state.clone()),
            address: Set(model.address.clone()),
            phone: Set(model.phone.clone()),
            image_link: Set(model.image_link.clone()),
            website_link: Set(model.website_link.clone()),
            facebook_link: Set(model.facebook_link.clone()),
            genres: Set(genres_to_json(&model.genres)),
        }
    }
}

/// Mark the patched columns as changed; untouched columns stay unchanged
pub fn apply_venue_patch(active: &mut venue::ActiveModel, patch: &VenuePatch) {
    if let Some(name) = &patch.name {
        active.name = Set(name.clone());
    }
    if let Some(city) = &patch.city {
        active.city = Set(city.clone());
    }
    if let Some(state) = &patch.state {
        active.state = Set(state.clone());
    }
    if let Some(address) = &patch.address {
        active.address = Set(address.clone());
    }
    if let Some(phone) = &patch.phone {
        active.phone = Set(phone.clone());
    }
    if let Some(facebook_link) = &patch.facebook_link {
        active.facebook_link = Set(facebook_link.clone());
    }
    if let Some(genres) = &patch.genres {
        active.genres = Set(genres_to_json(genres));
    }
}

// ===== Artist Conversions =====

impl TryFrom<artist::Model> for Artist {
    type Error = anyhow::Error;

    fn try_from(entity: artist::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entity.id,
            name: entity.name,
            city: entity.city,
            state: entity.state,
            phone: entity.phone,
            genres: genres_from_json(entity.genres)?,
            image_link: entity.image_link,
            website_link: entity.website_link,
            facebook_link: entity.facebook_link,
        })
    }
}

impl From<&NewArtist> for artist::ActiveModel {
    fn from(model: &NewArtist) -> Self {
        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            city: Set(model.city.clone()),
            state: Set(model.state.clone()),
            phone: Set(model.phone.clone()),
            genres: Set(genres_to_json(&model.genres)),
            image_link: Set(model.image_link.clone()),
            website_link: Set(model.website_link.clone()),
            facebook_link: Set(model.facebook_link.clone()),
        }
    }
}

/// Mark the patched columns as changed; untouched columns stay unchanged
pub fn apply_artist_patch(active: &mut artist::ActiveModel, patch: &ArtistPatch) {
    if let Some(name) = &patch.name {
        active.name = Set(name.clone());
    }
    if let Some(city) = &patch.city {
        active.city = Set(city.clone());
    }
    if let Some(state) = &patch.state {
        active.state = Set(state.clone());
    }
    if let Some(phone) = &patch.phone {
        active.phone = Set(phone.clone());
    }
    if let Some(facebook_link) = &patch.facebook_link {
        active.facebook_link = Set(facebook_link.clone());
    }
    if let Some(genres) = &patch.genres {
        active.genres = Set(genres_to_json(genres));
    }
}

// ===== Show Conversions =====

impl From<show::Model> for Show {
    fn from(entity: show::Model) -> Self {
        Self {
            id: entity.id,
            artist_id: entity.artist_id,
            venue_id: entity.venue_id,
            start_time: entity.start_time,
        }
    }
}

impl From<&NewShow> for show::ActiveModel {
    fn from(model: &NewShow) -> Self {
        Self {
            id: NotSet,
            artist_id: Set(model.artist_id),
            venue_id: Set(model.venue_id),
            start_time: Set(model.start_time),
        }
    }
}
