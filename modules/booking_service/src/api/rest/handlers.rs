//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::*,
    error::Problem,
    extract::{EntityId, JsonBody},
    mapper::listed_message,
};
use crate::contract::{EntityKind, NewShow};
use crate::domain::Service;
use axum::{http::StatusCode, response::Redirect, Extension, Json};
use chrono::NaiveDateTime;
use std::sync::Arc;

/// Boundary between past and upcoming shows for a request
fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Landing document
pub async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        service: "booking".to_string(),
        links: vec![
            "/venues".to_string(),
            "/artists".to_string(),
            "/shows".to_string(),
        ],
    })
}

// ===== Venue Handlers =====

/// Venues grouped by city and state
pub async fn list_venues(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<VenueAreasResponse>, Problem> {
    let groups = service.list_venue_groups().await?;

    Ok(Json(VenueAreasResponse {
        areas: groups.into_iter().map(Into::into).collect(),
    }))
}

/// Case-insensitive venue name search
pub async fn search_venues(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, Problem> {
    let found = service.search_venues(&req.search_term).await?;

    Ok(Json(SearchResponse {
        count: found.count,
        search_term: req.search_term,
        results: found.items.iter().map(Into::into).collect(),
    }))
}

/// Venue page with past and upcoming shows
pub async fn get_venue(
    Extension(service): Extension<Arc<Service>>,
    EntityId(venue_id): EntityId,
) -> Result<Json<VenueDetailDto>, Problem> {
    let detail = service.venue_detail(venue_id, now()).await?;
    Ok(Json(detail.into()))
}

/// Blank new-venue form
pub async fn create_venue_form() -> Json<CreateVenueRequest> {
    Json(CreateVenueRequest::default())
}

/// Create a venue
pub async fn create_venue(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<CreateVenueRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), Problem> {
    let venue = service.create_venue(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: venue.id,
            message: listed_message(EntityKind::Venue, Some(&venue.name)),
        }),
    ))
}

/// Delete a venue
pub async fn delete_venue(
    Extension(service): Extension<Arc<Service>>,
    EntityId(venue_id): EntityId,
) -> Result<StatusCode, Problem> {
    service.delete_venue(venue_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Current venue values for the editor
pub async fn edit_venue_form(
    Extension(service): Extension<Arc<Service>>,
    EntityId(venue_id): EntityId,
) -> Result<Json<VenueEditorDto>, Problem> {
    let editor = service.venue_editor(venue_id).await?;
    Ok(Json(editor.into()))
}

/// Apply a venue edit, then send the client to the venue page
pub async fn edit_venue(
    Extension(service): Extension<Arc<Service>>,
    EntityId(venue_id): EntityId,
    JsonBody(req): JsonBody<UpdateVenueRequest>,
) -> Result<Redirect, Problem> {
    service.update_venue(venue_id, req.into()).await?;
    Ok(Redirect::to(&format!("/venues/{venue_id}")))
}

// ===== Artist Handlers =====

/// All artists
pub async fn list_artists(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<ArtistsListResponse>, Problem> {
    let artists = service.list_artists().await?;

    let items: Vec<EntitySummaryDto> = artists.iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(ArtistsListResponse {
        artists: items,
        total,
    }))
}

/// Case-insensitive artist name search
pub async fn search_artists(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<SearchRequest>,
) -> Result<Json<SearchResponse>, Problem> {
    let found = service.search_artists(&req.search_term).await?;

    Ok(Json(SearchResponse {
        count: found.count,
        search_term: req.search_term,
        results: found.items.iter().map(Into::into).collect(),
    }))
}

/// Artist page with past and upcoming shows
pub async fn get_artist(
    Extension(service): Extension<Arc<Service>>,
    EntityId(artist_id): EntityId,
) -> Result<Json<ArtistDetailDto>, Problem> {
    let detail = service.artist_detail(artist_id, now()).await?;
    Ok(Json(detail.into()))
}

/// Blank new-artist form
pub async fn create_artist_form() -> Json<CreateArtistRequest> {
    Json(CreateArtistRequest::default())
}

/// Create an artist
pub async fn create_artist(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<CreateArtistRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), Problem> {
    let artist = service.create_artist(req.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: artist.id,
            message: listed_message(EntityKind::Artist, Some(&artist.name)),
        }),
    ))
}

/// Current artist values for the editor
pub async fn edit_artist_form(
    Extension(service): Extension<Arc<Service>>,
    EntityId(artist_id): EntityId,
) -> Result<Json<ArtistEditorDto>, Problem> {
    let editor = service.artist_editor(artist_id).await?;
    Ok(Json(editor.into()))
}

/// Apply an artist edit, then send the client to the artist page
pub async fn edit_artist(
    Extension(service): Extension<Arc<Service>>,
    EntityId(artist_id): EntityId,
    JsonBody(req): JsonBody<UpdateArtistRequest>,
) -> Result<Redirect, Problem> {
    service.update_artist(artist_id, req.into()).await?;
    Ok(Redirect::to(&format!("/artists/{artist_id}")))
}

// ===== Show Handlers =====

/// All shows whose artist and venue exist
pub async fn list_shows(
    Extension(service): Extension<Arc<Service>>,
) -> Result<Json<ShowsListResponse>, Problem> {
    let shows = service.list_shows().await?;

    let items: Vec<ShowDto> = shows.into_iter().map(Into::into).collect();
    let total = items.len();

    Ok(Json(ShowsListResponse {
        shows: items,
        total,
    }))
}

/// New-show form, starting now by default
pub async fn create_show_form() -> Json<ShowFormDto> {
    Json(ShowFormDto {
        artist_id: None,
        venue_id: None,
        start_time: now(),
    })
}

/// Schedule a show
pub async fn create_show(
    Extension(service): Extension<Arc<Service>>,
    JsonBody(req): JsonBody<CreateShowRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), Problem> {
    let new_show = NewShow::try_from(req)?;
    let show = service.create_show(new_show).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id: show.id,
            message: listed_message(EntityKind::Show, None),
        }),
    ))
}
