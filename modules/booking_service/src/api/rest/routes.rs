//! Route registration and OpenAPI component document

use super::{dto::*, handlers};
use crate::domain::Service;
use axum::{
    routing::{get, post},
    Extension, Json, Router,
};
use std::sync::Arc;
use utoipa::OpenApi;

/// OpenAPI components of the booking REST API
#[derive(OpenApi)]
#[openapi(
    info(title = "Booking Service"),
    components(schemas(
        EntitySummaryDto,
        SearchRequest,
        SearchResponse,
        CreatedResponse,
        IndexResponse,
        VenueGroupDto,
        VenueAreasResponse,
        VenueDto,
        VenueShowDto,
        VenueDetailDto,
        CreateVenueRequest,
        UpdateVenueRequest,
        VenueEditorDto,
        ArtistsListResponse,
        ArtistDto,
        ArtistShowDto,
        ArtistDetailDto,
        CreateArtistRequest,
        UpdateArtistRequest,
        ArtistEditorDto,
        ShowDto,
        ShowsListResponse,
        ShowFormDto,
        CreateShowRequest,
    ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Register all REST routes on `router`
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    router
        .route("/", get(handlers::index))
        .route("/openapi.json", get(openapi_json))
        // Venue endpoints
        .route("/venues", get(handlers::list_venues))
        .route("/venues/search", post(handlers::search_venues))
        .route(
            "/venues/create",
            get(handlers::create_venue_form).post(handlers::create_venue),
        )
        .route(
            "/venues/{venue_id}",
            get(handlers::get_venue).delete(handlers::delete_venue),
        )
        .route(
            "/venues/{venue_id}/edit",
            get(handlers::edit_venue_form).post(handlers::edit_venue),
        )
        // Artist endpoints
        .route("/artists", get(handlers::list_artists))
        .route("/artists/search", post(handlers::search_artists))
        .route(
            "/artists/create",
            get(handlers::create_artist_form).post(handlers::create_artist),
        )
        .route("/artists/{artist_id}", get(handlers::get_artist))
        .route(
            "/artists/{artist_id}/edit",
            get(handlers::edit_artist_form).post(handlers::edit_artist),
        )
        // Show endpoints
        .route("/shows", get(handlers::list_shows))
        .route(
            "/shows/create",
            get(handlers::create_show_form).post(handlers::create_show),
        )
        // Add service as extension for handlers
        .layer(Extension(service))
}
