//! REST DTOs with serde derives for HTTP API

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

// ===== Shared DTOs =====

/// Identity and name of a venue or artist
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EntitySummaryDto {
    pub id: i32,
    #[schema(example = "The Musical Hop")]
    pub name: String,
}

/// Name search request
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchRequest {
    /// Substring to look for; empty matches everything
    #[serde(default)]
    #[schema(example = "music")]
    pub search_term: String,
}

/// Name search response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SearchResponse {
    pub count: usize,
    pub search_term: String,
    pub results: Vec<EntitySummaryDto>,
}

/// Result of a successful create
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i32,
    #[schema(example = "Venue The Musical Hop was successfully listed!")]
    pub message: String,
}

/// Landing document
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct IndexResponse {
    pub service: String,
    pub links: Vec<String>,
}

// ===== Venue DTOs =====

/// Venues sharing a city and state
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueGroupDto {
    #[schema(example = "San Francisco")]
    pub city: String,
    #[schema(example = "CA")]
    pub state: String,
    pub venues: Vec<EntitySummaryDto>,
}

/// Venue listing grouped by area
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueAreasResponse {
    pub areas: Vec<VenueGroupDto>,
}

/// Venue response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueDto {
    pub id: i32,
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

/// A show at a venue, seen from the venue page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueShowDto {
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Venue page: the venue plus its past and upcoming shows
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueDetailDto {
    #[serde(flatten)]
    pub venue: VenueDto,
    pub past_shows: Vec<VenueShowDto>,
    pub upcoming_shows: Vec<VenueShowDto>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Create venue request; also served blank as the new-venue form
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateVenueRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    #[serde(default)]
    pub website_link: Option<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Edit venue request. Absent fields keep their stored value; an explicit
/// `null` clears `address`, `phone` or `facebook_link`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateVenueRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub facebook_link: Option<Option<String>>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

/// Venue editor prefill
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VenueEditorDto {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    /// Shown in the editor, not accepted by the edit submission
    pub image_link: Option<String>,
    /// Shown in the editor, not accepted by the edit submission
    pub website_link: Option<String>,
}

// ===== Artist DTOs =====

/// Artist listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistsListResponse {
    pub artists: Vec<EntitySummaryDto>,
    pub total: usize,
}

/// Artist response DTO
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistDto {
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

/// A show by an artist, seen from the artist page
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistShowDto {
    pub venue_id: i32,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Artist page: the artist plus past and upcoming shows
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistDetailDto {
    #[serde(flatten)]
    pub artist: ArtistDto,
    pub past_shows: Vec<ArtistShowDto>,
    pub upcoming_shows: Vec<ArtistShowDto>,
    pub past_shows_count: usize,
    pub upcoming_shows_count: usize,
}

/// Create artist request; also served blank as the new-artist form
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateArtistRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image_link: Option<String>,
    #[serde(default)]
    pub website_link: Option<String>,
    #[serde(default)]
    pub facebook_link: Option<String>,
}

/// Edit artist request. Absent fields keep their stored value; an explicit
/// `null` clears `phone` or `facebook_link`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateArtistRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub facebook_link: Option<Option<String>>,
    #[serde(default)]
    pub genres: Option<Vec<String>>,
}

/// Artist editor prefill
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArtistEditorDto {
    pub id: i32,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: Option<String>,
    pub facebook_link: Option<String>,
    pub genres: Vec<String>,
    /// Shown in the editor, not accepted by the edit submission
    pub image_link: Option<String>,
    /// Shown in the editor, not accepted by the edit submission
    pub website_link: Option<String>,
}

// ===== Show DTOs =====

/// One entry of the show listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShowDto {
    pub id: i32,
    pub venue_id: i32,
    pub venue_name: String,
    pub artist_id: i32,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Show listing
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShowsListResponse {
    pub shows: Vec<ShowDto>,
    pub total: usize,
}

/// New-show form defaults
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ShowFormDto {
    pub artist_id: Option<i32>,
    pub venue_id: Option<i32>,
    pub start_time: NaiveDateTime,
}

/// Create show request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateShowRequest {
    pub artist_id: i32,
    pub venue_id: i32,
    /// `YYYY-MM-DDTHH:MM[:SS]` or `YYYY-MM-DD HH:MM:SS`
    #[schema(example = "2035-04-01T20:00:00")]
    pub start_time: String,
}

// Note: Conversion implementations live in mapper.rs

/// Present-but-null becomes `Some(None)`; absence is handled by `#[serde(default)]`
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
