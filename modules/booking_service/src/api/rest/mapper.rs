//! Mapper implementations for converting between DTOs and contract models

use super::dto::*;
use crate::contract;

// ===== Shared conversions =====

impl From<contract::EntitySummary> for EntitySummaryDto {
    fn from(summary: contract::EntitySummary) -> Self {
        Self {
            id: summary.id,
            name: summary.name,
        }
    }
}

/// Success message of a create, as shown to the user
pub fn listed_message(kind: contract::EntityKind, name: Option<&str>) -> String {
    match name {
        Some(name) => format!("{kind} {name} was successfully listed!"),
        None => format!("{kind} was successfully listed!"),
    }
}

// ===== Venue conversions =====

impl From<contract::VenueGroup> for VenueGroupDto {
    fn from(group: contract::VenueGroup) -> Self {
        Self {
            city: group.city,
            state: group.state,
            venues: group.venues.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<contract::Venue> for VenueDto {
    fn from(venue: contract::Venue) -> Self {
        Self {
            id: venue.id,
            name: venue.name,
            city: venue.city,
            state: venue.state,
            address: venue.address,
            phone: venue.phone,
            image_link: venue.image_link,
            website_link: venue.website_link,
            facebook_link: venue.facebook_link,
            genres: venue.genres,
        }
    }
}

impl From<&contract::Venue> for EntitySummaryDto {
    fn from(venue: &contract::Venue) -> Self {
        Self {
            id: venue.id,
            name: venue.name.clone(),
        }
    }
}

impl From<contract::ShowWithArtist> for VenueShowDto {
    fn from(entry: contract::ShowWithArtist) -> Self {
        Self {
            artist_id: entry.artist.id,
            artist_name: entry.artist.name,
            artist_image_link: entry.artist.image_link,
            start_time: entry.show.start_time,
        }
    }
}

impl From<(contract::Venue, contract::PartitionedShows<contract::ShowWithArtist>)>
    for VenueDetailDto
{
    fn from(
        (venue, shows): (contract::Venue, contract::PartitionedShows<contract::ShowWithArtist>),
    ) -> Self {
        let past_shows_count = shows.past_count();
        let upcoming_shows_count = shows.upcoming_count();
        Self {
            venue: venue.into(),
            past_shows: shows.past.into_iter().map(Into::into).collect(),
            upcoming_shows: shows.upcoming.into_iter().map(Into::into).collect(),
            past_shows_count,
            upcoming_shows_count,
        }
    }
}

impl From<CreateVenueRequest> for contract::NewVenue {
    fn from(req: CreateVenueRequest) -> Self {
        Self {
            name: req.name,
            city: req.city,
            state: req.state,
            address: req.address,
            phone: req.phone,
            image_link: req.image_link,
            website_link: req.website_link,
            facebook_link: req.facebook_link,
            genres: req.genres,
        }
    }
}

impl From<UpdateVenueRequest> for contract::VenuePatch {
    fn from(req: UpdateVenueRequest) -> Self {
        Self {
            name: req.name,
            city: req.city,
            state: req.state,
            address: req.address,
            phone: req.phone,
            facebook_link: req.facebook_link,
            genres: req.genres,
        }
    }
}

impl From<contract::VenueEditor> for VenueEditorDto {
    fn from(editor: contract::VenueEditor) -> Self {
        Self {
            id: editor.id,
            name: editor.name,
            city: editor.city,
            state: editor.state,
            address: editor.address,
            phone: editor.phone,
            facebook_link: editor.facebook_link,
            genres: editor.genres,
            image_link: editor.image_link,
            website_link: editor.website_link,
        }
    }
}

// ===== Artist conversions =====

impl From<contract::Artist> for ArtistDto {
    fn from(artist: contract::Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name,
            city: artist.city,
            state: artist.state,
            phone: artist.phone,
            genres: artist.genres,
            image_link: artist.image_link,
            website_link: artist.website_link,
            facebook_link: artist.facebook_link,
        }
    }
}

impl From<&contract::Artist> for EntitySummaryDto {
    fn from(artist: &contract::Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name.clone(),
        }
    }
}

impl From<contract::ShowWithVenue> for ArtistShowDto {
    fn from(entry: contract::ShowWithVenue) -> Self {
        Self {
            venue_id: entry.venue.id,
            venue_name: entry.venue.name,
            venue_image_link: entry.venue.image_link,
            start_time: entry.show.start_time,
        }
    }
}

impl From<(contract::Artist, contract::PartitionedShows<contract::ShowWithVenue>)>
    for ArtistDetailDto
{
    fn from(
        (artist, shows): (contract::Artist, contract::PartitionedShows<contract::ShowWithVenue>),
    ) -> Self {
        let past_shows_count = shows.past_count();
        let upcoming_shows_count = shows.upcoming_count();
        Self {
            artist: artist.into(),
            past_shows: shows.past.into_iter().map(Into::into).collect(),
            upcoming_shows: shows.upcoming.into_iter().map(Into::into).collect(),
            past_shows_count,
            upcoming_shows_count,
        }
    }
}

impl From<CreateArtistRequest> for contract::NewArtist {
    fn from(req: CreateArtistRequest) -> Self {
        Self {
            name: req.name,
            city: req.city,
            state: req.state,
            phone: req.phone,
            genres: req.genres,
            image_link: req.image_link,
            website_link: req.website_link,
            facebook_link: req.facebook_link,
        }
    }
}

impl From<UpdateArtistRequest> for contract::ArtistPatch {
    fn from(req: UpdateArtistRequest) -> Self {
        Self {
            name: req.name,
            city: req.city,
            state: req.state,
            phone: req.phone,
            facebook_link: req.facebook_link,
            genres: req.genres,
        }
    }
}

impl From<contract::ArtistEditor> for ArtistEditorDto {
    fn from(editor: contract::ArtistEditor) -> Self {
        Self {
            id: editor.id,
            name: editor.name,
            city: editor.city,
            state: editor.state,
            phone: editor.phone,
            facebook_link: editor.facebook_link,
            genres: editor.genres,
            image_link: editor.image_link,
            website_link: editor.website_link,
        }
    }
}

// ===== Show conversions =====

impl From<contract::ShowListing> for ShowDto {
    fn from(listing: contract::ShowListing) -> Self {
        Self {
            id: listing.show.id,
            venue_id: listing.venue.id,
            venue_name: listing.venue.name,
            artist_id: listing.artist.id,
            artist_name: listing.artist.name,
            artist_image_link: listing.artist.image_link,
            start_time: listing.show.start_time,
        }
    }
}

impl TryFrom<CreateShowRequest> for contract::NewShow {
    type Error = contract::BookingError;

    fn try_from(req: CreateShowRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            artist_id: req.artist_id,
            venue_id: req.venue_id,
            start_time: crate::domain::validation::parse_start_time(&req.start_time)?,
        })
    }
}
