//! Domain layer - business logic and services

pub mod repository;
pub mod search;
pub mod service;
pub mod validation;

pub use repository::{ArtistRepository, ShowRepository, TimeWindow, VenueRepository};
pub use service::Service;
