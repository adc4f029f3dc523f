//! Common test utilities and shared booking fixtures

#![allow(dead_code)]

use booking_service::config::Config;
use booking_service::contract::{NewArtist, NewVenue};
use booking_service::BookingServiceModule;
use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Fixed reference time used as "now" by time-partition tests
pub fn boundary() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .and_then(|d| d.and_hms_opt(20, 0, 0))
        .expect("valid boundary")
}

pub fn musical_hop() -> NewVenue {
    NewVenue {
        name: "The Musical Hop".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: Some("1015 Folsom Street".to_string()),
        phone: Some("123-123-1234".to_string()),
        image_link: Some("https://images.example.com/hop.jpg".to_string()),
        website_link: Some("https://www.themusicalhop.com".to_string()),
        facebook_link: Some("https://www.facebook.com/TheMusicalHop".to_string()),
        genres: vec![
            "Jazz".to_string(),
            "Reggae".to_string(),
            "Swing".to_string(),
            "Classical".to_string(),
            "Folk".to_string(),
        ],
    }
}

pub fn dueling_pianos() -> NewVenue {
    NewVenue {
        name: "The Dueling Pianos Bar".to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        address: Some("335 Delancey Street".to_string()),
        phone: Some("914-003-1132".to_string()),
        genres: vec!["Classical".to_string(), "R&B".to_string(), "Hip-Hop".to_string()],
        ..Default::default()
    }
}

pub fn park_square() -> NewVenue {
    NewVenue {
        name: "Park Square Live Music & Coffee".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: Some("34 Whiskey Moore Ave".to_string()),
        phone: Some("415-000-1234".to_string()),
        genres: vec![
            "Rock n Roll".to_string(),
            "Jazz".to_string(),
            "Classical".to_string(),
            "Folk".to_string(),
        ],
        ..Default::default()
    }
}

pub fn guns_n_petals() -> NewArtist {
    NewArtist {
        name: "Guns N Petals".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("326-123-5000".to_string()),
        genres: vec!["Rock n Roll".to_string()],
        image_link: Some("https://images.example.com/petals.jpg".to_string()),
        website_link: Some("https://www.gunsnpetalsband.com".to_string()),
        facebook_link: Some("https://www.facebook.com/GunsNPetals".to_string()),
    }
}

pub fn matt_quevedo() -> NewArtist {
    NewArtist {
        name: "Matt Quevedo".to_string(),
        city: "New York".to_string(),
        state: "NY".to_string(),
        phone: Some("300-400-5000".to_string()),
        genres: vec!["Jazz".to_string()],
        ..Default::default()
    }
}

pub fn wild_sax_band() -> NewArtist {
    NewArtist {
        name: "The Wild Sax Band".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        phone: Some("432-325-5432".to_string()),
        genres: vec!["Jazz".to_string(), "Classical".to_string()],
        ..Default::default()
    }
}

/// Module backed by a fresh, migrated in-memory SQLite database.
///
/// A single pooled connection keeps every query on the same in-memory
/// database.
pub async fn sqlite_module() -> BookingServiceModule {
    sqlite_module_with_connection().await.0
}

/// Like [`sqlite_module`], also returning a handle on the same pool for
/// seeding rows directly
pub async fn sqlite_module_with_connection() -> (BookingServiceModule, DatabaseConnection) {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let conn = Database::connect(options)
        .await
        .expect("failed to open in-memory sqlite");

    let module = BookingServiceModule::from_connection(Config::default(), conn.clone());
    module.migrate().await.expect("migrations failed");
    (module, conn)
}
