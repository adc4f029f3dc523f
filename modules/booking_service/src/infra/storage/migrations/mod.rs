//! Database migrations for the booking service
//!
//! Shows reference venues and artists with `ON DELETE RESTRICT`: a venue or
//! artist that still has shows cannot be deleted, and shows are never
//! removed as a side effect.
//!
//! Every migration lives in this file, so names are spelled out rather than
//! derived from the file stem; they must stay unique.

use sea_orm_migration::prelude::*;
use sea_orm_migration::MigrationName;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250101_000001_create_venues::Migration),
            Box::new(m20250101_000002_create_artists::Migration),
            Box::new(m20250101_000003_create_shows::Migration),
        ]
    }
}

mod m20250101_000001_create_venues {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000001_create_venues"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Venues::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Venues::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Venues::Name).string().not_null())
                        .col(ColumnDef::new(Venues::City).string_len(120).not_null())
                        .col(ColumnDef::new(Venues::State).string_len(120).not_null())
                        .col(ColumnDef::new(Venues::Address).string_len(120))
                        .col(ColumnDef::new(Venues::Phone).string_len(120))
                        .col(ColumnDef::new(Venues::ImageLink).string_len(500))
                        .col(ColumnDef::new(Venues::WebsiteLink).string_len(500))
                        .col(ColumnDef::new(Venues::FacebookLink).string_len(120))
                        .col(ColumnDef::new(Venues::Genres).json().not_null())
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Venues::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Venues {
        Table,
        Id,
        Name,
        City,
        State,
        Address,
        Phone,
        ImageLink,
        WebsiteLink,
        FacebookLink,
        Genres,
    }
}

mod m20250101_000002_create_artists {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000002_create_artists"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Artists::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Artists::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Artists::Name).string().not_null())
                        .col(ColumnDef::new(Artists::City).string_len(120).not_null())
                        .col(ColumnDef::new(Artists::State).string_len(120).not_null())
                        .col(ColumnDef::new(Artists::Phone).string_len(120))
                        .col(ColumnDef::new(Artists::Genres).json().not_null())
                        .col(ColumnDef::new(Artists::ImageLink).string_len(500))
                        .col(ColumnDef::new(Artists::WebsiteLink).string_len(500))
                        .col(ColumnDef::new(Artists::FacebookLink).string_len(120))
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Artists::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Artists {
        Table,
        Id,
        Name,
        City,
        State,
        Phone,
        Genres,
        ImageLink,
        WebsiteLink,
        FacebookLink,
    }
}

mod m20250101_000003_create_shows {
    use super::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20250101_000003_create_shows"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Shows::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Shows::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Shows::ArtistId).integer().not_null())
                        .col(ColumnDef::new(Shows::VenueId).integer().not_null())
                        .col(ColumnDef::new(Shows::StartTime).date_time().not_null())
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_shows_artist")
                                .from(Shows::Table, Shows::ArtistId)
                                .to(Artists::Table, Artists::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_shows_venue")
                                .from(Shows::Table, Shows::VenueId)
                                .to(Venues::Table, Venues::Id)
                                .on_delete(ForeignKeyAction::Restrict)
                                .on_update(ForeignKeyAction::Cascade),
                        )
                        .to_owned(),
                )
                .await?;

            // Create indexes
            manager
                .create_index(
                    Index::create()
                        .name("idx_shows_venue_id")
                        .table(Shows::Table)
                        .col(Shows::VenueId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_shows_artist_id")
                        .table(Shows::Table)
                        .col(Shows::ArtistId)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .name("idx_shows_start_time")
                        .table(Shows::Table)
                        .col(Shows::StartTime)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Shows::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Shows {
        Table,
        Id,
        ArtistId,
        VenueId,
        StartTime,
    }

    #[derive(DeriveIden)]
    enum Artists {
        Table,
        Id,
    }

    #[derive(DeriveIden)]
    enum Venues {
        Table,
        Id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn migration_names_are_unique() {
        let migrations = Migrator::migrations();
        let names: HashSet<String> = migrations.iter().map(|m| m.name().to_string()).collect();
        assert_eq!(names.len(), migrations.len());
        assert!(names.contains("m20250101_000001_create_venues"));
    }
}
