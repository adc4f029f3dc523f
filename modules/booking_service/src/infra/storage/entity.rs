//! SeaORM entities for database tables

/// Venues table entity
pub mod venue {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "venues")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub city: String,
        pub state: String,
        pub address: Option<String>,
        pub phone: Option<String>,
        pub image_link: Option<String>,
        pub website_link: Option<String>,
        pub facebook_link: Option<String>,
        /// Genre tags as a JSON array of strings
        pub genres: Json,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with shows
        #[sea_orm(has_many = "super::show::Entity")]
        Shows,
    }

    impl Related<super::show::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Shows.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Artists table entity
pub mod artist {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "artists")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub name: String,
        pub city: String,
        pub state: String,
        pub phone: Option<String>,
        /// Genre tags as a JSON array of strings
        pub genres: Json,
        pub image_link: Option<String>,
        pub website_link: Option<String>,
        pub facebook_link: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// One-to-many relationship with shows
        #[sea_orm(has_many = "super::show::Entity")]
        Shows,
    }

    impl Related<super::show::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Shows.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}

/// Shows table entity
pub mod show {
    use sea_orm::entity::prelude::*;

    #[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
    #[sea_orm(table_name = "shows")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i32,
        pub artist_id: i32,
        pub venue_id: i32,
        /// Timezone-naive start
        pub start_time: DateTime,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {
        /// Foreign key to artists
        #[sea_orm(
            belongs_to = "super::artist::Entity",
            from = "Column::ArtistId",
            to = "super::artist::Column::Id"
        )]
        Artist,
        /// Foreign key to venues
        #[sea_orm(
            belongs_to = "super::venue::Entity",
            from = "Column::VenueId",
            to = "super::venue::Column::Id"
        )]
        Venue,
    }

    impl Related<super::artist::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Artist.def()
        }
    }

    impl Related<super::venue::Entity> for Entity {
        fn to() -> RelationDef {
            Relation::Venue.def()
        }
    }

    impl ActiveModelBehavior for ActiveModel {}
}
