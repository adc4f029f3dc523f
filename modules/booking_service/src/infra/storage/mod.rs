//! Storage layer - database entities and repositories
//!
//! Writes run in a transaction obtained from `TransactionTrait::begin`.
//! It is committed only at the end of the success path; returning early
//! drops it, and a dropped transaction rolls back.

pub mod entity;
pub mod mapper;
pub mod migrations;
pub mod repositories;
