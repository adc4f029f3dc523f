//! API layer

pub mod rest;
