//! Client for the release-counts GraphQL backend

pub mod client;
pub mod models;

pub use client::{GraphqlClient, GraphqlError};
pub use models::{ReleaseCountsReply, UniqueNames};
