//! GitHub Data Integration library.
//!
//! Fetches a GitHub user's profile and repositories, merges them into a single
//! [`models::UserInfo`], caches the result per username and serves it over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
