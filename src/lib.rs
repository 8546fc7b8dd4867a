//! Client-side data access for the Photowall admin interface.

pub mod application;
pub mod config;
pub mod domain;
pub mod infra;
